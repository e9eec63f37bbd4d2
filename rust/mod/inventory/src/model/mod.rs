/// Declare a closed label enum with an `Unknown(String)` fallback.
///
/// The generated type (de)serializes as its display label. Labels
/// outside the known set deserialize into `Unknown` and serialize back
/// verbatim, so fixture data never fails to load over a new status.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A label outside the known set, kept verbatim.
            Unknown(String),
        }

        impl $name {
            /// Every known variant, in display order.
            pub const KNOWN: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $label, )+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }

            /// Parse a display label. Never fails: unrecognised labels
            /// become `Unknown`.
            pub fn from_label(s: &str) -> Self {
                match s {
                    $( $label => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $( $label => Self::$variant, )+
                    _ => Self::Unknown(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_label(s)
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                match v {
                    $name::Unknown(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

mod activity;
mod device;
mod policy;
mod script;
mod ticket;

pub use activity::*;
pub use device::*;
pub use policy::*;
pub use script::*;
pub use ticket::*;
