pub mod document;
pub mod error;
pub mod file_loader;
pub mod format;
pub mod static_source;
pub mod traits;

pub use document::Document;
pub use error::FixtureError;
pub use file_loader::{DirectorySource, FileLoader};
pub use format::Format;
pub use static_source::StaticSource;
pub use traits::{FixtureSource, load_collection};
