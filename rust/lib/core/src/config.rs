use std::path::{Path, PathBuf};

/// Where the fixture store is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureLocation {
    /// The sample dataset compiled into the binary.
    Builtin,
    /// A directory of `devices.toml`, `tickets.json`, ... files.
    Directory(PathBuf),
}

/// Library-level configuration shared by every front end.
///
/// Front ends fill this from their own flags and config files, then
/// hand it to the inventory loader.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Directory containing fixture files (TOML/JSON).
    /// When unset, the built-in sample dataset is used.
    pub data_dir: Option<PathBuf>,

    /// Default page size for list views.
    pub page_size: Option<usize>,
}

impl ServiceConfig {
    /// Config that reads fixtures from `dir`.
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: Some(dir.as_ref().to_path_buf()),
            ..Default::default()
        }
    }

    /// Resolve where fixtures come from. An empty path counts as unset.
    pub fn fixture_location(&self) -> FixtureLocation {
        match &self.data_dir {
            Some(dir) if !dir.as_os_str().is_empty() => FixtureLocation::Directory(dir.clone()),
            _ => FixtureLocation::Builtin,
        }
    }
}
