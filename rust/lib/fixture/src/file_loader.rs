use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::document::Document;
use crate::error::FixtureError;
use crate::format::Format;
use crate::traits::FixtureSource;

/// FileLoader scans a data directory and builds a read-only
/// [`DirectorySource`]. The file stem names the collection:
///
/// ```text
/// data-dir/
/// ├── devices.toml      → devices
/// ├── tickets.json      → tickets
/// ├── activities.toml   → activities
/// ├── scripts.toml      → scripts
/// ├── executions.toml   → executions
/// └── policies.json     → policies
/// ```
///
/// Files with other extensions are skipped. Subdirectories are not
/// descended into.
pub struct FileLoader;

impl FileLoader {
    /// Load every fixture file in `data_dir`.
    pub fn load(data_dir: &Path) -> Result<DirectorySource, FixtureError> {
        if !data_dir.is_dir() {
            return Err(FixtureError::MissingDirectory(data_dir.display().to_string()));
        }

        let mut documents: BTreeMap<String, Document> = BTreeMap::new();
        let entries = fs::read_dir(data_dir).map_err(|e| FixtureError::Io(e.to_string()))?;

        for entry in entries {
            let entry = entry.map_err(|e| FixtureError::Io(e.to_string()))?;
            let path = entry.path();
            if path.is_dir() {
                warn!("FileLoader: skipping subdirectory {:?}", path);
                continue;
            }
            let Some(format) = Format::from_path(&path) else {
                debug!("FileLoader: {:?} is not a fixture file, skipping", path);
                continue;
            };

            let collection = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string();
            if collection.is_empty() {
                continue;
            }

            let body = fs::read_to_string(&path).map_err(|e| FixtureError::Io(e.to_string()))?;
            let origin = path.display().to_string();

            if let Some(existing) = documents.get(&collection) {
                return Err(FixtureError::DuplicateCollection {
                    collection,
                    first: existing.origin.clone(),
                    second: origin,
                });
            }

            debug!("FileLoader: {} ← {}", collection, origin);
            documents.insert(
                collection.clone(),
                Document::new(collection, format, origin, body),
            );
        }

        debug!(
            "FileLoader: loaded {} collections from {:?}",
            documents.len(),
            data_dir
        );
        Ok(DirectorySource {
            root: data_dir.to_path_buf(),
            documents,
        })
    }
}

/// Fixture documents read from a data directory.
pub struct DirectorySource {
    root: PathBuf,
    documents: BTreeMap<String, Document>,
}

impl DirectorySource {
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FixtureSource for DirectorySource {
    fn document(&self, collection: &str) -> Option<&Document> {
        self.documents.get(collection)
    }

    fn collections(&self) -> Vec<&str> {
        self.documents.keys().map(String::as_str).collect()
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
