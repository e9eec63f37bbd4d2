use serde::de::DeserializeOwned;

use crate::document::Document;
use crate::error::FixtureError;

/// FixtureSource hands out raw documents, one per named collection.
///
/// Sources are read-only: they are populated once at construction and
/// never change afterwards. The inventory store decodes each collection
/// it knows about and ignores the rest.
pub trait FixtureSource: Send + Sync {
    /// Get the document for a collection. Returns None if the source
    /// has no such collection.
    fn document(&self, collection: &str) -> Option<&Document>;

    /// Names of all collections the source holds, sorted.
    fn collections(&self) -> Vec<&str>;

    /// Short description for logs (e.g. the directory path).
    fn describe(&self) -> String;
}

/// Decode one collection from a source. A missing collection is empty.
pub fn load_collection<T: DeserializeOwned>(
    source: &dyn FixtureSource,
    collection: &str,
) -> Result<Vec<T>, FixtureError> {
    match source.document(collection) {
        Some(doc) => doc.decode(),
        None => Ok(Vec::new()),
    }
}
