use std::collections::BTreeMap;

use crate::document::Document;
use crate::format::Format;
use crate::traits::FixtureSource;

/// StaticSource serves documents compiled into the binary, typically
/// via `include_str!`.
pub struct StaticSource {
    name: String,
    documents: BTreeMap<String, Document>,
}

impl StaticSource {
    /// Build a source from `(collection, format, body)` triples. A later
    /// entry for the same collection replaces an earlier one.
    pub fn new(name: &str, entries: &[(&str, Format, &str)]) -> Self {
        let documents = entries
            .iter()
            .map(|(collection, format, body)| {
                let origin = format!("{}:{}.{}", name, collection, format.as_str());
                (
                    collection.to_string(),
                    Document::new(*collection, *format, origin, *body),
                )
            })
            .collect();
        Self {
            name: name.to_string(),
            documents,
        }
    }
}

impl FixtureSource for StaticSource {
    fn document(&self, collection: &str) -> Option<&Document> {
        self.documents.get(collection)
    }

    fn collections(&self) -> Vec<&str> {
        self.documents.keys().map(String::as_str).collect()
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
