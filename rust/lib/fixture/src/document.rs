use serde::de::DeserializeOwned;

use crate::error::FixtureError;
use crate::format::Format;

/// One raw fixture document holding a single collection.
///
/// TOML documents hold an array of tables named after the collection:
///
/// ```toml
/// [[devices]]
/// id = "DEV001"
/// ```
///
/// JSON documents hold either a bare array or an object keyed by the
/// collection name.
#[derive(Debug, Clone)]
pub struct Document {
    /// Collection name, e.g. `devices`.
    pub collection: String,
    pub format: Format,
    /// Where the document came from (a file path or `builtin:<name>`).
    pub origin: String,
    pub body: String,
}

impl Document {
    pub fn new(
        collection: impl Into<String>,
        format: Format,
        origin: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            format,
            origin: origin.into(),
            body: body.into(),
        }
    }

    /// Decode the document's records. A document without the collection
    /// key decodes to an empty list.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Vec<T>, FixtureError> {
        match self.format {
            Format::Toml => self.decode_toml(),
            Format::Json => self.decode_json(),
        }
    }

    fn decode_toml<T: DeserializeOwned>(&self) -> Result<Vec<T>, FixtureError> {
        let mut table: toml::Table = toml::from_str(&self.body).map_err(|e| self.parse_error(e))?;
        match table.remove(&self.collection) {
            Some(value) => value.try_into().map_err(|e| self.parse_error(e)),
            None => Ok(Vec::new()),
        }
    }

    fn decode_json<T: DeserializeOwned>(&self) -> Result<Vec<T>, FixtureError> {
        let value: serde_json::Value =
            serde_json::from_str(&self.body).map_err(|e| self.parse_error(e))?;
        let records = match value {
            serde_json::Value::Array(_) => value,
            serde_json::Value::Object(mut obj) => match obj.remove(&self.collection) {
                Some(v) => v,
                None => return Ok(Vec::new()),
            },
            _ => {
                return Err(self.parse_error(format!(
                    "expected an array or an object with key \"{}\"",
                    self.collection
                )));
            }
        };
        serde_json::from_value(records).map_err(|e| self.parse_error(e))
    }

    fn parse_error(&self, e: impl std::fmt::Display) -> FixtureError {
        FixtureError::Parse {
            origin: self.origin.clone(),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
        count: u32,
    }

    #[test]
    fn decode_toml_array_of_tables() {
        let doc = Document::new(
            "rows",
            Format::Toml,
            "rows.toml",
            "[[rows]]\nid = \"a\"\ncount = 1\n\n[[rows]]\nid = \"b\"\ncount = 2\n",
        );
        let rows: Vec<Row> = doc.decode().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], Row { id: "b".into(), count: 2 });
    }

    #[test]
    fn decode_json_bare_array_and_keyed_object() {
        let bare = Document::new("rows", Format::Json, "rows.json", r#"[{"id":"a","count":1}]"#);
        let keyed = Document::new(
            "rows",
            Format::Json,
            "rows.json",
            r#"{"rows":[{"id":"a","count":1}]}"#,
        );
        let a: Vec<Row> = bare.decode().unwrap();
        let b: Vec<Row> = keyed.decode().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_key_is_empty() {
        let doc = Document::new("rows", Format::Toml, "rows.toml", "[[other]]\nid = \"x\"\n");
        let rows: Vec<Row> = doc.decode().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn parse_error_names_origin() {
        let doc = Document::new("rows", Format::Json, "data/rows.json", "42");
        let err = doc.decode::<Row>().unwrap_err();
        assert!(err.to_string().contains("data/rows.json"));

        let doc = Document::new("rows", Format::Toml, "rows.toml", "[[rows]]\nid = 3\n");
        assert!(matches!(doc.decode::<Row>(), Err(FixtureError::Parse { .. })));
    }
}
