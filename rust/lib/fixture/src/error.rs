use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixture directory not found: {0}")]
    MissingDirectory(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("failed to parse {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("collection {collection} is defined twice: {first} and {second}")]
    DuplicateCollection {
        collection: String,
        first: String,
        second: String,
    },
}
