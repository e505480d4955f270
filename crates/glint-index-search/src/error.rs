use thiserror::Error;

/// Error type for glint-index-search
#[derive(Error, Debug)]
pub enum Error {
    /// The search query was empty
    #[error("search query cannot be empty")]
    EmptyQuery,

    /// A projection path did not resolve inside the record
    #[error("no value at path `{0}`")]
    PathNotFound(String),

    /// A match is missing the `url` metadata field used for deduplication
    #[error("match metadata has no `url` field")]
    MissingUrl,

    /// Embedding API returned an unusable response
    #[error("embedding error: {0}")]
    Embedding(String),

    /// HTTP request error
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// JSON serialization or deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
