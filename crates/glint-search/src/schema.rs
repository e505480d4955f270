use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Document represents a retrieved piece of text and associated metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Row identifier assigned by the vector store
    pub id: String,

    /// The document's content
    pub page_content: String,

    /// Metadata associated with the document
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Create a new document with the given id and content
    pub fn new(id: impl Into<String>, page_content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            page_content: page_content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry to the document
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A document paired with its similarity score for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// The retrieved document
    pub document: Document,

    /// Relevance score, higher is more similar
    pub score: f32,
}

impl ScoredDocument {
    /// Create a new scored document
    pub fn new(document: Document, score: f32) -> Self {
        Self { document, score }
    }
}
