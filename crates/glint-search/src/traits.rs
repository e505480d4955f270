use async_trait::async_trait;

use crate::schema::ScoredDocument;
use crate::Result;

/// Trait for embedding models (text to vector).
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Get the model name/identifier.
    fn model_name(&self) -> &str;

    /// Embed a single text into a vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Trait for vector stores that can be queried by similarity.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Return the `top_k` most similar documents for the given embedding,
    /// ranked best-first.
    async fn query(&self, embedding: &[f32], top_k: usize) -> Result<Vec<ScoredDocument>>;
}
