use std::sync::Arc;
use tracing::debug;

use crate::schema::ScoredDocument;
use crate::traits::{EmbeddingModel, VectorStore};
use crate::Result;

/// Default number of matches requested from the retriever
pub const DEFAULT_SIMILARITY_TOP_K: usize = 10;

/// Tunable parameters for a [`Retriever`]
#[derive(Debug, Clone, Copy)]
pub struct RetrieverOptions {
    /// Number of matches to request from the vector store
    pub similarity_top_k: usize,
}

impl Default for RetrieverOptions {
    fn default() -> Self {
        Self {
            similarity_top_k: DEFAULT_SIMILARITY_TOP_K,
        }
    }
}

/// Facade pairing an embedding model with a vector store
pub struct VectorStoreIndex {
    embed_model: Arc<dyn EmbeddingModel>,
    vector_store: Arc<dyn VectorStore>,
}

impl VectorStoreIndex {
    /// Create an index over the given embedding model and vector store
    pub fn new(
        embed_model: impl EmbeddingModel + 'static,
        vector_store: impl VectorStore + 'static,
    ) -> Self {
        Self {
            embed_model: Arc::new(embed_model),
            vector_store: Arc::new(vector_store),
        }
    }

    /// Build a retriever over this index
    pub fn as_retriever(&self, options: RetrieverOptions) -> Retriever {
        Retriever {
            embed_model: Arc::clone(&self.embed_model),
            vector_store: Arc::clone(&self.vector_store),
            similarity_top_k: options.similarity_top_k,
        }
    }
}

/// Executes similarity queries against a [`VectorStoreIndex`]
pub struct Retriever {
    embed_model: Arc<dyn EmbeddingModel>,
    vector_store: Arc<dyn VectorStore>,
    similarity_top_k: usize,
}

impl Retriever {
    /// Embed the query and return the ranked matches from the store
    pub async fn retrieve(&self, query: &str) -> Result<Vec<ScoredDocument>> {
        let embedding = self.embed_model.embed(query).await?;
        let matches = self
            .vector_store
            .query(&embedding, self.similarity_top_k)
            .await?;
        debug!(
            "retrieved {} matches with {}",
            matches.len(),
            self.embed_model.model_name()
        );
        Ok(matches)
    }
}
