//! Thin search layer over a vector-embedding index.
//!
//! The crate glues three external pieces together: an Azure OpenAI embedding
//! deployment, a Postgres table indexed with pgvector, and a caller-supplied
//! path map describing how to flatten each match. It does no similarity math
//! of its own.
//!
//! ```rust,no_run
//! use glint_search::{create_index, search, PathMap, RetrieverOptions};
//!
//! # async fn example(embedding: glint_search::EmbeddingConfig,
//! #                  store: glint_search::VectorStoreConfig) -> glint_search::Result<()> {
//! let index = create_index(embedding, store);
//! let paths = PathMap::from([
//!     ("url".to_string(), "document/metadata/url".to_string()),
//!     ("score".to_string(), "score".to_string()),
//! ]);
//! let results = search("irrigation schedules", &index,
//!     RetrieverOptions::default(), Some(&paths)).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod embeddings;
pub mod error;
pub mod index;
pub mod schema;
pub mod traits;
pub mod transform;
pub mod vectorstores;

use serde_json::Value;
use tracing::error;

pub use config::{EmbeddingConfig, VectorStoreConfig};
pub use error::Error;
pub use index::{Retriever, RetrieverOptions, VectorStoreIndex, DEFAULT_SIMILARITY_TOP_K};
pub use transform::{transform, PathMap};

pub type Result<T> = std::result::Result<T, Error>;

/// Build an index from embedding-model and vector-store configuration.
///
/// Construction is cheap and does not touch the network; configuration
/// problems surface as client errors on the first retrieval.
pub fn create_index(embedding: EmbeddingConfig, store: VectorStoreConfig) -> VectorStoreIndex {
    VectorStoreIndex::new(
        embeddings::AzureEmbedding::new(embedding),
        vectorstores::PgVectorStore::new(store),
    )
}

/// Run a similarity query and return one flat record per match.
///
/// Fails with [`Error::EmptyQuery`] when `query` is empty. Each match is
/// serialized and projected through `trans_paths`; with `None` or an empty
/// map the serialized matches are returned as-is.
pub async fn search(
    query: &str,
    index: &VectorStoreIndex,
    options: RetrieverOptions,
    trans_paths: Option<&PathMap>,
) -> Result<Vec<Value>> {
    if query.is_empty() {
        error!("empty search query received");
        return Err(Error::EmptyQuery);
    }

    let retriever = index.as_retriever(options);
    let matches = retriever.retrieve(query).await?;
    matches
        .into_iter()
        .map(|scored| transform(serde_json::to_value(&scored)?, trans_paths))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embeddings::MockEmbeddings;
    use crate::schema::{Document, ScoredDocument};
    use crate::traits::VectorStore;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Test store that returns canned matches and records the requested top_k
    struct StaticStore {
        matches: Vec<ScoredDocument>,
        requested_top_k: Arc<Mutex<Option<usize>>>,
    }

    #[async_trait]
    impl VectorStore for StaticStore {
        async fn query(&self, _embedding: &[f32], top_k: usize) -> Result<Vec<ScoredDocument>> {
            *self.requested_top_k.lock().unwrap() = Some(top_k);
            Ok(self.matches.iter().take(top_k).cloned().collect())
        }
    }

    fn scored_page(id: &str, url: &str, score: f32) -> ScoredDocument {
        ScoredDocument::new(
            Document::new(id, format!("content of {id}")).with_metadata("url", url),
            score,
        )
    }

    fn test_index(matches: Vec<ScoredDocument>) -> (VectorStoreIndex, Arc<Mutex<Option<usize>>>) {
        let requested_top_k = Arc::new(Mutex::new(None));
        let store = StaticStore {
            matches,
            requested_top_k: Arc::clone(&requested_top_k),
        };
        (
            VectorStoreIndex::new(MockEmbeddings::new(8), store),
            requested_top_k,
        )
    }

    #[tokio::test]
    async fn test_search_with_empty_query_error() {
        let (index, _) = test_index(vec![]);
        let err = search("", &index, RetrieverOptions::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EmptyQuery));
    }

    #[tokio::test]
    async fn test_search_transforms_every_match() {
        let matches = (0..10)
            .map(|i| scored_page(&format!("{i}"), &format!("https://example.com/{i}"), 1.0))
            .collect();
        let (index, requested_top_k) = test_index(matches);

        let paths = PathMap::from([
            ("id".to_string(), "document/id".to_string()),
            ("url".to_string(), "document/metadata/url".to_string()),
            ("score".to_string(), "score".to_string()),
        ]);
        let options = RetrieverOptions { similarity_top_k: 5 };
        let results = search("test query", &index, options, Some(&paths))
            .await
            .unwrap();

        assert_eq!(*requested_top_k.lock().unwrap(), Some(5));
        assert_eq!(results.len(), 5);
        for result in &results {
            let record = result.as_object().unwrap();
            assert_eq!(record.len(), paths.len());
            for key in paths.keys() {
                assert!(record.contains_key(key));
            }
        }
    }

    #[tokio::test]
    async fn test_search_without_paths_returns_full_records() {
        let (index, _) = test_index(vec![scored_page("1", "https://example.com", 0.9)]);
        let results = search("test query", &index, RetrieverOptions::default(), None)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["document"]["id"], "1");
        assert_eq!(results[0]["document"]["metadata"]["url"], "https://example.com");
    }
}
