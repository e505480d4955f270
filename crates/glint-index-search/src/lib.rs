//! Search layer over a vector-embedding index, deduplicating matches by URL.
//!
//! Successor to `glint-search` for web-page knowledge bases: several chunks
//! of the same page can rank for one query, so retrieval over-fetches twice
//! the requested count and keeps only the highest-scoring match per `url`
//! metadata value. The external pieces are unchanged: an Azure OpenAI
//! embedding deployment, a Postgres table indexed with pgvector, and a
//! caller-supplied path map flattening each match.
//!
//! ```rust,no_run
//! use glint_index_search::{create_index, search, PathMap};
//!
//! # async fn example(embedding: glint_index_search::EmbeddingConfig,
//! #                  store: glint_index_search::VectorStoreConfig)
//! # -> glint_index_search::Result<()> {
//! let index = create_index(embedding, store);
//! let paths = PathMap::from([
//!     ("url".to_string(), "document/metadata/url".to_string()),
//!     ("score".to_string(), "score".to_string()),
//! ]);
//! let results = search("irrigation schedules", &index, 10, Some(&paths)).await?;
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
pub use index::{Retriever, VectorStoreIndex};
pub use transform::{transform, PathMap};

use schema::ScoredDocument;

pub type Result<T> = std::result::Result<T, Error>;

/// Default number of deduplicated matches requested per query
pub const DEFAULT_SIMILARITY_TOP_K: usize = 10;

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

/// Keep one match per distinct `url` metadata value.
///
/// A candidate replaces the kept match for its URL only with a strictly
/// greater score, so the first-seen match wins ties. Output order is the
/// first-occurrence order of each URL's winning entry. Fails with
/// [`Error::MissingUrl`] when a match has no string `url` in its metadata.
pub fn select_highest_scored_by_url(
    matches: Vec<ScoredDocument>,
) -> Result<Vec<ScoredDocument>> {
    let mut best: Vec<(String, ScoredDocument)> = Vec::new();
    for candidate in matches {
        let url = candidate
            .document
            .url()
            .ok_or(Error::MissingUrl)?
            .to_string();
        match best.iter().position(|(seen, _)| *seen == url) {
            Some(i) => {
                if best[i].1.score < candidate.score {
                    best[i].1 = candidate;
                }
            }
            None => best.push((url, candidate)),
        }
    }
    Ok(best.into_iter().map(|(_, scored)| scored).collect())
}

/// Run a similarity query and return one flat record per distinct URL.
///
/// Fails with [`Error::EmptyQuery`] when `query` is empty. The retriever
/// requests `similarity_top_k * 2` matches before deduplication. Each kept
/// match is serialized and projected through `trans_paths`; with `None` or
/// an empty map the serialized matches are returned as-is.
pub async fn search(
    query: &str,
    index: &VectorStoreIndex,
    similarity_top_k: usize,
    trans_paths: Option<&PathMap>,
) -> Result<Vec<Value>> {
    if query.is_empty() {
        error!("empty search query received");
        return Err(Error::EmptyQuery);
    }

    let retriever = index.as_retriever(similarity_top_k * 2);
    let matches = retriever.retrieve(query).await?;
    let best = select_highest_scored_by_url(matches)?;
    best.into_iter()
        .map(|scored| transform(serde_json::to_value(&scored)?, trans_paths))
        .collect()
}
