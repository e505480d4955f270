//! Example: end-to-end search with per-URL deduplication.
//! Run with: cargo run --example semantic_search -- "your query"

use std::env;

use glint_index_search::{
    create_index, search, EmbeddingConfig, PathMap, Result, VectorStoreConfig,
    DEFAULT_SIMILARITY_TOP_K,
};

fn required(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("{name} must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let query = env::args()
        .nth(1)
        .unwrap_or_else(|| "sampling procedures for food safety".to_string());

    let embedding = EmbeddingConfig {
        endpoint: required("AZURE_OPENAI_ENDPOINT"),
        api_key: required("AZURE_OPENAI_API_KEY"),
        api_version: "2023-05-15".to_string(),
        deployment: required("AZURE_OPENAI_DEPLOYMENT"),
    };
    let store = VectorStoreConfig {
        host: required("PGVECTOR_HOST"),
        port: 5432,
        database: required("PGVECTOR_DATABASE"),
        user: required("PGVECTOR_USER"),
        password: required("PGVECTOR_PASSWORD"),
        schema: "public".to_string(),
        table_name: required("PGVECTOR_TABLE"),
        embed_dim: 1536,
    };

    let index = create_index(embedding, store);
    let paths = PathMap::from([
        ("url".to_string(), "document/metadata/url".to_string()),
        ("title".to_string(), "document/metadata/title".to_string()),
        ("score".to_string(), "score".to_string()),
    ]);

    let results = search(&query, &index, DEFAULT_SIMILARITY_TOP_K, Some(&paths)).await?;

    println!("{} results:", results.len());
    for result in results {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
