use async_trait::async_trait;
use std::collections::HashMap;
use tokio_postgres::types::Type;
use tokio_postgres::NoTls;
use tracing::{debug, warn};

use crate::config::VectorStoreConfig;
use crate::schema::{Document, ScoredDocument};
use crate::traits::VectorStore;
use crate::Result;

/// A vector store backed by Postgres with the pgvector extension.
///
/// Each query opens its own connection; nothing is pooled or kept open
/// between calls. Similarity is cosine, via the `<=>` distance operator.
pub struct PgVectorStore {
    config: VectorStoreConfig,
}

impl PgVectorStore {
    /// Create a new store from connection parameters
    pub fn new(config: VectorStoreConfig) -> Self {
        Self { config }
    }
}

/// Render an embedding as a pgvector text literal, e.g. `[0.1,0.2]`
fn vector_literal(embedding: &[f32]) -> String {
    let mut literal = String::with_capacity(embedding.len() * 10 + 2);
    literal.push('[');
    for (i, value) in embedding.iter().enumerate() {
        if i > 0 {
            literal.push(',');
        }
        literal.push_str(&value.to_string());
    }
    literal.push(']');
    literal
}

#[async_trait]
impl VectorStore for PgVectorStore {
    async fn query(&self, embedding: &[f32], top_k: usize) -> Result<Vec<ScoredDocument>> {
        let (client, connection) =
            tokio_postgres::connect(&self.config.connection_string(), NoTls).await?;

        // Drive the connection future until the client is dropped
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!("postgres connection error: {e}");
            }
        });

        let sql = format!(
            "SELECT id, content, metadata, \
             (1 - (embedding <=> $1::vector({dim})))::real AS score \
             FROM {schema}.{table} \
             ORDER BY embedding <=> $1::vector({dim}) \
             LIMIT $2",
            dim = self.config.embed_dim,
            schema = self.config.schema,
            table = self.config.table_name,
        );

        // Declare $1 as text; the cast to vector happens server-side
        let statement = client
            .prepare_typed(&sql, &[Type::TEXT, Type::INT8])
            .await?;
        let literal = vector_literal(embedding);
        let rows = client
            .query(&statement, &[&literal, &(top_k as i64)])
            .await?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let metadata = match row.try_get::<_, Option<serde_json::Value>>("metadata")? {
                Some(serde_json::Value::Object(map)) => map.into_iter().collect(),
                _ => HashMap::new(),
            };
            documents.push(ScoredDocument {
                document: Document {
                    id: row.try_get("id")?,
                    page_content: row.try_get("content")?,
                    metadata,
                },
                score: row.try_get("score")?,
            });
        }

        debug!("vector query returned {} rows", documents.len());
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_literal() {
        assert_eq!(vector_literal(&[]), "[]");
        assert_eq!(vector_literal(&[1.0]), "[1]");
        assert_eq!(vector_literal(&[0.5, -0.25, 2.0]), "[0.5,-0.25,2]");
    }
}
