use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::EmbeddingConfig;
use crate::error::Error;
use crate::traits::EmbeddingModel;
use crate::Result;

#[derive(Debug, Clone, Serialize)]
struct AzureEmbeddingRequest {
    input: String,
}

#[derive(Debug, Clone, Deserialize)]
struct AzureEmbeddingResponse {
    data: Vec<AzureEmbeddingData>,
}

#[derive(Debug, Clone, Deserialize)]
struct AzureEmbeddingData {
    embedding: Vec<f32>,
}

/// Azure OpenAI embeddings model implementation
pub struct AzureEmbedding {
    config: EmbeddingConfig,
    client: reqwest::Client,
}

impl AzureEmbedding {
    /// Create a new Azure OpenAI embeddings client
    pub fn new(config: EmbeddingConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn embeddings_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/embeddings?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            self.config.api_version
        )
    }
}

#[async_trait]
impl EmbeddingModel for AzureEmbedding {
    fn model_name(&self) -> &str {
        &self.config.deployment
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = AzureEmbeddingRequest {
            input: text.to_string(),
        };

        let res = self
            .client
            .post(self.embeddings_url())
            .header("api-key", self.config.api_key.as_str())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let error_text = res.text().await.unwrap_or_default();
            return Err(Error::Embedding(format!(
                "embeddings API error: {} - {}",
                status, error_text
            )));
        }

        let response: AzureEmbeddingResponse = res.json().await?;

        match response.data.into_iter().next() {
            Some(data) => Ok(data.embedding),
            None => Err(Error::Embedding("no embeddings returned".to_string())),
        }
    }
}
