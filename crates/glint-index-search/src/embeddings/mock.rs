use async_trait::async_trait;
use std::collections::HashMap;

use crate::traits::EmbeddingModel;
use crate::Result;

/// A mock embeddings model for testing
pub struct MockEmbeddings {
    dimension: usize,
    embeddings: HashMap<String, Vec<f32>>,
}

impl Default for MockEmbeddings {
    fn default() -> Self {
        Self::new(4)
    }
}

impl MockEmbeddings {
    /// Create a new mock embeddings model
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            embeddings: HashMap::new(),
        }
    }

    /// Add a pre-defined embedding for a text
    pub fn with_embedding(mut self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        if embedding.len() != self.dimension {
            panic!(
                "Embedding dimension {} doesn't match expected dimension {}",
                embedding.len(),
                self.dimension
            );
        }
        self.embeddings.insert(text.into(), embedding);
        self
    }

    /// Generate a deterministic embedding from text
    fn generate_embedding(&self, text: &str) -> Vec<f32> {
        let mut result = vec![0.0; self.dimension];
        for (i, c) in text.chars().enumerate() {
            result[i % self.dimension] += (c as u32 % 100) as f32 / 100.0;
        }

        let magnitude: f32 = result.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for val in &mut result {
                *val /= magnitude;
            }
        }

        result
    }
}

#[async_trait]
impl EmbeddingModel for MockEmbeddings {
    fn model_name(&self) -> &str {
        "mock-embeddings"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if let Some(embedding) = self.embeddings.get(text) {
            return Ok(embedding.clone());
        }
        Ok(self.generate_embedding(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_embeddings_are_deterministic() {
        let model = MockEmbeddings::new(8);
        let a = model.embed("food safety").await.unwrap();
        let b = model.embed("food safety").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[tokio::test]
    async fn test_mock_embeddings_predefined_vector() {
        let model = MockEmbeddings::new(2).with_embedding("hello", vec![1.0, 0.0]);
        assert_eq!(model.embed("hello").await.unwrap(), vec![1.0, 0.0]);
    }
}
