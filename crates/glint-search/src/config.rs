use serde::Deserialize;

fn default_api_version() -> String {
    "2023-05-15".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_schema() -> String {
    "public".to_string()
}

fn default_embed_dim() -> usize {
    1536
}

/// Connection parameters for an Azure OpenAI embedding deployment
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingConfig {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,

    /// API key for the resource
    pub api_key: String,

    /// REST API version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Name of the embedding deployment
    pub deployment: String,
}

/// Connection parameters for a Postgres database with the pgvector extension
#[derive(Debug, Clone, Deserialize)]
pub struct VectorStoreConfig {
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    pub database: String,

    pub user: String,

    pub password: String,

    #[serde(default = "default_schema")]
    pub schema: String,

    /// Table holding `id`, `content`, `metadata` and `embedding` columns
    pub table_name: String,

    /// Dimension of the stored embedding vectors
    #[serde(default = "default_embed_dim")]
    pub embed_dim: usize,
}

impl VectorStoreConfig {
    /// Render the parameters as a libpq-style connection string
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} dbname={} user={} password={}",
            self.host, self.port, self.database, self.user, self.password
        )
    }
}
