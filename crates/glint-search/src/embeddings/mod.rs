pub mod azure;
pub mod mock;

pub use azure::AzureEmbedding;
pub use mock::MockEmbeddings;
