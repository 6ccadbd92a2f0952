use std::sync::Arc;

use async_trait::async_trait;

use crate::core::domain::models::CacheError;

#[async_trait]
pub trait StoreClient: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// Builds the store client for a node address.
pub trait StoreConnector: Send + Sync {
    fn connect(&self, address: &str) -> Result<Arc<dyn StoreClient>, CacheError>;
}
