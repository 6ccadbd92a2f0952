use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::core::domain::{
    models::CacheError,
    services::{StoreClient, StoreConnector},
};

/// In-process key-value store standing in for one cache node.
pub struct MemoryStoreClient {
    address: Arc<str>,
    entries: DashMap<String, String>,
}

impl MemoryStoreClient {
    pub fn new(address: &str) -> Self {
        Self {
            address: Arc::from(address),
            entries: DashMap::new(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl StoreClient for MemoryStoreClient {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Hands out one [`MemoryStoreClient`] per address. Reconnecting to an
/// address returns the same store, so its data survives a remove/add cycle
/// like a real server would.
#[derive(Default)]
pub struct MemoryStoreConnector {
    stores: DashMap<Arc<str>, Arc<MemoryStoreClient>>,
}

impl MemoryStoreConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn store(&self, address: &str) -> Option<Arc<MemoryStoreClient>> {
        self.stores.get(address).map(|r| r.value().clone())
    }
}

impl StoreConnector for MemoryStoreConnector {
    fn connect(&self, address: &str) -> Result<Arc<dyn StoreClient>, CacheError> {
        let store: Arc<dyn StoreClient> = self
            .stores
            .entry(Arc::<str>::from(address))
            .or_insert_with(|| Arc::new(MemoryStoreClient::new(address)))
            .value()
            .clone();

        Ok(store)
    }
}
