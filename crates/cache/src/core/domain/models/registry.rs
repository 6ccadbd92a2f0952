use std::sync::Arc;

use dashmap::{DashMap, Entry};

use crate::core::domain::services::StoreClient;

/// One store client handle per physical node, keyed by node address.
pub struct StoreRegistry {
    clients: DashMap<Arc<str>, Arc<dyn StoreClient>>,
}

impl StoreRegistry {
    #[inline]
    pub fn new() -> Self {
        Self {
            clients: DashMap::new(),
        }
    }

    #[inline]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Registers the handle unless the node already has one.
    pub fn insert(&self, node_id: &str, client: Arc<dyn StoreClient>) -> bool {
        match self.clients.entry(Arc::<str>::from(node_id)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(v) => {
                v.insert(client);
                true
            }
        }
    }

    pub fn remove(&self, node_id: &str) -> Option<Arc<dyn StoreClient>> {
        self.clients.remove(node_id).map(|(_, client)| client)
    }

    pub fn get(&self, node_id: &str) -> Option<Arc<dyn StoreClient>> {
        self.clients.get(node_id).map(|r| r.value().clone())
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.clients.contains_key(node_id)
    }

    pub fn node_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.clients.iter().map(|e| e.key().to_string()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for StoreRegistry {
    fn default() -> Self {
        Self::new()
    }
}
