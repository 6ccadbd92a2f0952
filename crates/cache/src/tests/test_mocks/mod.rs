use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::domain::{
    models::CacheError,
    services::{NodeFinder, StoreClient, StoreConnector},
};

pub struct MockNodeFinder {
    pub node_for_key: Mutex<Option<String>>,
    pub add_node_result: Mutex<bool>,
    pub remove_node_result: Mutex<bool>,
    pub contains_result: Mutex<bool>,
    pub vnodes: usize,

    pub last_find: Mutex<Option<String>>,
    pub last_add_node: Mutex<Option<String>>,
    pub last_remove_node: Mutex<Option<String>>,
}

impl MockNodeFinder {
    pub fn new() -> Self {
        Self {
            node_for_key: Mutex::new(None),
            add_node_result: Mutex::new(true),
            remove_node_result: Mutex::new(true),
            contains_result: Mutex::new(false),
            vnodes: 3,
            last_find: Mutex::new(None),
            last_add_node: Mutex::new(None),
            last_remove_node: Mutex::new(None),
        }
    }

    pub fn routing_to(node_id: &str) -> Self {
        let finder = Self::new();
        finder.set_node_for_key(Some(node_id));
        finder
    }

    pub fn set_node_for_key(&self, node_id: Option<&str>) {
        *self.node_for_key.lock() = node_id.map(|s| s.to_string());
    }

    pub fn set_add_node_result(&self, result: bool) {
        *self.add_node_result.lock() = result;
    }

    pub fn set_remove_node_result(&self, result: bool) {
        *self.remove_node_result.lock() = result;
    }

    pub fn set_contains_result(&self, result: bool) {
        *self.contains_result.lock() = result;
    }
}

impl NodeFinder for MockNodeFinder {
    fn add_node(&self, node_id: &str) -> bool {
        *self.last_add_node.lock() = Some(node_id.to_string());
        *self.add_node_result.lock()
    }

    fn remove_node(&self, node_id: &str) -> bool {
        *self.last_remove_node.lock() = Some(node_id.to_string());
        *self.remove_node_result.lock()
    }

    fn contains_node(&self, _node_id: &str) -> bool {
        *self.contains_result.lock()
    }

    fn vnode_count(&self, _node_id: &str) -> usize {
        self.vnodes
    }

    fn find_node(&self, key: &str) -> Option<String> {
        *self.last_find.lock() = Some(key.to_string());
        self.node_for_key.lock().clone()
    }
}

pub struct MockStore {
    pub get_result: Mutex<Result<Option<String>, CacheError>>,
    pub set_result: Mutex<Result<(), CacheError>>,

    pub last_get: Mutex<Option<String>>,
    pub last_set: Mutex<Option<(String, String)>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            get_result: Mutex::new(Ok(None)),
            set_result: Mutex::new(Ok(())),
            last_get: Mutex::new(None),
            last_set: Mutex::new(None),
        }
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn set_get_result(&self, result: Result<Option<String>, CacheError>) {
        *self.get_result.lock() = result;
    }

    pub fn set_set_result(&self, result: Result<(), CacheError>) {
        *self.set_result.lock() = result;
    }
}

#[async_trait]
impl StoreClient for MockStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        *self.last_get.lock() = Some(key.to_string());
        self.get_result.lock().clone()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        *self.last_set.lock() = Some((key.to_string(), value.to_string()));
        self.set_result.lock().clone()
    }
}

pub struct MockConnector {
    pub store: Arc<MockStore>,
    pub connect_error: Mutex<Option<CacheError>>,
    pub last_connect: Mutex<Option<String>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self {
            store: MockStore::new_shared(),
            connect_error: Mutex::new(None),
            last_connect: Mutex::new(None),
        }
    }

    pub fn set_connect_error(&self, err: Option<CacheError>) {
        *self.connect_error.lock() = err;
    }
}

impl StoreConnector for MockConnector {
    fn connect(&self, address: &str) -> Result<Arc<dyn StoreClient>, CacheError> {
        *self.last_connect.lock() = Some(address.to_string());

        if let Some(err) = self.connect_error.lock().clone() {
            return Err(err);
        }

        let store: Arc<dyn StoreClient> = self.store.clone();
        Ok(store)
    }
}
