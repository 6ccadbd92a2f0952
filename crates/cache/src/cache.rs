use std::sync::Arc;

use tracing::info;

use crate::{
    config::{CacheConfig, DEFAULT_REPLICAS},
    core::{
        UseCase, UseCaseValidatable,
        domain::{
            models::{
                CacheError,
                usecases::{
                    AddNodeUseCaseInput, GetKeyUseCaseInput, PutKeyUseCaseInput,
                    RemoveNodeUseCaseInput,
                },
            },
            services::{NodeFinder, StoreConnector},
        },
    },
    infrastructure::{
        adapters::services::{MemoryStoreConnector, RingNodeFinder},
        di::CacheModule,
    },
};

/// Sharded cache front: routes every key to one node through a
/// [`NodeFinder`] and talks to that node's store client.
pub struct Cache {
    module: CacheModule,
}

impl Cache {
    pub fn builder() -> CacheBuilder {
        CacheBuilder::default()
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.get_routed(key).await.map(|(_, value)| value)
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.set_routed(key, value).await.map(|_| ())
    }

    /// Like [`get`](Self::get), also returning the node that served the read.
    pub async fn get_routed(&self, key: &str) -> Result<(String, Option<String>), CacheError> {
        let output = self
            .module
            .get_key_use_case
            .execute(GetKeyUseCaseInput {
                key: key.to_string(),
            })
            .await?;

        Ok((output.node_id, output.value))
    }

    /// Like [`set`](Self::set), returning the node that stored the value.
    pub async fn set_routed(&self, key: &str, value: &str) -> Result<String, CacheError> {
        let output = self
            .module
            .put_key_use_case
            .execute(PutKeyUseCaseInput {
                key: key.to_string(),
                value: value.to_string(),
            })
            .await?;

        Ok(output.node_id)
    }

    /// Connects to `address` and gives it its share of the ring.
    pub async fn add_server(&self, address: &str) -> Result<(), CacheError> {
        self.module
            .add_node_use_case
            .validate_and_execute(AddNodeUseCaseInput {
                address: address.to_string(),
            })
            .await?;

        Ok(())
    }

    /// Stops routing to `address`. Keys stored there are not moved.
    pub async fn remove_server(&self, address: &str) -> Result<(), CacheError> {
        self.module
            .remove_node_use_case
            .validate_and_execute(RemoveNodeUseCaseInput {
                address: address.to_string(),
            })
            .await?;

        Ok(())
    }

    pub fn node_for(&self, key: &str) -> Option<String> {
        self.module.node_finder.find_node(key)
    }

    pub fn servers(&self) -> Vec<String> {
        self.module.registry.node_ids()
    }
}

pub struct CacheBuilder {
    servers: Vec<String>,
    replicas: usize,
    node_finder: Option<Arc<dyn NodeFinder>>,
    connector: Option<Arc<dyn StoreConnector>>,
}

impl Default for CacheBuilder {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            replicas: DEFAULT_REPLICAS,
            node_finder: None,
            connector: None,
        }
    }
}

impl CacheBuilder {
    pub fn from_config(config: CacheConfig) -> Self {
        Self::default()
            .servers(config.servers)
            .replicas(config.replicas)
    }

    pub fn servers<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.servers = servers.into_iter().map(Into::into).collect();
        self
    }

    /// Virtual nodes per server for the default ring. Ignored when a custom
    /// [`NodeFinder`] is supplied.
    pub fn replicas(mut self, replicas: usize) -> Self {
        self.replicas = replicas;
        self
    }

    pub fn node_finder(mut self, node_finder: Arc<dyn NodeFinder>) -> Self {
        self.node_finder = Some(node_finder);
        self
    }

    pub fn connector(mut self, connector: Arc<dyn StoreConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    pub async fn build(self) -> Result<Cache, CacheError> {
        let node_finder: Arc<dyn NodeFinder> = match self.node_finder {
            Some(finder) => finder,
            None => RingNodeFinder::new_shared(self.replicas)?,
        };

        let connector: Arc<dyn StoreConnector> = match self.connector {
            Some(connector) => connector,
            None => MemoryStoreConnector::new_shared(),
        };

        let cache = Cache {
            module: CacheModule::build(node_finder, connector),
        };

        for server in &self.servers {
            cache.add_server(server).await?;
        }

        info!("Cache ready with {} servers", cache.servers().len());

        Ok(cache)
    }
}
