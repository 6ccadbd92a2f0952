use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::core::{
    UseCase, UseCaseValidatable,
    domain::{
        models::{
            CacheError, StoreRegistry,
            usecases::{AddNodeUseCaseInput, AddNodeUseCaseOutput},
        },
        services::{NodeFinder, StoreConnector},
    },
};

pub struct AddNodeUseCase {
    node_finder: Arc<dyn NodeFinder>,
    registry: Arc<StoreRegistry>,
    connector: Arc<dyn StoreConnector>,
}

impl AddNodeUseCase {
    pub fn new(
        node_finder: Arc<dyn NodeFinder>,
        registry: Arc<StoreRegistry>,
        connector: Arc<dyn StoreConnector>,
    ) -> Self {
        Self {
            node_finder,
            registry,
            connector,
        }
    }
}

#[async_trait]
impl UseCase for AddNodeUseCase {
    type Input = AddNodeUseCaseInput;
    type Output = AddNodeUseCaseOutput;

    async fn execute(&self, input: AddNodeUseCaseInput) -> Result<AddNodeUseCaseOutput, CacheError> {
        let address = input.address;

        if self.registry.contains(&address) || self.node_finder.contains_node(&address) {
            return Err(CacheError::NodeAlreadyExists(address));
        }

        let client = self.connector.connect(&address)?;

        // The client goes in first so the ring never routes to a node without one.
        if !self.registry.insert(&address, client) {
            return Err(CacheError::NodeAlreadyExists(address));
        }

        if !self.node_finder.add_node(&address) {
            self.registry.remove(&address);
            return Err(CacheError::NodeAlreadyExists(address));
        }

        let vnodes = self.node_finder.vnode_count(&address);
        info!("Node {address} joined with {vnodes} virtual nodes");

        Ok(AddNodeUseCaseOutput {
            node_id: address,
            vnodes,
        })
    }
}

#[async_trait]
impl UseCaseValidatable for AddNodeUseCase {
    async fn validate(&self, input: &AddNodeUseCaseInput) -> Result<(), CacheError> {
        if input.address.trim().is_empty() {
            return Err(CacheError::BadRequest("Node address is empty".to_string()));
        }

        Ok(())
    }
}
