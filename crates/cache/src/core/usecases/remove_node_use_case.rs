use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::core::{
    UseCase, UseCaseValidatable,
    domain::{
        models::{
            CacheError, StoreRegistry,
            usecases::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput},
        },
        services::NodeFinder,
    },
};

/// Drops a node from routing. Keys it stored are not migrated.
pub struct RemoveNodeUseCase {
    node_finder: Arc<dyn NodeFinder>,
    registry: Arc<StoreRegistry>,
}

impl RemoveNodeUseCase {
    pub fn new(node_finder: Arc<dyn NodeFinder>, registry: Arc<StoreRegistry>) -> Self {
        Self {
            node_finder,
            registry,
        }
    }
}

#[async_trait]
impl UseCase for RemoveNodeUseCase {
    type Input = RemoveNodeUseCaseInput;
    type Output = RemoveNodeUseCaseOutput;

    async fn execute(
        &self,
        input: RemoveNodeUseCaseInput,
    ) -> Result<RemoveNodeUseCaseOutput, CacheError> {
        let address = input.address;

        // Ring first: once it is gone no lookup can pick the client we drop next.
        let removed_from_ring = self.node_finder.remove_node(&address);
        let dropped_client = self.registry.remove(&address).is_some();

        if !removed_from_ring && !dropped_client {
            return Err(CacheError::NodeNotFound(address));
        }

        info!("Node {address} left the ring");

        Ok(RemoveNodeUseCaseOutput { node_id: address })
    }
}

#[async_trait]
impl UseCaseValidatable for RemoveNodeUseCase {
    async fn validate(&self, input: &RemoveNodeUseCaseInput) -> Result<(), CacheError> {
        if input.address.trim().is_empty() {
            return Err(CacheError::BadRequest("Node address is empty".to_string()));
        }

        Ok(())
    }
}
