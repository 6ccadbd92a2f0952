use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{
    UseCase,
    domain::{
        models::{
            CacheError, StoreRegistry,
            usecases::{PutKeyUseCaseInput, PutKeyUseCaseOutput},
        },
        services::NodeFinder,
    },
    usecases::route,
};

pub struct PutKeyUseCase {
    node_finder: Arc<dyn NodeFinder>,
    registry: Arc<StoreRegistry>,
}

impl PutKeyUseCase {
    pub fn new(node_finder: Arc<dyn NodeFinder>, registry: Arc<StoreRegistry>) -> Self {
        Self {
            node_finder,
            registry,
        }
    }
}

#[async_trait]
impl UseCase for PutKeyUseCase {
    type Input = PutKeyUseCaseInput;
    type Output = PutKeyUseCaseOutput;

    async fn execute(&self, input: PutKeyUseCaseInput) -> Result<PutKeyUseCaseOutput, CacheError> {
        let (node_id, client) = route(self.node_finder.as_ref(), &self.registry, &input.key)?;

        client.set(&input.key, &input.value).await?;

        Ok(PutKeyUseCaseOutput { node_id })
    }
}
