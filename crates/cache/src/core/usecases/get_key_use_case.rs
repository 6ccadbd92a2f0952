use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{
    UseCase,
    domain::{
        models::{
            CacheError, StoreRegistry,
            usecases::{GetKeyUseCaseInput, GetKeyUseCaseOutput},
        },
        services::NodeFinder,
    },
    usecases::route,
};

pub struct GetKeyUseCase {
    node_finder: Arc<dyn NodeFinder>,
    registry: Arc<StoreRegistry>,
}

impl GetKeyUseCase {
    pub fn new(node_finder: Arc<dyn NodeFinder>, registry: Arc<StoreRegistry>) -> Self {
        Self {
            node_finder,
            registry,
        }
    }
}

#[async_trait]
impl UseCase for GetKeyUseCase {
    type Input = GetKeyUseCaseInput;
    type Output = GetKeyUseCaseOutput;

    async fn execute(&self, input: GetKeyUseCaseInput) -> Result<GetKeyUseCaseOutput, CacheError> {
        let (node_id, client) = route(self.node_finder.as_ref(), &self.registry, &input.key)?;

        let value = client.get(&input.key).await?;

        Ok(GetKeyUseCaseOutput { node_id, value })
    }
}
