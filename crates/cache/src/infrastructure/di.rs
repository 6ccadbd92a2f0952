use std::sync::Arc;

use crate::core::{
    domain::{
        models::StoreRegistry,
        services::{NodeFinder, StoreConnector},
    },
    usecases::{AddNodeUseCase, GetKeyUseCase, PutKeyUseCase, RemoveNodeUseCase},
};

pub struct CacheModule {
    pub node_finder: Arc<dyn NodeFinder>,
    pub registry: Arc<StoreRegistry>,
    pub get_key_use_case: Arc<GetKeyUseCase>,
    pub put_key_use_case: Arc<PutKeyUseCase>,
    pub add_node_use_case: Arc<AddNodeUseCase>,
    pub remove_node_use_case: Arc<RemoveNodeUseCase>,
}

impl CacheModule {
    pub fn build(node_finder: Arc<dyn NodeFinder>, connector: Arc<dyn StoreConnector>) -> Self {
        let registry = StoreRegistry::new_shared();

        let get_key_use_case = Arc::new(GetKeyUseCase::new(
            node_finder.clone(),
            registry.clone(),
        ));

        let put_key_use_case = Arc::new(PutKeyUseCase::new(
            node_finder.clone(),
            registry.clone(),
        ));

        let add_node_use_case = Arc::new(AddNodeUseCase::new(
            node_finder.clone(),
            registry.clone(),
            connector,
        ));

        let remove_node_use_case = Arc::new(RemoveNodeUseCase::new(
            node_finder.clone(),
            registry.clone(),
        ));

        Self {
            node_finder,
            registry,
            get_key_use_case,
            put_key_use_case,
            add_node_use_case,
            remove_node_use_case,
        }
    }
}
