pub mod add_node_use_case;
pub mod get_key_use_case;
pub mod put_key_use_case;
pub mod remove_node_use_case;

use std::sync::Arc;

use tracing::trace;

use crate::core::domain::{
    models::{CacheError, StoreRegistry},
    services::{NodeFinder, StoreClient},
};

pub use add_node_use_case::AddNodeUseCase;
pub use get_key_use_case::GetKeyUseCase;
pub use put_key_use_case::PutKeyUseCase;
pub use remove_node_use_case::RemoveNodeUseCase;

/// Resolves the owning node of `key` and its store client.
pub(crate) fn route(
    node_finder: &dyn NodeFinder,
    registry: &StoreRegistry,
    key: &str,
) -> Result<(String, Arc<dyn StoreClient>), CacheError> {
    let node_id = node_finder
        .find_node(key)
        .ok_or_else(|| CacheError::NoNodeAvailable(key.to_string()))?;

    trace!("Key {key} routed to {node_id}");

    let client = registry
        .get(&node_id)
        .ok_or_else(|| CacheError::StoreNotFound(node_id.clone()))?;

    Ok((node_id, client))
}
