pub mod cache;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::cache::{Cache, CacheBuilder};
pub use crate::config::{CacheConfig, DEFAULT_REPLICAS};
pub use crate::core::domain::models::CacheError;
pub use crate::core::domain::services::{NodeFinder, StoreClient, StoreConnector};
pub use crate::infrastructure::adapters::services::{
    MemoryStoreClient, MemoryStoreConnector, RingNodeFinder,
};

#[cfg(test)]
mod tests;
