use hash_ring::RingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("No node available for key {0}")]
    NoNodeAvailable(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Node already exists: {0}")]
    NodeAlreadyExists(String),

    #[error("No store client for node {0}")]
    StoreNotFound(String),

    #[error("Store error on {node}: {message}")]
    Store { node: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Ring(#[from] RingError),
}
