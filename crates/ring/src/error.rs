use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("Invalid replicas: {0}, at least one virtual node per node is required")]
    InvalidReplicas(usize),
}
