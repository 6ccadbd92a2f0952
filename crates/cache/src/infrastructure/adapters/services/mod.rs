pub mod memory_store_client;
pub mod ring_node_finder;

pub use memory_store_client::{MemoryStoreClient, MemoryStoreConnector};
pub use ring_node_finder::RingNodeFinder;
