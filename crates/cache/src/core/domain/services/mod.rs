pub mod node_finder;
pub mod store_client;

pub use node_finder::NodeFinder;
pub use store_client::{StoreClient, StoreConnector};
