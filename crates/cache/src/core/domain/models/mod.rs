pub mod error;
pub mod registry;
pub mod usecases;

pub use error::CacheError;
pub use registry::StoreRegistry;
