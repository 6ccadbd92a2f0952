pub mod adapters;
pub mod di;
