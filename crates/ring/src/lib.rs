pub mod error;
pub mod hasher;
pub mod ring;

pub use error::RingError;
pub use hasher::{KeyHasher, Sha1Hasher, vnode_key};
pub use ring::HashRing;
