use std::sync::Arc;

use hash_ring::{HashRing, KeyHasher, Sha1Hasher};

use crate::core::domain::{models::CacheError, services::NodeFinder};

/// [`NodeFinder`] backed by a consistent hash ring.
pub struct RingNodeFinder<H = Sha1Hasher> {
    ring: HashRing<H>,
}

impl RingNodeFinder<Sha1Hasher> {
    pub fn new(replicas: usize) -> Result<Self, CacheError> {
        Ok(Self::from_ring(HashRing::new(replicas)?))
    }

    pub fn new_shared(replicas: usize) -> Result<Arc<Self>, CacheError> {
        Self::new(replicas).map(Arc::new)
    }
}

impl<H: KeyHasher> RingNodeFinder<H> {
    #[inline]
    pub fn from_ring(ring: HashRing<H>) -> Self {
        Self { ring }
    }

    #[inline]
    pub fn ring(&self) -> &HashRing<H> {
        &self.ring
    }
}

impl<H: KeyHasher> NodeFinder for RingNodeFinder<H> {
    fn add_node(&self, node_id: &str) -> bool {
        self.ring.add_node(node_id)
    }

    fn remove_node(&self, node_id: &str) -> bool {
        self.ring.remove_node(node_id)
    }

    fn contains_node(&self, node_id: &str) -> bool {
        self.ring.contains_node(node_id)
    }

    fn vnode_count(&self, node_id: &str) -> usize {
        self.ring.vnode_count(node_id)
    }

    fn find_node(&self, key: &str) -> Option<String> {
        self.ring.find_node(key).map(|node| node.to_string())
    }
}
