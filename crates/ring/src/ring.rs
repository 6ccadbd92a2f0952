use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

use parking_lot::RwLock;
use tracing::{trace, warn};

use crate::{
    error::RingError,
    hasher::{KeyHasher, Sha1Hasher, vnode_key},
};

#[derive(Default)]
struct RingState {
    // sorted ascending, no duplicates
    positions: Vec<u32>,
    owners: HashMap<u32, Arc<str>>,
    members: HashSet<Arc<str>>,
    collisions: u64,
}

impl RingState {
    /// Returns the previous owner when the position was already taken.
    fn insert_position(&mut self, position: u32, node_id: &Arc<str>) -> Option<Arc<str>> {
        if let Err(idx) = self.positions.binary_search(&position) {
            self.positions.insert(idx, position);
        }

        self.owners.insert(position, node_id.clone())
    }

    fn remove_position(&mut self, position: u32, node_id: &str) -> bool {
        let owned = self
            .owners
            .get(&position)
            .is_some_and(|owner| owner.as_ref() == node_id);

        if !owned {
            return false;
        }

        if let Ok(idx) = self.positions.binary_search(&position) {
            self.positions.remove(idx);
        }
        self.owners.remove(&position);

        true
    }

    fn locate(&self, target: u32) -> Option<&Arc<str>> {
        let idx = self.positions.partition_point(|&position| position < target);

        // Past the largest position the ring wraps to the smallest one.
        let position = self
            .positions
            .get(idx)
            .or_else(|| self.positions.first())?;

        self.owners.get(position)
    }
}

/// Consistent hash ring with `replicas` virtual nodes per physical node.
///
/// Lookups take a shared lock and membership changes take an exclusive one,
/// so a reader never observes a half-applied `add_node`/`remove_node`.
pub struct HashRing<H = Sha1Hasher> {
    state: RwLock<RingState>,
    hasher: H,
    replicas: usize,
}

impl HashRing<Sha1Hasher> {
    pub fn new(replicas: usize) -> Result<Self, RingError> {
        Self::with_hasher(replicas, Sha1Hasher)
    }

    pub fn new_shared(replicas: usize) -> Result<Arc<Self>, RingError> {
        Self::new(replicas).map(Arc::new)
    }
}

impl<H: KeyHasher> HashRing<H> {
    pub fn with_hasher(replicas: usize, hasher: H) -> Result<Self, RingError> {
        if replicas == 0 {
            return Err(RingError::InvalidReplicas(replicas));
        }

        Ok(Self {
            state: RwLock::new(RingState::default()),
            hasher,
            replicas,
        })
    }

    fn vnode_positions(&self, node_id: &str) -> Vec<u32> {
        (0..self.replicas)
            .map(|i| self.hasher.hash(&vnode_key(i, node_id)))
            .collect()
    }

    /// Places the node's virtual nodes on the ring.
    ///
    /// Returns `false` without touching the ring if the node is already a
    /// member. A virtual node landing on a position owned by another node
    /// takes it over; the overwrite is logged and counted in
    /// [`collisions`](Self::collisions).
    pub fn add_node(&self, node_id: &str) -> bool {
        let node: Arc<str> = Arc::from(node_id);
        let positions = self.vnode_positions(node_id);

        let mut state = self.state.write();

        if !state.members.insert(node.clone()) {
            trace!("Node {node_id} already in ring, skipping");
            return false;
        }

        for position in positions {
            if let Some(previous) = state.insert_position(position, &node)
                && previous.as_ref() != node_id
            {
                state.collisions += 1;
                warn!(
                    "Hash collision at position {position}: {previous} overwritten by {node_id}"
                );
            }
        }

        true
    }

    /// Takes the node's virtual nodes off the ring. Unknown nodes are a
    /// no-op and return `false`.
    ///
    /// Positions lost to another node through a collision stay with the
    /// node that overwrote them.
    pub fn remove_node(&self, node_id: &str) -> bool {
        let positions = self.vnode_positions(node_id);

        let mut state = self.state.write();

        if !state.members.remove(node_id) {
            return false;
        }

        for position in positions {
            state.remove_position(position, node_id);
        }

        true
    }

    /// Owner of the first virtual node at or after the key's hash, wrapping
    /// around past the top of the ring. `None` only when the ring is empty.
    pub fn find_node<K: AsRef<[u8]>>(&self, key: K) -> Option<Arc<str>> {
        let target = self.hasher.hash(key.as_ref());

        self.state.read().locate(target).cloned()
    }

    #[inline]
    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// Number of virtual nodes currently on the ring.
    pub fn len(&self) -> usize {
        self.state.read().positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().positions.is_empty()
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.state.read().members.contains(node_id)
    }

    pub fn nodes(&self) -> Vec<Arc<str>> {
        let mut nodes: Vec<Arc<str>> = self.state.read().members.iter().cloned().collect();
        nodes.sort();
        nodes
    }

    /// Positions currently owned by `node_id`. Below `replicas` only when a
    /// collision took some of them.
    pub fn vnode_count(&self, node_id: &str) -> usize {
        self.state
            .read()
            .owners
            .values()
            .filter(|owner| owner.as_ref() == node_id)
            .count()
    }

    /// Total number of virtual nodes that took a position owned by another node.
    pub fn collisions(&self) -> u64 {
        self.state.read().collisions
    }

    pub fn positions(&self) -> Vec<u32> {
        self.state.read().positions.clone()
    }
}

impl<H> fmt::Debug for HashRing<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("HashRing")
            .field("replicas", &self.replicas)
            .field("nodes", &state.members.len())
            .field("vnodes", &state.positions.len())
            .finish()
    }
}
