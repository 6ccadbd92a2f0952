/// Routing function from a cache key to the node that owns it.
pub trait NodeFinder: Send + Sync {
    fn add_node(&self, node_id: &str) -> bool;

    fn remove_node(&self, node_id: &str) -> bool;

    fn contains_node(&self, node_id: &str) -> bool;

    /// Virtual nodes currently held by `node_id`.
    fn vnode_count(&self, node_id: &str) -> usize;

    /// `None` when no node is registered.
    fn find_node(&self, key: &str) -> Option<String>;
}
