use sha1::{Digest, Sha1};

/// Maps an arbitrary byte sequence onto the 32-bit ring space.
///
/// Implementations must be deterministic. Closures `Fn(&[u8]) -> u32` are
/// accepted too, which is how tests pin virtual nodes to chosen positions.
pub trait KeyHasher: Send + Sync {
    fn hash(&self, bytes: &[u8]) -> u32;
}

impl<F> KeyHasher for F
where
    F: Fn(&[u8]) -> u32 + Send + Sync,
{
    #[inline]
    fn hash(&self, bytes: &[u8]) -> u32 {
        self(bytes)
    }
}

/// SHA-1 digest truncated to its first four bytes, read big-endian.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha1Hasher;

impl KeyHasher for Sha1Hasher {
    fn hash(&self, bytes: &[u8]) -> u32 {
        let digest = Sha1::digest(bytes);
        u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    }
}

/// Hash input for the `index`-th virtual node of `node_id`: the decimal
/// index followed by the node id.
#[inline]
pub fn vnode_key(index: usize, node_id: &str) -> Vec<u8> {
    format!("{index}{node_id}").into_bytes()
}
