//! Unordered vertex-pair key addressing an edge regardless of argument order.
use chaingraph_core::core::HashKey;

/// Dictionary key for an edge: the unordered pair of its endpoint identities.
///
/// Equality and the hash code are both symmetric, so `(a, b)` and `(b, a)` address the same
/// edge-table entry. A self-pair (`a == b`) is legal and forms exactly one key.
#[derive(Debug, Clone)]
pub struct EdgePairKey<K: HashKey> {
    a: K,
    b: K,
}

impl<K: HashKey> EdgePairKey<K> {
    pub fn new(a: K, b: K) -> Self {
        Self { a, b }
    }

    /// Endpoint identities in construction order.
    pub fn endpoints(&self) -> (&K, &K) {
        (&self.a, &self.b)
    }
}

impl<K: HashKey> PartialEq for EdgePairKey<K> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<K: HashKey> Eq for EdgePairKey<K> {}

impl<K: HashKey> HashKey for EdgePairKey<K> {
    fn hash_code(&self) -> i32 {
        // Wrapping addition commutes, so the code is order-free like the equality above.
        self.a.hash_code().wrapping_add(self.b.hash_code())
    }
}
