//! Core trait and type declarations for the whole project.

use crate::hashing::{fold_u64, polynomial_mersenne};

/// Hashing capability required from dictionary keys.
///
/// Differs from [`core::hash::Hash`] in the way that the key type produces its integer hash
/// code directly instead of feeding bytes to an external hasher. This keeps the dictionary
/// independent from any particular hasher implementation: any key type that can answer with
/// a deterministic signed 32-bit code (and compare for equality) qualifies.
///
/// Implementations must be deterministic: equal keys must produce equal codes. The code may
/// be negative; the dictionary's compression function is responsible for mapping the full
/// signed range onto its buckets.
pub trait HashKey: Eq {
    /// Hash code of the key, anywhere in the full signed 32-bit range.
    fn hash_code(&self) -> i32;
}

/// A key/value pair, the unit of storage of a [`Dictionary`].
///
/// The key is never reachable mutably once stored; the value is, but only through the
/// owning dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the entry and returns the pair.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// A mutable dictionary keyed by [`HashKey`] values.
///
/// Multiple entries with equal keys may coexist; `insert` never rejects a key, and
/// `find`/`remove` on a duplicated key operate on one of the matching entries. Absence is
/// signalled with `None`, never with a panic or an error.
pub trait Dictionary<K: HashKey, V> {
    /// Number of entries stored. Entries with equal keys each count separately.
    fn size(&self) -> usize;

    /// Check if the dictionary holds no entries.
    fn is_empty(&self) -> bool;

    /// Store a new entry for `key` and return a reference to it.
    ///
    /// Always adds a distinct entry, even if entries with an equal key already exist.
    fn insert(&mut self, key: K, value: V) -> &Entry<K, V>;

    /// Get an entry with the given `key`, or `None` if no entry matches.
    fn find(&self, key: &K) -> Option<&Entry<K, V>>;

    /// Remove an entry with the given `key` and return it, or `None` if no entry matches.
    ///
    /// If several entries match, exactly one is removed.
    fn remove(&mut self, key: &K) -> Option<Entry<K, V>>;

    /// Discard every entry, keeping the dictionary itself usable.
    fn make_empty(&mut self);
}

macro_rules! impl_hash_key_narrow {
    ($($type:ty),*) => {
        $(
            impl HashKey for $type {
                #[inline]
                fn hash_code(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

macro_rules! impl_hash_key_wide {
    ($($type:ty),*) => {
        $(
            impl HashKey for $type {
                #[inline]
                fn hash_code(&self) -> i32 {
                    fold_u64(*self as u64)
                }
            }
        )*
    };
}

impl_hash_key_narrow!(u8, i8, u16, i16, u32, i32);
impl_hash_key_wide!(u64, i64, usize, isize);

impl HashKey for String {
    fn hash_code(&self) -> i32 {
        polynomial_mersenne(self.as_bytes())
    }
}

impl HashKey for &str {
    fn hash_code(&self) -> i32 {
        polynomial_mersenne(self.as_bytes())
    }
}
