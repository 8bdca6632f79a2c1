//! Declares [`ChainedHashTable`] and its bucket-level machinery.
use crate::bucket::Chain;
use chaingraph_core::core::{Entry, HashKey};
use log::debug;
use std::fmt::{Debug, Formatter};

/// Default number of buckets: a prime in the neighborhood of 100.
pub const DEFAULT_BUCKET_COUNT: usize = 101;

/// Hash table mapping [`HashKey`] keys to values, with chaining collision resolution.
///
/// Colliding entries share a bucket [`Chain`]; new entries are prepended, so a lookup on a
/// duplicated key sees the most recently inserted match first. Once the load factor (stored
/// entries over bucket count) would pass [`Self::LOAD_FACTOR_LIMIT`], the table grows in
/// place to the next prime at least twice its capacity and redistributes every entry.
///
/// # Guarantees
///
/// - Amortized O(1) insert, and O(1) find/remove while chains stay bounded.
/// - The load factor never exceeds [`Self::LOAD_FACTOR_LIMIT`] once an insert returns.
/// - Growth neither loses nor duplicates entries.
///
/// # Examples
///
/// ```rust
/// use chaingraph::table::ChainedHashTable;
/// use chaingraph::Dictionary;
///
/// let mut ratings = ChainedHashTable::new();
/// ratings.insert("Pride and Prejudice", 5);
/// ratings.insert("Grimms' Fairy Tales", 4);
///
/// assert_eq!(ratings.find(&"Pride and Prejudice").map(|e| *e.value()), Some(5));
/// assert_eq!(ratings.size(), 2);
/// ```
pub struct ChainedHashTable<K: HashKey, V> {
    pub(super) buckets: Vec<Chain<Entry<K, V>>>,
    /// Number of stored entries, duplicates included.
    pub(super) entries: usize,
    /// Number of buckets holding at least one entry.
    pub(super) used_buckets: usize,
}

impl<K: HashKey, V> ChainedHashTable<K, V> {
    /// Largest load factor tolerated after an insert returns.
    pub const LOAD_FACTOR_LIMIT: f64 = 0.75;

    /// Creates an empty table with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty table with `capacity` buckets (at least one). A prime capacity is
    /// recommended; the growth path picks primes on its own.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buckets: (0..capacity).map(|_| Chain::new()).collect(),
            entries: 0,
            used_buckets: 0,
        }
    }

    /// Current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of buckets currently holding at least one entry.
    pub fn used_bucket_count(&self) -> usize {
        self.used_buckets
    }

    /// Stored entries over bucket count.
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.buckets.len() as f64
    }

    /// Maps any signed 32-bit hash code into `[0, bucket_count)`.
    ///
    /// The code is scrambled with a fixed multiplicative/additive step modulo a prime
    /// before the reduction by the bucket count, which breaks up clustering from poorly
    /// distributed inputs such as small sequential integers. The final absolute value maps
    /// negative codes correctly. The outer modulus is the *current* bucket count, so the
    /// mapping changes after every growth.
    pub(super) fn compress(&self, code: i32) -> usize {
        const SCALE: i64 = 127;
        const SHIFT: i64 = 129;
        const PRIME: i64 = 16_908_799;

        let scrambled = (SCALE * code as i64 + SHIFT) % PRIME;
        (scrambled % self.buckets.len() as i64).unsigned_abs() as usize
    }

    /// Mutable borrow of an entry with the given `key`, or `None` if no entry matches.
    ///
    /// Only the value is reachable mutably; the key that placed the entry in its bucket
    /// cannot change. If several entries match, the most recently inserted one is chosen.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut Entry<K, V>> {
        let bucket = self.compress(key.hash_code());
        self.buckets[bucket].find_mut(|entry| entry.key() == key)
    }

    /// Iterates every stored entry in unspecified order. O(bucket_count + entries).
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(_, entry)| entry))
    }

    /// Grows the table in place to the next prime at least twice the current capacity and
    /// redistributes every entry under the recomputed compression.
    ///
    /// Replaces this table's own bucket array rather than building a detached table, so
    /// every holder of a reference observes the grown state. `entries` is untouched; the
    /// growth strictly redistributes.
    pub(super) fn grow(&mut self) {
        let capacity = next_prime(self.buckets.len() * 2);
        let old = std::mem::replace(
            &mut self.buckets,
            (0..capacity).map(|_| Chain::new()).collect(),
        );
        self.used_buckets = 0;
        for mut chain in old {
            while let Some(entry) = chain.pop_front() {
                let bucket = self.compress(entry.key().hash_code());
                if self.buckets[bucket].is_empty() {
                    self.used_buckets += 1;
                }
                self.buckets[bucket].push_front(entry);
            }
        }
        debug!(
            "grew table to {} buckets holding {} entries",
            capacity, self.entries
        );
    }
}

impl<K: HashKey, V> Default for ChainedHashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HashKey, V> Debug for ChainedHashTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedHashTable")
            .field("bucket_count", &self.buckets.len())
            .field("entries", &self.entries)
            .field("used_buckets", &self.used_buckets)
            .finish()
    }
}

/// Smallest prime greater than or equal to `n`, by trial division.
///
/// Growth doubles the capacity, so over a table's whole lifetime this runs O(log n) times;
/// the scan cost is negligible next to the rehash it precedes.
fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chaingraph_core::core::Dictionary;

    #[test]
    fn test_compress_stays_in_range_for_negative_codes() {
        let table = ChainedHashTable::<i32, ()>::with_capacity(101);
        for code in [i32::MIN, -1_000_003, -101, -1, 0, 1, 101, i32::MAX] {
            assert!(table.compress(code) < table.bucket_count());
        }
    }

    #[test]
    fn test_compress_spreads_sequential_codes() {
        let table = ChainedHashTable::<i32, ()>::with_capacity(101);
        let mut hit = [false; 101];
        for code in 0..101 {
            hit[table.compress(code)] = true;
        }
        // The scramble is a bijection modulo the prime, so 101 consecutive codes cannot
        // pile onto a few buckets.
        assert!(hit.iter().filter(|&&h| h).count() > 50);
    }

    #[test]
    fn test_used_bucket_count_tracks_nonempty_buckets() {
        let mut table = ChainedHashTable::<i64, i64>::with_capacity(101);
        assert_eq!(table.used_bucket_count(), 0);
        table.insert(1, 1);
        table.insert(2, 2);
        assert_eq!(table.used_bucket_count(), 2);
        table.remove(&1);
        assert_eq!(table.used_bucket_count(), 1);
        table.remove(&2);
        assert_eq!(table.used_bucket_count(), 0);
    }

    #[test]
    fn test_growth_preserves_the_entry_multiset() {
        let mut table = ChainedHashTable::<i64, i64>::with_capacity(3);
        for key in 0..200 {
            table.insert(key, key * 10);
        }
        assert!(table.bucket_count() > 3);
        let mut pairs: Vec<(i64, i64)> = table
            .iter()
            .map(|entry| (*entry.key(), *entry.value()))
            .collect();
        pairs.sort_unstable();
        let expected: Vec<(i64, i64)> = (0..200).map(|key| (key, key * 10)).collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_growth_picks_a_prime_capacity() {
        let mut table = ChainedHashTable::<i64, ()>::with_capacity(101);
        while table.bucket_count() == 101 {
            table.insert(table.size() as i64, ());
        }
        assert!(is_prime(table.bucket_count()));
        assert!(table.bucket_count() >= 202);
    }

    #[test]
    fn test_find_mut_changes_value_not_placement() {
        let mut table = ChainedHashTable::<i64, &str>::new();
        table.insert(5, "before");
        *table.find_mut(&5).unwrap().value_mut() = "after";
        assert_eq!(table.find(&5).map(|e| *e.value()), Some("after"));
        assert_eq!(table.size(), 1);
    }

    #[test]
    fn test_next_prime() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(8), 11);
        assert_eq!(next_prime(202), 211);
    }
}
