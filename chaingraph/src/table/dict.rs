//! Implements [`Dictionary`] for [`ChainedHashTable`].
use crate::table::ChainedHashTable;
use chaingraph_core::core::{Dictionary, Entry, HashKey};
use log::error;

impl<K: HashKey, V> Dictionary<K, V> for ChainedHashTable<K, V> {
    fn size(&self) -> usize {
        self.entries
    }

    fn is_empty(&self) -> bool {
        self.entries == 0
    }

    fn insert(&mut self, key: K, value: V) -> &Entry<K, V> {
        // Grow before prepending: rehashing afterwards would move the entry this method
        // must return a reference to. The post-return invariant is the same either way.
        if (self.entries + 1) as f64 / self.bucket_count() as f64 > Self::LOAD_FACTOR_LIMIT {
            self.grow();
        }

        let bucket = self.compress(key.hash_code());
        if self.buckets[bucket].is_empty() {
            self.used_buckets += 1;
        }
        let handle = self.buckets[bucket].push_front(Entry::new(key, value));
        self.entries += 1;

        match self.buckets[bucket].get(handle) {
            Ok(entry) => entry,
            // A handle issued by push_front stays live until the next removal from the
            // same chain, and nothing was removed since.
            Err(_) => unreachable!("fresh chain handle rejected by its own chain"),
        }
    }

    fn find(&self, key: &K) -> Option<&Entry<K, V>> {
        let bucket = self.compress(key.hash_code());
        self.buckets[bucket]
            .find(|entry| entry.key() == key)
            .map(|(_, entry)| entry)
    }

    fn remove(&mut self, key: &K) -> Option<Entry<K, V>> {
        let bucket = self.compress(key.hash_code());
        let handle = self.buckets[bucket]
            .find(|entry| entry.key() == key)
            .map(|(handle, _)| handle)?;

        match self.buckets[bucket].remove(handle) {
            Ok(entry) => {
                self.entries -= 1;
                if self.buckets[bucket].is_empty() {
                    self.used_buckets -= 1;
                }
                Some(entry)
            }
            Err(err) => {
                // A handle straight out of find() can only go stale if the chain was
                // mutated in between; abort the removal instead of guessing.
                error!("bucket {bucket} rejected a node handle taken from live iteration: {err}");
                None
            }
        }
    }

    fn make_empty(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.entries = 0;
        self.used_buckets = 0;
    }
}
