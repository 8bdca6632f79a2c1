//! Per-vertex adjacency data.
use crate::graph::Weight;
use crate::table::ChainedHashTable;
use chaingraph_core::core::{Dictionary, HashKey};

/// Initial bucket count of a neighbor map. Most vertices stay small; the map grows on its
/// own when one does not.
const NEIGHBOR_BUCKET_COUNT: usize = 11;

/// Adjacency record owned by the vertex table's entry for one vertex: each row maps a
/// neighbor identity to the weight of the connecting edge.
///
/// A self-edge occupies exactly one row, so it contributes exactly 1 to [`Self::degree`].
/// The rows are themselves a small [`ChainedHashTable`], which keeps edge upserts O(1) and
/// neighbor listing O(degree).
#[derive(Debug)]
pub struct VertexRecord<K: HashKey> {
    neighbors: ChainedHashTable<K, Weight>,
}

impl<K: HashKey> VertexRecord<K> {
    pub(super) fn new() -> Self {
        Self {
            neighbors: ChainedHashTable::with_capacity(NEIGHBOR_BUCKET_COUNT),
        }
    }

    /// Number of neighbors, self-edge counted once.
    pub fn degree(&self) -> usize {
        self.neighbors.size()
    }

    /// Weight of the edge towards `neighbor`, or `None` if there is none.
    pub fn weight_to(&self, neighbor: &K) -> Option<Weight> {
        self.neighbors.find(neighbor).map(|entry| *entry.value())
    }

    /// Inserts or updates the row for `neighbor`. Never duplicates a row.
    pub(super) fn set_neighbor(&mut self, neighbor: K, weight: Weight) {
        match self.neighbors.find_mut(&neighbor) {
            Some(entry) => *entry.value_mut() = weight,
            None => {
                self.neighbors.insert(neighbor, weight);
            }
        }
    }

    pub(super) fn remove_neighbor(&mut self, neighbor: &K) {
        self.neighbors.remove(neighbor);
    }

    /// Iterates neighbor/weight rows in unspecified order. O(degree).
    pub fn rows(&self) -> impl Iterator<Item = (&K, Weight)> + '_ {
        self.neighbors
            .iter()
            .map(|entry| (entry.key(), *entry.value()))
    }
}
