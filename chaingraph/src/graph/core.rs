//! Declares [`WeightedGraph`] and its vertex/edge operations.
use crate::graph::{EdgePairKey, VertexRecord, Weight};
use crate::table::ChainedHashTable;
use chaingraph_core::core::{Dictionary, HashKey};
use std::fmt::{Debug, Formatter};

/// Initial bucket count of the vertex and edge tables. Both grow on their own.
const INITIAL_BUCKET_COUNT: usize = 11;

/// Freshly allocated neighbor listing of one vertex.
///
/// The two vectors are index-aligned: `vertices[i]` is connected to the queried vertex by
/// an edge of weight `weights[i]`. Neither vector aliases graph internals; mutating them
/// leaves the graph untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors<K> {
    pub vertices: Vec<K>,
    pub weights: Vec<Weight>,
}

/// Weighted undirected graph with self-edges permitted.
///
/// Storage is two [`ChainedHashTable`]s: the vertex table maps each vertex identity to its
/// [`VertexRecord`], the edge table maps each unordered [`EdgePairKey`] to its weight. A
/// vertex exists iff the vertex table holds it; an edge exists iff the edge table holds its
/// pair key and both endpoints are vertices. Every mutation validates membership first and
/// then updates both tables together, so the two stay consistent by construction.
///
/// Operations on absent vertices or edges are no-ops or sentinel returns by contract,
/// never errors.
///
/// # Examples
///
/// ```rust
/// use chaingraph::graph::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// graph.add_vertex("a");
/// graph.add_vertex("b");
/// graph.add_edge(&"a", &"b", 5);
///
/// assert!(graph.is_edge(&"b", &"a"));
/// assert_eq!(graph.weight(&"a", &"b"), 5);
/// assert_eq!(graph.degree(&"a"), 1);
/// ```
pub struct WeightedGraph<K: HashKey + Clone> {
    vertices: ChainedHashTable<K, VertexRecord<K>>,
    edges: ChainedHashTable<EdgePairKey<K>, Weight>,
}

impl<K: HashKey + Clone> WeightedGraph<K> {
    /// Creates a graph with no vertices or edges. O(1).
    pub fn new() -> Self {
        Self {
            vertices: ChainedHashTable::with_capacity(INITIAL_BUCKET_COUNT),
            edges: ChainedHashTable::with_capacity(INITIAL_BUCKET_COUNT),
        }
    }

    /// Number of vertices. O(1).
    pub fn vertex_count(&self) -> usize {
        self.vertices.size()
    }

    /// Number of edges; a self-edge counts as one. O(1).
    pub fn edge_count(&self) -> usize {
        self.edges.size()
    }

    /// Every vertex identity, each exactly once, in unspecified order. O(|V|).
    pub fn get_vertices(&self) -> Vec<K> {
        self.vertices.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Adds `vertex` with no incident edges; no-op if it is already a vertex. O(1).
    pub fn add_vertex(&mut self, vertex: K) {
        if self.vertices.find(&vertex).is_none() {
            self.vertices.insert(vertex, VertexRecord::new());
        }
    }

    /// Removes `vertex` and every edge incident on it; no-op if it is not a vertex.
    /// O(d), d = degree of `vertex`.
    pub fn remove_vertex(&mut self, vertex: &K) {
        let Some(entry) = self.vertices.find(vertex) else {
            return;
        };
        let neighbors: Vec<K> = entry.value().rows().map(|(k, _)| k.clone()).collect();

        for neighbor in &neighbors {
            self.edges
                .remove(&EdgePairKey::new(vertex.clone(), neighbor.clone()));
            // A self-edge has no reciprocal record to fix.
            if neighbor != vertex {
                if let Some(other) = self.vertices.find_mut(neighbor) {
                    other.value_mut().remove_neighbor(vertex);
                }
            }
        }
        self.vertices.remove(vertex);
    }

    /// Whether `vertex` is a vertex of the graph. O(1).
    pub fn is_vertex(&self, vertex: &K) -> bool {
        self.vertices.find(vertex).is_some()
    }

    /// Degree of `vertex`; a self-edge adds exactly one. Zero if it is not a vertex. O(1).
    pub fn degree(&self, vertex: &K) -> usize {
        self.vertices
            .find(vertex)
            .map_or(0, |entry| entry.value().degree())
    }

    /// Fresh neighbor/weight listing of `vertex`, or `None` if it is not a vertex or has
    /// degree zero. O(d).
    pub fn get_neighbors(&self, vertex: &K) -> Option<Neighbors<K>> {
        let record = self.vertices.find(vertex)?.value();
        if record.degree() == 0 {
            return None;
        }

        let mut vertices = Vec::with_capacity(record.degree());
        let mut weights = Vec::with_capacity(record.degree());
        for (neighbor, weight) in record.rows() {
            vertices.push(neighbor.clone());
            weights.push(weight);
        }
        Some(Neighbors { vertices, weights })
    }

    /// Adds edge `(u, v)` with `weight`, updating the weight if the edge already exists;
    /// no-op unless both endpoints are vertices. Self-edges are allowed. O(1).
    pub fn add_edge(&mut self, u: &K, v: &K, weight: Weight) {
        if !self.is_vertex(u) || !self.is_vertex(v) {
            return;
        }

        let key = EdgePairKey::new(u.clone(), v.clone());
        match self.edges.find_mut(&key) {
            Some(entry) => *entry.value_mut() = weight,
            None => {
                self.edges.insert(key, weight);
            }
        }

        if let Some(entry) = self.vertices.find_mut(u) {
            entry.value_mut().set_neighbor(v.clone(), weight);
        }
        // A self-edge keeps a single adjacency row; a second one would double its degree.
        if u != v {
            if let Some(entry) = self.vertices.find_mut(v) {
                entry.value_mut().set_neighbor(u.clone(), weight);
            }
        }
    }

    /// Removes edge `(u, v)`; no-op if either endpoint is not a vertex or the pair is not
    /// an edge. O(1).
    pub fn remove_edge(&mut self, u: &K, v: &K) {
        if !self.is_vertex(u) || !self.is_vertex(v) {
            return;
        }
        if self
            .edges
            .remove(&EdgePairKey::new(u.clone(), v.clone()))
            .is_none()
        {
            return;
        }

        if let Some(entry) = self.vertices.find_mut(u) {
            entry.value_mut().remove_neighbor(v);
        }
        if u != v {
            if let Some(entry) = self.vertices.find_mut(v) {
                entry.value_mut().remove_neighbor(u);
            }
        }
    }

    /// Whether `(u, v)` is an edge. False if either endpoint is not a vertex. O(1).
    pub fn is_edge(&self, u: &K, v: &K) -> bool {
        self.is_vertex(u)
            && self.is_vertex(v)
            && self
                .edges
                .find(&EdgePairKey::new(u.clone(), v.clone()))
                .is_some()
    }

    /// Weight of edge `(u, v)`, or `0` if it is not an edge (including when an endpoint is
    /// not a vertex). O(1).
    ///
    /// Zero is a documented sentinel, not an error; callers that must tell a missing edge
    /// apart from a legitimate zero-weight edge check [`Self::is_edge`] first.
    pub fn weight(&self, u: &K, v: &K) -> Weight {
        if !self.is_vertex(u) || !self.is_vertex(v) {
            return 0;
        }
        self.edges
            .find(&EdgePairKey::new(u.clone(), v.clone()))
            .map_or(0, |entry| *entry.value())
    }
}

impl<K: HashKey + Clone> Default for WeightedGraph<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: HashKey + Clone> Debug for WeightedGraph<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("vertex_count", &self.vertices.size())
            .field("edge_count", &self.edges.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightedGraph<&'static str> {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_vertex("c");
        graph
    }

    #[test]
    fn test_add_and_remove_vertex_membership() {
        let mut graph = WeightedGraph::new();
        graph.add_vertex("a");
        assert!(graph.is_vertex(&"a"));
        assert_eq!(graph.vertex_count(), 1);

        // Re-adding is a no-op, not a duplicate.
        graph.add_vertex("a");
        assert_eq!(graph.vertex_count(), 1);

        graph.remove_vertex(&"a");
        assert!(!graph.is_vertex(&"a"));
        assert!(graph.get_neighbors(&"a").is_none());
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_single_edge_is_symmetric() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"b", 5);

        assert!(graph.is_edge(&"a", &"b"));
        assert!(graph.is_edge(&"b", &"a"));
        assert_eq!(graph.weight(&"a", &"b"), 5);
        assert_eq!(graph.weight(&"b", &"a"), 5);
        assert_eq!(graph.degree(&"a"), 1);
        assert_eq!(graph.degree(&"b"), 1);
        assert_eq!(graph.degree(&"c"), 0);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_edge_counts_once_in_degree() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"b", 5);
        graph.add_edge(&"a", &"a", 9);

        assert!(graph.is_edge(&"a", &"a"));
        assert_eq!(graph.degree(&"a"), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(&"a", &"a"), 9);

        let neighbors = graph.get_neighbors(&"a").unwrap();
        assert_eq!(neighbors.vertices.len(), 2);
        assert_eq!(neighbors.weights.len(), 2);
    }

    #[test]
    fn test_remove_vertex_cascades_to_edges() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"b", 5);
        graph.add_edge(&"a", &"a", 9);

        graph.remove_vertex(&"a");

        assert!(!graph.is_vertex(&"a"));
        assert!(!graph.is_edge(&"a", &"b"));
        assert_eq!(graph.degree(&"b"), 0);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_readding_an_edge_updates_weight_without_duplicating() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"b", 5);
        graph.add_edge(&"a", &"b", 7);

        assert_eq!(graph.weight(&"a", &"b"), 7);
        assert_eq!(graph.weight(&"b", &"a"), 7);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(&"a"), 1);

        // Argument order must not matter for the upsert either.
        graph.add_edge(&"b", &"a", 11);
        assert_eq!(graph.weight(&"a", &"b"), 11);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_edge_operations_on_missing_vertices_are_noops() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"zzz", 5);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.is_edge(&"a", &"zzz"));
        assert_eq!(graph.weight(&"a", &"zzz"), 0);

        graph.remove_edge(&"a", &"zzz");
        graph.remove_vertex(&"zzz");
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_remove_edge_updates_both_records() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"b", 5);
        graph.add_edge(&"b", &"c", 6);

        graph.remove_edge(&"b", &"a");

        assert!(!graph.is_edge(&"a", &"b"));
        assert_eq!(graph.degree(&"a"), 0);
        assert_eq!(graph.degree(&"b"), 1);
        assert_eq!(graph.edge_count(), 1);

        // Removing a non-edge is a no-op.
        graph.remove_edge(&"a", &"c");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_self_edge() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"a", 9);
        graph.remove_edge(&"a", &"a");

        assert!(!graph.is_edge(&"a", &"a"));
        assert_eq!(graph.degree(&"a"), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_vertex(&"a"));
    }

    #[test]
    fn test_get_vertices_lists_each_identity_once() {
        let graph = triangle();
        let mut vertices = graph.get_vertices();
        vertices.sort_unstable();
        assert_eq!(vertices, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_neighbors_is_fresh_and_index_aligned() {
        let mut graph = triangle();
        graph.add_edge(&"a", &"b", 5);
        graph.add_edge(&"a", &"c", 6);

        let mut listing = graph.get_neighbors(&"a").unwrap();
        let mut rows: Vec<(&str, Weight)> = listing
            .vertices
            .iter()
            .copied()
            .zip(listing.weights.iter().copied())
            .collect();
        rows.sort_unstable();
        assert_eq!(rows, vec![("b", 5), ("c", 6)]);

        // Mutating the returned vectors leaves the graph untouched.
        listing.vertices.clear();
        listing.weights.clear();
        assert_eq!(graph.degree(&"a"), 2);
        assert_eq!(graph.weight(&"a", &"b"), 5);
    }

    #[test]
    fn test_degree_zero_neighbors_absent() {
        let graph = triangle();
        assert!(graph.get_neighbors(&"a").is_none());
        assert!(graph.get_neighbors(&"missing").is_none());
        assert_eq!(graph.degree(&"missing"), 0);
    }

    #[test]
    fn test_many_vertices_drive_table_growth() {
        let mut graph = WeightedGraph::new();
        for id in 0..500_i64 {
            graph.add_vertex(id);
        }
        for id in 1..500_i64 {
            graph.add_edge(&0, &id, id);
        }

        assert_eq!(graph.vertex_count(), 500);
        assert_eq!(graph.edge_count(), 499);
        assert_eq!(graph.degree(&0), 499);
        assert_eq!(graph.weight(&0, &250), 250);

        graph.remove_vertex(&0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertex_count(), 499);
        assert_eq!(graph.degree(&250), 0);
    }
}
