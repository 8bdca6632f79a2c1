//! Weighted undirected graph composed of two chained hash tables.
//!
//! One table indexes vertices by identity and owns their adjacency records; the other
//! indexes edge weights by unordered vertex pair for O(1) point lookups. Every mutating
//! operation validates vertex membership first and then updates both tables together, so
//! the two never diverge.
mod core;
pub use self::core::*;
mod pair;
pub use pair::*;
mod record;
pub use record::*;

/// Edge weight.
///
/// Zero doubles as the "no such edge" sentinel of [`WeightedGraph::weight`]; callers that
/// store legitimate zero-weight edges must check [`WeightedGraph::is_edge`] first.
pub type Weight = i64;
