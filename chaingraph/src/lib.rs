//! A general-purpose dictionary backed by a hash table with separate chaining, and a
//! weighted undirected graph built by composing two instances of that dictionary.
pub mod bucket;
pub mod graph;
pub mod table;

pub use chaingraph_core::core::{Dictionary, Entry, HashKey};
pub use chaingraph_core::error::ChainGraphError;
