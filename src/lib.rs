//! Generic single-source shortest-path search.
//!
//! The graph is implicit: nodes are opaque hashable values and edges are
//! discovered lazily through a caller-supplied neighbor closure. The engine
//! never sees the underlying graph representation, so the same search works
//! over adjacency maps, weight grids, or composite states packed into
//! integer ids.

mod collections;
pub mod errors;
pub mod search;

pub use errors::SearchError;
pub use search::dijkstra::{search, search_tree_full, search_tree_partial, shortest_route};
pub use search::{NO_PARENT, NodeRecord, SearchTree};
