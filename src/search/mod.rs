
pub mod dijkstra;
mod route;

use route::trace_route;

use crate::collections::FxIndexMap;

/// Parent index of the start node - it has no predecessor
pub const NO_PARENT: usize = usize::MAX;

/// Bookkeeping record for one discovered node
/// - parent is the index of the predecessor in the search tree (NO_PARENT for the start)
/// - cost is the best known total cost from the start
/// - visited marks the cost as settled, the node is never relaxed again
#[derive(Debug, Clone, Copy)]
pub struct NodeRecord<C> {
    pub parent: usize,
    pub cost: C,
    pub visited: bool,
}

/// Node table built during a search
/// N: Node - a state in the implicit graph
/// C: Cost of reaching the node from the start
/// Records are created lazily as nodes are discovered, never pre-allocated,
/// so the implicit graph may be far larger than what a search touches
pub type SearchTree<N, C> = FxIndexMap<N, NodeRecord<C>>;
