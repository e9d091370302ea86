use crate::errors::SearchError;
use super::{NO_PARENT, NodeRecord, SearchTree, trace_route};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};




/// Single-source shortest-path search using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// The graph is implicit: `neighbors` enumerates the outgoing edges of a node
/// on demand, so nodes can encode arbitrary composite state and the graph may
/// be unbounded. All edge costs must be non-negative - this is a precondition
/// of the algorithm and is not checked.
///
/// `goal_fn` is evaluated on every node as it leaves the frontier, but never
/// on the start node.
///
/// `report_edge(target, source, cost)` receives route information once the
/// search ends, where `cost` is the total cost from the start to `target`:
/// - goal met: one call per edge of the route, walking from the goal node
///   back to the start; the final call has `source` equal to the start
/// - goal never met: one call per settled node other than the start, in
///   unspecified order, describing that node's edge in the shortest-path tree
///
/// Returns the total cost to the goal node, or None if the frontier empties
/// without meeting the goal.
pub fn search<N, C, IT, NN, G, R>(start: N, neighbors: NN, goal_fn: G, mut report_edge: R) -> Option<C>
where
    N: Eq + Hash + Clone + Debug,
    NN: FnMut(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    R: FnMut(&N, &N, C), // receives (target, source, total cost to target)
    {

    // Build the search tree - terminates when the goal is met
    let (tree, goal_index) = build_search_tree(start, neighbors, goal_fn);

    match goal_index {
        Some(goal_index) => {
            let goal_cost = tree.get_index(goal_index).map(|(_, record)| record.cost)?;

            // Walk parent links from the goal back to the start, one edge per call
            let mut current_index = goal_index;
            while let Some((node, record)) = tree.get_index(current_index) {
                if record.parent == NO_PARENT {
                    break;
                }
                if let Some((source, _)) = tree.get_index(record.parent) {
                    report_edge(node, source, record.cost);
                }
                current_index = record.parent;
            }

            Some(goal_cost)
        }
        None => {
            // Goal never met - report the full shortest-path tree instead.
            // The start node has no incoming edge and is skipped.
            for (node, record) in tree.iter() {
                if !record.visited || record.parent == NO_PARENT {
                    continue;
                }
                if let Some((source, _)) = tree.get_index(record.parent) {
                    report_edge(node, source, record.cost);
                }
            }
            None
        }
    }
}


/// Shortest route from the start to the first node meeting the goal
/// Returns the ordered route (start and goal inclusive) plus its total cost
pub fn shortest_route<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> Result<(Vec<N>, C), SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: FnMut(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    let (tree, goal_index) = build_search_tree(start, neighbors, goal_fn);

    if let Some(goal_index) = goal_index {
        let cost = tree.get_index(goal_index).map(|(_, record)| record.cost).ok_or(SearchError::NoRouteFound)?;
        let route = trace_route(&tree, goal_index)?;
        Ok((route, cost))
    } else {
        Err(SearchError::NoRouteFound)
    }
}


/// Return a partial search tree, built up to the point the goal was met
/// Nodes cheaper than the goal node will be included
pub fn search_tree_partial<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> SearchTree<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: FnMut(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
    {

    build_search_tree(start, neighbors, goal_fn).0
}

/// Returns the full search tree, includes all (reachable) nodes and costs
pub fn search_tree_full<N, C, IT, NN>(start: N, neighbors: NN) -> SearchTree<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: FnMut(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    {

    build_search_tree(start, neighbors, |_| false).0
}


/// Traverses the implicit graph, settling nodes in ascending cost order
/// Returns the node table along with the index of the goal node, if one was met
fn build_search_tree<N, C, IT, NN, G>(start: N, mut neighbors: NN, goal_fn: G) -> (SearchTree<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: FnMut(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Frontier - binary heap ordered so the cheapest entry pops first
    // Duplicate entries for a node are allowed; stale ones are discarded
    // at pop time via the visited flag (lazy deletion)
    let mut frontier: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();

    // Node table - one record per discovered node
    // The usize index of a record doubles as the node's identity for
    // parent links, so records never hold references into caller state
    let mut tree: SearchTree<N, C> = SearchTree::default();

    // Add the start node to the table and frontier with zero cost
    let start_index = tree.insert_full(start, NodeRecord {
        parent: NO_PARENT,
        cost: Zero::zero(),
        visited: false,
    }).0;
    frontier.push(FrontierEntry {
        index: start_index,
        cost: Zero::zero(), // This is the cost from the start node
    });

    // Loop over the frontier, removing the cheapest entry
    while let Some(FrontierEntry { index, cost }) = frontier.pop() {

        let (node, record) = tree.get_index(index).unwrap();

        // Check the goal on every pop, but never against the start node.
        // Matching on the table index also covers routes cycling back to the start.
        if index != start_index && goal_fn(node) {
            return (tree, Some(index));
        }

        // A cheaper entry for this node was already popped, discard this one
        if record.visited {
            continue;
        }

        // Settle the node - its cost is final from here on
        let node = node.clone();
        tree.get_index_mut(index).unwrap().1.visited = true;

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(&node).into_iter() {

            // new cost to reach this neighbor = edge cost + settled cost
            // The frontier copy of the cost is used as the base: it equals the
            // record's cost on the first (settling) pop of any node
            let new_cost = edge_cost + cost;

            let neighbor_index = match tree.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let neighbor_index = e.index();
                    e.insert(NodeRecord {
                        parent: index,
                        cost: new_cost,
                        visited: false,
                    });
                    neighbor_index
                }
                Occupied(mut e) => {
                    let record = e.get_mut();
                    if record.visited || record.cost <= new_cost {
                        // Already settled, or the existing route is no worse
                        continue;
                    }
                    // We've found a cheaper route to this neighbor
                    record.parent = index;
                    record.cost = new_cost;
                    e.index()
                }
            };

            // Only push when the record improved
            frontier.push(FrontierEntry {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    (tree, None)
}


/// Frontier entry
/// - ordering is reversed so the BinaryHeap pops the cheapest entry first
/// - carries its own copy of the cost: mutating the table record after a push
///   must not disturb the heap order
#[derive(Debug)]
struct FrontierEntry<C> {
    index: usize,
    cost: C,
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<C: PartialEq> Eq for FrontierEntry<C> {}
