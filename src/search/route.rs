use crate::errors::SearchError;
use super::{NO_PARENT, SearchTree};

/// Construct the route from the start node to the goal node
/// Walks parent indices backwards from the goal, then reverses
/// tree: SearchTree<N, C> - node table built by a search
/// goal_index: usize - index of the goal node in the tree
pub(crate) fn trace_route<N, C>(tree: &SearchTree<N, C>, goal_index: usize) -> Result<Vec<N>, SearchError>
where
    N: Clone,
{

    let mut route = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        if let Some((node, record)) = tree.get_index(current_index) {
            route.push(node.clone());
            current_index = record.parent;
        } else {
            return Err(SearchError::NoRouteFound);
        }
    }

    // The walk runs goal to start, flip it
    route.reverse();

    if route.is_empty() {
        return Err(SearchError::NoRouteFound);
    }

    Ok(route)
}
