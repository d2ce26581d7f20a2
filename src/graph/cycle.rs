use std::collections::{HashMap, HashSet};

use crate::types::{Edge, NodeId};

/// Returns true iff a path already exists between `from` and `to` within
/// `current_edges`, i.e. adding the edge from–to would close a cycle.
///
/// Builds an undirected adjacency view of the accepted edge set and runs an
/// iterative depth-first search. Each call is O(V+E) over the edges so far;
/// fine for the dataset sizes in scope, a union-find would be the upgrade
/// path for large graphs.
pub fn would_form_cycle(current_edges: &[Edge], from: NodeId, to: NodeId) -> bool {
    if current_edges.is_empty() {
        return false;
    }
    let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for edge in current_edges {
        adjacency.entry(edge.from).or_default().push(edge.to);
        adjacency.entry(edge.to).or_default().push(edge.from);
    }
    // An endpoint not touched by any accepted edge cannot be on a path.
    if !adjacency.contains_key(&from) || !adjacency.contains_key(&to) {
        return false;
    }

    let mut visited = HashSet::new();
    let mut stack = vec![from];
    while let Some(node) = stack.pop() {
        if node == to {
            return true;
        }
        if visited.insert(node) {
            for neighbor in &adjacency[&node] {
                if !visited.contains(neighbor) {
                    stack.push(*neighbor);
                }
            }
        }
    }
    false
}
