use std::collections::BinaryHeap;

use crate::graph::WorkingGraph;
use crate::types::NodeId;

/// Dense all-pairs distance matrix. Diagonal is 0; disconnected pairs hold
/// `f64::INFINITY`, never a missing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    node_count: usize,
    dist: Vec<f64>,
}

impl DistanceTable {
    fn new(node_count: usize) -> DistanceTable {
        let mut dist = vec![f64::INFINITY; node_count * node_count];
        for i in 0..node_count {
            dist[i * node_count + i] = 0.0;
        }
        DistanceTable { node_count, dist }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn get(&self, from: NodeId, to: NodeId) -> f64 {
        self.dist[from.index() * self.node_count + to.index()]
    }

    fn set(&mut self, from: NodeId, to: NodeId, distance: f64) {
        self.dist[from.index() * self.node_count + to.index()] = distance;
    }
}

/// The graph diameter: the maximum finite shortest-path distance, with the
/// first pair achieving it under row-major scan order. A graph with no
/// finite off-diagonal pair has value 0 and no endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Diameter {
    pub value: f64,
    pub endpoints: Option<(NodeId, NodeId)>,
}

/// Floyd–Warshall over the undirected distance graph.
///
/// The intermediate node must be the outermost loop; moving it inward
/// breaks the recurrence and produces wrong distances.
pub fn all_pairs_shortest_paths(graph: &WorkingGraph) -> DistanceTable {
    let mut dist = DistanceTable::new(graph.node_count());
    for u in graph.node_ids() {
        for (v, weight) in graph.neighbors(u) {
            dist.set(u, *v, *weight);
        }
    }
    for k in graph.node_ids() {
        for i in graph.node_ids() {
            for j in graph.node_ids() {
                let through_k = dist.get(i, k) + dist.get(k, j);
                if through_k < dist.get(i, j) {
                    dist.set(i, j, through_k);
                }
            }
        }
    }
    dist
}

/// Scans the table row-major for the largest finite entry. Infinite
/// entries (disconnected pairs) are excluded.
pub fn diameter(table: &DistanceTable) -> Diameter {
    let mut result = Diameter {
        value: 0.0,
        endpoints: None,
    };
    for u in 0..table.node_count() as u32 {
        for v in 0..table.node_count() as u32 {
            let (u, v) = (NodeId::new(u), NodeId::new(v));
            let distance = table.get(u, v);
            if distance.is_finite() && distance > result.value {
                result.value = distance;
                result.endpoints = Some((u, v));
            }
        }
    }
    result
}

/// Reconstructs the node sequence of a shortest path from `from` to `to`
/// by a single-source Dijkstra search. Presentation only; the diameter's
/// numeric value comes from the table, not from this path.
///
/// Returns an empty sequence if `to` is unreachable.
pub fn reconstruct_path(graph: &WorkingGraph, from: NodeId, to: NodeId) -> Vec<NodeId> {
    if from == to {
        return vec![from];
    }
    let mut dist = vec![f64::INFINITY; graph.node_count()];
    let mut parent: Vec<Option<NodeId>> = vec![None; graph.node_count()];
    let mut heap = BinaryHeap::new();
    dist[from.index()] = 0.0;
    heap.push(SearchEntry {
        node: from,
        distance: 0.0,
    });

    while let Some(SearchEntry { node, distance }) = heap.pop() {
        if distance > dist[node.index()] {
            continue;
        }
        if node == to {
            break;
        }
        for (target, weight) in graph.neighbors(node) {
            let next = distance + weight;
            if next < dist[target.index()] {
                dist[target.index()] = next;
                parent[target.index()] = Some(node);
                heap.push(SearchEntry {
                    node: *target,
                    distance: next,
                });
            }
        }
    }

    if dist[to.index()].is_infinite() {
        return vec![];
    }
    let mut path = vec![to];
    let mut node = to;
    while let Some(prev) = parent[node.index()] {
        path.push(prev);
        node = prev;
    }
    path.reverse();
    path
}

/// Min-heap entry ordered by distance.
#[derive(Debug, Clone, Copy)]
struct SearchEntry {
    node: NodeId,
    distance: f64,
}

impl PartialEq for SearchEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for SearchEntry {}

impl Ord for SearchEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the binary heap pops the smallest distance first.
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

impl PartialOrd for SearchEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
