use crate::types::edge::EdgeDB;
use crate::types::{GraphError, NodeId};

pub mod apsp;
pub mod cycle;
pub mod flow;
pub mod mst;


pub use crate::graph::apsp::{all_pairs_shortest_paths, diameter, reconstruct_path};
pub use crate::graph::flow::max_flow;
pub use crate::graph::mst::build_mst;

/// Substitute for a declared zero distance. A zero-length edge would be
/// indistinguishable from "no edge" in the shortest-path sentinels, so
/// ingestion-declared zeros are coerced to this epsilon everywhere the
/// distance is consumed.
pub const MIN_EDGE_WEIGHT: f64 = 1e-6;

/// Index-based adjacency built per algorithm from the edge list:
/// undirected weighted for MST/APSP, directed capacitated for max-flow.
#[derive(Debug, Clone)]
pub struct WorkingGraph {
    adj: Vec<Vec<(NodeId, f64)>>,
}

impl WorkingGraph {
    fn with_nodes(node_count: usize) -> WorkingGraph {
        WorkingGraph {
            adj: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.adj.len()
    }

    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        &self.adj[node.index()]
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.adj.len() as u32).map(NodeId::new)
    }
}

/// Builds the undirected distance graph: every edge contributes entries in
/// both directions with identical weight. Zero distances become
/// [`MIN_EDGE_WEIGHT`].
pub fn build_undirected(db: &EdgeDB) -> Result<WorkingGraph, GraphError> {
    let mut graph = WorkingGraph::with_nodes(db.node_count());
    for edge in db.edges() {
        let weight = effective_distance(edge.distance)?;
        graph.adj[edge.from.index()].push((edge.to, weight));
        graph.adj[edge.to.index()].push((edge.from, weight));
    }
    Ok(graph)
}

/// Builds the directed capacity graph: only the declared direction carries
/// initial capacity. Zero capacities are kept (they contribute no flow).
pub fn build_directed(db: &EdgeDB) -> Result<WorkingGraph, GraphError> {
    let mut graph = WorkingGraph::with_nodes(db.node_count());
    for edge in db.edges() {
        check_finite(edge.capacity)?;
        graph.adj[edge.from.index()].push((edge.to, edge.capacity));
    }
    Ok(graph)
}

/// The distance an edge contributes to MST ordering and APSP relaxation:
/// validated finite non-negative, with zero coerced to the epsilon.
pub(crate) fn effective_distance(distance: f64) -> Result<f64, GraphError> {
    check_finite(distance)?;
    if distance == 0.0 {
        Ok(MIN_EDGE_WEIGHT)
    } else {
        Ok(distance)
    }
}

fn check_finite(weight: f64) -> Result<(), GraphError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(GraphError::MalformedEdge(format!(
            "edge weight must be finite and non-negative, but got {weight}"
        )));
    }
    Ok(())
}
