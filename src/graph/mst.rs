use std::collections::HashSet;

use crate::graph::cycle::would_form_cycle;
use crate::graph::effective_distance;
use crate::types::edge::EdgeDB;
use crate::types::{Edge, GraphError, NodeId};

/// Result of the minimum spanning tree construction: the accepted edges in
/// acceptance order and their summed weight. If the input graph is
/// disconnected this is a minimum spanning forest, distinguishable by
/// comparing [`MstResult::covered_nodes`] against the full node set.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult {
    pub edges: Vec<Edge>,
    pub total_weight: f64,
}

impl MstResult {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn covered_nodes(&self) -> HashSet<NodeId> {
        let mut nodes = HashSet::new();
        for edge in &self.edges {
            nodes.insert(edge.from);
            nodes.insert(edge.to);
        }
        nodes
    }

    /// True iff the result spans every node touched by an edge.
    pub fn spans(&self, node_count: usize) -> bool {
        self.covered_nodes().len() == node_count
    }
}

/// Kruskal's algorithm with a traversal-based cycle check.
///
/// Edges are sorted ascending by distance with a stable sort, so ties keep
/// their input order; each edge is accepted iff it does not close a cycle
/// against the edges accepted so far. Discarded edges are never
/// reconsidered. Each acceptance is logged as it is made.
pub fn build_mst(db: &EdgeDB) -> Result<MstResult, GraphError> {
    let mut sorted_edges = Vec::with_capacity(db.edge_count());
    for edge in db.edges() {
        sorted_edges.push(Edge {
            distance: effective_distance(edge.distance)?,
            ..*edge
        });
    }
    // Stable: equal weights stay in input order.
    sorted_edges.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut mst: Vec<Edge> = Vec::new();
    let mut total_weight = 0.0;
    for edge in sorted_edges {
        if !would_form_cycle(&mst, edge.from, edge.to) {
            log::info!(
                "Added edge: {} -> {} ({})",
                db.label(edge.from),
                db.label(edge.to),
                edge.distance
            );
            total_weight += edge.distance;
            mst.push(edge);
        }
    }
    Ok(MstResult {
        edges: mst,
        total_weight,
    })
}
