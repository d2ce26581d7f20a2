use crate::types::node::{NodeId, NodeRegistry};

/// One route record from the dataset. Every record carries both the
/// light-year distance (used undirected by MST and APSP) and the
/// hyperflow capacity (used directed by max-flow).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
    pub capacity: f64,
}

/// The ingested dataset: the interned label registry plus the edge list
/// in input order. Input order matters — MST tie-breaking among equal
/// weights follows it.
#[derive(Debug, Default, Clone)]
pub struct EdgeDB {
    registry: NodeRegistry,
    edges: Vec<Edge>,
}

impl EdgeDB {
    pub fn new(registry: NodeRegistry, edges: Vec<Edge>) -> EdgeDB {
        EdgeDB { registry, edges }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.registry.get(label)
    }

    pub fn label(&self, id: NodeId) -> &str {
        self.registry.label(id)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.registry.ids()
    }
}
