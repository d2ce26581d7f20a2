use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Index of an interned node label. Node identity is label equality;
/// the registry maps labels to dense indices so the algorithms can use
/// vector-based adjacency instead of label-keyed maps.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: u32) -> NodeId {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Interns node labels in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct NodeRegistry {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
}

impl NodeRegistry {
    pub fn new() -> NodeRegistry {
        NodeRegistry::default()
    }

    pub fn intern(&mut self, label: &str) -> NodeId {
        if let Some(id) = self.index.get(label) {
            return *id;
        }
        let id = NodeId(self.labels.len() as u32);
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        id
    }

    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.index()]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len() as u32).map(NodeId)
    }
}
