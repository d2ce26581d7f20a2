use std::collections::{HashMap, VecDeque};

use crate::graph::WorkingGraph;
use crate::types::{GraphError, NodeId};

/// Directed remaining-capacity graph, mutated while flow is pushed.
///
/// For every forward entry that has been reduced, a paired reverse entry
/// tracks the cumulative flow pushed so far; the pair is the mechanism for
/// flow cancellation and neither side may go negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualGraph {
    remaining: Vec<HashMap<NodeId, f64>>,
}

impl ResidualGraph {
    fn from_graph(graph: &WorkingGraph) -> ResidualGraph {
        let mut remaining = vec![HashMap::new(); graph.node_count()];
        for node in graph.node_ids() {
            for (target, capacity) in graph.neighbors(node) {
                remaining[node.index()].insert(*target, *capacity);
            }
        }
        ResidualGraph { remaining }
    }

    /// Remaining capacity of the directed pair, 0 if no entry exists.
    pub fn remaining(&self, from: NodeId, to: NodeId) -> f64 {
        self.remaining[from.index()].get(&to).copied().unwrap_or(0.0)
    }

    pub fn outgoing(&self, from: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.remaining[from.index()].iter().map(|(to, c)| (*to, *c))
    }

    fn subtract(&mut self, from: NodeId, to: NodeId, amount: f64) {
        // The entry always exists along an augmenting path; creating it at
        // 0 keeps this total rather than a panic path.
        let entry = self.remaining[from.index()].entry(to).or_insert(0.0);
        *entry -= amount;
        debug_assert!(*entry >= 0.0);
    }

    fn add(&mut self, from: NodeId, to: NodeId, amount: f64) {
        // Creates the reverse entry at 0 before the first addition.
        *self.remaining[from.index()].entry(to).or_insert(0.0) += amount;
    }
}

/// Edmonds–Karp maximum flow from `source` to `sink`.
///
/// Repeatedly finds a shortest augmenting path by breadth-first search over
/// strictly positive residual edges, pushes its bottleneck, and cancels it
/// against the reverse entries, until no augmenting path remains. The
/// returned residual graph is authoritative for used-vs-total reporting.
///
/// `max_rounds` is a defensive guard for large graphs: exceeding it aborts
/// with [`GraphError::ComputationAborted`] instead of returning a silent
/// partial result.
pub fn max_flow(
    graph: &WorkingGraph,
    source: NodeId,
    sink: NodeId,
    max_rounds: Option<u64>,
) -> Result<(f64, ResidualGraph), GraphError> {
    if !graph.contains(source) {
        return Err(GraphError::InvalidEndpoint(format!("source {source}")));
    }
    if !graph.contains(sink) {
        return Err(GraphError::InvalidEndpoint(format!("sink {sink}")));
    }

    let mut residual = ResidualGraph::from_graph(graph);
    let mut flow = 0.0;
    if source == sink {
        // A self-path is vacuous; the loop must not run.
        return Ok((flow, residual));
    }

    let mut rounds: u64 = 0;
    while let Some((new_flow, parents)) = augmenting_path(source, sink, &residual) {
        if let Some(max) = max_rounds {
            if rounds >= max {
                return Err(GraphError::ComputationAborted { rounds });
            }
        }
        rounds += 1;
        flow += new_flow;
        // `parents` runs sink -> source, so each window is (node, prev).
        for window in parents.windows(2) {
            if let [node, prev] = window {
                residual.subtract(*prev, *node, new_flow);
                residual.add(*node, *prev, new_flow);
            }
        }
        log::debug!("Augmented by {new_flow}, total flow {flow}");
    }
    Ok((flow, residual))
}

/// Breadth-first search for a shortest augmenting path, carrying the
/// running bottleneck through the queue. Returns the bottleneck and the
/// sink-to-source node trace, or None once the sink is unreachable.
fn augmenting_path(
    source: NodeId,
    sink: NodeId,
    residual: &ResidualGraph,
) -> Option<(f64, Vec<NodeId>)> {
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue = VecDeque::new();
    queue.push_back((source, f64::INFINITY));
    while let Some((node, flow)) = queue.pop_front() {
        for (target, capacity) in residual.outgoing(node) {
            if target != source && !parent.contains_key(&target) && capacity > 0.0 {
                parent.insert(target, node);
                let new_flow = flow.min(capacity);
                if target == sink {
                    return Some((new_flow, trace(parent, source, sink)));
                }
                queue.push_back((target, new_flow));
            }
        }
    }
    None
}

fn trace(parent: HashMap<NodeId, NodeId>, source: NodeId, sink: NodeId) -> Vec<NodeId> {
    let mut t = vec![sink];
    let mut node = sink;
    loop {
        node = parent[&node];
        t.push(node);
        if node == source {
            break;
        }
    }
    t
}
