//! Path solver — least-resistance routes over the current conductivity.
//!
//! Resistance is the reciprocal of conductivity, so flow prefers strong
//! edges. All weights are positive (the store keeps conductivity bounded
//! away from zero), which makes Dijkstra correct here. A disconnected
//! source/target pair is an expected outcome and comes back as `None`,
//! never as an error.

use myxo_core::graph::TransportGraph;
use myxo_core::types::*;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Find one path from `source` to `target` minimizing total resistance.
///
/// Reads conductivities fresh from the graph at solve time. Ties are
/// broken by visit order, which is deterministic for a fixed edge
/// iteration order; the solver itself draws no randomness.
pub fn least_resistance_path<G>(graph: &G, source: NodeId, target: NodeId) -> Option<FlowPath>
where
    G: TransportGraph + ?Sized,
{
    let n = graph.node_count();
    if source.index() >= n || target.index() >= n {
        return None;
    }

    #[derive(PartialEq)]
    struct State {
        cost: f64,
        node: NodeId,
    }
    impl Eq for State {}
    impl PartialOrd for State {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            other.cost.partial_cmp(&self.cost) // min-heap
        }
    }
    impl Ord for State {
        fn cmp(&self, other: &Self) -> Ordering {
            self.partial_cmp(other).unwrap_or(Ordering::Equal)
        }
    }

    let mut dist: HashMap<NodeId, f64> = HashMap::new();
    let mut prev: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            // Reconstruct path
            let mut nodes = Vec::new();
            let mut current = target;
            while current != source {
                nodes.push(current);
                current = prev[&current];
            }
            nodes.push(source);
            nodes.reverse();
            return Some(FlowPath {
                nodes,
                resistance: cost,
            });
        }

        if cost > *dist.get(&node).unwrap_or(&f64::INFINITY) {
            continue;
        }

        for (next, edge) in graph.neighbors(node) {
            let next_cost = cost + edge.resistance();
            if next_cost < *dist.get(&next).unwrap_or(&f64::INFINITY) {
                dist.insert(next, next_cost);
                prev.insert(next, node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }
    None
}
