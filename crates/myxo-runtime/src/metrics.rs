//! Quantitative measurements of the emergent network structure.
//!
//! A long run should leave a small strongly-conducting sub-network (the
//! trunk) riding on a bed of withered edges stuck at the decay floor.
//! These metrics quantify that, for headless batch analysis of runs.

use crate::simulator::Plasmodium;
use myxo_core::graph::TransportGraph;
use myxo_core::types::NodeId;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};

/// Default normalized-conductivity threshold above which an edge counts
/// as part of the trunk.
pub const TRUNK_THRESHOLD: f64 = 0.5;

/// Structural metrics of the network at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkMetrics {
    pub node_count: usize,
    pub edge_count: usize,
    /// edge_count / (node_count * (node_count - 1) / 2)
    pub density: f64,
    pub mean_conductivity: f64,
    pub max_conductivity: f64,
    /// Fraction of edges sitting at the decay floor.
    pub withered_fraction: f64,
    /// Edges whose normalized conductivity clears the trunk threshold.
    pub trunk_edges: usize,
    pub connected_components: usize,
}

/// Compute metrics with the default trunk threshold.
pub fn compute(sim: &Plasmodium) -> NetworkMetrics {
    compute_with_threshold(sim, TRUNK_THRESHOLD)
}

/// Compute metrics, counting trunk edges against a caller-chosen
/// normalized threshold.
pub fn compute_with_threshold(sim: &Plasmodium, trunk_threshold: f64) -> NetworkMetrics {
    let graph = sim.graph();
    let node_count = graph.node_count();
    let edges = graph.edges();
    let edge_count = edges.len();

    let pair_count = node_count * node_count.saturating_sub(1) / 2;
    let density = if pair_count > 0 {
        edge_count as f64 / pair_count as f64
    } else {
        0.0
    };

    let mean_conductivity = if edge_count > 0 {
        edges.iter().map(|(_, _, s)| s.conductivity).sum::<f64>() / edge_count as f64
    } else {
        0.0
    };

    let floor = sim.min_conductivity();
    let withered = edges
        .iter()
        .filter(|(_, _, s)| s.conductivity <= floor)
        .count();
    let withered_fraction = if edge_count > 0 {
        withered as f64 / edge_count as f64
    } else {
        0.0
    };

    let trunk_edges = sim
        .normalized_conductivities()
        .iter()
        .filter(|(_, _, _, norm)| *norm >= trunk_threshold)
        .count();

    NetworkMetrics {
        node_count,
        edge_count,
        density,
        mean_conductivity,
        max_conductivity: sim.max_conductivity(),
        withered_fraction,
        trunk_edges,
        connected_components: connected_components(graph),
    }
}

/// Count connected components by BFS over the adjacency lists.
pub fn connected_components<G>(graph: &G) -> usize
where
    G: TransportGraph + ?Sized,
{
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut components = 0;

    for i in 0..graph.node_count() {
        let start = NodeId(i);
        if visited.contains(&start) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited.insert(start);
        while let Some(current) = queue.pop_front() {
            for (next, _) in graph.neighbors(current) {
                if !visited.contains(&next) {
                    visited.insert(next);
                    queue.push_back(next);
                }
            }
        }
    }

    components
}
