//! Plasmodium builder — configuration, seeding, and topology injection.
//!
//! The builder is the seam for the two external collaborators the
//! simulator depends on at construction time: the random source (a seed,
//! so property tests can replay exact trajectories) and the graph
//! provider. Without an injected graph it generates the default random
//! topology: each unordered node pair is connected with the configured
//! probability and every edge starts at the same conductivity.
//!
//! # Example
//!
//! ```rust
//! use myxo_runtime::builder::PlasmodiumBuilder;
//! use myxo_runtime::simulator::SimulationConfig;
//!
//! let mut sim = PlasmodiumBuilder::new()
//!     .with_config(SimulationConfig::default())
//!     .with_seed(42)
//!     .build()
//!     .unwrap();
//!
//! sim.run(100);
//! ```

use crate::graph_impl::PetTransportGraph;
use crate::simulator::{Plasmodium, SimulationConfig};
use myxo_core::error::{MyxoError, Result};
use myxo_core::graph::TransportGraph;
use myxo_core::types::NodeId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builder for creating simulators with optional seeding and topology
/// injection.
pub struct PlasmodiumBuilder {
    config: SimulationConfig,
    seed: Option<u64>,
    graph: Option<PetTransportGraph>,
}

impl Default for PlasmodiumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlasmodiumBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
            seed: None,
            graph: None,
        }
    }

    /// Set the simulation configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the random source. The same seed replays the same topology
    /// and the same endpoint draws, hence the same trajectory. Unseeded
    /// builders draw entropy from the OS.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inject a pre-built topology instead of generating one.
    ///
    /// The graph must have at least two nodes. Generation-only
    /// parameters (`num_nodes`, `edge_probability`,
    /// `initial_conductivity`) are ignored in this mode.
    pub fn with_graph(mut self, graph: PetTransportGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Validate and build the simulator.
    pub fn build(self) -> Result<Plasmodium> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let graph = match self.graph {
            Some(graph) => {
                self.config.validate_dynamics()?;
                if graph.node_count() < 2 {
                    return Err(MyxoError::invalid_config(
                        "graph",
                        graph.node_count().to_string(),
                        "an injected graph needs at least 2 nodes",
                    ));
                }
                graph
            }
            None => {
                self.config.validate()?;
                random_topology(&self.config, &mut rng)?
            }
        };

        Ok(Plasmodium::assemble(graph, self.config, rng))
    }
}

/// Generate the default random topology: every unordered node pair is
/// connected with probability `edge_probability`, each edge starting at
/// `initial_conductivity`.
pub fn random_topology(
    config: &SimulationConfig,
    rng: &mut StdRng,
) -> Result<PetTransportGraph> {
    let mut graph = PetTransportGraph::new();
    for _ in 0..config.num_nodes {
        graph.add_node()?;
    }
    for i in 0..config.num_nodes {
        for j in (i + 1)..config.num_nodes {
            if rng.gen::<f64>() < config.edge_probability {
                graph.add_edge(NodeId(i), NodeId(j), config.initial_conductivity)?;
            }
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = PlasmodiumBuilder::new().with_seed(1).build().unwrap();
        assert_eq!(sim.graph().node_count(), 15);
        assert_eq!(sim.current_step(), 0);
    }

    #[test]
    fn same_seed_generates_the_same_topology() {
        let a = PlasmodiumBuilder::new().with_seed(5).build().unwrap();
        let b = PlasmodiumBuilder::new().with_seed(5).build().unwrap();

        let edges_a: Vec<(NodeId, NodeId)> =
            a.graph().edges().iter().map(|(u, v, _)| (*u, *v)).collect();
        let edges_b: Vec<(NodeId, NodeId)> =
            b.graph().edges().iter().map(|(u, v, _)| (*u, *v)).collect();
        assert_eq!(edges_a, edges_b);
        assert!(!edges_a.is_empty());
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = PlasmodiumBuilder::new().with_seed(1).build().unwrap();
        let b = PlasmodiumBuilder::new().with_seed(2).build().unwrap();
        let edges_a: Vec<(NodeId, NodeId)> =
            a.graph().edges().iter().map(|(u, v, _)| (*u, *v)).collect();
        let edges_b: Vec<(NodeId, NodeId)> =
            b.graph().edges().iter().map(|(u, v, _)| (*u, *v)).collect();
        assert_ne!(edges_a, edges_b);
    }

    #[test]
    fn generated_edges_start_uniform() {
        let sim = PlasmodiumBuilder::new().with_seed(9).build().unwrap();
        let c0 = sim.config().initial_conductivity;
        for (_, _, state) in sim.graph().edges() {
            assert_eq!(state.conductivity, c0);
            assert_eq!(state.reinforcements, 0);
        }
    }

    #[test]
    fn invalid_config_fails_before_the_run() {
        let err = PlasmodiumBuilder::new()
            .with_config(SimulationConfig {
                num_nodes: 1,
                ..SimulationConfig::default()
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, MyxoError::Config(_)));
    }

    #[test]
    fn injected_graph_skips_generation_checks() {
        let mut graph = PetTransportGraph::new();
        for _ in 0..3 {
            graph.add_node().unwrap();
        }
        graph.add_edge(NodeId(0), NodeId(1), 0.4).unwrap();

        // num_nodes/edge_probability would be invalid for generation,
        // but an injected topology does not use them.
        let sim = PlasmodiumBuilder::new()
            .with_config(SimulationConfig {
                num_nodes: 0,
                edge_probability: 0.0,
                ..SimulationConfig::default()
            })
            .with_graph(graph)
            .with_seed(1)
            .build()
            .unwrap();
        assert_eq!(sim.graph().node_count(), 3);
    }

    #[test]
    fn injected_graph_needs_two_nodes() {
        let mut graph = PetTransportGraph::new();
        graph.add_node().unwrap();
        let err = PlasmodiumBuilder::new()
            .with_graph(graph)
            .with_seed(1)
            .build()
            .unwrap_err();
        assert!(matches!(err, MyxoError::Config(_)));
    }
}
