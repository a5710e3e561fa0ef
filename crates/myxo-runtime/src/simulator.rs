//! Plasmodium — the reinforcement step machine.
//!
//! The simulator holds no state of its own beyond the graph, the step
//! counter, and the seeded random source; it is a step function from
//! graph state to graph state. Each advance:
//! 1. Every edge decays toward the conductivity floor
//! 2. A random source/target pair is drawn (distinct endpoints)
//! 3. The path solver runs against the post-decay state
//! 4. Conductivity along the found path is reinforced; with no path,
//!    the decay stands as the step's only effect
//!
//! Path choice depends on cumulative state and state is shaped by path
//! choice; everything interesting about the model lives in that loop.

use crate::builder::PlasmodiumBuilder;
use crate::graph_impl::PetTransportGraph;
use crate::solver::least_resistance_path;
use myxo_core::error::{MyxoError, Result};
use myxo_core::graph::TransportGraph;
use myxo_core::types::*;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Configuration for a simulation run.
///
/// All parameters are fixed for the lifetime of a run and validated
/// before the run starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of nodes in the generated topology (must be > 1).
    pub num_nodes: usize,
    /// Iteration budget consumed by `run_to_completion` (default: 100).
    pub num_iterations: u64,
    /// Per-step multiplicative conductivity decay, in [0, 1) (default: 0.05).
    pub decay_rate: f64,
    /// Amount of flow pushed through the chosen path each step (default: 0.1).
    pub flow_amount: f64,
    /// How strongly flow reinforces an edge (default: 0.1). Only the
    /// product with `flow_amount` matters to the increment.
    pub reinforce_factor: f64,
    /// Uniform conductivity assigned to every generated edge (default: 0.1).
    pub initial_conductivity: f64,
    /// Probability that each unordered node pair is connected, in (0, 1)
    /// (default: 0.3).
    pub edge_probability: f64,
    /// Decay floor; conductivity never drops below this (default: 0.01).
    pub min_conductivity: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_nodes: 15,
            num_iterations: 100,
            decay_rate: 0.05,
            flow_amount: 0.1,
            reinforce_factor: 0.1,
            initial_conductivity: 0.1,
            edge_probability: 0.3,
            min_conductivity: 0.01,
        }
    }
}

impl SimulationConfig {
    /// Validate the full parameter set, including topology generation.
    /// Fatal before the run starts; a running simulation never fails.
    pub fn validate(&self) -> Result<()> {
        if self.num_nodes < 2 {
            return Err(MyxoError::invalid_config(
                "num_nodes",
                self.num_nodes.to_string(),
                "need at least 2 nodes to draw distinct endpoints",
            ));
        }
        if !(self.edge_probability > 0.0 && self.edge_probability < 1.0) {
            return Err(MyxoError::out_of_range(
                "edge_probability",
                0.0,
                1.0,
                self.edge_probability,
            ));
        }
        if !(self.initial_conductivity > 0.0) {
            return Err(MyxoError::invalid_config(
                "initial_conductivity",
                self.initial_conductivity.to_string(),
                "must be > 0",
            ));
        }
        self.validate_dynamics()?;
        if self.min_conductivity > self.initial_conductivity {
            return Err(MyxoError::invalid_config(
                "min_conductivity",
                self.min_conductivity.to_string(),
                "decay floor cannot exceed the initial conductivity",
            ));
        }
        Ok(())
    }

    /// Validate only the per-step dynamics parameters. Used when a
    /// pre-built graph is injected and the generation parameters do not
    /// apply.
    pub fn validate_dynamics(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.decay_rate) {
            return Err(MyxoError::out_of_range(
                "decay_rate",
                0.0,
                1.0,
                self.decay_rate,
            ));
        }
        if !(self.flow_amount > 0.0) {
            return Err(MyxoError::invalid_config(
                "flow_amount",
                self.flow_amount.to_string(),
                "must be > 0",
            ));
        }
        if !(self.reinforce_factor > 0.0) {
            return Err(MyxoError::invalid_config(
                "reinforce_factor",
                self.reinforce_factor.to_string(),
                "must be > 0",
            ));
        }
        if !(self.min_conductivity > 0.0) {
            return Err(MyxoError::invalid_config(
                "min_conductivity",
                self.min_conductivity.to_string(),
                "must be > 0",
            ));
        }
        Ok(())
    }
}

/// Event emitted by the simulator during a step.
#[derive(Debug, Clone, Serialize)]
pub enum StepEvent {
    /// A path was found and reinforced.
    Reinforced {
        source: NodeId,
        target: NodeId,
        path: Vec<NodeId>,
        increment: f64,
    },
    /// Source and target lie in different components; only decay applied.
    NoPath { source: NodeId, target: NodeId },
    /// A step completed.
    StepComplete { step: Step },
}

/// Result of one simulation step.
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    /// 1-based step index.
    pub step: Step,
    pub source: NodeId,
    pub target: NodeId,
    /// The reinforced path, or `None` when the endpoints were disconnected.
    pub path: Option<FlowPath>,
}

/// Statistics about a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub step: Step,
    pub nodes: usize,
    pub edges: usize,
    pub reinforced_steps: u64,
    pub no_path_steps: u64,
    pub max_conductivity: f64,
    pub mean_conductivity: f64,
}

/// The plasmodium — owns the transport graph and advances it step by step.
#[derive(Debug)]
pub struct Plasmodium {
    id: RunId,
    graph: PetTransportGraph,
    rng: StdRng,
    step: Step,

    // Configuration
    num_nodes: usize,
    num_iterations: u64,
    decay_rate: f64,
    flow_amount: f64,
    reinforce_factor: f64,
    initial_conductivity: f64,
    edge_probability: f64,
    min_conductivity: f64,

    reinforced_steps: u64,
    no_path_steps: u64,
    event_history: Vec<(Step, StepEvent)>,
}

impl Plasmodium {
    /// Create a simulator from a validated config, generating the random
    /// topology. Shorthand for the builder.
    pub fn from_config(config: SimulationConfig) -> Result<Self> {
        PlasmodiumBuilder::new().with_config(config).build()
    }

    pub(crate) fn assemble(
        graph: PetTransportGraph,
        config: SimulationConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            id: RunId::new(),
            graph,
            rng,
            step: 0,
            num_nodes: config.num_nodes,
            num_iterations: config.num_iterations,
            decay_rate: config.decay_rate,
            flow_amount: config.flow_amount,
            reinforce_factor: config.reinforce_factor,
            initial_conductivity: config.initial_conductivity,
            edge_probability: config.edge_probability,
            min_conductivity: config.min_conductivity,
            reinforced_steps: 0,
            no_path_steps: 0,
            event_history: Vec::new(),
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            num_nodes: self.num_nodes,
            num_iterations: self.num_iterations,
            decay_rate: self.decay_rate,
            flow_amount: self.flow_amount,
            reinforce_factor: self.reinforce_factor,
            initial_conductivity: self.initial_conductivity,
            edge_probability: self.edge_probability,
            min_conductivity: self.min_conductivity,
        }
    }

    /// Run a single step with randomly drawn endpoints.
    pub fn advance(&mut self) -> StepOutcome {
        let n = self.graph.node_count();
        debug_assert!(n > 1, "endpoint selection needs at least two nodes");
        let source = NodeId(self.rng.gen_range(0..n));
        let mut target = NodeId(self.rng.gen_range(0..n));
        while target == source {
            target = NodeId(self.rng.gen_range(0..n));
        }
        self.advance_with(source, target)
    }

    /// Run a single step against a fixed source/target pair.
    ///
    /// This is the full state transition minus the random draw, so a
    /// trajectory can be replayed from a recorded endpoint sequence.
    pub fn advance_with(&mut self, source: NodeId, target: NodeId) -> StepOutcome {
        self.graph.freeze();
        self.step += 1;
        let step = self.step;

        // Decay pass: uniform, from pre-step values, clamped at the floor
        self.graph.decay_all(self.decay_rate, self.min_conductivity);

        // Path query against the post-decay state
        let path = least_resistance_path(&self.graph, source, target);

        match &path {
            Some(flow) => {
                let increment = self.flow_amount * self.reinforce_factor;
                for pair in flow.nodes.windows(2) {
                    // The solver only walks edges the store knows about
                    let _ = self.graph.reinforce(pair[0], pair[1], increment, step);
                }
                self.reinforced_steps += 1;
                self.event_history.push((
                    step,
                    StepEvent::Reinforced {
                        source,
                        target,
                        path: flow.nodes.clone(),
                        increment,
                    },
                ));
            }
            None => {
                self.no_path_steps += 1;
                self.event_history
                    .push((step, StepEvent::NoPath { source, target }));
            }
        }

        self.event_history
            .push((step, StepEvent::StepComplete { step }));

        StepOutcome {
            step,
            source,
            target,
            path,
        }
    }

    /// Run the simulation for N steps.
    pub fn run(&mut self, steps: u64) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..steps {
            outcomes.push(self.advance());
        }
        outcomes
    }

    /// Run until the configured iteration budget is exhausted.
    pub fn run_to_completion(&mut self) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        while self.step < self.num_iterations {
            outcomes.push(self.advance());
        }
        outcomes
    }

    /// The largest conductivity over all edges. Defaults to 1.0 on an
    /// empty edge set (guards division by zero for consumers).
    pub fn max_conductivity(&self) -> f64 {
        let max = self
            .graph
            .edges()
            .iter()
            .map(|(_, _, state)| state.conductivity)
            .fold(f64::NEG_INFINITY, f64::max);
        if max.is_finite() && max > 0.0 {
            max
        } else {
            1.0
        }
    }

    /// Every edge with its current and normalized conductivity, in the
    /// store's stable order. Normalized values lie in (0, 1]; the current
    /// maximum maps to exactly 1.
    pub fn normalized_conductivities(&self) -> Vec<(NodeId, NodeId, f64, f64)> {
        let max = self.max_conductivity();
        self.graph
            .edges()
            .into_iter()
            .map(|(u, v, state)| (u, v, state.conductivity, state.conductivity / max))
            .collect()
    }

    /// Get run statistics.
    pub fn stats(&self) -> RunStats {
        let edges = self.graph.edges();
        let mean = if edges.is_empty() {
            0.0
        } else {
            edges.iter().map(|(_, _, s)| s.conductivity).sum::<f64>() / edges.len() as f64
        };
        RunStats {
            step: self.step,
            nodes: self.graph.node_count(),
            edges: edges.len(),
            reinforced_steps: self.reinforced_steps,
            no_path_steps: self.no_path_steps,
            max_conductivity: self.max_conductivity(),
            mean_conductivity: mean,
        }
    }

    pub fn id(&self) -> RunId {
        self.id
    }

    /// 1-based index of the last completed step; 0 before the first.
    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn min_conductivity(&self) -> f64 {
        self.min_conductivity
    }

    pub fn graph(&self) -> &PetTransportGraph {
        &self.graph
    }

    pub fn event_history(&self) -> &[(Step, StepEvent)] {
        &self.event_history
    }
}
