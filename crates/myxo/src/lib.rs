//! # Myxo
//!
//! Adaptive transport networks through decay-and-reinforcement simulation.
//!
//! Myxo models a slime-mold-like transport network: a fixed random graph
//! whose edges carry a conductivity that decays every step and is
//! reinforced along the least-resistance path between a randomly drawn
//! source and target. Frequently used routes strengthen, unused routes
//! wither to a floor, and an efficient sub-network emerges from the
//! feedback between path choice and cumulative state.
//!
//! ## Quick Start
//!
//! ```rust
//! use myxo::prelude::*;
//!
//! let mut sim = PlasmodiumBuilder::new()
//!     .with_config(SimulationConfig {
//!         num_nodes: 12,
//!         num_iterations: 50,
//!         ..SimulationConfig::default()
//!     })
//!     .with_seed(42)
//!     .build()
//!     .unwrap();
//!
//! let outcomes = sim.run_to_completion();
//! assert_eq!(outcomes.len(), 50);
//!
//! // Hand the renderer its per-step view
//! let frame = capture(&sim);
//! for edge in &frame.edges {
//!     assert!(edge.normalized > 0.0 && edge.normalized <= 1.0);
//! }
//! ```
//!
//! ## Architecture
//!
//! Myxo is organized into several crates:
//!
//! - [`myxo_core`] - Shared types, the `TransportGraph` contract, errors
//! - [`myxo_runtime`] - Graph store, path solver, the step machine
//! - [`myxo_viz`] - Snapshots, node layout, frame export for renderers
//!
//! ## The step machine
//!
//! Each `advance()`:
//!
//! 1. **Decay** — every edge: `c <- max(floor, c * (1 - decay_rate))`
//! 2. **Selection** — uniform random source and target, distinct
//! 3. **Path query** — Dijkstra over resistance = 1/conductivity
//! 4. **Reinforcement** — `c += flow_amount * reinforce_factor` along
//!    the path; with no path, decay stands as the step's only effect
//!
//! The no-path outcome is a routine result (disconnected random graphs
//! are common), never an error. The simulator is deterministic for a
//! fixed seed, including topology generation and endpoint draws.

// Re-export all subcrates
pub use myxo_core as core;
pub use myxo_runtime as runtime;
pub use myxo_viz as viz;

/// Prelude module for convenient imports.
///
/// ```rust
/// use myxo::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use myxo_core::types::{
        EdgeKey, EdgeState, FlowPath, NodeId, Position, RunId, Step,
    };

    // Core traits
    pub use myxo_core::graph::TransportGraph;

    // Error types
    pub use myxo_core::error::{ConfigError, GraphError, MyxoError, Result};

    // Runtime
    pub use myxo_runtime::builder::{random_topology, PlasmodiumBuilder};
    pub use myxo_runtime::graph_impl::PetTransportGraph;
    pub use myxo_runtime::metrics::{self, NetworkMetrics};
    pub use myxo_runtime::simulator::{
        Plasmodium, RunStats, SimulationConfig, StepEvent, StepOutcome,
    };
    pub use myxo_runtime::solver::least_resistance_path;

    // Viz
    pub use myxo_viz::export::{read_frames, write_frames};
    pub use myxo_viz::layout::{circular_layout, spring_layout};
    pub use myxo_viz::snapshot::{capture, EdgeFrame, Frame};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
