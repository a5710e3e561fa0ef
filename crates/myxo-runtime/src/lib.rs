//! # Myxo Runtime
//!
//! The simulation engine: graph store, path solver, and the
//! decay-and-reinforce step machine.
//!
//! The runtime is the organism. Each step of a [`simulator::Plasmodium`]:
//! 1. Every edge's conductivity decays toward the floor
//! 2. A random source/target pair is drawn
//! 3. The path solver finds the least-resistance route (or reports none)
//! 4. Conductivity is reinforced along the chosen route
//!
//! Frequently used routes strengthen, unused ones wither, and an
//! efficient sub-network emerges from nothing but this feedback loop.

pub mod graph_impl;
pub mod solver;
pub mod simulator;
pub mod builder;
pub mod metrics;
