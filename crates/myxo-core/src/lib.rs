//! # Myxo Core
//!
//! Core traits and types for Myxo adaptive transport networks.
//!
//! Myxo models a slime-mold-like transport network: a fixed graph whose
//! edges carry a scalar *conductivity* that decays every step and is
//! reinforced wherever simulated flow passes. This crate defines the
//! shared vocabulary:
//!
//! - **Node / Edge identity** — dense integer node ids and normalized
//!   unordered edge keys ([`types::NodeId`], [`types::EdgeKey`])
//! - **Edge state** — conductivity plus reinforcement bookkeeping
//!   ([`types::EdgeState`])
//! - **Graph Store contract** — the [`graph::TransportGraph`] trait,
//!   implemented by backends in `myxo-runtime`
//! - **Errors** — configuration and graph access failures
//!   ([`error::MyxoError`])
//!
//! ## Quick Start
//!
//! ```rust
//! use myxo_core::prelude::*;
//!
//! let key = EdgeKey::new(NodeId(3), NodeId(1)).unwrap();
//! assert_eq!(key.endpoints(), (NodeId(1), NodeId(3)));
//! ```

pub mod types;
pub mod graph;
pub mod error;
pub mod prelude;
