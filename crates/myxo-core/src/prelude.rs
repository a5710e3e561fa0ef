//! Myxo Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use myxo_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    EdgeKey, EdgeState, FlowPath, NodeId, Position, RunId, Step,
};

// Re-export the TransportGraph trait
pub use crate::graph::TransportGraph;

// Re-export error types
pub use crate::error::{ConfigError, GraphError, MyxoError, Result};
