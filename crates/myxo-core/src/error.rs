//! Error types for Myxo operations.
//!
//! Two failure categories propagate to callers: configuration errors
//! (rejected before a run starts) and graph access errors (a collaborator
//! queried an edge or node that does not exist). The no-path outcome of
//! the solver is NOT an error — it is a routine result each step and is
//! modeled as an `Option` at the solver's return type.

use crate::types::NodeId;
use std::error::Error;
use std::fmt;

/// Result type for Myxo operations.
pub type Result<T> = std::result::Result<T, MyxoError>;

/// Errors that can occur during Myxo operations.
#[derive(Debug, Clone)]
pub enum MyxoError {
    /// Graph-related errors.
    Graph(GraphError),
    /// Configuration errors.
    Config(ConfigError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for MyxoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MyxoError::Graph(e) => write!(f, "Graph error: {}", e),
            MyxoError::Config(e) => write!(f, "Config error: {}", e),
            MyxoError::Io(msg) => write!(f, "I/O error: {}", msg),
            MyxoError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for MyxoError {}

impl From<std::io::Error> for MyxoError {
    fn from(e: std::io::Error) -> Self {
        MyxoError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for MyxoError {
    fn from(e: serde_json::Error) -> Self {
        MyxoError::Serialization(e.to_string())
    }
}

/// Graph-related errors.
#[derive(Debug, Clone)]
pub enum GraphError {
    /// Node not found.
    NodeNotFound(NodeId),
    /// Edge not found.
    EdgeNotFound(NodeId, NodeId),
    /// The pair already has an edge; the edge set holds one instance per pair.
    DuplicateEdge(NodeId, NodeId),
    /// Both endpoints are the same node.
    SelfLoop(NodeId),
    /// Construction op after the topology was frozen.
    TopologyFrozen,
    /// Conductivity must stay positive so resistance stays finite.
    NonPositiveConductivity(f64),
    /// Graph has no nodes.
    EmptyGraph,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeNotFound(id) => write!(f, "Node not found: {}", id),
            GraphError::EdgeNotFound(u, v) => write!(f, "Edge not found: {{{}, {}}}", u, v),
            GraphError::DuplicateEdge(u, v) => {
                write!(f, "Edge already exists: {{{}, {}}}", u, v)
            }
            GraphError::SelfLoop(id) => write!(f, "Self-loop rejected at node {}", id),
            GraphError::TopologyFrozen => {
                write!(f, "Topology is frozen; edges are fixed after construction")
            }
            GraphError::NonPositiveConductivity(c) => {
                write!(f, "Invalid conductivity: {} (must be > 0)", c)
            }
            GraphError::EmptyGraph => write!(f, "Graph is empty"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Invalid value.
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
            ConfigError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
        }
    }
}

// Convenience constructors
impl MyxoError {
    pub fn node_not_found(id: NodeId) -> Self {
        MyxoError::Graph(GraphError::NodeNotFound(id))
    }

    pub fn edge_not_found(u: NodeId, v: NodeId) -> Self {
        MyxoError::Graph(GraphError::EdgeNotFound(u, v))
    }

    pub fn duplicate_edge(u: NodeId, v: NodeId) -> Self {
        MyxoError::Graph(GraphError::DuplicateEdge(u, v))
    }

    pub fn topology_frozen() -> Self {
        MyxoError::Graph(GraphError::TopologyFrozen)
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        MyxoError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        MyxoError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}
