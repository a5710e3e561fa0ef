//! Shared types used across all Myxo crates.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a node in the transport network.
///
/// Nodes carry no attributes beyond identity; ids are dense integer
/// indices `0..N-1` assigned in construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized unordered node pair identifying one edge.
///
/// The pair {u, v} and {v, u} denote the same edge; the constructor
/// stores the smaller id first so the key is canonical wherever it is
/// used for lookup or serialization. Self-pairs are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    a: NodeId,
    b: NodeId,
}

impl EdgeKey {
    /// Build a canonical key from two distinct node ids, in either order.
    /// Returns `None` for a self-pair.
    pub fn new(u: NodeId, v: NodeId) -> Option<Self> {
        if u == v {
            None
        } else if u < v {
            Some(Self { a: u, b: v })
        } else {
            Some(Self { a: v, b: u })
        }
    }

    /// The endpoints in canonical (ascending) order.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.a, self.b)
    }
}

/// State stored on a transport edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeState {
    /// Ease of flow across this edge. Always positive; the simulator
    /// keeps it at or above the configured floor.
    pub conductivity: f64,
    /// Number of times flow has been reinforced through this edge.
    pub reinforcements: u64,
    /// Step at which this edge last carried reinforced flow.
    pub last_reinforced_step: Step,
}

impl EdgeState {
    pub fn new(conductivity: f64) -> Self {
        Self {
            conductivity,
            reinforcements: 0,
            last_reinforced_step: 0,
        }
    }

    /// Resistance is the reciprocal of conductivity; the path solver
    /// uses it as the edge weight. Finite whenever conductivity is
    /// positive, which the graph store enforces.
    pub fn resistance(&self) -> f64 {
        1.0 / self.conductivity
    }
}

/// A position in the render plane.
///
/// Owned by the layout provider; the simulator never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One minimum-resistance path returned by the path solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowPath {
    /// Ordered node sequence from source to target inclusive.
    pub nodes: Vec<NodeId>,
    /// Total resistance summed over the path's edges.
    pub resistance: f64,
}

impl FlowPath {
    /// Number of edges on the path.
    pub fn edge_len(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Unique identifier for one simulation run, stamped on snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// The current step of the simulation, 1-based after the first advance.
pub type Step = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_is_order_independent() {
        let forward = EdgeKey::new(NodeId(2), NodeId(7)).unwrap();
        let backward = EdgeKey::new(NodeId(7), NodeId(2)).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.endpoints(), (NodeId(2), NodeId(7)));
    }

    #[test]
    fn edge_key_rejects_self_pair() {
        assert!(EdgeKey::new(NodeId(4), NodeId(4)).is_none());
    }

    #[test]
    fn resistance_is_reciprocal() {
        let state = EdgeState::new(0.25);
        assert!((state.resistance() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flow_path_edge_len() {
        let path = FlowPath {
            nodes: vec![NodeId(0), NodeId(1), NodeId(2)],
            resistance: 20.0,
        };
        assert_eq!(path.edge_len(), 2);

        let trivial = FlowPath {
            nodes: vec![NodeId(0)],
            resistance: 0.0,
        };
        assert_eq!(trivial.edge_len(), 0);
    }
}
