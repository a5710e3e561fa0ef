//! The Graph Store contract — nodes, fixed edges, mutable conductivity.
//!
//! The transport graph is the only simulation state. It is built once,
//! frozen, and from then on only edge conductivities change. This is a
//! trait rather than a concrete type so that different backends can
//! serve as the store; `myxo-runtime` ships the petgraph-backed one.

use crate::error::Result;
use crate::types::*;

/// Read/write access to the transport network.
///
/// Construction ops (`add_node`, `add_edge`) are only valid before the
/// graph is frozen; the simulator freezes it on the first step. Edge
/// iteration order is backend-defined but must be stable while the graph
/// is frozen, so a decay pass and a render snapshot taken in the same
/// step observe the edges in the same order.
pub trait TransportGraph {
    /// Add a node and return its id. Ids are assigned densely in
    /// construction order, starting at 0.
    fn add_node(&mut self) -> Result<NodeId>;

    /// Add an undirected edge with an initial conductivity.
    ///
    /// Fails on self-loops, duplicate pairs, unknown endpoints,
    /// non-positive conductivity, and frozen topology.
    fn add_edge(&mut self, u: NodeId, v: NodeId, conductivity: f64) -> Result<EdgeKey>;

    /// Current conductivity of the edge {u, v}.
    fn conductivity(&self, u: NodeId, v: NodeId) -> Result<f64>;

    /// Overwrite the conductivity of the edge {u, v}.
    /// The value must be positive; resistance has to stay finite.
    fn set_conductivity(&mut self, u: NodeId, v: NodeId, value: f64) -> Result<()>;

    /// Full edge state of the edge {u, v}.
    fn edge_state(&self, u: NodeId, v: NodeId) -> Result<&EdgeState>;

    /// All edges as (u, v, state) triples, in the store's stable order.
    fn edges(&self) -> Vec<(NodeId, NodeId, &EdgeState)>;

    /// Neighbors of a node with the connecting edge state.
    /// Unknown nodes yield an empty list.
    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, &EdgeState)>;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Decay every edge: `c <- max(floor, c * (1 - rate))`.
    ///
    /// Each edge's new value is computed from its own pre-pass value;
    /// the pass never removes edges, it clamps them at the floor.
    fn decay_all(&mut self, rate: f64, floor: f64);

    /// Add `amount` to the conductivity of {u, v} and record the
    /// reinforcement at `step`. Returns the new conductivity.
    fn reinforce(&mut self, u: NodeId, v: NodeId, amount: f64, step: Step) -> Result<f64>;

    /// Freeze the topology. Construction ops fail afterwards. Idempotent.
    fn freeze(&mut self);

    /// Whether the topology has been frozen.
    fn is_frozen(&self) -> bool;
}
