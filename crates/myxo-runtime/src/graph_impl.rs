//! Concrete implementation of the TransportGraph trait using petgraph.
//!
//! The transport network is backed by petgraph's undirected `Graph` with
//! a dense `Vec` mapping node ids to petgraph's internal indices. Edge
//! iteration follows petgraph's insertion order, which is stable once
//! the topology is frozen.

use myxo_core::error::{GraphError, MyxoError, Result};
use myxo_core::graph::TransportGraph;
use myxo_core::types::*;
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Petgraph-backed implementation of the transport graph.
#[derive(Debug)]
pub struct PetTransportGraph {
    graph: Graph<NodeId, EdgeState, petgraph::Undirected>,
    /// Map from dense node id to petgraph's internal index.
    node_index: Vec<NodeIndex>,
    frozen: bool,
}

impl PetTransportGraph {
    pub fn new() -> Self {
        Self {
            graph: Graph::new_undirected(),
            node_index: Vec::new(),
            frozen: false,
        }
    }

    fn index_of(&self, node: NodeId) -> Result<NodeIndex> {
        self.node_index
            .get(node.index())
            .copied()
            .ok_or_else(|| MyxoError::node_not_found(node))
    }

    fn edge_index(&self, u: NodeId, v: NodeId) -> Result<EdgeIndex> {
        let u_idx = self.index_of(u)?;
        let v_idx = self.index_of(v)?;
        self.graph
            .find_edge(u_idx, v_idx)
            .ok_or_else(|| MyxoError::edge_not_found(u, v))
    }
}

impl Default for PetTransportGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportGraph for PetTransportGraph {
    fn add_node(&mut self) -> Result<NodeId> {
        if self.frozen {
            return Err(MyxoError::topology_frozen());
        }
        let id = NodeId(self.node_index.len());
        let idx = self.graph.add_node(id);
        self.node_index.push(idx);
        Ok(id)
    }

    fn add_edge(&mut self, u: NodeId, v: NodeId, conductivity: f64) -> Result<EdgeKey> {
        if self.frozen {
            return Err(MyxoError::topology_frozen());
        }
        let key = EdgeKey::new(u, v).ok_or(MyxoError::Graph(GraphError::SelfLoop(u)))?;
        if !(conductivity > 0.0) {
            return Err(MyxoError::Graph(GraphError::NonPositiveConductivity(
                conductivity,
            )));
        }
        let u_idx = self.index_of(u)?;
        let v_idx = self.index_of(v)?;
        if self.graph.find_edge(u_idx, v_idx).is_some() {
            return Err(MyxoError::duplicate_edge(u, v));
        }
        self.graph.add_edge(u_idx, v_idx, EdgeState::new(conductivity));
        Ok(key)
    }

    fn conductivity(&self, u: NodeId, v: NodeId) -> Result<f64> {
        let edge_idx = self.edge_index(u, v)?;
        Ok(self.graph[edge_idx].conductivity)
    }

    fn set_conductivity(&mut self, u: NodeId, v: NodeId, value: f64) -> Result<()> {
        if !(value > 0.0) {
            return Err(MyxoError::Graph(GraphError::NonPositiveConductivity(value)));
        }
        let edge_idx = self.edge_index(u, v)?;
        self.graph[edge_idx].conductivity = value;
        Ok(())
    }

    fn edge_state(&self, u: NodeId, v: NodeId) -> Result<&EdgeState> {
        let edge_idx = self.edge_index(u, v)?;
        Ok(&self.graph[edge_idx])
    }

    fn edges(&self) -> Vec<(NodeId, NodeId, &EdgeState)> {
        self.graph
            .edge_indices()
            .map(|idx| {
                let (a, b) = self.graph.edge_endpoints(idx).unwrap();
                (self.graph[a], self.graph[b], &self.graph[idx])
            })
            .collect()
    }

    fn neighbors(&self, node: NodeId) -> Vec<(NodeId, &EdgeState)> {
        let Some(&node_idx) = self.node_index.get(node.index()) else {
            return Vec::new();
        };

        self.graph
            .edges(node_idx)
            .map(|edge| {
                let other_idx = if edge.source() == node_idx {
                    edge.target()
                } else {
                    edge.source()
                };
                (self.graph[other_idx], edge.weight())
            })
            .collect()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn decay_all(&mut self, rate: f64, floor: f64) {
        for edge_idx in self.graph.edge_indices() {
            let state = &mut self.graph[edge_idx];
            state.conductivity = floor.max(state.conductivity * (1.0 - rate));
        }
    }

    fn reinforce(&mut self, u: NodeId, v: NodeId, amount: f64, step: Step) -> Result<f64> {
        let edge_idx = self.edge_index(u, v)?;
        let state = &mut self.graph[edge_idx];
        state.conductivity += amount;
        state.reinforcements += 1;
        state.last_reinforced_step = step;
        Ok(state.conductivity)
    }

    fn freeze(&mut self) {
        self.frozen = true;
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }
}
