//! Per-step snapshots for the renderer.
//!
//! A frame is everything a renderer needs for one tick: the step index,
//! the full edge list with current and normalized conductivity, and the
//! normalization maximum. Capturing a frame reads the simulator, never
//! writes it.

use myxo_core::types::{NodeId, RunId, Step};
use myxo_runtime::simulator::Plasmodium;
use serde::{Deserialize, Serialize};

/// One edge as the renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeFrame {
    pub from: NodeId,
    pub to: NodeId,
    pub conductivity: f64,
    /// Conductivity scaled by the frame's maximum, in (0, 1].
    pub normalized: f64,
}

/// A complete snapshot of the network at one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub run: RunId,
    /// 1-based step index of the last completed step.
    pub step: Step,
    /// The normalization divisor (1.0 when the edge set is empty).
    pub max_conductivity: f64,
    pub edges: Vec<EdgeFrame>,
}

/// Capture the current state of a simulator as a frame.
///
/// The edge order matches the store's stable iteration order, so a
/// renderer can pair frames with a layout computed once up front.
pub fn capture(sim: &Plasmodium) -> Frame {
    let edges = sim
        .normalized_conductivities()
        .into_iter()
        .map(|(from, to, conductivity, normalized)| EdgeFrame {
            from,
            to,
            conductivity,
            normalized,
        })
        .collect();

    Frame {
        run: sim.id(),
        step: sim.current_step(),
        max_conductivity: sim.max_conductivity(),
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use myxo_core::graph::TransportGraph;
    use myxo_runtime::builder::PlasmodiumBuilder;
    use myxo_runtime::graph_impl::PetTransportGraph;

    #[test]
    fn frame_carries_normalized_edges() {
        let mut graph = PetTransportGraph::new();
        for _ in 0..3 {
            graph.add_node().unwrap();
        }
        graph.add_edge(NodeId(0), NodeId(1), 0.4).unwrap();
        graph.add_edge(NodeId(1), NodeId(2), 0.1).unwrap();

        let sim = PlasmodiumBuilder::new()
            .with_graph(graph)
            .with_seed(1)
            .build()
            .unwrap();

        let frame = capture(&sim);
        assert_eq!(frame.step, 0);
        assert_eq!(frame.edges.len(), 2);
        assert!((frame.max_conductivity - 0.4).abs() < 1e-12);

        for edge in &frame.edges {
            assert!(edge.normalized > 0.0 && edge.normalized <= 1.0);
        }
        assert!(frame
            .edges
            .iter()
            .any(|e| (e.normalized - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn frame_tracks_the_step_counter() {
        let mut sim = PlasmodiumBuilder::new().with_seed(4).build().unwrap();
        sim.run(25);
        let frame = capture(&sim);
        assert_eq!(frame.step, 25);
        assert_eq!(frame.run, sim.id());
    }

    #[test]
    fn capture_does_not_disturb_the_simulation() {
        let mut sim = PlasmodiumBuilder::new().with_seed(8).build().unwrap();
        sim.run(10);
        let before: Vec<f64> = sim
            .graph()
            .edges()
            .iter()
            .map(|(_, _, s)| s.conductivity)
            .collect();
        let _ = capture(&sim);
        let _ = capture(&sim);
        let after: Vec<f64> = sim
            .graph()
            .edges()
            .iter()
            .map(|(_, _, s)| s.conductivity)
            .collect();
        assert_eq!(before, after);
    }
}
