//! Node layout for rendering.
//!
//! The simulator knows nothing about space; coordinates exist purely so
//! a renderer can draw the network. Two providers: a trivial circle and
//! a seeded Fruchterman-Reingold spring embedding. Both are
//! deterministic, so a layout computed at step 0 stays valid for every
//! frame of the run.

use myxo_core::graph::TransportGraph;
use myxo_core::types::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Place nodes evenly on the unit circle, in id order.
pub fn circular_layout(node_count: usize) -> Vec<Position> {
    (0..node_count)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / node_count.max(1) as f64;
            Position::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// Spring (Fruchterman-Reingold) layout over the graph's topology.
///
/// Positions are indexed by node id. Edge conductivities do not enter
/// the forces; the layout reflects structure, the renderer maps
/// conductivity to color and width per frame.
pub fn spring_layout<G>(graph: &G, iterations: usize, seed: u64) -> Vec<Position>
where
    G: TransportGraph + ?Sized,
{
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<Position> = (0..n)
        .map(|_| Position::new(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5))
        .collect();

    // Ideal pairwise spacing for a unit-area canvas
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / iterations.max(1) as f64;

    for _ in 0..iterations {
        let mut disp = vec![(0.0f64, 0.0f64); n];

        // Repulsion between every node pair
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / dist;
                disp[i].0 += dx / dist * force;
                disp[i].1 += dy / dist * force;
                disp[j].0 -= dx / dist * force;
                disp[j].1 -= dy / dist * force;
            }
        }

        // Attraction along edges
        for (u, v, _) in graph.edges() {
            let (i, j) = (u.index(), v.index());
            let dx = pos[i].x - pos[j].x;
            let dy = pos[i].y - pos[j].y;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = dist * dist / k;
            disp[i].0 -= dx / dist * force;
            disp[i].1 -= dy / dist * force;
            disp[j].0 += dx / dist * force;
            disp[j].1 += dy / dist * force;
        }

        // Move each node, capped by the current temperature
        for i in 0..n {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt().max(1e-9);
            let step = len.min(temperature);
            pos[i].x += dx / len * step;
            pos[i].y += dy / len * step;
        }

        temperature = (temperature - cooling).max(1e-3);
    }

    pos
}
