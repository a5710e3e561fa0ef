//! Full renderer handoff: simulate, capture a frame per step, export,
//! and read the run back the way an out-of-process renderer would.

use myxo_runtime::builder::PlasmodiumBuilder;
use myxo_runtime::simulator::SimulationConfig;
use myxo_viz::export::{read_frames, write_frames};
use myxo_viz::layout::spring_layout;
use myxo_viz::snapshot::capture;

#[test]
fn a_whole_run_reaches_the_renderer_intact() {
    let mut sim = PlasmodiumBuilder::new()
        .with_config(SimulationConfig {
            num_nodes: 10,
            num_iterations: 30,
            ..SimulationConfig::default()
        })
        .with_seed(99)
        .build()
        .unwrap();

    // Layout once, frames per step — the renderer's contract
    let layout = spring_layout(sim.graph(), 50, 99);
    assert_eq!(layout.len(), 10);

    let mut frames = Vec::new();
    while sim.current_step() < 30 {
        sim.advance();
        frames.push(capture(&sim));
    }
    assert_eq!(frames.len(), 30);

    // Step indices are 1-based and sequential
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.step, (i + 1) as u64);
        assert_eq!(frame.run, sim.id());
    }

    // Every frame's edge list keeps the same stable order
    let order: Vec<(usize, usize)> = frames[0]
        .edges
        .iter()
        .map(|e| (e.from.index(), e.to.index()))
        .collect();
    for frame in &frames {
        let this: Vec<(usize, usize)> = frame
            .edges
            .iter()
            .map(|e| (e.from.index(), e.to.index()))
            .collect();
        assert_eq!(this, order);
        for edge in &frame.edges {
            assert!(edge.normalized > 0.0 && edge.normalized <= 1.0);
            assert!(edge.from.index() < layout.len());
            assert!(edge.to.index() < layout.len());
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.jsonl");
    write_frames(&path, &frames).unwrap();

    let loaded = read_frames(&path).unwrap();
    assert_eq!(loaded.len(), 30);
    assert_eq!(loaded[29].step, 30);
    assert_eq!(loaded[29].edges.len(), frames[29].edges.len());
}
