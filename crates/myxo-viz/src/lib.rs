//! # Myxo Viz
//!
//! The renderer-facing side of Myxo: per-step conductivity snapshots,
//! node layout, and frame export.
//!
//! Rendering itself lives outside this workspace. This crate only
//! produces what a renderer consumes: serializable [`snapshot::Frame`]s
//! with normalized conductivities, [`layout`] coordinates for the nodes,
//! and a newline-delimited JSON [`export`] format for out-of-process
//! consumers. None of it feeds back into the simulation; the simulator
//! runs headlessly without this crate.

pub mod snapshot;
pub mod layout;
pub mod export;
