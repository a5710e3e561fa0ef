//! Frame export — newline-delimited JSON for out-of-process renderers.
//!
//! One frame per line, so a consumer can stream a long run without
//! holding it in memory.

use crate::snapshot::Frame;
use myxo_core::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write frames to a file, one JSON object per line.
pub fn write_frames<P: AsRef<Path>>(path: P, frames: &[Frame]) -> Result<()> {
    let mut file = File::create(path)?;
    for frame in frames {
        let line = serde_json::to_string(frame)?;
        writeln!(file, "{}", line)?;
    }
    Ok(())
}

/// Read frames back from a newline-delimited JSON file.
pub fn read_frames<P: AsRef<Path>>(path: P) -> Result<Vec<Frame>> {
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(Into::into))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::capture;
    use myxo_runtime::builder::PlasmodiumBuilder;

    #[test]
    fn frames_round_trip_through_a_file() {
        let mut sim = PlasmodiumBuilder::new().with_seed(21).build().unwrap();

        let mut frames = Vec::new();
        for _ in 0..5 {
            sim.advance();
            frames.push(capture(&sim));
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames.jsonl");
        write_frames(&path, &frames).unwrap();

        let loaded = read_frames(&path).unwrap();
        assert_eq!(loaded.len(), frames.len());
        for (a, b) in frames.iter().zip(&loaded) {
            assert_eq!(a.run, b.run);
            assert_eq!(a.step, b.step);
            assert_eq!(a.edges.len(), b.edges.len());
            for (ea, eb) in a.edges.iter().zip(&b.edges) {
                assert_eq!(ea.from, eb.from);
                assert_eq!(ea.to, eb.to);
                assert!((ea.conductivity - eb.conductivity).abs() < 1e-12);
                assert!((ea.normalized - eb.normalized).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_frames("/nonexistent/frames.jsonl").unwrap_err();
        assert!(matches!(err, myxo_core::error::MyxoError::Io(_)));
    }

    #[test]
    fn garbage_lines_are_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jsonl");
        std::fs::write(&path, "not json\n").unwrap();
        let err = read_frames(&path).unwrap_err();
        assert!(matches!(
            err,
            myxo_core::error::MyxoError::Serialization(_)
        ));
    }
}
