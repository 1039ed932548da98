//! Side-effect hook for visualisation and frame export.
//!
//! The world hands a [`Frame`] to an attached [`FrameObserver`] after every
//! physics step. Observers only read; nothing they do feeds back into the run.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use cfsim_core::Scalar;
use cfsim_dynamics::BodyKind;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct BodyFrame {
    pub name: String,
    pub kind: BodyKind,
    pub x: Scalar,
    pub y: Scalar,
    pub angle: Scalar,
}

/// Snapshot of every live body right after a step.
#[derive(Clone, Debug, Serialize)]
pub struct Frame {
    pub step: u32,
    pub bodies: Vec<BodyFrame>,
}

pub trait FrameObserver {
    fn on_frame(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> FrameObserver for F {
    fn on_frame(&mut self, frame: &Frame) { self(frame) }
}

/// Keeps frames in memory; optionally drops every frame whose step is not a
/// multiple of `every`.
pub struct FrameRecorder {
    frames: Vec<Frame>,
    every: u32,
}

impl FrameRecorder {
    pub fn new() -> Self { Self { frames: Vec::new(), every: 1 } }
    pub fn every(mut self, n: u32) -> Self { self.every = n.max(1); self }

    pub fn frames(&self) -> &[Frame] { &self.frames }
    pub fn len(&self) -> usize { self.frames.len() }
    pub fn is_empty(&self) -> bool { self.frames.is_empty() }

    /// One JSON object per line, oldest first.
    pub fn write_jsonl(&self, path: &Path) -> Result<()> {
        let f = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut w = BufWriter::new(f);
        for fr in &self.frames {
            serde_json::to_writer(&mut w, fr)?;
            w.write_all(b"\n")?;
        }
        w.flush()?;
        Ok(())
    }
}

impl Default for FrameRecorder {
    fn default() -> Self { Self::new() }
}

impl FrameObserver for FrameRecorder {
    fn on_frame(&mut self, frame: &Frame) {
        if frame.step % self.every == 0 { self.frames.push(frame.clone()); }
    }
}
