use std::slice::Chunks;

use thiserror::Error;

use super::{ChannelCount, Frame, SampleRate};
use crate::process::SamplePath;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream ended")]
    StreamEnded,
}

pub trait Input {
    fn next(&mut self) -> Result<Frame, InputError>;
}

/// Mono frames of a sample path, in order, at the path's own sample rate.
/// The last frame is shorter than `frame_len` unless it divides the path.
pub struct PathInput<'a> {
    chunks: Chunks<'a, f64>,
    sample_rate: SampleRate,
}

impl<'a> PathInput<'a> {
    pub fn new(path: &'a SamplePath, frame_len: usize) -> PathInput<'a> {
        assert!(frame_len > 0);
        PathInput {
            chunks: path.values().chunks(frame_len),
            sample_rate: path.grid().sample_rate(),
        }
    }
}

impl Input for PathInput<'_> {
    fn next(&mut self) -> Result<Frame, InputError> {
        let chunk = self.chunks.next().ok_or(InputError::StreamEnded)?;
        Ok(Frame {
            channels: ChannelCount::MONO,
            sample_rate: self.sample_rate,
            samples: chunk.iter().map(|v| *v as f32).collect(),
        })
    }
}
