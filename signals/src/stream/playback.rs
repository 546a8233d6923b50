use log::info;
use thiserror::Error;

use super::input::PathInput;
use super::output::{OpenError, OutputDevice};
use super::pipeline::{Gain, Pipeline, ProcessError};
use super::{peak_gain, ChannelCount};
use crate::process::SamplePath;

#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error(transparent)]
    Open(#[from] OpenError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Play a sample path on the default output device, peak-normalized, and
/// block until it has been played.
///
/// The audio stream isn't `Send`, so this opens the device on the calling
/// thread; UIs should call it from a thread of their own.
pub fn play(path: &SamplePath) -> Result<(), PlaybackError> {
    let sample_rate = path.grid().sample_rate();
    let device = OutputDevice::new(ChannelCount::MONO, sample_rate)?;
    info!(
        "playing {} samples at {} Hz",
        path.len(),
        u32::from(sample_rate)
    );

    let device = Pipeline::new(
        PathInput::new(path, OutputDevice::DEVICE_BUFFER as usize),
        Gain::new(peak_gain(path.values()) as f32),
        device,
    )
    .run_to_end()?;
    device.finish();
    Ok(())
}
