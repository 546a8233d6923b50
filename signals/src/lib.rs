//! Synthesis of the signals used in the signals-and-systems demos:
//! band-limited Gaussian process sample paths, tones and complex
//! exponentials, plus the audio plumbing to listen to them.

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod config;
pub mod dsp;
pub mod error;
pub mod process;
pub mod psd;
pub mod snr;
pub mod stream;
pub mod synth;

pub use config::DemoConfig;
pub use error::{Error, Result};
pub use process::{Harmonics, SamplePath, SpectralSampler, TimeGrid, TimeWindow};
pub use psd::{BandPass, Psd};
pub use stream::{ChannelCount, SampleRate};
