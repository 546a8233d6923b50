pub mod input;
pub mod output;
pub mod pipeline;
pub mod playback;
pub mod wav;

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct ChannelCount(u16);

impl ChannelCount {
    pub const MONO: ChannelCount = ChannelCount(1);
}

impl From<ChannelCount> for u16 {
    fn from(v: ChannelCount) -> u16 {
        v.0
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SampleRate(u32);

impl SampleRate {
    pub fn new(s: u32) -> SampleRate {
        SampleRate(s)
    }

    /// Seconds between consecutive samples
    pub fn period(self) -> f64 {
        1. / f64::from(self)
    }
}

impl From<SampleRate> for u32 {
    fn from(v: SampleRate) -> u32 {
        v.0
    }
}

impl From<SampleRate> for f64 {
    fn from(v: SampleRate) -> f64 {
        v.0 as f64
    }
}

impl From<SampleRate> for cpal::SampleRate {
    fn from(v: SampleRate) -> cpal::SampleRate {
        cpal::SampleRate(v.0)
    }
}

/// A batch of interlaced samples on their way to an output.
pub struct Frame {
    pub channels: ChannelCount,
    pub sample_rate: SampleRate,
    pub samples: Vec<f32>,
}

/// The factor that scales the largest magnitude to 1.0 (1.0 for silence).
/// Process samples in the demos are often tiny (e.g. noise with an intensity
/// of 1e-10) so they are only audible after normalization.
pub fn peak_gain(values: &[f64]) -> f64 {
    let peak = values.iter().fold(0f64, |acc, v| acc.max(v.abs()));
    if peak > 0. {
        1. / peak
    } else {
        1.
    }
}

/// Convert to f32 audio samples with a peak of 1.0
pub fn normalize_peak(values: &[f64]) -> Vec<f32> {
    let gain = peak_gain(values);
    values.iter().map(|v| (v * gain) as f32).collect()
}
