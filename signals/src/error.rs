use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("time window [{start}, {end}) must have finite bounds")]
    NonFiniteWindow { start: f64, end: f64 },
    #[error("sample rate must be positive")]
    ZeroSampleRate,
    #[error("a window of {span} s at {sample_rate} Hz has too many samples")]
    WindowTooLong { span: f64, sample_rate: u32 },
    #[error("bandwidth must be positive and finite, got {0} Hz")]
    InvalidBandwidth(f64),
    #[error("expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("sample paths are on different time grids")]
    GridMismatch,
    #[error("wav encoding failed")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
