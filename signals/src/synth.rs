use num_complex::Complex;

use crate::dsp::Hz;
use crate::process::{SamplePath, TimeGrid};
use crate::stream::SampleRate;

/// An iterator that returns an infinite sequence of sample times (seconds)
/// for a given sample rate (which is a useful base for synthesizing signals)
pub struct SampleClock {
    i: u64,
    start: f64,
    sample_rate: f64,
}

impl SampleClock {
    pub fn new(sample_rate: SampleRate) -> SampleClock {
        SampleClock::starting_at(0., sample_rate)
    }

    pub fn starting_at(start: f64, sample_rate: SampleRate) -> SampleClock {
        SampleClock {
            i: 0,
            start,
            sample_rate: f64::from(sample_rate),
        }
    }
}

impl Iterator for SampleClock {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let res = Some(self.start + self.i as f64 / self.sample_rate);
        self.i += 1;
        res
    }
}

/// A deterministic sinusoid: amplitude·cos(2π·frequency·t + phase)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub amplitude: f64,
    pub frequency: Hz,
    /// radians
    pub phase: f64,
}

impl Tone {
    pub fn new(amplitude: f64, frequency: Hz) -> Tone {
        Tone {
            amplitude,
            frequency,
            phase: 0.,
        }
    }

    pub fn with_phase(mut self, phase: f64) -> Tone {
        self.phase = phase;
        self
    }

    pub fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency.angular() * t + self.phase).cos()
    }

    pub fn render(&self, grid: TimeGrid) -> SamplePath {
        SamplePath::from_fn(grid, |t| self.value_at(t))
    }

    /// An endless stream of samples, starting at t = 0
    pub fn iter(self, sample_rate: SampleRate) -> ToneIterator {
        ToneIterator {
            tone: self,
            clock: SampleClock::new(sample_rate),
        }
    }

    /// Average power, A²/2
    pub fn power(&self) -> f64 {
        self.amplitude * self.amplitude / 2.
    }
}

/// A·cos(ω₀·t) at each time of the grid, with ω₀ in rad/s
pub fn message(amplitude: f64, omega: f64, grid: TimeGrid) -> SamplePath {
    Tone::new(amplitude, Hz::from_angular(omega)).render(grid)
}

/// An Iterator that produces an infinite sinusoid
pub struct ToneIterator {
    tone: Tone,
    clock: SampleClock,
}

impl Iterator for ToneIterator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.clock.next().map(|t| self.tone.value_at(t))
    }
}

/// A complex exponential amplitude·e^{i(2π·frequency·t + phase)}, whose real
/// part is the corresponding `Tone`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Phasor {
    pub amplitude: f64,
    pub frequency: Hz,
    pub phase: f64,
}

impl Phasor {
    pub fn new(amplitude: f64, frequency: Hz) -> Phasor {
        Phasor {
            amplitude,
            frequency,
            phase: 0.,
        }
    }

    pub fn with_phase(mut self, phase: f64) -> Phasor {
        self.phase = phase;
        self
    }

    pub fn value_at(&self, t: f64) -> Complex<f64> {
        Complex::from_polar(self.amplitude, self.frequency.angular() * t + self.phase)
    }

    pub fn render(&self, grid: TimeGrid) -> Vec<Complex<f64>> {
        grid.iter().map(|t| self.value_at(t)).collect()
    }

    pub fn real_part(&self) -> Tone {
        Tone {
            amplitude: self.amplitude,
            frequency: self.frequency,
            phase: self.phase,
        }
    }
}
