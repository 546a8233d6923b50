use std::f64::consts::PI;
use std::fmt;
use std::fmt::{Display, Formatter};

use approx::AbsDiffEq;

pub mod spectrum;

pub use spectrum::{Periodogram, Spectrum};

/// Root mean square (the square root of the average power)
pub fn rms(values: &[f64]) -> f64 {
    let sum_sq = values.iter().fold(0.0, |acc, x| acc + x * x);
    let mean_sq = sum_sq / values.len() as f64;
    mean_sq.sqrt()
}

/// A power ratio in decibels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Decibels(f64);

impl Decibels {
    pub fn new(db: f64) -> Decibels {
        Decibels(db)
    }

    pub fn from_power_ratio(ratio: f64) -> Decibels {
        Decibels(10. * ratio.log10())
    }

    pub fn into_power_ratio(self) -> f64 {
        10f64.powf(self.0 / 10.)
    }

    /// The ratio of amplitudes (i.e. sqrt of the power ratio)
    pub fn into_amplitude_ratio(self) -> f64 {
        10f64.powf(self.0 / 20.)
    }
}

impl Display for Decibels {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        self.0.fmt(f)?;
        f.write_str("dB")
    }
}

impl From<Decibels> for f64 {
    fn from(db: Decibels) -> f64 {
        db.0
    }
}

impl AbsDiffEq for Decibels {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Decibels, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

/// An ordinary frequency, in cycles per second
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Hz(pub f64);

impl Hz {
    pub fn from_angular(omega: f64) -> Hz {
        Hz(omega / (2. * PI))
    }

    /// The angular frequency, in rad/s
    pub fn angular(self) -> f64 {
        2. * PI * self.0
    }
}

impl From<Hz> for f64 {
    fn from(v: Hz) -> f64 {
        v.0
    }
}
