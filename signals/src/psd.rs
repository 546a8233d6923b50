//! Power spectral densities, as functions of angular frequency (rad/s).
//!
//! PSDs here are two-sided and even: the density at -ω is the density at ω.
//! Under that convention a process with PSD S has variance
//! (1/2π)·∫S(ω)dω = (1/π)·∫₀^∞ S(ω)dω.

use std::f64::consts::PI;

use ndarray::{Array, ArrayBase, Data, Dimension};

pub trait Psd {
    /// The (non-negative) spectral density at angular frequency `omega`
    fn density(&self, omega: f64) -> f64;

    /// The density at each element of an array of angular frequencies (of
    /// any shape)
    fn evaluate<S, D>(&self, omegas: &ArrayBase<S, D>) -> Array<f64, D>
    where
        S: Data<Elem = f64>,
        D: Dimension,
        Self: Sized,
    {
        omegas.mapv(|omega| self.density(omega))
    }
}

impl<F: Fn(f64) -> f64> Psd for F {
    fn density(&self, omega: f64) -> f64 {
        self(omega)
    }
}

/// An ideal (rectangular) band-pass PSD: `intensity` for low <= |ω| <= high,
/// 0 elsewhere.
/// If low > high the band is empty and the density is 0 everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandPass {
    pub intensity: f64,
    pub low: f64,
    pub high: f64,
}

impl BandPass {
    pub fn new(intensity: f64, low: f64, high: f64) -> BandPass {
        BandPass {
            intensity,
            low,
            high,
        }
    }

    /// Flat from DC up to `cutoff`
    pub fn low_pass(intensity: f64, cutoff: f64) -> BandPass {
        BandPass::new(intensity, 0., cutoff)
    }

    /// A band of half-width `half_width` centered on `center`, clipped at DC.
    pub fn around(intensity: f64, center: f64, half_width: f64) -> BandPass {
        BandPass::new(intensity, (center - half_width).max(0.), center + half_width)
    }

    /// The width of the band, in rad/s
    pub fn width(&self) -> f64 {
        (self.high - self.low).max(0.)
    }

    /// Variance of a process with this PSD
    pub fn variance(&self) -> f64 {
        self.intensity * self.width() / PI
    }
}

impl Psd for BandPass {
    fn density(&self, omega: f64) -> f64 {
        let omega = omega.abs();
        if self.low <= omega && omega <= self.high {
            self.intensity
        } else {
            0.
        }
    }
}
