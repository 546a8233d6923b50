use std::f64::consts::PI;
use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::process::SamplePath;
use crate::stream::SampleRate;

/// Estimates the PSD of a sample path from the squared magnitude of its DFT.
pub struct Periodogram {
    len: usize,
    /// None for a zero-length transform, which has no bins
    fft: Option<Arc<dyn Fft<f64>>>,
}

impl Periodogram {
    pub fn new(len: usize) -> Periodogram {
        Periodogram {
            len,
            // nb: reusing the planner is recommended if a lot of these are
            // going to get constructed.
            fft: (len > 0).then(|| FftPlanner::new().plan_fft_forward(len)),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Longer paths are truncated and shorter ones zero-padded to the length
    /// of the transform.
    pub fn estimate(&self, path: &SamplePath) -> Spectrum {
        let sample_rate = path.grid().sample_rate();
        let Some(fft) = self.fft.as_ref() else {
            return Spectrum {
                sample_rate,
                len: 0,
                density: Vec::new(),
            };
        };
        let mut buf: Vec<Complex<f64>> = path
            .values()
            .iter()
            .chain(std::iter::repeat(&0.))
            .take(self.len)
            .map(|y| Complex { re: *y, im: 0. })
            .collect();
        fft.process(&mut buf);

        // |X|²·dt/M, in the same (two-sided) units as the PSD
        let scale = sample_rate.period() / self.len as f64;
        Spectrum {
            sample_rate,
            len: self.len,
            density: buf[..=self.len / 2]
                .iter()
                .map(|x| x.norm_sqr() * scale)
                .collect(),
        }
    }
}

/// A one-sided spectral density estimate, for bins 0..=len/2 of a DFT of
/// length `len`.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    sample_rate: SampleRate,
    len: usize,
    density: Vec<f64>,
}

impl Spectrum {
    /// The mean of several estimates (None if there are none, or they don't
    /// share bins)
    pub fn average(spectra: &[Spectrum]) -> Option<Spectrum> {
        let first = spectra.first()?;
        if spectra
            .iter()
            .any(|s| s.len != first.len || s.sample_rate != first.sample_rate)
        {
            return None;
        }
        let mut density = vec![0.; first.density.len()];
        for s in spectra {
            for (acc, d) in density.iter_mut().zip(s.density.iter()) {
                *acc += d;
            }
        }
        for acc in density.iter_mut() {
            *acc /= spectra.len() as f64;
        }
        Some(Spectrum {
            sample_rate: first.sample_rate,
            len: first.len,
            density,
        })
    }

    /// Bin spacing, in rad/s
    pub fn bin_width(&self) -> f64 {
        2. * PI * f64::from(self.sample_rate) / self.len as f64
    }

    /// Angular frequency of each bin
    pub fn frequencies(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.density.len()).map(move |i| i as f64 * self.bin_width())
    }

    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// (ω, density) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies().zip(self.density.iter().copied())
    }

    /// Mean density of the bins in [low, high] (NaN if there are none)
    pub fn mean_density(&self, low: f64, high: f64) -> f64 {
        let (sum, count) = self
            .iter()
            .filter(|(omega, _)| low <= *omega && *omega <= high)
            .fold((0., 0), |(sum, count), (_, d)| (sum + d, count + 1));
        sum / count as f64
    }

    /// Power of the signal in [low, high], i.e. (1/π)·∫ density dω over that
    /// band (which covers both the positive and negative frequencies).
    /// Over the whole spectrum this is the mean square of the signal.
    pub fn band_power(&self, low: f64, high: f64) -> f64 {
        if self.density.is_empty() {
            return 0.;
        }
        let last = self.density.len() - 1;
        let nyquist_bin = self.len % 2 == 0;
        self.iter()
            .enumerate()
            .filter(|(_, (omega, _))| low <= *omega && *omega <= high)
            .map(|(i, (_, d))| {
                // DC (and the Nyquist bin, for even lengths) has no mirror
                // image at a negative frequency
                if i == 0 || (nyquist_bin && i == last) {
                    d / 2.
                } else {
                    d
                }
            })
            .sum::<f64>()
            * self.bin_width()
            / PI
    }
}
