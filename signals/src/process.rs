//! Sample paths of band-limited, zero-mean, wide-sense stationary Gaussian
//! processes, synthesized with the spectral representation method:
//!
//! y(t) = Σ_k A[k]·cos(ω_k·t) + B[k]·sin(ω_k·t)
//!
//! with ω_k = k·Δω for N bins covering [0, ω_B), and A[k], B[k] independent
//! normal variates with variance PSD(ω_k)·Δω/π. The process variance is then
//! (1/π)·∫₀^ω_B PSD(ω)dω, which converges to the process described by the PSD
//! as N grows.

use std::f64::consts::PI;

use log::debug;
use ndarray::{Array1, ArrayView1, Axis};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::dsp::Hz;
use crate::psd::Psd;
use crate::stream::SampleRate;
use crate::{Error, Result};

/// The half-open interval [start, end) of time (seconds) to sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> TimeWindow {
        TimeWindow { start, end }
    }

    /// A window starting at t = 0
    pub fn from_zero(duration: f64) -> TimeWindow {
        TimeWindow::new(0., duration)
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Evenly spaced sample times: start + k / sample_rate for k in 0..len
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeGrid {
    start: f64,
    sample_rate: SampleRate,
    len: usize,
}

impl TimeGrid {
    pub fn new(start: f64, sample_rate: SampleRate, len: usize) -> TimeGrid {
        TimeGrid {
            start,
            sample_rate,
            len,
        }
    }

    /// Sample counts past 2^53 can't be told apart as f64 times
    const MAX_LEN: f64 = 9_007_199_254_740_992.;

    /// Every sample time in the window, i.e. up to but excluding its end.
    /// An empty (or inverted) window gives an empty grid.
    ///
    /// Sample rates are whole numbers of Hz, as audio devices and WAV files
    /// need them to be.
    pub fn over(window: TimeWindow, sample_rate: SampleRate) -> Result<TimeGrid> {
        if !window.start.is_finite() || !window.end.is_finite() {
            return Err(Error::NonFiniteWindow {
                start: window.start,
                end: window.end,
            });
        }
        if u32::from(sample_rate) == 0 {
            return Err(Error::ZeroSampleRate);
        }

        let mut grid = TimeGrid::new(window.start, sample_rate, 0);
        if window.span() > 0. {
            // Starting from the rounded count, nudge it so it is exactly the
            // number of sample times below the end of the window.
            let count = (window.span() * f64::from(sample_rate)).ceil();
            if count >= TimeGrid::MAX_LEN {
                return Err(Error::WindowTooLong {
                    span: window.span(),
                    sample_rate: u32::from(sample_rate),
                });
            }
            grid.len = count as usize;
            while grid.len > 0 && grid.time(grid.len - 1) >= window.end {
                grid.len -= 1;
            }
            while grid.time(grid.len) < window.end {
                grid.len += 1;
            }
        }
        Ok(grid)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// The time of the sample following the last one
    pub fn end(&self) -> f64 {
        self.time(self.len)
    }

    /// The time of the i'th sample (computed directly, so there's no
    /// accumulated rounding error for long grids)
    pub fn time(&self, i: usize) -> f64 {
        self.start + i as f64 / f64::from(self.sample_rate)
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.time(i))
    }

    pub fn to_array(&self) -> Array1<f64> {
        Array1::from_shape_fn(self.len, |i| self.time(i))
    }

    /// The indices of the samples that fall in [from, to)
    pub fn indices_within(&self, from: f64, to: f64) -> std::ops::Range<usize> {
        let fs = f64::from(self.sample_rate);
        let first = ((from - self.start) * fs).ceil().max(0.) as usize;
        let last = ((to - self.start) * fs).ceil().max(0.) as usize;
        first.min(self.len)..last.min(self.len)
    }
}

/// A realization of a signal: values on a time grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePath {
    grid: TimeGrid,
    values: Vec<f64>,
}

impl SamplePath {
    pub fn new(grid: TimeGrid, values: Vec<f64>) -> Result<SamplePath> {
        if values.len() != grid.len() {
            return Err(Error::LengthMismatch {
                expected: grid.len(),
                actual: values.len(),
            });
        }
        Ok(SamplePath { grid, values })
    }

    /// Evaluate a function of time at every point of the grid
    pub fn from_fn<F: Fn(f64) -> f64>(grid: TimeGrid, f: F) -> SamplePath {
        SamplePath {
            values: grid.iter().map(f).collect(),
            grid,
        }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn as_array(&self) -> ArrayView1<f64> {
        ArrayView1::from(&self.values[..])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.grid.iter()
    }

    /// (time, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.iter().zip(self.values.iter().copied())
    }

    /// (time, value) pairs for the samples in [from, to)
    pub fn window(&self, from: f64, to: f64) -> impl Iterator<Item = (f64, f64)> + '_ {
        let range = self.grid.indices_within(from, to);
        range.map(move |i| (self.grid.time(i), self.values[i]))
    }

    /// Element-wise sum of two paths on the same grid
    pub fn sum(&self, other: &SamplePath) -> Result<SamplePath> {
        if self.grid != other.grid {
            return Err(Error::GridMismatch);
        }
        Ok(SamplePath {
            grid: self.grid,
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.len() as f64
    }

    /// Mean of the squared values (i.e. average power)
    pub fn mean_square(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>() / self.len() as f64
    }
}

/// How many harmonics to sum when synthesizing a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Harmonics {
    /// floor(max(minimum, bandwidth·span)) + 1. Enough bins that the sum,
    /// which is periodic with period 2π/Δω, doesn't visibly repeat within
    /// the window.
    Auto { minimum: f64 },
    /// Exactly this many (at least one)
    Fixed(usize),
}

impl Harmonics {
    pub const DEFAULT_MINIMUM: f64 = 999.;

    pub fn count(&self, bandwidth: Hz, span: f64) -> usize {
        match *self {
            Harmonics::Auto { minimum } => minimum.max(bandwidth.0 * span).floor() as usize + 1,
            Harmonics::Fixed(n) => n.max(1),
        }
    }
}

impl Default for Harmonics {
    fn default() -> Harmonics {
        Harmonics::Auto {
            minimum: Harmonics::DEFAULT_MINIMUM,
        }
    }
}

/// The random frequency-domain coefficients of one realization.
#[derive(Clone, Debug)]
pub struct HarmonicBasis {
    bin_width: f64,
    frequencies: Array1<f64>,
    cos_coeffs: Array1<f64>,
    sin_coeffs: Array1<f64>,
}

impl HarmonicBasis {
    /// Rows of the (time x harmonic) basis matrix built at once
    const BLOCK_ROWS: usize = 256;

    /// Draw `count` harmonics over [0, max_omega) for the given PSD.
    pub fn draw<P: Psd, R: Rng + ?Sized>(
        psd: &P,
        max_omega: f64,
        count: usize,
        rng: &mut R,
    ) -> HarmonicBasis {
        let bin_width = max_omega / count as f64;
        let frequencies = Array1::from_shape_fn(count, |k| k as f64 * bin_width);
        let z_cos: Array1<f64> = Array1::from_shape_simple_fn(count, || rng.sample(StandardNormal));
        let z_sin: Array1<f64> = Array1::from_shape_simple_fn(count, || rng.sample(StandardNormal));
        let scale = psd
            .evaluate(&frequencies)
            .mapv(|density| (density * bin_width / PI).sqrt());
        HarmonicBasis {
            bin_width,
            cos_coeffs: z_cos * &scale,
            sin_coeffs: z_sin * &scale,
            frequencies,
        }
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Angular frequency (rad/s) of each harmonic
    pub fn frequencies(&self) -> ArrayView1<f64> {
        self.frequencies.view()
    }

    pub fn cos_coefficients(&self) -> ArrayView1<f64> {
        self.cos_coeffs.view()
    }

    pub fn sin_coefficients(&self) -> ArrayView1<f64> {
        self.sin_coeffs.view()
    }

    /// Sum the harmonics at each of the given times.
    /// This is cos(t·ωᵀ)·A + sin(t·ωᵀ)·B, computed a block of rows at a time
    /// so long signals don't need the whole basis matrix in memory.
    pub fn evaluate(&self, times: ArrayView1<f64>) -> Array1<f64> {
        let mut res: Array1<f64> = Array1::zeros(times.len());
        let omega = self.frequencies.view().insert_axis(Axis(0));
        for (t, mut y) in times
            .axis_chunks_iter(Axis(0), HarmonicBasis::BLOCK_ROWS)
            .zip(res.axis_chunks_iter_mut(Axis(0), HarmonicBasis::BLOCK_ROWS))
        {
            let phase = &t.insert_axis(Axis(1)) * &omega;
            let block = phase.mapv(f64::cos).dot(&self.cos_coeffs)
                + phase.mapv(f64::sin).dot(&self.sin_coeffs);
            y.assign(&block);
        }
        res
    }
}

/// Draws sample paths of a zero-mean stationary Gaussian process with the
/// given PSD, which must be (effectively) zero above `bandwidth`.
pub struct SpectralSampler<P: Psd> {
    psd: P,
    bandwidth: Hz,
    harmonics: Harmonics,
}

impl<P: Psd> SpectralSampler<P> {
    pub fn new(psd: P, bandwidth: Hz) -> Result<SpectralSampler<P>> {
        if !(bandwidth.0.is_finite() && bandwidth.0 > 0.) {
            return Err(Error::InvalidBandwidth(bandwidth.0));
        }
        Ok(SpectralSampler {
            psd,
            bandwidth,
            harmonics: Harmonics::default(),
        })
    }

    pub fn with_harmonics(mut self, harmonics: Harmonics) -> Self {
        self.harmonics = harmonics;
        self
    }

    pub fn psd(&self) -> &P {
        &self.psd
    }

    pub fn bandwidth(&self) -> Hz {
        self.bandwidth
    }

    pub fn harmonic_count(&self, window: TimeWindow) -> usize {
        self.harmonics.count(self.bandwidth, window.span())
    }

    /// Draw the random coefficients for a realization over the given window
    pub fn draw_basis<R: Rng + ?Sized>(&self, window: TimeWindow, rng: &mut R) -> HarmonicBasis {
        HarmonicBasis::draw(
            &self.psd,
            self.bandwidth.angular(),
            self.harmonic_count(window),
            rng,
        )
    }

    /// One realization of the process, sampled over the window at a whole
    /// number of Hz.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        window: TimeWindow,
        sample_rate: SampleRate,
        rng: &mut R,
    ) -> Result<SamplePath> {
        let grid = TimeGrid::over(window, sample_rate)?;
        if grid.is_empty() {
            return Ok(SamplePath {
                grid,
                values: Vec::new(),
            });
        }

        let basis = self.draw_basis(window, rng);
        debug!(
            "sampling {} points in [{}, {}) from {} harmonics up to {} Hz",
            grid.len(),
            window.start,
            window.end,
            basis.len(),
            self.bandwidth.0
        );
        let values = basis.evaluate(grid.to_array().view());
        Ok(SamplePath {
            grid,
            values: values.to_vec(),
        })
    }

    /// Independent realizations over the same window
    pub fn sample_many<R: Rng + ?Sized>(
        &self,
        window: TimeWindow,
        sample_rate: SampleRate,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<SamplePath>> {
        (0..count)
            .map(|_| self.sample(window, sample_rate, rng))
            .collect()
    }
}

/// One realization of a zero-mean stationary Gaussian process with the given
/// PSD (band-limited to `bandwidth`), sampled over the window, with the
/// default number of harmonics.
pub fn sample_path<P: Psd, R: Rng + ?Sized>(
    window: TimeWindow,
    sample_rate: SampleRate,
    psd: P,
    bandwidth: Hz,
    rng: &mut R,
) -> Result<SamplePath> {
    SpectralSampler::new(psd, bandwidth)?.sample(window, sample_rate, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::dsp::{Periodogram, Spectrum};
    use crate::psd::BandPass;

    fn band_pass_sampler() -> SpectralSampler<BandPass> {
        // 50..100Hz, sampled up to 200Hz
        let psd = BandPass::new(2., Hz(50.).angular(), Hz(100.).angular());
        SpectralSampler::new(psd, Hz(200.)).unwrap()
    }

    #[test]
    fn grid_length() {
        let grid = TimeGrid::over(TimeWindow::new(0., 3.), SampleRate::new(6000)).unwrap();
        assert_eq!(grid.len(), 18000);
        assert_eq!(grid.time(0), 0.);
        assert_relative_eq!(grid.time(17999), 17999. / 6000.);
        assert!(grid.time(17999) < 3.);
    }

    #[test]
    fn grid_excludes_window_end() {
        let grid = TimeGrid::over(TimeWindow::new(0., 0.0025), SampleRate::new(1000)).unwrap();
        assert_eq!(grid.len(), 3);
        let grid = TimeGrid::over(TimeWindow::new(1., 1.0025), SampleRate::new(1000)).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.start(), 1.);
    }

    #[test]
    fn grid_is_increasing_with_fixed_step() {
        let grid = TimeGrid::over(TimeWindow::new(-0.5, 0.5), SampleRate::new(100)).unwrap();
        let times: Vec<f64> = grid.iter().collect();
        assert_eq!(times.len(), 100);
        for w in times.windows(2) {
            assert_relative_eq!(w[1] - w[0], 0.01, epsilon = 1e-12);
        }
    }

    #[test]
    fn empty_and_inverted_windows() {
        let rate = SampleRate::new(1000);
        assert!(TimeGrid::over(TimeWindow::new(1., 1.), rate)
            .unwrap()
            .is_empty());
        let mut rng = StdRng::seed_from_u64(0);
        let path = band_pass_sampler()
            .sample(TimeWindow::new(2., 1.), rate, &mut rng)
            .unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn invalid_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        let sampler = band_pass_sampler();
        assert!(matches!(
            sampler.sample(TimeWindow::new(0., f64::NAN), SampleRate::new(100), &mut rng),
            Err(Error::NonFiniteWindow { .. })
        ));
        assert!(matches!(
            sampler.sample(TimeWindow::from_zero(1.), SampleRate::new(0), &mut rng),
            Err(Error::ZeroSampleRate)
        ));
        assert!(matches!(
            TimeGrid::over(TimeWindow::from_zero(1e30), SampleRate::new(6000)),
            Err(Error::WindowTooLong { .. })
        ));
        assert!(matches!(
            sampler.sample(TimeWindow::new(-1e300, 1e300), SampleRate::new(100), &mut rng),
            Err(Error::WindowTooLong { .. })
        ));
        assert!(matches!(
            SpectralSampler::new(BandPass::low_pass(1., 10.), Hz(0.)),
            Err(Error::InvalidBandwidth(_))
        ));
        assert!(matches!(
            SpectralSampler::new(BandPass::low_pass(1., 10.), Hz(f64::INFINITY)),
            Err(Error::InvalidBandwidth(_))
        ));
    }

    #[test]
    fn indices_within() {
        let grid = TimeGrid::new(0., SampleRate::new(10), 20);
        assert_eq!(grid.indices_within(0., 0.5), 0..5);
        assert_eq!(grid.indices_within(0.25, 0.55), 3..6);
        assert_eq!(grid.indices_within(-1., 100.), 0..20);
    }

    #[test]
    fn harmonic_count() {
        let auto = Harmonics::default();
        assert_eq!(auto.count(Hz(2000.), 3.), 6001);
        assert_eq!(auto.count(Hz(200.), 1.), 1000);
        assert_eq!(auto.count(Hz(333.4), 3.), 1001);
        assert_eq!(Harmonics::Auto { minimum: 10. }.count(Hz(1.), 1.), 11);
        assert_eq!(Harmonics::Fixed(64).count(Hz(2000.), 3.), 64);
        assert_eq!(Harmonics::Fixed(0).count(Hz(2000.), 3.), 1);

        let sampler = SpectralSampler::new(BandPass::low_pass(1., 1.), Hz(2000.)).unwrap();
        assert_eq!(sampler.harmonic_count(TimeWindow::new(0., 3.)), 6001);
    }

    #[test]
    fn basis_bins() {
        let mut rng = StdRng::seed_from_u64(1);
        let basis = HarmonicBasis::draw(&|_: f64| 1., 100., 1000, &mut rng);
        assert_eq!(basis.len(), 1000);
        assert_relative_eq!(basis.bin_width(), 0.1);
        assert_eq!(basis.frequencies()[0], 0.);
        assert_relative_eq!(basis.frequencies()[999], 99.9, epsilon = 1e-9);
    }

    #[test]
    fn basis_coefficient_variance() {
        let mut rng = StdRng::seed_from_u64(2);
        let psd = |w: f64| if w < 50. { 4. } else { 0. };
        let basis = HarmonicBasis::draw(&psd, 100., 4000, &mut rng);
        let expected = 4. * basis.bin_width() / PI;

        let in_band = basis.frequencies().iter().filter(|w| **w < 50.).count();
        let sum_sq: f64 = basis
            .cos_coefficients()
            .iter()
            .chain(basis.sin_coefficients().iter())
            .zip(basis.frequencies().iter().chain(basis.frequencies().iter()))
            .filter(|(_, w)| **w < 50.)
            .map(|(c, _)| c * c)
            .sum();
        assert_relative_eq!(
            sum_sq / (2 * in_band) as f64,
            expected,
            max_relative = 0.1
        );

        // Nothing outside the band
        for (w, (a, b)) in basis.frequencies().iter().zip(
            basis
                .cos_coefficients()
                .iter()
                .zip(basis.sin_coefficients().iter()),
        ) {
            if *w >= 50. {
                assert_eq!((*a, *b), (0., 0.));
            }
        }
    }

    #[test]
    fn evaluate_single_harmonic() {
        let basis = HarmonicBasis {
            bin_width: 1.,
            frequencies: Array1::from(vec![0., 2.]),
            cos_coeffs: Array1::from(vec![0.5, 1.]),
            sin_coeffs: Array1::from(vec![7., -3.]),
        };
        // 600 points, so more than one block of rows
        let times = Array1::from_shape_fn(600, |i| i as f64 * 0.01);
        let y = basis.evaluate(times.view());
        for (t, y) in times.iter().zip(y.iter()) {
            assert_relative_eq!(
                *y,
                0.5 + (2. * t).cos() - 3. * (2. * t).sin(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn independent_realizations_share_grid() {
        let mut rng = StdRng::seed_from_u64(3);
        let sampler = band_pass_sampler();
        let window = TimeWindow::from_zero(0.5);
        let a = sampler.sample(window, SampleRate::new(1000), &mut rng).unwrap();
        let b = sampler.sample(window, SampleRate::new(1000), &mut rng).unwrap();
        assert_eq!(a.len(), 500);
        assert_eq!(a.len(), b.len());
        assert_eq!(a.grid(), b.grid());
        assert_ne!(a.values(), b.values());
    }

    #[test]
    fn seeded_realizations_repeat() {
        let window = TimeWindow::from_zero(0.25);
        let a = band_pass_sampler()
            .sample(window, SampleRate::new(1000), &mut StdRng::seed_from_u64(4))
            .unwrap();
        let b = sample_path(
            window,
            SampleRate::new(1000),
            BandPass::new(2., Hz(50.).angular(), Hz(100.).angular()),
            Hz(200.),
            &mut StdRng::seed_from_u64(4),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn band_pass_variance() {
        let mut rng = StdRng::seed_from_u64(5);
        let sampler = band_pass_sampler();
        let paths = sampler
            .sample_many(TimeWindow::from_zero(1.), SampleRate::new(1000), 16, &mut rng)
            .unwrap();
        assert_eq!(paths.len(), 16);

        let mean_square = paths.iter().map(|p| p.mean_square()).sum::<f64>() / 16.;
        // σ²·(ω₂ - ω₁)/π = 2·(2π·50)/π
        assert_relative_eq!(mean_square, 200., max_relative = 0.15);
        assert_relative_eq!(mean_square, sampler.psd().variance(), max_relative = 0.15);

        let mean = paths.iter().map(|p| p.mean()).sum::<f64>() / 16.;
        assert!(mean.abs() < 0.1 * mean_square.sqrt(), "mean = {}", mean);
    }

    #[test]
    fn averaged_periodogram_matches_psd() {
        let mut rng = StdRng::seed_from_u64(6);
        let sampler = band_pass_sampler();
        let rate = SampleRate::new(1000);
        let periodogram = Periodogram::new(1000);
        let spectra: Vec<Spectrum> = sampler
            .sample_many(TimeWindow::from_zero(1.), rate, 24, &mut rng)
            .unwrap()
            .iter()
            .map(|p| periodogram.estimate(p))
            .collect();
        let average = Spectrum::average(&spectra).unwrap();

        // Flat at σ² inside the band (away from the edges)...
        let inner = average.mean_density(Hz(60.).angular(), Hz(90.).angular());
        assert_relative_eq!(inner, 2., max_relative = 0.15);

        // ...and (nearly) nothing outside it
        let below = average.mean_density(Hz(5.).angular(), Hz(40.).angular());
        let above = average.mean_density(Hz(110.).angular(), Hz(400.).angular());
        assert!(below < 0.05 * inner, "below = {}", below);
        assert!(above < 0.05 * inner, "above = {}", above);

        // Total power agrees with the PSD
        assert_relative_eq!(
            average.band_power(0., Hz(500.).angular()),
            sampler.psd().variance(),
            max_relative = 0.1
        );
    }

    #[test]
    fn path_arithmetic() {
        let grid = TimeGrid::new(0., SampleRate::new(4), 4);
        let a = SamplePath::new(grid, vec![1., 2., 3., 4.]).unwrap();
        let b = SamplePath::from_fn(grid, |t| t);
        let sum = a.sum(&b).unwrap();
        assert_eq!(sum.values(), [1., 2.25, 3.5, 4.75]);
        assert_relative_eq!(a.mean(), 2.5);
        assert_relative_eq!(a.mean_square(), 7.5);
        assert_eq!(
            a.window(0.25, 0.75).collect::<Vec<_>>(),
            [(0.25, 2.), (0.5, 3.)]
        );

        let other = SamplePath::from_fn(TimeGrid::new(1., SampleRate::new(4), 4), |t| t);
        assert!(matches!(a.sum(&other), Err(Error::GridMismatch)));
        assert!(matches!(
            SamplePath::new(grid, vec![1.]),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 1
            })
        ));
    }
}
