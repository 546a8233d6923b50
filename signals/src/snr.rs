//! How audible is a tone in band-limited noise?
//!
//! A tone A·cos(ω₀t) has power A²/2. Noise with PSD σ² over the band
//! ω₀ ± 2π·Δf_B has variance 4σ²Δf_B, so the SNR is A²/(8σ²Δf_B).

use log::info;
use rand::Rng;

use crate::config::DemoConfig;
use crate::dsp::{rms, Decibels, Hz};
use crate::process::{SamplePath, SpectralSampler};
use crate::psd::BandPass;
use crate::synth::Tone;
use crate::Result;

/// Bounds and step of the SNR control
pub const SNR_MIN_DB: f64 = -10.;
pub const SNR_MAX_DB: f64 = 60.;
pub const SNR_STEP_DB: f64 = 5.;

/// The tone amplitude that gives the requested SNR against noise of the
/// given intensity and bandwidth.
pub fn tone_amplitude(snr: Decibels, bandwidth: Hz, intensity: f64) -> f64 {
    (8. * bandwidth.0 * intensity).sqrt() * snr.into_amplitude_ratio()
}

/// The SNR of a tone of the given amplitude (inverse of `tone_amplitude`)
pub fn snr_of(amplitude: f64, bandwidth: Hz, intensity: f64) -> Decibels {
    Decibels::from_power_ratio(amplitude * amplitude / (8. * intensity * bandwidth.0))
}

/// One run of the demo: a tone, the noise, and their sum
#[derive(Clone, Debug)]
pub struct SnrRealization {
    pub snr: Decibels,
    pub amplitude: f64,
    pub tone: SamplePath,
    pub noise: SamplePath,
    pub mixture: SamplePath,
}

impl SnrRealization {
    /// The SNR actually realized (which varies around the target from run to
    /// run, since the noise is random)
    pub fn measured_snr(&self) -> Decibels {
        let ratio = rms(self.tone.values()) / rms(self.noise.values());
        Decibels::from_power_ratio(ratio * ratio)
    }
}

/// A tone at the configured frequency in noise of bandwidth Δf_B (by default
/// equal to the tone frequency) centered on it.
#[derive(Clone, Debug)]
pub struct SnrDemo {
    config: DemoConfig,
    bandwidth: Hz,
}

impl SnrDemo {
    pub fn new(config: DemoConfig) -> SnrDemo {
        SnrDemo {
            bandwidth: config.tone,
            config,
        }
    }

    pub fn with_bandwidth(mut self, bandwidth: Hz) -> SnrDemo {
        self.bandwidth = bandwidth;
        self
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn bandwidth(&self) -> Hz {
        self.bandwidth
    }

    pub fn noise_psd(&self) -> BandPass {
        BandPass::around(
            self.config.noise_intensity,
            self.config.tone.angular(),
            self.bandwidth.angular(),
        )
    }

    /// Samples the noise up to the top of its band
    pub fn noise_sampler(&self) -> Result<SpectralSampler<BandPass>> {
        Ok(
            SpectralSampler::new(self.noise_psd(), Hz(self.config.tone.0 + self.bandwidth.0))?
                .with_harmonics(self.config.harmonics),
        )
    }

    pub fn amplitude(&self, snr: Decibels) -> f64 {
        tone_amplitude(snr, self.bandwidth, self.config.noise_intensity)
    }

    /// Synthesize a fresh realization at the requested SNR
    pub fn run<R: Rng + ?Sized>(&self, snr: Decibels, rng: &mut R) -> Result<SnrRealization> {
        let amplitude = self.amplitude(snr);
        let grid = self.config.grid()?;
        let tone = Tone::new(amplitude, self.config.tone).render(grid);
        let noise = self
            .noise_sampler()?
            .sample(self.config.window(), self.config.sample_rate, rng)?;
        let mixture = tone.sum(&noise)?;
        info!("synthesized {} samples at {}", mixture.len(), snr);
        Ok(SnrRealization {
            snr,
            amplitude,
            tone,
            noise,
            mixture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    use crate::process::{TimeGrid, TimeWindow};
    use crate::psd::Psd;
    use crate::stream::SampleRate;

    fn small_config() -> DemoConfig {
        DemoConfig {
            sample_rate: SampleRate::new(2000),
            duration: 1.,
            tone: Hz(200.),
            noise_intensity: 1e-10,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn amplitude_round_trip() {
        let a = tone_amplitude(Decibels::new(60.), Hz(1000.), 1e-10);
        let snr = 10. * (a * a / (8. * 1e-10 * 1000.)).log10();
        assert_abs_diff_eq!(snr, 60., epsilon = 1e-6);
        assert_abs_diff_eq!(snr_of(a, Hz(1000.), 1e-10), Decibels::new(60.), epsilon = 1e-6);
    }

    #[test]
    fn amplitude_at_zero_db() {
        // A² = 8σ²Δf
        assert_relative_eq!(tone_amplitude(Decibels::new(0.), Hz(2.), 1.), 4.);
        assert_relative_eq!(
            tone_amplitude(Decibels::new(20.), Hz(2.), 1.),
            40.,
            max_relative = 1e-12
        );
    }

    #[test]
    fn noise_band() {
        let demo = SnrDemo::new(DemoConfig::default());
        let psd = demo.noise_psd();
        assert_eq!(psd.low, 0.);
        assert_relative_eq!(psd.high, 4. * PI * 1000., max_relative = 1e-12);
        assert_eq!(psd.density(Hz(1000.).angular()), 1e-10);
        assert_eq!(psd.density(Hz(2500.).angular()), 0.);
        // 4σ²Δf
        assert_relative_eq!(psd.variance(), 4e-7, max_relative = 1e-12);

        let sampler = demo.noise_sampler().unwrap();
        assert_eq!(sampler.bandwidth(), Hz(2000.));
        assert_eq!(sampler.harmonic_count(TimeWindow::new(0., 3.)), 6001);
    }

    #[test]
    fn narrower_band() {
        let demo = SnrDemo::new(DemoConfig::default()).with_bandwidth(Hz(100.));
        let psd = demo.noise_psd();
        assert_relative_eq!(psd.low, Hz(900.).angular(), max_relative = 1e-12);
        assert_relative_eq!(psd.high, Hz(1100.).angular(), max_relative = 1e-12);
        assert_relative_eq!(psd.variance(), 4. * 1e-10 * 100., max_relative = 1e-12);
    }

    #[test]
    fn realization_parts() {
        let demo = SnrDemo::new(small_config());
        let mut rng = StdRng::seed_from_u64(10);
        let run = demo.run(Decibels::new(10.), &mut rng).unwrap();
        assert_eq!(run.mixture.len(), 2000);
        assert_eq!(run.tone.grid(), run.noise.grid());
        for ((m, t), n) in run
            .mixture
            .values()
            .iter()
            .zip(run.tone.values())
            .zip(run.noise.values())
        {
            assert_eq!(*m, t + n);
        }
        assert_relative_eq!(run.amplitude, demo.amplitude(Decibels::new(10.)));
    }

    #[test]
    fn measured_snr_tracks_target() {
        let demo = SnrDemo::new(small_config());
        let mut rng = StdRng::seed_from_u64(11);
        for target in [-10., 0., 25.] {
            let run = demo.run(Decibels::new(target), &mut rng).unwrap();
            assert_abs_diff_eq!(run.measured_snr(), Decibels::new(target), epsilon = 1.);
        }
    }

    #[test]
    fn measured_snr_of_known_paths() {
        let grid = TimeGrid::new(0., SampleRate::new(8), 8);
        let tone = Tone::new(2., Hz(1.)).render(grid);
        let noise = SamplePath::new(grid, vec![0.2, -0.2, 0.2, -0.2, 0.2, -0.2, 0.2, -0.2]).unwrap();
        let run = SnrRealization {
            snr: Decibels::new(20.),
            amplitude: 2.,
            mixture: tone.sum(&noise).unwrap(),
            tone,
            noise,
        };
        // (A²/2) / 0.04 = 50
        assert_abs_diff_eq!(
            run.measured_snr(),
            Decibels::from_power_ratio(50.),
            epsilon = 1e-9
        );
    }

    #[test]
    fn slider_bounds() {
        let steps = ((SNR_MAX_DB - SNR_MIN_DB) / SNR_STEP_DB) as usize;
        assert_eq!(steps, 14);
    }
}
