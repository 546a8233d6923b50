//! Tools for exploring the demos in a Jupyter notebook
//! The idea is that a notebook can just import this and be unlikely to need
//! anything else, i.e. start with:
//! ```ipynb
//! :dep notebook = { path = "." }
//! use notebook::*;
//! ```

pub use std::f64::consts::PI;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
pub use charts;
pub use num_complex::Complex;
pub use plotters;
use plotters::evcxr::SVGWrapper;
pub use plotters::prelude::*;
pub use rand::rngs::StdRng;
pub use rand::SeedableRng;
pub use signals;
pub use signals::dsp::{Decibels, Hz, Periodogram, Spectrum};
pub use signals::snr::{SnrDemo, SnrRealization};
pub use signals::synth::{Phasor, Tone};
pub use signals::{
    BandPass, DemoConfig, Psd, SamplePath, SampleRate, SpectralSampler, TimeGrid, TimeWindow,
};

/// Plot the first `duration` seconds of each (labelled) path
pub fn plot_signals(paths: &[(&str, &SamplePath)], duration: f64) -> SVGWrapper {
    let start = paths
        .first()
        .map(|(_, p)| p.grid().start())
        .unwrap_or_default();
    evcxr_figure((640, 480), |root| {
        root.fill(&WHITE)?;
        charts::build_signal_chart(ChartBuilder::on(&root), paths, start..start + duration)?;
        Ok(())
    })
}

pub fn plot_signal(path: &SamplePath, duration: f64) -> SVGWrapper {
    plot_signals(&[("y(t)", path)], duration)
}

pub fn plot_psd<P: Psd>(spectrum: &Spectrum, psd: &P, max_frequency: Hz) -> SVGWrapper {
    evcxr_figure((640, 480), |root| {
        root.fill(&WHITE)?;
        charts::build_psd_chart(ChartBuilder::on(&root), spectrum, psd, max_frequency)?;
        Ok(())
    })
}

pub fn plot_phasor(phasor: &Phasor, grid: TimeGrid) -> SVGWrapper {
    let values = phasor.render(grid);
    evcxr_figure((640, 480), |root| {
        root.fill(&WHITE)?;
        charts::build_phasor_chart(ChartBuilder::on(&root), &grid, &values)?;
        Ok(())
    })
}

/// The averaged periodogram of several realizations, each transformed at
/// its full length (None if there are none, or they are empty).
pub fn estimate_psd(paths: &[SamplePath]) -> Option<Spectrum> {
    let len = paths.first()?.len();
    if len == 0 {
        return None;
    }
    let periodogram = Periodogram::new(len);
    let spectra: Vec<Spectrum> = paths.iter().map(|p| periodogram.estimate(p)).collect();
    Spectrum::average(&spectra)
}

/// An inline `<audio>` element playing a sample path. Evaluating one as the
/// last expression of a cell shows the player.
pub struct AudioPlayer {
    wav_base64: String,
}

impl AudioPlayer {
    pub fn new(path: &SamplePath) -> signals::Result<AudioPlayer> {
        let wav = signals::stream::wav::encode(path)?;
        Ok(AudioPlayer {
            wav_base64: STANDARD.encode(wav),
        })
    }

    pub fn to_html(&self) -> String {
        format!(
            "<audio controls src=\"data:audio/wav;base64,{}\"></audio>",
            self.wav_base64
        )
    }

    pub fn evcxr_display(&self) {
        println!(
            "EVCXR_BEGIN_CONTENT text/html\n{}\nEVCXR_END_CONTENT",
            self.to_html()
        );
    }
}
