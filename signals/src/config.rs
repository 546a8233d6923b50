use crate::dsp::Hz;
use crate::process::{Harmonics, TimeGrid, TimeWindow};
use crate::stream::SampleRate;
use crate::Result;

/// Parameters shared by the demos.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoConfig {
    pub sample_rate: SampleRate,
    /// Length of the synthesized signals, in seconds
    pub duration: f64,
    /// Frequency of the message tone
    pub tone: Hz,
    /// σ², the height of the noise PSD
    pub noise_intensity: f64,
    /// Length of the plotted part of a signal, in seconds
    pub plot_window: f64,
    pub harmonics: Harmonics,
}

impl DemoConfig {
    pub fn window(&self) -> TimeWindow {
        TimeWindow::from_zero(self.duration)
    }

    pub fn grid(&self) -> Result<TimeGrid> {
        TimeGrid::over(self.window(), self.sample_rate)
    }
}

impl Default for DemoConfig {
    fn default() -> DemoConfig {
        DemoConfig {
            sample_rate: SampleRate::new(6000),
            duration: 3.,
            tone: Hz(1000.),
            noise_intensity: 1e-10,
            plot_window: 0.01,
            harmonics: Harmonics::default(),
        }
    }
}
