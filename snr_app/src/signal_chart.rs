use iced::{Element, Length};
use log::error;
use plotters_iced::{Chart, ChartBuilder, ChartWidget, DrawingBackend};

use signals::snr::SnrRealization;

use crate::Message;

/// The start of the latest realization: the bare tone and the tone in noise
pub struct SignalChart {
    latest: Option<SnrRealization>,
    window: f64,
}

impl SignalChart {
    pub fn new(window: f64) -> SignalChart {
        SignalChart {
            latest: None,
            window,
        }
    }

    pub fn view(&self) -> Element<Message> {
        ChartWidget::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn update(&mut self, realization: SnrRealization) {
        self.latest = Some(realization);
    }

    pub fn latest(&self) -> Option<&SnrRealization> {
        self.latest.as_ref()
    }
}

impl Chart<Message> for SignalChart {
    type State = ();

    fn build_chart<DB: DrawingBackend>(&self, _state: &Self::State, builder: ChartBuilder<DB>) {
        if let Some(latest) = self.latest.as_ref() {
            let start = latest.mixture.grid().start();
            let built = charts::build_signal_chart(
                builder,
                &[("Signal + noise", &latest.mixture), ("Signal", &latest.tone)],
                start..start + self.window,
            );
            if let Err(e) = built {
                error!("failed to build signal chart: {:?}", e);
            }
        }
    }
}
