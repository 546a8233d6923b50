use std::path::PathBuf;
use std::thread;

use clap::Parser;
use iced::widget::{button, column, container, row, slider, text};
use iced::{Alignment, Element, Length, Padding, Task};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod signal_chart;

use signal_chart::SignalChart;
use signals::dsp::{Decibels, Hz};
use signals::snr::{SnrDemo, SNR_MAX_DB, SNR_MIN_DB, SNR_STEP_DB};
use signals::stream::{playback, wav};
use signals::{DemoConfig, Harmonics, SampleRate};

#[derive(Debug, Parser)]
struct Args {
    /// Sample rate (Hz) of the synthesized signals
    #[arg(long, default_value_t = 6000)]
    sample_rate: u32,
    /// Length (s) of the synthesized signals
    #[arg(long, default_value_t = 3.)]
    duration: f64,
    /// Frequency (Hz) of the tone
    #[arg(long, default_value_t = 1000.)]
    tone: f64,
    /// Height σ² of the noise PSD
    #[arg(long, default_value_t = 1e-10)]
    noise_intensity: f64,
    /// Length (s) of the plotted part of the signals
    #[arg(long, default_value_t = 0.01)]
    plot_window: f64,
    /// Use exactly this many harmonics for the noise, instead of one per
    /// frequency bin of the duration
    #[arg(long)]
    harmonics: Option<usize>,
    /// Seed for the noise generator (random if not given)
    #[arg(long)]
    seed: Option<u64>,
    /// Where "Save" writes the signal + noise
    #[arg(short, long, default_value = "snr_demo.wav")]
    output: PathBuf,
}

impl Args {
    fn config(&self) -> DemoConfig {
        DemoConfig {
            sample_rate: SampleRate::new(self.sample_rate),
            duration: self.duration,
            tone: Hz(self.tone),
            noise_intensity: self.noise_intensity,
            plot_window: self.plot_window,
            harmonics: match self.harmonics {
                Some(n) => Harmonics::Fixed(n),
                None => Harmonics::default(),
            },
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    SnrChanged(f64),
    Run,
    Play,
    PlaybackFinished(Result<(), String>),
    Save,
}

struct SnrApp {
    demo: SnrDemo,
    rng: StdRng,
    snr: f64,
    chart: SignalChart,
    output: PathBuf,
    status: String,
    playing: bool,
}

impl SnrApp {
    fn new(args: Args) -> SnrApp {
        let config = args.config();
        info!("starting with {:?}", config);
        SnrApp {
            demo: SnrDemo::new(config),
            rng: args.rng(),
            snr: SNR_MIN_DB,
            chart: SignalChart::new(config.plot_window),
            output: args.output,
            status: String::from("Pick an SNR and press Run"),
            playing: false,
        }
    }

    fn run(&mut self) {
        let snr = Decibels::new(self.snr);
        match self.demo.run(snr, &mut self.rng) {
            Ok(realization) => {
                self.status = format!(
                    "SNR {} (measured {:.1}dB), tone amplitude {:.3e}",
                    snr,
                    f64::from(realization.measured_snr()),
                    realization.amplitude
                );
                self.chart.update(realization);
            }
            Err(e) => {
                error!("synthesis failed: {}", e);
                self.status = format!("Synthesis failed: {}", e);
            }
        }
    }

    /// Play the latest mixture on a thread of its own, reporting back with
    /// `Message::PlaybackFinished`.
    fn play(&mut self) -> Task<Message> {
        if self.playing {
            return Task::none();
        }
        let Some(latest) = self.chart.latest() else {
            return Task::none();
        };
        let mixture = latest.mixture.clone();
        let (sender, receiver) = async_channel::bounded(1);
        thread::spawn(move || {
            let result = playback::play(&mixture).map_err(|e| e.to_string());
            let _ = sender.send_blocking(result);
        });
        self.playing = true;
        self.status = String::from("Playing...");
        Task::perform(
            async move {
                receiver
                    .recv()
                    .await
                    .unwrap_or_else(|_| Err(String::from("playback thread exited")))
            },
            Message::PlaybackFinished,
        )
    }

    fn playback_finished(&mut self, result: Result<(), String>) {
        self.playing = false;
        self.status = match result {
            Ok(()) => String::from("Finished playing"),
            Err(e) => {
                error!("playback failed: {}", e);
                format!("Playback failed: {}", e)
            }
        };
    }

    fn save(&mut self) {
        if let Some(latest) = self.chart.latest() {
            self.status = match wav::save(&self.output, &latest.mixture) {
                Ok(()) => format!("Saved {}", self.output.display()),
                Err(e) => {
                    error!("failed to save {}: {}", self.output.display(), e);
                    format!("Saving failed: {}", e)
                }
            };
        }
    }
}

fn update(state: &mut SnrApp, message: Message) -> Task<Message> {
    match message {
        Message::SnrChanged(snr) => state.snr = snr,
        Message::Run => state.run(),
        Message::Play => return state.play(),
        Message::PlaybackFinished(result) => state.playback_finished(result),
        Message::Save => state.save(),
    }
    Task::none()
}

fn view(state: &SnrApp) -> Element<Message> {
    let have_signal = state.chart.latest().is_some();
    let controls = row![
        text(format!("SNR: {} dB", state.snr)).width(Length::Fixed(100.)),
        slider(SNR_MIN_DB..=SNR_MAX_DB, state.snr, Message::SnrChanged).step(SNR_STEP_DB),
        button("Run").on_press(Message::Run),
        button("Play").on_press_maybe(
            (have_signal && !state.playing).then_some(Message::Play)
        ),
        button("Save").on_press_maybe(have_signal.then_some(Message::Save)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(column![controls, text(&state.status), state.chart.view()].spacing(10))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::new(5.))
        .into()
}

fn main() -> iced::Result {
    env_logger::init();
    iced::application("SNR Demo", update, view)
        // This is an unreliable work-around for a bug with nvidia's linux
        // vulkan drivers, see https://github.com/iced-rs/iced/issues/2314
        .antialiasing(true)
        .run_with(|| (SnrApp::new(Args::parse()), Task::none()))
}
