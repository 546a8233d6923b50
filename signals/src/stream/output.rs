use async_channel::{Receiver, Sender, TryRecvError};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SampleFormat;
use log::{debug, error, warn};
use thiserror::Error;

use crate::stream::{ChannelCount, Frame, SampleRate};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("output device closed")]
    DeviceClosed,
}

pub trait Output {
    fn push(&mut self, frame: Frame) -> Result<(), OutputError>;
}

/// The default output device, fed through a short queue of frames.
pub struct OutputDevice {
    sender: Sender<Frame>,
    drained: Receiver<()>,
    _stream: Box<dyn StreamTrait>,
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no default output device")]
    DeviceNotAvailable,
    #[error("output device does not support {channels} channel(s) of f32 at {sample_rate} Hz")]
    ConfigNotAvailable { channels: u16, sample_rate: u32 },
    #[error("failed to build output stream")]
    BuildStreamError(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream")]
    PlayStreamError(#[from] cpal::PlayStreamError),
}

/// An f32 stream config with exactly these channels and sample rate
fn find_config(
    device: &cpal::Device,
    channels: ChannelCount,
    sample_rate: SampleRate,
) -> Result<cpal::StreamConfig, OpenError> {
    let not_available = || OpenError::ConfigNotAvailable {
        channels: u16::from(channels),
        sample_rate: u32::from(sample_rate),
    };
    let rate = cpal::SampleRate::from(sample_rate);
    let mut config = device
        .supported_output_configs()
        .map_err(|_| not_available())?
        .find(|c| {
            c.sample_format() == SampleFormat::F32
                && c.channels() == u16::from(channels)
                && (c.min_sample_rate()..=c.max_sample_rate()).contains(&rate)
        })
        .ok_or_else(not_available)?
        .with_sample_rate(rate)
        .config();
    config.buffer_size = cpal::BufferSize::Fixed(OutputDevice::DEVICE_BUFFER);
    Ok(config)
}

impl OutputDevice {
    /// The buffer size requested from the device for each callback.
    /// ALSA treats this as a hint at best.
    pub const DEVICE_BUFFER: cpal::FrameCount = 1024;

    /// Synthesis runs far ahead of playback, so pushes block once this many
    /// frames are waiting.
    const MAX_FRAME_QUEUE_LEN: usize = 4;

    pub fn new(channels: ChannelCount, sample_rate: SampleRate) -> Result<OutputDevice, OpenError> {
        let device = cpal::default_host()
            .default_output_device()
            .ok_or(OpenError::DeviceNotAvailable)?;
        let config = find_config(&device, channels, sample_rate)?;
        debug!("opening output device with {:?}", config);

        let (sender, receiver) = async_channel::bounded(OutputDevice::MAX_FRAME_QUEUE_LEN);
        let (drained_sender, drained) = async_channel::bounded(1);
        let mut receiver = FrameReceiver::new(channels, sample_rate, receiver);
        let stream: Box<dyn StreamTrait> = Box::new(device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                match receiver.fill_buffer(data) {
                    Fill::Samples(0) => warn!("Dropped output!"),
                    Fill::Samples(n) if n < data.len() => {
                        warn!("Underfull output: {} < {}!", n, data.len())
                    }
                    Fill::Samples(_) => (),
                    Fill::Drained => {
                        // Later callbacks find the channel full, which is fine.
                        let _ = drained_sender.try_send(());
                    }
                }
            },
            move |err| {
                error!("output stream error: {}", err);
            },
            None, // blocking
        )?);
        stream.play()?;

        Ok(OutputDevice {
            sender,
            drained,
            _stream: stream,
        })
    }

    /// Close the frame queue and block until the device has played
    /// everything that was pushed.
    pub fn finish(self) {
        self.sender.close();
        if self.drained.recv_blocking().is_err() {
            warn!("output stream closed before draining");
        }
    }
}

impl Output for OutputDevice {
    fn push(&mut self, frame: Frame) -> Result<(), OutputError> {
        self.sender
            .send_blocking(frame)
            .map_err(|_| OutputError::DeviceClosed)
    }
}

/// What one device callback got
#[derive(Clone, Copy, Debug, PartialEq)]
enum Fill {
    /// This many samples, then silence
    Samples(usize),
    /// The queue is closed and empty; the buffer is silent after whatever
    /// was left.
    Drained,
}

/// Copies queued frames into the buffers the device asks to have filled,
/// carrying a partly-used frame over to the next callback.
struct FrameReceiver {
    channels: ChannelCount,
    sample_rate: SampleRate,
    receiver: Receiver<Frame>,
    pending: Option<Frame>,
    offset: usize,
}

impl FrameReceiver {
    fn new(channels: ChannelCount, sample_rate: SampleRate, receiver: Receiver<Frame>) -> Self {
        FrameReceiver {
            channels,
            sample_rate,
            receiver,
            pending: None,
            offset: 0,
        }
    }

    fn fill_buffer(&mut self, buf: &mut [f32]) -> Fill {
        let mut filled = 0;
        while filled < buf.len() {
            if self.pending.is_none() {
                match self.receiver.try_recv() {
                    Ok(frame) => self.accept(frame),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Closed) => {
                        buf[filled..].fill(0.);
                        return Fill::Drained;
                    }
                }
            }
            filled += self.copy_pending(&mut buf[filled..]);
        }
        buf[filled..].fill(0.);
        Fill::Samples(filled)
    }

    fn accept(&mut self, frame: Frame) {
        assert!(frame.channels == self.channels);
        assert!(frame.sample_rate == self.sample_rate);
        if !frame.samples.is_empty() {
            self.pending = Some(frame);
            self.offset = 0;
        }
    }

    /// Copy as much of the pending frame as fits, and let go of it once it's
    /// used up.
    fn copy_pending(&mut self, buf: &mut [f32]) -> usize {
        let Some(frame) = self.pending.as_ref() else {
            return 0;
        };
        let rest = &frame.samples[self.offset..];
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        let used_up = self.offset + n == frame.samples.len();
        self.offset += n;
        if used_up {
            self.pending = None;
        }
        n
    }
}
