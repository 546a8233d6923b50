use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use hound; // (provides .wav encoding)
use log::info;

use super::{normalize_peak, ChannelCount, Frame, SampleRate};
use crate::process::SamplePath;
use crate::Result;

/// Writes `Frame`s as 32 bit float samples to a .wav file (or any other
/// seekable sink).
pub struct WavWriter<W: Write + Seek> {
    spec: hound::WavSpec,
    writer: hound::WavWriter<W>,
}

impl WavWriter<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(
        path: P,
        channels: ChannelCount,
        sample_rate: SampleRate,
    ) -> Result<WavWriter<BufWriter<File>>> {
        let spec = WavWriter::<BufWriter<File>>::spec(channels, sample_rate);
        Ok(WavWriter {
            spec,
            writer: hound::WavWriter::create(path, spec)?,
        })
    }
}

impl<W: Write + Seek> WavWriter<W> {
    pub fn new(sink: W, channels: ChannelCount, sample_rate: SampleRate) -> Result<WavWriter<W>> {
        let spec = WavWriter::<W>::spec(channels, sample_rate);
        Ok(WavWriter {
            spec,
            writer: hound::WavWriter::new(sink, spec)?,
        })
    }

    fn spec(channels: ChannelCount, sample_rate: SampleRate) -> hound::WavSpec {
        hound::WavSpec {
            channels: u16::from(channels),
            sample_rate: u32::from(sample_rate),
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        }
    }

    pub fn push(&mut self, frame: &Frame) -> Result<()> {
        assert!(u16::from(frame.channels) == self.spec.channels);
        assert!(u32::from(frame.sample_rate) == self.spec.sample_rate);

        for s in frame.samples.iter() {
            self.writer.write_sample(*s)?;
        }
        Ok(())
    }

    /// Write the header sizes, making the output a valid .wav
    pub fn finalize(self) -> Result<()> {
        self.writer.finalize()?;
        Ok(())
    }
}

fn normalized_frame(path: &SamplePath) -> Frame {
    Frame {
        channels: ChannelCount::MONO,
        sample_rate: path.grid().sample_rate(),
        samples: normalize_peak(path.values()),
    }
}

/// Save a sample path as a mono .wav file at its own sample rate,
/// peak-normalized.
pub fn save<P: AsRef<Path>>(path: P, signal: &SamplePath) -> Result<()> {
    let mut writer = WavWriter::create(
        path.as_ref(),
        ChannelCount::MONO,
        signal.grid().sample_rate(),
    )?;
    writer.push(&normalized_frame(signal))?;
    writer.finalize()?;
    info!(
        "wrote {} samples to {}",
        signal.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Encode a sample path as an in-memory .wav, peak-normalized.
pub fn encode(signal: &SamplePath) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(
        &mut bytes,
        ChannelCount::MONO,
        signal.grid().sample_rate(),
    )?;
    writer.push(&normalized_frame(signal))?;
    writer.finalize()?;
    Ok(bytes.into_inner())
}
