//! Audio playback from a media file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc;

use cpal::traits::{DeviceTrait, HostTrait};
use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::strategy::PlaybackStrategy;
use super::tap::{SampleWindow, TappedSource};
use crate::error::InitError;

/// Audio file fully decoded into memory
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub channels: u16,
    pub sample_rate: u32,
    /// Interleaved samples
    pub samples: Vec<f32>,
}

impl DecodedAudio {
    pub fn into_source(self) -> SamplesBuffer<f32> {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples)
    }
}

/// Open `path` as an incrementally decoding source
pub fn open_stream(path: &Path) -> Result<Decoder<BufReader<File>>, InitError> {
    let file = File::open(path).map_err(|source| InitError::OpenAudio {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).map_err(|source| InitError::DecodeAudio {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode the whole of `path` into memory
pub fn decode_fully(path: &Path) -> Result<DecodedAudio, InitError> {
    let decoder = open_stream(path)?;
    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let samples: Vec<f32> = decoder.convert_samples::<f32>().collect();

    Ok(DecodedAudio {
        channels,
        sample_rate,
        samples,
    })
}

/// A playing audio file and the tap feeding the analyser.
///
/// Playback runs for as long as this value lives; there is no stop.
pub struct AudioSource {
    strategy: PlaybackStrategy,

    /// Kept alive so the device keeps pulling samples
    _sink: Sink,
    _stream: OutputStream,
}

impl AudioSource {
    /// Start playing `path` with the given strategy, tapping into `window`.
    ///
    /// Returns once the strategy's readiness point is reached: the file
    /// is decoded (buffer) or the device has pulled the first sample
    /// (stream). Blocks indefinitely if the device never starts pulling.
    pub fn start(
        path: &Path,
        strategy: PlaybackStrategy,
        window: SampleWindow,
    ) -> Result<Self, InitError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(InitError::NoOutputDevice)?;

        log::info!(
            "Audio: {} ({:?})",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            strategy
        );

        let (stream, handle) = OutputStream::try_from_device(&device)?;
        let sink = Sink::try_new(&handle)?;

        match strategy {
            PlaybackStrategy::BufferDecode => {
                let decoded = decode_fully(path)?;
                log::info!(
                    "Decoded {} samples ({} ch @ {}Hz) from {}",
                    decoded.samples.len(),
                    decoded.channels,
                    decoded.sample_rate,
                    path.display()
                );
                sink.append(TappedSource::new(
                    decoded.into_source(),
                    window.clone(),
                    None,
                ));
            }
            PlaybackStrategy::StreamedElement => {
                let decoder = open_stream(path)?;
                let (started_tx, started_rx) = mpsc::channel();
                sink.append(TappedSource::new(
                    decoder.convert_samples::<f32>(),
                    window.clone(),
                    Some(started_tx),
                ));
                sink.play();
                started_rx
                    .recv()
                    .map_err(|_| InitError::PlaybackNotStarted)?;
                log::info!("Streaming {}", path.display());
            }
        }

        Ok(Self {
            strategy,
            _sink: sink,
            _stream: stream,
        })
    }

    pub fn strategy(&self) -> PlaybackStrategy {
        self.strategy
    }
}
