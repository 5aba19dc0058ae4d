//! Initialization errors.
//!
//! Everything that can go wrong happens before the first frame; once the
//! render loop runs, per-frame work has no failure path.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure while bringing the visualizer up
#[derive(Debug, Error)]
pub enum InitError {
    #[error("invalid analyser configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to open audio file {}", .path.display())]
    OpenAudio {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode audio file {}", .path.display())]
    DecodeAudio {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("no audio output device found")]
    NoOutputDevice,

    #[error("failed to open audio output stream")]
    OutputStream(#[from] rodio::StreamError),

    #[error("failed to attach playback to the output stream")]
    Playback(#[from] rodio::PlayError),

    #[error("audio output stopped before playback began")]
    PlaybackNotStarted,

    #[error("failed to load texture {}", .path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create rendering surface")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find a suitable GPU adapter")]
    NoAdapter,

    #[error("failed to create GPU device")]
    Device(#[from] wgpu::RequestDeviceError),
}
