//! Audio playback and spectrum analysis.
//!
//! Plays a media file on the default output device, taps the samples the
//! device consumes, and turns the most recent window into a byte spectrum
//! for the shader.

mod analyzer;
mod source;
mod strategy;
mod tap;

// Re-export public types
pub use analyzer::{FrequencyBuffer, SpectrumAnalyzer};
pub use source::{decode_fully, open_stream, AudioSource, DecodedAudio};
pub use strategy::PlaybackStrategy;
pub use tap::{SampleWindow, TappedSource};
