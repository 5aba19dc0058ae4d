//! Parameter definitions with units and documented semantics.

mod audio;
mod media;
mod render;

// Re-export all types
pub use audio::{AnalyserConfig, MAX_FFT_SIZE, MIN_FFT_SIZE};
pub use media::{host_user_agent, MediaConfig, DEFAULT_AUDIO_PATH, DEFAULT_TEXTURE_PATH};
pub use render::RenderConfig;
