//! Spectrum Shader library - audio analysis feeding a full-screen shader

pub mod audio;
pub mod cli;
pub mod error;
pub mod lifecycle;
pub mod params;
pub mod render;
pub mod render_loop;
pub mod viewport;
