//! Window and frame configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Initial window width (pixels)
    pub window_width: u32,

    /// Initial window height (pixels)
    pub window_height: u32,

    /// Window title shown once the visual is running
    pub title: String,

    /// `iTime` increment per rendered frame (not scaled by wall-clock time)
    pub time_step: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            title: "Spectrum Shader".to_string(),
            time_step: 0.1,
        }
    }
}
