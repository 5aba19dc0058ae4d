//! Spectrum analysis configuration.

/// Shortest transform the analyser accepts (samples)
pub const MIN_FFT_SIZE: usize = 32;

/// Longest transform the analyser accepts (samples)
pub const MAX_FFT_SIZE: usize = 32768;

/// Spectrum analyser configuration
///
/// Defaults reproduce a browser `AnalyserNode` configured with
/// `fftSize = 128`, so the shader sees the same byte spectrum it was
/// written against.
#[derive(Debug, Clone)]
pub struct AnalyserConfig {
    /// Transform size (samples, power of 2)
    /// Frequency bin count is half of this.
    pub fft_size: usize,

    /// Temporal smoothing between refreshes (0 = none, 1 = frozen)
    pub smoothing_time_constant: f32,

    /// Magnitude mapped to byte 0 (decibels)
    pub min_decibels: f32,

    /// Magnitude mapped to byte 255 (decibels)
    pub max_decibels: f32,
}

impl Default for AnalyserConfig {
    fn default() -> Self {
        Self {
            fft_size: 128,
            smoothing_time_constant: 0.8,
            min_decibels: -100.0,
            max_decibels: -30.0,
        }
    }
}

impl AnalyserConfig {
    /// Number of frequency bins produced per refresh
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !self.fft_size.is_power_of_two() {
            return Err(format!(
                "FFT size must be power of 2, got {}",
                self.fft_size
            ));
        }
        if !(MIN_FFT_SIZE..=MAX_FFT_SIZE).contains(&self.fft_size) {
            return Err(format!(
                "FFT size must be within {}..={}, got {}",
                MIN_FFT_SIZE, MAX_FFT_SIZE, self.fft_size
            ));
        }
        if !(0.0..=1.0).contains(&self.smoothing_time_constant) {
            return Err(format!(
                "Smoothing time constant must be within 0..=1, got {}",
                self.smoothing_time_constant
            ));
        }
        if self.min_decibels >= self.max_decibels {
            return Err(format!(
                "min_decibels ({}) must be below max_decibels ({})",
                self.min_decibels, self.max_decibels
            ));
        }
        Ok(())
    }
}
