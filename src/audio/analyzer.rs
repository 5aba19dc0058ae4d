//! Byte spectrum of the playing signal.

use std::f32::consts::PI;
use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

use super::tap::SampleWindow;
use crate::error::InitError;
use crate::params::AnalyserConfig;

/// Fixed-length byte magnitudes, one per frequency bin.
///
/// The length is set at construction and no method can change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyBuffer {
    bins: Vec<u8>,
}

impl FrequencyBuffer {
    fn new(len: usize) -> Self {
        Self { bins: vec![0; len] }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bins
    }
}

/// Windowed FFT over the most recent samples, refreshed once per frame
pub struct SpectrumAnalyzer {
    config: AnalyserConfig,
    window: SampleWindow,
    fft: Arc<dyn Fft<f32>>,
    blackman: Vec<f32>,
    samples: Vec<f32>,
    spectrum: Vec<Complex<f32>>,
    scratch: Vec<Complex<f32>>,
    smoothed: Vec<f32>,
    data: FrequencyBuffer,
}

impl SpectrumAnalyzer {
    /// Create an analyser reading from `window`
    pub fn new(config: AnalyserConfig, window: SampleWindow) -> Result<Self, InitError> {
        config.validate().map_err(InitError::InvalidConfig)?;

        let size = config.fft_size;
        let bins = config.bin_count();
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let scratch = vec![Complex::new(0.0, 0.0); fft.get_inplace_scratch_len()];

        Ok(Self {
            blackman: (0..size).map(|i| blackman_window(i, size)).collect(),
            samples: vec![0.0; size],
            spectrum: vec![Complex::new(0.0, 0.0); size],
            scratch,
            smoothed: vec![0.0; bins],
            data: FrequencyBuffer::new(bins),
            config,
            window,
            fft,
        })
    }

    /// Recompute the byte spectrum from the current sample window.
    ///
    /// If no new samples arrived since the last call the result is a
    /// re-smoothed copy of the previous spectrum.
    pub fn refresh(&mut self) {
        self.window.copy_latest(&mut self.samples);
        self.analyse();
    }

    /// Spectrum written by the last [`refresh`](Self::refresh)
    pub fn data(&self) -> &FrequencyBuffer {
        &self.data
    }

    fn analyse(&mut self) {
        for ((bin, sample), weight) in self
            .spectrum
            .iter_mut()
            .zip(&self.samples)
            .zip(&self.blackman)
        {
            *bin = Complex::new(sample * weight, 0.0);
        }

        self.fft
            .process_with_scratch(&mut self.spectrum, &mut self.scratch);

        let scale = 1.0 / self.config.fft_size as f32;
        let tau = self.config.smoothing_time_constant;
        let min_db = self.config.min_decibels;
        let range_db = self.config.max_decibels - min_db;

        for ((smoothed, bin), byte) in self
            .smoothed
            .iter_mut()
            .zip(&self.spectrum)
            .zip(self.data.bins.iter_mut())
        {
            let magnitude = bin.norm() * scale;
            let value = tau * *smoothed + (1.0 - tau) * magnitude;
            // Non-finite input collapses to silence
            *smoothed = if value.is_finite() { value } else { 0.0 };
            *byte = magnitude_to_byte(*smoothed, min_db, range_db);
        }
    }
}

/// Map a linear magnitude onto `0..=255` across `[min_db, min_db + range_db]`
fn magnitude_to_byte(magnitude: f32, min_db: f32, range_db: f32) -> u8 {
    if magnitude <= 0.0 {
        return 0;
    }
    let db = 20.0 * magnitude.log10();
    let scaled = (255.0 / range_db) * (db - min_db);
    scaled.floor().clamp(0.0, 255.0) as u8
}

/// Blackman window (alpha = 0.16)
fn blackman_window(index: usize, size: usize) -> f32 {
    let phase = 2.0 * PI * index as f32 / size as f32;
    0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos()
}
