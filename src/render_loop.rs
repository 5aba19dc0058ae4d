//! Per-frame driver: analyse, tick, draw.

use crate::audio::{FrequencyBuffer, SpectrumAnalyzer};
use crate::render::{UniformBridge, UniformSet};

/// Something the frame can be drawn onto
pub trait FrameTarget {
    /// Draw one frame with `uniforms` bound, uploading `spectrum` if the
    /// audio texture is dirty
    fn draw(&mut self, uniforms: &mut UniformSet, spectrum: &FrequencyBuffer);

    /// Resize the output surface (pixels)
    fn resize_surface(&mut self, width: u32, height: u32);

    /// Current output surface size (pixels)
    fn surface_size(&self) -> (u32, u32);
}

/// Open-ended frame driver, started once initialization succeeds
pub struct RenderLoop<T> {
    analyzer: SpectrumAnalyzer,
    bridge: UniformBridge,
    target: T,
    frames: u64,
}

impl<T: FrameTarget> RenderLoop<T> {
    pub fn new(analyzer: SpectrumAnalyzer, bridge: UniformBridge, target: T) -> Self {
        Self {
            analyzer,
            bridge,
            target,
            frames: 0,
        }
    }

    /// Run one iteration; called from the host's redraw callback
    pub fn frame(&mut self) {
        self.analyzer.refresh();
        self.bridge.tick();
        self.target
            .draw(self.bridge.uniforms_mut(), self.analyzer.data());
        self.frames += 1;
    }

    /// Iterations run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn spectrum(&self) -> &FrequencyBuffer {
        self.analyzer.data()
    }

    pub fn bridge(&self) -> &UniformBridge {
        &self.bridge
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Surface and uniforms together, for resize handling
    pub fn viewport_parts(&mut self) -> (&mut T, &mut UniformBridge) {
        (&mut self.target, &mut self.bridge)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::audio::SampleWindow;
    use crate::params::AnalyserConfig;
    use crate::render::ImageTexture;
    use approx::assert_relative_eq;

    /// Draw target that records what it was asked to do
    #[derive(Default)]
    pub(crate) struct RecordingTarget {
        pub size: (u32, u32),
        pub draws: usize,
        pub uploads: Vec<Vec<u8>>,
        pub times: Vec<f64>,
    }

    impl FrameTarget for RecordingTarget {
        fn draw(&mut self, uniforms: &mut UniformSet, spectrum: &FrequencyBuffer) {
            if uniforms.audio_data_mut().take_dirty() {
                self.uploads.push(spectrum.as_slice().to_vec());
            }
            self.times.push(uniforms.time());
            self.draws += 1;
        }

        fn resize_surface(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }

        fn surface_size(&self) -> (u32, u32) {
            self.size
        }
    }

    pub(crate) fn render_loop() -> (RenderLoop<RecordingTarget>, SampleWindow) {
        let config = AnalyserConfig::default();
        let window = SampleWindow::new(config.fft_size);
        let bins = config.bin_count();
        let analyzer = SpectrumAnalyzer::new(config, window.clone()).unwrap();
        let channel0 = ImageTexture {
            width: 1,
            height: 1,
        };
        let bridge = UniformBridge::new(bins, (1280, 720), channel0, 0.1);
        let target = RecordingTarget {
            size: (1280, 720),
            ..Default::default()
        };
        (RenderLoop::new(analyzer, bridge, target), window)
    }

    #[test]
    fn test_one_frame_refreshes_ticks_and_draws() {
        let (mut render_loop, window) = render_loop();
        for n in 0..128 {
            window.push((n as f32 * 0.3).sin());
        }

        render_loop.frame();

        assert_eq!(render_loop.frames(), 1);
        assert_eq!(render_loop.spectrum().len(), 64);
        assert_eq!(render_loop.bridge().uniforms().audio_data().width(), 64);
        assert_relative_eq!(render_loop.bridge().uniforms().time(), 0.1);
        assert_eq!(render_loop.target().draws, 1);
        assert_eq!(render_loop.target().uploads.len(), 1);
        assert_eq!(render_loop.target().uploads[0], render_loop.spectrum().as_slice());
    }

    #[test]
    fn test_time_tracks_frame_count() {
        let (mut render_loop, _window) = render_loop();
        assert_eq!(render_loop.bridge().uniforms().time(), 0.0);

        for n in 1..=500u64 {
            render_loop.frame();
            assert_relative_eq!(
                render_loop.bridge().uniforms().time(),
                0.1 * n as f64,
                epsilon = 1e-9
            );
        }
        assert_eq!(render_loop.frames(), 500);
    }

    #[test]
    fn test_spectrum_uploaded_every_frame() {
        let (mut render_loop, _window) = render_loop();
        for _ in 0..10 {
            render_loop.frame();
        }
        let target = render_loop.target();
        assert_eq!(target.draws, 10);
        assert_eq!(target.uploads.len(), 10);
        assert!(target.uploads.iter().all(|bins| bins.len() == 64));
    }

    #[test]
    fn test_draw_sees_time_after_tick() {
        let (mut render_loop, _window) = render_loop();
        render_loop.frame();
        render_loop.frame();
        let times = &render_loop.target().times;
        assert_relative_eq!(times[0], 0.1);
        assert_relative_eq!(times[1], 0.2);
    }
}
