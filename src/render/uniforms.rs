//! Named shader inputs and their per-frame updates.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Uniform name of the audio spectrum texture
pub const AUDIO_DATA: &str = "tAudioData";
/// Uniform name of the viewport size in pixels
pub const RESOLUTION: &str = "iResolution";
/// Uniform name of the frame clock
pub const TIME: &str = "iTime";
/// Uniform name of the decorative image
pub const CHANNEL0: &str = "iChannel0";
/// Uniform name aliasing [`AUDIO_DATA`]
pub const CHANNEL1: &str = "iChannel1";

/// Texture whose backing memory changes in place on the CPU.
///
/// Writers call [`mark_dirty`](Self::mark_dirty); the renderer calls
/// [`take_dirty`](Self::take_dirty) and re-uploads when it returns true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTexture {
    width: u32,
    height: u32,
    dirty: bool,
}

impl DataTexture {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the flag, returning whether an upload is due
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Static image bound once at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTexture {
    pub width: u32,
    pub height: u32,
}

/// Value of one named uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue<'a> {
    Float(f64),
    Vec2(Vec2),
    DataTexture(&'a DataTexture),
    Image(&'a ImageTexture),
}

/// Current values of every uniform the shader reads
#[derive(Debug, Clone)]
pub struct UniformSet {
    audio_data: DataTexture,
    resolution: Vec2,
    time: f64,
    channel0: ImageTexture,
}

impl UniformSet {
    /// Look up a uniform by its shader name
    pub fn get(&self, name: &str) -> Option<UniformValue<'_>> {
        match name {
            AUDIO_DATA | CHANNEL1 => Some(UniformValue::DataTexture(&self.audio_data)),
            RESOLUTION => Some(UniformValue::Vec2(self.resolution)),
            TIME => Some(UniformValue::Float(self.time)),
            CHANNEL0 => Some(UniformValue::Image(&self.channel0)),
            _ => None,
        }
    }

    pub fn audio_data(&self) -> &DataTexture {
        &self.audio_data
    }

    pub fn audio_data_mut(&mut self) -> &mut DataTexture {
        &mut self.audio_data
    }

    pub fn resolution(&self) -> Vec2 {
        self.resolution
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn channel0(&self) -> &ImageTexture {
        &self.channel0
    }

    /// Pack the scalar uniforms for the GPU
    pub fn shader_uniforms(&self) -> ShaderUniforms {
        ShaderUniforms {
            i_resolution: self.resolution.to_array(),
            i_time: self.time as f32,
            _padding: 0.0,
        }
    }
}

/// Uniform buffer layout shared with `shader.wgsl`
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ShaderUniforms {
    pub i_resolution: [f32; 2],
    pub i_time: f32,
    pub _padding: f32, // Padding for alignment
}

/// Owns the [`UniformSet`] and applies frame and resize updates
#[derive(Debug, Clone)]
pub struct UniformBridge {
    uniforms: UniformSet,
    time_step: f64,
}

impl UniformBridge {
    /// Create the uniform set for a spectrum of `bins` entries
    pub fn new(
        bins: usize,
        resolution: (u32, u32),
        channel0: ImageTexture,
        time_step: f64,
    ) -> Self {
        Self {
            uniforms: UniformSet {
                audio_data: DataTexture::new(bins as u32, 1),
                resolution: Vec2::new(resolution.0 as f32, resolution.1 as f32),
                time: 0.0,
                channel0,
            },
            time_step,
        }
    }

    /// Advance `iTime` by one fixed step and flag the spectrum for upload
    pub fn tick(&mut self) {
        self.uniforms.time += self.time_step;
        // tAudioData and iChannel1 share this texture
        self.uniforms.audio_data.mark_dirty();
    }

    /// Overwrite `iResolution`; any size is accepted, including zero
    pub fn resize(&mut self, width: u32, height: u32) {
        self.uniforms.resolution = Vec2::new(width as f32, height as f32);
    }

    pub fn uniforms(&self) -> &UniformSet {
        &self.uniforms
    }

    pub fn uniforms_mut(&mut self) -> &mut UniformSet {
        &mut self.uniforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bridge() -> UniformBridge {
        let channel0 = ImageTexture {
            width: 256,
            height: 256,
        };
        UniformBridge::new(64, (1280, 720), channel0, 0.1)
    }

    #[test]
    fn test_time_advances_by_fixed_step() {
        let mut bridge = bridge();
        assert_eq!(bridge.uniforms().time(), 0.0);

        for n in 1..=1000 {
            bridge.tick();
            assert_relative_eq!(bridge.uniforms().time(), 0.1 * n as f64, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_tick_marks_audio_texture_dirty() {
        let mut bridge = bridge();
        assert!(bridge.uniforms_mut().audio_data_mut().take_dirty());
        assert!(!bridge.uniforms().audio_data().is_dirty());

        bridge.tick();
        assert!(bridge.uniforms().audio_data().is_dirty());
    }

    #[test]
    fn test_channel1_aliases_audio_data() {
        let bridge = bridge();
        let uniforms = bridge.uniforms();

        match (uniforms.get(AUDIO_DATA), uniforms.get(CHANNEL1)) {
            (Some(UniformValue::DataTexture(a)), Some(UniformValue::DataTexture(b))) => {
                assert!(std::ptr::eq(a, b));
                assert_eq!(a.width(), 64);
                assert_eq!(a.height(), 1);
            }
            other => panic!("unexpected uniforms: {:?}", other),
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let bridge = bridge();
        let uniforms = bridge.uniforms();

        assert_eq!(uniforms.get(TIME), Some(UniformValue::Float(0.0)));
        assert_eq!(
            uniforms.get(RESOLUTION),
            Some(UniformValue::Vec2(Vec2::new(1280.0, 720.0)))
        );
        assert!(matches!(
            uniforms.get(CHANNEL0),
            Some(UniformValue::Image(ImageTexture {
                width: 256,
                height: 256
            }))
        ));
        assert_eq!(uniforms.get("iMouse"), None);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut once = bridge();
        once.resize(1024, 768);

        let mut twice = bridge();
        twice.resize(1024, 768);
        twice.resize(1024, 768);

        assert_eq!(twice.uniforms().resolution(), Vec2::new(1024.0, 768.0));
        assert_eq!(once.uniforms().resolution(), twice.uniforms().resolution());
        assert_eq!(
            bytemuck::bytes_of(&once.uniforms().shader_uniforms()),
            bytemuck::bytes_of(&twice.uniforms().shader_uniforms())
        );
    }

    #[test]
    fn test_degenerate_viewport_is_accepted() {
        let mut bridge = bridge();
        bridge.resize(0, 0);
        assert_eq!(bridge.uniforms().resolution(), Vec2::ZERO);
    }

    #[test]
    fn test_shader_uniforms_layout() {
        assert_eq!(std::mem::size_of::<ShaderUniforms>(), 16);

        let mut bridge = bridge();
        bridge.tick();
        let packed = bridge.uniforms().shader_uniforms();
        assert_eq!(packed.i_resolution, [1280.0, 720.0]);
        assert_relative_eq!(packed.i_time, 0.1);
    }
}
