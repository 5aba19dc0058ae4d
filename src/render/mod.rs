//! GPU side: uniforms, textures, the unit quad and the wgpu pipeline.

mod quad;
mod system;
mod texture;
mod uniforms;

// Re-export public types
pub use quad::{Vertex, QUAD_INDICES, QUAD_VERTICES};
pub use system::RenderSystem;
pub use texture::{DecorativeImage, GpuTexture};
pub use uniforms::{
    DataTexture, ImageTexture, ShaderUniforms, UniformBridge, UniformSet, UniformValue,
    AUDIO_DATA, CHANNEL0, CHANNEL1, RESOLUTION, TIME,
};
