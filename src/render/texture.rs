//! Texture resources: the decorative image and the spectrum texture.

use std::path::Path;

use wgpu::util::{DeviceExt, TextureDataOrder};

use super::uniforms::ImageTexture;
use crate::error::InitError;

/// Decorative image decoded to RGBA, ready for upload
#[derive(Debug, Clone)]
pub struct DecorativeImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecorativeImage {
    /// Decode the image at `path`
    pub fn load(path: &Path) -> Result<Self, InitError> {
        let image = image::open(path).map_err(|source| InitError::Texture {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::info!("Texture: {} ({}x{})", path.display(), width, height);

        Ok(Self {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }

    pub fn descriptor(&self) -> ImageTexture {
        ImageTexture {
            width: self.width,
            height: self.height,
        }
    }
}

/// GPU texture with the view and sampler the shader binds
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl GpuTexture {
    /// Upload the decorative image, repeating in both directions
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &DecorativeImage,
    ) -> Self {
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("iChannel0 Texture"),
                size: wgpu::Extent3d {
                    width: image.width.max(1),
                    height: image.height.max(1),
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            TextureDataOrder::LayerMajor,
            &image.rgba,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("iChannel0 Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Single-row red texture holding one byte per frequency bin
    pub fn spectrum(device: &wgpu::Device, bins: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tAudioData Texture"),
            size: spectrum_extent(bins),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("tAudioData Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Overwrite a spectrum texture with `bins`
    pub fn write_spectrum(&self, queue: &wgpu::Queue, bins: &[u8]) {
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bins,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(bins.len() as u32),
                rows_per_image: Some(1),
            },
            spectrum_extent(bins.len() as u32),
        );
    }
}

fn spectrum_extent(bins: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: bins,
        height: 1,
        depth_or_array_layers: 1,
    }
}
