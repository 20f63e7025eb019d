use crate::image::Image;

use super::RenderCtx;

/// GPU copy of a single-channel text image (`R8Unorm`).
pub struct TextTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl TextTexture {
    /// Creates a texture sized to `image` and uploads its bytes.
    ///
    /// Returns `None` for the empty sentinel image or images with more than one
    /// channel.
    pub fn upload(ctx: &RenderCtx<'_>, image: &Image) -> Option<Self> {
        if image.is_empty() {
            log::debug!("TextTexture: empty image, nothing to upload");
            return None;
        }
        if image.channels() != 1 {
            log::warn!(
                "TextTexture: expected a single-channel image, got {} channels",
                image.channels()
            );
            return None;
        }

        let size = wgpu::Extent3d {
            width: image.width(),
            height: image.height(),
            depth_or_array_layers: 1,
        };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("vista text image"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width()),
                rows_per_image: Some(image.height()),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Some(Self {
            texture,
            view,
            width: image.width(),
            height: image.height(),
        })
    }

    /// Sampler matching the text quads: linear filtering, clamped edges.
    pub fn create_sampler(ctx: &RenderCtx<'_>) -> wgpu::Sampler {
        ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("vista text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        })
    }
}
