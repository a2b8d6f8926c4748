use super::helpers;
use crate::constants::{DEPTH_FORMAT, MSAA_SAMPLES};

/// Offscreen attachments of the scene pass.
///
/// - `msaa_*` is the multisampled color target, resolved into the swapchain.
/// - `depth_*` is the matching multisampled depth buffer.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_render_texture(
            device,
            "msaa_color",
            width,
            height,
            color_format,
            MSAA_SAMPLES,
        );
        let (depth_tex, depth_view) =
            helpers::create_render_texture(device, "depth", width, height, DEPTH_FORMAT, MSAA_SAMPLES);
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            color_format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.color_format);
    }
}
