use crate::core::geometry;
use crate::core::shadow;
use crate::core::uniforms::{EyeUniforms, ShadowUniforms, ShellUniforms};
use crate::core::{Rgb, Visualization};
use crate::loader::DecodedImage;
use web_sys as web;

mod eye;
mod helpers;
mod mesh;
mod targets;
mod textured;

use eye::{create_eye_resources, EyeResources};
use mesh::GpuMesh;
use targets::RenderTargets;
use textured::{create_textured_resources, TexturedDesc, TexturedResources};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,

    eye: EyeResources,
    shell: TexturedResources,
    shadow: TexturedResources,

    inner_mesh: GpuMesh,
    shell_mesh: GpuMesh,
    shadow_mesh: GpuMesh,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, viz: &Visualization) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        log::info!("[gpu] adapter: {:?}", adapter.get_info().backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Shader colors are display values already; an sRGB target would encode them twice.
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, config.width, config.height, format);
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let scene = &viz.scene;
        let eye = create_eye_resources(
            &device,
            format,
            &EyeUniforms::new(scene.camera.view_proj() * scene.inner_world(), &viz.params),
        );

        // Blank shell until the remote bitmap arrives
        let placeholder = helpers::upload_rgba_texture(&device, &queue, "shell_placeholder", 1, 1, &[255; 4]);
        let shell = create_textured_resources(
            &device,
            TexturedDesc {
                label: "shell",
                wgsl: crate::core::SHELL_WGSL,
                color_format: format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
                initial: &ShellUniforms::new(scene),
            },
            placeholder,
            &linear_sampler,
        );

        let gradient = shadow::radial_gradient(scene.shadow_size().round() as u32);
        let gradient_tex = helpers::upload_rgba_texture(
            &device,
            &queue,
            "shadow_gradient",
            gradient.size,
            gradient.size,
            &gradient.rgba,
        );
        let shadow = create_textured_resources(
            &device,
            TexturedDesc {
                label: "shadow",
                wgsl: crate::core::SHADOW_WGSL,
                color_format: format,
                blend: None,
                depth_write: true,
                initial: &ShadowUniforms::new(scene),
            },
            gradient_tex,
            &linear_sampler,
        );

        let segments = crate::core::constants::SPHERE_SEGMENTS;
        let inner_mesh = GpuMesh::upload(
            &device,
            "eye_inner",
            &geometry::uv_sphere(scene.inner_radius(), segments, segments),
        );
        let shell_mesh = GpuMesh::upload(
            &device,
            "eye_shell",
            &geometry::uv_sphere(scene.radius, segments, segments),
        );
        let shadow_mesh = GpuMesh::upload(&device, "shadow_plane", &geometry::plane(scene.shadow_size()));

        Ok(Self {
            surface,
            device,
            queue,
            width: config.width,
            height: config.height,
            config,
            targets,
            linear_sampler,
            eye,
            shell,
            shadow,
            inner_mesh,
            shell_mesh,
            shadow_mesh,
            clear_color: to_wgpu_color(scene.background),
        })
    }

    /// Swap the shell's placeholder for the fetched bitmap.
    pub fn set_shell_texture(&mut self, image: &DecodedImage) {
        if image.width == 0 || image.height == 0 {
            log::warn!("[gpu] ignoring empty shell texture");
            return;
        }
        let texture = helpers::upload_rgba_texture(
            &self.device,
            &self.queue,
            "shell_texture",
            image.width,
            image.height,
            &image.rgba,
        );
        self.shell
            .replace_texture(&self.device, texture, &self.linear_sampler);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            log::debug!("[gpu] resize {}x{} -> {}x{}", self.width, self.height, width, height);
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    pub fn render(&mut self, viz: &Visualization) -> Result<(), wgpu::SurfaceError> {
        let scene = &viz.scene;
        let view_proj = scene.camera.view_proj();
        self.queue.write_buffer(
            &self.eye.uniform_buffer,
            0,
            bytemuck::bytes_of(&EyeUniforms::new(view_proj * scene.inner_world(), &viz.params)),
        );
        self.queue.write_buffer(
            &self.shell.uniform_buffer,
            0,
            bytemuck::bytes_of(&ShellUniforms::new(scene)),
        );
        self.queue.write_buffer(
            &self.shadow.uniform_buffer,
            0,
            bytemuck::bytes_of(&ShadowUniforms::new(scene)),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque first, the translucent shell last
            rpass.set_pipeline(&self.shadow.pipeline);
            rpass.set_bind_group(0, &self.shadow.bind_group, &[]);
            self.shadow_mesh.draw(&mut rpass);

            rpass.set_pipeline(&self.eye.pipeline);
            rpass.set_bind_group(0, &self.eye.bind_group, &[]);
            self.inner_mesh.draw(&mut rpass);

            rpass.set_pipeline(&self.shell.pipeline);
            rpass.set_bind_group(0, &self.shell.bind_group, &[]);
            self.shell_mesh.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn to_wgpu_color(c: Rgb) -> wgpu::Color {
    wgpu::Color {
        r: c.r as f64,
        g: c.g as f64,
        b: c.b as f64,
        a: 1.0,
    }
}
