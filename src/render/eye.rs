use super::helpers;
use crate::core::uniforms::EyeUniforms;

/// Pipeline and uniforms of the custom-shaded inner sphere.
pub(crate) struct EyeResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_eye_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    initial: &EyeUniforms,
) -> EyeResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("eye_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::EYE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("eye_bgl"),
        entries: &[helpers::uniform_layout_entry(0)],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("eye_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_mesh_pipeline(
        device,
        helpers::MeshPipelineDesc {
            label: "eye_pipeline",
            layout: &pl,
            shader: &shader,
            color_format,
            blend: None,
            depth_write: true,
        },
    );
    let uniform_buffer = helpers::create_uniform_buffer(device, "eye_uniforms", initial);
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("eye_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    EyeResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
