use super::helpers;

/// Pipeline, uniforms and texture binding shared by the shell and the shadow.
///
/// Bind group 0 is `uniforms`, `texture`, `sampler`. The texture can be
/// swapped after creation (the shell starts with a placeholder).
pub(crate) struct TexturedResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    bgl: wgpu::BindGroupLayout,
    #[allow(dead_code)]
    texture: wgpu::Texture,
    label: &'static str,
}

pub(crate) struct TexturedDesc<'a, T> {
    pub(crate) label: &'static str,
    pub(crate) wgsl: &'a str,
    pub(crate) color_format: wgpu::TextureFormat,
    pub(crate) blend: Option<wgpu::BlendState>,
    pub(crate) depth_write: bool,
    pub(crate) initial: &'a T,
}

pub(crate) fn create_textured_resources<T: bytemuck::Pod>(
    device: &wgpu::Device,
    desc: TexturedDesc<'_, T>,
    texture: (wgpu::Texture, wgpu::TextureView),
    sampler: &wgpu::Sampler,
) -> TexturedResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(desc.label),
        source: wgpu::ShaderSource::Wgsl(desc.wgsl.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(desc.label),
        entries: &[
            helpers::uniform_layout_entry(0),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(desc.label),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_mesh_pipeline(
        device,
        helpers::MeshPipelineDesc {
            label: desc.label,
            layout: &pl,
            shader: &shader,
            color_format: desc.color_format,
            blend: desc.blend,
            depth_write: desc.depth_write,
        },
    );
    let uniform_buffer = helpers::create_uniform_buffer(device, desc.label, desc.initial);
    let (texture, view) = texture;
    let bind_group = build_bind_group(device, desc.label, &bgl, &uniform_buffer, &view, sampler);
    TexturedResources {
        pipeline,
        uniform_buffer,
        bind_group,
        bgl,
        texture,
        label: desc.label,
    }
}

impl TexturedResources {
    pub(crate) fn replace_texture(
        &mut self,
        device: &wgpu::Device,
        texture: (wgpu::Texture, wgpu::TextureView),
        sampler: &wgpu::Sampler,
    ) {
        let (texture, view) = texture;
        self.bind_group = build_bind_group(
            device,
            self.label,
            &self.bgl,
            &self.uniform_buffer,
            &view,
            sampler,
        );
        self.texture = texture;
    }
}

fn build_bind_group(
    device: &wgpu::Device,
    label: &str,
    bgl: &wgpu::BindGroupLayout,
    uniform_buffer: &wgpu::Buffer,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
