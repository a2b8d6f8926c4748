// GPU uniform blocks. Layouts mirror the structs in `shaders/*.wgsl`; every
// field is 16-byte aligned so WGSL adds no implicit padding.

use glam::Mat4;

use super::config::Rgb;
use super::constants::*;
use super::params::ShaderParams;
use super::scene::EyeScene;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct EyeUniforms {
    pub mvp: [[f32; 4]; 4],
    pub base_color_1: [f32; 4],
    pub base_color_2: [f32; 4],
    pub mid_color: [f32; 4],
    /// x = shrink, y = vignette, z = brightness, w = darkness
    pub shading: [f32; 4],
}

impl EyeUniforms {
    pub fn new(mvp: Mat4, params: &ShaderParams) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            base_color_1: params.base_color_1.to_vec4(1.0),
            base_color_2: params.base_color_2.to_vec4(1.0),
            mid_color: params.mid_color.to_vec4(1.0),
            shading: [params.shrink, params.vignette, params.brightness, params.darkness],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShellUniforms {
    pub model: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub ambient: [f32; 4],
    pub light_dir: [f32; 4],
    pub light_color: [f32; 4],
    /// rgb = diffuse color, a = opacity
    pub diffuse: [f32; 4],
    /// rgb = emissive color
    pub emissive: [f32; 4],
    /// rgb = specular color, a = shininess
    pub specular: [f32; 4],
}

impl ShellUniforms {
    pub fn new(scene: &EyeScene) -> Self {
        let lights = &scene.lighting;
        Self {
            model: scene.shell_world().to_cols_array_2d(),
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            camera_pos: scene.camera.position.extend(1.0).to_array(),
            ambient: lights.ambient.to_vec4(1.0),
            light_dir: lights.direction.extend(0.0).to_array(),
            light_color: lights.directional.to_vec4(1.0),
            diffuse: Rgb::from_u32(SHELL_COLOR).to_vec4(SHELL_OPACITY),
            emissive: Rgb::from_u32(SHELL_EMISSIVE).to_vec4(0.0),
            specular: Rgb::from_u32(SHELL_SPECULAR).to_vec4(SHELL_SHININESS),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadowUniforms {
    pub mvp: [[f32; 4]; 4],
}

impl ShadowUniforms {
    pub fn new(scene: &EyeScene) -> Self {
        Self {
            mvp: (scene.camera.view_proj() * scene.shadow_world()).to_cols_array_2d(),
        }
    }
}
