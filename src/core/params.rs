use super::config::{Rgb, VizConfig};

/// Values behind the eye shader's uniforms.
///
/// Written by the settings panel and the shrink pulse, read by the renderer
/// every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderParams {
    pub shrink: f32,
    pub base_color_1: Rgb,
    pub base_color_2: Rgb,
    pub mid_color: Rgb,
    pub vignette: f32,
    pub brightness: f32,
    pub darkness: f32,
}

impl ShaderParams {
    pub fn from_config(config: &VizConfig) -> Self {
        Self {
            shrink: config.shrink,
            base_color_1: config.base_color_1,
            base_color_2: config.base_color_2,
            mid_color: config.mid_color,
            vignette: config.vignette,
            brightness: config.brightness,
            darkness: config.darkness,
        }
    }
}

impl Default for ShaderParams {
    fn default() -> Self {
        Self::from_config(&VizConfig::default())
    }
}
