pub mod animations;
pub mod config;
pub mod constants;
pub mod easing;
pub mod geometry;
pub mod interaction;
pub mod params;
pub mod scene;
pub mod settings;
pub mod shadow;
pub mod timeline;
pub mod uniforms;
pub mod viz;

pub use config::*;
pub use params::*;
pub use viz::*;

// Shaders bundled as string constants
pub static EYE_WGSL: &str = include_str!("../../shaders/eye.wgsl");
pub static SHELL_WGSL: &str = include_str!("../../shaders/shell.wgsl");
pub static SHADOW_WGSL: &str = include_str!("../../shaders/shadow.wgsl");
