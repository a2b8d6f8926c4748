// Page wiring and renderer settings for the web frontend.

// DOM
pub const CONTAINER_SELECTOR: &str = ".container";
pub const CANVAS_ID: &str = "eye-canvas";
pub const PANEL_ID: &str = "eye-settings";

// Remote bitmap wrapped around the outer shell
pub const EYE_TEXTURE_URL: &str = "https://assets.codepen.io/959327/eyeball.jpg";

// Renderer
pub const MSAA_SAMPLES: u32 = 4;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
// Texture data is display-referred; sampled as-is like the shader colors.
pub const COLOR_TEXTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

// Longest frame step fed to the animations (seconds); a backgrounded tab
// resumes with one clamped step instead of skipping the entrance.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
