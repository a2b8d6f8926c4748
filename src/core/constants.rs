// Scene layout, interaction and animation tuning shared by the web frontend.

// Eyeball
pub const EYE_RADIUS: f32 = 30.0;
pub const EYE_INNER_INSET: f32 = 0.1; // inner sphere sits just under the shell
pub const SPHERE_SEGMENTS: u32 = 32;

// Shadow plane
pub const SHADOW_SIZE_FACTOR: f32 = 2.5; // plane side and gradient image size = radius * factor
pub const SHADOW_DROP_FACTOR: f32 = 2.0; // plane y = -radius * factor
pub const SHADOW_TILT_DIVISOR: f32 = 2.05; // rotation.x = -PI / divisor
pub const SHADOW_GRADIENT_OUTER: f32 = 0.4; // outer gradient radius as a fraction of image size
pub const SHADOW_GRADIENT_STOPS: [(f32, [u8; 3]); 2] = [(0.2, [210, 210, 210]), (1.0, [255, 255, 255])];

// Camera
pub const CAMERA_FOV_DEG: f32 = 20.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10_000.0;
pub const NARROW_VIEWPORT_MAX_WIDTH: f32 = 800.0;
pub const NARROW_VIEWPORT_OFFSET_Y: f32 = 25.0; // recenters the eye on phones

// Lights and background
pub const BACKGROUND_COLOR: u32 = 0xffffff;
pub const AMBIENT_COLOR: u32 = 0x999999;
pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const DIRECTIONAL_COLOR: u32 = 0xffffff;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [-1.0, 1.0, 1.0];

// Outer shell material
pub const SHELL_COLOR: u32 = 0xffffff;
pub const SHELL_EMISSIVE: u32 = 0x220000;
pub const SHELL_SPECULAR: u32 = 0x111111;
pub const SHELL_OPACITY: f32 = 0.25;
pub const SHELL_SHININESS: f32 = 100.0;

// Interaction
pub const WHEEL_ZOOM_SCALE: f32 = 0.1; // zoom units per wheel delta unit
pub const POINTER_TILT_GAIN: f32 = 0.3; // pointer.y -> rotation.x
pub const POINTER_TURN_GAIN: f32 = 0.6; // pointer.x -> rotation.y
pub const ROTATION_DAMPING: f32 = 0.2; // fraction of the remaining gap closed per frame

// Entrance animation
pub const ENTRANCE_DURATION_SEC: f32 = 2.0;
pub const ENTRANCE_START_Y: f32 = 1000.0;
pub const ENTRANCE_START_ROT_X: f32 = 25.0;
pub const ENTRANCE_START_ROT_Z: f32 = 5.0;
pub const ENTRANCE_START_SHADOW_SCALE_X: f32 = 2.5;

// Shrink pulse animation
pub const SHRINK_TIME_SCALE: f32 = 2.0;
pub const SHRINK_PULSE_MIN: f32 = -0.9;
pub const SHRINK_CONTRACT_SEC: f32 = 0.5;
pub const SHRINK_RELAX_SEC: f32 = 3.0;
