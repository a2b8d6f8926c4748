// Runtime configuration. Colors are display values typed in hex and reach
// the shaders without any color-space conversion.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have exactly 6 hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

/// RGB color with channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` (the format produced by `<input type="color">`).
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let hex = u32::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(s.to_string()))?;
        Ok(Self::from_u32(hex))
    }

    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }

    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
        }
    }

    #[inline]
    pub fn to_vec4(self, w: f32) -> [f32; 4] {
        [self.r, self.g, self.b, w]
    }
}

/// Tunable values of the eyeball. Zoom is the only value guarded at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct VizConfig {
    pub zoom_level: f32,
    pub zoom_bounds: [f32; 2],
    pub shrink: f32,
    pub base_color_1: Rgb,
    pub base_color_2: Rgb,
    pub mid_color: Rgb,
    pub vignette: f32,
    pub brightness: f32,
    pub darkness: f32,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            zoom_level: 600.0,
            zoom_bounds: [300.0, 1000.0],
            shrink: 0.0,
            base_color_1: Rgb::from_u32(0x03565c),
            base_color_2: Rgb::from_u32(0x42cf44),
            mid_color: Rgb::from_u32(0xf2aa00),
            vignette: 0.65,
            brightness: 0.6,
            darkness: 0.5,
        }
    }
}

impl VizConfig {
    #[inline]
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.min(self.zoom_bounds[1]).max(self.zoom_bounds[0])
    }
}
