// Pointer normalization, wheel zoom and rotation damping.

use super::constants::*;

/// CSS-pixel size of the browser viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn half(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Pointer offset from the viewport center, -1..1 on each axis at the edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn from_client(client_x: f32, client_y: f32, viewport: &Viewport) -> Self {
        let (hx, hy) = viewport.half();
        Self {
            x: (client_x - hx) / hx,
            y: (client_y - hy) / hy,
        }
    }

    /// Rotation (x, y) the eyeball group is pulled towards.
    #[inline]
    pub fn rotation_target(&self) -> (f32, f32) {
        (self.y * POINTER_TILT_GAIN, self.x * POINTER_TURN_GAIN)
    }
}

/// Camera distance driven by the mouse wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    level: f32,
    min: f32,
    max: f32,
}

impl Zoom {
    pub fn new(level: f32, bounds: [f32; 2]) -> Self {
        let (min, max) = (bounds[0].min(bounds[1]), bounds[0].max(bounds[1]));
        Self {
            level: level.clamp(min, max),
            min,
            max,
        }
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Apply one wheel event and return the clamped level.
    pub fn apply_wheel(&mut self, delta_y: f32) -> f32 {
        let next = self.level + WHEEL_ZOOM_SCALE * delta_y;
        // NaN deltas leave the level where it was
        if next.is_finite() {
            self.level = next.min(self.max).max(self.min);
        }
        self.level
    }
}

/// Narrow viewports lift the camera so the eye stays centered above the shadow.
#[inline]
pub fn camera_offset_y(viewport_width: f32) -> f32 {
    if viewport_width > NARROW_VIEWPORT_MAX_WIDTH {
        0.0
    } else {
        NARROW_VIEWPORT_OFFSET_Y
    }
}

/// One step of exponential smoothing towards `target`.
#[inline]
pub fn damp_towards(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}
