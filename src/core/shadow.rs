// Soft contact shadow drawn as a radial gradient bitmap.

use super::constants::{SHADOW_GRADIENT_OUTER, SHADOW_GRADIENT_STOPS};

/// RGBA8 image, rows top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientImage {
    pub size: u32,
    pub rgba: Vec<u8>,
}

impl GradientImage {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.size + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }
}

/// Opaque radial gradient centered in a `size` x `size` square.
///
/// The gradient runs from radius 0 to `SHADOW_GRADIENT_OUTER * size`; colors
/// before the first stop and past the last one hold the stop color.
pub fn radial_gradient(size: u32) -> GradientImage {
    let size = size.max(1);
    let center = size as f32 * 0.5;
    let outer = size as f32 * SHADOW_GRADIENT_OUTER;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            // sample at pixel centers, like a 2D canvas fill
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let t = ((dx * dx + dy * dy).sqrt() / outer).clamp(0.0, 1.0);
            let [r, g, b] = gradient_color(t);
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }
    GradientImage { size, rgba }
}

fn gradient_color(t: f32) -> [u8; 3] {
    let (first_at, first) = SHADOW_GRADIENT_STOPS[0];
    if t <= first_at {
        return first;
    }
    for pair in SHADOW_GRADIENT_STOPS.windows(2) {
        let (a_at, a) = pair[0];
        let (b_at, b) = pair[1];
        if t <= b_at {
            let k = (t - a_at) / (b_at - a_at);
            let lerp = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * k).round() as u8;
            return [lerp(0), lerp(1), lerp(2)];
        }
    }
    SHADOW_GRADIENT_STOPS[SHADOW_GRADIENT_STOPS.len() - 1].1
}
