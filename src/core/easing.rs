// Easing curves. `PowerNOut` is `1 - (1 - t)^(N + 1)`; `PowerNInOut` mirrors the ease-in half.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out. Default curve for segments without an explicit ease.
    Power1Out,
    /// Cubic ease-out.
    Power2Out,
    /// Cubic ease-in-out.
    Power2InOut,
    /// Quartic ease-out.
    Power3Out,
    /// Quintic ease-out.
    Power4Out,
}

impl Ease {
    /// Map linear progress `t` (clamped to [0, 1]) to eased progress in [0, 1].
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => power_out(t, 2),
            Ease::Power2Out => power_out(t, 3),
            Ease::Power2InOut => power_in_out(t, 3),
            Ease::Power3Out => power_out(t, 4),
            Ease::Power4Out => power_out(t, 5),
        }
    }
}

impl Default for Ease {
    #[inline]
    fn default() -> Self {
        Ease::Power1Out
    }
}

#[inline]
fn power_out(t: f32, exp: i32) -> f32 {
    1.0 - (1.0 - t).powi(exp)
}

#[inline]
fn power_in_out(t: f32, exp: i32) -> f32 {
    if t < 0.5 {
        (2.0 * t).powi(exp) * 0.5
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(exp) * 0.5
    }
}
