use super::constants::*;
use super::easing::Ease;
use super::timeline::Timeline;

/// Scene values the timelines are allowed to drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    GroupY,
    GroupRotX,
    GroupRotZ,
    ShadowScaleX,
    Shrink,
}

/// Drop-in of the eyeball: the group falls from above while unwinding its
/// rotation, and the shadow contracts to its rest size, all over the same
/// two seconds.
pub fn entrance() -> Timeline<Channel> {
    let d = ENTRANCE_DURATION_SEC;
    Timeline::new()
        .at(0.0, Channel::GroupY, d, ENTRANCE_START_Y, 0.0, Ease::Power4Out)
        .at(0.0, Channel::GroupRotX, d, ENTRANCE_START_ROT_X, 0.0, Ease::Power3Out)
        .at(0.0, Channel::GroupRotZ, d, ENTRANCE_START_ROT_Z, 0.0, Ease::Power3Out)
        .at(0.0, Channel::ShadowScaleX, d, ENTRANCE_START_SHADOW_SCALE_X, 1.0, Ease::default())
}

/// Click pulse on the pupil: a fast contraction followed by a slow relax.
pub fn shrink_pulse(rest: f32) -> Timeline<Channel> {
    Timeline::new()
        .with_time_scale(SHRINK_TIME_SCALE)
        .then(Channel::Shrink, SHRINK_CONTRACT_SEC, rest, SHRINK_PULSE_MIN, Ease::Power2Out)
        .then(Channel::Shrink, SHRINK_RELAX_SEC, SHRINK_PULSE_MIN, 0.0, Ease::Power2InOut)
}
