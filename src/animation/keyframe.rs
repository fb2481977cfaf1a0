use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::easing::EasingStyle;

/// A fixed point on a channel's timeline.
///
/// The easing of a keyframe shapes the segment that *starts* at it, i.e. the
/// blend from this keyframe towards the next one in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Seconds from the start of the animation.
    pub time: f32,
    pub value: Vec3,
    pub easing: EasingStyle,
    /// `true` selects the ease-in curve, `false` the ease-out curve.
    pub ease_in: bool,
}

impl Keyframe {
    /// Linear keyframe at `time`.
    #[must_use]
    pub fn new(time: f32, value: Vec3) -> Self {
        Self {
            time,
            value,
            easing: EasingStyle::Linear,
            ease_in: false,
        }
    }

    /// Sets the curve used for the segment leaving this keyframe.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingStyle, ease_in: bool) -> Self {
        self.easing = easing;
        self.ease_in = ease_in;
        self
    }

    /// Applies this keyframe's easing to a normalized segment position.
    #[inline]
    #[must_use]
    pub fn ease(&self, t: f32) -> f32 {
        self.easing.ease(t, self.ease_in)
    }
}

impl Default for Keyframe {
    fn default() -> Self {
        Self::new(0.0, Vec3::ZERO)
    }
}
