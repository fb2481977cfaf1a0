//! Easing curves.
//!
//! Every curve maps a normalized segment position `t` to an eased position.
//! The boolean selects the "in" curve (`true`, slow start) or the "out" curve
//! (`false`, slow finish). For the symmetric families the out curve is the
//! point reflection of the in curve: `out(t) = 1 - in(1 - t)`.
//!
//! `t` is never clamped. Back and elastic curves leave `[0, 1]` on purpose,
//! and that overshoot carries through to the interpolated value.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Signature shared by every entry of the easing table.
pub type EaseFn = fn(f32, bool) -> f32;

const BACK_C1: f32 = 1.701_58;
const BACK_C3: f32 = BACK_C1 + 1.0;
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;

/// Identifies one easing curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EasingStyle {
    #[default]
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Sine,
    Exponential,
    Back,
    Circular,
    Elastic,
}

impl EasingStyle {
    /// All styles, in declaration order.
    pub const ALL: [EasingStyle; 10] = [
        EasingStyle::Linear,
        EasingStyle::Quadratic,
        EasingStyle::Cubic,
        EasingStyle::Quartic,
        EasingStyle::Quintic,
        EasingStyle::Sine,
        EasingStyle::Exponential,
        EasingStyle::Back,
        EasingStyle::Circular,
        EasingStyle::Elastic,
    ];

    /// Looks up the curve for this style.
    #[must_use]
    pub fn function(self) -> EaseFn {
        match self {
            EasingStyle::Linear => linear,
            EasingStyle::Quadratic => quadratic,
            EasingStyle::Cubic => cubic,
            EasingStyle::Quartic => quartic,
            EasingStyle::Quintic => quintic,
            EasingStyle::Sine => sine,
            EasingStyle::Exponential => exponential,
            EasingStyle::Back => back,
            EasingStyle::Circular => circular,
            EasingStyle::Elastic => elastic,
        }
    }

    /// Evaluates the curve at `t`.
    #[inline]
    #[must_use]
    pub fn ease(self, t: f32, ease_in: bool) -> f32 {
        (self.function())(t, ease_in)
    }

    /// Human readable label, e.g. for an editor combo box.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EasingStyle::Linear => "Linear",
            EasingStyle::Quadratic => "Quadratic",
            EasingStyle::Cubic => "Cubic",
            EasingStyle::Quartic => "Quartic",
            EasingStyle::Quintic => "Quintic",
            EasingStyle::Sine => "Sine",
            EasingStyle::Exponential => "Exponential",
            EasingStyle::Back => "Back",
            EasingStyle::Circular => "Circular",
            EasingStyle::Elastic => "Elastic",
        }
    }
}

// ----------------------------------------------------------------------------
// Polynomial family
// ----------------------------------------------------------------------------

#[inline]
fn power(t: f32, ease_in: bool, exponent: i32) -> f32 {
    if ease_in {
        t.powi(exponent)
    } else {
        1.0 - (1.0 - t).powi(exponent)
    }
}

/// Identity in both directions.
#[must_use]
pub fn linear(t: f32, _ease_in: bool) -> f32 {
    t
}

#[must_use]
pub fn quadratic(t: f32, ease_in: bool) -> f32 {
    power(t, ease_in, 2)
}

#[must_use]
pub fn cubic(t: f32, ease_in: bool) -> f32 {
    power(t, ease_in, 3)
}

#[must_use]
pub fn quartic(t: f32, ease_in: bool) -> f32 {
    power(t, ease_in, 4)
}

#[must_use]
pub fn quintic(t: f32, ease_in: bool) -> f32 {
    power(t, ease_in, 5)
}

// ----------------------------------------------------------------------------
// Transcendental family
// ----------------------------------------------------------------------------

#[must_use]
pub fn sine(t: f32, ease_in: bool) -> f32 {
    if ease_in {
        1.0 - (t * PI / 2.0).cos()
    } else {
        (t * PI / 2.0).sin()
    }
}

/// `2^(10t - 10)` never reaches 0, so the start (in) and end (out) are pinned.
#[must_use]
pub fn exponential(t: f32, ease_in: bool) -> f32 {
    if ease_in {
        if t == 0.0 {
            0.0
        } else {
            2.0_f32.powf(10.0 * t - 10.0)
        }
    } else if t == 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

/// Pulls back below 0 (in) or shoots past 1 (out) by roughly 10%.
#[must_use]
pub fn back(t: f32, ease_in: bool) -> f32 {
    if ease_in {
        BACK_C3 * t * t * t - BACK_C1 * t * t
    } else {
        let f = t - 1.0;
        1.0 + BACK_C3 * f * f * f + BACK_C1 * f * f
    }
}

/// Quarter circle. Outside `[0, 1]` the square root has no real value and
/// the result is NaN.
#[must_use]
pub fn circular(t: f32, ease_in: bool) -> f32 {
    if ease_in {
        1.0 - (1.0 - t * t).sqrt()
    } else {
        (1.0 - (t - 1.0) * (t - 1.0)).sqrt()
    }
}

#[must_use]
pub fn elastic(t: f32, ease_in: bool) -> f32 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }

    if ease_in {
        -(2.0_f32.powf(10.0 * t - 10.0)) * ((10.0 * t - 10.75) * ELASTIC_C4).sin()
    } else {
        2.0_f32.powf(-10.0 * t) * ((10.0 * t - 0.75) * ELASTIC_C4).sin() + 1.0
    }
}
