//! Animator Settings
//!
//! Playback configuration a host can keep in its scene description and hand
//! to [`Animator::with_settings`](crate::animation::Animator::with_settings).
//!
//! ```rust,ignore
//! use kinema::animation::{Animator, AnimatorSettings};
//!
//! // Half-speed turntable that starts right away and never ends.
//! let animator = Animator::with_settings(AnimatorSettings {
//!     playback_speed: 0.5,
//!     looping: true,
//!     autoplay: true,
//! });
//! ```

use serde::{Deserialize, Serialize};

/// Initial playback state of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorSettings {
    /// Time scale. Negative values play in reverse.
    pub playback_speed: f32,
    /// Wrap around at the ends instead of stopping.
    pub looping: bool,
    /// Start in the playing state.
    pub autoplay: bool,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            playback_speed: 1.0,
            looping: false,
            autoplay: false,
        }
    }
}
