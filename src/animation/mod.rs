//! Keyframe animation.
//!
//! - [`Keyframe`]: a timed value with the easing of the segment it starts
//! - [`Animation`]: the keyframes of one channel
//! - [`AnimationLibrary`]: owner of all animations, addressed by [`AnimationKey`]
//! - [`Animator`]: playback clock that composes position, rotation and scale
//! - [`easing`]: the easing curve table

pub mod animation;
pub mod animator;
pub mod easing;
pub mod keyframe;
pub mod library;
pub mod settings;

pub use animation::Animation;
pub use animator::{Animator, Channel, PlaybackState};
pub use easing::{EaseFn, EasingStyle};
pub use keyframe::Keyframe;
pub use library::{AnimationKey, AnimationLibrary};
pub use settings::AnimatorSettings;
