//! Keyframe animation, easing curves and forward kinematics for real-time
//! 3D scenes.
//!
//! The crate is independent of any rendering API. A host calls
//! [`Animator::update_animations`] once per frame with the elapsed time and
//! feeds the returned [`Transform`] into its own pipeline, and runs
//! [`Skeleton::solve_fk`] to place joints in world space.
//!
//! ```rust,ignore
//! use glam::Vec3;
//! use kinema::{Animation, AnimationLibrary, Animator, Channel, EasingStyle, Keyframe};
//!
//! let mut library = AnimationLibrary::new();
//! let bounce = library.insert(Animation::from(vec![
//!     Keyframe::new(0.0, Vec3::ZERO).with_easing(EasingStyle::Back, false),
//!     Keyframe::new(1.0, Vec3::Y * 2.0),
//! ]));
//!
//! let mut animator = Animator::new();
//! animator.set_animation(bounce, Channel::Position);
//! animator.set_looping(true);
//! animator.play();
//!
//! // every frame
//! let transform = animator.update_animations(dt, &mut library);
//! ```

pub mod animation;
pub mod errors;
pub mod scene;

pub use animation::{
    Animation, AnimationKey, AnimationLibrary, Animator, AnimatorSettings, Channel, EasingStyle,
    Keyframe, PlaybackState,
};
pub use errors::{KinemaError, Result};
pub use scene::{Joint, JointHandle, Skeleton, Transform};
