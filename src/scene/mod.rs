//! Scene-side data the animation core writes into:
//! - Transform: translation / rotation / scale
//! - Joint: one bone of a hierarchy
//! - Skeleton: joint arena with validated parent/child links
//! - fk: forward-kinematics propagation of world matrices

pub mod fk;
pub mod joint;
pub mod skeleton;
pub mod transform;

pub use joint::Joint;
pub use skeleton::Skeleton;
pub use transform::{Transform, euler_degrees_to_quat, quat_to_euler_degrees};

use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a [`Joint`] inside a [`Skeleton`].
    pub struct JointHandle;
}
