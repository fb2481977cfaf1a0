//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! Keyframe evaluation and playback never fail: empty tracks, stale keys and
//! degenerate intervals fall back to defined values. [`KinemaError`] only
//! covers the construction APIs where a caller can hand in something that
//! does not make sense:
//! - Channel roles outside `1..=3`
//! - Joint hierarchy edits that would break the tree shape
//!
//! # Usage
//!
//! ```rust,ignore
//! use kinema::errors::{KinemaError, Result};
//!
//! fn build(skeleton: &mut Skeleton) -> Result<()> {
//!     let root = skeleton.add_joint(Joint::new("root"));
//!     skeleton.add_child(root, Joint::new("arm"))?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::scene::JointHandle;

/// The main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KinemaError {
    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// A numeric channel role that is not Position (1), Rotation (2) or Scale (3).
    #[error("Invalid animation channel: {0} (expected 1 = position, 2 = rotation, 3 = scale)")]
    InvalidChannel(u8),

    // ========================================================================
    // Joint Hierarchy Errors
    // ========================================================================
    /// The handle does not refer to a live joint in this skeleton.
    #[error("Joint not found: {0:?}")]
    JointNotFound(JointHandle),

    /// A joint cannot be its own parent.
    #[error("Joint {0:?} cannot be attached to itself")]
    SelfParent(JointHandle),

    /// The child already has a parent; detach it first.
    #[error("Joint {child:?} is already attached to {parent:?}")]
    AlreadyParented {
        /// The joint that was being attached
        child: JointHandle,
        /// Its current parent
        parent: JointHandle,
    },

    /// Attaching would make a joint its own ancestor.
    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    CycleDetected {
        /// The requested parent
        parent: JointHandle,
        /// The requested child
        child: JointHandle,
    },
}

/// Alias for `Result<T, KinemaError>`.
pub type Result<T> = std::result::Result<T, KinemaError>;
