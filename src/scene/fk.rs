//! Forward kinematics.
//!
//! Propagates world matrices down a joint tree: a root's world matrix is its
//! local matrix, every other joint gets `parent.world * local`. Joints are
//! visited pre-order, so a parent is always solved before its children.
//!
//! The functions only borrow the joint storage, not the whole
//! [`Skeleton`](crate::scene::Skeleton), so callers holding other parts of a
//! rig can still run them.

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::JointHandle;
use crate::scene::joint::Joint;

/// Solves `start` and its entire subtree.
///
/// If `start` has a parent, the parent's current world matrix is used as-is;
/// solve from the root when ancestors may have changed. An unknown handle is
/// a no-op.
pub fn solve_fk(joints: &mut SlotMap<JointHandle, Joint>, start: JointHandle) {
    let Some(joint) = joints.get(start) else {
        log::debug!("solve_fk: unknown joint {start:?}");
        return;
    };

    let parent_world = joint
        .parent
        .and_then(|parent| joints.get(parent))
        .map(|parent| parent.world_matrix);

    // Work stack: (joint, parent world matrix)
    let mut stack: Vec<(JointHandle, Option<Affine3A>)> = Vec::with_capacity(32);
    stack.push((start, parent_world));

    while let Some((handle, parent_world)) = stack.pop() {
        let Some(joint) = joints.get_mut(handle) else {
            continue;
        };

        let local = joint.pose.local_matrix();
        joint.world_matrix = match parent_world {
            Some(parent_world) => parent_world * local,
            None => local,
        };

        // Reverse push keeps children in attachment order.
        let world = joint.world_matrix;
        for &child in joint.children.iter().rev() {
            stack.push((child, Some(world)));
        }
    }
}

/// Solves every tree rooted at `roots`.
pub fn solve_fk_all(joints: &mut SlotMap<JointHandle, Joint>, roots: &[JointHandle]) {
    for &root in roots {
        solve_fk(joints, root);
    }
}
