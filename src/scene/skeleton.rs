use glam::Vec3;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::errors::{KinemaError, Result};
use crate::scene::JointHandle;
use crate::scene::fk;
use crate::scene::joint::Joint;
use crate::scene::transform::Transform;

/// A joint hierarchy stored in an arena.
///
/// Joints are addressed by [`JointHandle`]s that stay valid for the lifetime
/// of the skeleton. Parent and child links are handles as well, so the tree
/// has a single owner and no reference cycles.
///
/// Hierarchy edits go through [`add_child`](Self::add_child) and
/// [`attach`](Self::attach), which refuse anything that would turn the tree
/// into a graph.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    joints: SlotMap<JointHandle, Joint>,
    roots: Vec<JointHandle>,
    by_name: FxHashMap<String, JointHandle>,
}

impl Skeleton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Adds `joint` as a new root. Any parent/children it carries are discarded.
    pub fn add_joint(&mut self, mut joint: Joint) -> JointHandle {
        joint.parent = None;
        joint.children.clear();

        let name = joint.name.clone();
        let handle = self.joints.insert(joint);
        self.roots.push(handle);

        if let Some(previous) = self.by_name.insert(name, handle) {
            log::warn!(
                "Duplicate joint name '{}': find() now returns {handle:?}, not {previous:?}",
                self.joints[handle].name
            );
        }
        handle
    }

    /// Adds `joint` underneath `parent`.
    pub fn add_child(&mut self, parent: JointHandle, joint: Joint) -> Result<JointHandle> {
        if !self.joints.contains_key(parent) {
            return Err(KinemaError::JointNotFound(parent));
        }
        let handle = self.add_joint(joint);
        self.link(parent, handle);
        Ok(handle)
    }

    /// Makes the root joint `child` a child of `parent`.
    pub fn attach(&mut self, parent: JointHandle, child: JointHandle) -> Result<()> {
        if !self.joints.contains_key(parent) {
            return Err(KinemaError::JointNotFound(parent));
        }
        let Some(child_joint) = self.joints.get(child) else {
            return Err(KinemaError::JointNotFound(child));
        };
        if parent == child {
            return Err(KinemaError::SelfParent(child));
        }
        if let Some(current) = child_joint.parent {
            return Err(KinemaError::AlreadyParented {
                child,
                parent: current,
            });
        }
        if self.is_ancestor(child, parent) {
            return Err(KinemaError::CycleDetected { parent, child });
        }

        self.link(parent, child);
        Ok(())
    }

    /// Cuts `child` loose from its parent; it becomes a root. Detaching a root
    /// is a no-op.
    pub fn detach(&mut self, child: JointHandle) -> Result<()> {
        let Some(joint) = self.joints.get_mut(child) else {
            return Err(KinemaError::JointNotFound(child));
        };
        let Some(parent) = joint.parent.take() else {
            return Ok(());
        };

        if let Some(parent_joint) = self.joints.get_mut(parent) {
            parent_joint.children.retain(|c| *c != child);
        }
        self.roots.push(child);
        Ok(())
    }

    fn link(&mut self, parent: JointHandle, child: JointHandle) {
        self.joints[child].parent = Some(parent);
        self.joints[parent].children.push(child);
        self.roots.retain(|r| *r != child);
    }

    /// Whether `ancestor` is `joint` itself or lies on its parent chain.
    fn is_ancestor(&self, ancestor: JointHandle, joint: JointHandle) -> bool {
        let mut current = Some(joint);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.joints.get(handle).and_then(|j| j.parent);
        }
        false
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn joint(&self, handle: JointHandle) -> Option<&Joint> {
        self.joints.get(handle)
    }

    /// Mutable access to a joint's pose. The name and hierarchy links stay
    /// private to the skeleton; see [`rename`](Self::rename).
    #[inline]
    pub fn joint_mut(&mut self, handle: JointHandle) -> Option<&mut Joint> {
        self.joints.get_mut(handle)
    }

    /// Renames a joint and keeps [`find`](Self::find) in sync.
    pub fn rename(&mut self, handle: JointHandle, name: impl Into<String>) -> Result<()> {
        let joint = self
            .joints
            .get_mut(handle)
            .ok_or(KinemaError::JointNotFound(handle))?;
        let name = name.into();
        let old = std::mem::replace(&mut joint.name, name.clone());

        // The old entry may already belong to a later joint with the same name.
        if self.by_name.get(&old) == Some(&handle) {
            self.by_name.remove(&old);
        }
        if let Some(previous) = self.by_name.insert(name, handle)
            && previous != handle
        {
            log::warn!(
                "Duplicate joint name '{}': find() now returns {handle:?}, not {previous:?}",
                self.joints[handle].name
            );
        }
        Ok(())
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<JointHandle> {
        self.by_name.get(name).copied()
    }

    /// Replaces a joint's local pose, e.g. with an animator's output.
    pub fn set_local_pose(&mut self, handle: JointHandle, pose: Transform) -> Result<()> {
        let joint = self
            .joints
            .get_mut(handle)
            .ok_or(KinemaError::JointNotFound(handle))?;
        joint.pose = pose;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[JointHandle] {
        &self.roots
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (JointHandle, &Joint)> {
        self.joints.iter()
    }

    /// World-space position from the last solve.
    #[must_use]
    pub fn world_position(&self, handle: JointHandle) -> Option<Vec3> {
        self.joints.get(handle).map(Joint::world_position)
    }

    // ========================================================================
    // Forward kinematics
    // ========================================================================

    /// Solves `joint` and everything below it. See [`fk::solve_fk`].
    pub fn solve_fk(&mut self, joint: JointHandle) {
        fk::solve_fk(&mut self.joints, joint);
    }

    /// Solves every tree in the skeleton.
    pub fn solve_all(&mut self) {
        fk::solve_fk_all(&mut self.joints, &self.roots);
    }
}
