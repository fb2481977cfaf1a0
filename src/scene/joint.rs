use glam::{Affine3A, Mat4, Quat, Vec3};
use smallvec::SmallVec;

use crate::scene::JointHandle;
use crate::scene::transform::{Transform, euler_degrees_to_quat};

/// One bone of a [`Skeleton`](crate::scene::Skeleton).
///
/// # Hierarchy
///
/// - `parent`: handle of the parent joint (`None` for roots)
/// - `children`: handles of the child joints, in attachment order
///
/// Both are maintained by the skeleton; a joint never owns its relatives.
///
/// # Pose
///
/// `pose` is the local transform relative to the parent. `world_matrix` is
/// written by the FK solver and is only meaningful after the joint's whole
/// ancestor chain has been solved in the current frame.
#[derive(Debug, Clone)]
pub struct Joint {
    pub(crate) name: String,
    /// Local transform (relative to the parent joint)
    pub pose: Transform,

    pub(crate) parent: Option<JointHandle>,
    pub(crate) children: SmallVec<[JointHandle; 4]>,

    pub(crate) world_matrix: Affine3A,
}

impl Joint {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pose: Transform::IDENTITY,
            parent: None,
            children: SmallVec::new(),
            world_matrix: Affine3A::IDENTITY,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.pose.position = position;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.pose.rotation = rotation;
        self
    }

    /// Rotation given as Euler angles in **degrees**, the same unit the
    /// animator's rotation channel uses. Rigs authored in radians go through
    /// [`with_rotation`](Self::with_rotation) instead.
    #[must_use]
    pub fn with_rotation_euler(mut self, degrees: Vec3) -> Self {
        self.pose.rotation = euler_degrees_to_quat(degrees);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.pose.scale = scale;
        self
    }

    /// Name used by [`Skeleton::find`](crate::scene::Skeleton::find). Change it
    /// through [`Skeleton::rename`](crate::scene::Skeleton::rename).
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<JointHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[JointHandle] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// World matrix from the last FK solve.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.world_matrix
    }

    #[inline]
    #[must_use]
    pub fn world_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.world_matrix)
    }

    #[inline]
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        self.world_matrix.translation.into()
    }
}
