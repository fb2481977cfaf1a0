use glam::{Affine3A, EulerRot, Mat4, Quat, Vec3};

/// Converts Euler angles in degrees to a rotation.
///
/// Rotations apply about X first, then Y, then Z (`R = Rz * Ry * Rx`), which
/// matches the convention editors use for the rotation channel.
#[inline]
#[must_use]
pub fn euler_degrees_to_quat(degrees: Vec3) -> Quat {
    let radians = Vec3::new(
        degrees.x.to_radians(),
        degrees.y.to_radians(),
        degrees.z.to_radians(),
    );
    Quat::from_euler(EulerRot::ZYX, radians.z, radians.y, radians.x)
}

/// Inverse of [`euler_degrees_to_quat`].
#[inline]
#[must_use]
pub fn quat_to_euler_degrees(rotation: Quat) -> Vec3 {
    let (z, y, x) = rotation.to_euler(EulerRot::ZYX);
    Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
}

/// Translation, rotation and scale (TRS).
///
/// The default is the identity: zero position, identity rotation, unit scale.
/// Animators return this for channels that have nothing to play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new() -> Self {
        Self::IDENTITY
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Sets the rotation from Euler angles in degrees.
    pub fn set_rotation_euler_degrees(&mut self, degrees: Vec3) {
        self.rotation = euler_degrees_to_quat(degrees);
    }

    /// The rotation as Euler angles in degrees.
    #[must_use]
    pub fn rotation_euler_degrees(&self) -> Vec3 {
        quat_to_euler_degrees(self.rotation)
    }

    /// Model matrix: scale, then rotate, then translate.
    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Model matrix as `Mat4`, ready for a uniform upload.
    #[inline]
    #[must_use]
    pub fn local_matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.local_matrix())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
