//! Placement of a collision body in its parent space.

use glam::{Mat4, Quat, Vec3};

/// Local-space transform. Stores position, rotation, and scale separately.
///
/// Scale is kept apart from the rigid part so collision code can build a
/// matrix without it for transforming plane normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Create an identity transform.
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Create a transform from a position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Builder: set the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set the scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to a 4x4 matrix (translation * rotation * scale).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Translation * rotation, without scale.
    pub fn to_rigid_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Largest absolute scale component. Used to scale bounding radii.
    pub fn max_scale(&self) -> f32 {
        self.scale.abs().max_element()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let t = Transform::identity();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
        assert_eq!(t.to_matrix(), Mat4::IDENTITY);
        assert_eq!(t.to_rigid_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_rigid_matrix_ignores_scale() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2))
            .with_scale(Vec3::new(4.0, 1.0, 2.0));

        let rigid = t.to_rigid_matrix();
        let dir = rigid.transform_vector3(Vec3::X);
        assert!((dir.length() - 1.0).abs() < 1e-5);

        let scaled = t.to_matrix().transform_vector3(Vec3::X);
        assert!((scaled.length() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_max_scale() {
        let t = Transform::identity().with_scale(Vec3::new(0.5, -3.0, 2.0));
        assert_eq!(t.max_scale(), 3.0);
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Transform::default().to_matrix(), Mat4::IDENTITY);
    }
}
