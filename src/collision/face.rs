//! Transformed triangle summary used by the narrow phase.

use glam::Vec3;

/// One collision triangle after the body transform has been applied.
///
/// `radius` bounds every vertex of the triangle from `center`, and `normal`
/// is unit length, pointing away from solid geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub center: Vec3,
    pub radius: f32,
    pub normal: Vec3,
}

impl Default for Face {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 0.0,
            normal: Vec3::Y,
        }
    }
}

impl Face {
    pub fn new(center: Vec3, radius: f32, normal: Vec3) -> Self {
        Self {
            center,
            radius,
            normal,
        }
    }

    /// Signed perpendicular distance from `point` to the face's plane.
    ///
    /// The plane is infinite: the result is not bounded by the triangle edges.
    /// Positive = in front (same side as the normal), negative = behind.
    #[inline]
    pub fn signed_distance_to_plane(&self, point: Vec3) -> f32 {
        self.normal.dot(point - self.center)
    }

    /// Whether `point` is on the side of the plane the normal points toward.
    /// Points lying exactly on the plane count as facing.
    #[inline]
    pub fn is_facing_plane(&self, point: Vec3) -> bool {
        self.signed_distance_to_plane(point) >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_distance_floor() {
        let face = Face::new(Vec3::ZERO, 5.0, Vec3::Y);
        let eps = 1e-6;
        assert!((face.signed_distance_to_plane(Vec3::new(0.0, 0.3, 0.0)) - 0.3).abs() < eps);
        assert!((face.signed_distance_to_plane(Vec3::new(0.0, -0.2, 0.0)) + 0.2).abs() < eps);
    }

    #[test]
    fn test_plane_is_unbounded() {
        // Far outside the triangle's radius, the plane still reports distance.
        let face = Face::new(Vec3::ZERO, 1.0, Vec3::Y);
        let d = face.signed_distance_to_plane(Vec3::new(100.0, 0.5, -100.0));
        assert!((d - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_facing() {
        let face = Face::new(Vec3::new(0.0, 0.0, 2.0), 1.0, Vec3::NEG_Z);
        assert!(face.is_facing_plane(Vec3::ZERO));
        assert!(!face.is_facing_plane(Vec3::new(0.0, 0.0, 3.0)));
        assert!(face.is_facing_plane(Vec3::new(5.0, 1.0, 2.0)));
    }
}
