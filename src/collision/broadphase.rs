//! Broadphase: whole-mesh bounding sphere test.

use glam::Vec3;

/// Test whether two bounding spheres touch or overlap.
///
/// Touching spheres (distance equal to the radius sum) count as overlapping.
#[inline]
pub fn spheres_overlap(center_a: Vec3, radius_a: f32, center_b: Vec3, radius_b: f32) -> bool {
    center_a.distance(center_b) <= radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping() {
        assert!(spheres_overlap(Vec3::ZERO, 1.0, Vec3::new(1.5, 0.0, 0.0), 1.0));
    }

    #[test]
    fn test_separated() {
        assert!(!spheres_overlap(Vec3::ZERO, 1.0, Vec3::new(3.0, 0.0, 0.0), 1.0));
    }

    #[test]
    fn test_touching_counts() {
        assert!(spheres_overlap(Vec3::ZERO, 1.0, Vec3::new(0.0, 2.0, 0.0), 1.0));
    }
}
