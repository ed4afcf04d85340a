//! Plane intersection resolution with wall glide.
//!
//! The selected candidate of each category is tested against its infinite
//! plane rather than the triangle itself. This is cheap but causes small
//! bounces near corners where two planes meet.

use glam::Vec3;

use super::face::Face;
use super::result::{CollisionCategory, CollisionResult};
use super::CollisionConfig;

/// Resolve every category with a candidate face into a push-out offset.
///
/// A category collides when the query point lies behind its padded plane
/// (`pierce_offset < 0`). Returns true if any category collided.
pub fn resolve_intersections(
    faces: &[Face],
    center: Vec3,
    floor_padding: f32,
    wall_padding: f32,
    elapsed_time: f32,
    config: &CollisionConfig,
    result: &mut CollisionResult,
) -> bool {
    for category in CollisionCategory::ALL {
        let Some(index) = result[category].face_index else {
            continue;
        };
        let face = faces[index];

        let padding = match category {
            CollisionCategory::Floor => floor_padding,
            CollisionCategory::Wall => wall_padding,
        };

        let pierce = face.signed_distance_to_plane(center) - padding;
        let record = &mut result[category];
        record.pierce_offset = pierce;

        if pierce >= 0.0 {
            continue;
        }

        let offset = match category {
            CollisionCategory::Floor => floor_offset(face.normal, pierce),
            CollisionCategory::Wall => wall_offset(face.normal, pierce, elapsed_time, config),
        };

        record.collided = true;
        record.resolution_offset = offset;
        record.normal = face.normal;
        record.center = face.center;
        result.mark_collided(true);
    }

    result.any_collision()
}

/// Vertical push-out for a floor face.
pub fn floor_offset(normal: Vec3, pierce: f32) -> Vec3 {
    let y = if normal.y != 0.0 {
        pierce / normal.y
    } else {
        pierce
    };
    Vec3::new(0.0, y, 0.0)
}

/// Push-out along the dominant horizontal axis of a wall face, plus a glide
/// term along the other horizontal axis.
///
/// The nose bias moves the result past the padded plane so the next query
/// does not register the same wall again.
pub fn wall_offset(normal: Vec3, pierce: f32, elapsed_time: f32, config: &CollisionConfig) -> Vec3 {
    let glide = -config.wall_glide_speed * elapsed_time;
    let mut offset = Vec3::ZERO;

    if normal.x == 0.0 && normal.z == 0.0 {
        // Downward facing: resolve vertically.
        offset.y = if normal.y < 0.0 {
            pierce / normal.y + config.nose
        } else if normal.y > 0.0 {
            pierce / normal.y - config.back_nose
        } else {
            pierce
        };
    } else if normal.z.abs() > normal.x.abs() {
        offset.z = if normal.z < 0.0 {
            // In front of us
            pierce / normal.z + config.nose
        } else {
            // Behind us
            pierce / normal.z - config.back_nose
        };
        offset.x = normal.x * glide;
    } else {
        offset.x = if normal.x < 0.0 {
            // Right side
            pierce / normal.x + config.back_nose
        } else {
            // Left side
            pierce / normal.x - config.nose
        };
        offset.z = normal.z * glide;
    }

    offset
}
