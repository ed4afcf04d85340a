//! Narrowphase: per-face nearest candidate search.

use glam::Vec3;

use super::face::Face;
use super::result::{CollisionCategory, CollisionResult};

/// Select the nearest front-facing floor face and the nearest front-facing
/// wall face whose bounding spheres overlap the query sphere.
///
/// Records only ever move to strictly closer faces, so among faces at equal
/// distance the first one in array order wins. Returns true if any candidate
/// was recorded.
pub fn find_nearest_faces(
    faces: &[Face],
    center: Vec3,
    radius: f32,
    floor_threshold: f32,
    result: &mut CollisionResult,
) -> bool {
    let mut found = false;

    for (i, face) in faces.iter().enumerate() {
        let distance = face.center.distance(center);

        if distance >= face.radius + radius {
            continue;
        }

        let record = &mut result[CollisionCategory::classify(face.normal, floor_threshold)];

        if distance < record.distance && face.is_facing_plane(center) {
            record.distance = distance;
            record.face_index = Some(i);
            found = true;
        }
    }

    found
}
