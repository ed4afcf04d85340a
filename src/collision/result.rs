//! Collision result aggregate: one record per surface category.

use std::ops::{Index, IndexMut};

use glam::Vec3;

/// Surface category of a face, decided per face from its normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionCategory {
    Floor,
    Wall,
}

impl CollisionCategory {
    pub const ALL: [CollisionCategory; 2] = [CollisionCategory::Floor, CollisionCategory::Wall];

    /// Floor if `normal.y` is strictly greater than `floor_threshold`, wall otherwise.
    #[inline]
    pub fn classify(normal: Vec3, floor_threshold: f32) -> Self {
        if normal.y > floor_threshold {
            CollisionCategory::Floor
        } else {
            CollisionCategory::Wall
        }
    }

    #[inline]
    fn slot(self) -> usize {
        match self {
            CollisionCategory::Floor => 0,
            CollisionCategory::Wall => 1,
        }
    }
}

/// Nearest candidate and resolution data for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionRecord {
    /// Distance from the query center to the candidate face center.
    /// `f32::INFINITY` until a candidate is found.
    pub distance: f32,
    /// Index of the candidate face in the body's face array.
    pub face_index: Option<usize>,
    /// Whether the query point crossed the padded plane.
    pub collided: bool,
    /// Signed distance to the padded plane. Negative means penetration.
    pub pierce_offset: f32,
    /// Offset to subtract from the actor position to leave the plane.
    pub resolution_offset: Vec3,
    /// Normal of the resolved face.
    pub normal: Vec3,
    /// Center of the resolved face.
    pub center: Vec3,
}

impl Default for CollisionRecord {
    fn default() -> Self {
        Self {
            distance: f32::INFINITY,
            face_index: None,
            collided: false,
            pierce_offset: 0.0,
            resolution_offset: Vec3::ZERO,
            normal: Vec3::ZERO,
            center: Vec3::ZERO,
        }
    }
}

impl CollisionRecord {
    /// Whether the narrow phase selected a candidate face.
    #[inline]
    pub fn has_candidate(&self) -> bool {
        self.face_index.is_some()
    }

    /// Displacement to add to the actor position. Zero when not collided.
    pub fn correction(&self) -> Vec3 {
        if self.collided {
            -self.resolution_offset
        } else {
            Vec3::ZERO
        }
    }
}

/// Aggregate collision outcome of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionResult {
    records: [CollisionRecord; 2],
    any_collision: bool,
}

impl CollisionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every record to its pre-query state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn mark_collided(&mut self, collided: bool) {
        self.any_collision = collided;
    }

    /// True when any category collided.
    pub fn any_collision(&self) -> bool {
        self.any_collision
    }

    pub fn has_collision(&self, category: CollisionCategory) -> bool {
        self[category].collided
    }

    pub fn record(&self, category: CollisionCategory) -> &CollisionRecord {
        &self[category]
    }

    /// Summed correction of every collided category.
    pub fn correction(&self) -> Vec3 {
        self.records.iter().map(CollisionRecord::correction).sum()
    }
}

impl Index<CollisionCategory> for CollisionResult {
    type Output = CollisionRecord;

    fn index(&self, category: CollisionCategory) -> &CollisionRecord {
        &self.records[category.slot()]
    }
}

impl IndexMut<CollisionCategory> for CollisionResult {
    fn index_mut(&mut self, category: CollisionCategory) -> &mut CollisionRecord {
        &mut self.records[category.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_threshold_exclusive() {
        assert_eq!(
            CollisionCategory::classify(Vec3::Y, 0.4),
            CollisionCategory::Floor
        );
        assert_eq!(
            CollisionCategory::classify(Vec3::new(0.0, 0.4, 0.0), 0.4),
            CollisionCategory::Wall
        );
        assert_eq!(
            CollisionCategory::classify(Vec3::new(0.0, 0.41, 0.91), 0.4),
            CollisionCategory::Floor
        );
        assert_eq!(
            CollisionCategory::classify(Vec3::NEG_Y, 0.4),
            CollisionCategory::Wall
        );
    }

    #[test]
    fn test_reset_state() {
        let mut result = CollisionResult::new();
        result[CollisionCategory::Wall].face_index = Some(3);
        result[CollisionCategory::Wall].distance = 1.0;
        result[CollisionCategory::Wall].collided = true;
        result.mark_collided(true);

        result.reset();
        for category in CollisionCategory::ALL {
            let record = result.record(category);
            assert_eq!(record.distance, f32::INFINITY);
            assert_eq!(record.face_index, None);
            assert!(!record.collided);
            assert!(!result.has_collision(category));
        }
        assert!(!result.any_collision());
    }

    #[test]
    fn test_correction_only_when_collided() {
        let mut result = CollisionResult::new();
        result[CollisionCategory::Floor].resolution_offset = Vec3::new(0.0, -0.05, 0.0);
        assert_eq!(result.correction(), Vec3::ZERO);

        result[CollisionCategory::Floor].collided = true;
        result[CollisionCategory::Wall].resolution_offset = Vec3::new(0.0, 0.0, 0.25);
        result[CollisionCategory::Wall].collided = true;
        assert_eq!(result.correction(), Vec3::new(0.0, 0.05, -0.25));
    }
}
