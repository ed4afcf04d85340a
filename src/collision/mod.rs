//! Sphere versus static triangle mesh collision.
//!
//! # Pipeline
//!
//! Each query runs synchronously, in three phases:
//!
//! 1. Broadphase: the query sphere against the whole mesh's bounding sphere
//! 2. Narrowphase: nearest front-facing floor face and wall face whose
//!    bounding spheres overlap the query sphere
//! 3. Resolution: plane intersection of each selected face, producing a
//!    push-out offset (vertical for floors, horizontal with glide for walls)
//!
//! A miss in phase 1 skips the per-face work entirely.

pub mod body;
pub mod broadphase;
pub mod face;
pub mod narrowphase;
pub mod resolution;
pub mod result;

pub use body::{Collidable, CollisionBody, SphereQuery, Transformable};
pub use face::Face;
pub use result::{CollisionCategory, CollisionRecord, CollisionResult};

/// Tuning constants for collision response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionConfig {
    /// Extra push-out past front and right-side walls. Default: 0.05.
    pub nose: f32,
    /// Extra push-out past back and left-side walls. Default: 0.05.
    pub back_nose: f32,
    /// Speed of the glide along a wall, in units per second. Default: 0 (off).
    pub wall_glide_speed: f32,
    /// A face is a floor when `normal.y` is strictly greater than this.
    /// Default: 0.4.
    pub floor_threshold: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            nose: 0.05,
            back_nose: 0.05,
            wall_glide_speed: 0.0,
            floor_threshold: 0.4,
        }
    }
}
