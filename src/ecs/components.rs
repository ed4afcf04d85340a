//! ECS components for collision actors.

use glam::Vec3;

use crate::collision::{CollisionResult, SphereQuery};

/// World-space position of an actor. Corrected by the collision system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec3);

/// Bounding sphere of an actor that collides with collision bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub radius: f32,
    pub floor_padding: f32,
    pub wall_padding: f32,
}

impl Actor {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            floor_padding: 0.0,
            wall_padding: 0.0,
        }
    }

    /// Builder: set floor and wall padding.
    pub fn with_padding(mut self, floor_padding: f32, wall_padding: f32) -> Self {
        self.floor_padding = floor_padding;
        self.wall_padding = wall_padding;
        self
    }

    /// Query for this actor centered at `position`.
    pub fn query_at(&self, position: Vec3) -> SphereQuery {
        SphereQuery::new(position, self.radius).with_padding(self.floor_padding, self.wall_padding)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// Last colliding result of an actor, written by the collision system.
/// Reset to an empty result on frames without a collision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActorContacts(pub CollisionResult);
