//! Entity Component System integration with hecs.
//!
//! Collision bodies are stored as [`CollisionBody`](crate::collision::CollisionBody)
//! components. Actors are entities with [`Actor`](components::Actor) and
//! [`Position`](components::Position).

pub mod components;
pub mod systems;

pub mod prelude {
    pub use super::components::*;
    pub use super::systems::{actor_collision_system, body_transform_system};
}
