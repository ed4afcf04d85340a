//! Glidemesh
//!
//! Collision detection and response for a moving bounding sphere against
//! static triangle meshes, with wall glide.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **mesh** - Collision mesh storage, lookup, and file loading
//! 2. **transform** - Body placement (position, rotation, scale)
//! 3. **services** - Step clock and instrumentation counters
//! 4. **collision** - Faces, results, and the broadphase / narrowphase /
//!    resolution pipeline driven by [`CollisionBody`]
//! 5. **ecs** - hecs components and systems (feature = "ecs")
//!
//! # Example
//!
//! ```
//! use glidemesh::glam::{Mat4, Vec3};
//! use glidemesh::{
//!     Collidable, CollisionBody, CollisionCategory, CollisionMesh, MeshLibrary, SphereQuery,
//! };
//!
//! let floor = CollisionMesh::from_triangles(&[[
//!     Vec3::new(0.0, 0.0, -5.0),
//!     Vec3::new(-4.0, 0.0, 3.0),
//!     Vec3::new(4.0, 0.0, 3.0),
//! ]])
//! .unwrap();
//!
//! let mut library = MeshLibrary::new();
//! library.insert("level/floor", floor);
//!
//! let mut body = CollisionBody::default();
//! body.initialize(&library, "level/floor").unwrap();
//!
//! let query = SphereQuery::new(Vec3::new(0.0, 0.05, 0.0), 0.5).with_padding(0.1, 0.1);
//! let result = body.react_to_collision(&Mat4::IDENTITY, &query, &(1.0f32 / 60.0));
//!
//! assert!(result.has_collision(CollisionCategory::Floor));
//! let corrected = query.center + result.correction();
//! assert!((corrected.y - 0.1).abs() < 1e-5);
//! ```

pub mod collision;
pub mod error;
pub mod mesh;
pub mod services;
pub mod transform;

#[cfg(feature = "ecs")]
pub mod ecs;

// Re-export commonly used types
pub use collision::{
    Collidable, CollisionBody, CollisionCategory, CollisionConfig, CollisionRecord,
    CollisionResult, Face, SphereQuery, Transformable,
};

pub use error::{CollisionError, MeshError};

pub use mesh::{CollisionMesh, MeshFace, MeshLibrary, MeshSource};

pub use services::{CollisionStats, FrameClock, StatsSnapshot, StepClock};

pub use transform::Transform;

#[cfg(feature = "ecs")]
pub use ecs::prelude::*;

// Re-export glam for convenience
pub use glam;
