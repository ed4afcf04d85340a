//! Collision body: a placed collision mesh that actors are tested against.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use tracing::{debug, info, trace, warn};

use crate::error::CollisionError;
use crate::mesh::{CollisionMesh, MeshSource};
use crate::services::{CollisionStats, StepClock};
use crate::transform::Transform;

use super::broadphase::spheres_overlap;
use super::face::Face;
use super::narrowphase::find_nearest_faces;
use super::resolution::resolve_intersections;
use super::result::{CollisionCategory, CollisionResult};
use super::CollisionConfig;

/// Bounding sphere of the actor being tested, with per-category padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereQuery {
    pub center: Vec3,
    pub radius: f32,
    /// Distance kept between the center and floor planes.
    pub floor_padding: f32,
    /// Distance kept between the center and wall planes.
    pub wall_padding: f32,
}

impl SphereQuery {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
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
}

/// Something that can be moved into a query space.
pub trait Transformable {
    /// Place the body under `matrix`.
    fn transform(&mut self, matrix: &Mat4);

    /// Place the body under `matrix`, then apply `extra` on top of it.
    fn transform_with(&mut self, matrix: &Mat4, extra: &Mat4) {
        self.transform(&(*extra * *matrix));
    }
}

/// Something a sphere can collide with.
pub trait Collidable {
    /// Move the body under `matrix` and run a full query.
    fn react_to_collision(
        &mut self,
        matrix: &Mat4,
        query: &SphereQuery,
        clock: &dyn StepClock,
    ) -> CollisionResult;

    /// Run a query against the body where it was last transformed.
    fn react_to_collision_in_place(
        &mut self,
        query: &SphereQuery,
        clock: &dyn StepClock,
    ) -> CollisionResult;
}

/// A collision mesh placed in the world, with its own transformed face buffer.
///
/// The face buffer is allocated once by [`CollisionBody::initialize`] and
/// overwritten in place by every transform.
#[derive(Debug, Clone)]
pub struct CollisionBody {
    config: CollisionConfig,
    placement: Transform,
    mesh: Option<Arc<CollisionMesh>>,
    faces: Vec<Face>,
    center: Vec3,
    radius: f32,
    stats: Option<Arc<CollisionStats>>,
}

impl Default for CollisionBody {
    fn default() -> Self {
        Self::new(CollisionConfig::default())
    }
}

impl CollisionBody {
    pub fn new(config: CollisionConfig) -> Self {
        Self {
            config,
            placement: Transform::identity(),
            mesh: None,
            faces: Vec::new(),
            center: Vec3::ZERO,
            radius: 0.0,
            stats: None,
        }
    }

    /// Builder: set the body's placement.
    pub fn with_placement(mut self, placement: Transform) -> Self {
        self.placement = placement;
        self
    }

    /// Builder: count queries into `stats`.
    pub fn with_stats(mut self, stats: Arc<CollisionStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Resolve the collision mesh `id` and allocate the face buffer.
    ///
    /// On failure the body is left untouched. On success the body is
    /// transformed once with the identity matrix, so in-place queries are
    /// valid straight away.
    pub fn initialize(&mut self, source: &dyn MeshSource, id: &str) -> Result<(), CollisionError> {
        let Some(mesh) = source.collision_mesh(id) else {
            warn!("Collision mesh {:?} not found", id);
            return Err(CollisionError::MeshNotFound(id.to_string()));
        };

        info!(
            "Collision body initialized with {:?} ({} faces)",
            id,
            mesh.face_count()
        );
        self.faces = vec![Face::default(); mesh.face_count()];
        self.mesh = Some(mesh);
        self.transform(&Mat4::IDENTITY);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn placement(&self) -> &Transform {
        &self.placement
    }

    /// Mutable placement. Takes effect at the next transform.
    pub fn placement_mut(&mut self) -> &mut Transform {
        &mut self.placement
    }

    pub fn mesh(&self) -> Option<&Arc<CollisionMesh>> {
        self.mesh.as_ref()
    }

    /// Transformed faces, as of the last transform.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Transformed center of the mesh bounding sphere.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Scaled radius of the mesh bounding sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Matrices with and without the body's scale, merged under `outer`.
    fn matrices(&self, outer: &Mat4) -> (Mat4, Mat4) {
        let unscaled = *outer * self.placement.to_rigid_matrix();
        let scaled = unscaled * Mat4::from_scale(self.placement.scale);
        (scaled, unscaled)
    }

    fn update_bounds(&mut self, scaled: &Mat4) {
        self.center = scaled.transform_point3(Vec3::ZERO);
        self.radius = self
            .mesh
            .as_ref()
            .map_or(0.0, |mesh| mesh.radius() * self.placement.max_scale());
    }

    fn transform_faces(&mut self, scaled: &Mat4, unscaled: &Mat4) {
        if let Some(mesh) = &self.mesh {
            mesh.transform(&mut self.faces, self.placement.scale, scaled, unscaled);
        }
    }

    fn broad_phase(&self, query: &SphereQuery) -> bool {
        if let Some(stats) = &self.stats {
            stats.record_query();
        }

        let hit = spheres_overlap(self.center, self.radius, query.center, query.radius);
        if hit {
            if let Some(stats) = &self.stats {
                stats.record_broad_phase_hit();
            }
        } else {
            trace!(
                "Broadphase miss: body {:?} r={} vs query {:?} r={}",
                self.center,
                self.radius,
                query.center,
                query.radius
            );
        }
        hit
    }

    /// Narrow phase and resolution over the current face buffer.
    fn resolve(&self, query: &SphereQuery, clock: &dyn StepClock) -> CollisionResult {
        let mut result = CollisionResult::new();

        if !find_nearest_faces(
            &self.faces,
            query.center,
            query.radius,
            self.config.floor_threshold,
            &mut result,
        ) {
            return result;
        }

        let hit = resolve_intersections(
            &self.faces,
            query.center,
            query.floor_padding,
            query.wall_padding,
            clock.elapsed_time(),
            &self.config,
            &mut result,
        );

        if hit {
            if let Some(stats) = &self.stats {
                stats.record_resolved();
            }
            debug!(
                "Collision at {:?}: floor={} wall={} correction={:?}",
                query.center,
                result.has_collision(CollisionCategory::Floor),
                result.has_collision(CollisionCategory::Wall),
                result.correction()
            );
        }

        result
    }
}

impl Transformable for CollisionBody {
    fn transform(&mut self, matrix: &Mat4) {
        let (scaled, unscaled) = self.matrices(matrix);
        self.update_bounds(&scaled);
        self.transform_faces(&scaled, &unscaled);
    }
}

impl Collidable for CollisionBody {
    fn react_to_collision(
        &mut self,
        matrix: &Mat4,
        query: &SphereQuery,
        clock: &dyn StepClock,
    ) -> CollisionResult {
        if !self.is_initialized() {
            warn!("Collision query on an uninitialized body");
            return CollisionResult::new();
        }

        let (scaled, unscaled) = self.matrices(matrix);
        self.update_bounds(&scaled);

        if !self.broad_phase(query) {
            return CollisionResult::new();
        }

        // Faces are only transformed once the broadphase passes.
        self.transform_faces(&scaled, &unscaled);
        self.resolve(query, clock)
    }

    fn react_to_collision_in_place(
        &mut self,
        query: &SphereQuery,
        clock: &dyn StepClock,
    ) -> CollisionResult {
        if !self.is_initialized() {
            warn!("Collision query on an uninitialized body");
            return CollisionResult::new();
        }

        if !self.broad_phase(query) {
            return CollisionResult::new();
        }
        self.resolve(query, clock)
    }
}
