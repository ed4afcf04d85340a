//! Collision mesh storage and lookup.
//!
//! A [`CollisionMesh`] keeps one local-space summary per triangle. Collision
//! bodies resolve meshes by id through a [`MeshSource`] and write transformed
//! copies of those summaries into their own face buffers.

pub mod loader;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use glam::{Mat4, Vec3};
use tracing::info;

use crate::collision::Face;
use crate::error::MeshError;

/// Triangle summary in mesh-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshFace {
    pub center: Vec3,
    pub radius: f32,
    pub normal: Vec3,
}

impl MeshFace {
    /// Summarize a triangle. Winding is counter-clockwise when viewed from the
    /// side the normal points to.
    pub fn from_triangle(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        let center = (a + b + c) / 3.0;
        let radius = center
            .distance(a)
            .max(center.distance(b))
            .max(center.distance(c));
        Some(Self {
            center,
            radius,
            normal,
        })
    }
}

/// Static triangle mesh used for collision.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionMesh {
    faces: Vec<MeshFace>,
    radius: f32,
}

impl CollisionMesh {
    /// Build a mesh from a triangle list.
    pub fn from_triangles(triangles: &[[Vec3; 3]]) -> Result<Self, MeshError> {
        if triangles.is_empty() {
            return Err(MeshError::Empty);
        }

        let mut faces = Vec::with_capacity(triangles.len());
        let mut max_dist_sq = 0.0f32;

        for (index, [a, b, c]) in triangles.iter().enumerate() {
            let face = MeshFace::from_triangle(*a, *b, *c)
                .ok_or(MeshError::DegenerateTriangle { index })?;
            faces.push(face);

            for v in [a, b, c] {
                max_dist_sq = max_dist_sq.max(v.length_squared());
            }
        }

        Ok(Self {
            faces,
            radius: max_dist_sq.sqrt(),
        })
    }

    /// Build a mesh from an indexed vertex buffer (three indices per triangle).
    pub fn from_indexed(vertices: &[Vec3], indices: &[u32]) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::BadIndexCount(indices.len()));
        }

        let fetch = |index: u32| {
            vertices
                .get(index as usize)
                .copied()
                .ok_or(MeshError::IndexOutOfRange {
                    index,
                    vertex_count: vertices.len(),
                })
        };

        let triangles = indices
            .chunks_exact(3)
            .map(|tri| -> Result<[Vec3; 3], MeshError> {
                Ok([fetch(tri[0])?, fetch(tri[1])?, fetch(tri[2])?])
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_triangles(&triangles)
    }

    /// Load a mesh from a binary collision mesh file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        loader::load_file(path)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn faces(&self) -> &[MeshFace] {
        &self.faces
    }

    /// Bounding radius of all vertices about the mesh-local origin.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Write world-space faces into `out`.
    ///
    /// Centers go through `scaled`. Normals go through `unscaled`, because a
    /// non-uniform scale would bend them off the plane. Face radii grow by the
    /// largest scale component.
    pub fn transform(&self, out: &mut [Face], scale: Vec3, scaled: &Mat4, unscaled: &Mat4) {
        debug_assert_eq!(out.len(), self.faces.len());
        let max_scale = scale.abs().max_element();

        for (dst, src) in out.iter_mut().zip(&self.faces) {
            dst.center = scaled.transform_point3(src.center);
            dst.radius = src.radius * max_scale;
            dst.normal = unscaled.transform_vector3(src.normal).normalize_or_zero();
        }
    }
}

/// Resolves collision meshes by id.
pub trait MeshSource {
    fn collision_mesh(&self, id: &str) -> Option<Arc<CollisionMesh>>;
}

/// Registry of loaded collision meshes, shared between bodies.
#[derive(Debug, Default)]
pub struct MeshLibrary {
    meshes: HashMap<String, Arc<CollisionMesh>>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh under `id`, replacing any previous entry.
    pub fn insert(&mut self, id: impl Into<String>, mesh: CollisionMesh) -> Arc<CollisionMesh> {
        let id = id.into();
        let mesh = Arc::new(mesh);
        info!(
            "Registered collision mesh {:?} ({} faces)",
            id,
            mesh.face_count()
        );
        self.meshes.insert(id, Arc::clone(&mesh));
        mesh
    }

    /// Load a mesh file and register it under its path. Files already loaded
    /// are returned from the registry without touching the disk.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<Arc<CollisionMesh>> {
        let path = path.as_ref();
        let id = path.to_string_lossy().into_owned();
        if let Some(mesh) = self.meshes.get(&id) {
            return Ok(Arc::clone(mesh));
        }
        let mesh = loader::load_file(path)?;
        Ok(self.insert(id, mesh))
    }

    pub fn get(&self, id: &str) -> Option<Arc<CollisionMesh>> {
        self.meshes.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl MeshSource for MeshLibrary {
    fn collision_mesh(&self, id: &str) -> Option<Arc<CollisionMesh>> {
        self.get(id)
    }
}
