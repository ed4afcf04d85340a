//! Binary collision mesh files.
//!
//! Layout (little-endian): the magic bytes `GMSH`, a `u32` triangle count,
//! then nine `f32` per triangle (three vertices, counter-clockwise).

use std::path::Path;

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use tracing::info;

use super::CollisionMesh;
use crate::error::MeshError;

pub const MAGIC: [u8; 4] = *b"GMSH";

const HEADER_LEN: usize = 8;

/// One triangle as stored on disk: nine little-endian `f32` bit patterns.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct RawTriangle {
    words: [u32; 9],
}

const TRIANGLE_LEN: usize = std::mem::size_of::<RawTriangle>();

impl RawTriangle {
    fn from_vertices(tri: &[Vec3; 3]) -> Self {
        let mut words = [0u32; 9];
        for (i, v) in tri.iter().enumerate() {
            for (j, c) in v.to_array().into_iter().enumerate() {
                words[i * 3 + j] = c.to_bits().to_le();
            }
        }
        Self { words }
    }

    fn to_vertices(self) -> [Vec3; 3] {
        let f = |i: usize| f32::from_bits(u32::from_le(self.words[i]));
        [
            Vec3::new(f(0), f(1), f(2)),
            Vec3::new(f(3), f(4), f(5)),
            Vec3::new(f(6), f(7), f(8)),
        ]
    }
}

/// Decode a triangle list from binary mesh data.
pub fn decode_triangles(bytes: &[u8]) -> Result<Vec<[Vec3; 3]>, MeshError> {
    if bytes.len() < HEADER_LEN {
        return Err(MeshError::Truncated {
            expected: HEADER_LEN,
            actual: bytes.len(),
        });
    }
    if bytes[..4] != MAGIC {
        return Err(MeshError::BadMagic);
    }

    let count = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]) as usize;
    let expected = HEADER_LEN + count * TRIANGLE_LEN;
    if bytes.len() < expected {
        return Err(MeshError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(bytes[HEADER_LEN..expected]
        .chunks_exact(TRIANGLE_LEN)
        .map(|chunk| bytemuck::pod_read_unaligned::<RawTriangle>(chunk).to_vertices())
        .collect())
}

/// Encode a triangle list as binary mesh data.
pub fn encode_triangles(triangles: &[[Vec3; 3]]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_LEN + triangles.len() * TRIANGLE_LEN);
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        bytes.extend_from_slice(bytemuck::bytes_of(&RawTriangle::from_vertices(tri)));
    }
    bytes
}

/// Load and validate a collision mesh from disk.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<CollisionMesh> {
    let path = path.as_ref();
    info!("Loading collision mesh from {:?}", path);

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read mesh file {:?}", path))?;
    let triangles =
        decode_triangles(&bytes).with_context(|| format!("Invalid mesh file {:?}", path))?;
    let mesh = CollisionMesh::from_triangles(&triangles)
        .with_context(|| format!("Invalid mesh geometry in {:?}", path))?;

    info!("Loaded {} collision faces from {:?}", mesh.face_count(), path);
    Ok(mesh)
}
