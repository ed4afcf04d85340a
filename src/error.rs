//! Error types for mesh construction and collision body setup.

use thiserror::Error;

/// Errors produced while building or decoding a collision mesh.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// A mesh must contain at least one triangle.
    #[error("collision mesh has no triangles")]
    Empty,

    /// The triangle has zero area, so it has no plane normal.
    #[error("triangle {index} is degenerate (zero area)")]
    DegenerateTriangle { index: usize },

    /// An index buffer entry points past the vertex buffer.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// Index buffer length is not a multiple of three.
    #[error("index count {0} is not a multiple of 3")]
    BadIndexCount(usize),

    /// Binary mesh data does not start with the expected magic bytes.
    #[error("not a collision mesh file (bad magic)")]
    BadMagic,

    /// Binary mesh data ended early.
    #[error("mesh data truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

/// Errors produced by collision body setup.
#[derive(Debug, Error, PartialEq)]
pub enum CollisionError {
    /// The mesh source has no collision mesh registered under this id.
    #[error("collision mesh not found: {0}")]
    MeshNotFound(String),
}
