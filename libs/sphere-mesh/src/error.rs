//! # Mesh Errors
//!
//! Error types for sphere mesh generation and validation.

use thiserror::Error;

/// Errors that can occur while building or checking a mesh.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Parameters that would produce a degenerate mesh
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// A cell references a vertex that does not exist
    #[error("{kind} {element} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        kind: &'static str,
        element: usize,
        index: u32,
        vertex_count: usize,
    },

    /// Region tag outside the known set
    #[error("Unknown region tag: {0}")]
    InvalidRegion(u32),

    /// Mesh is too large for 32-bit vertex indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}
