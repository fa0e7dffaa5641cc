//! # Elements
//!
//! Mesh cells and the polygon faces used to draw them.
//!
//! Every cell stores global vertex indices. The face tables below list the
//! local node order of each drawable polygon; they are what a plotting sink
//! needs to show a cell as a set of (semi-transparent) faces.

use crate::error::MeshError;

/// Material region of a tetrahedron.
///
/// Stored on disk as the integer tag in the fifth column of a tetrahedron row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Innermost shell layer (tag `0`)
    Inner,
    /// Every other layer (tag `1`)
    Outer,
}

impl Region {
    /// Region assumed for rows written without a tag.
    pub const DEFAULT: Region = Region::Outer;

    /// Integer tag used in element files.
    pub const fn tag(self) -> u32 {
        match self {
            Region::Inner => 0,
            Region::Outer => 1,
        }
    }
}

impl TryFrom<u32> for Region {
    type Error = MeshError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Region::Inner),
            1 => Ok(Region::Outer),
            other => Err(MeshError::InvalidRegion(other)),
        }
    }
}

/// A drawable polygon of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Three vertex indices
    Triangle([u32; 3]),
    /// Four vertex indices
    Quad([u32; 4]),
}

impl Face {
    /// Vertex indices in winding order.
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Triangle(v) => v.as_slice(),
            Face::Quad(v) => v.as_slice(),
        }
    }
}

/// A mesh cell made of global vertex indices.
pub trait Cell {
    /// Human-readable cell name used in error messages.
    const NAME: &'static str;

    /// Global vertex indices in local node order.
    fn nodes(&self) -> &[u32];

    /// Polygons that outline the cell.
    fn faces(&self) -> Vec<Face>;

    /// Region of the cell, if it carries one.
    fn region(&self) -> Option<Region> {
        None
    }
}

fn triangles_from<const N: usize>(nodes: &[u32; N], table: &[[usize; 3]]) -> Vec<Face> {
    table
        .iter()
        .map(|t| Face::Triangle([nodes[t[0]], nodes[t[1]], nodes[t[2]]]))
        .collect()
}

fn quads_from<const N: usize>(nodes: &[u32; N], table: &[[usize; 4]]) -> Vec<Face> {
    table
        .iter()
        .map(|q| Face::Quad([nodes[q[0]], nodes[q[1]], nodes[q[2]], nodes[q[3]]]))
        .collect()
}

// =============================================================================
// TETRAHEDRON
// =============================================================================

const TETRAHEDRON_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// Four-node volume element tagged with a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetrahedron {
    /// Global vertex indices
    pub nodes: [u32; 4],
    /// Material region
    pub region: Region,
}

impl Tetrahedron {
    /// Creates a tetrahedron.
    pub const fn new(nodes: [u32; 4], region: Region) -> Self {
        Self { nodes, region }
    }
}

impl Cell for Tetrahedron {
    const NAME: &'static str = "tetrahedron";

    fn nodes(&self) -> &[u32] {
        &self.nodes
    }

    fn faces(&self) -> Vec<Face> {
        triangles_from(&self.nodes, &TETRAHEDRON_FACES)
    }

    fn region(&self) -> Option<Region> {
        Some(self.region)
    }
}

// =============================================================================
// PRISM
// =============================================================================

/// Side faces only; the two triangular ends are shared with neighbouring
/// shells and are not drawn.
const PRISM_FACES: [[usize; 4]; 3] = [[0, 1, 4, 3], [2, 5, 4, 1], [2, 0, 3, 5]];

/// Splits a prism into three tetrahedra.
const PRISM_TETRAHEDRA: [[usize; 4]; 3] = [[5, 4, 3, 1], [5, 3, 2, 1], [3, 2, 1, 0]];

/// Six-node wedge: nodes `0..3` on one sphere, `3..6` on the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prism(pub [u32; 6]);

impl Prism {
    /// Decomposes the prism into tetrahedra of the given region.
    pub fn tetrahedra(&self, region: Region) -> [Tetrahedron; 3] {
        PRISM_TETRAHEDRA.map(|t| Tetrahedron::new(t.map(|i| self.0[i]), region))
    }
}

impl Cell for Prism {
    const NAME: &'static str = "prism";

    fn nodes(&self) -> &[u32] {
        &self.0
    }

    fn faces(&self) -> Vec<Face> {
        quads_from(&self.0, &PRISM_FACES)
    }
}

// =============================================================================
// PARALLELEPIPED
// =============================================================================

const PARALLELEPIPED_FACES: [[usize; 4]; 6] = [
    [0, 1, 5, 4],
    [7, 6, 2, 3],
    [0, 1, 3, 2],
    [7, 6, 4, 5],
    [7, 3, 1, 5],
    [0, 2, 6, 4],
];

/// Splits a parallelepiped into six tetrahedra.
const PARALLELEPIPED_TETRAHEDRA: [[usize; 4]; 6] = [
    [6, 7, 5, 3],
    [4, 6, 5, 1],
    [0, 4, 1, 2],
    [2, 6, 1, 4],
    [1, 5, 3, 6],
    [1, 2, 3, 6],
];

/// Eight-node hexahedral cell between two rings on two spheres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parallelepiped(pub [u32; 8]);

impl Parallelepiped {
    /// Decomposes the cell into tetrahedra of the given region.
    pub fn tetrahedra(&self, region: Region) -> [Tetrahedron; 6] {
        PARALLELEPIPED_TETRAHEDRA.map(|t| Tetrahedron::new(t.map(|i| self.0[i]), region))
    }
}

impl Cell for Parallelepiped {
    const NAME: &'static str = "parallelepiped";

    fn nodes(&self) -> &[u32] {
        &self.0
    }

    fn faces(&self) -> Vec<Face> {
        quads_from(&self.0, &PARALLELEPIPED_FACES)
    }
}

// =============================================================================
// SURFACE POLYGONS
// =============================================================================

impl Cell for [u32; 3] {
    const NAME: &'static str = "triangle";

    fn nodes(&self) -> &[u32] {
        self
    }

    fn faces(&self) -> Vec<Face> {
        vec![Face::Triangle(*self)]
    }
}

impl Cell for [u32; 4] {
    const NAME: &'static str = "quad";

    fn nodes(&self) -> &[u32] {
        self
    }

    fn faces(&self) -> Vec<Face> {
        vec![Face::Quad(*self)]
    }
}

/// Verifies that every cell references an existing vertex.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::{check_indices, MeshError};
///
/// assert!(check_indices(&[[0u32, 1, 2]], 3).is_ok());
/// assert!(matches!(
///     check_indices(&[[0u32, 1, 3]], 3),
///     Err(MeshError::IndexOutOfRange { index: 3, .. })
/// ));
/// ```
pub fn check_indices<C: Cell>(cells: &[C], vertex_count: usize) -> Result<(), MeshError> {
    for (element, cell) in cells.iter().enumerate() {
        if let Some(&index) = cell.nodes().iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                kind: C::NAME,
                element,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}
