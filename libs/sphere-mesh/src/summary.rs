//! # Mesh Summary
//!
//! Counts and extents of a point set plus cells. This is what the inspection
//! command prints in place of drawing the mesh.

use crate::elements::{check_indices, Cell, Region};
use crate::error::MeshError;
use glam::DVec3;
use std::collections::BTreeMap;
use std::fmt;

/// Aggregate statistics for one kind of cell over a point set.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSummary {
    /// Cell name, e.g. `tetrahedron`
    pub kind: &'static str,
    /// Number of points
    pub vertex_count: usize,
    /// Number of cells
    pub element_count: usize,
    /// Number of drawable faces over all cells
    pub face_count: usize,
    /// Cells per region, empty for untagged cells
    pub regions: BTreeMap<Region, usize>,
    /// Axis-aligned bounds, `None` for an empty point set
    pub bounds: Option<(DVec3, DVec3)>,
}

impl MeshSummary {
    /// Validates indices and collects the summary.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sphere_mesh::{uv_sphere, MeshSummary};
    ///
    /// let sphere = uv_sphere(4, 3);
    /// let summary = MeshSummary::collect(sphere.vertices(), sphere.quads()).unwrap();
    /// assert_eq!(summary.element_count, 4);
    /// assert_eq!(summary.face_count, 4);
    /// ```
    pub fn collect<C: Cell>(points: &[DVec3], cells: &[C]) -> Result<Self, MeshError> {
        check_indices(cells, points.len())?;

        let mut regions = BTreeMap::new();
        let mut face_count = 0;
        for cell in cells {
            face_count += cell.faces().len();
            if let Some(region) = cell.region() {
                *regions.entry(region).or_insert(0) += 1;
            }
        }

        let bounds = points.split_first().map(|(first, rest)| {
            rest.iter()
                .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
        });

        Ok(Self {
            kind: C::NAME,
            vertex_count: points.len(),
            element_count: cells.len(),
            face_count,
            regions,
            bounds,
        })
    }
}

impl fmt::Display for MeshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices: {}", self.vertex_count)?;
        writeln!(f, "{} cells: {}", self.kind, self.element_count)?;
        writeln!(f, "faces: {}", self.face_count)?;
        for (region, count) in &self.regions {
            writeln!(f, "region {:?} (tag {}): {}", region, region.tag(), count)?;
        }
        match self.bounds {
            Some((min, max)) => write!(
                f,
                "bounds: [{}, {}, {}] .. [{}, {}, {}]",
                min.x, min.y, min.z, max.x, max.y, max.z
            ),
            None => write!(f, "bounds: empty"),
        }
    }
}
