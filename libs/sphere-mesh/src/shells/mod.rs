//! # Concentric Shells
//!
//! Volume mesh between nested UV spheres. Each layer between two neighbouring
//! spheres is filled with six-node prisms at the polar caps and eight-node
//! parallelepipeds in the bands, and every cell is split into tetrahedra.
//!
//! ## Point layout
//!
//! Spheres are emitted from the outermost radius inwards. Sphere `k` occupies
//! `k * sphere_size .. (k + 1) * sphere_size` and follows the UV sphere
//! layout (north pole, rings, south pole).

use crate::elements::{Parallelepiped, Prism, Region, Tetrahedron};
use crate::error::MeshError;
use crate::uv_sphere::{check_vertex_budget, generate};
use config::constants::{approx_equal, EPSILON, MIN_SLICES, MIN_STACKS};
use glam::DVec3;
use tracing::{debug, info};

/// Parameters of a concentric shell mesh.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::ShellParams;
///
/// let mesh = ShellParams::new(4, 3, vec![1.0, 2.0]).build().unwrap();
/// assert_eq!(mesh.point_count(), 2 * 10);
/// assert_eq!(mesh.prisms().len(), 8);
/// assert_eq!(mesh.parallelepipeds().len(), 4);
/// assert_eq!(mesh.tetrahedra().len(), 8 * 3 + 4 * 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShellParams {
    /// Longitudinal divisions
    pub slices: u32,
    /// Latitudinal divisions
    pub stacks: u32,
    /// Sphere radii, strictly increasing
    pub radii: Vec<f64>,
    /// Common centre of all spheres
    pub center: DVec3,
}

impl ShellParams {
    /// Creates parameters centred at the origin.
    pub fn new(slices: u32, stacks: u32, radii: Vec<f64>) -> Self {
        Self {
            slices,
            stacks,
            radii,
            center: DVec3::ZERO,
        }
    }

    /// Sets the centre.
    pub fn with_center(mut self, center: DVec3) -> Self {
        self.center = center;
        self
    }

    /// Rejects parameters that would produce degenerate cells.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.slices < MIN_SLICES {
            return Err(MeshError::degenerate(format!(
                "Shell slices must be at least {MIN_SLICES}: {}",
                self.slices
            )));
        }
        if self.stacks < MIN_STACKS {
            return Err(MeshError::degenerate(format!(
                "Shell stacks must be at least {MIN_STACKS}: {}",
                self.stacks
            )));
        }
        if self.radii.len() < 2 {
            return Err(MeshError::degenerate(format!(
                "At least two radii are needed to form a layer, got {}",
                self.radii.len()
            )));
        }
        if let Some(r) = self
            .radii
            .iter()
            .find(|r| !r.is_finite() || **r <= 0.0)
        {
            return Err(MeshError::degenerate(format!(
                "Shell radius must be positive: {r}"
            )));
        }
        if let Some(pair) = self
            .radii
            .windows(2)
            .find(|w| w[0] >= w[1] || approx_equal(w[0], w[1], EPSILON))
        {
            return Err(MeshError::degenerate(format!(
                "Shell radii must be strictly increasing: {} then {}",
                pair[0], pair[1]
            )));
        }
        check_vertex_budget(self.slices, self.stacks, self.radii.len())
    }

    /// Validates and builds the shell mesh.
    pub fn build(&self) -> Result<ShellMesh, MeshError> {
        self.validate()?;

        let mut points = Vec::new();
        for &radius in self.radii.iter().rev() {
            let (vertices, _, _) = generate(self.slices, self.stacks, radius).into_parts();
            points.extend(vertices.into_iter().map(|v| v + self.center));
        }

        let layout = Layout {
            slices: self.slices,
            stacks: self.stacks,
            sphere_size: (self.stacks - 1) * self.slices + 2,
        };
        let layers = self.radii.len() - 1;

        let mut prisms = Vec::with_capacity(layers * 2 * self.slices as usize);
        let mut parallelepipeds =
            Vec::with_capacity(layers * (self.stacks as usize - 2) * self.slices as usize);
        let mut tetrahedra = Vec::new();

        // Innermost layer is the last one emitted.
        let region_of = |layer: usize| {
            if layer + 1 == layers {
                Region::Inner
            } else {
                Region::Outer
            }
        };

        for layer in 0..layers {
            let region = region_of(layer);
            for slice in 0..self.slices {
                let top = layout.top_prism(layer as u32, slice);
                let bottom = layout.bottom_prism(layer as u32, slice);
                for prism in [top, bottom] {
                    tetrahedra.extend(prism.tetrahedra(region));
                    prisms.push(prism);
                }
            }
            debug!(layer, ?region, "built cap prisms");
        }

        for layer in 0..layers {
            let region = region_of(layer);
            for band in 0..self.stacks - 2 {
                for slice in 0..self.slices {
                    let cell = layout.band_cell(layer as u32, band, slice);
                    tetrahedra.extend(cell.tetrahedra(region));
                    parallelepipeds.push(cell);
                }
            }
        }

        info!(
            points = points.len(),
            layers,
            prisms = prisms.len(),
            parallelepipeds = parallelepipeds.len(),
            tetrahedra = tetrahedra.len(),
            "built shell mesh"
        );

        Ok(ShellMesh {
            points,
            prisms,
            parallelepipeds,
            tetrahedra,
            sphere_size: layout.sphere_size as usize,
            layers,
        })
    }
}

/// Index arithmetic over the stacked sphere point layout.
struct Layout {
    slices: u32,
    stacks: u32,
    sphere_size: u32,
}

impl Layout {
    fn north(&self, sphere: u32) -> u32 {
        sphere * self.sphere_size
    }

    fn south(&self, sphere: u32) -> u32 {
        (sphere + 1) * self.sphere_size - 1
    }

    fn ring(&self, sphere: u32, ring: u32, slice: u32) -> u32 {
        sphere * self.sphere_size + ring * self.slices + slice % self.slices + 1
    }

    /// Nodes `0..3` on the outer sphere, `3..6` on the inner one.
    fn top_prism(&self, layer: u32, slice: u32) -> Prism {
        let (outer, inner) = (layer, layer + 1);
        Prism([
            self.north(outer),
            self.ring(outer, 0, slice),
            self.ring(outer, 0, slice + 1),
            self.north(inner),
            self.ring(inner, 0, slice),
            self.ring(inner, 0, slice + 1),
        ])
    }

    /// Nodes `0..3` on the inner sphere, `3..6` on the outer one.
    fn bottom_prism(&self, layer: u32, slice: u32) -> Prism {
        let (outer, inner) = (layer, layer + 1);
        let last = self.stacks - 2;
        Prism([
            self.south(inner),
            self.ring(inner, last, slice),
            self.ring(inner, last, slice + 1),
            self.south(outer),
            self.ring(outer, last, slice),
            self.ring(outer, last, slice + 1),
        ])
    }

    /// Nodes `0..4` on ring `band + 1`, `4..8` on ring `band`. Within each
    /// half the outer sphere comes first; even nodes sit at `slice`, odd
    /// nodes at `slice + 1`.
    fn band_cell(&self, layer: u32, band: u32, slice: u32) -> Parallelepiped {
        let (outer, inner) = (layer, layer + 1);
        let (upper, lower) = (band, band + 1);
        Parallelepiped([
            self.ring(outer, lower, slice),
            self.ring(outer, lower, slice + 1),
            self.ring(inner, lower, slice),
            self.ring(inner, lower, slice + 1),
            self.ring(outer, upper, slice),
            self.ring(outer, upper, slice + 1),
            self.ring(inner, upper, slice),
            self.ring(inner, upper, slice + 1),
        ])
    }
}

/// Volume mesh of concentric spherical shells.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellMesh {
    points: Vec<DVec3>,
    prisms: Vec<Prism>,
    parallelepipeds: Vec<Parallelepiped>,
    tetrahedra: Vec<Tetrahedron>,
    sphere_size: usize,
    layers: usize,
}

impl ShellMesh {
    /// All sphere points, outermost sphere first.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Total number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Points of one sphere, `0` being the outermost.
    pub fn sphere(&self, index: usize) -> Option<&[DVec3]> {
        let start = index.checked_mul(self.sphere_size)?;
        self.points.get(start..start + self.sphere_size)
    }

    /// Number of points on each sphere.
    pub fn sphere_size(&self) -> usize {
        self.sphere_size
    }

    /// Number of layers between neighbouring spheres.
    pub fn layer_count(&self) -> usize {
        self.layers
    }

    /// Cap prisms, two per slice per layer.
    pub fn prisms(&self) -> &[Prism] {
        &self.prisms
    }

    /// Band cells.
    pub fn parallelepipeds(&self) -> &[Parallelepiped] {
        &self.parallelepipeds
    }

    /// Tetrahedral decomposition of every prism and band cell.
    pub fn tetrahedra(&self) -> &[Tetrahedron] {
        &self.tetrahedra
    }
}

#[cfg(test)]
mod tests;
