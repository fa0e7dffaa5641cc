//! # UV Sphere
//!
//! Generates a sphere surface from slice (longitude) and stack (latitude)
//! counts: a pole vertex at each end, `stacks - 1` interior rings, triangle
//! fans for the polar caps and quads for the bands between rings.
//!
//! ## Vertex layout
//!
//! ```text
//! 0                       north pole (0, 0, R)
//! 1 .. slices             ring 0
//! ...                     ring r starts at r * slices + 1
//! len - 1                 south pole (0, 0, -R)
//! ```

use crate::elements::check_indices;
use crate::error::MeshError;
use crate::spherical::SphericalPoint;
use config::constants::{DEFAULT_RADIUS, MIN_SLICES, MIN_STACKS};
use glam::DVec3;
use std::f64::consts::PI;
use tracing::debug;

/// Surface mesh of a UV sphere.
///
/// Produced in one call and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UvSphere {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    quads: Vec<[u32; 4]>,
    slices: u32,
}

/// Generates a UV sphere of `radius` centred at the origin.
///
/// Never fails. With `n_stacks < 2` there are no interior rings and the
/// result holds only the two poles; with `n_slices == 0` it holds the poles
/// and no faces. Fewer than 3 slices give a degenerate but index-valid mesh.
///
/// Winding: top triangles are `[north, next, current]`, bottom triangles
/// `[south, current, next]` and quads `[upper, upper next, lower next, lower]`,
/// so every face turns the same way relative to the surface.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::generate;
///
/// let sphere = generate(8, 4, 2.5);
/// assert_eq!(sphere.vertex_count(), (4 - 1) * 8 + 2);
/// assert_eq!(sphere.triangle_count(), 2 * 8);
/// assert_eq!(sphere.quad_count(), (4 - 2) * 8);
/// ```
pub fn generate(n_slices: u32, n_stacks: u32, radius: f64) -> UvSphere {
    let rings = n_stacks.saturating_sub(1);
    let ring_vertices = if n_slices == 0 { 0 } else { rings };

    let mut vertices = Vec::with_capacity(ring_vertices as usize * n_slices as usize + 2);
    vertices.push(DVec3::new(0.0, 0.0, radius));

    for i in 0..ring_vertices {
        let phi = PI * f64::from(i + 1) / f64::from(n_stacks);
        for j in 0..n_slices {
            let theta = 2.0 * PI * f64::from(j) / f64::from(n_slices);
            vertices.push(SphericalPoint::new(radius, theta, phi).to_cartesian(DVec3::ZERO));
        }
    }

    vertices.push(DVec3::new(0.0, 0.0, -radius));

    let mut triangles = Vec::new();
    let mut quads = Vec::new();

    if ring_vertices > 0 {
        let south = (vertices.len() - 1) as u32;
        let last_ring = ring_start(rings - 1, n_slices);
        triangles.reserve(2 * n_slices as usize);

        for i in 0..n_slices {
            let next = (i + 1) % n_slices;
            triangles.push([0, next + 1, i + 1]);
            triangles.push([south, last_ring + i, last_ring + next]);
        }

        quads.reserve((rings - 1) as usize * n_slices as usize);
        for j in 0..rings - 1 {
            let upper = ring_start(j, n_slices);
            let lower = ring_start(j + 1, n_slices);
            for i in 0..n_slices {
                let next = (i + 1) % n_slices;
                quads.push([upper + i, upper + next, lower + next, lower + i]);
            }
        }
    }

    UvSphere {
        vertices,
        triangles,
        quads,
        slices: n_slices,
    }
}

/// Generates a UV sphere with the default radius.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::uv_sphere;
/// use glam::DVec3;
///
/// let sphere = uv_sphere(4, 3);
/// assert_eq!(sphere.north_pole(), DVec3::new(0.0, 0.0, 10.0));
/// assert_eq!(sphere.south_pole(), DVec3::new(0.0, 0.0, -10.0));
/// ```
pub fn uv_sphere(n_slices: u32, n_stacks: u32) -> UvSphere {
    generate(n_slices, n_stacks, DEFAULT_RADIUS)
}

/// Index of the first vertex of `ring`.
#[inline]
fn ring_start(ring: u32, slices: u32) -> u32 {
    ring * slices + 1
}

impl UvSphere {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of polar cap triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of body band quads.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Number of interior rings.
    pub fn ring_count(&self) -> usize {
        if self.slices == 0 {
            0
        } else {
            (self.vertices.len() - 2) / self.slices as usize
        }
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the cap triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns a reference to the band quads.
    #[inline]
    pub fn quads(&self) -> &[[u32; 4]] {
        &self.quads
    }

    /// First vertex.
    pub fn north_pole(&self) -> DVec3 {
        self.vertices[0]
    }

    /// Last vertex.
    pub fn south_pole(&self) -> DVec3 {
        self.vertices[self.vertices.len() - 1]
    }

    /// Vertices of interior ring `ring`, or `None` past the last ring.
    pub fn ring(&self, ring: usize) -> Option<&[DVec3]> {
        if ring >= self.ring_count() {
            return None;
        }
        let slices = self.slices as usize;
        let start = ring * slices + 1;
        Some(&self.vertices[start..start + slices])
    }

    /// Splits each quad into two triangles and appends them to the caps.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut out = Vec::with_capacity(self.triangles.len() + 2 * self.quads.len());
        out.extend_from_slice(&self.triangles);
        for &[a, b, c, d] in &self.quads {
            out.push([a, b, c]);
            out.push([a, c, d]);
        }
        out
    }

    /// Computes the axis-aligned bounding box as `(min, max)`.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let first = self.vertices[0];
        self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Checks that every face references an existing vertex.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_indices(&self.triangles, self.vertices.len())?;
        check_indices(&self.quads, self.vertices.len())
    }

    /// Consumes the mesh, returning `(vertices, triangles, quads)`.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 3]>, Vec<[u32; 4]>) {
        (self.vertices, self.triangles, self.quads)
    }
}

/// Validated UV sphere parameters with an explicit radius and centre.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::UvSphereParams;
/// use glam::DVec3;
///
/// let params = UvSphereParams::new(6, 4).with_radius(3.0).with_center(DVec3::X);
/// let sphere = params.build().unwrap();
/// assert_eq!(sphere.north_pole(), DVec3::new(1.0, 0.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvSphereParams {
    /// Longitudinal divisions
    pub slices: u32,
    /// Latitudinal divisions
    pub stacks: u32,
    /// Sphere radius
    pub radius: f64,
    /// Centre offset applied to every vertex
    pub center: DVec3,
}

impl UvSphereParams {
    /// Creates parameters with the default radius at the origin.
    pub fn new(slices: u32, stacks: u32) -> Self {
        Self {
            slices,
            stacks,
            radius: DEFAULT_RADIUS,
            center: DVec3::ZERO,
        }
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the centre.
    pub fn with_center(mut self, center: DVec3) -> Self {
        self.center = center;
        self
    }

    /// Rejects parameters that would produce a degenerate sphere.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.slices < MIN_SLICES {
            return Err(MeshError::degenerate(format!(
                "Sphere slices must be at least {MIN_SLICES}: {}",
                self.slices
            )));
        }
        if self.stacks < MIN_STACKS {
            return Err(MeshError::degenerate(format!(
                "Sphere stacks must be at least {MIN_STACKS}: {}",
                self.stacks
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "Sphere radius must be positive: {}",
                self.radius
            )));
        }
        check_vertex_budget(self.slices, self.stacks, 1)
    }

    /// Validates and generates the sphere.
    pub fn build(&self) -> Result<UvSphere, MeshError> {
        self.validate()?;
        let mut sphere = generate(self.slices, self.stacks, self.radius);
        if self.center != DVec3::ZERO {
            sphere.translate(self.center);
        }
        debug!(
            slices = self.slices,
            stacks = self.stacks,
            radius = self.radius,
            vertices = sphere.vertex_count(),
            triangles = sphere.triangle_count(),
            quads = sphere.quad_count(),
            "generated uv sphere"
        );
        Ok(sphere)
    }
}

/// Fails when `spheres` surfaces of this tessellation overflow `u32` indices.
pub(crate) fn check_vertex_budget(slices: u32, stacks: u32, spheres: usize) -> Result<(), MeshError> {
    let per_sphere = (stacks as usize - 1) * slices as usize + 2;
    let count = per_sphere.saturating_mul(spheres);
    let max = u32::MAX as usize;
    if count > max {
        return Err(MeshError::TooManyVertices { count, max });
    }
    Ok(())
}
