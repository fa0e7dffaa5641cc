//! # Sphere Mesh
//!
//! Geometry for inspecting sphere meshes: UV sphere surfaces, concentric
//! shell volume meshes and the face tables that turn cells into polygons.
//!
//! ## Architecture
//!
//! ```text
//! params (JSON) → shells / uv_sphere → elements (cells, faces) → summary
//! ```
//!
//! Nothing here touches the filesystem or a display. File formats live in
//! `mesh-io`, and the `sphere-mesh` binary wires the two together.
//!
//! ## Usage
//!
//! ```rust
//! use sphere_mesh::uv_sphere;
//!
//! let sphere = uv_sphere(4, 3);
//! assert_eq!(sphere.vertex_count(), 10);
//! assert_eq!(sphere.triangle_count(), 8);
//! assert_eq!(sphere.quad_count(), 4);
//! ```

pub mod elements;
pub mod error;
pub mod params;
pub mod shells;
pub mod spherical;
pub mod summary;
pub mod uv_sphere;

pub use elements::{check_indices, Cell, Face, Parallelepiped, Prism, Region, Tetrahedron};
pub use error::MeshError;
pub use params::SphereMeshParameters;
pub use shells::{ShellMesh, ShellParams};
pub use spherical::SphericalPoint;
pub use summary::MeshSummary;
pub use uv_sphere::{generate, uv_sphere, UvSphere, UvSphereParams};
