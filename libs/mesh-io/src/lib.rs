//! # Mesh I/O
//!
//! Whitespace-delimited text formats used to exchange sphere meshes with
//! plotting scripts.
//!
//! ## Formats
//!
//! ```text
//! points            x y z                 one vertex per line
//! triangles         a b c
//! quads             a b c d
//! prisms            6 indices
//! parallelepipeds   8 indices
//! tetrahedrons      a b c d [region]      region tag 0 or 1, default 1
//! ```
//!
//! Blank lines are skipped. Any other malformed line fails the whole read
//! with the file kind and the 1-based line number.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_io::{parse_points, parse_records};
//!
//! let points = parse_points("0 0 1\n1 0 0\n0 1 0\n").unwrap();
//! let triangles: Vec<[u32; 3]> = parse_records("0 1 2\n").unwrap();
//! assert_eq!(points.len(), 3);
//! assert_eq!(triangles, vec![[0, 1, 2]]);
//! ```

pub mod error;
pub mod filesystem;
pub mod points;
pub mod records;
pub mod store;

pub use error::MeshIoError;
pub use filesystem::{DiskFilesystem, FileSystem, FileSystemError, InMemoryFilesystem};
pub use points::{format_points, parse_points, read_points, write_points};
pub use records::{format_records, parse_records, read_records, write_records, Record};
pub use store::MeshStore;
