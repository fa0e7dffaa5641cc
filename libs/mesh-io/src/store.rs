//! # Mesh Store
//!
//! Loads and saves a mesh as a directory of named text files through a
//! [`FileSystem`] adapter.

use crate::error::MeshIoError;
use crate::filesystem::FileSystem;
use crate::points::{format_points, parse_points};
use crate::records::{format_records, parse_records, Record};
use config::constants::POINTS_FILE;
use glam::DVec3;
use sphere_mesh::{check_indices, Cell, Parallelepiped, Prism, ShellMesh, Tetrahedron, UvSphere};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A directory of mesh files.
///
/// # Example
///
/// ```rust
/// use mesh_io::{InMemoryFilesystem, MeshStore};
/// use sphere_mesh::uv_sphere;
///
/// let mut store = MeshStore::new(InMemoryFilesystem::default(), "out");
/// store.save_uv_sphere(&uv_sphere(4, 3)).unwrap();
///
/// let (points, quads) = store.load_mesh::<[u32; 4]>().unwrap();
/// assert_eq!(points.len(), 10);
/// assert_eq!(quads.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct MeshStore<F> {
    fs: F,
    root: PathBuf,
}

impl<F: FileSystem> MeshStore<F> {
    /// Creates a store rooted at `root`.
    pub fn new(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    /// Directory holding the files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Underlying filesystem adapter.
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Loads the `points` file.
    pub fn load_points(&self) -> Result<Vec<DVec3>, MeshIoError> {
        let path = self.path(POINTS_FILE);
        let points = parse_points(&self.fs.read_to_string(&path)?)?;
        debug!(path = %path.display(), count = points.len(), "loaded points");
        Ok(points)
    }

    /// Loads records from their default file.
    pub fn load<R: Record>(&self) -> Result<Vec<R>, MeshIoError> {
        self.load_from(R::FILE)
    }

    /// Loads records from a named file.
    pub fn load_from<R: Record>(&self, name: &str) -> Result<Vec<R>, MeshIoError> {
        let path = self.path(name);
        let records = parse_records(&self.fs.read_to_string(&path)?)?;
        debug!(path = %path.display(), count = records.len(), kind = R::FILE, "loaded records");
        Ok(records)
    }

    /// Loads points and one element file, checking every index.
    pub fn load_mesh<R: Record + Cell>(&self) -> Result<(Vec<DVec3>, Vec<R>), MeshIoError> {
        let points = self.load_points()?;
        let cells = self.load::<R>()?;
        check_indices(&cells, points.len())?;
        Ok((points, cells))
    }

    /// Saves the `points` file.
    pub fn save_points(&mut self, points: &[DVec3]) -> Result<(), MeshIoError> {
        let path = self.path(POINTS_FILE);
        self.fs.write(&path, &format_points(points))?;
        debug!(path = %path.display(), count = points.len(), "saved points");
        Ok(())
    }

    /// Saves records to their default file.
    pub fn save<R: Record>(&mut self, records: &[R]) -> Result<(), MeshIoError> {
        let path = self.path(R::FILE);
        self.fs.write(&path, &format_records(records))?;
        debug!(path = %path.display(), count = records.len(), "saved records");
        Ok(())
    }

    /// Saves a surface as `points`, `triangles` and `quads`.
    pub fn save_uv_sphere(&mut self, sphere: &UvSphere) -> Result<(), MeshIoError> {
        self.save_points(sphere.vertices())?;
        self.save(sphere.triangles())?;
        self.save(sphere.quads())
    }

    /// Saves a shell mesh as `points`, `tetrahedrons`, `prisms` and
    /// `parallelepipeds`.
    pub fn save_shell_mesh(&mut self, mesh: &ShellMesh) -> Result<(), MeshIoError> {
        self.save_points(mesh.points())?;
        self.save::<Tetrahedron>(mesh.tetrahedra())?;
        self.save::<Prism>(mesh.prisms())?;
        self.save::<Parallelepiped>(mesh.parallelepipeds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::InMemoryFilesystem;
    use sphere_mesh::{MeshError, ShellParams};

    #[test]
    fn test_save_shell_mesh_writes_all_files() {
        let mesh = ShellParams::new(4, 3, vec![1.0, 2.0]).build().unwrap();
        let mut store = MeshStore::new(InMemoryFilesystem::default(), "shell");
        store.save_shell_mesh(&mesh).unwrap();

        let fs = store.filesystem();
        for name in ["points", "tetrahedrons", "prisms", "parallelepipeds"] {
            assert!(fs.get(Path::new("shell").join(name)).is_some(), "{name}");
        }
        assert_eq!(
            fs.get("shell/prisms").unwrap().lines().next(),
            Some("0 1 2 10 11 12")
        );

        let (points, tets) = store.load_mesh::<Tetrahedron>().unwrap();
        assert_eq!(points, mesh.points());
        assert_eq!(tets, mesh.tetrahedra());
    }

    #[test]
    fn test_load_mesh_rejects_dangling_index() {
        let mut fs = InMemoryFilesystem::default();
        fs.insert("m/points", "0 0 0\n1 0 0\n0 1 0\n");
        fs.insert("m/triangles", "0 1 2\n0 2 3\n");
        let store = MeshStore::new(fs, "m");
        let err = store.load_mesh::<[u32; 3]>().unwrap_err();
        assert!(matches!(
            err,
            MeshIoError::Mesh(MeshError::IndexOutOfRange {
                element: 1,
                index: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_load_from_custom_name() {
        let mut fs = InMemoryFilesystem::default();
        fs.insert("m/elements", "0 1 2 3 1\n");
        let store = MeshStore::new(fs, "m");
        let tets = store.load_from::<Tetrahedron>("elements").unwrap();
        assert_eq!(tets.len(), 1);
    }

    #[test]
    fn test_missing_file_surfaces_path() {
        let store = MeshStore::new(InMemoryFilesystem::default(), "nowhere");
        let err = store.load_points().unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }
}
