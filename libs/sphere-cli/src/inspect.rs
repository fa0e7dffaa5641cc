//! Inspect command - validate element files and print a summary

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use mesh_io::{DiskFilesystem, FileSystem, MeshStore, Record};
use sphere_mesh::{Cell, MeshSummary, Parallelepiped, Prism, Tetrahedron};
use std::path::PathBuf;

/// Element file to inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ElementKind {
    Tetrahedra,
    Prisms,
    Parallelepipeds,
    Triangles,
    Quads,
}

/// Arguments for the inspect command
#[derive(Args)]
pub struct InspectArgs {
    /// Directory holding `points` and the element file
    #[arg(short, long)]
    pub dir: PathBuf,

    /// Element file to check against the points
    #[arg(short, long, value_enum)]
    pub kind: ElementKind,
}

fn summarize<R: Record + Cell, F: FileSystem>(store: &MeshStore<F>) -> Result<MeshSummary> {
    let (points, cells) = store
        .load_mesh::<R>()
        .with_context(|| format!("Invalid mesh in {}", store.root().display()))?;
    Ok(MeshSummary::collect(&points, &cells)?)
}

/// Loads and summarises one element file.
pub fn inspect<F: FileSystem>(store: &MeshStore<F>, kind: ElementKind) -> Result<MeshSummary> {
    match kind {
        ElementKind::Tetrahedra => summarize::<Tetrahedron, _>(store),
        ElementKind::Prisms => summarize::<Prism, _>(store),
        ElementKind::Parallelepipeds => summarize::<Parallelepiped, _>(store),
        ElementKind::Triangles => summarize::<[u32; 3], _>(store),
        ElementKind::Quads => summarize::<[u32; 4], _>(store),
    }
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    let store = MeshStore::new(DiskFilesystem, &args.dir);
    let summary = inspect(&store, args.kind)?;
    println!("{summary}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_io::InMemoryFilesystem;
    use sphere_mesh::{Region, ShellParams};

    fn shell_store() -> MeshStore<InMemoryFilesystem> {
        let mesh = ShellParams::new(4, 3, vec![1.0, 2.0, 3.0]).build().unwrap();
        let mut store = MeshStore::new(InMemoryFilesystem::default(), "mesh");
        store.save_shell_mesh(&mesh).unwrap();
        store
    }

    #[test]
    fn test_inspect_tetrahedra() {
        let summary = inspect(&shell_store(), ElementKind::Tetrahedra).unwrap();
        assert_eq!(summary.vertex_count, 30);
        assert_eq!(summary.element_count, 96);
        assert_eq!(summary.face_count, 96 * 4);
        assert_eq!(summary.regions[&Region::Inner], 48);
        assert_eq!(summary.regions[&Region::Outer], 48);
    }

    #[test]
    fn test_inspect_prisms() {
        let summary = inspect(&shell_store(), ElementKind::Prisms).unwrap();
        assert_eq!(summary.element_count, 16);
        assert_eq!(summary.face_count, 16 * 3);
        assert!(summary.regions.is_empty());
    }

    #[test]
    fn test_inspect_missing_file() {
        assert!(inspect(&shell_store(), ElementKind::Quads).is_err());
    }
}
