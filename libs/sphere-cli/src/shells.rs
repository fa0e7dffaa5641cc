//! Shells command - write a concentric shell volume mesh

use anyhow::{Context, Result};
use clap::Args;
use config::constants::MeshConfig;
use glam::DVec3;
use mesh_io::{DiskFilesystem, MeshStore};
use sphere_mesh::{ShellParams, SphereMeshParameters};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::args::parse_center;

/// Arguments for the shells command
#[derive(Args)]
pub struct ShellsArgs {
    /// JSON parameter file with Center, Radius, SliceSplits and StackSplits
    #[arg(long, conflicts_with_all = ["slices", "stacks", "radii", "center"], required_unless_present = "radii")]
    pub params: Option<PathBuf>,

    /// Longitudinal divisions
    #[arg(long)]
    pub slices: Option<u32>,

    /// Latitudinal divisions
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Radii in increasing order, comma separated
    #[arg(long, value_delimiter = ',')]
    pub radii: Option<Vec<f64>>,

    /// Centre as x,y,z
    #[arg(long, value_parser = parse_center)]
    pub center: Option<DVec3>,

    /// Output directory
    #[arg(short, long)]
    pub out: PathBuf,
}

/// Reads a JSON parameter file.
pub fn load_params(path: &Path) -> Result<ShellParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let params: SphereMeshParameters = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(params.into())
}

impl ShellsArgs {
    /// Resolves the parameters from the file or the flags.
    pub fn params(&self, defaults: &MeshConfig) -> Result<ShellParams> {
        if let Some(path) = &self.params {
            return load_params(path);
        }
        let radii = self.radii.clone().unwrap_or_default();
        Ok(ShellParams::new(
            self.slices.unwrap_or(defaults.default_slices),
            self.stacks.unwrap_or(defaults.default_stacks),
            radii,
        )
        .with_center(self.center.unwrap_or(DVec3::ZERO)))
    }
}

/// Execute the shells command
pub fn execute(args: ShellsArgs) -> Result<()> {
    let params = args.params(&MeshConfig::default())?;
    let mesh = params.build().context("Invalid shell parameters")?;

    let mut store = MeshStore::new(DiskFilesystem, &args.out);
    store
        .save_shell_mesh(&mesh)
        .with_context(|| format!("Failed to write mesh to {}", args.out.display()))?;

    info!(
        out = %args.out.display(),
        points = mesh.point_count(),
        tetrahedra = mesh.tetrahedra().len(),
        "wrote shell mesh"
    );
    Ok(())
}
