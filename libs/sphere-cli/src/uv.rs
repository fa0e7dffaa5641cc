//! Uv command - write a UV sphere surface

use anyhow::{Context, Result};
use clap::Args;
use config::constants::MeshConfig;
use glam::DVec3;
use mesh_io::{DiskFilesystem, MeshStore};
use sphere_mesh::UvSphereParams;
use std::path::PathBuf;
use tracing::info;

use crate::args::parse_center;

/// Arguments for the uv command
#[derive(Args)]
pub struct UvArgs {
    /// Longitudinal divisions
    #[arg(long)]
    pub slices: Option<u32>,

    /// Latitudinal divisions
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Sphere radius
    #[arg(long)]
    pub radius: Option<f64>,

    /// Centre as x,y,z
    #[arg(long, value_parser = parse_center, default_value = "0,0,0")]
    pub center: DVec3,

    /// Output directory
    #[arg(short, long)]
    pub out: PathBuf,
}

impl UvArgs {
    /// Fills unset values from the defaults.
    pub fn params(&self, defaults: &MeshConfig) -> UvSphereParams {
        UvSphereParams::new(
            self.slices.unwrap_or(defaults.default_slices),
            self.stacks.unwrap_or(defaults.default_stacks),
        )
        .with_radius(self.radius.unwrap_or(defaults.default_radius))
        .with_center(self.center)
    }
}

/// Execute the uv command
pub fn execute(args: UvArgs) -> Result<()> {
    let params = args.params(&MeshConfig::default());
    let sphere = params.build().context("Invalid sphere parameters")?;

    let mut store = MeshStore::new(DiskFilesystem, &args.out);
    store
        .save_uv_sphere(&sphere)
        .with_context(|| format!("Failed to write mesh to {}", args.out.display()))?;

    info!(
        out = %args.out.display(),
        vertices = sphere.vertex_count(),
        triangles = sphere.triangle_count(),
        quads = sphere.quad_count(),
        "wrote uv sphere"
    );
    Ok(())
}
