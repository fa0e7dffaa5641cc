//! Sphere Mesh CLI - generate and inspect sphere meshes
//!
//! # Commands
//!
//! - `sphere-mesh uv` - Write a UV sphere surface (`points`, `triangles`, `quads`)
//! - `sphere-mesh shells` - Write a concentric shell volume mesh
//! - `sphere-mesh inspect` - Validate an element file against `points` and print a summary
//!
//! # Usage
//!
//! ```bash
//! sphere-mesh uv --slices 16 --stacks 8 --radius 2 --out sphere
//! sphere-mesh shells --params params.json --out shell
//! sphere-mesh shells --slices 8 --stacks 6 --radii 1,2,4 --out shell
//! sphere-mesh inspect --dir shell --kind tetrahedra
//! ```
//!
//! Logging follows `RUST_LOG`; `--verbose` raises the default level to `debug`.

mod args;
mod inspect;
mod shells;
mod uv;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Sphere Mesh CLI - generate and inspect sphere meshes
#[derive(Parser)]
#[command(name = "sphere-mesh")]
#[command(about = "Generate and inspect UV sphere and shell meshes")]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a UV sphere surface mesh
    Uv(uv::UvArgs),

    /// Write a concentric shell volume mesh
    Shells(shells::ShellsArgs),

    /// Validate and summarise mesh files
    Inspect(inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Uv(args) => uv::execute(args),
        Commands::Shells(args) => shells::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
