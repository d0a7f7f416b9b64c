//! Hexagonify CLI - hexagonal cell extraction for triangle-soup meshes
//!
//! Provides subcommands for:
//! - `run`: Extract cells and write `_HexPos` / `_HexNormal` EXR textures
//!   plus the per-vertex UV sidecar
//! - `inspect`: Run the traversal and print statistics without writing files

use anyhow::Result;
use clap::{Parser, Subcommand};

mod inspect;
mod run;

#[derive(Parser, Debug)]
#[command(name = "hexagonify")]
#[command(about = "Partition triangle-soup meshes into hexagonal cells", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract cells and write the cell textures and UV sidecar
    Run(run::RunArgs),
    /// Print traversal statistics for a mesh
    Inspect(inspect::InspectArgs),
}

/// Parses a seed edge given as `first,second`.
pub(crate) fn parse_seed_edge(value: &str) -> Result<(usize, usize), String> {
    let (first, second) = value
        .split_once(',')
        .ok_or_else(|| format!("expected 'first,second', got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|err| format!("invalid vertex index '{part}': {err}"))
    };
    Ok((parse(first)?, parse(second)?))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run::run(args),
        Commands::Inspect(args) => inspect::inspect(args),
    }
}
