//! `run` subcommand: extract cells and persist every output.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::constants::MAX_TRAVERSAL_STEPS;
use config::traversal::HexagonifyConfig;
use hexagonify::export::{save_textures, write_uv_sidecar, ExrDirectorySink};
use hexagonify::load::load_mesh;
use hexagonify::{hexagonify, TraversalStatus};
use log::debug;

use crate::parse_seed_edge;

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Input mesh: binary .stl or .json triangle soup
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory the textures and sidecar are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Maximum traversal steps before the result is reported as truncated
    #[arg(long, default_value_t = MAX_TRAVERSAL_STEPS)]
    pub max_steps: usize,

    /// Vertex indices of the starting edge, as `first,second`
    #[arg(long, default_value = "0,1", value_parser = parse_seed_edge)]
    pub seed_edge: (usize, usize),

    /// Mesh name used for output files (default: input file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Do not write the per-vertex UV sidecar
    #[arg(long)]
    pub skip_uvs: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = HexagonifyConfig::new(args.max_steps, args.seed_edge)
        .context("Invalid traversal settings")?;

    let mut soup = load_mesh(&args.input)
        .with_context(|| format!("Failed to load mesh {}", args.input.display()))?;
    if let Some(name) = args.name {
        soup = soup.with_name(name);
    }
    debug!(
        "Loaded '{}': {} triangles, settings {:?}",
        soup.name(),
        soup.triangle_count(),
        config
    );

    let output = hexagonify(&soup, &config).context("Traversal failed")?;
    output.apply_uvs(&mut soup)?;

    println!(
        "{}: {} cells, texture width {}, {} steps ({} discarded)",
        soup.name(),
        output.cells.cell_count(),
        output.hex_pos.width(),
        output.stats.steps,
        output.stats.discarded
    );
    if output.stats.status == TraversalStatus::Truncated {
        println!(
            "warning: step limit {} reached, cell coverage is partial",
            config.max_steps
        );
    }

    let sink = ExrDirectorySink::new(&args.output_dir, soup.name());
    let saved = save_textures(&sink, &output.hex_pos, &output.hex_normal);
    for path in [&saved.positions, &saved.normals].into_iter().flatten() {
        println!("Saved texture to: {}", path.display());
    }

    if !args.skip_uvs {
        let path = write_uv_sidecar(&args.output_dir, soup.name(), &output)
            .context("Failed to write UV sidecar")?;
        println!("Saved vertex channels to: {}", path.display());
    }

    if !saved.all_saved() {
        bail!("One or more cell textures could not be saved");
    }
    Ok(())
}
