//! `inspect` subcommand: traversal statistics without writing files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::MAX_TRAVERSAL_STEPS;
use config::traversal::HexagonifyConfig;
use hexagonify::load::load_mesh;
use hexagonify::position_index::PositionIndex;
use hexagonify::{hexagonify, HexagonifyOutput, TriangleSoup};

use crate::parse_seed_edge;

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Input mesh: binary .stl or .json triangle soup
    #[arg(short, long)]
    pub input: PathBuf,

    /// Maximum traversal steps
    #[arg(long, default_value_t = MAX_TRAVERSAL_STEPS)]
    pub max_steps: usize,

    /// Vertex indices of the starting edge, as `first,second`
    #[arg(long, default_value = "0,1", value_parser = parse_seed_edge)]
    pub seed_edge: (usize, usize),
}

pub fn inspect(args: InspectArgs) -> Result<()> {
    let config = HexagonifyConfig::new(args.max_steps, args.seed_edge)
        .context("Invalid traversal settings")?;
    let soup = load_mesh(&args.input)
        .with_context(|| format!("Failed to load mesh {}", args.input.display()))?;
    let output = hexagonify(&soup, &config).context("Traversal failed")?;

    print!("{}", summary(&soup, &output));
    Ok(())
}

fn summary(soup: &TriangleSoup, output: &HexagonifyOutput) -> String {
    let distinct = PositionIndex::build(soup).distinct_positions();
    let outlined = output
        .channels
        .outline
        .iter()
        .filter(|flag| **flag > 0.0)
        .count();

    let mut text = String::new();
    text.push_str(&format!("=== {} ===\n", soup.name()));
    text.push_str(&format!("Triangles:          {}\n", soup.triangle_count()));
    text.push_str(&format!("Distinct positions: {}\n", distinct));
    text.push_str(&format!("Cells:              {}\n", output.cells.cell_count()));
    text.push_str(&format!("Texture width:      {}\n", output.hex_pos.width()));
    text.push_str(&format!("Outline slots:      {}\n", outlined));
    text.push_str(&format!(
        "Unassigned slots:   {}\n",
        output.channels.unassigned_count()
    ));
    text.push_str(&format!(
        "Steps:              {} ({} discarded)\n",
        output.stats.steps, output.stats.discarded
    ));
    text.push_str(&format!("Status:             {:?}\n", output.stats.status));
    text
}
