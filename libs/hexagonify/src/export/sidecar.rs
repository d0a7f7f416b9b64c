//! JSON sidecar carrying the per-vertex `[cell id, outline]` channel.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use config::constants::{output_file_name, UVS_FILE_SUFFIX};
use log::info;
use serde::Serialize;

use crate::error::ExportError;
use crate::traversal::TraversalStats;
use crate::HexagonifyOutput;

/// Serialized form of a run's per-vertex output.
#[derive(Debug, Serialize)]
pub struct UvSidecar<'a> {
    pub mesh: &'a str,
    pub cell_count: usize,
    pub texture_width: u32,
    pub stats: TraversalStats,
    /// `[cell id, outline]` per vertex slot, in mesh order
    pub uvs: Vec<[f32; 2]>,
}

impl<'a> UvSidecar<'a> {
    pub fn new(mesh: &'a str, output: &HexagonifyOutput) -> Self {
        Self {
            mesh,
            cell_count: output.cells.cell_count(),
            texture_width: output.hex_pos.width(),
            stats: output.stats,
            uvs: output.channels.uvs(),
        }
    }
}

/// Writes `<mesh name>_HexUVs.json` into `directory`.
pub fn write_uv_sidecar(
    directory: &Path,
    mesh_name: &str,
    output: &HexagonifyOutput,
) -> Result<PathBuf, ExportError> {
    if !directory.is_dir() {
        return Err(ExportError::MissingDirectory(directory.to_path_buf()));
    }

    let path = directory.join(output_file_name(mesh_name, UVS_FILE_SUFFIX));
    let writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(writer, &UvSidecar::new(mesh_name, output))?;

    info!("Saved vertex channels to: {}", path.display());
    Ok(path)
}
