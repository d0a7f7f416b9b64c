//! # Hexagonify
//!
//! Partitions a triangle-soup mesh into hexagonal cells for the hex shader.
//! Every vertex slot gets a cell id and an outline flag, and every cell's
//! center position and normal are packed into square float textures.
//!
//! ## Architecture
//!
//! ```text
//! TriangleSoup → Traversal (matcher + finalizer) → VertexChannels + CellTable
//!                                                 → CellTexture × 2 → TextureSink
//! ```
//!
//! ## Algorithms
//!
//! - **Adjacency**: exact-coordinate position index over the soup
//! - **Region growing**: breadth-first search over triangle edges
//! - **Packing**: row-major into a power-of-two square
//!
//! ## Usage
//!
//! ```rust
//! use config::traversal::HexagonifyConfig;
//! use hexagonify::{hexagonify, TriangleSoup};
//! use glam::Vec3;
//!
//! let soup = TriangleSoup::new(
//!     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
//!     vec![Vec3::Z; 3],
//! ).unwrap();
//! let output = hexagonify(&soup, &HexagonifyConfig::default()).unwrap();
//! assert_eq!(output.cells.cell_count(), 1);
//! assert_eq!(output.hex_pos.width(), 1);
//! ```

pub mod error;
pub mod export;
pub mod load;
pub mod position_index;
pub mod soup;
pub mod texture;
pub mod traversal;

#[cfg(test)]
mod fixtures;

pub use error::{ExportError, HexError, LoadError};
pub use soup::TriangleSoup;
pub use texture::{CellTexture, TextureKind};
pub use traversal::{
    CellTable, Hexagonification, TraversalStats, TraversalStatus, VertexChannels,
};

use config::traversal::HexagonifyConfig;
use log::{debug, info};

use texture::texture_width;
use traversal::Traversal;

/// Traversal outputs plus the two packed textures.
#[derive(Debug, Clone)]
pub struct HexagonifyOutput {
    pub channels: VertexChannels,
    pub cells: CellTable,
    pub stats: TraversalStats,
    /// Cell centers, bound as `_HexPos`
    pub hex_pos: CellTexture,
    /// Cell normals, bound as `_HexNormal`
    pub hex_normal: CellTexture,
}

impl HexagonifyOutput {
    /// Writes the `[cell id, outline]` channel back onto `soup`.
    pub fn apply_uvs(&self, soup: &mut TriangleSoup) -> Result<(), HexError> {
        soup.set_uvs(self.channels.uvs())
    }

    /// Texture for a shader binding.
    pub fn texture(&self, kind: TextureKind) -> &CellTexture {
        match kind {
            TextureKind::Positions => &self.hex_pos,
            TextureKind::Normals => &self.hex_normal,
        }
    }
}

/// Runs the traversal over `soup` and packs the cell textures.
///
/// A truncated traversal still yields textures for the cells it found;
/// check `stats.status`.
///
/// # Errors
///
/// Fails only when the seed edge does not exist in the mesh.
pub fn hexagonify(
    soup: &TriangleSoup,
    config: &HexagonifyConfig,
) -> Result<HexagonifyOutput, HexError> {
    let Hexagonification {
        channels,
        cells,
        stats,
    } = Traversal::new(soup, config)?.run();

    let width = texture_width(cells.cell_count());
    info!(
        "amount hexagons: {} texture width: {}",
        cells.cell_count(),
        width
    );

    let hex_pos = CellTexture::pack(TextureKind::Positions, cells.positions());
    let hex_normal = CellTexture::pack(TextureKind::Normals, cells.normals());
    debug!(
        "First texels: {} = {:?}, {} = {:?}",
        TextureKind::Positions.binding_name(),
        hex_pos.pixel(0, 0),
        TextureKind::Normals.binding_name(),
        hex_normal.pixel(0, 0)
    );

    Ok(HexagonifyOutput {
        channels,
        cells,
        stats,
        hex_pos,
        hex_normal,
    })
}
