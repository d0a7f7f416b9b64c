//! # Configuration Constants
//!
//! Centralized constants for the hexagonify pipeline. Traversal limits,
//! sentinel values written into mesh channels, texture layout values and
//! output naming are defined here.
//!
//! ## Categories
//!
//! - **Limits**: Safety bounds for the region-growing traversal
//! - **Vertex Channels**: Values written into the per-vertex UV channel
//! - **Textures**: Texel layout and shader binding names
//! - **Output Naming**: File suffixes for persisted textures

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of queue pops performed by one traversal.
///
/// Malformed meshes can keep feeding the search queue; the traversal stops
/// after this many steps and reports a truncated result.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TRAVERSAL_STEPS;
///
/// let requested: Option<usize> = None;
/// let steps = requested.unwrap_or(MAX_TRAVERSAL_STEPS);
/// assert_eq!(steps, 100_000);
/// ```
pub const MAX_TRAVERSAL_STEPS: usize = 100_000;

/// Vertex indices of the seed edge: the first two vertices of triangle 0.
pub const DEFAULT_SEED_EDGE: (usize, usize) = (0, 1);

// =============================================================================
// VERTEX CHANNEL CONSTANTS
// =============================================================================

/// Cell id written for vertices no cell has claimed.
///
/// # Example
///
/// ```rust
/// use config::constants::UNASSIGNED_CELL_ID;
///
/// let ids = vec![UNASSIGNED_CELL_ID; 6];
/// assert!(ids.iter().all(|id| *id < 0.0));
/// ```
pub const UNASSIGNED_CELL_ID: f32 = -1.0;

/// Outline channel value for vertex slots sitting on a cell center.
pub const OUTLINE_FLAG: f32 = 1.0;

/// Outline channel value for every other vertex slot.
pub const NO_OUTLINE_FLAG: f32 = 0.0;

// =============================================================================
// TEXTURE CONSTANTS
// =============================================================================

/// Alpha component written into every occupied texel.
pub const TEXEL_ALPHA: f32 = 1.0;

/// Shader binding name of the packed cell center texture.
pub const HEX_POS_TEXTURE: &str = "_HexPos";

/// Shader binding name of the packed cell normal texture.
pub const HEX_NORMAL_TEXTURE: &str = "_HexNormal";

// =============================================================================
// OUTPUT NAMING CONSTANTS
// =============================================================================

/// File suffix appended to the mesh name for the center texture.
pub const POSITIONS_FILE_SUFFIX: &str = "_HexPositions.exr";

/// File suffix appended to the mesh name for the normal texture.
pub const NORMALS_FILE_SUFFIX: &str = "_HexNormals.exr";

/// File suffix appended to the mesh name for the per-vertex UV sidecar.
pub const UVS_FILE_SUFFIX: &str = "_HexUVs.json";

/// Mesh name used when the input carries none.
pub const DEFAULT_MESH_NAME: &str = "mesh";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Builds the output file name for a mesh and a file suffix.
///
/// # Example
///
/// ```rust
/// use config::constants::{output_file_name, POSITIONS_FILE_SUFFIX};
///
/// assert_eq!(
///     output_file_name("terrain", POSITIONS_FILE_SUFFIX),
///     "terrain_HexPositions.exr"
/// );
/// assert_eq!(output_file_name("", POSITIONS_FILE_SUFFIX), "mesh_HexPositions.exr");
/// ```
pub fn output_file_name(mesh_name: &str, suffix: &str) -> String {
    let name = if mesh_name.is_empty() {
        DEFAULT_MESH_NAME
    } else {
        mesh_name
    };
    format!("{name}{suffix}")
}
