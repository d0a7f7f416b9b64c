//! # Hexagonify Errors
//!
//! Error types for mesh validation, mesh loading and texture export.

use std::io;
use std::path::PathBuf;

use config::traversal::ConfigError;
use thiserror::Error;

/// Errors raised before or while setting up a traversal.
#[derive(Debug, Error)]
pub enum HexError {
    /// Mesh has no vertices
    #[error("Empty mesh: no vertices to traverse")]
    EmptyMesh,

    /// Position and normal buffers disagree in length
    #[error("Buffer length mismatch: {positions} positions vs {normals} normals")]
    LengthMismatch { positions: usize, normals: usize },

    /// Vertex count is not a multiple of 3
    #[error("Not a triangle soup: {count} vertices is not a multiple of 3")]
    NotTriangulated { count: usize },

    /// Flat float buffer cannot be split into xyz triples
    #[error("Malformed buffer: {len} floats is not a multiple of 3")]
    MalformedBuffer { len: usize },

    /// Position contains NaN or infinity
    #[error("Non-finite position at vertex {index}")]
    NonFinitePosition { index: usize },

    /// Seed edge refers to a vertex the mesh does not have
    #[error("Seed edge ({first}, {second}) out of range for {vertex_count} vertices")]
    SeedOutOfRange {
        first: usize,
        second: usize,
        vertex_count: usize,
    },

    /// UV channel written back with the wrong length
    #[error("UV channel has {count} entries, mesh has {vertex_count} vertices")]
    UvLengthMismatch { count: usize, vertex_count: usize },

    /// Invalid traversal settings
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl HexError {
    /// Creates a not-triangulated error for a vertex count.
    pub fn not_triangulated(count: usize) -> Self {
        Self::NotTriangulated { count }
    }

    /// Creates a length mismatch error.
    pub fn length_mismatch(positions: usize, normals: usize) -> Self {
        Self::LengthMismatch { positions, normals }
    }
}

/// Errors that can occur while reading a mesh from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON soup document failed to parse
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary STL shorter than its header claims
    #[error("Truncated STL: expected {expected} bytes, found {found}")]
    TruncatedStl { expected: usize, found: usize },

    /// File extension or content not understood
    #[error("Unsupported mesh format: {0}")]
    UnsupportedFormat(String),

    /// Loaded data does not form a valid triangle soup
    #[error("Invalid mesh: {0}")]
    Mesh(#[from] HexError),
}

/// Errors that can occur while persisting outputs.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Image encoding failed
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Sidecar serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Texel buffer does not fill a square image
    #[error("Texture size mismatch: {texels} texels for width {width}")]
    TextureSize { texels: usize, width: u32 },

    /// Output directory missing
    #[error("Output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
}
