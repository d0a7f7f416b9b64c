//! # Mesh Loading
//!
//! Reads triangle soups from disk.
//!
//! ## Formats
//!
//! - **Binary STL**: already a soup; each facet normal is copied to its three
//!   corners (recomputed from the winding when the file stores zero)
//! - **JSON soup**: `{ "name", "positions": [[x, y, z], ...], "normals": [...] }`,
//!   normals optional

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::error::LoadError;
use crate::soup::{facet_normal, TriangleSoup};

const STL_HEADER_LEN: usize = 80;
const STL_FACET_LEN: usize = 50;

/// Loads a soup, choosing the parser from the file extension.
///
/// The mesh is named after the file stem unless the document names it.
pub fn load_mesh(path: &Path) -> Result<TriangleSoup, LoadError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "stl" => Ok(parse_binary_stl(&fs::read(path)?)?.with_name(stem)),
        "json" => {
            let mut document: SoupDocument = serde_json::from_str(&fs::read_to_string(path)?)?;
            let name = document.name.take().unwrap_or(stem);
            Ok(soup_from_document(document)?.with_name(name))
        }
        other => Err(LoadError::UnsupportedFormat(format!(
            "unknown extension '{other}'"
        ))),
    }
}

/// Parses a binary STL file into a soup.
pub fn parse_binary_stl(data: &[u8]) -> Result<TriangleSoup, LoadError> {
    if data.len() < STL_HEADER_LEN + 4 {
        return Err(LoadError::TruncatedStl {
            expected: STL_HEADER_LEN + 4,
            found: data.len(),
        });
    }

    let triangle_count = read_u32(data, STL_HEADER_LEN) as usize;
    let expected = triangle_count
        .saturating_mul(STL_FACET_LEN)
        .saturating_add(STL_HEADER_LEN + 4);
    if data.len() < expected {
        if data.starts_with(b"solid") {
            return Err(LoadError::UnsupportedFormat("ASCII STL".to_string()));
        }
        return Err(LoadError::TruncatedStl {
            expected,
            found: data.len(),
        });
    }

    let mut positions = Vec::with_capacity(triangle_count * 3);
    let mut normals = Vec::with_capacity(triangle_count * 3);

    for facet in data[STL_HEADER_LEN + 4..expected].chunks_exact(STL_FACET_LEN) {
        let stored = read_vec3(facet, 0);
        let corners = [read_vec3(facet, 12), read_vec3(facet, 24), read_vec3(facet, 36)];
        // Trailing 2-byte attribute count is ignored
        let normal = if stored == Vec3::ZERO {
            facet_normal(corners[0], corners[1], corners[2])
        } else {
            stored
        };

        positions.extend(corners);
        normals.extend([normal; 3]);
    }

    Ok(TriangleSoup::new(positions, normals)?)
}

#[derive(Debug, Deserialize)]
struct SoupDocument {
    #[serde(default)]
    name: Option<String>,
    positions: Vec<[f32; 3]>,
    #[serde(default)]
    normals: Option<Vec<[f32; 3]>>,
}

/// Parses a JSON soup document.
///
/// Missing normals are filled with facet normals.
pub fn parse_json_soup(source: &str) -> Result<TriangleSoup, LoadError> {
    soup_from_document(serde_json::from_str(source)?)
}

fn soup_from_document(document: SoupDocument) -> Result<TriangleSoup, LoadError> {
    let positions: Vec<Vec3> = document.positions.into_iter().map(Vec3::from).collect();

    let normals = match document.normals {
        Some(normals) => normals.into_iter().map(Vec3::from).collect(),
        None => positions
            .chunks(3)
            .flat_map(|tri| match tri {
                [a, b, c] => [facet_normal(*a, *b, *c); 3],
                // Partial triangle; TriangleSoup::new rejects it below
                _ => [Vec3::ZERO; 3],
            })
            .take(positions.len())
            .collect(),
    };

    let soup = TriangleSoup::new(positions, normals)?;
    Ok(match document.name {
        Some(name) => soup.with_name(name),
        None => soup,
    })
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

fn read_f32(data: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

fn read_vec3(data: &[u8], offset: usize) -> Vec3 {
    Vec3::new(
        read_f32(data, offset),
        read_f32(data, offset + 4),
        read_f32(data, offset + 8),
    )
}
