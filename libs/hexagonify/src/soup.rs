//! # Triangle Soup
//!
//! Unindexed triangle mesh: vertex `i` belongs to triangle `i / 3`, and
//! neighbouring triangles carry their own copies of shared corners.

use config::constants::DEFAULT_MESH_NAME;
use glam::Vec3;

use crate::error::HexError;

/// A triangle soup with per-vertex normals and an optional UV channel.
///
/// Construction validates the layout, so every accessor can index freely.
///
/// # Example
///
/// ```rust
/// use hexagonify::TriangleSoup;
/// use glam::Vec3;
///
/// let soup = TriangleSoup::new(
///     vec![Vec3::ZERO, Vec3::X, Vec3::Y],
///     vec![Vec3::Z; 3],
/// ).unwrap();
/// assert_eq!(soup.triangle_count(), 1);
/// assert_eq!(soup.triangle(0), [0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct TriangleSoup {
    name: String,
    /// Vertex positions (3 per triangle)
    positions: Vec<Vec3>,
    /// Vertex normals, parallel to `positions`
    normals: Vec<Vec3>,
    /// Written-back `[cell id, outline]` pairs
    uvs: Option<Vec<[f32; 2]>>,
}

impl TriangleSoup {
    /// Creates a soup from parallel position and normal buffers.
    ///
    /// # Errors
    ///
    /// Fails when the buffers are empty, differ in length, do not hold whole
    /// triangles, or contain a non-finite position.
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>) -> Result<Self, HexError> {
        if positions.len() != normals.len() {
            return Err(HexError::length_mismatch(positions.len(), normals.len()));
        }
        if positions.is_empty() {
            return Err(HexError::EmptyMesh);
        }
        if positions.len() % 3 != 0 {
            return Err(HexError::not_triangulated(positions.len()));
        }
        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(HexError::NonFinitePosition { index });
        }

        Ok(Self {
            name: DEFAULT_MESH_NAME.to_string(),
            positions,
            normals,
            uvs: None,
        })
    }

    /// Creates a soup from flat `[x, y, z, x, y, z, ...]` buffers, the layout
    /// GPU vertex buffers use.
    pub fn from_flat(positions: &[f32], normals: &[f32]) -> Result<Self, HexError> {
        Self::new(unflatten(positions)?, unflatten(normals)?)
    }

    /// Sets the mesh name used for output file naming.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the mesh name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of vertex slots.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the position of a vertex slot.
    #[inline]
    pub fn position(&self, vertex: usize) -> Vec3 {
        self.positions[vertex]
    }

    /// Returns the normal of a vertex slot.
    #[inline]
    pub fn normal(&self, vertex: usize) -> Vec3 {
        self.normals[vertex]
    }

    /// Returns the vertex indices of a triangle.
    #[inline]
    pub fn triangle(&self, triangle: usize) -> [usize; 3] {
        let base = triangle * 3;
        [base, base + 1, base + 2]
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Writes the per-vertex `[cell id, outline]` channel back onto the mesh.
    pub fn set_uvs(&mut self, uvs: Vec<[f32; 2]>) -> Result<(), HexError> {
        if uvs.len() != self.positions.len() {
            return Err(HexError::UvLengthMismatch {
                count: uvs.len(),
                vertex_count: self.positions.len(),
            });
        }
        self.uvs = Some(uvs);
        Ok(())
    }

    /// Returns the UV channel, if one was written.
    pub fn uvs(&self) -> Option<&[[f32; 2]]> {
        self.uvs.as_deref()
    }
}

fn unflatten(values: &[f32]) -> Result<Vec<Vec3>, HexError> {
    if values.len() % 3 != 0 {
        return Err(HexError::MalformedBuffer { len: values.len() });
    }
    Ok(values
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}

/// Computes the unit normal of a triangle from its winding, or zero for a
/// degenerate triangle.
pub fn facet_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}
