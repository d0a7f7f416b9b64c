//! # Position Index
//!
//! Recovers connectivity of a triangle soup by exact coordinate equality.
//!
//! Shared corners in a soup are separate vertex slots with bit-identical
//! coordinates. Hashing positions once turns the per-edge linear scans into
//! lookups while keeping the ascending triangle order the traversal relies on.
//!
//! ## Example
//!
//! ```rust,ignore
//! let index = PositionIndex::build(&soup);
//! for &triangle in index.triangles_containing(soup.position(0)) {
//!     // ascending triangle indices
//! }
//! ```

use std::collections::{HashMap, HashSet};

use glam::Vec3;

use crate::soup::TriangleSoup;

/// Hashable identity of a position under `==` semantics.
///
/// `-0.0` and `0.0` compare equal as floats, so zeros are folded before
/// taking the bit pattern. NaN never reaches here; soups reject non-finite
/// positions on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([u32; 3]);

impl From<Vec3> for PositionKey {
    fn from(position: Vec3) -> Self {
        Self(position.to_array().map(|c| if c == 0.0 { 0 } else { c.to_bits() }))
    }
}

/// Maps each distinct position to the triangles that have a corner there.
#[derive(Debug, Default)]
pub struct PositionIndex {
    /// position -> ascending, deduplicated triangle indices
    triangles: HashMap<PositionKey, Vec<usize>>,
}

impl PositionIndex {
    /// Indexes every vertex slot of the soup.
    pub fn build(soup: &TriangleSoup) -> Self {
        let mut triangles: HashMap<PositionKey, Vec<usize>> = HashMap::new();

        for (vertex, position) in soup.positions().iter().enumerate() {
            let triangle = vertex / 3;
            let list = triangles.entry(PositionKey::from(*position)).or_default();
            // Slots are visited in order, so only the tail can repeat
            if list.last() != Some(&triangle) {
                list.push(triangle);
            }
        }

        Self { triangles }
    }

    /// Returns the triangles with a corner at `position`, in increasing order.
    pub fn triangles_containing(&self, position: Vec3) -> &[usize] {
        self.triangles
            .get(&PositionKey::from(position))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of distinct positions in the soup.
    pub fn distinct_positions(&self) -> usize {
        self.triangles.len()
    }
}

/// Positions already claimed by a cell.
///
/// Grows monotonically for the lifetime of one traversal.
#[derive(Debug, Default, Clone)]
pub struct ClosedSet {
    claimed: HashSet<PositionKey>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a position. Returns `false` if it was already claimed.
    pub fn insert(&mut self, position: Vec3) -> bool {
        self.claimed.insert(PositionKey::from(position))
    }

    pub fn contains(&self, position: Vec3) -> bool {
        self.claimed.contains(&PositionKey::from(position))
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
