//! # Region Growing Traversal
//!
//! Breadth-first partition of a triangle soup into hexagonal cells.
//!
//! ## Algorithm Overview
//!
//! 1. Seed the queue with one edge of triangle 0
//! 2. Pop an edge and find the vertex opposite it (see [`find_opposite_vertex`])
//! 3. An unclaimed opposite vertex becomes the center of the next cell
//! 4. Claim every triangle around that center and queue their outer edges
//! 5. Repeat until the queue drains or the step budget runs out
//!
//! Cell ids start at 1 and follow discovery order. Slot 0 of the id-indexed
//! center tables is never written.

mod finalizer;
mod matcher;

#[cfg(test)]
mod tests;

pub use matcher::find_opposite_vertex;

use std::collections::VecDeque;

use config::constants::{NO_OUTLINE_FLAG, UNASSIGNED_CELL_ID};
use config::traversal::HexagonifyConfig;
use glam::Vec3;
use log::{debug, warn};
use serde::Serialize;

use crate::error::HexError;
use crate::position_index::{ClosedSet, PositionIndex};
use crate::soup::TriangleSoup;

/// One side of a triangle waiting to be expanded.
///
/// Only the endpoint positions and the triangle of `from` matter to the
/// matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEdge {
    pub from: usize,
    pub to: usize,
}

impl SearchEdge {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Triangle owning the first endpoint.
    #[inline]
    pub fn origin_triangle(&self) -> usize {
        self.from / 3
    }
}

/// How a traversal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalStatus {
    /// Queue drained
    Completed,
    /// Step budget exhausted with edges still queued; results are partial
    Truncated,
}

/// Counters collected over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Edges popped from the queue
    pub steps: usize,
    /// Popped edges that produced no cell
    pub discarded: usize,
    /// Cells discovered
    pub cells: usize,
    pub status: TraversalStatus,
}

/// Per-vertex outputs, written back onto the mesh as texture coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexChannels {
    /// Owning cell id, or `UNASSIGNED_CELL_ID`
    pub cell_ids: Vec<f32>,
    /// `OUTLINE_FLAG` on slots that sit on their cell's center
    pub outline: Vec<f32>,
}

impl VertexChannels {
    fn new(vertex_count: usize) -> Self {
        Self {
            cell_ids: vec![UNASSIGNED_CELL_ID; vertex_count],
            outline: vec![NO_OUTLINE_FLAG; vertex_count],
        }
    }

    /// Interleaves the channels as `[cell id, outline]` pairs.
    pub fn uvs(&self) -> Vec<[f32; 2]> {
        self.cell_ids
            .iter()
            .zip(&self.outline)
            .map(|(id, outline)| [*id, *outline])
            .collect()
    }

    /// Number of vertex slots no cell claimed.
    pub fn unassigned_count(&self) -> usize {
        self.cell_ids.iter().filter(|id| **id < 0.0).count()
    }
}

/// Cell centers and normals indexed by cell id.
///
/// Index 0 is a zero placeholder; cell `k` lives at index `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct CellTable {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl Default for CellTable {
    fn default() -> Self {
        Self {
            positions: vec![Vec3::ZERO],
            normals: vec![Vec3::ZERO],
        }
    }
}

impl CellTable {
    /// Appends a cell and returns its id.
    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        self.positions.push(position);
        self.normals.push(normal);
        (self.positions.len() - 1) as u32
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.positions.len() - 1
    }

    /// Center position of cell `id`.
    pub fn position(&self, id: u32) -> Option<Vec3> {
        (id != 0).then(|| self.positions.get(id as usize).copied()).flatten()
    }

    /// Center normal of cell `id`.
    pub fn normal(&self, id: u32) -> Option<Vec3> {
        (id != 0).then(|| self.normals.get(id as usize).copied()).flatten()
    }

    /// Id-indexed centers, slot 0 included.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Id-indexed normals, slot 0 included.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }
}

/// Everything one traversal produces.
#[derive(Debug, Clone)]
pub struct Hexagonification {
    pub channels: VertexChannels,
    pub cells: CellTable,
    pub stats: TraversalStats,
}

/// Outcome of a single queue pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The edge led to a new cell with this id
    Cell(u32),
    /// The edge found no unclaimed opposite vertex
    Discarded,
}

/// Working state of one region-growing run.
///
/// Owns the closed set, the queue and the outputs; all of it is released
/// when the traversal is consumed by [`Traversal::finish`] or dropped.
///
/// # Example
///
/// ```rust
/// use config::traversal::HexagonifyConfig;
/// use hexagonify::traversal::Traversal;
/// use hexagonify::TriangleSoup;
/// use glam::Vec3;
///
/// let soup = TriangleSoup::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![Vec3::Z; 3]).unwrap();
/// let result = Traversal::new(&soup, &HexagonifyConfig::default()).unwrap().run();
/// assert_eq!(result.cells.cell_count(), 1);
/// ```
#[derive(Debug)]
pub struct Traversal<'a> {
    soup: &'a TriangleSoup,
    index: PositionIndex,
    closed: ClosedSet,
    queue: VecDeque<SearchEdge>,
    channels: VertexChannels,
    cells: CellTable,
    steps: usize,
    discarded: usize,
    max_steps: usize,
}

impl<'a> Traversal<'a> {
    /// Prepares a traversal over `soup`, seeded from `config.seed_edge`.
    ///
    /// # Errors
    ///
    /// Returns `HexError::SeedOutOfRange` when the seed edge does not exist
    /// in the mesh.
    pub fn new(soup: &'a TriangleSoup, config: &HexagonifyConfig) -> Result<Self, HexError> {
        let (first, second) = config.seed_edge;
        let vertex_count = soup.vertex_count();
        if first >= vertex_count || second >= vertex_count {
            return Err(HexError::SeedOutOfRange {
                first,
                second,
                vertex_count,
            });
        }

        let mut queue = VecDeque::new();
        queue.push_back(SearchEdge::new(first, second));

        Ok(Self {
            soup,
            index: PositionIndex::build(soup),
            closed: ClosedSet::new(),
            queue,
            channels: VertexChannels::new(vertex_count),
            cells: CellTable::default(),
            steps: 0,
            discarded: 0,
            max_steps: config.max_steps,
        })
    }

    /// Pops one edge and expands it.
    ///
    /// Returns `None` once the queue is empty or the step budget is spent.
    pub fn step(&mut self) -> Option<Step> {
        if self.steps >= self.max_steps {
            return None;
        }
        let edge = self.queue.pop_front()?;
        self.steps += 1;

        let Some(center_vertex) = self.opposite_vertex(edge) else {
            self.discarded += 1;
            return Some(Step::Discarded);
        };

        let center = self.soup.position(center_vertex);
        self.closed.insert(center);
        let cell_id = self
            .cells
            .push(center, self.soup.normal(center_vertex));
        self.finalize_cell(center, cell_id);

        Some(Step::Cell(cell_id))
    }

    /// Runs the matcher for `edge` against the current closed set.
    pub fn opposite_vertex(&self, edge: SearchEdge) -> Option<usize> {
        find_opposite_vertex(self.soup, &self.index, &self.closed, edge)
    }

    /// Steps until the queue drains or the budget runs out, then returns the
    /// outputs.
    pub fn run(mut self) -> Hexagonification {
        while self.step().is_some() {}
        self.finish()
    }

    /// Consumes the traversal and returns its outputs as they stand.
    pub fn finish(self) -> Hexagonification {
        let stats = self.stats();
        debug!(
            "Traversal of '{}' took {} steps ({} discarded), {} cells, {} positions claimed",
            self.soup.name(),
            stats.steps,
            stats.discarded,
            stats.cells,
            self.closed.len()
        );
        if stats.status == TraversalStatus::Truncated {
            warn!(
                "Traversal of '{}' hit the {} step limit with {} edges queued; cell coverage is partial",
                self.soup.name(),
                self.max_steps,
                self.queue.len()
            );
        }

        Hexagonification {
            channels: self.channels,
            cells: self.cells,
            stats,
        }
    }

    /// Counters so far. The status reads `Truncated` while work remains
    /// queued.
    pub fn stats(&self) -> TraversalStats {
        TraversalStats {
            steps: self.steps,
            discarded: self.discarded,
            cells: self.cells.cell_count(),
            status: if self.queue.is_empty() {
                TraversalStatus::Completed
            } else {
                TraversalStatus::Truncated
            },
        }
    }

    pub fn closed(&self) -> &ClosedSet {
        &self.closed
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}
