//! Claims the triangles around a newly found cell center.

use config::constants::OUTLINE_FLAG;
use glam::Vec3;

use super::{SearchEdge, Traversal};
use crate::position_index::PositionKey;

impl Traversal<'_> {
    /// Claims every triangle with a corner at `center` for cell `cell_id`.
    ///
    /// All three corners of each such triangle are closed and tagged with the
    /// id. Center corners get the outline flag; the remaining two corners form
    /// the next search edge. A triangle with a single non-center corner still
    /// enqueues an edge, with vertex 0 standing in for the missing end.
    pub(super) fn finalize_cell(&mut self, center: Vec3, cell_id: u32) {
        let center_key = PositionKey::from(center);
        let soup = self.soup;

        for &triangle in self.index.triangles_containing(center) {
            let corners = soup.triangle(triangle);
            let mut far = [0usize; 2];
            let mut far_count = 0;

            for vertex in corners {
                let position = soup.position(vertex);
                self.closed.insert(position);
                self.channels.cell_ids[vertex] = cell_id as f32;

                if PositionKey::from(position) == center_key {
                    self.channels.outline[vertex] = OUTLINE_FLAG;
                } else if far_count < far.len() {
                    far[far_count] = vertex;
                    far_count += 1;
                }
            }

            self.queue.push_back(SearchEdge::new(far[0], far[1]));
        }
    }
}
