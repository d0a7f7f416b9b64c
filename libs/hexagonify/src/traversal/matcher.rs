//! Vertex adjacency matching across an edge.

use crate::position_index::{ClosedSet, PositionIndex, PositionKey};
use crate::soup::TriangleSoup;

use super::SearchEdge;

/// Finds the vertex opposite `edge` in a triangle that shares both of its
/// endpoint positions.
///
/// Triangles are visited in increasing order. Inside a qualifying triangle
/// every slot matching neither endpoint replaces the running result, or
/// clears it when that position is already claimed. The first candidate in a
/// triangle other than the edge's own ends the scan; candidates in the own
/// triangle are kept only as a fallback.
pub fn find_opposite_vertex(
    soup: &TriangleSoup,
    index: &PositionIndex,
    closed: &ClosedSet,
    edge: SearchEdge,
) -> Option<usize> {
    let a = soup.position(edge.from);
    let b = soup.position(edge.to);
    let (key_a, key_b) = (PositionKey::from(a), PositionKey::from(b));
    let origin = edge.origin_triangle();

    let mut found = None;
    for &triangle in index.triangles_containing(a) {
        let corners = soup.triangle(triangle);
        let keys = corners.map(|vertex| PositionKey::from(soup.position(vertex)));
        if !keys.contains(&key_b) {
            continue;
        }

        let own_triangle = triangle == origin;
        for (vertex, key) in corners.into_iter().zip(keys) {
            if key == key_a || key == key_b {
                continue;
            }
            let position = soup.position(vertex);
            found = (!closed.contains(position)).then_some(vertex);
            if !own_triangle {
                return found;
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use glam::Vec3;

    fn find(soup: &TriangleSoup, closed: &ClosedSet, from: usize, to: usize) -> Option<usize> {
        let index = PositionIndex::build(soup);
        find_opposite_vertex(soup, &index, closed, SearchEdge::new(from, to))
    }

    #[test]
    fn test_boundary_edge_falls_back_to_own_triangle() {
        let soup = fixtures::hexagon_fan();
        // Outer edge O0-O1 only touches triangle 0; its third corner is the center
        assert_eq!(find(&soup, &ClosedSet::new(), 0, 1), Some(2));
    }

    #[test]
    fn test_shared_edge_prefers_neighbour_triangle() {
        let soup = fixtures::hexagon_fan();
        // Spoke C-O1 (slots 5, 3) is shared by triangles 0 and 1; triangle 0
        // comes first in the scan and is not the origin
        assert_eq!(find(&soup, &ClosedSet::new(), 5, 3), Some(0));
    }

    #[test]
    fn test_own_triangle_candidate_is_only_a_fallback() {
        let soup = fixtures::hexagon_fan();
        // Spoke C-O0 from triangle 0: triangle 0 offers O1 (own), triangle 5 offers O5
        assert_eq!(find(&soup, &ClosedSet::new(), 2, 0), Some(15));
    }

    #[test]
    fn test_claimed_neighbour_overrides_fallback() {
        let soup = fixtures::hexagon_fan();
        let mut closed = ClosedSet::new();
        closed.insert(soup.position(15));
        // O1 from the own triangle is open, but the neighbour's O5 is claimed
        assert_eq!(find(&soup, &closed, 2, 0), None);
    }

    #[test]
    fn test_claimed_self_match_is_no_match() {
        let soup = fixtures::hexagon_fan();
        let mut closed = ClosedSet::new();
        closed.insert(Vec3::ZERO);
        assert_eq!(find(&soup, &closed, 0, 1), None);
    }

    #[test]
    fn test_edge_without_second_endpoint_is_no_match() {
        let soup = fixtures::quad();
        // A (slot 0) and D (slot 5) never share a triangle
        assert_eq!(find(&soup, &ClosedSet::new(), 0, 5), None);
    }

    #[test]
    fn test_octahedron_seed_crosses_to_lower_half() {
        let soup = fixtures::octahedron();
        // Edge X-Y: own triangle offers +Z, triangle 4 offers -Z at slot 14
        assert_eq!(find(&soup, &ClosedSet::new(), 0, 1), Some(14));
    }
}
