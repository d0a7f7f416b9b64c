//! # Traversal Tests
//!
//! End-to-end runs of the region grower over the shared fixtures.

use super::*;
use crate::fixtures;
use approx::assert_relative_eq;
use config::constants::OUTLINE_FLAG;

fn run(soup: &TriangleSoup) -> Hexagonification {
    Traversal::new(soup, &HexagonifyConfig::default())
        .unwrap()
        .run()
}

#[test]
fn test_hexagon_fan_is_one_cell() {
    let soup = fixtures::hexagon_fan();
    let result = run(&soup);

    assert_eq!(result.cells.cell_count(), 1);
    assert_eq!(result.cells.position(1), Some(Vec3::ZERO));
    assert!(result.channels.cell_ids.iter().all(|id| *id == 1.0));
    assert_eq!(result.channels.cell_ids.len(), 18);
}

#[test]
fn test_hexagon_fan_outlines_center_slots() {
    let soup = fixtures::hexagon_fan();
    let result = run(&soup);

    for (vertex, flag) in result.channels.outline.iter().enumerate() {
        let expected = if vertex % 3 == 2 { OUTLINE_FLAG } else { 0.0 };
        assert_eq!(*flag, expected, "vertex {vertex}");
    }
    let outlined = result.channels.outline.iter().filter(|f| **f == OUTLINE_FLAG).count();
    assert_eq!(outlined, 6);
}

#[test]
fn test_hexagon_fan_drains_six_outer_edges() {
    let soup = fixtures::hexagon_fan();
    let mut traversal = Traversal::new(&soup, &HexagonifyConfig::default()).unwrap();

    assert_eq!(traversal.step(), Some(Step::Cell(1)));
    assert_eq!(traversal.queued(), 6);
    for _ in 0..6 {
        assert_eq!(traversal.step(), Some(Step::Discarded));
    }
    assert_eq!(traversal.step(), None);

    let stats = traversal.stats();
    assert_eq!(stats.steps, 7);
    assert_eq!(stats.discarded, 6);
    assert_eq!(stats.status, TraversalStatus::Completed);
}

#[test]
fn test_cell_normal_comes_from_center_vertex() {
    let soup = fixtures::hexagon_fan();
    let result = run(&soup);
    let normal = result.cells.normal(1).unwrap();
    assert_eq!(normal, soup.normal(2));
    assert_relative_eq!(normal.z, 1.0, epsilon = 1e-6);
}

#[test]
fn test_slot_zero_is_placeholder() {
    let soup = fixtures::hexagon_fan();
    let result = run(&soup);
    assert_eq!(result.cells.positions().len(), 2);
    assert_eq!(result.cells.positions()[0], Vec3::ZERO);
    assert_eq!(result.cells.normals()[0], Vec3::ZERO);
    assert_eq!(result.cells.position(0), None);
}

#[test]
fn test_quad_is_one_cell_with_every_vertex_assigned() {
    let soup = fixtures::quad();
    let result = run(&soup);

    assert_eq!(result.cells.cell_count(), soup.triangle_count() / 2);
    assert_eq!(result.channels.unassigned_count(), 0);
    assert_eq!(result.stats.steps, 3);
    assert_eq!(result.stats.discarded, 2);
}

#[test]
fn test_octahedron_discovers_both_poles() {
    let soup = fixtures::octahedron();
    let result = run(&soup);

    assert_eq!(result.cells.cell_count(), 2);
    // The seed edge crosses to the lower half first
    assert_eq!(result.cells.position(1), Some(-Vec3::Z));
    assert_eq!(result.cells.position(2), Some(Vec3::Z));
    assert_eq!(result.channels.unassigned_count(), 0);
    assert_eq!(result.stats.steps, 9);
    assert_eq!(result.stats.status, TraversalStatus::Completed);
}

#[test]
fn test_octahedron_ids_follow_halves() {
    let soup = fixtures::octahedron();
    let result = run(&soup);

    let (upper, lower) = result.channels.cell_ids.split_at(12);
    assert!(upper.iter().all(|id| *id == 2.0));
    assert!(lower.iter().all(|id| *id == 1.0));
    for (vertex, flag) in result.channels.outline.iter().enumerate() {
        let expected = if vertex % 3 == 2 { OUTLINE_FLAG } else { 0.0 };
        assert_eq!(*flag, expected, "vertex {vertex}");
    }
}

#[test]
fn test_completed_run_never_rediscovers_seed() {
    for soup in [fixtures::hexagon_fan(), fixtures::quad(), fixtures::octahedron()] {
        let mut traversal = Traversal::new(&soup, &HexagonifyConfig::default()).unwrap();
        while traversal.step().is_some() {}

        let seed = SearchEdge::new(0, 1);
        assert_eq!(traversal.opposite_vertex(seed), None);
    }
}

#[test]
fn test_closed_set_holds_every_claimed_position() {
    let soup = fixtures::hexagon_fan();
    let mut traversal = Traversal::new(&soup, &HexagonifyConfig::default()).unwrap();
    traversal.step();
    assert_eq!(traversal.closed().len(), 7);
}

#[test]
fn test_step_budget_truncates() {
    let soup = fixtures::hexagon_fan();
    let config = HexagonifyConfig::default().with_max_steps(3).unwrap();
    let result = Traversal::new(&soup, &config).unwrap().run();

    assert_eq!(result.stats.steps, 3);
    assert_eq!(result.stats.status, TraversalStatus::Truncated);
    // The cell found on the first step is kept
    assert_eq!(result.cells.cell_count(), 1);
}

#[test]
fn test_budget_equal_to_work_completes() {
    let soup = fixtures::hexagon_fan();
    let config = HexagonifyConfig::default().with_max_steps(7).unwrap();
    let result = Traversal::new(&soup, &config).unwrap().run();
    assert_eq!(result.stats.status, TraversalStatus::Completed);
}

#[test]
fn test_seed_out_of_range() {
    let soup = fixtures::quad();
    let config = HexagonifyConfig::new(10, (0, 6)).unwrap();
    let err = Traversal::new(&soup, &config).unwrap_err();
    assert!(matches!(
        err,
        HexError::SeedOutOfRange {
            second: 6,
            vertex_count: 6,
            ..
        }
    ));
}

#[test]
fn test_disconnected_islands_stay_unassigned() {
    let ring = fixtures::hexagon_ring();
    let far = Vec3::new(10.0, 0.0, 0.0);
    let mut triangles: Vec<[Vec3; 3]> = (0..6)
        .map(|k| [ring[k], ring[(k + 1) % 6], Vec3::ZERO])
        .collect();
    triangles.push([far, far + Vec3::X, far + Vec3::Y]);
    let soup = fixtures::soup_from_triangles(&triangles);

    let result = run(&soup);
    assert_eq!(result.cells.cell_count(), 1);
    assert_eq!(result.channels.unassigned_count(), 3);
    assert_eq!(&result.channels.cell_ids[18..], &[UNASSIGNED_CELL_ID; 3]);
}

#[test]
fn test_degenerate_triangle_enqueues_vertex_zero() {
    // Triangle 1 has the center twice, leaving one far corner
    let c = Vec3::new(0.0, 1.0, 0.0);
    let soup = fixtures::soup_from_triangles(&[
        [Vec3::ZERO, Vec3::X, c],
        [c, Vec3::new(2.0, 2.0, 0.0), c],
    ]);
    let mut traversal = Traversal::new(&soup, &HexagonifyConfig::default()).unwrap();

    assert_eq!(traversal.step(), Some(Step::Cell(1)));
    assert_eq!(traversal.queued(), 2);
    let result = traversal.run();
    assert_eq!(result.channels.outline[3], OUTLINE_FLAG);
    assert_eq!(result.channels.outline[5], OUTLINE_FLAG);
    assert_eq!(result.stats.status, TraversalStatus::Completed);
}

#[test]
fn test_uvs_interleave_channels() {
    let soup = fixtures::hexagon_fan();
    let uvs = run(&soup).channels.uvs();
    assert_eq!(uvs.len(), 18);
    assert_eq!(uvs[0], [1.0, 0.0]);
    assert_eq!(uvs[2], [1.0, OUTLINE_FLAG]);
}
