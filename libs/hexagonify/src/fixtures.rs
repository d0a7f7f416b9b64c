//! Small triangle soups shared by the unit tests.

use glam::Vec3;

use crate::soup::{facet_normal, TriangleSoup};

/// Builds a soup from triangles, giving each corner its facet normal.
pub fn soup_from_triangles(triangles: &[[Vec3; 3]]) -> TriangleSoup {
    let mut positions = Vec::with_capacity(triangles.len() * 3);
    let mut normals = Vec::with_capacity(triangles.len() * 3);
    for [a, b, c] in triangles {
        let normal = facet_normal(*a, *b, *c);
        positions.extend([*a, *b, *c]);
        normals.extend([normal; 3]);
    }
    TriangleSoup::new(positions, normals).unwrap()
}

/// Outer corners of a unit hexagon in the XY plane.
pub fn hexagon_ring() -> [Vec3; 6] {
    let mut ring = [Vec3::ZERO; 6];
    for (k, corner) in ring.iter_mut().enumerate() {
        let angle = k as f32 * std::f32::consts::FRAC_PI_3;
        *corner = Vec3::new(angle.cos(), angle.sin(), 0.0);
    }
    ring
}

/// Six triangles `(O_k, O_k+1, C)` fanning around a center at the origin.
///
/// The seed edge `(0, 1)` is an outer edge, so its only match is triangle 0
/// itself and the self-match yields the center.
pub fn hexagon_fan() -> TriangleSoup {
    let ring = hexagon_ring();
    let triangles: Vec<[Vec3; 3]> = (0..6)
        .map(|k| [ring[k], ring[(k + 1) % 6], Vec3::ZERO])
        .collect();
    soup_from_triangles(&triangles)
}

/// Two triangles sharing the diagonal B-C of a unit square.
pub fn quad() -> TriangleSoup {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(1.0, 0.0, 0.0);
    let c = Vec3::new(0.0, 1.0, 0.0);
    let d = Vec3::new(1.0, 1.0, 0.0);
    soup_from_triangles(&[[a, b, c], [c, b, d]])
}

/// Closed octahedron: four triangles around +Z, then four around -Z.
pub fn octahedron() -> TriangleSoup {
    let (x, y, z) = (Vec3::X, Vec3::Y, Vec3::Z);
    soup_from_triangles(&[
        [x, y, z],
        [y, -x, z],
        [-x, -y, z],
        [-y, x, z],
        [y, x, -z],
        [-x, y, -z],
        [-y, -x, -z],
        [x, -y, -z],
    ])
}
