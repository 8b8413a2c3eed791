use scenegen_core::{Body3D, Plane, CUBIC_Y_FRACTION, OVERLAP_SEPARATION};

use crate::{Packing, SceneRng};

/// Lattice extent along x, y and z for a cube of the given size
pub fn lattice_dims(size: usize) -> [usize; 3] {
    [size, (size as f64 * CUBIC_Y_FRACTION) as usize, size]
}

/// Edge length of the enclosing box
pub fn box_side(size: usize, radius: f64) -> f64 {
    size as f64 * (OVERLAP_SEPARATION * radius)
}

/// Axis-aligned box of the given side centered on the origin, normals inward
pub fn axis_box(side: f64) -> Vec<Plane<[f64; 3]>> {
    let h = side / 2.0;
    vec![
        Plane::new([-h, 0.0, 0.0], [1.0, 0.0, 0.0]),
        Plane::new([h, 0.0, 0.0], [-1.0, 0.0, 0.0]),
        Plane::new([0.0, -h, 0.0], [0.0, 1.0, 0.0]),
        Plane::new([0.0, h, 0.0], [0.0, -1.0, 0.0]),
        Plane::new([0.0, 0.0, -h], [0.0, 0.0, 1.0]),
        Plane::new([0.0, 0.0, h], [0.0, 0.0, -1.0]),
    ]
}

/// Spheres packed at 1.01 r spacing, so every neighbouring pair overlaps
/// at t = 0. Each sphere gets a velocity drawn from `rng`, three components
/// per body in enumeration order.
pub fn overlapping_cube(size: usize, radius: f64, rng: &mut SceneRng) -> Packing<Body3D> {
    let sep = OVERLAP_SEPARATION * radius;
    let side = box_side(size, radius);
    let [nx, ny, nz] = lattice_dims(size);
    let coord = |idx: usize| sep * (idx as f64 + 0.5) - side / 2.0;

    let mut bodies = Vec::with_capacity(nx * ny * nz);
    for i in 0..nx {
        for j in 0..ny {
            for k in 0..nz {
                let position = [coord(i), coord(j), coord(k)];
                bodies.push(Body3D::resting(position).with_velocity(rng.jitter3()));
            }
        }
    }

    Packing {
        radius,
        bodies,
        planes: axis_box(side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_shape() {
        assert_eq!(lattice_dims(10), [10, 7, 10]);
        assert_eq!(lattice_dims(3), [3, 2, 3]);
        let mut rng = SceneRng::new(1);
        let packing = overlapping_cube(4, 0.05, &mut rng);
        assert_eq!(packing.bodies.len(), 4 * 2 * 4);
        assert_eq!(packing.planes.len(), 6);
    }

    #[test]
    fn test_deterministic_velocities() {
        let a = overlapping_cube(8, 0.05, &mut SceneRng::new(647_863_287_462));
        let b = overlapping_cube(8, 0.05, &mut SceneRng::new(647_863_287_462));
        let va: Vec<_> = a.bodies.iter().map(|b| b.velocity).collect();
        let vb: Vec<_> = b.bodies.iter().map(|b| b.velocity).collect();
        assert_eq!(va, vb);
        assert!(va.iter().any(|v| *v != [0.0; 3]));
    }

    #[test]
    fn test_neighbours_overlap() {
        let r = 0.05;
        let packing = overlapping_cube(2, r, &mut SceneRng::new(3));
        let a = packing.bodies[0].position;
        let b = packing.bodies[1].position;
        let d = (0..3).map(|c| (a[c] - b[c]).powi(2)).sum::<f64>().sqrt();
        assert!(d < 2.0 * r);
    }

    #[test]
    fn test_centers_inside_box() {
        let packing = overlapping_cube(5, 0.05, &mut SceneRng::new(3));
        for body in &packing.bodies {
            for plane in &packing.planes {
                assert!(plane.signed_distance(&body.position) > 0.0);
            }
        }
    }
}
