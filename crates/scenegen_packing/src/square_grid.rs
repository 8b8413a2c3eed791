use scenegen_core::{Body2D, Plane, SQUARE_GRID_FILL};
use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

use crate::Packing;

/// Side length of the candidate grid needed for `count` discs (never below 1)
pub fn grid_size(count: usize) -> usize {
    ((count as f64).sqrt().ceil() as usize).max(1)
}

/// Center-to-center distance of neighbouring candidates
pub fn separation(grid_size: usize, half_size: f64) -> f64 {
    half_size / grid_size as f64 * 2.0 * SQRT_2
}

/// Every grid position in row-major order (outer `i`, inner `j`).
/// The grid is rotated 45 degrees so it fills the diamond-shaped box.
pub fn candidates(grid_size: usize, half_size: f64) -> impl Iterator<Item = [f64; 2]> {
    let sep = separation(grid_size, half_size);
    (0..grid_size).flat_map(move |i| {
        (0..grid_size).map(move |j| {
            [
                -half_size * 2.0 + sep / 2.0 * SQRT_2 + (i + j) as f64 * sep * SQRT_2 / 2.0,
                (i as f64 - j as f64) * sep * SQRT_2 / 2.0,
            ]
        })
    })
}

/// The four walls of the box. Corners sit at `(±half_size, ±half_size)`,
/// normals point inward along the diagonals.
pub fn diamond_box(half_size: f64) -> Vec<Plane<[f64; 2]>> {
    let p = half_size;
    let d = FRAC_1_SQRT_2;
    vec![
        Plane::new([-p, -p], [d, d]),
        Plane::new([p, -p], [-d, d]),
        Plane::new([p, p], [-d, -d]),
        Plane::new([-p, p], [d, -d]),
    ]
}

/// Packs exactly `count` discs into the box of the given half size.
///
/// Candidates past `count` are dropped in enumeration order, so counts that
/// are not perfect squares leave the last rows partially filled.
pub fn square_grid(count: usize, half_size: f64) -> Packing<Body2D> {
    let grid = grid_size(count);
    let radius = SQUARE_GRID_FILL * separation(grid, half_size);

    let bodies = candidates(grid, half_size)
        .take(count)
        .map(|position| Body2D::resting(position, radius))
        .collect();

    Packing {
        radius,
        bodies,
        planes: diamond_box(half_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_count() {
        for n in [0, 1, 2, 3, 7, 10, 16, 17, 50, 99, 100, 1000] {
            let packing = square_grid(n, 10.0);
            assert_eq!(packing.bodies.len(), n, "n={}", n);
            assert!(packing.radius > 0.0 && packing.radius.is_finite());
            assert!(packing.bodies.iter().all(|b| b.radius == packing.radius));
        }
    }

    #[test]
    fn test_truncation_keeps_enumeration_prefix() {
        assert_eq!(grid_size(10), 4);
        let all: Vec<_> = candidates(4, 10.0).collect();
        assert_eq!(all.len(), 16);

        let packing = square_grid(10, 10.0);
        let kept: Vec<_> = packing.bodies.iter().map(|b| b.position).collect();
        assert_eq!(kept, all[..10]);
        for dropped in &all[10..] {
            assert!(!kept.contains(dropped));
        }
    }

    #[test]
    fn test_bodies_inside_box() {
        for n in [1, 5, 10, 64, 200] {
            let half = (n as f64 / 5.0).sqrt() * 0.2;
            let packing = square_grid(n, half);
            assert_eq!(packing.planes.len(), 4);
            for body in &packing.bodies {
                for plane in &packing.planes {
                    let d = plane.signed_distance(&body.position);
                    assert!(d >= body.radius, "n={}: distance {} < radius {}", n, d, body.radius);
                }
            }
        }
    }

    #[test]
    fn test_perfect_square_fills_grid() {
        let packing = square_grid(9, 1.0);
        let all: Vec<_> = candidates(3, 1.0).collect();
        assert_eq!(packing.bodies.len(), all.len());
    }
}
