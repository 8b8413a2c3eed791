use scenegen_core::{Body2D, IMPACTOR_SPEED};

use crate::Packing;

/// Number of discs in a close-packed triangle with `size` rows
pub fn triangle_count(size: usize) -> usize {
    size * (size + 1) / 2
}

/// Billiard break: a close-packed triangle of touching discs with one
/// impactor in front of its apex moving into it.
///
/// The impactor is body 0. No walls, the scene is open.
pub fn billiard_triangle(size: usize, radius: f64) -> Packing<Body2D> {
    let s3 = 3f64.sqrt();

    let mut bodies = Vec::with_capacity(triangle_count(size) + 1);
    bodies.push(Body2D::resting([-2.0 * radius, 0.0], radius).with_velocity([IMPACTOR_SPEED, 0.0]));

    for i in 0..size {
        for j in 0..=i {
            let x = radius * s3 * i as f64;
            let y = radius * (2.0 * j as f64 - i as f64);
            bodies.push(Body2D::resting([x, y], radius));
        }
    }

    Packing {
        radius,
        bodies,
        planes: Vec::new(),
    }
}
