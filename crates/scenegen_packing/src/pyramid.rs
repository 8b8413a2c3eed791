use scenegen_core::{Body3D, Plane, IMPACTOR_SPEED};
use std::f64::consts::SQRT_2;

use crate::Packing;

/// Spheres in a stack of `size` layers: `size(size+1)(size+2)/6`
pub fn stack_count(size: usize) -> usize {
    size * (size + 1) * (size + 2) / 6
}

/// Triangular-stack lattice. Layer `i` sits at x = √2·i·r and holds the
/// triangle `0 <= k <= j <= i` of lateral grid sites, centered on the x axis.
pub fn stack(size: usize, radius: f64) -> Vec<Body3D> {
    let mut bodies = Vec::with_capacity(stack_count(size));
    for i in 0..size {
        let half = i as f64 / 2.0;
        for j in 0..=i {
            for k in 0..=j {
                bodies.push(Body3D::resting([
                    SQRT_2 * i as f64 * radius,
                    (j as f64 - half) * 2.0 * radius,
                    (k as f64 - half) * 2.0 * radius,
                ]));
            }
        }
    }
    bodies
}

/// 3D billiard break: an impactor left of the stack apex moving into it.
/// The impactor is body 0; there are no walls.
pub fn pyramid_with_impactor(size: usize, radius: f64) -> Packing<Body3D> {
    let impactor =
        Body3D::resting([-1.1 * radius, 0.0, 0.0]).with_velocity([IMPACTOR_SPEED, 0.0, 0.0]);

    let mut bodies = Vec::with_capacity(stack_count(size) + 1);
    bodies.push(impactor);
    bodies.extend(stack(size, radius));

    Packing {
        radius,
        bodies,
        planes: Vec::new(),
    }
}

/// Stack at rest against a single wall just behind its apex, for gravity
/// pulling along -x.
pub fn falling_pyramid(size: usize, radius: f64) -> Packing<Body3D> {
    Packing {
        radius,
        bodies: stack(size, radius),
        planes: vec![Plane::new([-1.01 * radius, 0.0, 0.0], [1.0, 0.0, 0.0])],
    }
}
