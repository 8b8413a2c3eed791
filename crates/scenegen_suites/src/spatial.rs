use scenegen_core::{
    Body3D, Camera, Geometry, ImpactOperator, Integrator, IntegratorKind, PerspectiveCamera,
    SceneConfig, SceneDocument, Solver, CAMERA_FPS, CAMERA_UP, DT, GRAVITY_3D,
};
use scenegen_packing::{cubic, pyramid, SceneRng};

/// Sphere radius of the overlapping cube
pub const CUBE_RADIUS: f64 = 0.05;

/// Sphere radius of both pyramid scenes
pub const PYRAMID_RADIUS: f64 = 0.5;

/// Gravity of the falling pyramid, pulling the stack onto its wall
pub const FALLING_GRAVITY: [f64; 3] = [-5.0, 0.0, 0.0];

fn camera(theta: f64, phi: f64, rho: f64, lookat: [f64; 3]) -> Camera {
    Camera::Perspective(PerspectiveCamera {
        theta,
        phi,
        rho,
        lookat,
        up: CAMERA_UP,
        fps: CAMERA_FPS,
        render_at_fps: false,
        locked: false,
    })
}

fn config(camera: Camera, solver: Solver, gravity: Option<[f64; 3]>) -> SceneConfig<[f64; 3]> {
    SceneConfig {
        camera,
        integrator: Integrator {
            kind: IntegratorKind::SplitHam,
            dt: DT,
        },
        impact_operator: ImpactOperator::composite(1e-6, solver),
        gravity,
    }
}

/// Interpenetrating spheres with random velocities in a closed box.
/// Draws `3 * body count` samples from `rng`.
pub fn overlapping_cube(size: usize, rng: &mut SceneRng) -> SceneDocument<Body3D> {
    let packing = cubic::overlapping_cube(size, CUBE_RADIUS, rng);
    let side = cubic::box_side(size, CUBE_RADIUS);
    let view = camera(1.0472, 0.785398, side * 1.1, [0.0; 3]);

    SceneDocument::<Body3D>::new(config(view, Solver::ipopt(1e-12), Some(GRAVITY_3D)))
        .with_planes(packing.planes)
        .with_geometry(Geometry::sphere(packing.radius))
        .with_bodies(packing.bodies)
}

/// Weightless 3D break: impactor into a stack of `size` layers
pub fn pyramid_break(size: usize) -> SceneDocument<Body3D> {
    let packing = pyramid::pyramid_with_impactor(size, PYRAMID_RADIUS);
    let n = size as f64;
    let view = camera(0.7, -0.4, 1.4 * n, [0.5 * n, 0.0, 0.0]);

    SceneDocument::<Body3D>::new(config(view, Solver::policy_iteration(100, 1e-6), None))
        .with_geometry(Geometry::sphere(packing.radius))
        .with_bodies(packing.bodies)
}

/// Stack of `size` layers resting on a wall under sideways gravity
pub fn falling_pyramid(size: usize) -> SceneDocument<Body3D> {
    let packing = pyramid::falling_pyramid(size, PYRAMID_RADIUS);
    let view = camera(-1.5707, 1.5707, 7.12621, [0.0; 3]);

    SceneDocument::<Body3D>::new(config(view, Solver::ipopt(1e-12), Some(FALLING_GRAVITY)))
        .with_planes(packing.planes)
        .with_geometry(Geometry::sphere(packing.radius))
        .with_bodies(packing.bodies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falling_pyramid_size_three() {
        let doc = falling_pyramid(3);
        assert_eq!(doc.bodies.len(), 10);
        assert_eq!(doc.planes.len(), 1);
        let g = doc.config.gravity.unwrap();
        assert!(g.iter().any(|c| *c != 0.0));
    }

    #[test]
    fn test_pyramid_break_has_impactor() {
        let doc = pyramid_break(3);
        assert_eq!(doc.bodies.len(), 11);
        assert!(doc.planes.is_empty());
        assert!(doc.config.gravity.is_none());
        assert_eq!(doc.bodies[0].velocity, [5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cube_uses_shared_sphere() {
        let mut rng = SceneRng::new(1);
        let doc = overlapping_cube(4, &mut rng);
        assert_eq!(doc.geometries, vec![Geometry::sphere(CUBE_RADIUS)]);
        assert_eq!(doc.planes.len(), 6);
        assert!(doc.bodies.iter().all(|b| doc.radius_of(b) == Some(CUBE_RADIUS)));
    }
}
