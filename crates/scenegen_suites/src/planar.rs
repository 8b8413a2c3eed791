use scenegen_core::{
    Body2D, Camera, Geometry, ImpactOperator, Integrator, IntegratorKind, OrthographicCamera,
    SceneConfig, SceneDocument, Solver, CAMERA_FPS, DT, GRAVITY_2D,
};
use scenegen_packing::{square_grid, triangle};

/// Disc radius of the billiard triangle
pub const TRIANGLE_RADIUS: f64 = 0.5;

/// Half size of the fixed-size box scene
pub const BIG_BOX_HALF_SIZE: f64 = 10.0;

/// Box half size that keeps the packing density constant as the count grows
pub fn scaled_half_size(count: usize) -> f64 {
    (count as f64 / 5.0).sqrt() * 0.2
}

fn config(solver: Solver, gravity: Option<[f64; 2]>) -> SceneConfig<[f64; 2]> {
    SceneConfig {
        camera: Camera::Orthographic(OrthographicCamera {
            center: [0.0, 0.0],
            scale: 8.3225,
            fps: CAMERA_FPS,
            render_at_fps: false,
            locked: false,
        }),
        integrator: Integrator {
            kind: IntegratorKind::SymplecticEuler,
            dt: DT,
        },
        impact_operator: ImpactOperator::GeneralizedRestitution {
            cor: 1.0,
            v_tol: 1e-9,
            cache_impulses: Some(false),
            solver,
        },
        gravity,
    }
}

/// `count` discs settling under gravity in a diamond box
pub fn balls_in_box(count: usize, half_size: f64, solver: Solver) -> SceneDocument<Body2D> {
    let packing = square_grid::square_grid(count, half_size);
    SceneDocument::<Body2D>::new(config(solver, Some(GRAVITY_2D)))
        .with_planes(packing.planes)
        .with_geometry(Geometry::circle(packing.radius))
        .with_bodies(packing.bodies)
}

/// Weightless billiard break of a triangle with `size` rows
pub fn billiard_triangle(size: usize) -> SceneDocument<Body2D> {
    let packing = triangle::billiard_triangle(size, TRIANGLE_RADIUS);
    SceneDocument::<Body2D>::new(config(Solver::policy_iteration(100, 1e-6), None))
        .with_geometry(Geometry::circle(packing.radius))
        .with_bodies(packing.bodies)
}
