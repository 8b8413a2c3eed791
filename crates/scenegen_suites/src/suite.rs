use scenegen_core::Solver;
use scenegen_packing::SceneRng;
use scenegen_storage::render_scene;

use crate::{planar, spatial};

/// One family of generated scenes, written to its own directory with one
/// file per parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    /// 10000 discs in a fixed box, policy iteration
    BallsInBox,
    /// Growing disc counts in a box scaled to constant density, IPOPT
    BallsInBoxIpopt,
    /// 2D billiard break
    Triangle,
    /// Interpenetrating spheres in a box, IPOPT
    OverlapBallsInBox3dIpopt,
    /// 3D billiard break
    Pyramid,
    /// Stack settling against a wall, IPOPT
    FallingPyramidIpopt,
}

impl Suite {
    /// Every suite, in generation order
    pub const ALL: [Suite; 6] = [
        Self::BallsInBox,
        Self::BallsInBoxIpopt,
        Self::Triangle,
        Self::OverlapBallsInBox3dIpopt,
        Self::Pyramid,
        Self::FallingPyramidIpopt,
    ];

    pub fn all() -> &'static [Suite] {
        &Self::ALL
    }

    /// Output subdirectory
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::BallsInBox => "balls_in_box",
            Self::BallsInBoxIpopt => "balls_in_box_ipopt",
            Self::Triangle => "triangle",
            Self::OverlapBallsInBox3dIpopt => "overlap_balls_in_box_3d_ipopt",
            Self::Pyramid => "pyramid",
            Self::FallingPyramidIpopt => "rfalling_pyramid_ipopt",
        }
    }

    /// Fixed parameter values: ball count for the box suites, lattice size otherwise
    pub fn parameters(&self) -> &'static [usize] {
        match self {
            Self::BallsInBox => &[10_000],
            Self::BallsInBoxIpopt => &[
                10, 20, 50, 100, 200, 500, 1000, 2000, 5000, 10_000, 40_000, 90_000, 160_000,
            ],
            Self::Triangle => &[
                5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60, 65, 70, 75, 80, 85, 90, 95, 100,
                125, 150, 200, 500, 1000,
            ],
            Self::OverlapBallsInBox3dIpopt => &[2, 3, 4, 8, 10, 20, 30, 40],
            Self::Pyramid | Self::FallingPyramidIpopt => &[2, 5, 10, 20, 30, 40, 50],
        }
    }

    /// Whether rendering this suite draws from the random source
    pub fn uses_rng(&self) -> bool {
        matches!(self, Self::OverlapBallsInBox3dIpopt)
    }

    /// Builds and serializes the scene for one parameter value
    pub fn render(&self, value: usize, rng: &mut SceneRng) -> String {
        match self {
            Self::BallsInBox => render_scene(&planar::balls_in_box(
                value,
                planar::BIG_BOX_HALF_SIZE,
                Solver::policy_iteration(100, 1e-12),
            )),
            Self::BallsInBoxIpopt => render_scene(&planar::balls_in_box(
                value,
                planar::scaled_half_size(value),
                Solver::ipopt(1e-12),
            )),
            Self::Triangle => render_scene(&planar::billiard_triangle(value)),
            Self::OverlapBallsInBox3dIpopt => render_scene(&spatial::overlapping_cube(value, rng)),
            Self::Pyramid => render_scene(&spatial::pyramid_break(value)),
            Self::FallingPyramidIpopt => render_scene(&spatial::falling_pyramid(value)),
        }
    }
}
