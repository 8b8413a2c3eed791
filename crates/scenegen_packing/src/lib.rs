//! Lattice packers. Each one turns a scale parameter into an ordered list of
//! bodies plus whatever boundary planes enclose them.

use scenegen_core::{Plane, SceneBody};

pub mod cubic;
pub mod pyramid;
pub mod rng;
pub mod square_grid;
pub mod triangle;

pub use rng::SceneRng;

/// Bodies and boundary produced by one packer call
#[derive(Debug, Clone, PartialEq)]
pub struct Packing<B: SceneBody> {
    /// Radius shared by every body
    pub radius: f64,
    pub bodies: Vec<B>,
    pub planes: Vec<Plane<B::Vector>>,
}
