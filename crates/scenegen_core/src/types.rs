use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::constants::{DISC_DENSITY, SPHERE_DENSITY, UPRIGHT_THETA};

/// Shape of a geometry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// 2D disc
    Circle,
    /// 3D ball
    Sphere,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Sphere => "sphere",
        }
    }
}

/// A shape definition shared by reference among bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub shape: Shape,
    pub radius: f64,
}

impl Geometry {
    pub fn circle(radius: f64) -> Self {
        Self { shape: Shape::Circle, radius }
    }

    pub fn sphere(radius: f64) -> Self {
        Self { shape: Shape::Sphere, radius }
    }
}

/// Static half-space boundary. The normal points into the admissible region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane<V> {
    /// Any point on the plane
    pub point: V,
    /// Unit normal
    pub normal: V,
}

impl<V: AsRef<[f64]>> Plane<V> {
    pub fn new(point: V, normal: V) -> Self {
        Self { point, normal }
    }

    /// Signed distance of `p` from the plane, positive on the normal side
    pub fn signed_distance(&self, p: &V) -> f64 {
        self.normal
            .as_ref()
            .iter()
            .zip(p.as_ref().iter().zip(self.point.as_ref()))
            .map(|(n, (p, q))| n * (p - q))
            .sum()
    }
}

/// Common view of the body records a scene can hold
pub trait SceneBody {
    /// Coordinate vector of the scene dimension
    type Vector: AsRef<[f64]> + Copy + Debug + PartialEq;

    fn position(&self) -> Self::Vector;
    fn velocity(&self) -> Self::Vector;
    /// Index into the scene's geometry list
    fn geo_idx(&self) -> usize;
}

/// A disc in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body2D {
    pub position: [f64; 2],
    /// Orientation angle
    pub theta: f64,
    pub velocity: [f64; 2],
    pub omega: f64,
    pub density: f64,
    pub radius: f64,
    pub geo_idx: usize,
}

impl Body2D {
    /// Upright disc at rest referencing the first geometry
    pub fn resting(position: [f64; 2], radius: f64) -> Self {
        Self {
            position,
            theta: UPRIGHT_THETA,
            velocity: [0.0, 0.0],
            omega: 0.0,
            density: DISC_DENSITY,
            radius,
            geo_idx: 0,
        }
    }

    pub fn with_velocity(mut self, velocity: [f64; 2]) -> Self {
        self.velocity = velocity;
        self
    }
}

impl SceneBody for Body2D {
    type Vector = [f64; 2];

    fn position(&self) -> [f64; 2] {
        self.position
    }

    fn velocity(&self) -> [f64; 2] {
        self.velocity
    }

    fn geo_idx(&self) -> usize {
        self.geo_idx
    }
}

/// A sphere whose radius comes from its geometry entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body3D {
    pub position: [f64; 3],
    /// Rotation vector (axis scaled by angle)
    pub rotation: [f64; 3],
    pub velocity: [f64; 3],
    pub omega: [f64; 3],
    pub density: f64,
    /// Kinematically fixed bodies never move
    pub fixed: bool,
    pub geo_idx: usize,
}

impl Body3D {
    /// Unrotated, movable sphere at rest referencing the first geometry
    pub fn resting(position: [f64; 3]) -> Self {
        Self {
            position,
            rotation: [0.0; 3],
            velocity: [0.0; 3],
            omega: [0.0; 3],
            density: SPHERE_DENSITY,
            fixed: false,
            geo_idx: 0,
        }
    }

    pub fn with_velocity(mut self, velocity: [f64; 3]) -> Self {
        self.velocity = velocity;
        self
    }
}

impl SceneBody for Body3D {
    type Vector = [f64; 3];

    fn position(&self) -> [f64; 3] {
        self.position
    }

    fn velocity(&self) -> [f64; 3] {
        self.velocity
    }

    fn geo_idx(&self) -> usize {
        self.geo_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_signed_distance() {
        let plane = Plane::new([1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]);
        assert!((plane.signed_distance(&[0.25, 3.0, -2.0]) - 0.75).abs() < 1e-12);
        assert!(plane.signed_distance(&[2.0, 0.0, 0.0]) < 0.0);
    }

    #[test]
    fn test_resting_bodies_reference_first_geometry() {
        let disc = Body2D::resting([1.0, 2.0], 0.5);
        assert_eq!(disc.geo_idx, 0);
        assert_eq!(disc.velocity, [0.0, 0.0]);
        assert_eq!(disc.density, DISC_DENSITY);

        let ball = Body3D::resting([0.0; 3]).with_velocity([5.0, 0.0, 0.0]);
        assert_eq!(ball.velocity(), [5.0, 0.0, 0.0]);
        assert!(!ball.fixed);
    }
}
