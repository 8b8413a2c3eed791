use serde::{Deserialize, Serialize};

use crate::types::{Geometry, Plane, SceneBody};

/// Time integration scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegratorKind {
    SymplecticEuler,
    SplitHam,
}

impl IntegratorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SymplecticEuler => "symplectic_euler",
            Self::SplitHam => "split_ham",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Integrator {
    pub kind: IntegratorKind,
    pub dt: f64,
}

/// Sparse linear-algebra backends IPOPT may be asked to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinearSolver {
    Ma97,
    Ma57,
    Mumps,
    Ma27,
    Ma86,
}

impl LinearSolver {
    /// Preference order written by every IPOPT scene
    pub const PREFERRED: [LinearSolver; 5] =
        [Self::Ma97, Self::Ma57, Self::Mumps, Self::Ma27, Self::Ma86];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ma97 => "ma97",
            Self::Ma57 => "ma57",
            Self::Mumps => "mumps",
            Self::Ma27 => "ma27",
            Self::Ma86 => "ma86",
        }
    }
}

/// Contact solver configuration of an impact operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solver {
    /// Iterative policy solver
    PolicyIteration { max_iters: u32, tol: f64 },
    /// External optimizer; backends are tried in list order
    Ipopt {
        linear_solvers: Vec<LinearSolver>,
        tol: f64,
    },
}

impl Solver {
    pub fn policy_iteration(max_iters: u32, tol: f64) -> Self {
        Self::PolicyIteration { max_iters, tol }
    }

    /// IPOPT with the preferred backend order
    pub fn ipopt(tol: f64) -> Self {
        Self::Ipopt {
            linear_solvers: LinearSolver::PREFERRED.to_vec(),
            tol,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PolicyIteration { .. } => "policy_iteration",
            Self::Ipopt { .. } => "ipopt",
        }
    }
}

/// Impact operator tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImpactOperator {
    /// Generalized restitution (`gr`)
    GeneralizedRestitution {
        cor: f64,
        v_tol: f64,
        /// Only written when set; 3D sub-operators omit it
        cache_impulses: Option<bool>,
        solver: Solver,
    },
    /// Linear complementarity (`lcp`)
    Lcp { cor: f64, solver: Solver },
    /// Elastic and inelastic pair (`grr`)
    Composite {
        cor: f64,
        elastic: Box<ImpactOperator>,
        inelastic: Box<ImpactOperator>,
    },
}

impl ImpactOperator {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::GeneralizedRestitution { .. } => "gr",
            Self::Lcp { .. } => "lcp",
            Self::Composite { .. } => "grr",
        }
    }

    pub fn cor(&self) -> f64 {
        match self {
            Self::GeneralizedRestitution { cor, .. }
            | Self::Lcp { cor, .. }
            | Self::Composite { cor, .. } => *cor,
        }
    }

    /// Fully elastic `gr` over an elastic `gr` and a plastic `lcp`, both using `solver`
    pub fn composite(v_tol: f64, solver: Solver) -> Self {
        Self::Composite {
            cor: 1.0,
            elastic: Box::new(Self::GeneralizedRestitution {
                cor: 1.0,
                v_tol,
                cache_impulses: None,
                solver: solver.clone(),
            }),
            inelastic: Box::new(Self::Lcp { cor: 0.0, solver }),
        }
    }
}

/// Top-down view of a 2D scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthographicCamera {
    pub center: [f64; 2],
    pub scale: f64,
    pub fps: u32,
    pub render_at_fps: bool,
    pub locked: bool,
}

/// Orbit camera of a 3D scene, in spherical coordinates around `lookat`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCamera {
    pub theta: f64,
    pub phi: f64,
    pub rho: f64,
    pub lookat: [f64; 3],
    pub up: [f64; 3],
    pub fps: u32,
    pub render_at_fps: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Camera {
    Orthographic(OrthographicCamera),
    Perspective(PerspectiveCamera),
}

/// Global simulation settings of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig<V> {
    pub camera: Camera,
    pub integrator: Integrator,
    pub impact_operator: ImpactOperator,
    /// Uniform acceleration; `None` leaves the scene weightless
    pub gravity: Option<V>,
}

/// Everything one scene file describes. Body order is preserved on output.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDocument<B: SceneBody> {
    pub config: SceneConfig<B::Vector>,
    pub geometries: Vec<Geometry>,
    pub planes: Vec<Plane<B::Vector>>,
    pub bodies: Vec<B>,
}

impl<B: SceneBody> SceneDocument<B> {
    pub fn new(config: SceneConfig<B::Vector>) -> Self {
        Self {
            config,
            geometries: Vec::new(),
            planes: Vec::new(),
            bodies: Vec::new(),
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometries.push(geometry);
        self
    }

    pub fn with_planes(mut self, planes: impl IntoIterator<Item = Plane<B::Vector>>) -> Self {
        self.planes.extend(planes);
        self
    }

    pub fn with_bodies(mut self, bodies: impl IntoIterator<Item = B>) -> Self {
        self.bodies.extend(bodies);
        self
    }

    /// Radius of the geometry `body` references
    pub fn radius_of(&self, body: &B) -> Option<f64> {
        self.geometries.get(body.geo_idx()).map(|g| g.radius)
    }
}
