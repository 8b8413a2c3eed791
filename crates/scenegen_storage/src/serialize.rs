//! Scene document to element tree.
//!
//! Element and attribute names, their order, and the nesting below are what
//! the simulator's scene parser reads. Keep them byte-for-byte stable.

use scenegen_core::{
    Body2D, Body3D, Camera, Geometry, ImpactOperator, Integrator, Plane, SceneBody,
    SceneDocument, Solver,
};

use crate::element::{AttrValue, Element};

/// Body records that know their own element form
pub trait BodyElement: SceneBody {
    /// Root element of a scene holding this kind of body
    const SCENE_TAG: &'static str;

    fn to_element(&self) -> Element;
}

impl BodyElement for Body2D {
    const SCENE_TAG: &'static str = "rigidbody2d_scene";

    fn to_element(&self) -> Element {
        Element::new("rigid_body")
            .attr("x", self.position)
            .attr("theta", self.theta)
            .attr("v", self.velocity)
            .attr("omega", self.omega)
            .attr("rho", self.density)
            .attr("r", self.radius)
            .attr("geo_idx", self.geo_idx)
    }
}

impl BodyElement for Body3D {
    const SCENE_TAG: &'static str = "rigidbody3d_scene";

    fn to_element(&self) -> Element {
        Element::new("rigid_body_with_density")
            .attr("x", self.position)
            .attr("R", self.rotation)
            .attr("v", self.velocity)
            .attr("omega", self.omega)
            .attr("rho", self.density)
            .attr("fixed", self.fixed)
            .attr("geo_idx", self.geo_idx)
    }
}

fn camera_element(camera: &Camera) -> Element {
    match camera {
        Camera::Orthographic(c) => Element::new("camera")
            .attr("center", c.center)
            .attr("scale", c.scale)
            .attr("fps", c.fps)
            .attr("render_at_fps", c.render_at_fps)
            .attr("locked", c.locked),
        Camera::Perspective(c) => Element::new("camera_perspective")
            .attr("theta", c.theta)
            .attr("phi", c.phi)
            .attr("rho", c.rho)
            .attr("lookat", c.lookat)
            .attr("up", c.up)
            .attr("fps", c.fps)
            .attr("render_at_fps", c.render_at_fps)
            .attr("locked", c.locked),
    }
}

fn integrator_element(integrator: &Integrator) -> Element {
    Element::new("integrator")
        .attr("type", integrator.kind.name())
        .attr("dt", integrator.dt)
}

fn solver_element(solver: &Solver) -> Element {
    let el = Element::new("solver").attr("name", solver.name());
    match solver {
        Solver::PolicyIteration { max_iters, tol } => {
            el.attr("max_iters", *max_iters).attr("tol", *tol)
        }
        Solver::Ipopt { linear_solvers, tol } => el
            .attr(
                "linear_solvers",
                AttrValue::Words(linear_solvers.iter().map(|s| s.name().to_string()).collect()),
            )
            .attr("tol", *tol),
    }
}

/// Operator subtree under the given tag (`impact_operator` at the top,
/// `elastic_operator`/`inelastic_operator` below a composite)
fn operator_element(tag: &'static str, op: &ImpactOperator) -> Element {
    let el = Element::new(tag)
        .attr("type", op.type_name())
        .attr("CoR", op.cor());
    match op {
        ImpactOperator::GeneralizedRestitution {
            v_tol,
            cache_impulses,
            solver,
            ..
        } => {
            let el = el.attr("v_tol", *v_tol);
            let el = match cache_impulses {
                Some(cache) => el.attr("cache_impulses", *cache),
                None => el,
            };
            el.child(solver_element(solver))
        }
        ImpactOperator::Lcp { solver, .. } => el.child(solver_element(solver)),
        ImpactOperator::Composite {
            elastic, inelastic, ..
        } => el
            .child(operator_element("elastic_operator", elastic))
            .child(operator_element("inelastic_operator", inelastic)),
    }
}

fn plane_element<V: AsRef<[f64]>>(plane: &Plane<V>) -> Element {
    Element::new("static_plane")
        .attr("x", AttrValue::vector(plane.point.as_ref()))
        .attr("n", AttrValue::vector(plane.normal.as_ref()))
}

fn geometry_element(geometry: &Geometry) -> Element {
    Element::new("geometry")
        .attr("type", geometry.shape.name())
        .attr("r", geometry.radius)
}

/// Builds the full element tree of a scene
pub fn scene_element<B: BodyElement>(doc: &SceneDocument<B>) -> Element {
    let config = &doc.config;
    let mut root = Element::new(B::SCENE_TAG)
        .child(camera_element(&config.camera))
        .child(integrator_element(&config.integrator))
        .child(operator_element("impact_operator", &config.impact_operator));

    if let Some(g) = &config.gravity {
        root = root.child(Element::new("near_earth_gravity").attr("f", AttrValue::vector(g.as_ref())));
    }

    root.children(doc.planes.iter().map(plane_element))
        .children(doc.geometries.iter().map(geometry_element))
        .children(doc.bodies.iter().map(B::to_element))
}

/// Renders a scene to the simulator's text format
pub fn render_scene<B: BodyElement>(doc: &SceneDocument<B>) -> String {
    scene_element(doc).to_string()
}
