mod proc_errors;
mod cfg;
mod template;
mod render;
pub mod length;
pub mod loops;
pub mod solver;
pub mod waypoints;

use itertools::Itertools;
use serde::{Serialize, Deserialize};
use tracing::{info, warn};

use crate::geo_2d::{Point, Direction, GEO_EPSILON};

// Re-export errors
pub use proc_errors::{
    SpiralError,
    ProcResult,
    err_str,
    err_spec,
};
// Re-export cfg handling
pub use cfg::{
    SpiralArgs,
    SpiralTarget,
};
pub use template::{
    WaveguideTemplate,
    Resist,
};
// Re-export renderers
pub use render::{
    PathRenderer,
    RendererChoice,
    RenderArgs,
    RenderedPath,
};
pub use loops::{LoopCount, MAX_LOOP_PAIRS, select_loop_count};
pub use solver::{SolverCfg, solve_height};
pub use waypoints::{SpiralPath, generate_waypoints};

/// Horizontal placement of the spiral relative to its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// Spiral body to the right of the input port.
    #[default]
    Right,
    /// Mirror image of `Right`.
    Left,
}
impl Parity {
    /// +1 for right, -1 for left.
    pub fn sign(&self) -> f64 {
        match self {
            Parity::Right => 1.0,
            Parity::Left => -1.0,
        }
    }
}

/// Parameters of one spiral request.
/// `width` and `height` bound the outer footprint, `length` is the target path length.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpiralSpec {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub spacing: f64,
    pub parity: Parity,
    pub center: Point,
}
impl SpiralSpec {
    /// Create a spiral spec, filling the spacing from the template when it is `None`.
    pub fn new(
        template: &WaveguideTemplate,
        width: f64,
        height: f64,
        length: f64,
        spacing: Option<f64>,
        parity: Parity,
        center: Point,
    ) -> ProcResult<Self> {
        let spec = SpiralSpec{
            width,
            height,
            length,
            spacing: spacing.unwrap_or_else(|| template.default_spacing()),
            parity,
            center,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Check that every dimension is positive and finite.
    pub fn validate(&self) -> ProcResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
            ("spacing", self.spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                err_spec(&format!("{name} must be positive and finite (got {value})"))?;
            }
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            err_spec(&format!("center must be finite (got {})", self.center))?;
        }
        Ok(())
    }
}

/// A connection anchor.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Port {
    pub port: Point,
    pub direction: Direction,
}

/// The two ports of a spiral, serialized as `{"input": ..., "output": ...}`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Portlist {
    pub input: Port,
    pub output: Port,
}
impl Portlist {
    /// Look up a port by name.
    pub fn get(&self, name: &str) -> Option<&Port> {
        match name {
            "input" => Some(&self.input),
            "output" => Some(&self.output),
            _ => None,
        }
    }
}

/// Spiral struct.
/// Everything computed for one spiral request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Spiral {
    pub spec: SpiralSpec,
    pub template: WaveguideTemplate,
    /// Number of inward/outward loop pairs.
    pub loops: usize,
    /// Length of a single loop pair at the requested height.
    pub length_min: f64,
    /// Solved outer height.
    pub height: f64,
    pub waypoints: Vec<Point>,
    pub portlist: Portlist,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendered: Option<RenderedPath>,
}
impl Spiral {
    /// Analytic length at the solved height.
    pub fn path_length(&self) -> f64 {
        length::spiral_length(
            self.spec.width, self.spec.spacing, self.height, self.template.corner_dl(), self.loops,
        )
    }
}

/// Compute the spiral: pick the loop count, solve the height and lay out the waypoints.
/// Nothing is rendered here.
pub fn build_spiral(
    spec: &SpiralSpec,
    template: &WaveguideTemplate,
    solver: &SolverCfg,
) -> ProcResult<Spiral> {
    spec.validate()?;
    template.validate()?;

    let corner_dl = template.corner_dl();

    let LoopCount{loops, length_min} = select_loop_count(
        spec.width, spec.height, spec.spacing, corner_dl, spec.length,
    )?;
    info!(loops, length = spec.length, length_min, "selected loop count");

    if spec.length < length_min {
        return Err(SpiralError::LengthTooShort{requested: spec.length, minimum: length_min});
    }

    let height = solve_height(
        spec.width, spec.spacing, spec.length, corner_dl, loops, spec.height, solver,
    )?;
    info!(height, "solved spiral height");

    check_footprint(spec.height, height, solver.abs_tolerance(spec.height))?;

    let SpiralPath{waypoints, portlist} = generate_waypoints(spec, template.bend_radius, loops, height);

    let clearance = bend_clearance(&waypoints, template.bend_radius);
    if clearance < -GEO_EPSILON * spec.height.max(1.0) {
        warn!(clearance, bend_radius = template.bend_radius,
            "some runs are too short for the bend radius, the bend renderer will reject this spiral");
    }

    Ok(Spiral{
        spec: spec.clone(),
        template: template.clone(),
        loops,
        length_min,
        height,
        waypoints,
        portlist,
        rendered: None,
    })
}

/// Fail if the solved height grew past the requested bound.
/// The smallest loop count reaching the length at the bound can only shrink the
/// height, so this only trips on a misbehaving solve.
pub fn check_footprint(requested: f64, solved: f64, tolerance: f64) -> ProcResult<()> {
    if solved - requested > tolerance {
        warn!(requested, solved, "solved height exceeds the requested footprint");
        return Err(SpiralError::FootprintExceeded{requested, solved});
    }
    Ok(())
}

/// Smallest slack left on any run once its bends are cut out.
/// Every interior waypoint is taken as a bend of `bend_radius`, so inner runs
/// lose `2 * bend_radius` and the two end runs lose one.
pub fn bend_clearance(waypoints: &[Point], bend_radius: f64) -> f64 {
    let last = waypoints.len().saturating_sub(2);
    waypoints.iter()
        .tuple_windows()
        .enumerate()
        .map(|(i, (a, b))| {
            let bends = usize::from(i > 0) + usize::from(i < last);
            a.distance(b) - bends as f64 * bend_radius
        })
        .fold(f64::INFINITY, f64::min)
}

/// Run the spiral process for a target: compute the spiral, then hand the waypoints to the renderer.
pub fn do_spiral(spiral_target: &SpiralTarget) -> ProcResult<Spiral> {
    let spiral_args = &spiral_target.spiral_args;
    let renderer = &spiral_target.renderer;

    println!("Solving spiral: width {}, height {}, length {}...",
        spiral_target.spec.width, spiral_target.spec.height, spiral_target.spec.length);
    let mut spiral = build_spiral(&spiral_target.spec, &spiral_args.template, &spiral_args.solver)?;
    println!("Loop pairs: {}, solved height: {:.4}, path length: {:.4}",
        spiral.loops, spiral.height, spiral.path_length());

    println!("Rendering with: {}...", renderer.get_renderer_name());
    spiral.rendered = Some(renderer.render(&spiral.waypoints, &spiral.template)?);

    Ok(spiral)
}

pub fn save_spiral(spiral: &Spiral, output_path: &str) -> ProcResult<()> {
    println!("Saving spiral to {}...", output_path);
    let f = crate::io::create(output_path)?;
    serde_json::to_writer_pretty(f, spiral)?;
    Ok(())
}

pub fn load_spiral(input_path: &str) -> ProcResult<Spiral> {
    println!("Loading spiral from {}...", input_path);
    let f = crate::io::open(input_path)?;
    let spiral: Spiral = serde_json::from_reader(f)?;
    Ok(spiral)
}
