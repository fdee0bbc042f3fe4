/*!
 * This is the path renderer module.
 * Renderers turn a waypoint polyline and a waveguide template into a drawable path.
 * Adding new renderers should be done here.
 *
 * New renderers need:
 * - A struct implementing `PathRenderer`
 * - An enum variant containing that struct in `RendererChoice`
 * - A constructor name and function in `RENDERER_CONSTRUCTION`
 *
 */

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};

use crate::geo_2d::Point;
use crate::spiral::{self, Resist, WaveguideTemplate};

//
// ------------------------------------------------------------
// Code that requires modification to add a new renderer
//      |
//      V
//

// Source files for the renderers
mod manhattan;
mod bend;

/// Renderers enum.
/// To add a new renderer:
/// include it here,
/// add handling for its constructor in `RENDERER_CONSTRUCTION`,
/// and implement the `PathRenderer` trait for it.
#[derive(Debug)]
#[enum_dispatch(PathRenderer)]
pub enum RendererChoice {
    /// Sharp corners, exactly the waypoints.
    Manhattan(manhattan::Renderer),
    /// Corners replaced by arcs of the template bend radius.
    Bend(bend::Renderer),
}

/// Renderer construction array -- Written out in one place for easy modification.
/// To add a new renderer:
/// include it in the `RendererChoice` enum,
/// add handling for its constructor here,
/// and implement the `PathRenderer` trait for it.
const RENDERER_CONSTRUCTION: &[RendererConstructor] = &[
    RendererConstructor{
        arg_name: "manhattan",
        constructor: |_| {Ok(RendererChoice::Manhattan(manhattan::Renderer::new()))},
    },
    RendererConstructor{
        arg_name: "bend",
        constructor: |render_args| {Ok(RendererChoice::Bend(bend::Renderer::new(render_args.arc_segments)?))},
    },
];

//
// ------------------------------------------------------------
// Traits and structs that don't need modification,
// but are references for adding a new renderer
//      |
//      V
//

/// Path renderer trait.
/// This trait must be implemented for all renderers.
/// To add a new renderer:
/// include it in the `RendererChoice` enum,
/// add handling for its constructor in `RENDERER_CONSTRUCTION`,
/// and implement this trait for it.
#[enum_dispatch] // Lets the enum stand in for a trait object
pub trait PathRenderer {
    /// Get the name of the renderer.
    fn get_renderer_name(&self) -> String;

    /// Render a waypoint polyline with the given template.
    /// Returns a `ProcResult` with the `RenderedPath` or an `Err`.
    fn render(&self, waypoints: &[Point], template: &WaveguideTemplate) -> spiral::ProcResult<RenderedPath>;
}

/// Renderer settings shared by every renderer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderArgs {
    /// Chords per quarter-circle bend.
    #[serde(default = "RenderArgs::default_arc_segments")]
    pub arc_segments: usize,
}
impl RenderArgs {
    pub fn default_arc_segments() -> usize {
        16
    }
}
impl Default for RenderArgs {
    fn default() -> Self {
        RenderArgs{arc_segments: RenderArgs::default_arc_segments()}
    }
}

/// A rendered waveguide centerline, with the template data the layout needs to draw it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RenderedPath {
    /// Name of the renderer that made this path.
    pub renderer: String,
    /// Sampled centerline.
    pub points: Vec<Point>,
    pub layer: u16,
    pub datatype: u16,
    pub wg_width: f64,
    pub clad_width: f64,
    pub resist: Resist,
    /// Exact centerline length (arcs measured as arcs, not chords).
    pub length: f64,
}
impl RenderedPath {
    fn new(renderer: &str, points: Vec<Point>, length: f64, template: &WaveguideTemplate) -> Self {
        RenderedPath{
            renderer: renderer.to_string(),
            points,
            layer: template.layer,
            datatype: template.datatype,
            wg_width: template.wg_width,
            clad_width: template.clad_width,
            resist: template.resist,
            length,
        }
    }
}

/// Renderer constructor.
/// Used to construct a renderer from its name in the config file.
struct RendererConstructor {
    /// Name of the renderer.
    arg_name: &'static str,
    /// Constructor function.
    constructor: fn(&RenderArgs) -> spiral::ProcResult<RendererChoice>,
}

//
// ------------------------------------------------------------
// Functions and structs with no modification or reference needed
//      |
//      V
//

/// Renderer construction
impl RendererChoice {
    /// Construct a renderer from a name (given in the config file).
    pub fn from_name(arg_name: &str, render_args: &RenderArgs) -> spiral::ProcResult<Self> {
        for constructor in RENDERER_CONSTRUCTION {
            if constructor.arg_name == arg_name {
                return (constructor.constructor)(render_args);
            }
        }

        let mut error_str = format!("Renderer not found: {arg_name}\n");
        error_str.push_str("Available renderers:\n");
        for name in RendererChoice::available() {
            error_str.push_str(&format!("    {}\n", name));
        }
        spiral::err_str(&error_str)
    }

    /// Names accepted by `from_name`.
    pub fn available() -> Vec<&'static str> {
        RENDERER_CONSTRUCTION.iter().map(|constructor| constructor.arg_name).collect()
    }
}

/// Check that the waypoints describe a path the renderers can follow.
fn check_waypoints(waypoints: &[Point]) -> spiral::ProcResult<()> {
    if waypoints.len() < 2 {
        return Err(spiral::SpiralError::Render(format!(
            "a path needs at least 2 waypoints (got {})", waypoints.len()
        )));
    }
    if !crate::geo_2d::is_manhattan(waypoints) {
        return Err(spiral::SpiralError::Render(
            "waypoints must form an axis-aligned path without repeated points".to_string()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_every_listed_renderer() {
        for name in RendererChoice::available() {
            let renderer = RendererChoice::from_name(name, &RenderArgs::default()).unwrap();
            assert!(!renderer.get_renderer_name().is_empty());
        }
    }

    #[test]
    fn unknown_renderer_lists_alternatives() {
        match RendererChoice::from_name("polygon", &RenderArgs::default()) {
            Err(spiral::SpiralError::StringOnly(error)) => {
                assert!(error.contains("polygon"));
                assert!(error.contains("manhattan"));
                assert!(error.contains("bend"));
            },
            other => panic!("expected an error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_diagonal_paths() {
        let template = WaveguideTemplate::default();
        let renderer = RendererChoice::from_name("manhattan", &RenderArgs::default()).unwrap();
        let diagonal = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        assert!(matches!(
            renderer.render(&diagonal, &template),
            Err(spiral::SpiralError::Render(_))
        ));
        assert!(matches!(
            renderer.render(&diagonal[..1], &template),
            Err(spiral::SpiralError::Render(_))
        ));
    }
}
