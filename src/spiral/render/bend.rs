use std::f64::consts::PI;

use crate::geo_2d::{Point, GEO_EPSILON};
use crate::spiral::{self, SpiralError, WaveguideTemplate};
use crate::spiral::render::{self, PathRenderer, RenderedPath};

/// Upper bound on chords per quarter circle.
pub const MAX_ARC_SEGMENTS: usize = 1024;

/// Bend renderer.
/// Replaces every corner with a circular arc of the template bend radius,
/// tangent to both adjacent runs.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Chords per quarter circle.
    arc_segments: usize,
}

impl Renderer {
    pub fn new(arc_segments: usize) -> spiral::ProcResult<Self> {
        if arc_segments == 0 {
            spiral::err_spec("arc_segments must be at least 1")?;
        }
        if arc_segments > MAX_ARC_SEGMENTS {
            spiral::err_spec(&format!("arc_segments must be at most {MAX_ARC_SEGMENTS} (got {arc_segments})"))?;
        }
        Ok(Renderer{arc_segments})
    }
}

/// Turn at an interior waypoint.
enum Corner {
    /// Runs continue in the same direction.
    Straight,
    /// Quarter turn, `+1` counter-clockwise, `-1` clockwise.
    Quarter(f64),
}

fn classify(d_in: Point, d_out: Point) -> spiral::ProcResult<Corner> {
    let cross = d_in.x * d_out.y - d_in.y * d_out.x;
    let dot = d_in.x * d_out.x + d_in.y * d_out.y;
    if cross.abs() <= GEO_EPSILON {
        if dot > 0.0 {
            return Ok(Corner::Straight);
        }
        return Err(SpiralError::Render("path doubles back on itself".to_string()));
    }
    Ok(Corner::Quarter(cross.signum()))
}

impl PathRenderer for Renderer {
    fn get_renderer_name(&self) -> String {
        "Bend".to_string()
    }

    fn render(&self, waypoints: &[Point], template: &WaveguideTemplate) -> spiral::ProcResult<RenderedPath> {
        render::check_waypoints(waypoints)?;
        let r = template.bend_radius;
        let count = waypoints.len();

        // Classify every interior corner first, so run lengths can be checked
        // against the bends at both of their ends.
        let mut corners = Vec::with_capacity(count.saturating_sub(2));
        for i in 1..count - 1 {
            let d_in = (waypoints[i] - waypoints[i - 1]).normalize();
            let d_out = (waypoints[i + 1] - waypoints[i]).normalize();
            corners.push(classify(d_in, d_out)?);
        }
        let trim = |corner: Option<&Corner>| match corner {
            Some(Corner::Quarter(_)) => r,
            _ => 0.0,
        };

        let mut length = 0.0;
        for i in 0..count - 1 {
            let run = waypoints[i].distance(&waypoints[i + 1]);
            // corners[k] sits at waypoints[k + 1]
            let start_trim = if i == 0 { 0.0 } else { trim(corners.get(i - 1)) };
            let end_trim = trim(corners.get(i));
            let straight = run - start_trim - end_trim;
            if straight < -GEO_EPSILON * run.max(1.0) {
                return Err(SpiralError::Render(format!(
                    "segment {} from {} to {} is {:.3} long, too short for bend radius {}",
                    i, waypoints[i], waypoints[i + 1], run, r,
                )));
            }
            length += straight.max(0.0);
        }

        let mut points = Vec::with_capacity(count + corners.len() * self.arc_segments);
        points.push(waypoints[0]);
        for (k, corner) in corners.iter().enumerate() {
            let vertex = waypoints[k + 1];
            let turn = match corner {
                Corner::Straight => continue,
                Corner::Quarter(turn) => *turn,
            };
            let d_in = (vertex - waypoints[k]).normalize();
            let d_out = (waypoints[k + 2] - vertex).normalize();

            let center = vertex - d_in * r + d_out * r;
            let start_angle = {
                let from_center = -d_out;
                from_center.y.atan2(from_center.x)
            };
            for step in 0..=self.arc_segments {
                let angle = start_angle + turn * (PI / 2.0) * step as f64 / self.arc_segments as f64;
                let point = center + Point::new(angle.cos(), angle.sin()) * r;
                if points.last().map_or(true, |last: &Point| !last.approx_eq(&point, GEO_EPSILON)) {
                    points.push(point);
                }
            }
            length += r * PI / 2.0;
        }
        let end = waypoints[count - 1];
        if points.last().map_or(true, |last| !last.approx_eq(&end, GEO_EPSILON)) {
            points.push(end);
        }

        Ok(RenderedPath::new(&self.get_renderer_name(), points, length, template))
    }
}
