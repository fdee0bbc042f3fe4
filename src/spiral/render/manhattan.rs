use crate::geo_2d::{Point, polyline_length};
use crate::spiral::{self, WaveguideTemplate};
use crate::spiral::render::{self, PathRenderer, RenderedPath};

/// Manhattan renderer.
/// Keeps the corners sharp; the centerline is the waypoint list itself.
#[derive(Debug, Clone, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }
}

impl PathRenderer for Renderer {
    fn get_renderer_name(&self) -> String {
        "Manhattan".to_string()
    }

    fn render(&self, waypoints: &[Point], template: &WaveguideTemplate) -> spiral::ProcResult<RenderedPath> {
        render::check_waypoints(waypoints)?;
        let length = polyline_length(waypoints);
        Ok(RenderedPath::new(&self.get_renderer_name(), waypoints.to_vec(), length, template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spiral::Resist;

    #[test]
    fn passes_waypoints_through() {
        let template = WaveguideTemplate{layer: 4, datatype: 2, resist: Resist::Negative, ..Default::default()};
        let waypoints = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(60.0, 100.0),
        ];
        let rendered = Renderer::new().render(&waypoints, &template).unwrap();
        assert_eq!(rendered.points, waypoints);
        assert_eq!(rendered.length, 160.0);
        assert_eq!((rendered.layer, rendered.datatype), (4, 2));
        assert_eq!(rendered.resist, Resist::Negative);
        assert_eq!(rendered.renderer, "Manhattan");
    }
}
