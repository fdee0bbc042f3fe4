mod point;
mod direction;

use itertools::Itertools;

pub use point::Point;
pub use direction::Direction;

/// Tolerance for treating two coordinates as equal.
pub const GEO_EPSILON: f64 = 1e-9;

/// Total length of an open polyline.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.iter()
        .tuple_windows()
        .map(|(a, b)| a.distance(b))
        .sum()
}

/// Check that every segment of a polyline is axis-aligned (a Manhattan path).
/// Zero-length segments are rejected, since they have no direction.
pub fn is_manhattan(points: &[Point]) -> bool {
    points.iter()
        .tuple_windows()
        .all(|(a, b)| {
            let dx = (a.x - b.x).abs();
            let dy = (a.y - b.y).abs();
            (dx <= GEO_EPSILON) != (dy <= GEO_EPSILON)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_length_sums_segments() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(4.0, 3.0),
        ];
        assert_eq!(polyline_length(&points), 7.0);
        assert_eq!(polyline_length(&points[..1]), 0.0);
    }

    #[test]
    fn manhattan_detection() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        assert!(is_manhattan(&square));

        let diagonal = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(!is_manhattan(&diagonal));

        let repeated = vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)];
        assert!(!is_manhattan(&repeated));
    }
}
