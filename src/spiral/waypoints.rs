use crate::geo_2d::{Point, Direction};
use crate::spiral::{SpiralSpec, Port, Portlist};

/// Waypoints of a double spiral with its two ports.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralPath {
    pub waypoints: Vec<Point>,
    pub portlist: Portlist,
}

/// Number of waypoints generated for `loops >= 1` loop pairs:
/// 4 start, 2 per inward turn, 2 at the center, 2 per outward turn, 6 end.
pub fn waypoint_count(loops: usize) -> usize {
    4 * loops + 8
}

/// Build the double-spiral polyline for a solved loop count and height.
///
/// Points are laid out in a local frame `(u, v)` with the input port at the
/// origin, `u` pointing into the spiral and `v` pointing north, then mapped to
/// the layout frame with `x = x0 + parity * u`, `y = y0 + v`.
pub fn generate_waypoints(spec: &SpiralSpec, bend_radius: f64, loops: usize, height: f64) -> SpiralPath {
    debug_assert!(loops >= 1, "a spiral needs at least one loop pair");
    let (w, h, s) = (spec.width, height, spec.spacing);
    let p = spec.parity.sign();
    let anchor = Point::new(
        spec.center.x - p * w / 2.0,
        spec.center.y - h / 2.0,
    );
    let to_layout = |q: Point| Point::new(anchor.x + p * q.x, anchor.y + q.y);

    let start_points = [
        Point::new(0.0, 0.0),
        Point::new(0.0, h - s),
        Point::new(w - s, h - s),
        Point::new(w - s, s),
    ];
    let end_points = [
        Point::new(s, h - 2.0 * s),
        Point::new(s, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
        Point::new(0.0, h + bend_radius),
    ];

    // Inner box the loops wind around
    let (wp, hp) = (w - 2.0 * s, h - 3.0 * s);

    let inward = spiral_arm(Point::new(s + wp, s), 1.0, wp, hp, s, loops);

    // Cross the center, heading up for odd loop counts and down for even ones
    let last = inward.last().copied().unwrap_or(start_points[3]);
    let rise = hp - 2.0 * (loops as f64 - 1.0) * s;
    let rise = if loops % 2 == 1 { rise } else { -rise };
    let cross_start = Point::new(s + wp / 2.0, last.y);
    let center = [cross_start, Point::new(cross_start.x, cross_start.y + rise)];

    let mut outward = spiral_arm(Point::new(s, s + hp), -1.0, wp, hp, s, loops);
    outward.reverse();

    let waypoints: Vec<Point> = start_points.into_iter()
        .chain(inward)
        .chain(center)
        .chain(outward)
        .chain(end_points)
        .map(to_layout)
        .collect();

    let portlist = Portlist{
        input: Port{port: waypoints[0], direction: Direction::South},
        output: Port{port: waypoints[waypoints.len() - 1], direction: Direction::North},
    };

    SpiralPath{waypoints, portlist}
}

/// One arm of the spiral in the local frame.
/// Each of the `loops - 1` turns makes a horizontal then a vertical move,
/// shrinking by `2s` per turn. Odd turns move by `(-turn, +turn)` in `(u, v)`,
/// even turns the other way round.
fn spiral_arm(start: Point, turn: f64, wp: f64, hp: f64, s: f64, loops: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(2 * loops.saturating_sub(1));
    let mut cur = start;

    for i in 1..loops {
        let shrink = 2.0 * i as f64 * s;
        let sign = if i % 2 == 1 { turn } else { -turn };

        cur.x -= sign * (wp + s - shrink);
        points.push(cur);
        cur.y += sign * (hp + s - shrink);
        points.push(cur);
    }
    points
}
