//! Closed-form path length of the double spiral.
//!
//! With outer width `w`, spacing `s`, corner correction `c`, `n` loop pairs and height `h`:
//!
//! ```text
//! width_term  = w + 2(w-s) + sum_{i=1..n-1} 2(w - s - 2is) + (w - 2ns)
//! height_term = h + (h-s) + sum_{i=1..n}   2(h - 2is)     + (h - s - 2ns)
//! length      = width_term + height_term - 6c - 4nc
//! ```
//!
//! The `6 + 4n` corrections are one per corner of the polyline; the output
//! stub of one bend radius beyond the top edge is not part of the length.

/// Analytic path length for `loops` loop pairs at the given height.
pub fn spiral_length(width: f64, spacing: f64, height: f64, corner_dl: f64, loops: usize) -> f64 {
    let (w, s, h, c) = (width, spacing, height, corner_dl);
    let n = loops as f64;

    let width_term = w + 2.0 * (w - s)
        + (1..loops).map(|i| 2.0 * (w - s - 2.0 * i as f64 * s)).sum::<f64>()
        + (w - 2.0 * n * s);
    let height_term = h + (h - s)
        + (1..=loops).map(|i| 2.0 * (h - 2.0 * i as f64 * s)).sum::<f64>()
        + (h - s - 2.0 * n * s);

    width_term + height_term - corner_count(loops) as f64 * c
}

/// Number of polyline corners for `loops` loop pairs (each one a 90 degree bend).
pub fn corner_count(loops: usize) -> usize {
    4 * loops + 6
}

/// Check that the innermost horizontal and vertical runs of `loops` loop pairs
/// stay longer than `margin` for the given footprint.
pub fn loop_fits(width: f64, height: f64, spacing: f64, loops: usize, margin: f64) -> bool {
    let inner = 2.0 * loops as f64 * spacing;
    width - inner > margin && height - spacing - inner > margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spiral::WaveguideTemplate;

    #[test]
    fn single_loop_by_hand() {
        // w = h = 100, s = 10, no corner loss:
        // width: 100 + 180 + 0 + 80 = 360, height: 100 + 90 + 160 + 70 = 420
        assert_eq!(spiral_length(100.0, 10.0, 100.0, 0.0, 1), 780.0);
        // Ten corners at c = 1.
        assert_eq!(spiral_length(100.0, 10.0, 100.0, 1.0, 1), 770.0);
    }

    #[test]
    fn length_is_linear_in_height() {
        let c = WaveguideTemplate::with_bend_radius(50.0).corner_dl();
        for loops in 1..8 {
            let l0 = spiral_length(1000.0, 30.0, 800.0, c, loops);
            let l1 = spiral_length(1000.0, 30.0, 801.0, c, loops);
            // h appears 3 + 2n times in the height term
            assert!((l1 - l0 - (3.0 + 2.0 * loops as f64)).abs() < 1e-9);
        }
    }

    #[test]
    fn more_loops_never_shorter() {
        for &radius in &[5.0, 20.0, 50.0] {
            let c = WaveguideTemplate::with_bend_radius(radius).corner_dl();
            for &spacing in &[6.0, 15.0, 30.0] {
                for &width in &[400.0, 1000.0, 2500.0] {
                    for &height in &[300.0, 1000.0, 1800.0] {
                        let mut loops = 1;
                        while loop_fits(width, height, spacing, loops + 1, c) {
                            let shorter = spiral_length(width, spacing, height, c, loops);
                            let longer = spiral_length(width, spacing, height, c, loops + 1);
                            assert!(longer >= shorter,
                                "w={width} h={height} s={spacing} r={radius} n={loops}: {longer} < {shorter}");
                            loops += 1;
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn fit_limit() {
        // Innermost width run is 1000 - 2*16*30 = 40 at n = 16, negative at n = 17.
        assert!(loop_fits(1000.0, 1000.0, 30.0, 16, 0.0));
        assert!(!loop_fits(1000.0, 1000.0, 30.0, 17, 0.0));
        assert!(!loop_fits(1000.0, 1000.0, 30.0, 16, 40.0));
    }
}
