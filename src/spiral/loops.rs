use tracing::debug;

use crate::spiral::{SpiralError, ProcResult};
use crate::spiral::length::{spiral_length, loop_fits};

/// Hard cap on the number of loop pairs tried.
/// The search must terminate even when the footprint can never reach the length.
pub const MAX_LOOP_PAIRS: usize = 50;

/// Result of the loop-count search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopCount {
    /// Smallest loop-pair count reaching the requested length.
    pub loops: usize,
    /// Length at one loop pair (the feasibility floor).
    pub length_min: f64,
}

/// Find the smallest number of loop pairs whose length at the bound height
/// reaches `length`.
/// Stops with `LengthTooLong` once the cap is hit, or once the next loop pair
/// no longer fits inside the footprint.
/// A footprint too small for even one loop pair is `DegenerateGeometry`.
pub fn select_loop_count(
    width: f64,
    height: f64,
    spacing: f64,
    corner_dl: f64,
    length: f64,
) -> ProcResult<LoopCount> {
    let mut length_min = None;
    let mut max_length = f64::NEG_INFINITY;
    let mut tried = 0;

    for loops in 1..=MAX_LOOP_PAIRS {
        if !loop_fits(width, height, spacing, loops, 0.0) {
            if loops == 1 {
                return Err(SpiralError::DegenerateGeometry(format!(
                    "a {width} x {height} footprint cannot hold one loop pair at spacing {spacing}"
                )));
            }
            debug!(loops, "loop pair no longer fits inside the footprint");
            break;
        }
        tried = loops;

        let trial = spiral_length(width, spacing, height, corner_dl, loops);
        debug!(loops, length = trial, "spiral length trial");

        let floor = *length_min.get_or_insert(trial);
        max_length = max_length.max(trial);

        if length <= trial {
            return Ok(LoopCount{loops, length_min: floor});
        }
    }

    Err(SpiralError::LengthTooLong{
        requested: length,
        min_length: length_min.unwrap_or(max_length),
        max_length,
        tried,
    })
}
