use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::spiral::{SpiralError, ProcResult};
use crate::spiral::length::{spiral_length, loop_fits};

/// Relative offset of the second secant seed from the first.
const SEED_STEP: f64 = 1e-4;

/// Root finder settings for the height solve.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SolverCfg {
    /// Maximum number of secant steps.
    #[serde(default = "SolverCfg::default_max_iterations")]
    pub max_iterations: usize,
    /// Residual tolerance, relative to max(1, |target length|).
    #[serde(default = "SolverCfg::default_tolerance")]
    pub tolerance: f64,
}
impl SolverCfg {
    pub fn default_max_iterations() -> usize {
        100
    }
    pub fn default_tolerance() -> f64 {
        1e-9
    }

    /// Absolute residual tolerance for a target value.
    pub fn abs_tolerance(&self, target: f64) -> f64 {
        self.tolerance * target.abs().max(1.0)
    }
}
impl Default for SolverCfg {
    fn default() -> Self {
        SolverCfg{
            max_iterations: SolverCfg::default_max_iterations(),
            tolerance: SolverCfg::default_tolerance(),
        }
    }
}

/// Find a root of `f` with the secant method, seeded at `x0`.
/// Fails instead of returning an unconverged estimate.
pub fn secant_root<F>(f: F, x0: f64, abs_tolerance: f64, max_iterations: usize) -> ProcResult<f64>
where F: Fn(f64) -> f64
{
    let diverged = |iterations: usize, estimate: f64, residual: f64| SpiralError::SolverDiverged{
        iterations, estimate, residual,
    };

    let mut x_prev = x0;
    let mut f_prev = f(x_prev);
    if !f_prev.is_finite() {
        return Err(diverged(0, x_prev, f_prev));
    }
    if f_prev.abs() <= abs_tolerance {
        return Ok(x_prev);
    }

    let mut x = if x0 == 0.0 { SEED_STEP } else { x0 * (1.0 + SEED_STEP) };
    for iteration in 1..=max_iterations {
        let fx = f(x);
        if !x.is_finite() || !fx.is_finite() {
            return Err(diverged(iteration, x, fx));
        }
        if fx.abs() <= abs_tolerance {
            debug!(iteration, root = x, residual = fx, "secant converged");
            return Ok(x);
        }

        let slope = (fx - f_prev) / (x - x_prev);
        if slope == 0.0 || !slope.is_finite() {
            return Err(diverged(iteration, x, fx));
        }

        x_prev = x;
        f_prev = fx;
        x -= fx / slope;
    }

    Err(diverged(max_iterations, x, f(x)))
}

/// Solve for the height at which `loops` loop pairs give exactly `length`.
/// The solved height may differ from `initial_height`, which is only the seed.
pub fn solve_height(
    width: f64,
    spacing: f64,
    length: f64,
    corner_dl: f64,
    loops: usize,
    initial_height: f64,
    cfg: &SolverCfg,
) -> ProcResult<f64> {
    let residual = |h: f64| length - spiral_length(width, spacing, h, corner_dl, loops);
    let height = secant_root(residual, initial_height, cfg.abs_tolerance(length), cfg.max_iterations)?;

    if height <= 0.0 || !loop_fits(width, height, spacing, loops, 0.0) {
        return Err(SpiralError::DegenerateGeometry(format!(
            "solved height {height:.3} leaves no room for {loops} loop pairs at spacing {spacing}"
        )));
    }
    Ok(height)
}
