//! Bounded-iteration scalar root finder.
//!
//! Every curve family that needs an inverse lookup goes through this one
//! bisection routine, so convergence and failure semantics stay uniform: a
//! solve either converges within the iteration cap or reports a
//! `SolveError`, never looping unboundedly.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The bracket endpoints do not straddle a sign change.
    #[error("No sign change in bracket [{lo}, {hi}]")]
    BadBracket { lo: f64, hi: f64 },

    /// The objective produced a non-finite value.
    #[error("Non-finite objective value at {at}")]
    NonFinite { at: f64 },

    /// Iteration cap reached before the bracket shrank below tolerance.
    #[error("No convergence after {iterations} iterations (residual {residual:e})")]
    MaxIterations { iterations: usize, residual: f64 },
}

/// Bisection solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the independent variable
    pub abs_tol: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            abs_tol: 1e-6,
        }
    }
}

/// Bisection result.
#[derive(Clone, Copy, Debug)]
pub struct SolveOutcome {
    /// Root estimate
    pub root: f64,
    /// Number of iterations used
    pub iterations: usize,
    /// Objective value at the root estimate
    pub residual: f64,
}

/// Find a root of `f` in `[lo, hi]` by bisection.
///
/// Requires `f(lo)` and `f(hi)` to have opposite signs. Converges when the
/// bracket width drops below `config.abs_tol`, or fails deterministically
/// after `config.max_iterations`.
pub fn bisect<F>(mut f: F, lo: f64, hi: f64, config: &SolveConfig) -> Result<SolveOutcome, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut f_lo = f(lo);
    if !f_lo.is_finite() {
        return Err(SolveError::NonFinite { at: lo });
    }
    if f_lo == 0.0 {
        return Ok(SolveOutcome {
            root: lo,
            iterations: 0,
            residual: 0.0,
        });
    }
    let f_hi = f(hi);
    if !f_hi.is_finite() {
        return Err(SolveError::NonFinite { at: hi });
    }
    if f_hi == 0.0 {
        return Ok(SolveOutcome {
            root: hi,
            iterations: 0,
            residual: 0.0,
        });
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(SolveError::BadBracket { lo, hi });
    }

    let mut mid = 0.5 * (lo + hi);
    let mut f_mid = f(mid);
    for iter in 1..=config.max_iterations {
        if !f_mid.is_finite() {
            return Err(SolveError::NonFinite { at: mid });
        }
        if f_mid == 0.0 || hi - lo < config.abs_tol {
            return Ok(SolveOutcome {
                root: mid,
                iterations: iter,
                residual: f_mid,
            });
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
        f_mid = f(mid);
    }

    Err(SolveError::MaxIterations {
        iterations: config.max_iterations,
        residual: f_mid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_root() {
        let config = SolveConfig::default();
        let out = bisect(|x| x * x - 4.0, 0.0, 10.0, &config).unwrap();
        assert!((out.root - 2.0).abs() < 1e-5);
        assert!(out.iterations <= config.max_iterations);
    }

    #[test]
    fn reversed_bracket_is_normalized() {
        let out = bisect(|x| x - 1.5, 3.0, 0.0, &SolveConfig::default()).unwrap();
        assert!((out.root - 1.5).abs() < 1e-5);
    }

    #[test]
    fn endpoint_root_short_circuits() {
        let out = bisect(|x| x, 0.0, 5.0, &SolveConfig::default()).unwrap();
        assert_eq!(out.root, 0.0);
        assert_eq!(out.iterations, 0);
    }

    #[test]
    fn bad_bracket_reported() {
        let err = bisect(|x| x * x + 1.0, -1.0, 1.0, &SolveConfig::default()).unwrap_err();
        assert!(matches!(err, SolveError::BadBracket { .. }));
    }

    #[test]
    fn iteration_cap_is_respected() {
        let config = SolveConfig {
            max_iterations: 3,
            abs_tol: 1e-15,
        };
        let err = bisect(|x| x - std::f64::consts::PI, 0.0, 100.0, &config).unwrap_err();
        assert!(matches!(err, SolveError::MaxIterations { iterations: 3, .. }));
    }
}
