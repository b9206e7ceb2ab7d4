//! Backtracking line search.
//!
//! Starting from a trial step `η`, accept the first step satisfying
//!
//! ```text
//! F(β - η∇) < F(β) - α·η·‖∇‖²
//! ```
//!
//! and otherwise shrink `η ← decay·η`, testing at most `max_iter` steps.
//! Exhausting the cap is not an error: the last tested step is returned with
//! `converged == false` and the caller carries on with it.

use super::logistic_loss::{
    check_coefficients, check_lambda, check_problem, gradient_unchecked, objective_unchecked,
};
use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// Tuning constants of the backtracking search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSearchParams {
    /// Sufficient-decrease constant, in `(0, 0.5]`.
    pub alpha: f64,
    /// Shrink factor applied after each rejected step, in `(0, 1)`.
    pub decay: f64,
    /// Maximum number of trial steps, at least one.
    pub max_iter: usize,
}

impl LineSearchParams {
    pub fn new() -> Self {
        Self {
            alpha: 0.5,
            decay: 0.8,
            max_iter: 100,
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 0.5) {
            return Err(Error::InvalidHyperparameter(format!(
                "line search alpha must be in (0, 0.5], got {}",
                self.alpha
            )));
        }
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(Error::InvalidHyperparameter(format!(
                "line search decay must be in (0, 1), got {}",
                self.decay
            )));
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidHyperparameter(
                "line search max_iter must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LineSearchParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one line search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSearchResult {
    /// The accepted step, or the last one tested when `converged` is false.
    pub step_size: f64,
    /// Whether the sufficient-decrease condition was met.
    pub converged: bool,
    /// Number of trial steps evaluated.
    pub trials: usize,
}

/// Chooses a step along `-∇F(β)` by backtracking from `eta`.
pub fn line_search(
    x: &Matrix,
    y: &Vector,
    beta: &Vector,
    lambda: f64,
    eta: f64,
    params: &LineSearchParams,
) -> Result<LineSearchResult> {
    check_problem(x, y)?;
    check_coefficients(x, beta, "beta")?;
    check_lambda(lambda)?;
    check_step(eta)?;
    params.validate()?;

    let grad = gradient_unchecked(x, y, beta, lambda);
    Ok(backtrack(x, y, beta, &grad, lambda, eta, params))
}

/// Backtracking with a precomputed gradient at `beta`.
///
/// Inputs are assumed validated.
pub(crate) fn backtrack(
    x: &Matrix,
    y: &Vector,
    beta: &Vector,
    grad: &Vector,
    lambda: f64,
    eta: f64,
    params: &LineSearchParams,
) -> LineSearchResult {
    let grad_norm_sq = grad.dot(grad);
    if grad_norm_sq == 0.0 {
        return LineSearchResult {
            step_size: eta,
            converged: true,
            trials: 0,
        };
    }

    let current = objective_unchecked(x, y, beta, lambda);
    let mut eta = eta;
    for trial in 1..=params.max_iter {
        let candidate = beta - &(grad * eta);
        let value = objective_unchecked(x, y, &candidate, lambda);
        if value < current - params.alpha * eta * grad_norm_sq {
            return LineSearchResult {
                step_size: eta,
                converged: true,
                trials: trial,
            };
        }
        log::trace!("line search rejected step {:.3e} (objective {:.6e})", eta, value);
        if trial < params.max_iter {
            eta *= params.decay;
        }
    }

    LineSearchResult {
        step_size: eta,
        converged: false,
        trials: params.max_iter,
    }
}

pub(crate) fn check_step(eta: f64) -> Result<()> {
    if !(eta > 0.0) || !eta.is_finite() {
        return Err(Error::InvalidHyperparameter(format!(
            "step size must be finite and positive, got {}",
            eta
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::logistic_loss::{gradient, objective};
    use crate::linear_model::testing::{four_points, random_problem};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_accepts_initial_step_when_small_enough() {
        let (x, y) = four_points();
        let result =
            line_search(&x, &y, &array![0.0, 0.0], 0.1, 0.5, &LineSearchParams::default()).unwrap();
        assert!(result.converged);
        assert_eq!(result.trials, 1);
        assert_eq!(result.step_size, 0.5);
    }

    #[test]
    fn test_shrinks_large_step_until_sufficient_decrease() {
        let (x, y) = random_problem(40, 3, 11);
        let beta = array![0.5, -0.5, 1.0];
        let lambda = 0.1;
        let params = LineSearchParams::default();
        let result = line_search(&x, &y, &beta, lambda, 100.0, &params).unwrap();

        assert!(result.converged);
        assert!(result.trials > 1);
        assert_abs_diff_eq!(
            result.step_size,
            100.0 * params.decay.powi(result.trials as i32 - 1),
            epsilon = 1e-9
        );

        let g = gradient(&x, &y, &beta, lambda).unwrap();
        let before = objective(&x, &y, &beta, lambda).unwrap();
        let after = objective(&x, &y, &(&beta - &(&g * result.step_size)), lambda).unwrap();
        assert!(after < before - params.alpha * result.step_size * g.dot(&g));
    }

    #[test]
    fn test_stall_returns_last_tested_step() {
        let (x, y) = four_points();
        let params = LineSearchParams::new().max_iter(3).decay(0.5);
        let result = line_search(&x, &y, &array![0.0, 0.0], 0.1, 1e6, &params).unwrap();
        assert!(!result.converged);
        assert_eq!(result.trials, 3);
        assert_eq!(result.step_size, 1e6 * 0.25);
    }

    #[test]
    fn test_zero_gradient_returns_immediately() {
        // Symmetric data: the gradient vanishes at the origin.
        let x = array![[1.0], [-1.0]];
        let y = array![1.0, 1.0];
        let result = line_search(&x, &y, &array![0.0], 0.0, 2.0, &LineSearchParams::default())
            .unwrap();
        assert!(result.converged);
        assert_eq!(result.trials, 0);
        assert_eq!(result.step_size, 2.0);
    }

    #[test]
    fn test_validates_params() {
        let (x, y) = four_points();
        let beta = array![0.0, 0.0];
        for params in [
            LineSearchParams::new().alpha(0.0),
            LineSearchParams::new().alpha(0.6),
            LineSearchParams::new().decay(1.0),
            LineSearchParams::new().decay(0.0),
            LineSearchParams::new().max_iter(0),
        ] {
            assert!(matches!(
                line_search(&x, &y, &beta, 0.1, 1.0, &params),
                Err(Error::InvalidHyperparameter(_))
            ));
        }
        assert!(line_search(&x, &y, &beta, 0.1, 0.0, &LineSearchParams::default()).is_err());
        assert!(LineSearchParams::new().alpha(0.5).validate().is_ok());
    }
}
