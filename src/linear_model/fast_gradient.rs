use super::line_search::backtrack;
use super::logistic_loss::{check_coefficients, check_problem, gradient_unchecked};
use super::monitor::{LogMonitor, Monitor};
use super::params::SolverParams;
use super::trajectory::Trajectory;
use crate::error::Result;
use crate::{Matrix, Vector};

const NAME: &str = "fast gradient";

/// Iterates of a [`FastGradient`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct FastGradientPath {
    /// Working points `β`, the solution estimates.
    pub beta: Trajectory,
    /// Extrapolation points `θ` at which gradients were taken.
    pub theta: Trajectory,
}

/// Accelerated gradient method.
///
/// Iteration `k` (counting from 0) takes a line-searched gradient step from
/// the extrapolation point and then extrapolates along the last move:
///
/// ```text
/// η      = line_search(θ)
/// β_new  = θ - η∇F(θ)
/// θ      = β_new + k / (k + 3) · (β_new - β)
/// ```
///
/// The objective along `β` is not monotone; it falls in the long run at the
/// `O(1/k²)` rate rather than at every step.
#[derive(Clone, Debug)]
pub struct FastGradient {
    params: SolverParams,
}

impl FastGradient {
    pub fn new(params: SolverParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    pub fn run(
        &self,
        x: &Matrix,
        y: &Vector,
        beta_init: &Vector,
        theta_init: &Vector,
    ) -> Result<FastGradientPath> {
        self.run_with(x, y, beta_init, theta_init, LogMonitor::new(self.params.log_every))
    }

    pub fn run_with<M: Monitor>(
        &self,
        x: &Matrix,
        y: &Vector,
        beta_init: &Vector,
        theta_init: &Vector,
        mut monitor: M,
    ) -> Result<FastGradientPath> {
        check_problem(x, y)?;
        check_coefficients(x, beta_init, "beta_init")?;
        check_coefficients(x, theta_init, "theta_init")?;

        let SolverParams {
            lambda,
            eta_init,
            max_iter,
            ..
        } = self.params;
        let line_search = &self.params.line_search;

        let mut betas = Trajectory::with_capacity(beta_init.clone(), max_iter + 1);
        let mut thetas = Trajectory::with_capacity(theta_init.clone(), max_iter + 1);
        let mut beta = beta_init.clone();
        let mut theta = theta_init.clone();
        let mut grad = gradient_unchecked(x, y, &theta, lambda);

        for k in 0..max_iter {
            let step = backtrack(x, y, &theta, &grad, lambda, eta_init, line_search);
            if !step.converged {
                monitor.on_line_search_stall(NAME, k + 1, step.step_size, step.trials);
            }

            let beta_new = &theta - &(&grad * step.step_size);
            let weight = k as f64 / (k as f64 + 3.0);
            theta = &beta_new + &((&beta_new - &beta) * weight);

            betas.push(beta_new.clone());
            thetas.push(theta.clone());
            grad = gradient_unchecked(x, y, &theta, lambda);
            beta = beta_new;

            monitor.on_iteration(NAME, k + 1, &beta, step.step_size);
        }

        Ok(FastGradientPath {
            beta: betas,
            theta: thetas,
        })
    }
}

/// Runs [`FastGradient`] with default line-search constants.
pub fn fast_gradient(
    x: &Matrix,
    y: &Vector,
    beta_init: &Vector,
    theta_init: &Vector,
    lambda: f64,
    eta_init: f64,
    max_iter: usize,
) -> Result<FastGradientPath> {
    FastGradient::new(SolverParams::new(lambda, eta_init, max_iter))?.run(
        x, y, beta_init, theta_init,
    )
}
