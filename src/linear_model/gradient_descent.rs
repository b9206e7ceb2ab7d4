use super::line_search::backtrack;
use super::logistic_loss::{check_coefficients, check_problem, gradient_unchecked};
use super::monitor::{LogMonitor, Monitor};
use super::params::SolverParams;
use super::trajectory::Trajectory;
use crate::error::Result;
use crate::{Matrix, Vector};

const NAME: &str = "gradient descent";

/// Gradient descent with a backtracking line search at every iteration.
///
/// Each iteration computes `η` by line search from `eta_init`, moves to
/// `β - η∇F(β)` and records the new point. A stalled line search is reported
/// to the monitor and its last step is used anyway.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    params: SolverParams,
}

impl GradientDescent {
    pub fn new(params: SolverParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Runs `max_iter` iterations from `beta_init`, logging through [`LogMonitor`].
    pub fn run(&self, x: &Matrix, y: &Vector, beta_init: &Vector) -> Result<Trajectory> {
        self.run_with(x, y, beta_init, LogMonitor::new(self.params.log_every))
    }

    /// Runs `max_iter` iterations from `beta_init`, reporting to `monitor`.
    pub fn run_with<M: Monitor>(
        &self,
        x: &Matrix,
        y: &Vector,
        beta_init: &Vector,
        mut monitor: M,
    ) -> Result<Trajectory> {
        check_problem(x, y)?;
        check_coefficients(x, beta_init, "beta_init")?;

        let SolverParams {
            lambda,
            eta_init,
            max_iter,
            ..
        } = self.params;
        let line_search = &self.params.line_search;

        let mut path = Trajectory::with_capacity(beta_init.clone(), max_iter + 1);
        let mut beta = beta_init.clone();
        let mut grad = gradient_unchecked(x, y, &beta, lambda);

        for iteration in 1..=max_iter {
            let step = backtrack(x, y, &beta, &grad, lambda, eta_init, line_search);
            if !step.converged {
                monitor.on_line_search_stall(NAME, iteration, step.step_size, step.trials);
            }

            beta = &beta - &(&grad * step.step_size);
            path.push(beta.clone());
            grad = gradient_unchecked(x, y, &beta, lambda);

            monitor.on_iteration(NAME, iteration, &beta, step.step_size);
        }

        Ok(path)
    }
}

/// Runs [`GradientDescent`] with default line-search constants.
pub fn gradient_descent(
    x: &Matrix,
    y: &Vector,
    beta_init: &Vector,
    lambda: f64,
    eta_init: f64,
    max_iter: usize,
) -> Result<Trajectory> {
    GradientDescent::new(SolverParams::new(lambda, eta_init, max_iter))?.run(x, y, beta_init)
}
