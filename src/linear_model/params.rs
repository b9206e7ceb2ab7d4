use super::line_search::{check_step, LineSearchParams};
use super::logistic_loss::check_lambda;
use crate::error::Result;

/// Hyperparameters shared by both solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverParams {
    /// L2 penalty strength `λ`.
    pub lambda: f64,
    /// Trial step handed to every line search.
    pub eta_init: f64,
    /// Number of iterations `T`.
    pub max_iter: usize,
    pub line_search: LineSearchParams,
    /// Progress is reported to the monitor's log every this many iterations.
    pub log_every: usize,
}

impl SolverParams {
    pub fn new(lambda: f64, eta_init: f64, max_iter: usize) -> Self {
        Self {
            lambda,
            eta_init,
            max_iter,
            line_search: LineSearchParams::default(),
            log_every: 100,
        }
    }

    pub fn line_search(mut self, line_search: LineSearchParams) -> Self {
        self.line_search = line_search;
        self
    }

    pub fn log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_lambda(self.lambda)?;
        check_step(self.eta_init)?;
        self.line_search.validate()
    }
}
