//! Diagnostic hooks invoked by the solvers.
//!
//! Monitors observe a run; they never influence the iterates.

use crate::Vector;

/// Receives progress and stall notifications from a solver run.
pub trait Monitor {
    /// Called after iteration `iteration` (1-based) produced `beta`.
    fn on_iteration(&mut self, solver: &str, iteration: usize, beta: &Vector, step_size: f64) {
        let _ = (solver, iteration, beta, step_size);
    }

    /// Called when the line search of iteration `iteration` hit its attempt cap.
    fn on_line_search_stall(
        &mut self,
        solver: &str,
        iteration: usize,
        step_size: f64,
        trials: usize,
    ) {
        let _ = (solver, iteration, step_size, trials);
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMonitor;

impl Monitor for NoopMonitor {}

/// Forwards notifications to the `log` facade.
///
/// Progress goes to `debug` every `every` iterations, stalls to `warn`.
#[derive(Clone, Copy, Debug)]
pub struct LogMonitor {
    every: usize,
}

impl LogMonitor {
    pub fn new(every: usize) -> Self {
        Self { every }
    }

    /// Whether progress is reported after `iteration`; never when `every` is 0.
    fn reports(&self, iteration: usize) -> bool {
        self.every > 0 && iteration % self.every == 0
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Monitor for LogMonitor {
    fn on_iteration(&mut self, solver: &str, iteration: usize, _beta: &Vector, step_size: f64) {
        if self.reports(iteration) {
            log::debug!("{} iteration {} (step {:.3e})", solver, iteration, step_size);
        }
    }

    fn on_line_search_stall(
        &mut self,
        solver: &str,
        iteration: usize,
        step_size: f64,
        trials: usize,
    ) {
        log::warn!(
            "{} iteration {}: line search reached {} trials without sufficient decrease, \
             using step {:.3e}",
            solver,
            iteration,
            trials,
            step_size
        );
    }
}

impl<M: Monitor + ?Sized> Monitor for &mut M {
    fn on_iteration(&mut self, solver: &str, iteration: usize, beta: &Vector, step_size: f64) {
        (**self).on_iteration(solver, iteration, beta, step_size);
    }

    fn on_line_search_stall(
        &mut self,
        solver: &str,
        iteration: usize,
        step_size: f64,
        trials: usize,
    ) {
        (**self).on_line_search_stall(solver, iteration, step_size, trials);
    }
}
