use super::fast_gradient::FastGradient;
use super::gradient_descent::GradientDescent;
use super::line_search::LineSearchParams;
use super::logistic_loss::{check_coefficients, check_problem, objective_unchecked};
use super::params::SolverParams;
use super::step_size::initial_step_size;
use super::trajectory::Trajectory;
use crate::error::{Error, Result};
use crate::metrics::{misclassification_error, sigmoid};
use crate::{Matrix, Vector};

/// Which iteration drives [`LogisticRegression::fit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Solver {
    GradientDescent,
    #[default]
    FastGradient,
}

/// L2-regularized logistic regression for ±1 labels.
///
/// When `fit_intercept` is set a column of ones is prepended to `X`; the
/// intercept is then penalized like every other coefficient.
#[derive(Clone, Debug)]
pub struct LogisticRegression {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    /// Every iterate of the last fit, on the design matrix actually used.
    pub path: Option<Trajectory>,
    solver: Solver,
    lambda: f64,
    eta_init: Option<f64>,
    max_iterations: usize,
    line_search: LineSearchParams,
    fit_intercept: bool,
}

impl LogisticRegression {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            path: None,
            solver: Solver::default(),
            lambda: 0.1,
            eta_init: None,
            max_iterations: 300,
            line_search: LineSearchParams::default(),
            fit_intercept: false,
        }
    }

    pub fn solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    pub fn lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Fixes the initial step; by default it is derived from the training data.
    pub fn eta_init(mut self, eta_init: f64) -> Self {
        self.eta_init = Some(eta_init);
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn line_search(mut self, line_search: LineSearchParams) -> Self {
        self.line_search = line_search;
        self
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        check_problem(x, y)?;

        let design = self.design_matrix(x);
        let eta_init = match self.eta_init {
            Some(eta) => eta,
            None => initial_step_size(&design, design.nrows(), design.ncols(), self.lambda)?,
        };
        let params = SolverParams::new(self.lambda, eta_init, self.max_iterations)
            .line_search(self.line_search);
        let start = Vector::zeros(design.ncols());

        let path = match self.solver {
            Solver::GradientDescent => GradientDescent::new(params)?.run(&design, y, &start)?,
            Solver::FastGradient => {
                FastGradient::new(params)?
                    .run(&design, y, &start, &start)?
                    .beta
            }
        };

        let fitted = path.last().cloned().unwrap_or(start);
        let (coeffs, intercept) = if self.fit_intercept {
            (fitted.slice(ndarray::s![1..]).to_owned(), fitted[0])
        } else {
            (fitted, 0.0)
        };

        log::debug!(
            "fitted logistic regression with {:?}, lambda {}, {} iterations",
            self.solver,
            self.lambda,
            self.max_iterations
        );
        self.coefficients = Some(coeffs);
        self.intercept = Some(intercept);
        self.path = Some(path);
        Ok(())
    }

    /// Predicted labels in `{-1, +1}`.
    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let probabilities = self.predict_proba(x)?;
        Ok(probabilities.mapv(|p| if p > 0.5 { 1.0 } else { -1.0 }))
    }

    /// Estimated probability of the `+1` label.
    pub fn predict_proba(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = self.coefficients.as_ref().ok_or(Error::NotFitted)?;
        let intercept = self.intercept.unwrap_or(0.0);
        check_coefficients(x, coeffs, "coefficients")?;

        let linear_combination = x.dot(coeffs) + intercept;
        Ok(linear_combination.mapv(sigmoid))
    }

    /// Fraction of samples classified correctly.
    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        Ok(1.0 - self.error_rate(x, y)?)
    }

    /// Fraction of samples classified incorrectly.
    pub fn error_rate(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let (design, beta) = self.fitted_problem(x)?;
        misclassification_error(&beta, &design, y)
    }

    /// Regularized objective of the fitted coefficients on `(x, y)`.
    pub fn objective_value(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        check_problem(x, y)?;
        let (design, beta) = self.fitted_problem(x)?;
        check_coefficients(&design, &beta, "coefficients")?;
        Ok(objective_unchecked(&design, y, &beta, self.lambda))
    }

    fn fitted_problem(&self, x: &Matrix) -> Result<(Matrix, Vector)> {
        let coeffs = self.coefficients.as_ref().ok_or(Error::NotFitted)?;
        if !self.fit_intercept {
            return Ok((x.clone(), coeffs.clone()));
        }
        let mut beta = Vector::zeros(coeffs.len() + 1);
        beta[0] = self.intercept.unwrap_or(0.0);
        beta.slice_mut(ndarray::s![1..]).assign(coeffs);
        Ok((self.design_matrix(x), beta))
    }

    fn design_matrix(&self, x: &Matrix) -> Matrix {
        if !self.fit_intercept {
            return x.clone();
        }
        let mut with_intercept = Matrix::ones((x.nrows(), x.ncols() + 1));
        with_intercept.slice_mut(ndarray::s![.., 1..]).assign(x);
        with_intercept
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::testing::four_points;
    use ndarray::array;

    #[test]
    fn test_logistic_regression_simple() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![-1.0, -1.0, 1.0, 1.0];

        let mut model = LogisticRegression::new()
            .lambda(0.001)
            .fit_intercept(true)
            .max_iterations(1000);
        model.fit(&x, &y).unwrap();

        let predictions = model.predict(&x).unwrap();
        let probabilities = model.predict_proba(&x).unwrap();

        assert_eq!(predictions.len(), 4);
        assert!(probabilities[0] < 0.5);
        assert!(probabilities[3] > 0.5);
        assert!(model.intercept.unwrap() < 0.0);
    }

    #[test]
    fn test_both_solvers_fit_four_points() {
        let (x, y) = four_points();
        for solver in [Solver::GradientDescent, Solver::FastGradient] {
            let mut model = LogisticRegression::new().solver(solver).max_iterations(50);
            model.fit(&x, &y).unwrap();
            assert_eq!(model.path.as_ref().unwrap().len(), 51);
            assert_eq!(model.score(&x, &y).unwrap(), 1.0);
            assert_eq!(model.error_rate(&x, &y).unwrap(), 0.0);
            assert_eq!(model.intercept, Some(0.0));
        }
    }

    #[test]
    fn test_objective_value_matches_path() {
        let (x, y) = four_points();
        let mut model = LogisticRegression::new().eta_init(0.5).max_iterations(20);
        model.fit(&x, &y).unwrap();
        let last = model.path.as_ref().unwrap().last().unwrap().clone();
        let expected = crate::linear_model::objective(&x, &y, &last, 0.1).unwrap();
        assert_eq!(model.objective_value(&x, &y).unwrap(), expected);
    }

    #[test]
    fn test_logistic_regression_invalid_labels() {
        let x = array![[1.0], [2.0]];
        let y = array![0.0, 1.0];

        let mut model = LogisticRegression::new();
        assert!(matches!(model.fit(&x, &y), Err(Error::InvalidLabel { .. })));
    }

    #[test]
    fn test_logistic_regression_predict_without_fit() {
        let x = array![[1.0], [2.0]];
        let model = LogisticRegression::new();

        assert_eq!(model.predict(&x), Err(Error::NotFitted));
        assert_eq!(model.predict_proba(&x), Err(Error::NotFitted));
    }

    #[test]
    fn test_logistic_regression_feature_mismatch() {
        let (x, y) = four_points();
        let mut model = LogisticRegression::new();
        model.fit(&x, &y).unwrap();
        assert!(matches!(model.predict(&array![[1.0]]), Err(Error::InvalidDimension(_))));
    }

    #[test]
    fn test_invalid_lambda() {
        let (x, y) = four_points();
        let mut model = LogisticRegression::new().lambda(-1.0);
        assert!(matches!(model.fit(&x, &y), Err(Error::InvalidHyperparameter(_))));
    }
}
