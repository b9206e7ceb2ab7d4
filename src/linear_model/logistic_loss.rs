//! Regularized logistic loss and its gradient.
//!
//! With margins `mᵢ = -yᵢ·xᵢᵀβ`:
//!
//! ```text
//! F(β)  = (1/N) Σᵢ log(1 + exp(mᵢ)) + λ‖β‖²
//! ∇F(β) = (1/N) Σᵢ -yᵢxᵢ · exp(mᵢ) / (1 + exp(mᵢ)) + 2λβ
//! ```
//!
//! `exp(mᵢ)` is evaluated directly. Once a margin exceeds roughly 709 it
//! overflows: the objective becomes `+inf` and the gradient weight takes its
//! limit `1.0`.

use crate::error::{Error, Result};
use crate::{labels, Matrix, Vector};

/// Regularized logistic loss at `beta`.
pub fn objective(x: &Matrix, y: &Vector, beta: &Vector, lambda: f64) -> Result<f64> {
    check_problem(x, y)?;
    check_coefficients(x, beta, "beta")?;
    check_lambda(lambda)?;
    Ok(objective_unchecked(x, y, beta, lambda))
}

/// Gradient of [`objective`] with respect to `beta`.
pub fn gradient(x: &Matrix, y: &Vector, beta: &Vector, lambda: f64) -> Result<Vector> {
    check_problem(x, y)?;
    check_coefficients(x, beta, "beta")?;
    check_lambda(lambda)?;
    Ok(gradient_unchecked(x, y, beta, lambda))
}

pub(crate) fn objective_unchecked(x: &Matrix, y: &Vector, beta: &Vector, lambda: f64) -> f64 {
    let n = y.len() as f64;
    let margins = -(y * &x.dot(beta));
    let loss = margins.mapv(|m| (1.0 + m.exp()).ln()).sum() / n;
    loss + lambda * beta.dot(beta)
}

pub(crate) fn gradient_unchecked(x: &Matrix, y: &Vector, beta: &Vector, lambda: f64) -> Vector {
    let n = y.len() as f64;
    let margins = -(y * &x.dot(beta));
    let weights = margins.mapv(|m| {
        let e = m.exp();
        if e.is_infinite() { 1.0 } else { e / (1.0 + e) }
    });
    let scaled = y * &weights;
    x.t().dot(&scaled) * (-1.0 / n) + beta * (2.0 * lambda)
}

pub(crate) fn check_problem(x: &Matrix, y: &Vector) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(Error::InvalidDimension(format!(
            "X has {} rows but y has {} entries",
            x.nrows(),
            y.len()
        )));
    }
    if x.nrows() == 0 {
        return Err(Error::InvalidDimension("X must have at least one sample".to_string()));
    }
    labels::validate(y)
}

pub(crate) fn check_coefficients(x: &Matrix, v: &Vector, name: &str) -> Result<()> {
    if x.ncols() != v.len() {
        return Err(Error::InvalidDimension(format!(
            "X has {} columns but {} has length {}",
            x.ncols(),
            name,
            v.len()
        )));
    }
    Ok(())
}

pub(crate) fn check_lambda(lambda: f64) -> Result<()> {
    if !(lambda >= 0.0) || !lambda.is_finite() {
        return Err(Error::InvalidHyperparameter(format!(
            "lambda must be finite and non-negative, got {}",
            lambda
        )));
    }
    Ok(())
}
