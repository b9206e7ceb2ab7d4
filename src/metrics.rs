use crate::error::Result;
use crate::linear_model::objective;
use crate::linear_model::Trajectory;
use crate::{Matrix, Vector};

/// Fraction of samples whose predicted label disagrees with `y`.
///
/// A sample is predicted `+1` when `σ(xᵢᵀβ) > 0.5` and `-1` otherwise.
pub fn misclassification_error(beta: &Vector, x: &Matrix, y: &Vector) -> Result<f64> {
    crate::linear_model::check_problem(x, y)?;
    crate::linear_model::check_coefficients(x, beta, "beta")?;

    let mismatches = x
        .dot(beta)
        .iter()
        .zip(y.iter())
        .filter(|&(&score, &label)| {
            let predicted = if sigmoid(score) > 0.5 { 1.0 } else { -1.0 };
            predicted != label
        })
        .count();
    Ok(mismatches as f64 / y.len() as f64)
}

/// Objective value at every point of `path`.
pub fn objective_path(x: &Matrix, y: &Vector, path: &Trajectory, lambda: f64) -> Result<Vector> {
    path.iter()
        .map(|beta| objective(x, y, beta, lambda))
        .collect::<Result<Vec<f64>>>()
        .map(Vector::from)
}

/// Misclassification error at every point of `path`.
pub fn misclassification_path(path: &Trajectory, x: &Matrix, y: &Vector) -> Result<Vector> {
    path.iter()
        .map(|beta| misclassification_error(beta, x, y))
        .collect::<Result<Vec<f64>>>()
        .map(Vector::from)
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    if z > 500.0 {
        1.0
    } else if z < -500.0 {
        0.0
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}
