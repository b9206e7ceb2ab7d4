use nalgebra::{DMatrix, SymmetricEigen};

use crate::error::{Error, Result};
use crate::Matrix;

use super::logistic_loss::check_lambda;

/// Initial step size `1 / (λ_max(XᵀX / N) + λ)`.
///
/// `n_samples` and `n_features` must match the shape of `x`. The largest
/// eigenvalue comes from a full symmetric eigendecomposition.
pub fn initial_step_size(
    x: &Matrix,
    n_samples: usize,
    n_features: usize,
    lambda: f64,
) -> Result<f64> {
    if x.nrows() != n_samples || x.ncols() != n_features {
        return Err(Error::InvalidDimension(format!(
            "X is {}x{} but {} samples and {} features were given",
            x.nrows(),
            x.ncols(),
            n_samples,
            n_features
        )));
    }
    if n_samples == 0 || n_features == 0 {
        return Err(Error::InvalidDimension(
            "X must have at least one sample and one feature".to_string(),
        ));
    }
    check_lambda(lambda)?;

    let gram = x.t().dot(x) / n_samples as f64;
    let largest = largest_eigenvalue(&gram)?;
    let denominator = largest + lambda;
    if !(denominator > 0.0) {
        return Err(Error::InvalidHyperparameter(
            "X is all zeros and lambda is 0, no finite step size exists".to_string(),
        ));
    }
    Ok(1.0 / denominator)
}

fn largest_eigenvalue(symmetric: &Matrix) -> Result<f64> {
    let n = symmetric.nrows();
    let dense = DMatrix::from_fn(n, n, |i, j| symmetric[(i, j)]);
    let eigen = SymmetricEigen::new(dense);
    eigen
        .eigenvalues
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |best: Option<f64>, v| Some(best.map_or(v, |b| b.max(v))))
        .ok_or_else(|| Error::Eigen("no finite eigenvalue of XᵀX / N".to_string()))
}
