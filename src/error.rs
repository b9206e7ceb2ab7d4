//! Error types shared by every fitting and evaluation routine.

/// Errors raised before or instead of running a computation.
///
/// A line search that exhausts its attempt cap is not an error: it is
/// reported through [`LineSearchResult::converged`](crate::LineSearchResult)
/// and the solver's [`Monitor`](crate::Monitor).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),

    #[error("label at index {index} is {value}, expected -1 or +1")]
    InvalidLabel { index: usize, value: f64 },

    #[error("model not fitted, call fit() first")]
    NotFitted,

    #[error("eigenvalue computation failed: {0}")]
    Eigen(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = Error::InvalidLabel { index: 3, value: 0.0 };
        assert_eq!(err.to_string(), "label at index 3 is 0, expected -1 or +1");

        let err = Error::InvalidHyperparameter("lambda must be non-negative, got -1".into());
        assert!(err.to_string().contains("lambda"));
    }
}
