//! L2-regularized logistic regression fitted by gradient descent and by an
//! accelerated (Nesterov-style) fast gradient method, both with backtracking
//! line search.
//!
//! ```rust
//! use logit_descent::{gradient_descent, initial_step_size, misclassification_error};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [-1.0, -1.0]];
//! let y = array![1.0, 1.0, 1.0, -1.0];
//!
//! let eta = initial_step_size(&x, 4, 2, 0.1).unwrap();
//! let path = gradient_descent(&x, &y, &array![0.0, 0.0], 0.1, eta, 50).unwrap();
//! let beta = path.last().unwrap();
//! assert_eq!(misclassification_error(beta, &x, &y).unwrap(), 0.0);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod labels;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use linear_model::{
    fast_gradient, gradient, gradient_descent, initial_step_size, line_search, objective,
    FastGradient, FastGradientPath, GradientDescent, LineSearchParams, LineSearchResult,
    LogMonitor, LogisticRegression, Monitor, NoopMonitor, Solver, SolverParams, Trajectory,
};
pub use metrics::misclassification_error;
pub use preprocessing::StandardScaler;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

