//! L2-regularized logistic regression and the first-order solvers that fit it.
//!
//! This module provides:
//! - `objective` / `gradient`: the regularized logistic loss and its gradient
//! - `line_search`: backtracking step-size selection with a sufficient-decrease test
//! - `GradientDescent`: plain gradient descent recording every iterate
//! - `FastGradient`: accelerated gradient with a `k / (k + 3)` momentum weight
//! - `initial_step_size`: `1 / (λ_max(XᵀX / N) + λ)`
//! - `LogisticRegression`: an estimator wrapping either solver
//!
//! # Examples
//!
//! ## Solvers
//! ```rust
//! use logit_descent::{fast_gradient, gradient_descent, objective};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [-1.0, -1.0]];
//! let y = array![1.0, 1.0, 1.0, -1.0];
//! let zero = array![0.0, 0.0];
//!
//! let betas = gradient_descent(&x, &y, &zero, 0.1, 0.5, 20).unwrap();
//! let fast = fast_gradient(&x, &y, &zero, &zero, 0.1, 0.5, 20).unwrap();
//! assert_eq!(betas.len(), 21);
//! assert_eq!(fast.beta.len(), 21);
//!
//! let start = objective(&x, &y, &zero, 0.1).unwrap();
//! let end = objective(&x, &y, betas.last().unwrap(), 0.1).unwrap();
//! assert!(end < start);
//! ```
//!
//! ## Logistic Regression
//! ```rust
//! use logit_descent::{LogisticRegression, Solver};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [-1.0], [-2.0]];
//! let y = array![1.0, 1.0, -1.0, -1.0];
//!
//! let mut model = LogisticRegression::new().solver(Solver::FastGradient).lambda(0.01);
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! assert_eq!(predictions, y);
//! ```

mod fast_gradient;
mod gradient_descent;
mod line_search;
mod logistic_loss;
mod logistic_regression;
mod monitor;
mod params;
mod step_size;
mod trajectory;

pub use fast_gradient::{fast_gradient, FastGradient, FastGradientPath};
pub use gradient_descent::{gradient_descent, GradientDescent};
pub use line_search::{line_search, LineSearchParams, LineSearchResult};
pub use logistic_loss::{gradient, objective};
pub(crate) use logistic_loss::{check_coefficients, check_problem};
pub use logistic_regression::{LogisticRegression, Solver};
pub use monitor::{LogMonitor, Monitor, NoopMonitor};
pub use params::SolverParams;
pub use step_size::initial_step_size;
pub use trajectory::Trajectory;
