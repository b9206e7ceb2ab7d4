use approx::assert_abs_diff_eq;
use logit_descent::metrics::{misclassification_path, objective_path};
use logit_descent::{
    fast_gradient, gradient_descent, initial_step_size, misclassification_error, objective, Dataset,
    FastGradient, GradientDescent, LogisticRegression, Matrix, Monitor, Solver, SolverParams,
    StandardScaler, Vector,
};
use ndarray::{array, Array, Axis};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;

#[derive(Default)]
struct StallCounter {
    stalls: usize,
}

impl Monitor for StallCounter {
    fn on_line_search_stall(
        &mut self,
        _solver: &str,
        _iteration: usize,
        _step: f64,
        _trials: usize,
    ) {
        self.stalls += 1;
    }
}

#[test]
fn test_four_point_gradient_descent_scenario() {
    let x = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [-1.0, -1.0]];
    let y = array![1.0, 1.0, 1.0, -1.0];
    let lambda = 0.1;

    let path = gradient_descent(&x, &y, &array![0.0, 0.0], lambda, 0.5, 50).unwrap();
    assert_eq!(path.len(), 51);

    let values = objective_path(&x, &y, &path, lambda).unwrap();
    for k in 0..10 {
        assert!(values[k + 1] < values[k], "objective did not decrease at iteration {}", k);
    }
    assert_eq!(misclassification_error(path.last().unwrap(), &x, &y).unwrap(), 0.0);
}

/// Two features on very different scales: gradient descent crawls along the
/// flat direction while momentum does not.
fn ill_conditioned_problem() -> (Matrix, Vector) {
    let mut rng = StdRng::seed_from_u64(2024);
    let z: Matrix = Array::random_using((200, 2), StandardNormal, &mut rng);
    let noise: Vector = Array::random_using(200, StandardNormal, &mut rng);
    let y = (z.sum_axis(Axis(1)) + noise * 0.5).mapv(|s| if s > 0.0 { 1.0 } else { -1.0 });
    let mut x = z;
    x.column_mut(1).mapv_inplace(|v| v * 0.1);
    (x, y)
}

fn first_within(values: &Vector, target: f64) -> Option<usize> {
    values.iter().position(|&v| v <= target)
}

#[test]
fn test_fast_gradient_reaches_target_gap_first() {
    let (x, y) = ill_conditioned_problem();
    let lambda = 1e-4;
    let zero = Vector::zeros(2);
    let eta = initial_step_size(&x, 200, 2, lambda).unwrap();

    let reference = fast_gradient(&x, &y, &zero, &zero, lambda, eta, 20_000).unwrap();
    let best = objective_path(&x, &y, &reference.beta, lambda)
        .unwrap()
        .fold(f64::INFINITY, |a, &b| a.min(b));

    let start = objective(&x, &y, &zero, lambda).unwrap();
    let target = best + 1e-3 * (start - best);
    let budget = 2_000;

    let plain = GradientDescent::new(SolverParams::new(lambda, eta, budget)).unwrap();
    let mut plain_stalls = StallCounter::default();
    let plain_path = plain.run_with(&x, &y, &zero, &mut plain_stalls).unwrap();

    let fast = FastGradient::new(SolverParams::new(lambda, eta, budget)).unwrap();
    let mut fast_stalls = StallCounter::default();
    let fast_path = fast.run_with(&x, &y, &zero, &zero, &mut fast_stalls).unwrap();

    assert_eq!(plain_stalls.stalls, 0);
    assert_eq!(fast_stalls.stalls, 0);

    let plain_hit = first_within(&objective_path(&x, &y, &plain_path, lambda).unwrap(), target);
    let fast_hit = first_within(&objective_path(&x, &y, &fast_path.beta, lambda).unwrap(), target)
        .expect("fast gradient should reach the target gap within the budget");

    assert!(fast_hit < plain_hit.unwrap_or(budget + 1));
}

#[test]
fn test_gradient_descent_is_monotone_on_simulated_data() {
    let data = Dataset::simulated(150, 4, 8);
    let x = StandardScaler::new().fit_transform(&data.features).unwrap();
    let lambda = 0.05;
    let eta = initial_step_size(&x, 150, 4, lambda).unwrap();

    let path = gradient_descent(&x, &data.labels, &Vector::zeros(4), lambda, eta, 100).unwrap();
    let values = objective_path(&x, &data.labels, &path, lambda).unwrap();
    for pair in values.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
}

#[test]
fn test_solvers_agree_on_the_minimizer() {
    let data = Dataset::simulated(120, 3, 17);
    let x = StandardScaler::new().fit_transform(&data.features).unwrap();
    let y = &data.labels;
    let lambda = 0.1;
    let eta = initial_step_size(&x, 120, 3, lambda).unwrap();
    let zero = Vector::zeros(3);

    let plain = gradient_descent(&x, y, &zero, lambda, eta, 1_000).unwrap();
    let fast = fast_gradient(&x, y, &zero, &zero, lambda, eta, 1_000).unwrap();

    let a = objective(&x, y, plain.last().unwrap(), lambda).unwrap();
    let b = objective(&x, y, fast.beta.last().unwrap(), lambda).unwrap();
    assert_abs_diff_eq!(a, b, epsilon = 1e-6);
}

#[test]
fn test_estimator_end_to_end() {
    let data = Dataset::simulated(300, 5, 3);
    let (train, test) = data.shuffled_split(0.33, 11).unwrap();

    let mut scaler = StandardScaler::new();
    let x_train = scaler.fit_transform(&train.features).unwrap();
    let x_test = scaler.transform(&test.features).unwrap();

    let mut model = LogisticRegression::new().solver(Solver::FastGradient).lambda(0.01);
    model.fit(&x_train, &train.labels).unwrap();

    let path = model.path.as_ref().unwrap();
    let train_errors = misclassification_path(path, &x_train, &train.labels).unwrap();
    assert_eq!(train_errors.len(), 301);
    assert!(model.error_rate(&x_test, &test.labels).unwrap() < 0.35);
    assert!(model.score(&x_train, &train.labels).unwrap() > 0.65);
}
