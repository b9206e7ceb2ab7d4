use logit_descent::metrics::{misclassification_path, objective_path};
use logit_descent::{
    fast_gradient, gradient_descent, initial_step_size, Dataset, LogisticRegression, Solver,
    StandardScaler, Vector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gradient Descent vs Fast Gradient on Simulated Data ===\n");

    let dataset = Dataset::simulated(600, 10, 42);
    let (train_data, test_data) = dataset.shuffled_split(0.33, 7)?;

    // Standardize with training statistics only
    let mut scaler = StandardScaler::new();
    let x_train = scaler.fit_transform(&train_data.features)?;
    let x_test = scaler.transform(&test_data.features)?;

    println!(
        "Training samples: {}, Test samples: {}, Features: {}\n",
        train_data.n_samples(),
        test_data.n_samples(),
        train_data.n_features()
    );

    let lambda = 0.1;
    let max_iterations = 300;
    let zero = Vector::zeros(x_train.ncols());
    let eta_init = initial_step_size(&x_train, x_train.nrows(), x_train.ncols(), lambda)?;
    println!("Initial step size: {:.4}", eta_init);

    let y_train = &train_data.labels;
    let y_test = &test_data.labels;
    let betas_gradient =
        gradient_descent(&x_train, y_train, &zero, lambda, eta_init, max_iterations)?;
    let betas_fast =
        fast_gradient(&x_train, y_train, &zero, &zero, lambda, eta_init, max_iterations)?.beta;

    let objectives_gradient = objective_path(&x_train, y_train, &betas_gradient, lambda)?;
    let objectives_fast = objective_path(&x_train, y_train, &betas_fast, lambda)?;
    let train_error_gradient = misclassification_path(&betas_gradient, &x_train, y_train)?;
    let train_error_fast = misclassification_path(&betas_fast, &x_train, y_train)?;
    let test_error_gradient = misclassification_path(&betas_gradient, &x_test, y_test)?;
    let test_error_fast = misclassification_path(&betas_fast, &x_test, y_test)?;

    println!("\nObjective value vs iteration (lambda = {}):", lambda);
    println!(
        "{:>9} {:>14} {:>14} {:>12} {:>12} {:>12} {:>12}",
        "Iteration", "Obj (GD)", "Obj (FG)", "Train (GD)", "Train (FG)", "Test (GD)", "Test (FG)"
    );
    println!("{}", "-".repeat(93));
    for i in (0..=max_iterations).step_by(25) {
        println!(
            "{:>9} {:>14.8} {:>14.8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            i,
            objectives_gradient[i],
            objectives_fast[i],
            train_error_gradient[i],
            train_error_fast[i],
            test_error_gradient[i],
            test_error_fast[i]
        );
    }

    println!("\nCoefficients from gradient descent: {:.4}", betas_gradient.last().unwrap_or(&zero));
    println!("Coefficients from fast gradient:    {:.4}", betas_fast.last().unwrap_or(&zero));

    // The estimator derives its own step size and wraps the same solver
    let mut model = LogisticRegression::new()
        .solver(Solver::FastGradient)
        .lambda(lambda)
        .max_iterations(max_iterations);
    model.fit(&x_train, y_train)?;

    println!("\nEstimator results:");
    println!("Objective value: {:.8}", model.objective_value(&x_train, y_train)?);
    println!("Training accuracy: {:.2}%", model.score(&x_train, y_train)? * 100.0);
    println!("Test accuracy: {:.2}%", model.score(&x_test, y_test)? * 100.0);

    Ok(())
}
