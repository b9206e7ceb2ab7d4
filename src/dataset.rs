use crate::error::{Error, Result};
use crate::{labels, Matrix, Vector};
use ndarray::{s, Array, Axis};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Predictors and ±1 responses, checked to agree in length.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(Error::InvalidDimension(format!(
                "features have {} rows but there are {} labels",
                features.nrows(),
                labels.len()
            )));
        }
        labels::validate(&labels)?;

        Ok(Self { features, labels })
    }

    /// Builds a dataset from `{0, 1}` responses, mapping them to `{-1, +1}`.
    pub fn from_zero_one(features: Matrix, labels: Vector) -> Result<Self> {
        let labels = labels::from_zero_one(&labels)?;
        Self::new(features, labels)
    }

    /// Two Gaussian classes of roughly equal size, separated along every feature.
    ///
    /// The same seed always yields the same dataset.
    pub fn simulated(n_samples: usize, n_features: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let labels =
            Vector::from_shape_fn(n_samples, |_| if rng.gen_bool(0.5) { 1.0 } else { -1.0 });
        let noise: Matrix = Array::random_using((n_samples, n_features), StandardNormal, &mut rng);
        let shift = 1.0 / (n_features.max(1) as f64).sqrt();
        let features = noise + &(labels.view().insert_axis(Axis(1)).to_owned() * shift);

        Self { features, labels }
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Splits off the last `test_size` fraction of rows as a test set.
    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self)> {
        let n_test = self.test_count(test_size)?;
        let n_train = self.n_samples() - n_test;

        let train = Self {
            features: self.features.slice(s![..n_train, ..]).to_owned(),
            labels: self.labels.slice(s![..n_train]).to_owned(),
        };
        let test = Self {
            features: self.features.slice(s![n_train.., ..]).to_owned(),
            labels: self.labels.slice(s![n_train..]).to_owned(),
        };

        Ok((train, test))
    }

    /// Like [`train_test_split`](Self::train_test_split) after a seeded row shuffle.
    pub fn shuffled_split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        let n_test = self.test_count(test_size)?;
        let n_train = self.n_samples() - n_test;

        let mut order: Vec<usize> = (0..self.n_samples()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        let (train_rows, test_rows) = order.split_at(n_train);

        Ok((self.select(train_rows), self.select(test_rows)))
    }

    fn select(&self, rows: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), rows),
            labels: self.labels.select(Axis(0), rows),
        }
    }

    fn test_count(&self, test_size: f64) -> Result<usize> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(Error::InvalidHyperparameter(format!(
                "test_size must be between 0 and 1, got {}",
                test_size
            )));
        }
        Ok((self.n_samples() as f64 * test_size).round() as usize)
    }
}
