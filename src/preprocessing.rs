use crate::error::{Error, Result};
use crate::{Matrix, Vector};

/// Centers each column and scales it to unit variance.
///
/// Statistics come from the data passed to `fit`, so a test set is
/// transformed with the training set's mean and deviation. Columns with zero
/// deviation are only centered.
#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        let mean = data.mean_axis(ndarray::Axis(0)).ok_or_else(|| {
            Error::InvalidDimension("cannot fit a scaler on zero rows".to_string())
        })?;
        let std = data
            .std_axis(ndarray::Axis(0), 0.0)
            .mapv(|s| if s > 0.0 { s } else { 1.0 });

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let mean = self.mean.as_ref().ok_or(Error::NotFitted)?;
        let std = self.std.as_ref().ok_or(Error::NotFitted)?;
        if data.ncols() != mean.len() {
            return Err(Error::InvalidDimension(format!(
                "scaler was fitted on {} columns, got {}",
                mean.len(),
                data.ncols()
            )));
        }

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(ndarray::Axis(0)) {
            row -= mean;
            row /= std;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }
}
