//! The ±1 response convention.
//!
//! Every routine that reads responses requires each entry to be exactly
//! `-1.0` or `+1.0`. Other encodings are rejected, never silently mapped;
//! [`from_zero_one`] is the one explicit conversion offered.

use crate::error::{Error, Result};
use crate::Vector;

/// Checks that every response is exactly `-1.0` or `+1.0`.
pub fn validate(y: &Vector) -> Result<()> {
    for (index, &value) in y.iter().enumerate() {
        if value != 1.0 && value != -1.0 {
            return Err(Error::InvalidLabel { index, value });
        }
    }
    Ok(())
}

/// Converts `{0, 1}` responses to `{-1, +1}` via `2y - 1`.
pub fn from_zero_one(y: &Vector) -> Result<Vector> {
    for (index, &value) in y.iter().enumerate() {
        if value != 0.0 && value != 1.0 {
            return Err(Error::InvalidLabel { index, value });
        }
    }
    Ok(y.mapv(|v| 2.0 * v - 1.0))
}
