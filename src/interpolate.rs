//! Linear interpolation between two points.

use crate::error::{Result, SamplingError};

/// Value at `x3` on the line through `(x1, y1)` and `(x2, y2)`.
///
/// Endpoints are exact: `x3 == x1` gives `y1` and `x3 == x2` gives `y2`.
/// With `round_result` the value is rounded to the nearest integer, ties to
/// even.
///
/// # Errors
///
/// [`SamplingError::DegenerateInterval`] when `x1 == x2`.
pub fn interpolate(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, round_result: bool) -> Result<f64> {
    if x1 == x2 {
        return Err(SamplingError::DegenerateInterval { x: x1 });
    }

    let result = if x3 == x1 {
        y1
    } else if x3 == x2 {
        y2
    } else {
        let slope = (y2 - y1) / (x2 - x1);
        slope * (x3 - x1) + y1
    };

    Ok(if round_result {
        result.round_ties_even()
    } else {
        result
    })
}
