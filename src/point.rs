//! Weight points and input coercion.
//!
//! Samplers accept a mix of already-built [`WeightPoint`]s and raw
//! `(outcome, weight)` tuples. Everything funnels through [`coerce_weights`],
//! which copies the input into a fresh `Vec` owned by the sampling call.

use crate::error::{Result, SamplingError};

/// An `(outcome, weight)` pair.
///
/// What `weight` means depends on the consumer: curve height for
/// [`weighted_curve_rand`](crate::weighted_curve_rand), relative probability
/// mass for [`weighted_option_rand`](crate::weighted_option_rand).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightPoint<T> {
    pub outcome: T,
    pub weight: f64,
}

impl<T> WeightPoint<T> {
    /// Create a point with the given outcome and weight.
    pub fn new(outcome: T, weight: f64) -> Self {
        Self { outcome, weight }
    }
}

/// One accepted input shape for a weight list.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightInput<T> {
    Point(WeightPoint<T>),
    Pair(T, f64),
}

impl<T> From<WeightPoint<T>> for WeightInput<T> {
    fn from(point: WeightPoint<T>) -> Self {
        WeightInput::Point(point)
    }
}

impl<T> From<(T, f64)> for WeightInput<T> {
    fn from((outcome, weight): (T, f64)) -> Self {
        WeightInput::Pair(outcome, weight)
    }
}

impl<T> From<(T, u32)> for WeightInput<T> {
    fn from((outcome, weight): (T, u32)) -> Self {
        WeightInput::Pair(outcome, f64::from(weight))
    }
}

impl<T> From<(T, i32)> for WeightInput<T> {
    fn from((outcome, weight): (T, i32)) -> Self {
        WeightInput::Pair(outcome, f64::from(weight))
    }
}

impl<T> WeightInput<T> {
    fn into_point(self) -> WeightPoint<T> {
        match self {
            WeightInput::Point(p) => p,
            WeightInput::Pair(outcome, weight) => WeightPoint { outcome, weight },
        }
    }
}

/// Coerce a list of inputs into owned [`WeightPoint`]s, preserving order.
///
/// A single point can be passed as `[p]` or `Some(p)`.
///
/// # Errors
///
/// [`SamplingError::InvalidWeightType`] with the offending index when a
/// weight is NaN or infinite.
pub fn coerce_weights<T, I>(items: I) -> Result<Vec<WeightPoint<T>>>
where
    I: IntoIterator,
    I::Item: Into<WeightInput<T>>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let point = item.into().into_point();
            if point.weight.is_finite() {
                Ok(point)
            } else {
                Err(SamplingError::InvalidWeightType { index })
            }
        })
        .collect()
}

/// Whether a uniform float range of this width can be sampled.
///
/// `rand` scales an inclusive range by `1 / (1 - EPSILON)`, which can
/// overflow for widths close to `f64::MAX`.
pub(crate) fn is_sampleable_width(width: f64) -> bool {
    (width / (1.0 - f64::EPSILON)).is_finite()
}
