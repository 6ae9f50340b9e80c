//! Rejection sampling under a piecewise-linear weight curve.
//!
//! The curve is built by sorting the weight points by outcome and joining
//! neighbours with straight segments. A sample is drawn by rolling uniform
//! points `(sx, sy)` inside the curve's bounding box and keeping the first
//! `sx` whose `sy` lands on or under the curve.
//!
//! The weights are never normalized: only the shape of the curve matters.

use rand::prelude::*;

use crate::error::{Result, SamplingError};
use crate::interpolate::interpolate;
use crate::point::{coerce_weights, is_sampleable_width, WeightInput, WeightPoint};

/// Rejected samples allowed before [`SamplingError::SamplingExhausted`].
pub const MAX_ATTEMPTS: usize = 10_000;

/// A sorted, deduplicated weight curve ready for repeated sampling.
#[derive(Debug, Clone)]
pub struct WeightCurve {
    points: Vec<WeightPoint<f64>>,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    max_attempts: usize,
}

impl WeightCurve {
    /// Build a curve from weight points or `(outcome, weight)` pairs.
    ///
    /// Points sharing an outcome are collapsed into one point carrying their
    /// mean weight.
    ///
    /// # Errors
    ///
    /// - [`SamplingError::EmptyWeights`] if no points are given.
    /// - [`SamplingError::InvalidWeightType`] if an outcome or weight is not finite.
    /// - [`SamplingError::BoundsOverflow`] if the bounding box is too wide to sample.
    pub fn new<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightInput<f64>>,
    {
        let mut points = coerce_weights(weights)?;
        if let Some(index) = points.iter().position(|p| !p.outcome.is_finite()) {
            return Err(SamplingError::InvalidWeightType { index });
        }
        if points.is_empty() {
            return Err(SamplingError::EmptyWeights);
        }

        points.sort_by(|a, b| a.outcome.total_cmp(&b.outcome));
        let points = collapse_duplicates(points);

        let x_bounds = (points[0].outcome, points[points.len() - 1].outcome);
        let y_bounds = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.weight), hi.max(p.weight))
            });
        let width = x_bounds.1 - x_bounds.0;
        let height = y_bounds.1 - y_bounds.0;
        if !is_sampleable_width(width) || !is_sampleable_width(height) {
            return Err(SamplingError::BoundsOverflow { width, height });
        }

        Ok(Self {
            points,
            x_bounds,
            y_bounds,
            max_attempts: MAX_ATTEMPTS,
        })
    }

    /// Override the number of rejected samples tolerated per draw.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Curve points, ascending by outcome.
    pub fn points(&self) -> &[WeightPoint<f64>] {
        &self.points
    }

    /// Bounding box as `((x_min, x_max), (y_min, y_max))`.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        (self.x_bounds, self.y_bounds)
    }

    /// Height of the curve at `x`, or `None` outside `[x_min, x_max]`.
    ///
    /// On a boundary shared by two segments the left segment wins.
    pub fn height_at(&self, x: f64) -> Result<Option<f64>> {
        for pair in self.points.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.outcome <= x && x <= b.outcome {
                let height = interpolate(a.outcome, a.weight, b.outcome, b.weight, x, false)?;
                return Ok(Some(height));
            }
        }
        if self.points.len() == 1 && self.points[0].outcome == x {
            return Ok(Some(self.points[0].weight));
        }
        Ok(None)
    }

    /// Draw one outcome using the thread-local RNG.
    pub fn sample(&self, round_result: bool) -> Result<f64> {
        let mut rng = rand::rng();
        self.sample_with_rng(round_result, &mut rng)
    }

    /// Draw one outcome using a caller-supplied RNG.
    ///
    /// A curve with a single point returns that point's outcome unchanged;
    /// `round_result` only applies to accepted samples.
    ///
    /// # Notes
    ///
    /// The bounding box starts at the smallest weight, not at zero, so a
    /// curve whose weights all sit between 50 and 100 is sampled as if it
    /// sat between 0 and 50.
    ///
    /// # Errors
    ///
    /// [`SamplingError::SamplingExhausted`] once `max_attempts` candidates
    /// have all been rejected.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, round_result: bool, rng: &mut R) -> Result<f64> {
        if self.points.len() == 1 {
            return Ok(self.points[0].outcome);
        }

        let (x_min, x_max) = self.x_bounds;
        let (y_min, y_max) = self.y_bounds;

        for _ in 0..self.max_attempts {
            let sx = rng.random_range(x_min..=x_max);
            let sy = rng.random_range(y_min..=y_max);
            if let Some(height) = self.height_at(sx)? {
                if sy <= height {
                    return Ok(if round_result { sx.round_ties_even() } else { sx });
                }
            }
        }

        tracing::warn!(
            attempts = self.max_attempts,
            points = self.points.len(),
            "no point found under the weight curve, something is probably wrong"
        );
        Err(SamplingError::SamplingExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Merge runs of equal outcomes (input must be sorted) into their mean weight.
fn collapse_duplicates(points: Vec<WeightPoint<f64>>) -> Vec<WeightPoint<f64>> {
    let mut out: Vec<WeightPoint<f64>> = Vec::with_capacity(points.len());
    let mut run = 0usize;
    for point in points {
        match out.last_mut() {
            Some(last) if last.outcome == point.outcome => {
                run += 1;
                last.weight += (point.weight - last.weight) / run as f64;
            }
            _ => {
                out.push(point);
                run = 1;
            }
        }
    }
    out
}

/// Draw a random outcome under the curve traced by `weights`.
///
/// Uses the thread-local RNG. See [`weighted_curve_rand_with_rng`].
pub fn weighted_curve_rand<I>(weights: I, round_result: bool) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Into<WeightInput<f64>>,
{
    let mut rng = rand::rng();
    weighted_curve_rand_with_rng(weights, round_result, &mut rng)
}

/// Draw a random outcome under the curve traced by `weights`, using `rng`.
///
/// A single point is returned as-is. Otherwise up to [`MAX_ATTEMPTS`]
/// candidates are rolled before giving up.
pub fn weighted_curve_rand_with_rng<I, R>(weights: I, round_result: bool, rng: &mut R) -> Result<f64>
where
    I: IntoIterator,
    I::Item: Into<WeightInput<f64>>,
    R: Rng + ?Sized,
{
    WeightCurve::new(weights)?.sample_with_rng(round_result, rng)
}
