//! Random weight-curve generation.
//!
//! Produces a sorted list of [`WeightPoint`]s with one point pinned at each
//! end of the requested domain and a random scatter of points in between.
//!
//! Generation works on integer outcomes. When either bound is fractional,
//! both bounds are multiplied by [`RESOLUTION`] first and the outcomes are
//! divided back down (rounded to [`PRECISION`] decimals) at the end.
//!
//! Interior outcomes are drawn with replacement and collisions are skipped,
//! so a small domain with a high density yields fewer points than requested.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::prelude::*;

use crate::error::{Result, SamplingError};
use crate::point::WeightPoint;

/// Scale applied to fractional domains.
pub const RESOLUTION: f64 = 1000.0;
/// Decimal places kept when scaling a fractional domain back down.
pub const PRECISION: i32 = 3;
/// Points per unit of domain width.
pub const DEFAULT_DENSITY: f64 = 0.1;
/// Range of the random weight given to every generated point.
pub const DEFAULT_WEIGHT_RANGE: RangeInclusive<u32> = 1..=100;

/// One end of a generated domain.
///
/// A `Float` bound switches the whole domain to fractional resolution, even
/// when its value happens to be a whole number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Int(i64),
    Float(f64),
}

impl Bound {
    fn is_float(self) -> bool {
        matches!(self, Bound::Float(_))
    }

    fn as_f64(self) -> f64 {
        match self {
            Bound::Int(v) => v as f64,
            Bound::Float(v) => v,
        }
    }
}

impl From<i64> for Bound {
    fn from(v: i64) -> Self {
        Bound::Int(v)
    }
}

impl From<i32> for Bound {
    fn from(v: i32) -> Self {
        Bound::Int(i64::from(v))
    }
}

impl From<u32> for Bound {
    fn from(v: u32) -> Self {
        Bound::Int(i64::from(v))
    }
}

impl From<f64> for Bound {
    fn from(v: f64) -> Self {
        Bound::Float(v)
    }
}

impl From<f32> for Bound {
    fn from(v: f32) -> Self {
        Bound::Float(f64::from(v))
    }
}

/// Builder for random weight lists.
///
/// ```
/// use blur::CurveGenerator;
///
/// let points = CurveGenerator::new(0, 100)
///     .with_density(0.2)
///     .with_seed(7)
///     .generate()
///     .unwrap();
/// assert_eq!(points.first().map(|p| p.outcome), Some(0.0));
/// assert_eq!(points.last().map(|p| p.outcome), Some(100.0));
/// ```
#[derive(Debug, Clone)]
pub struct CurveGenerator {
    min: Bound,
    max: Bound,
    density: f64,
    max_weights: Option<usize>,
    weight_range: RangeInclusive<u32>,
    seed: Option<u64>,
}

impl CurveGenerator {
    /// Generator over `[min, max]`; the bounds may be given in either order.
    pub fn new(min: impl Into<Bound>, max: impl Into<Bound>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
            density: DEFAULT_DENSITY,
            max_weights: None,
            weight_range: DEFAULT_WEIGHT_RANGE,
            seed: None,
        }
    }

    /// Fraction of the domain width to populate with points.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Cap on the number of points, boundary points included.
    ///
    /// The two boundary points are always generated, even under a cap below two.
    pub fn with_max_weights(mut self, max_weights: usize) -> Self {
        self.max_weights = Some(max_weights);
        self
    }

    /// Range of the random integer weight given to each point.
    pub fn with_weight_range(mut self, weight_range: RangeInclusive<u32>) -> Self {
        self.weight_range = weight_range;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate a list, seeded if [`with_seed`](Self::with_seed) was called.
    pub fn generate(&self) -> Result<Vec<WeightPoint<f64>>> {
        match self.seed {
            Some(s) => self.generate_with_rng(&mut StdRng::seed_from_u64(s)),
            None => self.generate_with_rng(&mut rand::rng()),
        }
    }

    /// Generate a list using a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// [`SamplingError::InvalidConfig`] for a negative or non-finite density,
    /// an empty weight range or a non-finite bound.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<WeightPoint<f64>>> {
        self.validate()?;

        let fractional = self.min.is_float() || self.max.is_float();
        let to_domain = |bound: Bound| -> i64 {
            match bound {
                Bound::Int(v) if !fractional => v,
                _ => (bound.as_f64() * RESOLUTION).round_ties_even() as i64,
            }
        };
        let (mut lo, mut hi) = (to_domain(self.min), to_domain(self.max));
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }

        let mut requested = ((hi as f64 - lo as f64) * self.density).round_ties_even() as usize;
        if let Some(cap) = self.max_weights {
            requested = requested.min(cap);
        }

        let mut chosen: BTreeMap<i64, u32> = BTreeMap::new();
        chosen.insert(lo, rng.random_range(self.weight_range.clone()));
        if hi != lo {
            chosen.insert(hi, rng.random_range(self.weight_range.clone()));
        }

        for _ in 0..requested.saturating_sub(2) {
            let outcome = rng.random_range(lo..=hi);
            if chosen.contains_key(&outcome) {
                tracing::trace!(outcome, "skipping colliding outcome");
                continue;
            }
            chosen.insert(outcome, rng.random_range(self.weight_range.clone()));
        }

        tracing::debug!(
            lo,
            hi,
            fractional,
            requested,
            generated = chosen.len(),
            "generated random weight list"
        );

        Ok(chosen
            .into_iter()
            .map(|(outcome, weight)| {
                let outcome = if fractional {
                    round_to(outcome as f64 / RESOLUTION, PRECISION)
                } else {
                    outcome as f64
                };
                WeightPoint::new(outcome, f64::from(weight))
            })
            .collect())
    }

    fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || self.density < 0.0 {
            return Err(SamplingError::InvalidConfig(format!(
                "density must be finite and >= 0 (got {})",
                self.density
            )));
        }
        if self.weight_range.is_empty() {
            return Err(SamplingError::InvalidConfig(format!(
                "weight range {:?} is empty",
                self.weight_range
            )));
        }
        for bound in [self.min, self.max] {
            if !bound.as_f64().is_finite() {
                return Err(SamplingError::InvalidConfig(format!(
                    "bound must be finite (got {bound:?})"
                )));
            }
        }
        Ok(())
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Random weight list over `[min_outcome, max_outcome]` using the thread-local RNG.
///
/// See [`CurveGenerator`] for the generation rules.
pub fn random_weight_list(
    min_outcome: impl Into<Bound>,
    max_outcome: impl Into<Bound>,
    max_weight_density: f64,
    max_possible_weights: Option<usize>,
) -> Result<Vec<WeightPoint<f64>>> {
    let mut rng = rand::rng();
    random_weight_list_with_rng(
        min_outcome,
        max_outcome,
        max_weight_density,
        max_possible_weights,
        &mut rng,
    )
}

/// [`random_weight_list`] with a caller-supplied RNG.
pub fn random_weight_list_with_rng<R: Rng + ?Sized>(
    min_outcome: impl Into<Bound>,
    max_outcome: impl Into<Bound>,
    max_weight_density: f64,
    max_possible_weights: Option<usize>,
    rng: &mut R,
) -> Result<Vec<WeightPoint<f64>>> {
    let mut generator = CurveGenerator::new(min_outcome, max_outcome).with_density(max_weight_density);
    if let Some(cap) = max_possible_weights {
        generator = generator.with_max_weights(cap);
    }
    generator.generate_with_rng(rng)
}
