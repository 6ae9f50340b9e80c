//! Discrete weighted choice.
//!
//! Each option is given a stretch of a line proportional to its weight; a
//! uniform roll along the line picks the option it lands in. Outcomes are
//! opaque labels and need no ordering.

use rand::prelude::*;

use crate::error::{Result, SamplingError};
use crate::point::{coerce_weights, is_sampleable_width, WeightInput, WeightPoint};

/// A weighted option set ready for repeated draws.
#[derive(Debug, Clone)]
pub struct WeightedOptions<T> {
    options: Vec<WeightPoint<T>>,
    total: f64,
}

impl<T: Clone> WeightedOptions<T> {
    /// # Errors
    ///
    /// - [`SamplingError::EmptyWeights`] if no options are given.
    /// - [`SamplingError::InvalidWeightType`] if a weight is not finite, or at
    ///   the index where the running total of weights stops being finite.
    pub fn new<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<WeightInput<T>>,
    {
        let options = coerce_weights(weights)?;
        if options.is_empty() {
            return Err(SamplingError::EmptyWeights);
        }
        let mut total = 0.0;
        for (index, option) in options.iter().enumerate() {
            total += option.weight;
            // A lone option is returned without rolling.
            if options.len() > 1 && !is_sampleable_width(total) {
                return Err(SamplingError::InvalidWeightType { index });
            }
        }
        Ok(Self { options, total })
    }

    /// Sum of all option weights.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of options, zero-weight ones included.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false`; construction rejects empty option lists.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Draw one outcome using the thread-local RNG.
    pub fn sample(&self) -> Result<T> {
        let mut rng = rand::rng();
        self.sample_with_rng(&mut rng)
    }

    /// Draw one outcome using a caller-supplied RNG.
    ///
    /// Zero-weight options are never picked.
    ///
    /// # Errors
    ///
    /// [`SamplingError::PointNotFound`] when the roll lands in no option,
    /// which happens when the weights sum to zero or less.
    pub fn sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T> {
        if self.options.len() == 1 {
            return Ok(self.options[0].outcome.clone());
        }
        if self.total <= 0.0 {
            return Err(SamplingError::PointNotFound { roll: 0.0 });
        }

        let roll = rng.random_range(0.0..=self.total);
        let mut position = 0.0;
        for option in &self.options {
            let end = position + option.weight;
            if option.weight > 0.0 && position <= roll && roll <= end {
                return Ok(option.outcome.clone());
            }
            position = end;
        }

        Err(SamplingError::PointNotFound { roll })
    }
}

/// Pick one outcome from `weights` with probability proportional to its weight.
///
/// Uses the thread-local RNG. See [`weighted_option_rand_with_rng`].
pub fn weighted_option_rand<T, I>(weights: I) -> Result<T>
where
    T: Clone,
    I: IntoIterator,
    I::Item: Into<WeightInput<T>>,
{
    let mut rng = rand::rng();
    weighted_option_rand_with_rng(weights, &mut rng)
}

/// Pick one outcome from `weights` with probability proportional to its weight, using `rng`.
pub fn weighted_option_rand_with_rng<T, I, R>(weights: I, rng: &mut R) -> Result<T>
where
    T: Clone,
    I: IntoIterator,
    I::Item: Into<WeightInput<T>>,
    R: Rng + ?Sized,
{
    WeightedOptions::new(weights)?.sample_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn single_option_always_wins() {
        assert_eq!(weighted_option_rand::<&str, _>([("a", 1.0)]), Ok("a"));
        // Even with a zero weight there is nothing else to pick.
        assert_eq!(weighted_option_rand::<&str, _>([("only", 0.0)]), Ok("only"));
    }

    #[test]
    fn zero_weight_option_is_never_picked() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let options = WeightedOptions::new([("a", 1.0), ("b", 0.0)]).expect("options");
        for _ in 0..5_000 {
            assert_eq!(options.sample_with_rng(&mut rng), Ok("a"));
        }
    }

    #[test]
    fn zero_weight_first_option_is_skipped() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let options = WeightedOptions::new([("z", 0.0), ("a", 2.0), ("y", 0.0)]).expect("options");
        for _ in 0..5_000 {
            assert_eq!(options.sample_with_rng(&mut rng), Ok("a"));
        }
    }

    #[test]
    fn all_zero_weights_report_point_not_found() {
        let options = WeightedOptions::new([("a", 0.0), ("b", 0.0)]).expect("options");
        assert_eq!(options.sample(), Err(SamplingError::PointNotFound { roll: 0.0 }));
    }

    #[test]
    fn negative_weights_shift_later_intervals() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        // total = 1; "a" spans nothing and "b" spans [-5, 1], covering every roll.
        let options = WeightedOptions::new([("a", -5.0), ("b", 6.0)]).expect("options");
        for _ in 0..1_000 {
            assert_eq!(options.sample_with_rng(&mut rng), Ok("b"));
        }
    }

    #[test]
    fn negative_total_reports_point_not_found() {
        let options = WeightedOptions::new([("a", 1.0), ("b", -3.0)]).expect("options");
        assert_eq!(options.total(), -2.0);
        assert!(matches!(options.sample(), Err(SamplingError::PointNotFound { .. })));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        assert_eq!(
            weighted_option_rand::<&str, _>([("a", 1e308), ("b", 1e308)]),
            Err(SamplingError::InvalidWeightType { index: 1 })
        );
        // Finite, but too close to f64::MAX to roll over.
        let err = WeightedOptions::new([("a", f64::MAX), ("b", 0.0)]).expect_err("near-max total");
        assert_eq!(err, SamplingError::InvalidWeightType { index: 0 });
        assert_eq!(weighted_option_rand::<&str, _>([("only", f64::MAX)]), Ok("only"));
        let err = WeightedOptions::new([("a", 1.0), ("b", -1e308), ("c", -1e308)])
            .expect_err("negative overflow");
        assert_eq!(err, SamplingError::InvalidWeightType { index: 2 });
    }

    #[test]
    fn empty_options_are_rejected() {
        let empty: Vec<(u8, f64)> = Vec::new();
        assert_eq!(weighted_option_rand::<u8, _>(empty), Err(SamplingError::EmptyWeights));
    }

    #[test]
    fn frequencies_follow_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let weights = [(0usize, 1.0), (1, 2.0), (2, 7.0)];
        let trials = 20_000;
        let mut counts = [0usize; 3];
        for _ in 0..trials {
            let i = weighted_option_rand_with_rng(weights, &mut rng).expect("sample");
            counts[i] += 1;
        }

        let chi2: f64 = counts
            .iter()
            .zip(weights.iter())
            .map(|(&c, &(_, w))| {
                let expected = trials as f64 * w / 10.0;
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // df = 2.
        assert!(chi2 < 20.0, "chi2 too large (chi2={chi2:.2}). counts={counts:?}");
    }

    #[test]
    fn arbitrary_outcome_types() {
        #[derive(Debug, Clone, PartialEq)]
        enum Trait {
            Brave,
            Shy,
        }
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let picked = weighted_option_rand_with_rng(
            [WeightPoint::new(Trait::Brave, 0.0), WeightPoint::new(Trait::Shy, 1.0)],
            &mut rng,
        );
        assert_eq!(picked, Ok(Trait::Shy));
    }
}
