//! Outcome→weight maps and their merging.
//!
//! A [`WeightMap`] keys weights by integer outcome (e.g. a word distance).
//! Before two maps are merged, each one is filled in: every integer key in
//! `[min, max)` that the map lacks is linearly interpolated from its nearest
//! present neighbours.

use std::collections::BTreeMap;

use rand::prelude::*;

use crate::error::{Result, SamplingError};
use crate::generate::CurveGenerator;
use crate::interpolate::interpolate;

/// Integer outcome to weight.
pub type WeightMap = BTreeMap<i64, f64>;

/// Random weight map over `[min_key, max_key]` using the thread-local RNG.
pub fn markov_weights_dict(min_key: i64, max_key: i64) -> Result<WeightMap> {
    let mut rng = rand::rng();
    markov_weights_dict_with_rng(min_key, max_key, &mut rng)
}

/// Random weight map over `[min_key, max_key]` generated at density 1.0.
pub fn markov_weights_dict_with_rng<R: Rng + ?Sized>(
    min_key: i64,
    max_key: i64,
    rng: &mut R,
) -> Result<WeightMap> {
    let points = CurveGenerator::new(min_key, max_key)
        .with_density(1.0)
        .generate_with_rng(rng)?;
    Ok(points
        .into_iter()
        .map(|p| (p.outcome as i64, p.weight))
        .collect())
}

/// Merge two weight maps, weighting `first` against `second` by `ratio`.
///
/// Over the combined span `[min, max)`, a key held by one filled map keeps
/// that map's value and a key held by both becomes
/// `(v1 * ratio + v2 / ratio) / 2`. Keys covered by neither map (a gap
/// between two disjoint spans) are left out.
///
/// # Errors
///
/// - [`SamplingError::InvalidRatio`] unless `0 < ratio <= 1`.
/// - [`SamplingError::EmptyWeights`] if either map is empty.
pub fn merge_markov_weights_dicts(first: &WeightMap, second: &WeightMap, ratio: f64) -> Result<WeightMap> {
    if !(ratio > 0.0 && ratio <= 1.0) {
        return Err(SamplingError::InvalidRatio(ratio));
    }

    let filled_first = fill_gaps(first)?;
    let filled_second = fill_gaps(second)?;

    // Both maps are non-empty past fill_gaps.
    let min_key = first.keys().chain(second.keys()).copied().min().unwrap_or_default();
    let max_key = first.keys().chain(second.keys()).copied().max().unwrap_or_default();

    let mut merged = WeightMap::new();
    for key in min_key..max_key {
        let value = match (filled_first.get(&key), filled_second.get(&key)) {
            (Some(&v1), Some(&v2)) => ((v1 * ratio) + (v2 * (1.0 / ratio))) / 2.0,
            (Some(&v), None) | (None, Some(&v)) => v,
            (None, None) => continue,
        };
        merged.insert(key, value);
    }
    Ok(merged)
}

/// Copy of `map` with every integer key in `[min, max)` present.
fn fill_gaps(map: &WeightMap) -> Result<WeightMap> {
    let (Some((&lo, _)), Some((&hi, _))) = (map.first_key_value(), map.last_key_value()) else {
        return Err(SamplingError::EmptyWeights);
    };

    let mut out = WeightMap::new();
    for key in lo..hi {
        if let Some(&value) = map.get(&key) {
            out.insert(key, value);
            continue;
        }
        let lower = map.range(..key).next_back();
        let upper = map.range(key + 1..).next();
        let (Some((&lower_key, &lower_value)), Some((&upper_key, &upper_value))) = (lower, upper) else {
            return Err(SamplingError::InsufficientAnchors { key });
        };
        let value = interpolate(
            lower_key as f64,
            lower_value,
            upper_key as f64,
            upper_value,
            key as f64,
            false,
        )?;
        out.insert(key, value);
    }
    Ok(out)
}
