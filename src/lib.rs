//! `blur`: weight-curve sampling primitives.
//!
//! Turn a handful of `(outcome, weight)` points into random draws that follow
//! their shape, either as a continuous curve or as a set of discrete options.
//!
//! Exposed modules:
//! - `point`: `WeightPoint` and input coercion.
//! - `interpolate`: linear interpolation between two points.
//! - `curve`: rejection sampling under a piecewise-linear weight curve.
//! - `discrete`: cumulative-weight selection among labelled options.
//! - `generate`: random weight-curve generation, with fractional domains.
//! - `merge`: outcome→weight maps, gap filling and ratio merging.
//!
//! Every sampling entrypoint has a `*_with_rng` variant taking a caller-owned
//! `rand::Rng`; the plain variants use the thread-local `rand::rng()`.
//!
//! ```
//! use blur::{weighted_curve_rand, weighted_option_rand};
//!
//! let distance = weighted_curve_rand([(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)], true)?;
//! assert!((0.0..=10.0).contains(&distance));
//!
//! let mood = weighted_option_rand([("calm", 3.0), ("restless", 1.0)])?;
//! assert!(mood == "calm" || mood == "restless");
//! # Ok::<(), blur::SamplingError>(())
//! ```

#![forbid(unsafe_code)]

pub mod curve;
pub mod discrete;
pub mod error;
pub mod generate;
pub mod interpolate;
pub mod merge;
pub mod point;

pub use curve::{weighted_curve_rand, weighted_curve_rand_with_rng, WeightCurve, MAX_ATTEMPTS};
pub use discrete::{weighted_option_rand, weighted_option_rand_with_rng, WeightedOptions};
pub use error::{Result, SamplingError};
pub use generate::{random_weight_list, random_weight_list_with_rng, Bound, CurveGenerator};
pub use interpolate::interpolate;
pub use merge::{
    markov_weights_dict, markov_weights_dict_with_rng, merge_markov_weights_dicts, WeightMap,
};
pub use point::{coerce_weights, WeightInput, WeightPoint};
