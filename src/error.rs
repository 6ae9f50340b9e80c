//! Error type shared by every sampling operation.

use thiserror::Error;

/// Errors reported by the sampling, generation and merge operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// An input element is not a usable `(outcome, weight)` pair.
    #[error("weight at index {index} is not a valid type")]
    InvalidWeightType { index: usize },

    /// Interpolation between two points sharing the same x.
    #[error("cannot interpolate over a zero-width interval at x = {x}")]
    DegenerateInterval { x: f64 },

    /// Discrete selection walked every option without containing the roll.
    #[error("point at {roll} was not found in the weight list")]
    PointNotFound { roll: f64 },

    /// No lower or upper neighbour exists to interpolate a missing key.
    #[error("no interpolation anchors around key {key}")]
    InsufficientAnchors { key: i64 },

    /// Rejection sampling gave up.
    #[error("no point found under the weight curve after {attempts} attempts")]
    SamplingExhausted { attempts: usize },

    /// The curve's bounding box is wider or taller than `f64` can represent.
    #[error("weight curve bounding box overflows (width {width}, height {height})")]
    BoundsOverflow { width: f64, height: f64 },

    /// The weight list or map is empty.
    #[error("weights must be non-empty")]
    EmptyWeights,

    /// Merge ratio outside `(0, 1]`.
    #[error("merge ratio must be in (0, 1] (got {0})")]
    InvalidRatio(f64),

    /// A generator was configured with unusable parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A type alias for `Result<T, SamplingError>`.
pub type Result<T> = std::result::Result<T, SamplingError>;
