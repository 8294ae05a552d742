//! Error types for the pebble predictor.
//!
//! Only two things can go wrong: an input violates its range invariant, or
//! it is in range but physically meaningless (no dust, so nothing can grow).
//! Failures during a multi-radius prediction are wrapped with the radius that
//! triggered them; [`PredictError::kind`] sees through the wrapper.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PredictError>;

/// Coarse classification of a [`PredictError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    DegenerateInput,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// A parameter or radius is outside its valid range.
    #[error("invalid input: {parameter} = {value} ({reason})")]
    InvalidInput {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A parameter is in range but leaves growth undefined.
    #[error("degenerate input: {parameter} = {value} ({reason})")]
    DegenerateInput {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An error raised while handling one radius of a multi-radius call.
    #[error("radius #{index} (r = {radius_au} AU): {source}")]
    AtRadius {
        index: usize,
        radius_au: f64,
        #[source]
        source: Box<PredictError>,
    },
}

impl PredictError {
    pub(crate) fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput {
            parameter,
            value,
            reason,
        }
    }

    pub(crate) fn degenerate(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::DegenerateInput {
            parameter,
            value,
            reason,
        }
    }

    pub(crate) fn at_radius(self, index: usize, radius_au: f64) -> Self {
        Self::AtRadius {
            index,
            radius_au,
            source: Box::new(self),
        }
    }

    /// The underlying error kind, looking through radius context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::DegenerateInput { .. } => ErrorKind::DegenerateInput,
            Self::AtRadius { source, .. } => source.kind(),
        }
    }

    /// Index of the radius that triggered the error, if any.
    pub fn radius_index(&self) -> Option<usize> {
        match self {
            Self::AtRadius { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidInput { parameter, .. } | Self::DegenerateInput { parameter, .. } => {
                parameter
            }
            Self::AtRadius { source, .. } => source.parameter(),
        }
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PredictError::invalid(
            parameter,
            value,
            "must be positive and finite",
        ))
    }
}

/// Checks that `value` is finite (slopes may have either sign).
pub(crate) fn require_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PredictError::invalid(parameter, value, "must be finite"))
    }
}

/// Checks that `value` is finite and not negative.
pub(crate) fn require_non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PredictError::invalid(
            parameter,
            value,
            "must be non-negative and finite",
        ))
    }
}
