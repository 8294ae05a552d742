use serde::{Deserialize, Serialize};
use std::ops::Div;

/// Julian year in seconds
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0;

const MYR_TO_YEARS: f64 = 1_000_000.0;

/// A duration, stored in years.
///
/// Disk ages are quoted in years or Myr; growth and drift timescales come out
/// of the physics in seconds.
///
/// ```rust
/// use units::Time;
///
/// let age = Time::from_myr(1.0);
/// assert_eq!(age.to_years(), 1.0e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_myr(value: f64) -> Self {
        Self(value * MYR_TO_YEARS)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_YEAR)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_myr(&self) -> f64 {
        self.0 / MYR_TO_YEARS
    }

    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR
    }
}

/// Ratio of two durations, e.g. t_age / t_grow
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
