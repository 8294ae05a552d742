use serde::{Deserialize, Serialize};
use std::ops::{Mul, Neg};

use crate::length::AU_TO_CM;
use crate::time::SECONDS_PER_YEAR;

/// A signed speed, stored in cm/s.
///
/// Collision and fragmentation speeds are usually given in m/s, sound speeds
/// and drift speeds in cm/s. Radial velocities are negative toward the star.
///
/// ```rust
/// use units::Velocity;
///
/// let v_frag = Velocity::from_meters_per_sec(10.0);
/// assert_eq!(v_frag.to_cm_per_sec(), 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: cm/s

impl Velocity {
    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value * 100.0)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * 1e5)
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0 / 100.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / 1e5
    }

    /// AU per year, handy for comparing drift against orbital radii.
    pub fn to_au_per_year(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR / AU_TO_CM
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity(-self.0)
    }
}
