use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Mass of the Sun in grams
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// Mass of the Earth in grams
pub const EARTH_MASS_G: f64 = 5.972e27;

/// A mass, stored in solar masses.
///
/// Stellar masses are the main use in this workspace; pebble reservoirs are
/// usually quoted in Earth masses.
///
/// ```rust
/// use units::Mass;
///
/// let star = Mass::from_solar_masses(0.5);
/// assert!((star.to_grams() - 0.5 * units::SOLAR_MASS_G).abs() < 1e20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_G / SOLAR_MASS_G)
    }

    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / EARTH_MASS_G
    }

    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}
