use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg};

use crate::mass::{EARTH_MASS_G, Mass};
use crate::time::{SECONDS_PER_YEAR, Time};

/// A signed mass flow rate, stored in grams per second.
///
/// Radial pebble fluxes are signed: negative values flow toward the star.
/// Grams per second is what the flux formula produces; Earth masses per
/// million years is what planet-formation papers quote.
///
/// ```rust
/// use units::MassRate;
///
/// let flux = MassRate::from_earth_masses_per_myr(-100.0);
/// assert!(flux.is_inward());
/// assert!((flux.to_earth_masses_per_myr() + 100.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: g/s

impl MassRate {
    pub fn from_grams_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_masses_per_myr(value: f64) -> Self {
        Self(value * EARTH_MASS_G / (1e6 * SECONDS_PER_YEAR))
    }

    pub fn to_grams_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses_per_myr(&self) -> f64 {
        self.0 * 1e6 * SECONDS_PER_YEAR / EARTH_MASS_G
    }

    /// Earth masses per year, the unit most pebble-accretion plots use.
    pub fn to_earth_masses_per_year(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR / EARTH_MASS_G
    }

    /// True when mass flows toward the star.
    pub fn is_inward(&self) -> bool {
        self.0 < 0.0
    }

    /// Mass transported during `duration` at this constant rate.
    ///
    /// The sign is dropped; the returned mass is the magnitude.
    pub fn integrate(&self, duration: Time) -> Mass {
        Mass::from_grams(self.0.abs() * duration.to_seconds())
    }
}

impl Add for MassRate {
    type Output = MassRate;

    fn add(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 + rhs.0)
    }
}

impl Mul<f64> for MassRate {
    type Output = MassRate;

    fn mul(self, rhs: f64) -> MassRate {
        MassRate(self.0 * rhs)
    }
}

impl Neg for MassRate {
    type Output = MassRate;

    fn neg(self) -> MassRate {
        MassRate(-self.0)
    }
}
