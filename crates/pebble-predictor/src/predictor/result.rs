use serde::{Deserialize, Serialize};
use units::{Length, MassRate, Velocity};

use crate::regime::{Regime, SizeLimit};

/// Prediction at one radius.
///
/// Besides the two predicted quantities it carries the diagnostics needed to
/// draw a regime map: the three candidate limits, the mass-weighted Stokes
/// number and the drift velocity. Unbounded limits are `f64::INFINITY`; JSON
/// writes them as `null` and reads `null` back as unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub radius: Length,
    pub stokes_number_flux_averaged: f64,
    /// Negative means toward the star
    pub pebble_mass_flux: MassRate,
    pub governing_regime: Regime,

    pub mass_weighted_stokes_number: f64,
    pub drift_velocity: Velocity,
    #[serde(with = "crate::regime::unbounded")]
    pub fragmentation_limit: f64,
    #[serde(with = "crate::regime::unbounded")]
    pub drift_limit: f64,
    #[serde(with = "crate::regime::unbounded")]
    pub growth_limit: f64,
}

impl PredictionResult {
    /// Candidate limit of `regime`.
    pub fn limit(&self, regime: Regime) -> SizeLimit {
        let stokes_number = match regime {
            Regime::Fragmentation => self.fragmentation_limit,
            Regime::Drift => self.drift_limit,
            Regime::GrowthTimescale => self.growth_limit,
        };
        SizeLimit::new(regime, stokes_number)
    }

    pub fn governing_limit(&self) -> SizeLimit {
        self.limit(self.governing_regime)
    }

    /// Pebble flux in Earth masses per Myr.
    pub fn pebble_flux_earth_masses_per_myr(&self) -> f64 {
        self.pebble_mass_flux.to_earth_masses_per_myr()
    }
}
