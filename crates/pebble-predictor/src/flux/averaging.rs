use log::warn;
use units::{MassRate, Velocity};

use crate::config::ModelConstants;
use crate::disk::LocalDiskState;
use crate::disk::constants::PI;
use crate::particles::{SizeDistributionMoment, radial_drift_velocity};
use crate::predictor::PredictionResult;
use crate::regime::{Classification, Regime, growth_timescale};

/// Turn the distribution moments at one radius into a prediction.
///
/// The population drifts at the speed of its mass-weighted Stokes number;
/// the reported Stokes number is the flux-weighted one.
pub fn average_flux(
    moment: &SizeDistributionMoment,
    classification: &Classification,
    local: &LocalDiskState,
    constants: &ModelConstants,
) -> PredictionResult {
    if local.eta < 0.0 {
        warn!(
            "pressure rises outward at {:.4} AU, pebbles drift outward",
            local.radius.to_au()
        );
    }

    let mut drift_velocity = radial_drift_velocity(local, moment.mass_weighted_stokes_number);
    if constants.growth_flux_cap {
        drift_velocity = growth_capped_velocity(drift_velocity, local, constants);
    }

    let r = local.radius.to_cm();
    let sigma_d = local.dust_surface_density().to_grams_per_cm2();
    let flux = 2.0 * PI * r * sigma_d * drift_velocity.to_cm_per_sec();

    PredictionResult {
        radius: local.radius,
        stokes_number_flux_averaged: moment.flux_weighted_stokes_number,
        pebble_mass_flux: MassRate::from_grams_per_sec(flux),
        governing_regime: classification.governing.regime,
        mass_weighted_stokes_number: moment.mass_weighted_stokes_number,
        drift_velocity,
        fragmentation_limit: classification.limit(Regime::Fragmentation).stokes_number,
        drift_limit: classification.limit(Regime::Drift).stokes_number,
        growth_limit: classification.limit(Regime::GrowthTimescale).stokes_number,
    }
}

/// Limit |v| to r / (N_gd t_grow): pebbles cannot be delivered faster than
/// growth produces them. Zero in a laminar disk, where nothing grows.
pub fn growth_capped_velocity(
    velocity: Velocity,
    local: &LocalDiskState,
    constants: &ModelConstants,
) -> Velocity {
    let t_grow = growth_timescale(local).to_seconds();
    let v_max = local.radius.to_cm() / (t_grow * constants.growth_drift_ratio);

    let v = velocity.to_cm_per_sec();
    Velocity::from_cm_per_sec(v.signum() * v.abs().min(v_max))
}
