//! Limiting Stokes numbers and selection of the governing one.
//!
//! # Physics
//!
//! Fragmentation: turbulent relative speeds Δv² ≈ 3 α St c_s² reach the
//! fraction f_f of v_frag at
//!
//! St_frag = f_f v_frag² / (3 α c_s²)
//!
//! and, if enabled, differential drift Δv ≈ 2 |η| v_K St reaches it at
//!
//! St_df = f_f v_frag / (2 |η| v_K)
//!
//! Drift: growth must outpace drift by a factor N_gd,
//!
//! St_drift = Z / (|η| N_gd)
//!
//! Growth timescale: particles grow exponentially from the monomer Stokes
//! number St_0 on the timescale
//!
//! t_grow = 1 / ((α / 10⁻⁴)^(1/3) Z Ω_K (r / 1 AU)^(-1/3))
//!
//! so that after a disk age t, St_grow = St_0 exp(t / t_grow).

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use units::Time;

use crate::config::ModelConstants;
use crate::disk::constants::{GROWTH_ALPHA_REF, REFERENCE_RADIUS_AU};
use crate::disk::{DiskParameters, LocalDiskState};
use crate::error::{PredictError, Result};
use crate::regime::{Regime, SizeLimit};

/// The three candidate limits at one radius and the one that governs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// In [`Regime::ALL`] order
    pub limits: [SizeLimit; 3],
    pub governing: SizeLimit,
}

impl Classification {
    pub fn limit(&self, regime: Regime) -> SizeLimit {
        self.limits[regime.precedence() as usize]
    }
}

/// Compute all three size limits at `local` and pick the governing one.
///
/// Fails with `DegenerateInput` if the local dust-to-gas ratio is zero.
pub fn classify(
    local: &LocalDiskState,
    params: &DiskParameters,
    constants: &ModelConstants,
) -> Result<Classification> {
    if local.dust_to_gas_ratio == 0.0 {
        return Err(PredictError::degenerate(
            "dustToGasRatio",
            local.dust_to_gas_ratio,
            "no solids, growth is undefined",
        ));
    }

    let limits = [
        SizeLimit::new(
            Regime::Fragmentation,
            fragmentation_limit(local, params, constants),
        ),
        SizeLimit::new(Regime::Drift, drift_limit(local, constants)),
        SizeLimit::new(Regime::GrowthTimescale, growth_limit(local, constants)),
    ];
    let governing = select_governing(&limits, constants.tie_tolerance);

    trace!(
        "limits at {:.4} AU: frag={:.4e}, drift={:.4e}, growth={:.4e}",
        local.radius.to_au(),
        limits[0].stokes_number,
        limits[1].stokes_number,
        limits[2].stokes_number
    );
    debug!(
        "{:.4} AU is {}-limited (St = {:.4e})",
        local.radius.to_au(),
        governing.regime,
        governing.stokes_number
    );

    Ok(Classification { limits, governing })
}

/// Smallest limit; any limit within `tolerance` of it is a tie, and ties go
/// to the regime with the higher precedence (fragmentation, then drift, then
/// growth).
pub fn select_governing(limits: &[SizeLimit; 3], tolerance: f64) -> SizeLimit {
    let smallest = limits[1..].iter().fold(limits[0], |smallest, candidate| {
        if candidate.stokes_number < smallest.stokes_number {
            *candidate
        } else {
            smallest
        }
    });

    limits
        .iter()
        .filter(|candidate| candidate.ties_with(&smallest, tolerance))
        .fold(smallest, |governing, candidate| {
            if candidate.regime.precedence() < governing.regime.precedence() {
                *candidate
            } else {
                governing
            }
        })
}

/// Fragmentation barrier, optionally including drift-induced fragmentation.
///
/// Unbounded in a laminar disk unless drift-induced fragmentation is on.
pub fn fragmentation_limit(
    local: &LocalDiskState,
    params: &DiskParameters,
    constants: &ModelConstants,
) -> f64 {
    let f_f = constants.fragmentation_efficiency;
    let v_frag = params.fragmentation_velocity.to_cm_per_sec();
    let c_s = local.sound_speed.to_cm_per_sec();

    let turbulent = if local.alpha > 0.0 {
        f_f * v_frag.powi(2) / (3.0 * local.alpha * c_s.powi(2))
    } else {
        f64::INFINITY
    };

    if !constants.drift_fragmentation {
        return turbulent;
    }

    let headwind = local.eta.abs() * local.keplerian_velocity.to_cm_per_sec();
    let drift_induced = if headwind > 0.0 {
        f_f * v_frag / (2.0 * headwind)
    } else {
        f64::INFINITY
    };

    turbulent.min(drift_induced)
}

/// Drift barrier. Unbounded without a pressure gradient.
pub fn drift_limit(local: &LocalDiskState, constants: &ModelConstants) -> f64 {
    let eta = local.eta.abs();
    if eta > 0.0 {
        local.dust_to_gas_ratio / (eta * constants.growth_drift_ratio)
    } else {
        f64::INFINITY
    }
}

/// e-folding time of the maximum particle size.
///
/// Infinite in a laminar disk.
pub fn growth_timescale(local: &LocalDiskState) -> Time {
    if local.alpha <= 0.0 {
        return Time::from_seconds(f64::INFINITY);
    }

    let alpha_factor = (local.alpha / GROWTH_ALPHA_REF).cbrt();
    let radius_factor = (local.radius.to_au() / REFERENCE_RADIUS_AU).powf(-1.0 / 3.0);
    let omega = local.orbital_frequency.to_rad_per_sec();

    let rate = alpha_factor * local.dust_to_gas_ratio * omega * radius_factor;
    Time::from_seconds(1.0 / rate)
}

/// Stokes number reached by exponential growth from monomers at the disk age.
pub fn growth_limit(local: &LocalDiskState, constants: &ModelConstants) -> f64 {
    let st_0 = local.monomer_stokes_number(constants);
    let t_grow = growth_timescale(local);
    let e_folds = constants.disk_age() / t_grow;

    let st_grow = st_0 * e_folds.exp();
    if st_grow.is_infinite() {
        warn!(
            "growth limit overflows at {:.4} AU ({e_folds:.1} e-folds), treating as unbounded",
            local.radius.to_au()
        );
    }
    st_grow
}
