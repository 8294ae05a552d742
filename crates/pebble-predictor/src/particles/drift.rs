//! Radial drift of solids through sub-Keplerian gas.
//!
//! Implements Weidenschilling (1977) and Nakagawa et al. (1986).

use units::Velocity;

use crate::disk::LocalDiskState;

/// Fraction of the maximum drift speed reached at Stokes number `st`.
///
/// 2 St / (1 + St²), peaking at 1 for St = 1 and vanishing at both ends.
pub fn drift_efficiency(st: f64) -> f64 {
    if st.is_finite() {
        2.0 * st / (1.0 + st * st)
    } else {
        0.0
    }
}

/// Radial drift velocity of particles with Stokes number `st`.
///
/// v_r = -2 η v_K St / (1 + St²)
///
/// Negative (inward) when the pressure falls outward. Peak drift occurs at
/// St = 1, where |v_r| = η v_K, typically tens of m/s.
pub fn radial_drift_velocity(local: &LocalDiskState, st: f64) -> Velocity {
    let v_k = local.keplerian_velocity.to_cm_per_sec();
    Velocity::from_cm_per_sec(-local.eta * v_k * drift_efficiency(st))
}
