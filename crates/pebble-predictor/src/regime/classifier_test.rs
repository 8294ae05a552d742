use approx::assert_relative_eq;
use units::{AngularVelocity, Length, Mass, SurfaceDensity, Temperature, Time, Velocity};

use crate::config::ModelConstants;
use crate::disk::{DiskParameters, LocalDiskState, compute_local_state};
use crate::error::ErrorKind;
use crate::regime::{
    Regime, classify, drift_limit, fragmentation_limit, growth_limit, growth_timescale,
};

/// Σ ∝ r⁻¹, T ∝ r^(-1/2) disk around a solar-mass star.
fn test_params() -> DiskParameters {
    DiskParameters::new(
        Mass::from_solar_masses(1.0),
        SurfaceDensity::from_grams_per_cm2(1000.0),
        -1.0,
        Temperature::from_kelvin(280.0),
        -0.5,
        1e-3,
        Velocity::from_meters_per_sec(10.0),
        0.01,
    )
}

fn local_at(params: &DiskParameters, r_au: f64, constants: &ModelConstants) -> LocalDiskState {
    compute_local_state(params, Length::from_au(r_au), constants).unwrap()
}

/// Hand-built state at 10 AU with chosen η and α.
fn synthetic_state(eta: f64, alpha: f64) -> LocalDiskState {
    LocalDiskState {
        radius: Length::from_au(10.0),
        surface_density: SurfaceDensity::from_grams_per_cm2(50.0),
        temperature: Temperature::from_kelvin(90.0),
        sound_speed: Velocity::from_cm_per_sec(6.0e4),
        scale_height: Length::from_au(0.6),
        orbital_frequency: AngularVelocity::from_rad_per_sec(6.3e-9),
        keplerian_velocity: Velocity::from_cm_per_sec(9.4e5),
        alpha,
        dust_to_gas_ratio: 0.01,
        eta,
    }
}

// =============================================================================
// Regimes across a disk
// =============================================================================

#[test]
fn fragmentation_governs_inner_disk() {
    let params = test_params();
    let constants = ModelConstants::default();
    let local = local_at(&params, 1.0, &constants);

    let classification = classify(&local, &params, &constants).unwrap();
    assert_eq!(classification.governing.regime, Regime::Fragmentation);

    // St_frag = 0.37 v_frag² / (3 α c_s²)
    let c_s = local.sound_speed.to_cm_per_sec();
    let expected = 0.37 * 1000.0_f64.powi(2) / (3.0 * 1e-3 * c_s.powi(2));
    assert_relative_eq!(
        classification.limit(Regime::Fragmentation).stokes_number,
        expected,
        max_relative = 1e-12
    );
    assert!(expected > 0.01 && expected < 0.015, "St_frag = {expected:.4}");

    // A Myr is hundreds of thousands of growth times at 1 AU
    assert!(!classification.limit(Regime::GrowthTimescale).is_bounded());
}

#[test]
fn drift_governs_outer_disk() {
    let params = test_params();
    let constants = ModelConstants::default();
    let local = local_at(&params, 100.0, &constants);

    let classification = classify(&local, &params, &constants).unwrap();
    assert_eq!(classification.governing.regime, Regime::Drift);

    // St_drift = Z / (|η| × 30)
    let expected = 0.01 / (local.eta * 30.0);
    assert_relative_eq!(classification.governing.stokes_number, expected, max_relative = 1e-12);
    assert!(expected > 0.015 && expected < 0.03, "St_drift = {expected:.4}");
}

#[test]
fn growth_governs_young_disk() {
    let params = test_params();
    let constants = ModelConstants::default().with_disk_age(Time::from_years(1e3));
    let local = local_at(&params, 50.0, &constants);

    let t_grow = growth_timescale(&local).to_years();
    assert!(t_grow > 9000.0 && t_grow < 10500.0, "t_grow = {t_grow:.0} yr");

    let classification = classify(&local, &params, &constants).unwrap();
    assert_eq!(classification.governing.regime, Regime::GrowthTimescale);

    let st_0 = local.monomer_stokes_number(&constants);
    assert_relative_eq!(
        classification.governing.stokes_number,
        st_0 * (1e3 / t_grow).exp(),
        max_relative = 1e-10
    );
}

#[test]
fn growth_timescale_matches_calibration() {
    let params = test_params();
    let constants = ModelConstants::default();
    let local = local_at(&params, 50.0, &constants);

    let omega = local.orbital_frequency.to_rad_per_sec();
    let expected = 1.0 / (10.0_f64.cbrt() * 0.01 * omega * 50.0_f64.powf(-1.0 / 3.0));

    assert_relative_eq!(
        growth_timescale(&local).to_seconds(),
        expected,
        max_relative = 1e-10
    );
}

// =============================================================================
// Synthetic states
// =============================================================================

#[test]
fn synthetic_limits_select_fragmentation() {
    let alpha = 1e-3;
    let local = synthetic_state(0.01 / (0.5 * 30.0), alpha);
    let c_s = local.sound_speed.to_cm_per_sec();

    // v_frag so that St_frag = 0.01
    let v_frag = (0.01 * 3.0 * alpha * c_s.powi(2) / 0.37).sqrt();
    let params = test_params().with_fragmentation_velocity(Velocity::from_cm_per_sec(v_frag));

    // Disk age so that St_grow = 2.0
    let base = ModelConstants::default();
    let st_0 = local.monomer_stokes_number(&base);
    let t_grow = growth_timescale(&local).to_years();
    let constants = base.with_disk_age(Time::from_years(t_grow * (2.0 / st_0).ln()));

    let classification = classify(&local, &params, &constants).unwrap();

    let limits = classification.limits.map(|l| l.stokes_number);
    assert_relative_eq!(limits[0], 0.01, max_relative = 1e-9);
    assert_relative_eq!(limits[1], 0.5, max_relative = 1e-9);
    assert_relative_eq!(limits[2], 2.0, max_relative = 1e-9);
    assert_eq!(classification.governing.regime, Regime::Fragmentation);
    assert_eq!(classification.governing, classification.limits[0]);
}

#[test]
fn fragmentation_limit_grows_with_fragmentation_velocity() {
    let local = synthetic_state(1e-3, 1e-3);
    let constants = ModelConstants::default();

    let limits: Vec<f64> = [0.5, 1.0, 5.0, 10.0, 30.0]
        .iter()
        .map(|&v| {
            let params = test_params().with_fragmentation_velocity(Velocity::from_meters_per_sec(v));
            fragmentation_limit(&local, &params, &constants)
        })
        .collect();

    for pair in limits.windows(2) {
        assert!(pair[1] > pair[0], "{limits:?}");
    }
    // St_frag ∝ v_frag²
    assert_relative_eq!(limits[3] / limits[1], 100.0, max_relative = 1e-10);
}

#[test]
fn laminar_disk_has_no_fragmentation_barrier() {
    let local = synthetic_state(1e-3, 0.0);
    let params = test_params().with_turbulence_alpha(0.0);
    let constants = ModelConstants::default();

    let classification = classify(&local, &params, &constants).unwrap();
    assert!(!classification.limit(Regime::Fragmentation).is_bounded());
    assert_ne!(classification.governing.regime, Regime::Fragmentation);

    // No growth without turbulence: St_grow = St_0
    assert!(growth_timescale(&local).to_seconds().is_infinite());
    assert_eq!(
        growth_limit(&local, &constants),
        local.monomer_stokes_number(&constants)
    );
    assert_eq!(classification.governing.regime, Regime::GrowthTimescale);
}

#[test]
fn drift_induced_fragmentation_caps_laminar_disk() {
    let local = synthetic_state(1e-3, 0.0);
    let params = test_params().with_turbulence_alpha(0.0);
    let constants = ModelConstants::default().with_drift_fragmentation(true);

    let st_df = fragmentation_limit(&local, &params, &constants);
    let expected = 0.37 * 1000.0 / (2.0 * 1e-3 * 9.4e5);
    assert_relative_eq!(st_df, expected, max_relative = 1e-12);
}

#[test]
fn drift_induced_fragmentation_only_lowers_the_limit() {
    let local = synthetic_state(1e-3, 1e-4);
    let params = test_params();

    let plain = fragmentation_limit(&local, &params, &ModelConstants::default());
    let combined = fragmentation_limit(
        &local,
        &params,
        &ModelConstants::default().with_drift_fragmentation(true),
    );
    assert!(combined <= plain);
}

#[test]
fn flat_pressure_has_no_drift_barrier() {
    let local = synthetic_state(0.0, 1e-3);
    assert!(drift_limit(&local, &ModelConstants::default()).is_infinite());
}

#[test]
fn drift_limit_uses_magnitude_of_eta() {
    let constants = ModelConstants::default();
    let inward = drift_limit(&synthetic_state(2e-3, 1e-3), &constants);
    let outward = drift_limit(&synthetic_state(-2e-3, 1e-3), &constants);

    assert_relative_eq!(inward, outward);
    assert!(outward > 0.0);
}

#[test]
fn dust_free_state_is_degenerate() {
    let mut local = synthetic_state(1e-3, 1e-3);
    local.dust_to_gas_ratio = 0.0;

    let err = classify(&local, &test_params(), &ModelConstants::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
}
