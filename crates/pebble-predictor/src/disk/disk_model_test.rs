use approx::assert_relative_eq;
use units::{Length, Mass, SurfaceDensity, Temperature};

use crate::config::ModelConstants;
use crate::disk::constants::{K_B, M_PROTON, PI};
use crate::disk::{DiskModel, DiskParameters, PowerLawDisk};

fn mmsn_disk() -> PowerLawDisk {
    PowerLawDisk::new(&DiskParameters::mmsn(), &ModelConstants::default())
}

/// Delegates the required methods but keeps the numerical pressure gradient.
struct NumericalGradientDisk(PowerLawDisk);

impl DiskModel for NumericalGradientDisk {
    fn surface_density(&self, r: Length) -> SurfaceDensity {
        self.0.surface_density(r)
    }

    fn temperature(&self, r: Length) -> Temperature {
        self.0.temperature(r)
    }

    fn stellar_mass(&self) -> Mass {
        self.0.stellar_mass()
    }

    fn alpha(&self, r: Length) -> f64 {
        self.0.alpha(r)
    }

    fn dust_to_gas_ratio(&self, r: Length) -> f64 {
        self.0.dust_to_gas_ratio(r)
    }

    fn mean_molecular_weight(&self) -> f64 {
        self.0.mean_molecular_weight()
    }
}

// =============================================================================
// Power-law profiles
// =============================================================================

#[test]
fn surface_density_at_reference_radius() {
    let disk = mmsn_disk();
    let sigma = disk.surface_density(disk.reference_radius());

    assert_eq!(disk.reference_radius(), Length::from_au(1.0));
    assert_relative_eq!(sigma.to_grams_per_cm2(), 1700.0, max_relative = 1e-10);
}

#[test]
fn surface_density_follows_slope() {
    let disk = mmsn_disk();
    let sigma = disk.surface_density(Length::from_au(4.0));

    // Σ(4 AU) = 1700 × 4^(-1.5)
    assert_relative_eq!(sigma.to_grams_per_cm2(), 212.5, max_relative = 1e-10);
}

#[test]
fn temperature_follows_slope() {
    let disk = mmsn_disk();
    let t = disk.temperature(Length::from_au(4.0));

    assert_relative_eq!(t.to_kelvin(), 140.0, max_relative = 1e-10);
}

// =============================================================================
// Derived quantities
// =============================================================================

#[test]
fn orbital_period_at_1au_is_one_year() {
    let disk = mmsn_disk();
    let omega = disk.orbital_frequency(Length::from_au(1.0));
    let period_years = omega.period_seconds() / units::SECONDS_PER_YEAR;

    assert_relative_eq!(period_years, 1.0, max_relative = 0.01);
}

#[test]
fn keplers_third_law() {
    let disk = mmsn_disk();
    let p_1 = disk.orbital_frequency(Length::from_au(1.0)).period_seconds();
    let p_4 = disk.orbital_frequency(Length::from_au(4.0)).period_seconds();

    assert_relative_eq!(p_4 / p_1, 8.0, max_relative = 1e-10);
}

#[test]
fn sound_speed_uses_mean_molecular_weight() {
    let disk = mmsn_disk();
    let c_s = disk.sound_speed(Length::from_au(1.0)).to_cm_per_sec();
    let expected = (K_B * 280.0 / (2.3 * M_PROTON)).sqrt();

    assert_relative_eq!(c_s, expected, max_relative = 1e-10);
    // ~1 km/s at 1 AU
    assert!(c_s > 0.9e5 && c_s < 1.1e5, "c_s = {c_s:.4e} cm/s");
}

#[test]
fn aspect_ratio_flares_outward() {
    let disk = mmsn_disk();
    let h_r_1 = disk.aspect_ratio(Length::from_au(1.0));
    let h_r_16 = disk.aspect_ratio(Length::from_au(16.0));

    assert!(
        h_r_1 > 0.02 && h_r_1 < 0.05,
        "h/r at 1 AU: expected ~0.03, got {h_r_1:.4}"
    );
    // T ∝ r^(-1/2) gives h/r ∝ r^(1/4)
    assert_relative_eq!(h_r_16 / h_r_1, 2.0, max_relative = 1e-10);
}

#[test]
fn midplane_density_definition() {
    let disk = mmsn_disk();
    let r = Length::from_au(2.0);
    let sigma = disk.surface_density(r).to_grams_per_cm2();
    let h = disk.scale_height(r).to_cm();

    assert_relative_eq!(
        disk.midplane_density(r).to_grams_per_cm3(),
        sigma / ((2.0 * PI).sqrt() * h),
        max_relative = 1e-12
    );
}

#[test]
fn pressure_gradient_parameter_reasonable() {
    let disk = mmsn_disk();
    let eta_1 = disk.pressure_gradient_parameter(Length::from_au(1.0));
    let eta_10 = disk.pressure_gradient_parameter(Length::from_au(10.0));

    assert!(
        eta_1 > 0.001 && eta_1 < 0.01,
        "η at 1 AU: expected ~0.002, got {eta_1:.5}"
    );
    // η ∝ (h/r)² ∝ r^(1/2)
    assert_relative_eq!(eta_10 / eta_1, 10.0_f64.sqrt(), max_relative = 1e-10);
}

#[test]
fn analytical_gradient_matches_numerical() {
    let analytical = mmsn_disk();
    let numerical = NumericalGradientDisk(mmsn_disk());

    for r_au in [0.3, 1.0, 7.5, 60.0] {
        let r = Length::from_au(r_au);
        assert_relative_eq!(
            numerical.pressure_gradient_log(r),
            analytical.pressure_gradient_log(r),
            max_relative = 1e-6
        );
    }
    // -1.5 - 0.25 - 1.5
    assert_relative_eq!(analytical.pressure_gradient_log(Length::from_au(1.0)), -3.25);
}

#[test]
fn rising_pressure_gives_negative_eta() {
    let params = DiskParameters {
        surface_density_slope: 2.5,
        ..DiskParameters::mmsn()
    };
    let disk = PowerLawDisk::new(&params, &ModelConstants::default());

    assert!(disk.pressure_gradient_parameter(Length::from_au(1.0)) < 0.0);
}

#[test]
fn dust_surface_density_scales_with_ratio() {
    let disk = mmsn_disk();
    let r = Length::from_au(3.0);

    assert_relative_eq!(
        disk.dust_surface_density(r).to_grams_per_cm2(),
        0.01 * disk.surface_density(r).to_grams_per_cm2(),
        max_relative = 1e-12
    );
}
