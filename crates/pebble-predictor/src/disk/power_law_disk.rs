//! Power-law gas disk built from [`DiskParameters`].
//!
//! # Physics
//!
//! The disk is vertically isothermal and in hydrostatic equilibrium, with
//!
//! - Σ(r) = Σ_ref (r / r_0)^s_Σ
//! - T(r) = T_ref (r / r_0)^s_T
//!
//! so that h ∝ r^((3 + s_T)/2), ρ_mid ∝ Σ/h and P = ρ_mid c_s² is itself a
//! power law with d ln P / d ln r = s_Σ + s_T/2 - 3/2. The pressure gradient
//! parameter η therefore only depends on r through (h/r)².

use units::{Length, Mass, SurfaceDensity, Temperature};

use crate::config::ModelConstants;
use crate::disk::DiskParameters;
use crate::disk::constants::REFERENCE_RADIUS_AU;
use crate::disk::disk_model::DiskModel;

/// A smooth disk with power-law surface density and temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerLawDisk {
    r_0: Length,
    sigma_0: SurfaceDensity,
    sigma_slope: f64,
    temperature_0: Temperature,
    temperature_slope: f64,
    stellar_mass: Mass,
    alpha: f64,
    dust_to_gas_ratio: f64,
    mean_molecular_weight: f64,
}

impl PowerLawDisk {
    /// Build the disk described by `params`.
    ///
    /// No validation happens here; see [`DiskParameters::validate`].
    pub fn new(params: &DiskParameters, constants: &ModelConstants) -> Self {
        Self {
            r_0: Length::from_au(REFERENCE_RADIUS_AU),
            sigma_0: params.surface_density_ref,
            sigma_slope: params.surface_density_slope,
            temperature_0: params.temperature_ref,
            temperature_slope: params.temperature_slope,
            stellar_mass: params.stellar_mass,
            alpha: params.turbulence_alpha,
            dust_to_gas_ratio: params.dust_to_gas_ratio,
            mean_molecular_weight: constants.mean_molecular_weight,
        }
    }

    /// Radius the profiles are normalised at.
    pub fn reference_radius(&self) -> Length {
        self.r_0
    }
}

impl DiskModel for PowerLawDisk {
    fn surface_density(&self, r: Length) -> SurfaceDensity {
        self.sigma_0.power_law(r / self.r_0, self.sigma_slope)
    }

    fn temperature(&self, r: Length) -> Temperature {
        self.temperature_0.power_law(r / self.r_0, self.temperature_slope)
    }

    fn stellar_mass(&self) -> Mass {
        self.stellar_mass
    }

    fn alpha(&self, _r: Length) -> f64 {
        self.alpha
    }

    fn dust_to_gas_ratio(&self, _r: Length) -> f64 {
        self.dust_to_gas_ratio
    }

    fn mean_molecular_weight(&self) -> f64 {
        self.mean_molecular_weight
    }

    /// Exact for a power-law disk:
    /// d ln P / d ln r = s_Σ + s_T/2 - 3/2
    fn pressure_gradient_log(&self, _r: Length) -> f64 {
        self.sigma_slope + 0.5 * self.temperature_slope - 1.5
    }
}
