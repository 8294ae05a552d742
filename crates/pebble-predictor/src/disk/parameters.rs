//! Global disk parameters supplied by the caller.

use serde::{Deserialize, Serialize};
use units::{Mass, SurfaceDensity, Temperature, Velocity};

use crate::error::{PredictError, Result, require_finite, require_non_negative, require_positive};

/// Global parameters of a smooth protoplanetary disk.
///
/// Profiles are power laws normalised at 1 AU:
///
/// - Σ(r) = Σ_ref × (r / 1 AU)^s_Σ
/// - T(r) = T_ref × (r / 1 AU)^s_T
///
/// The slopes are logarithmic derivatives, so a disk whose surface density
/// and temperature fall off outward has negative slopes.
///
/// Serialized keys are camelCase (`stellarMass`, `surfaceDensityRef`, ...);
/// quantities serialize in their base units (M☉, g/cm², K, cm/s).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskParameters {
    /// Central stellar mass
    pub stellar_mass: Mass,

    /// Gas surface density at 1 AU
    pub surface_density_ref: SurfaceDensity,
    /// d ln Σ / d ln r
    pub surface_density_slope: f64,

    /// Midplane temperature at 1 AU
    pub temperature_ref: Temperature,
    /// d ln T / d ln r
    pub temperature_slope: f64,

    /// Dimensionless turbulence strength α (zero for a laminar disk)
    pub turbulence_alpha: f64,

    /// Collision speed above which aggregates break
    pub fragmentation_velocity: Velocity,

    /// Σ_dust / Σ_gas
    pub dust_to_gas_ratio: f64,
}

impl DiskParameters {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stellar_mass: Mass,
        surface_density_ref: SurfaceDensity,
        surface_density_slope: f64,
        temperature_ref: Temperature,
        temperature_slope: f64,
        turbulence_alpha: f64,
        fragmentation_velocity: Velocity,
        dust_to_gas_ratio: f64,
    ) -> Self {
        Self {
            stellar_mass,
            surface_density_ref,
            surface_density_slope,
            temperature_ref,
            temperature_slope,
            turbulence_alpha,
            fragmentation_velocity,
            dust_to_gas_ratio,
        }
    }

    /// Minimum Mass Solar Nebula (Hayashi 1981) around a solar-mass star.
    ///
    /// - Σ = 1700 × (r/AU)^(-1.5) g/cm²
    /// - T = 280 × (r/AU)^(-0.5) K
    ///
    /// with α = 10⁻³, v_frag = 10 m/s and a solar dust-to-gas ratio of 0.01.
    pub fn mmsn() -> Self {
        Self::new(
            Mass::from_solar_masses(1.0),
            SurfaceDensity::from_grams_per_cm2(1700.0),
            -1.5,
            Temperature::from_kelvin(280.0),
            -0.5,
            1e-3,
            Velocity::from_meters_per_sec(10.0),
            0.01,
        )
    }

    /// A passively irradiated disk scaled to its star.
    ///
    /// T_ref = 280 K × (L/L☉)^(1/4), Σ_ref = 1700 g/cm² × (M/M☉), with a
    /// Σ ∝ r⁻¹ profile (shallower than the MMSN, closer to observed disks).
    pub fn for_star(stellar_mass: Mass, luminosity_solar: f64) -> Self {
        let mass_solar = stellar_mass.to_solar_masses();

        Self::new(
            stellar_mass,
            SurfaceDensity::from_grams_per_cm2(1700.0 * mass_solar),
            -1.0,
            Temperature::from_kelvin(280.0 * luminosity_solar.powf(0.25)),
            -0.5,
            1e-3,
            Velocity::from_meters_per_sec(10.0),
            0.01,
        )
    }

    pub fn with_turbulence_alpha(mut self, alpha: f64) -> Self {
        self.turbulence_alpha = alpha;
        self
    }

    pub fn with_fragmentation_velocity(mut self, v_frag: Velocity) -> Self {
        self.fragmentation_velocity = v_frag;
        self
    }

    pub fn with_dust_to_gas_ratio(mut self, ratio: f64) -> Self {
        self.dust_to_gas_ratio = ratio;
        self
    }

    /// Check every field against its invariant.
    ///
    /// α may be zero: a laminar disk has no fragmentation barrier.
    /// A dust-to-gas ratio of exactly zero is reported as degenerate rather
    /// than invalid: the disk is well-formed but has nothing to grow.
    pub fn validate(&self) -> Result<()> {
        require_positive("stellarMass", self.stellar_mass.to_solar_masses())?;
        require_positive(
            "surfaceDensityRef",
            self.surface_density_ref.to_grams_per_cm2(),
        )?;
        require_finite("surfaceDensitySlope", self.surface_density_slope)?;
        require_positive("temperatureRef", self.temperature_ref.to_kelvin())?;
        require_finite("temperatureSlope", self.temperature_slope)?;
        require_non_negative("turbulenceAlpha", self.turbulence_alpha)?;
        require_positive(
            "fragmentationVelocity",
            self.fragmentation_velocity.to_cm_per_sec(),
        )?;

        if self.dust_to_gas_ratio == 0.0 {
            return Err(PredictError::degenerate(
                "dustToGasRatio",
                self.dust_to_gas_ratio,
                "no solids, growth is undefined",
            ));
        }
        require_positive("dustToGasRatio", self.dust_to_gas_ratio)?;

        Ok(())
    }
}
