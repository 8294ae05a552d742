//! Local disk state at one radius.

use log::trace;
use serde::{Deserialize, Serialize};
use units::{AngularVelocity, Density, Length, SurfaceDensity, Temperature, Velocity};

use crate::config::ModelConstants;
use crate::disk::constants::PI;
use crate::disk::{DiskModel, DiskParameters, PowerLawDisk};
use crate::error::{PredictError, Result};

/// Everything the pebble physics needs to know about the gas at radius r.
///
/// Built once per radius and read-only afterwards. Fields are public so that
/// synthetic states can be assembled directly, e.g. for regime studies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalDiskState {
    pub radius: Length,
    pub surface_density: SurfaceDensity,
    pub temperature: Temperature,
    pub sound_speed: Velocity,
    pub scale_height: Length,
    pub orbital_frequency: AngularVelocity,
    pub keplerian_velocity: Velocity,
    pub alpha: f64,
    pub dust_to_gas_ratio: f64,
    /// Pressure gradient parameter η (positive when P falls outward)
    pub eta: f64,
}

impl LocalDiskState {
    /// Sample any disk model at radius r.
    pub fn from_disk<D: DiskModel>(disk: &D, r: Length) -> Self {
        Self {
            radius: r,
            surface_density: disk.surface_density(r),
            temperature: disk.temperature(r),
            sound_speed: disk.sound_speed(r),
            scale_height: disk.scale_height(r),
            orbital_frequency: disk.orbital_frequency(r),
            keplerian_velocity: disk.keplerian_velocity(r),
            alpha: disk.alpha(r),
            dust_to_gas_ratio: disk.dust_to_gas_ratio(r),
            eta: disk.pressure_gradient_parameter(r),
        }
    }

    /// Σ_d = Z Σ_g
    pub fn dust_surface_density(&self) -> SurfaceDensity {
        self.surface_density * self.dust_to_gas_ratio
    }

    /// Aspect ratio h/r.
    pub fn aspect_ratio(&self) -> f64 {
        self.scale_height / self.radius
    }

    /// Stokes number of a grain of radius `size` in the midplane, Epstein drag.
    ///
    /// St = (π/2) ρ_m s / Σ_g
    pub fn epstein_stokes_number(&self, size: Length, material_density: Density) -> f64 {
        0.5 * PI * size.to_cm() * material_density.to_grams_per_cm3()
            / self.surface_density.to_grams_per_cm2()
    }

    /// Grain radius with Stokes number `stokes` (inverse of the above).
    pub fn epstein_size(&self, stokes: f64, material_density: Density) -> Length {
        let size_cm = 2.0 * stokes * self.surface_density.to_grams_per_cm2()
            / (PI * material_density.to_grams_per_cm3());
        Length::from_cm(size_cm)
    }

    /// Stokes number of the monomers growth starts from.
    pub fn monomer_stokes_number(&self, constants: &ModelConstants) -> f64 {
        self.epstein_stokes_number(constants.monomer_size(), constants.material_density())
    }
}

/// Local disk state of the power-law disk `params` at `radius`.
///
/// Fails with `InvalidInput` for a non-positive radius or an invalid
/// parameter, and with `DegenerateInput` for a dust-free disk.
pub fn compute_local_state(
    params: &DiskParameters,
    radius: Length,
    constants: &ModelConstants,
) -> Result<LocalDiskState> {
    check_radius(radius)?;
    params.validate()?;

    let disk = PowerLawDisk::new(params, constants);
    let state = LocalDiskState::from_disk(&disk, radius);

    trace!(
        "local state at {:.4} AU: Σ={:.4e} g/cm², c_s={:.4e} cm/s, η={:.4e}",
        radius.to_au(),
        state.surface_density.to_grams_per_cm2(),
        state.sound_speed.to_cm_per_sec(),
        state.eta
    );

    Ok(state)
}

pub(crate) fn check_radius(radius: Length) -> Result<()> {
    if radius.is_positive() {
        Ok(())
    } else {
        Err(PredictError::invalid(
            "radius",
            radius.to_au(),
            "must be positive and finite",
        ))
    }
}
