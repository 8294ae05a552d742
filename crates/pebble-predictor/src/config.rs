//! Model constants for the pebble predictor.
//!
//! These are the calibration knobs of the semi-analytic model. They are not
//! disk properties, so they live apart from [`DiskParameters`] and are passed
//! explicitly to every stage. The numeric defaults are the constants
//! calibrated against full coagulation simulations (Drążkowska et al. 2021).
//! Drift-induced fragmentation and the growth flux cap are opt-in and off by
//! default.
//!
//! Serialized field names carry their units, the way plotting front ends
//! expect plain numbers.
//!
//! [`DiskParameters`]: crate::disk::DiskParameters

use serde::{Deserialize, Serialize};
use units::{Density, Length, Time};

use crate::error::{PredictError, Result, require_positive};

/// Tunable constants of the predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConstants {
    /// Mean molecular weight of the gas, in proton masses.
    pub mean_molecular_weight: f64,

    /// Radius of the monomers that growth starts from (cm).
    pub monomer_size_cm: f64,

    /// Internal density of the grains (g/cm³).
    pub material_density_g_cm3: f64,

    /// Fraction of v_frag at which collisions start to fragment.
    /// Calibrated value: 0.37.
    pub fragmentation_efficiency: f64,

    /// How many times faster than drift growth has to be for particles to
    /// keep growing (Okuzumi et al. 2012). Calibrated value: 30.
    pub growth_drift_ratio: f64,

    /// Disk age at which growth is evaluated (years).
    pub disk_age_years: f64,

    /// Size-distribution exponent q (dn/ds ∝ s^(-q)) behind fragmentation
    /// and growth-timescale limits.
    pub fragmentation_exponent: f64,

    /// Size-distribution exponent q behind the drift limit.
    pub drift_exponent: f64,

    /// Number of Simpson intervals over ln St. Rounded up to an even number.
    pub quadrature_intervals: usize,

    /// Relative tolerance within which two limits count as equal.
    pub tie_tolerance: f64,

    /// Include drift-induced fragmentation in the fragmentation barrier.
    pub drift_fragmentation: bool,

    /// Cap the drift speed where growth is too slow to feed the flux.
    pub growth_flux_cap: bool,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            mean_molecular_weight: 2.3,
            monomer_size_cm: 1e-4,
            material_density_g_cm3: 1.6,
            fragmentation_efficiency: 0.37,
            growth_drift_ratio: 30.0,
            disk_age_years: 1.0e6,
            fragmentation_exponent: 3.5,
            drift_exponent: 2.5,
            quadrature_intervals: 64,
            tie_tolerance: 1e-9,
            drift_fragmentation: false,
            growth_flux_cap: false,
        }
    }
}

impl ModelConstants {
    pub fn monomer_size(&self) -> Length {
        Length::from_cm(self.monomer_size_cm)
    }

    pub fn material_density(&self) -> Density {
        Density::from_grams_per_cm3(self.material_density_g_cm3)
    }

    pub fn disk_age(&self) -> Time {
        Time::from_years(self.disk_age_years)
    }

    pub fn with_disk_age(mut self, age: Time) -> Self {
        self.disk_age_years = age.to_years();
        self
    }

    pub fn with_monomer(mut self, size: Length, material_density: Density) -> Self {
        self.monomer_size_cm = size.to_cm();
        self.material_density_g_cm3 = material_density.to_grams_per_cm3();
        self
    }

    pub fn with_drift_fragmentation(mut self, enabled: bool) -> Self {
        self.drift_fragmentation = enabled;
        self
    }

    pub fn with_growth_flux_cap(mut self, enabled: bool) -> Self {
        self.growth_flux_cap = enabled;
        self
    }

    /// Simpson needs an even number of intervals.
    pub(crate) fn simpson_intervals(&self) -> usize {
        let n = self.quadrature_intervals.max(2);
        n + n % 2
    }

    /// Check every constant against its range.
    pub fn validate(&self) -> Result<()> {
        require_positive("meanMolecularWeight", self.mean_molecular_weight)?;
        require_positive("monomerSizeCm", self.monomer_size_cm)?;
        require_positive("materialDensityGCm3", self.material_density_g_cm3)?;
        require_positive("fragmentationEfficiency", self.fragmentation_efficiency)?;
        require_positive("growthDriftRatio", self.growth_drift_ratio)?;
        require_positive("fragmentationExponent", self.fragmentation_exponent)?;
        require_positive("driftExponent", self.drift_exponent)?;

        if !(self.disk_age_years.is_finite() && self.disk_age_years >= 0.0) {
            return Err(PredictError::invalid(
                "diskAgeYears",
                self.disk_age_years,
                "must be non-negative and finite",
            ));
        }
        if !(self.tie_tolerance.is_finite() && self.tie_tolerance >= 0.0) {
            return Err(PredictError::invalid(
                "tieTolerance",
                self.tie_tolerance,
                "must be non-negative and finite",
            ));
        }
        if self.quadrature_intervals < 2 {
            return Err(PredictError::invalid(
                "quadratureIntervals",
                self.quadrature_intervals as f64,
                "need at least 2 intervals",
            ));
        }

        Ok(())
    }
}
