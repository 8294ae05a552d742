use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// A surface mass density in g/cm², the customary unit for disk profiles.
///
/// Gas disks follow Σ(r) = Σ_ref (r / r_ref)^s; [`SurfaceDensity::power_law`]
/// evaluates that profile from a reference value.
///
/// ```rust
/// use units::SurfaceDensity;
///
/// let sigma_1au = SurfaceDensity::from_grams_per_cm2(1700.0);
/// let sigma_4au = sigma_1au.power_law(4.0, -1.5);
/// assert!((sigma_4au.to_grams_per_cm2() - 212.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SurfaceDensity(f64); // Base unit: g/cm²

impl SurfaceDensity {
    pub fn from_grams_per_cm2(value: f64) -> Self {
        Self(value)
    }

    /// 1 kg/m² = 0.1 g/cm²
    pub fn from_kg_per_m2(value: f64) -> Self {
        Self(value * 0.1)
    }

    pub fn to_grams_per_cm2(&self) -> f64 {
        self.0
    }

    pub fn to_kg_per_m2(&self) -> f64 {
        self.0 * 10.0
    }

    /// Scales this reference value to radius ratio `ratio` with logarithmic
    /// slope `slope`: Σ_ref × ratio^slope.
    pub fn power_law(&self, ratio: f64, slope: f64) -> Self {
        Self(self.0 * ratio.powf(slope))
    }
}

impl Mul<f64> for SurfaceDensity {
    type Output = SurfaceDensity;

    fn mul(self, rhs: f64) -> SurfaceDensity {
        SurfaceDensity(self.0 * rhs)
    }
}

/// Dust-to-gas style ratios
impl Div for SurfaceDensity {
    type Output = f64;

    fn div(self, rhs: SurfaceDensity) -> f64 {
        self.0 / rhs.0
    }
}
