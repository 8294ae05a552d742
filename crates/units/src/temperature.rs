use serde::{Deserialize, Serialize};

/// An absolute temperature in Kelvin.
///
/// ```rust
/// use units::Temperature;
///
/// let t_1au = Temperature::from_kelvin(280.0);
/// let t_100au = t_1au.power_law(100.0, -0.5);
/// assert!((t_100au.to_kelvin() - 28.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// K = °C + 273.15
    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// Scales this reference temperature to radius ratio `ratio` with
    /// logarithmic slope `slope`: T_ref × ratio^slope.
    pub fn power_law(&self, ratio: f64, slope: f64) -> Self {
        Self(self.0 * ratio.powf(slope))
    }
}
