use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// One astronomical unit in centimeters
pub const AU_TO_CM: f64 = 1.496e13;

/// Centimeters per micron
pub const MICRON_TO_CM: f64 = 1e-4;

/// A radial distance or particle size.
///
/// The base unit is the astronomical unit, which is how disk radii are
/// specified. Particle sizes are usually created with [`Length::from_cm`] or
/// [`Length::from_microns`].
///
/// ```rust
/// use units::Length;
///
/// let radius = Length::from_au(5.2);
/// let monomer = Length::from_microns(1.0);
///
/// assert!((monomer.to_cm() - 1e-4).abs() < 1e-18);
/// assert!(radius.to_cm() > 7.0e13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / AU_TO_CM)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self::from_cm(value * 1e5)
    }

    /// Creates a new `Length` from a value in microns.
    pub fn from_microns(value: f64) -> Self {
        Self::from_cm(value * MICRON_TO_CM)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_cm(&self) -> f64 {
        self.0 * AU_TO_CM
    }

    pub fn to_km(&self) -> f64 {
        self.to_cm() / 1e5
    }

    pub fn to_microns(&self) -> f64 {
        self.to_cm() / MICRON_TO_CM
    }

    /// True for a strictly positive, finite length.
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Ratio of two lengths, e.g. r / r_0 in a power-law profile
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}
