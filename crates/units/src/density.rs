use serde::{Deserialize, Serialize};

/// Volume density in g/cm³ (grain material density, midplane gas density).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }
}
