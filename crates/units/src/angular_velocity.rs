use serde::{Deserialize, Serialize};

/// Angular velocity in rad/s; used for the Keplerian frequency Ω_K.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngularVelocity(f64);

impl AngularVelocity {
    pub fn from_rad_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn to_rad_per_sec(&self) -> f64 {
        self.0
    }

    /// 2π / Ω in seconds.
    pub fn period_seconds(&self) -> f64 {
        std::f64::consts::TAU / self.0
    }
}
