//! Trait abstraction for smooth gas disk models.
//!
//! A disk model only has to say what Σ, T, M_*, α and the dust-to-gas ratio
//! are; everything the pebble physics needs (Ω_K, c_s, h, η, ...) follows
//! from those via default methods.
//!
//! | Category | Methods |
//! |----------|---------|
//! | **Required** | `surface_density`, `temperature`, `stellar_mass`, `alpha`, `dust_to_gas_ratio`, `mean_molecular_weight` |
//! | **Override-able** | `pressure_gradient_log` (numerical default) |
//! | **Derived** | everything else |

use units::{AngularVelocity, Density, Length, Mass, SurfaceDensity, Temperature, Velocity};

use crate::disk::constants::{G, K_B, M_PROTON, PI};

/// A smooth, vertically isothermal gas disk.
pub trait DiskModel {
    // =========================================================================
    // Required methods - these define the disk
    // =========================================================================

    /// Gas surface density at radius r.
    fn surface_density(&self, r: Length) -> SurfaceDensity;

    /// Midplane temperature at radius r.
    fn temperature(&self, r: Length) -> Temperature;

    /// Central stellar mass.
    fn stellar_mass(&self) -> Mass;

    /// Turbulence strength α at radius r.
    fn alpha(&self, r: Length) -> f64;

    /// Σ_dust / Σ_gas at radius r.
    fn dust_to_gas_ratio(&self, r: Length) -> f64;

    /// Mean molecular weight μ in proton masses.
    fn mean_molecular_weight(&self) -> f64;

    // =========================================================================
    // Override-able methods - have sensible defaults
    // =========================================================================

    /// Logarithmic pressure gradient d ln P / d ln r.
    ///
    /// Default: central difference in log space with a 1% step.
    fn pressure_gradient_log(&self, r: Length) -> f64 {
        let delta = 0.01;
        let r_minus = r * (1.0 - delta);
        let r_plus = r * (1.0 + delta);

        let ln_p_diff = self.pressure(r_plus).ln() - self.pressure(r_minus).ln();
        let ln_r_diff = (1.0 + delta).ln() - (1.0 - delta).ln();

        ln_p_diff / ln_r_diff
    }

    // =========================================================================
    // Derived methods
    // =========================================================================

    /// Keplerian orbital frequency.
    /// Ω_K = √(G M_* / r³)
    fn orbital_frequency(&self, r: Length) -> AngularVelocity {
        let r_cm = r.to_cm();
        let omega = (G * self.stellar_mass().to_grams() / r_cm.powi(3)).sqrt();
        AngularVelocity::from_rad_per_sec(omega)
    }

    /// Keplerian orbital velocity.
    /// v_K = Ω_K r
    fn keplerian_velocity(&self, r: Length) -> Velocity {
        let omega = self.orbital_frequency(r).to_rad_per_sec();
        Velocity::from_cm_per_sec(omega * r.to_cm())
    }

    /// Isothermal sound speed.
    /// c_s = √(k_B T / (μ m_p))
    fn sound_speed(&self, r: Length) -> Velocity {
        let t = self.temperature(r).to_kelvin();
        let c_s = (K_B * t / (self.mean_molecular_weight() * M_PROTON)).sqrt();
        Velocity::from_cm_per_sec(c_s)
    }

    /// Pressure scale height.
    /// h = c_s / Ω_K
    fn scale_height(&self, r: Length) -> Length {
        let c_s = self.sound_speed(r).to_cm_per_sec();
        let omega = self.orbital_frequency(r).to_rad_per_sec();
        Length::from_cm(c_s / omega)
    }

    /// Aspect ratio h/r.
    fn aspect_ratio(&self, r: Length) -> f64 {
        self.scale_height(r) / r
    }

    /// Midplane gas density for a Gaussian vertical profile.
    /// ρ = Σ / (√(2π) h)
    fn midplane_density(&self, r: Length) -> Density {
        let sigma = self.surface_density(r).to_grams_per_cm2();
        let h = self.scale_height(r).to_cm();
        Density::from_grams_per_cm3(sigma / ((2.0 * PI).sqrt() * h))
    }

    /// Midplane pressure P = ρ c_s² (dyn/cm²).
    fn pressure(&self, r: Length) -> f64 {
        let rho = self.midplane_density(r).to_grams_per_cm3();
        let c_s = self.sound_speed(r).to_cm_per_sec();
        rho * c_s.powi(2)
    }

    /// Pressure gradient parameter.
    ///
    /// η = -(h/r)² × (1/2) × d ln P / d ln r
    ///
    /// Positive when pressure falls outward; the gas then orbits at
    /// v_K (1 - η) and solids drift inward.
    fn pressure_gradient_parameter(&self, r: Length) -> f64 {
        let h_over_r = self.aspect_ratio(r);
        -h_over_r.powi(2) * 0.5 * self.pressure_gradient_log(r)
    }

    /// Dust surface density Σ_d = Z Σ_g.
    fn dust_surface_density(&self, r: Length) -> SurfaceDensity {
        self.surface_density(r) * self.dust_to_gas_ratio(r)
    }
}
