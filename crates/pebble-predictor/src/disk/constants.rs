/// Gravitational constant (cm³/(g·s²))
pub const G: f64 = 6.674e-8;

/// Boltzmann constant (erg/K)
pub const K_B: f64 = 1.381e-16;

/// Proton mass (g)
pub const M_PROTON: f64 = 1.673e-24;

/// Pi
pub const PI: f64 = std::f64::consts::PI;

/// Radius at which the power-law profiles are normalised (AU)
pub const REFERENCE_RADIUS_AU: f64 = 1.0;

/// α at which the growth timescale is calibrated
pub const GROWTH_ALPHA_REF: f64 = 1e-4;
