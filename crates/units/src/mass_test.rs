mod tests {
    use approx::assert_relative_eq;

    use crate::mass::{EARTH_MASS_G, Mass, SOLAR_MASS_G};

    #[test]
    fn stellar_mass_in_grams() {
        let star = Mass::from_solar_masses(1.0);
        assert_relative_eq!(star.to_grams(), SOLAR_MASS_G);
        assert_relative_eq!(Mass::from_grams(SOLAR_MASS_G).to_solar_masses(), 1.0);
    }

    #[test]
    fn earth_masses() {
        let core = Mass::from_earth_masses(10.0);
        assert_relative_eq!(core.to_grams(), 10.0 * EARTH_MASS_G, max_relative = 1e-12);
        assert_relative_eq!((core * 2.0).to_earth_masses(), 20.0, max_relative = 1e-12);
    }
}
