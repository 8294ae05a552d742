mod tests {
    use approx::assert_relative_eq;

    use crate::length::{AU_TO_CM, Length};

    #[test]
    fn au_and_cm_round_trip() {
        let r = Length::from_au(2.5);
        assert_relative_eq!(r.to_cm(), 2.5 * AU_TO_CM);
        assert_relative_eq!(Length::from_cm(r.to_cm()).to_au(), 2.5);
    }

    #[test]
    fn particle_sizes_in_microns() {
        let grain = Length::from_microns(1.0);
        assert_relative_eq!(grain.to_cm(), 1e-4, max_relative = 1e-12);
        assert_relative_eq!(grain.to_microns(), 1.0, max_relative = 1e-12);

        let pebble = Length::from_cm(0.3);
        assert_relative_eq!(pebble.to_microns(), 3000.0, max_relative = 1e-12);
    }

    #[test]
    fn ratio_is_dimensionless() {
        let r = Length::from_au(10.0);
        let r_0 = Length::from_au(1.0);
        assert_relative_eq!(r / r_0, 10.0);
        assert_relative_eq!((r * 2.0 / 4.0).to_au(), 5.0);
    }

    #[test]
    fn positivity_rejects_zero_and_nan() {
        assert!(Length::from_au(0.1).is_positive());
        assert!(!Length::from_au(0.0).is_positive());
        assert!(!Length::from_au(-1.0).is_positive());
        assert!(!Length::from_au(f64::NAN).is_positive());
        assert!(!Length::from_au(f64::INFINITY).is_positive());
    }
}
