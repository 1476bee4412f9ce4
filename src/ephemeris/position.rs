use nalgebra::Vector3;

use crate::constants::AstronomicalUnit;

/// Earth's position with respect to the Sun at some instant, components in AU.
pub type HeliocentricPosition = Vector3<f64>;

/// Euclidean separation between two heliocentric positions, in AU.
///
/// Pure and total for all finite inputs; always non-negative.
pub fn separation_au(a: &HeliocentricPosition, b: &HeliocentricPosition) -> AstronomicalUnit {
    (a - b).norm()
}

#[cfg(test)]
mod position_tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_separation_of_identical_positions_is_zero() {
        let a = HeliocentricPosition::new(0.21956, -0.91083, -0.39484);
        assert_eq!(separation_au(&a, &a), 0.0);
    }

    #[test]
    fn test_separation_is_symmetric() {
        let a = HeliocentricPosition::new(-0.26454, 0.86890, 0.37668);
        let b = HeliocentricPosition::new(0.21956, -0.91083, -0.39484);
        assert_eq!(separation_au(&a, &b), separation_au(&b, &a));
    }

    #[test]
    fn test_separation_known_value() {
        let a = HeliocentricPosition::new(0.0, 0.0, 0.0);
        let b = HeliocentricPosition::new(3.0, 4.0, 0.0);
        assert_relative_eq!(separation_au(&a, &b), 5.0, epsilon = 1e-12);
    }
}
