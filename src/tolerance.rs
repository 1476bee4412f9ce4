use crate::constants::{AstronomicalUnit, Kilometer, KM_PER_AU, KM_PER_DEGREE};
use crate::geocoding::GeoBoundingBox;

/// Converts a geographic bounding box into a spatial tolerance in AU.
///
/// The characteristic size of the region is the larger of its latitude and
/// longitude spans, halved to act as a radius. A country-sized box therefore
/// yields a looser tolerance than a small town. The scale factors are owned
/// here so they can be tuned and tested independently.
#[derive(Debug, Clone)]
pub struct ToleranceEstimator {
    km_per_degree: f64,
    km_per_au: f64,
}

impl Default for ToleranceEstimator {
    fn default() -> Self {
        ToleranceEstimator {
            km_per_degree: KM_PER_DEGREE,
            km_per_au: KM_PER_AU,
        }
    }
}

impl ToleranceEstimator {
    /// Half the larger side of the bounding box, in kilometers.
    ///
    /// Absolute spans make the result independent of edge ordering. A
    /// degenerate box yields 0 km, which downstream pushes every candidate
    /// score toward infinity.
    pub fn envelope_km(&self, bounding_box: &GeoBoundingBox) -> Kilometer {
        let lat_km = (bounding_box.north - bounding_box.south).abs() * self.km_per_degree;
        let lon_km = (bounding_box.east - bounding_box.west).abs() * self.km_per_degree;
        lat_km.max(lon_km) / 2.0
    }

    /// Spatial tolerance in AU derived from the bounding box.
    pub fn tolerance_au(&self, bounding_box: &GeoBoundingBox) -> AstronomicalUnit {
        self.envelope_km(bounding_box) / self.km_per_au
    }
}

#[cfg(test)]
mod tolerance_tests {
    use approx::assert_relative_eq;

    use super::*;

    fn bbox(south: f64, north: f64, west: f64, east: f64) -> GeoBoundingBox {
        GeoBoundingBox {
            south,
            north,
            west,
            east,
        }
    }

    #[test]
    fn test_tolerance_small_town_box() {
        // 0.1 degree dominant span: 11.1 km across, 5.55 km radius.
        let tolerance = ToleranceEstimator::default().tolerance_au(&bbox(-20.0, -19.9, -50.2, -50.1));
        assert_relative_eq!(tolerance, 3.7e-8, max_relative = 1e-12);
    }

    #[test]
    fn test_tolerance_village_box() {
        // A span of 0.01 degree gives a very tight tolerance: simulated drifts
        // dominate scores heavily over the offset penalty at this scale.
        let tolerance =
            ToleranceEstimator::default().tolerance_au(&bbox(-20.0, -19.99, -50.2, -50.19));
        assert_relative_eq!(tolerance, 3.7e-9, max_relative = 1e-12);
    }

    #[test]
    fn test_tolerance_is_non_negative_and_symmetric() {
        let estimator = ToleranceEstimator::default();
        let ordered = bbox(-29.998, -29.708, -51.085, -50.940);
        let lat_swapped = bbox(-29.708, -29.998, -51.085, -50.940);
        let lon_swapped = bbox(-29.998, -29.708, -50.940, -51.085);

        let tolerance = estimator.tolerance_au(&ordered);
        assert!(tolerance >= 0.0);
        assert_eq!(tolerance, estimator.tolerance_au(&lat_swapped));
        assert_eq!(tolerance, estimator.tolerance_au(&lon_swapped));
    }

    #[test]
    fn test_larger_region_means_looser_tolerance() {
        let estimator = ToleranceEstimator::default();
        let town = estimator.tolerance_au(&bbox(-30.0, -29.9, -51.1, -51.0));
        let country = estimator.tolerance_au(&bbox(-33.0, 5.0, -74.0, -34.0));
        assert!(country > town);
    }

    #[test]
    fn test_degenerate_box_collapses_to_zero() {
        let tolerance = ToleranceEstimator::default().tolerance_au(&bbox(7.5, 7.5, 7.5, 7.5));
        assert_eq!(tolerance, 0.0);
    }

    #[test]
    fn test_longitude_span_can_dominate() {
        let estimator = ToleranceEstimator::default();
        let wide = bbox(10.0, 10.1, 20.0, 21.0);
        assert_relative_eq!(estimator.envelope_km(&wide), 55.5, max_relative = 1e-12);
    }
}
