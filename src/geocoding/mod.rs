pub mod nominatim;

use crate::aeon_errors::AeonError;
use crate::constants::Degree;
use crate::env_state::AeonEnv;
use crate::geocoding::nominatim::NominatimGeocoder;

/// Geographic footprint of a named place, in decimal degrees.
///
/// `north >= south` and `east >= west` are expected but not enforced; consumers
/// work with absolute spans so either ordering is tolerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBoundingBox {
    pub south: Degree,
    pub north: Degree,
    pub west: Degree,
    pub east: Degree,
}

impl From<[f64; 4]> for GeoBoundingBox {
    /// Build from the `[south, north, west, east]` ordering used by Nominatim.
    fn from(values: [f64; 4]) -> Self {
        GeoBoundingBox {
            south: values[0],
            north: values[1],
            west: values[2],
            east: values[3],
        }
    }
}

/// A place name resolved to coordinates and a bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub latitude: Degree,
    pub longitude: Degree,
    pub bounding_box: GeoBoundingBox,
}

/// Place-name resolver, selected at construction.
///
/// `Nominatim` queries the live OpenStreetMap service; `Fixed` answers every
/// query with a resolution supplied up front, for offline and reproducible runs.
#[derive(Debug, Clone)]
pub enum Geocoder {
    Nominatim(NominatimGeocoder),
    Fixed(ResolvedPlace),
}

impl Geocoder {
    pub fn nominatim() -> Self {
        Geocoder::Nominatim(NominatimGeocoder::default())
    }

    pub fn fixed(place: ResolvedPlace) -> Self {
        Geocoder::Fixed(place)
    }

    /// Resolve a place name to coordinates and a bounding box.
    ///
    /// Any failure here is fatal for the query: without a bounding box no
    /// tolerance can be derived.
    pub async fn resolve(
        &self,
        env_state: &AeonEnv,
        place_name: &str,
    ) -> Result<ResolvedPlace, AeonError> {
        match self {
            Geocoder::Nominatim(geocoder) => geocoder.resolve(env_state, place_name).await,
            Geocoder::Fixed(place) => Ok(place.clone()),
        }
    }
}

#[cfg(test)]
mod geocoding_tests {
    use super::*;

    #[test]
    fn test_bounding_box_from_nominatim_ordering() {
        let bbox = GeoBoundingBox::from([-29.998, -29.708, -51.085, -50.940]);
        assert_eq!(bbox.south, -29.998);
        assert_eq!(bbox.north, -29.708);
        assert_eq!(bbox.west, -51.085);
        assert_eq!(bbox.east, -50.940);
    }

    #[tokio::test]
    async fn test_fixed_geocoder_echoes_its_place() {
        let place = ResolvedPlace {
            latitude: -29.94,
            longitude: -50.99,
            bounding_box: GeoBoundingBox::from([-29.998, -29.708, -51.085, -50.940]),
        };
        let env_state = AeonEnv::new().unwrap();
        let resolved = Geocoder::fixed(place.clone())
            .resolve(&env_state, "anywhere")
            .await
            .unwrap();
        assert_eq!(resolved, place);
    }
}
