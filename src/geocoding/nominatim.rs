use serde::Deserialize;

use crate::aeon_errors::AeonError;
use crate::env_state::AeonEnv;
use crate::geocoding::{GeoBoundingBox, ResolvedPlace};

/// OpenStreetMap Nominatim search endpoint.
const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Live place-name resolver backed by Nominatim.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    base_url: String,
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        NominatimGeocoder {
            base_url: NOMINATIM_SEARCH_URL.to_string(),
        }
    }
}

/// One match of a Nominatim search. All numeric fields arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    /// Ordered `[south, north, west, east]`.
    boundingbox: [String; 4],
}

impl NominatimGeocoder {
    /// Resolve a place name through the Nominatim search API (single best match).
    pub async fn resolve(
        &self,
        env_state: &AeonEnv,
        place_name: &str,
    ) -> Result<ResolvedPlace, AeonError> {
        let response = env_state
            .get_with_query(
                &self.base_url,
                &[("q", place_name), ("format", "json"), ("limit", "1")],
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AeonError::GeocodingFetch(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AeonError::InvalidGeocodingResponse(e.to_string()))?;

        parse_search_response(&body, place_name)
    }
}

/// Decode a Nominatim search body and convert its best match to a [`ResolvedPlace`].
pub(crate) fn parse_search_response(
    body: &str,
    place_name: &str,
) -> Result<ResolvedPlace, AeonError> {
    let matches: Vec<NominatimPlace> = serde_json::from_str(body)
        .map_err(|e| AeonError::InvalidGeocodingResponse(e.to_string()))?;

    let place = matches
        .into_iter()
        .next()
        .ok_or_else(|| AeonError::PlaceNotFound(place_name.to_string()))?;

    let latitude = parse_coordinate(&place.lat)?;
    let longitude = parse_coordinate(&place.lon)?;

    let mut edges = [0.0; 4];
    for (edge, raw) in edges.iter_mut().zip(place.boundingbox.iter()) {
        *edge = parse_coordinate(raw)?;
    }

    Ok(ResolvedPlace {
        latitude,
        longitude,
        bounding_box: GeoBoundingBox::from(edges),
    })
}

fn parse_coordinate(raw: &str) -> Result<f64, AeonError> {
    raw.parse::<f64>()
        .map_err(|_| AeonError::InvalidGeocodingResponse(format!("bad coordinate: {raw}")))
}

#[cfg(test)]
mod nominatim_tests {
    use approx::assert_relative_eq;

    use super::*;

    const FAKE_SEARCH_RESPONSE: &str = r#"[
        {
            "place_id": 235776,
            "licence": "Data (c) OpenStreetMap contributors, ODbL 1.0",
            "lat": "-29.9421932",
            "lon": "-50.9929578",
            "display_name": "Gravataí, Rio Grande do Sul, Brazil",
            "boundingbox": ["-29.9983201", "-29.7087238", "-51.0856278", "-50.9408296"]
        }
    ]"#;

    #[test]
    fn test_parse_search_response() {
        let place = parse_search_response(FAKE_SEARCH_RESPONSE, "Gravataí, RS, Brazil").unwrap();
        assert_relative_eq!(place.latitude, -29.9421932, epsilon = 1e-12);
        assert_relative_eq!(place.longitude, -50.9929578, epsilon = 1e-12);
        assert_relative_eq!(place.bounding_box.south, -29.9983201, epsilon = 1e-12);
        assert_relative_eq!(place.bounding_box.north, -29.7087238, epsilon = 1e-12);
        assert_relative_eq!(place.bounding_box.west, -51.0856278, epsilon = 1e-12);
        assert_relative_eq!(place.bounding_box.east, -50.9408296, epsilon = 1e-12);
    }

    #[test]
    fn test_no_match_is_place_not_found() {
        let result = parse_search_response("[]", "Nowhereville");
        assert_eq!(
            result,
            Err(AeonError::PlaceNotFound("Nowhereville".to_string()))
        );
    }

    #[test]
    fn test_malformed_body_is_invalid_response() {
        let result = parse_search_response("<html>rate limited</html>", "Gravataí");
        assert!(matches!(
            result,
            Err(AeonError::InvalidGeocodingResponse(_))
        ));
    }

    #[test]
    fn test_bad_coordinate_is_invalid_response() {
        let body = r#"[{"lat": "abc", "lon": "0.0", "boundingbox": ["0", "0", "0", "0"]}]"#;
        let result = parse_search_response(body, "Gravataí");
        assert_eq!(
            result,
            Err(AeonError::InvalidGeocodingResponse(
                "bad coordinate: abc".to_string()
            ))
        );
    }
}
