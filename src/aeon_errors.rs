use thiserror::Error;

#[derive(Error, Debug)]
pub enum AeonError {
    #[error("Invalid ephemeris source descriptor: {0}")]
    InvalidEphemerisSource(String),

    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("Geocoding service replied with HTTP status {0}")]
    GeocodingFetch(u16),

    #[error("Malformed geocoding response: {0}")]
    InvalidGeocodingResponse(String),

    #[error("Ephemeris service replied with HTTP status {0}")]
    EphemerisFetch(u16),

    #[error("Malformed ephemeris response: {0}")]
    InvalidEphemerisResponse(String),

    #[error("Ephemeris marker {0} not found in response")]
    MissingEphemerisMarker(&'static str),

    #[error("Vector field {0} not found in ephemeris record")]
    MissingVectorField(&'static str),

    #[error("System clock unavailable: {0}")]
    SystemClock(String),
}

impl PartialEq for AeonError {
    fn eq(&self, other: &Self) -> bool {
        use AeonError::*;
        match (self, other) {
            (InvalidEphemerisSource(a), InvalidEphemerisSource(b)) => a == b,

            // Transport errors are not comparable: equal if same variant
            (ReqwestError(_), ReqwestError(_)) => true,

            (PlaceNotFound(a), PlaceNotFound(b)) => a == b,
            (GeocodingFetch(a), GeocodingFetch(b)) => a == b,
            (InvalidGeocodingResponse(a), InvalidGeocodingResponse(b)) => a == b,
            (EphemerisFetch(a), EphemerisFetch(b)) => a == b,
            (InvalidEphemerisResponse(a), InvalidEphemerisResponse(b)) => a == b,
            (MissingEphemerisMarker(a), MissingEphemerisMarker(b)) => a == b,
            (MissingVectorField(a), MissingVectorField(b)) => a == b,
            (SystemClock(a), SystemClock(b)) => a == b,

            _ => false,
        }
    }
}
