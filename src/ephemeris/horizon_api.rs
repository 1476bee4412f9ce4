use hifitime::{Duration, Epoch};

use crate::aeon_errors::AeonError;
use crate::env_state::AeonEnv;
use crate::ephemeris::position::HeliocentricPosition;
use crate::ephemeris::vector_parser::parse_position_record;
use crate::time::horizons_timestamp;

/// JPL Horizons file API endpoint.
const HORIZONS_API_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons_file.api";

/// Start-of-ephemeris marker in a Horizons text response.
const START_MARKER: &str = "$$SOE";

/// End-of-ephemeris marker.
const END_MARKER: &str = "$$EOE";

/// Live Earth-position source backed by the JPL Horizons vector API.
///
/// Each query asks for a one-day window anchored at the requested instant with a
/// one-day step, so exactly one vector record is expected between the markers.
#[derive(Debug, Clone)]
pub struct HorizonVectorApi {
    base_url: String,
}

impl Default for HorizonVectorApi {
    fn default() -> Self {
        HorizonVectorApi {
            base_url: HORIZONS_API_URL.to_string(),
        }
    }
}

impl HorizonVectorApi {
    /// Build the Horizons batch-file input requesting Earth's heliocentric
    /// position vector (AU, ICRF) for a one-day window anchored at `epoch`.
    fn vector_request_input(epoch: Epoch) -> String {
        let start = horizons_timestamp(epoch);
        let stop = horizons_timestamp(epoch + Duration::from_days(1.0));
        format!(
            "
!$$SOF
COMMAND='399'
OBJ_DATA='NO'
MAKE_EPHEM='YES'
TABLE_TYPE='VECTORS'
CENTER='500@10'
START_TIME='{start}'
STOP_TIME='{stop}'
STEP_SIZE='1 d'
CSV_FORMAT=NO
REF_SYSTEM=ICRF
OUT_UNITS=AU-D
REF_PLANE=FRAME
VEC_TABLE=1
"
        )
    }

    /// Fetch Earth's heliocentric position at the given instant.
    ///
    /// Failure modes, all request-scoped (no retry):
    /// * transport failure or non-success status -> [`AeonError::EphemerisFetch`]
    /// * unreadable or empty body -> [`AeonError::InvalidEphemerisResponse`]
    /// * missing `$$SOE`/`$$EOE` markers -> [`AeonError::MissingEphemerisMarker`]
    /// * missing `X =`/`Y =`/`Z =` fields -> [`AeonError::MissingVectorField`]
    pub async fn position_at(
        &self,
        env_state: &AeonEnv,
        epoch: Epoch,
    ) -> Result<HeliocentricPosition, AeonError> {
        let input = Self::vector_request_input(epoch);
        let response = env_state
            .post_form(&self.base_url, &[("format", "text"), ("input", &input)])
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AeonError::EphemerisFetch(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AeonError::InvalidEphemerisResponse(e.to_string()))?;

        parse_first_vector_record(&body)
    }
}

/// Locate the marker-delimited ephemeris block in a raw Horizons response and
/// parse the first vector record after `$$SOE`.
pub(crate) fn parse_first_vector_record(body: &str) -> Result<HeliocentricPosition, AeonError> {
    if body.trim().is_empty() {
        return Err(AeonError::InvalidEphemerisResponse(
            "empty response body".to_string(),
        ));
    }

    let lines: Vec<&str> = body.lines().collect();

    let soe_index = lines
        .iter()
        .position(|line| line.contains(START_MARKER))
        .ok_or(AeonError::MissingEphemerisMarker(START_MARKER))?;

    let has_end_marker = lines[soe_index + 1..]
        .iter()
        .any(|line| line.contains(END_MARKER));
    if !has_end_marker {
        return Err(AeonError::MissingEphemerisMarker(END_MARKER));
    }

    parse_position_record(&lines, soe_index + 1)
}
