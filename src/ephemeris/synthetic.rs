use hifitime::Epoch;

use crate::ephemeris::position::HeliocentricPosition;
use crate::time::unix_millis;

/// Timescale (ms) of the in-plane components of the synthetic orbit model.
const XY_TIMESCALE_MS: f64 = 1.0e11;

/// Timescale (ms) of the out-of-plane component.
const Z_TIMESCALE_MS: f64 = 1.0e12;

/// Deterministic closed-form stand-in for the live ephemeris service.
///
/// Maps an instant to a point on a unit-ish sphere through slow trigonometric
/// functions of Unix time. The model has no astronomical meaning; it exists so
/// that searches can run offline and tests are reproducible.
#[derive(Debug, Clone, Default)]
pub struct SyntheticEphemeris;

impl SyntheticEphemeris {
    /// Position of the synthetic Earth at the given instant. Infallible.
    pub fn position_at(&self, epoch: Epoch) -> HeliocentricPosition {
        let millis = unix_millis(epoch);
        HeliocentricPosition::new(
            (millis / XY_TIMESCALE_MS).sin(),
            (millis / XY_TIMESCALE_MS).cos(),
            (millis / Z_TIMESCALE_MS).sin(),
        )
    }
}
