use hifitime::Epoch;

use crate::constants::{Year, ANCHOR_DAY, ANCHOR_HOUR, ANCHOR_MONTH};

/// Epoch of the seasonal anchor (June 15, 12:00:00 UTC) for a candidate year.
///
/// Every candidate date of the window search is pinned to the same day of year
/// so that consecutive years are compared at the same orbital phase.
///
/// Argument
/// --------
/// * `year`: the candidate calendar year
///
/// Return
/// ------
/// * the anchored instant as an [`Epoch`]
pub fn anchored_epoch(year: Year) -> Epoch {
    Epoch::from_gregorian_utc(year, ANCHOR_MONTH, ANCHOR_DAY, ANCHOR_HOUR, 0, 0, 0)
}

/// ISO-8601 string of the seasonal anchor for a candidate year, e.g. `1906-06-15T12:00:00Z`.
pub fn anchored_date_string(year: Year) -> String {
    format!("{year:04}-{ANCHOR_MONTH:02}-{ANCHOR_DAY:02}T{ANCHOR_HOUR:02}:00:00Z")
}

/// Milliseconds since the Unix epoch for a given instant.
///
/// Negative for instants before 1970. Used by the synthetic position model.
pub fn unix_millis(epoch: Epoch) -> f64 {
    epoch.to_unix_seconds() * 1_000.0
}

/// Timestamp in the `YYYY-MM-DD HH:MM:SS` form accepted by the JPL Horizons
/// `START_TIME`/`STOP_TIME` parameters.
pub fn horizons_timestamp(epoch: Epoch) -> String {
    let (year, month, day, hour, minute, second, _) = epoch.to_gregorian_utc();
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}
