use serde::Serialize;

use crate::constants::Year;
use crate::window_search::{SearchCandidate, TemporalWindows};

/// Final report of a safe-temporal-windows query.
///
/// The serde field names are the external contract. A direction in which every
/// candidate failed serializes as `null` in its slot; the status stays `"OK"`
/// because a degraded search is still a successful query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafeTemporalWindowsReport {
    pub status: String,
    pub city: String,
    #[serde(rename = "requestedYear")]
    pub requested_year: Year,
    #[serde(rename = "safeTemporalWindows")]
    pub safe_temporal_windows: [Option<SearchCandidate>; 2],
}

impl SafeTemporalWindowsReport {
    /// Package the query echo with the `[bestPast, bestFuture]` pair.
    /// Structural assembly only; never fails.
    pub fn assemble(city: &str, requested_year: Year, windows: TemporalWindows) -> Self {
        SafeTemporalWindowsReport {
            status: "OK".to_string(),
            city: city.to_string(),
            requested_year,
            safe_temporal_windows: [windows.best_past, windows.best_future],
        }
    }
}
