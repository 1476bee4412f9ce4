use serde::Serialize;

use crate::aeon_errors::AeonError;
use crate::constants::{AstronomicalUnit, Year, OFFSET_PENALTY_PER_YEAR, SEARCH_RANGE};
use crate::env_state::AeonEnv;
use crate::ephemeris::{separation_au, Ephemeris, HeliocentricPosition};
use crate::time::{anchored_date_string, anchored_epoch};

/// Direction of a candidate year relative to the target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Past,
    Future,
}

impl SearchDirection {
    /// Signed year displacement for a given offset: negative toward the past.
    fn signed_offset(&self, offset: i32) -> i32 {
        match self {
            SearchDirection::Past => -offset,
            SearchDirection::Future => offset,
        }
    }
}

/// A scored candidate year. Only the minimum-score candidate per direction
/// survives the search; the serde names are part of the external report contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCandidate {
    pub date: String,
    pub year: Year,
    #[serde(rename = "temporalErrorYears")]
    pub temporal_error_years: i32,
    #[serde(rename = "spatialDriftAU")]
    pub spatial_drift_au: AstronomicalUnit,
    pub score: f64,
}

/// Outcome of one offset evaluation. A skip carries the failed year and the
/// reason, making the search's fault tolerance explicit instead of a silent
/// catch-and-ignore.
#[derive(Debug)]
pub enum CandidateOutcome {
    Scored(SearchCandidate),
    Skipped { year: Year, reason: AeonError },
}

/// The two winners of a search, either of which may be absent if every
/// evaluation in that direction failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemporalWindows {
    pub best_past: Option<SearchCandidate>,
    pub best_future: Option<SearchCandidate>,
}

/// Bidirectional year-offset search around a target year.
///
/// For each offset the candidate date is the seasonal anchor of the candidate
/// year; its cost is the spatial drift from the reference position scaled by
/// the tolerance, plus a linear penalty per year of temporal displacement.
#[derive(Debug, Clone)]
pub struct WindowSearch {
    search_range: i32,
    offset_penalty_per_year: f64,
}

impl Default for WindowSearch {
    fn default() -> Self {
        WindowSearch {
            search_range: SEARCH_RANGE,
            offset_penalty_per_year: OFFSET_PENALTY_PER_YEAR,
        }
    }
}

impl WindowSearch {
    /// Composite cost of a candidate: dimensionless drift ratio plus the
    /// temporal penalty. Kept as given in the source behavior, arbitrary
    /// weighting included.
    fn score(&self, drift_au: AstronomicalUnit, tolerance_au: AstronomicalUnit, offset: i32) -> f64 {
        drift_au / tolerance_au + offset as f64 * self.offset_penalty_per_year
    }

    /// Evaluate one candidate year. Never panics: any provider failure is
    /// returned as a typed skip for the caller to handle.
    async fn evaluate(
        &self,
        ephemeris: &Ephemeris,
        env_state: &AeonEnv,
        now_position: &HeliocentricPosition,
        tolerance_au: AstronomicalUnit,
        target_year: Year,
        offset: i32,
        direction: SearchDirection,
    ) -> CandidateOutcome {
        let temporal_error_years = direction.signed_offset(offset);
        let year = target_year + temporal_error_years;
        let epoch = anchored_epoch(year);

        match ephemeris.position_at(env_state, epoch).await {
            Ok(position) => {
                let spatial_drift_au = separation_au(now_position, &position);
                CandidateOutcome::Scored(SearchCandidate {
                    date: anchored_date_string(year),
                    year,
                    temporal_error_years,
                    spatial_drift_au,
                    score: self.score(spatial_drift_au, tolerance_au, offset),
                })
            }
            Err(reason) => CandidateOutcome::Skipped { year, reason },
        }
    }

    /// Scan offsets 1..=range in both directions and retain the best-scoring
    /// candidate per direction.
    ///
    /// Replacement requires a strictly smaller score, so the first candidate
    /// seen wins ties. A failed candidate is logged and skipped; it never
    /// aborts the search. Exactly `2 * range` evaluations are performed.
    pub async fn run(
        &self,
        ephemeris: &Ephemeris,
        env_state: &AeonEnv,
        now_position: &HeliocentricPosition,
        tolerance_au: AstronomicalUnit,
        target_year: Year,
    ) -> TemporalWindows {
        let mut windows = TemporalWindows::default();

        for offset in 1..=self.search_range {
            for direction in [SearchDirection::Past, SearchDirection::Future] {
                let outcome = self
                    .evaluate(
                        ephemeris,
                        env_state,
                        now_position,
                        tolerance_au,
                        target_year,
                        offset,
                        direction,
                    )
                    .await;

                let slot = match direction {
                    SearchDirection::Past => &mut windows.best_past,
                    SearchDirection::Future => &mut windows.best_future,
                };

                match outcome {
                    CandidateOutcome::Scored(candidate) => {
                        log::debug!(
                            "candidate {} drift {:.6e} AU score {:.6}",
                            candidate.year,
                            candidate.spatial_drift_au,
                            candidate.score
                        );
                        retain_if_better(slot, candidate);
                    }
                    CandidateOutcome::Skipped { year, reason } => {
                        log::warn!("skipping candidate year {year}: {reason}");
                    }
                }
            }
        }

        windows
    }
}

/// Keep the incumbent unless the challenger scores strictly less.
fn retain_if_better(slot: &mut Option<SearchCandidate>, candidate: SearchCandidate) {
    let better = match slot {
        Some(best) => candidate.score < best.score,
        None => true,
    };
    if better {
        *slot = Some(candidate);
    }
}
