//! # Aeon: environment, providers, and the query entry point
//!
//! This module defines the [`Aeon`](crate::aeon::Aeon) struct, the central façade that wires together:
//!
//! 1. **Environment state** ([`AeonEnv`](crate::env_state::AeonEnv)) — the shared HTTP session.
//! 2. **Place-name resolution** — a [`Geocoder`](crate::geocoding::Geocoder) turning a city name
//!    into a bounding box.
//! 3. **Earth positions** — an [`Ephemeris`](crate::ephemeris::Ephemeris) selected from a source
//!    descriptor (e.g. `"horizon"` or `"synthetic"`).
//! 4. **The search** — [`ToleranceEstimator`](crate::tolerance::ToleranceEstimator) and
//!    [`WindowSearch`](crate::window_search::WindowSearch) with their named parameters.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use aeon::aeon::Aeon;
//!
//! # async fn run() -> Result<(), aeon::aeon_errors::AeonError> {
//! let aeon = Aeon::new("horizon")?;
//! let report = aeon.find_safe_temporal_windows("Gravataí, RS, Brazil", 1910).await?;
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure policy
//!
//! Geocoding and the reference ("now") position fetch are fatal: without them
//! there is no tolerance and no reference point to score against. Every
//! per-offset candidate fetch inside the search degrades to a skip instead.

use hifitime::Epoch;

use crate::aeon_errors::AeonError;
use crate::constants::Year;
use crate::env_state::AeonEnv;
use crate::ephemeris::{Ephemeris, EphemerisSource};
use crate::geocoding::Geocoder;
use crate::report::SafeTemporalWindowsReport;
use crate::tolerance::ToleranceEstimator;
use crate::window_search::WindowSearch;

#[derive(Debug, Clone)]
pub struct Aeon {
    env_state: AeonEnv,
    geocoder: Geocoder,
    ephemeris: Ephemeris,
    tolerance_estimator: ToleranceEstimator,
    window_search: WindowSearch,
    reference_instant: Option<Epoch>,
}

impl Aeon {
    /// Construct a new [`Aeon`] context.
    ///
    /// Arguments
    /// -----------------
    /// * `ephemeris_source`: source descriptor for Earth positions,
    ///   `"horizon"` (live JPL Horizons queries) or `"synthetic"`
    ///   (deterministic offline model).
    ///
    /// Return
    /// ----------
    /// * A new [`Aeon`] instance with the Nominatim geocoder and default
    ///   search parameters, or an [`AeonError`] if the descriptor is unknown
    ///   or the HTTP client cannot be built.
    pub fn new(ephemeris_source: &str) -> Result<Self, AeonError> {
        let source = EphemerisSource::try_from(ephemeris_source)?;

        Ok(Aeon {
            env_state: AeonEnv::new()?,
            geocoder: Geocoder::nominatim(),
            ephemeris: Ephemeris::from_source(source),
            tolerance_estimator: ToleranceEstimator::default(),
            window_search: WindowSearch::default(),
            reference_instant: None,
        })
    }

    /// Replace the place-name resolver (e.g. with [`Geocoder::fixed`] for
    /// offline runs).
    pub fn with_geocoder(mut self, geocoder: Geocoder) -> Self {
        self.geocoder = geocoder;
        self
    }

    /// Pin the reference instant instead of reading the system clock, making
    /// repeated queries reproducible.
    pub fn with_reference_instant(mut self, instant: Epoch) -> Self {
        self.reference_instant = Some(instant);
        self
    }

    fn reference_instant(&self) -> Result<Epoch, AeonError> {
        match self.reference_instant {
            Some(instant) => Ok(instant),
            None => Epoch::now().map_err(|e| AeonError::SystemClock(e.to_string())),
        }
    }

    /// Find the best past and future years whose Earth position approximates
    /// the reference position within the place-derived tolerance.
    ///
    /// Arguments
    /// -----------------
    /// * `city_name`: place name handed to the geocoder, echoed in the report
    /// * `target_year`: calendar year the search is centered on
    ///
    /// Return
    /// ----------
    /// * A [`SafeTemporalWindowsReport`] with the `[bestPast, bestFuture]`
    ///   pair (either slot may be empty if that direction's every candidate
    ///   failed), or a fatal [`AeonError`] from geocoding or the reference
    ///   position fetch.
    pub async fn find_safe_temporal_windows(
        &self,
        city_name: &str,
        target_year: Year,
    ) -> Result<SafeTemporalWindowsReport, AeonError> {
        let place = self.geocoder.resolve(&self.env_state, city_name).await?;
        let tolerance_au = self.tolerance_estimator.tolerance_au(&place.bounding_box);
        log::info!(
            "resolved {city_name} to ({:.4}, {:.4}), tolerance {tolerance_au:.3e} AU",
            place.latitude,
            place.longitude
        );

        let now = self.reference_instant()?;
        let now_position = self.ephemeris.position_at(&self.env_state, now).await?;
        log::debug!("reference position at {now}: {now_position:?}");

        let windows = self
            .window_search
            .run(
                &self.ephemeris,
                &self.env_state,
                &now_position,
                tolerance_au,
                target_year,
            )
            .await;

        Ok(SafeTemporalWindowsReport::assemble(
            city_name,
            target_year,
            windows,
        ))
    }
}
