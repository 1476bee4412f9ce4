pub mod horizon_api;
pub mod position;
pub mod synthetic;
pub mod vector_parser;

use hifitime::Epoch;

use crate::aeon_errors::AeonError;
use crate::env_state::AeonEnv;
use crate::ephemeris::horizon_api::HorizonVectorApi;
use crate::ephemeris::synthetic::SyntheticEphemeris;

pub use crate::ephemeris::position::{separation_au, HeliocentricPosition};

/// Descriptor of the Earth-position source, parsed from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EphemerisSource {
    /// Live vector queries against the JPL Horizons API.
    HorizonVectors,
    /// Deterministic closed-form model, no network access.
    Synthetic,
}

impl TryFrom<&str> for EphemerisSource {
    type Error = AeonError;

    fn try_from(descriptor: &str) -> Result<Self, Self::Error> {
        match descriptor {
            "horizon" | "horizons" => Ok(EphemerisSource::HorizonVectors),
            "synthetic" => Ok(EphemerisSource::Synthetic),
            other => Err(AeonError::InvalidEphemerisSource(other.to_string())),
        }
    }
}

/// Earth-position provider, dispatching to the variant selected at construction.
///
/// The search algorithm only ever calls [`Ephemeris::position_at`]; which
/// implementation answers is decided once, from configuration.
#[derive(Debug, Clone)]
pub enum Ephemeris {
    HorizonApi(HorizonVectorApi),
    Synthetic(SyntheticEphemeris),
    #[cfg(test)]
    Scripted(scripted::ScriptedEphemeris),
}

impl Ephemeris {
    pub fn from_source(source: EphemerisSource) -> Self {
        match source {
            EphemerisSource::HorizonVectors => Ephemeris::HorizonApi(HorizonVectorApi::default()),
            EphemerisSource::Synthetic => Ephemeris::Synthetic(SyntheticEphemeris),
        }
    }

    /// Earth's heliocentric position at the given instant, in AU.
    pub async fn position_at(
        &self,
        env_state: &AeonEnv,
        epoch: Epoch,
    ) -> Result<HeliocentricPosition, AeonError> {
        match self {
            Ephemeris::HorizonApi(api) => api.position_at(env_state, epoch).await,
            Ephemeris::Synthetic(model) => Ok(model.position_at(epoch)),
            #[cfg(test)]
            Ephemeris::Scripted(script) => script.position_at(epoch),
        }
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::HashMap;

    use hifitime::Epoch;

    use crate::aeon_errors::AeonError;
    use crate::constants::Year;
    use crate::ephemeris::position::HeliocentricPosition;

    /// Table-driven provider for unit tests: answers by candidate year,
    /// failing for any year without an entry.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct ScriptedEphemeris {
        pub positions: HashMap<Year, HeliocentricPosition>,
    }

    impl ScriptedEphemeris {
        pub(crate) fn position_at(&self, epoch: Epoch) -> Result<HeliocentricPosition, AeonError> {
            let (year, ..) = epoch.to_gregorian_utc();
            self.positions
                .get(&year)
                .copied()
                .ok_or(AeonError::EphemerisFetch(503))
        }
    }
}
