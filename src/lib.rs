pub mod aeon;
pub mod aeon_errors;
pub mod constants;
pub mod env_state;
pub mod ephemeris;
pub mod geocoding;
pub mod report;
pub mod time;
pub mod tolerance;
pub mod window_search;
