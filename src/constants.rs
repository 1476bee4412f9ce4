//! # Constants and type definitions for Aeon
//!
//! This module centralizes the **scale factors**, **search parameters**, and **common type
//! definitions** used throughout the `Aeon` library.
//!
//! ## Overview
//!
//! - Geographic and astronomical conversion factors
//! - Fixed parameters of the temporal-window search
//! - Core type aliases used across the crate
//!
//! These definitions are used by the tolerance estimator, the ephemeris providers
//! and the window search.

// -------------------------------------------------------------------------------------------------
// Conversion factors
// -------------------------------------------------------------------------------------------------

/// Kilometers spanned by one degree of latitude or longitude (flat-Earth approximation)
pub const KM_PER_DEGREE: f64 = 111.0;

/// Astronomical Unit in kilometers (rounded; the search works with ratios, not absolute precision)
pub const KM_PER_AU: f64 = 150_000_000.0;

// -------------------------------------------------------------------------------------------------
// Search parameters
// -------------------------------------------------------------------------------------------------

/// Half-width of the year-offset search around the target year
pub const SEARCH_RANGE: i32 = 20;

/// Score penalty applied per year of temporal displacement from the target year
pub const OFFSET_PENALTY_PER_YEAR: f64 = 0.1;

/// Month of the seasonal anchor used for every candidate date
pub const ANCHOR_MONTH: u8 = 6;

/// Day of the seasonal anchor
pub const ANCHOR_DAY: u8 = 15;

/// Hour (UTC) of the seasonal anchor
pub const ANCHOR_HOUR: u8 = 12;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Calendar year
pub type Year = i32;
