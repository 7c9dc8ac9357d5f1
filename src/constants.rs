//! # Constants and type definitions for moonbounce
//!
//! This module centralizes the **unit conversions**, **model constants**, and **common type
//! definitions** used throughout the `moonbounce` library.
//!
//! ## Overview
//!
//! - Angle unit conversions (degrees ↔ radians)
//! - The day-number epoch offset shared by every orbital-element polynomial
//! - Sampling cadence of the day-track driver
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the solar and lunar
//! ephemerides, the locator codec, and the day-track driver.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRA: f64 = 180.0 / std::f64::consts::PI;

// -------------------------------------------------------------------------------------------------
// Time-scale constants
// -------------------------------------------------------------------------------------------------

/// Offset subtracted from the 367-year Julian day formula so that day number 0
/// falls on 1999-12-31 00:00 UTC. Every orbital-element polynomial in the crate
/// is fitted against this epoch; changing it shifts every derived angle.
pub const EPOCH_OFFSET_DAYS: i64 = 730_530;

// -------------------------------------------------------------------------------------------------
// Day-track sampling cadence
// -------------------------------------------------------------------------------------------------

/// Number of samples in one UTC day track (00:00–24:00 inclusive).
pub const SAMPLES_PER_DAY: usize = 49;

/// Spacing between consecutive day-track samples, in hours.
pub const SAMPLE_STEP_HOURS: f64 = 0.5;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Time of day in hours
pub type Hour = f64;
/// Distance in Earth equatorial radii
pub type EarthRadii = f64;
/// Continuous fractional day count since 1999-12-31 00:00 UTC
pub type DayNumber = f64;
