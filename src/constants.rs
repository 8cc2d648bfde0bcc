//! # Constants and type definitions for orbitstate
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **unit type
//! aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Reference epoch and calendar constants (J2000, Julian century)
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians, AU ↔ km)
//! - Default gravitational parameter of the central body (the Sun)
//! - Type aliases documenting the unit carried by a plain `f64`

use nalgebra::{Matrix3, Vector3};

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Astronomical Unit in kilometers
pub const AU: f64 = 1.495_978_71e8;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Offset added by the Julian Day Number formula (Gregorian calendar, 0h UT)
pub const JDN_OFFSET: f64 = 1_721_013.5;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Standard gravitational parameter of the Sun in km³/s²
pub const MU_SUN: f64 = 1.327_124_400_18e11;

/// Standard gravitational parameter of the Earth in km³/s²
pub const MU_EARTH: f64 = 398_600.441_8;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Date (days)
pub type JulianDate = f64;
/// Julian centuries elapsed since J2000
pub type JulianCentury = f64;

/// Three-component real vector (position in km, velocity in km/s, ...)
pub type Vec3 = Vector3<f64>;
/// 3×3 real matrix, used for rotations between frames
pub type Mat3 = Matrix3<f64>;
