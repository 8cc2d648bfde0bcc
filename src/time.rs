//! # Calendar and Julian time conversions
//!
//! Converts a UTC calendar instant into the epoch-relative time used by the secular
//! element model: Julian centuries elapsed since J2000.0.
//!
//! The chain is
//!
//! ```text
//! (Y, M, D)      → J0  (Julian Day Number at 0h UT)
//! (h, m, s)      → UT  (fractional hours)
//! (J0, UT)       → JD  = J0 + UT / 24
//! JD             → T   = (JD − 2451545.0) / 36525
//! ```
//!
//! Decomposition of an arbitrary instant into UTC calendar fields is delegated to
//! [`hifitime`], see [`CalendarInstant::from_epoch`].

use std::str::FromStr;

use hifitime::Epoch;

use crate::constants::{
    JulianCentury, JulianDate, DAYS_PER_JULIAN_CENTURY, J2000_JD, JDN_OFFSET,
};
use crate::orbitstate_errors::{OrbitStateError, Result};

/// Julian Day Number at 0h UT of a Gregorian calendar date.
///
/// ```text
/// J0 = 367·Y − INT(7·(Y + INT((M+9)/12))/4) + INT(275·M/9) + D + 1721013.5
/// ```
///
/// `INT` truncates toward zero (not floor), which matters for negative intermediate values.
///
/// Arguments
/// ---------
/// * `year`: Gregorian year
/// * `month`: month in 1..=12
/// * `day`: day of month
///
/// Return
/// ------
/// * the Julian Day Number at 0h UT
pub fn julian_day_number(year: i32, month: u32, day: u32) -> JulianDate {
    let y = year as f64;
    let m = month as f64;
    let d = day as f64;

    367.0 * y - (7.0 * (y + ((m + 9.0) / 12.0).trunc()) / 4.0).trunc()
        + (275.0 * m / 9.0).trunc()
        + d
        + JDN_OFFSET
}

/// Universal time of day expressed in hours.
pub fn fractional_hours(hour: u32, minute: u32, second: f64) -> f64 {
    hour as f64 + minute as f64 / 60.0 + second / 3600.0
}

/// Julian Date from the Julian Day Number at 0h and the time of day in hours.
pub fn julian_date(j0: JulianDate, hours: f64) -> JulianDate {
    j0 + hours / 24.0
}

/// Julian centuries elapsed between J2000.0 and `jd`.
pub fn julian_centuries(jd: JulianDate) -> JulianCentury {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// A UTC calendar instant split into its civil fields.
///
/// `second` carries the fractional part of the instant (sub-second precision).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarInstant {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        CalendarInstant {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Decompose a [`hifitime::Epoch`] into UTC calendar fields.
    pub fn from_epoch(epoch: &Epoch) -> Self {
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        CalendarInstant {
            year,
            month: month as u32,
            day: day as u32,
            hour: hour as u32,
            minute: minute as u32,
            second: second as f64 + nanos as f64 * 1e-9,
        }
    }

    pub fn julian_date(&self) -> JulianDate {
        julian_date(
            julian_day_number(self.year, self.month, self.day),
            fractional_hours(self.hour, self.minute, self.second),
        )
    }

    pub fn julian_centuries(&self) -> JulianCentury {
        julian_centuries(self.julian_date())
    }
}

impl From<&Epoch> for CalendarInstant {
    fn from(epoch: &Epoch) -> Self {
        CalendarInstant::from_epoch(epoch)
    }
}

/// Julian centuries since J2000.0 of a UTC instant.
pub fn julian_centuries_from_epoch(epoch: &Epoch) -> JulianCentury {
    CalendarInstant::from_epoch(epoch).julian_centuries()
}

/// Parse an ISO-8601 UTC timestamp such as `2003-08-27T12:00:00Z`.
///
/// A trailing `Z` designator is accepted; timestamps without a time scale are read as UTC.
pub fn parse_utc_timestamp(timestamp: &str) -> Result<Epoch> {
    let trimmed = timestamp.trim();
    let without_zulu = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    Epoch::from_str(without_zulu)
        .map_err(|e| OrbitStateError::InvalidTimestamp(format!("{timestamp}: {e}")))
}
