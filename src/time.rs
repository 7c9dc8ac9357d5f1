use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{DayNumber, Degree, Hour, EPOCH_OFFSET_DAYS};
use crate::moonbounce_errors::MoonbounceError;

/// Compute the model day number for a UTC calendar date and time of day.
///
/// The integer part counts days since 1999-12-31 using the classic 367-year
/// formula with truncating integer division; the fractional part encodes the
/// UTC time of day.
///
/// Arguments
/// ---------
/// * `year`: Gregorian calendar year
/// * `month`: calendar month (1–12)
/// * `day`: calendar day of month
/// * `ut_hours`: UTC time of day as a fractional hour (e.g. 14.5 for 14:30)
///
/// Return
/// ------
/// * the continuous day number, fractional part in units of days
pub fn day_number(year: i32, month: u32, day: u32, ut_hours: Hour) -> DayNumber {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;

    let n = 367 * y - 7 * (y + (m + 9) / 12) / 4 + 275 * m / 9 + d - EPOCH_OFFSET_DAYS;
    n as f64 + ut_hours / 24.0
}

/// UTC time of day encoded in a day number, in hours.
pub fn ut_hours(day: DayNumber) -> Hour {
    day.fract() * 24.0
}

/// Compute the model day number for a [`hifitime::Epoch`].
///
/// The epoch is decomposed into its UTC Gregorian components and fed through
/// [`day_number`], so the result carries the same epoch offset as every other
/// time in the crate.
pub fn day_number_from_epoch(epoch: &Epoch) -> DayNumber {
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
    let ut = hour as f64
        + minute as f64 / 60.0
        + second as f64 / 3600.0
        + nanos as f64 / 3.6e12;
    day_number(year, month as u32, day as u32, ut)
}

/// Current day number from the system clock.
///
/// Errors
/// ------
/// * [`MoonbounceError::SystemTime`] if the platform clock cannot be read.
pub fn day_number_now() -> Result<DayNumber, MoonbounceError> {
    let epoch = Epoch::now().map_err(|e| MoonbounceError::SystemTime(e.to_string()))?;
    Ok(day_number_from_epoch(&epoch))
}

/// Format an angle in degrees as sidereal-style "H:MM" time (15° per hour).
pub fn degrees_to_hm(deg: Degree) -> String {
    let hours = (deg / 15.0).floor();
    let minutes = ((deg / 15.0 - hours) * 60.0).floor();
    format!("{}:{:02}", hours as i64, minutes as i64)
}

/// A UTC calendar date, the shell-facing input of the day-track driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl UtcDate {
    /// Build a date, rejecting out-of-range month or day components.
    ///
    /// Errors
    /// ------
    /// * [`MoonbounceError::InvalidDate`] when `month` is not in 1–12 or `day`
    ///   not in 1–31.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, MoonbounceError> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(MoonbounceError::InvalidDate { year, month, day });
        }
        Ok(UtcDate { year, month, day })
    }

    /// Today's date according to the system clock, in UTC.
    pub fn today() -> Result<Self, MoonbounceError> {
        let epoch = Epoch::now().map_err(|e| MoonbounceError::SystemTime(e.to_string()))?;
        let (year, month, day, ..) = epoch.to_gregorian_utc();
        Ok(UtcDate {
            year,
            month: month as u32,
            day: day as u32,
        })
    }

    /// Day number of this date at the given UTC time of day.
    pub fn day_number_at(&self, ut_hours: Hour) -> DayNumber {
        day_number(self.year, self.month, self.day, ut_hours)
    }
}
