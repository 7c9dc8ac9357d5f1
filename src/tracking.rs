//! # Day-track driver
//!
//! The shell-facing sampling layer: for a UTC calendar date and a Maidenhead
//! locator, evaluate the apparent position of the Moon (or Sun) every 30
//! minutes from 00:00 to 24:00 inclusive, 49 samples per track.
//!
//! A syntactically invalid locator is not an error at this layer: the shell
//! contract is "render no data", so the driver substitutes a track of `None`
//! samples and logs the rejection.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{DayNumber, SAMPLES_PER_DAY, SAMPLE_STEP_HOURS};
use crate::frames::HorizontalCoord;
use crate::locator::Locator;
use crate::moon::MoonEphemeris;
use crate::observer::Observer;
use crate::sun::SunEphemeris;
use crate::time::UtcDate;

/// One observer's horizontal-coordinate samples across one UTC day.
///
/// `samples` always holds [`SAMPLES_PER_DAY`] entries; `None` marks "no data"
/// (the locator did not validate). `label` is the uppercased locator when the
/// track carries data, or the raw input text when it does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTrack {
    pub label: String,
    pub samples: Vec<Option<HorizontalCoord>>,
}

impl DayTrack {
    /// Whether the track carries any data at all.
    pub fn has_data(&self) -> bool {
        self.samples.iter().any(Option::is_some)
    }

    fn empty(label: &str) -> Self {
        DayTrack {
            label: label.to_string(),
            samples: vec![None; SAMPLES_PER_DAY],
        }
    }
}

/// Moon day track for a locator: 49 parallax-corrected azimuth/elevation
/// samples at 30-minute steps.
pub fn moon_day_track(date: &UtcDate, locator_text: &str) -> DayTrack {
    sample_day(date, locator_text, |day, site| {
        let sun = SunEphemeris::at(day);
        MoonEphemeris::at(day, &sun).horizontal(&sun, site)
    })
}

/// Sun day track for a locator: 49 azimuth/elevation samples at 30-minute
/// steps (no parallax correction; see [`SunEphemeris::horizontal`]).
pub fn sun_day_track(date: &UtcDate, locator_text: &str) -> DayTrack {
    sample_day(date, locator_text, |day, site| {
        SunEphemeris::at(day).horizontal(site)
    })
}

/// "HH:MM" axis labels for the 49 sample slots, "00:00" through "24:00".
pub fn sample_time_labels() -> Vec<String> {
    (0..SAMPLES_PER_DAY)
        .map(|i| format!("{:02}:{:02}", i / 2, if i % 2 == 1 { 30 } else { 0 }))
        .collect()
}

fn sample_day<F>(date: &UtcDate, locator_text: &str, position_at: F) -> DayTrack
where
    F: Fn(DayNumber, &Observer) -> HorizontalCoord,
{
    let locator = match Locator::parse(locator_text) {
        Ok(locator) => locator,
        Err(err) => {
            warn!("{err}; substituting an empty day track");
            return DayTrack::empty(locator_text);
        }
    };

    let site = Observer::from_locator(&locator);
    debug!(
        "day track for {locator} ({:.4}°E, {:.4}°N) on {:04}-{:02}-{:02}",
        site.longitude, site.latitude, date.year, date.month, date.day
    );

    let samples = (0..SAMPLES_PER_DAY)
        .map(|i| {
            let day = date.day_number_at(i as f64 * SAMPLE_STEP_HOURS);
            Some(position_at(day, &site))
        })
        .collect();

    DayTrack {
        label: locator.to_string(),
        samples,
    }
}
