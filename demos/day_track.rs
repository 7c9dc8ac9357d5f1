//! Print the Moon's day track for a locator and date.
//!
//! Usage: `cargo run --example day_track -- [LOCATOR] [YYYY-MM-DD]`
//! (defaults: KP11MK, today)

use moonbounce::moonbounce_errors::MoonbounceError;
use moonbounce::time::UtcDate;
use moonbounce::tracking::{moon_day_track, sample_time_labels};

fn parse_date(text: &str) -> Result<UtcDate, MoonbounceError> {
    let mut parts = text.splitn(3, '-');
    let year = parts.next().and_then(|p| p.parse().ok());
    let month = parts.next().and_then(|p| p.parse().ok());
    let day = parts.next().and_then(|p| p.parse().ok());
    match (year, month, day) {
        (Some(year), Some(month), Some(day)) => UtcDate::new(year, month, day),
        _ => Err(MoonbounceError::InvalidDate {
            year: year.unwrap_or(0),
            month: month.unwrap_or(0),
            day: day.unwrap_or(0),
        }),
    }
}

fn main() -> Result<(), MoonbounceError> {
    let mut args = std::env::args().skip(1);
    let locator = args.next().unwrap_or_else(|| "KP11MK".to_string());
    let date = match args.next() {
        Some(text) => parse_date(&text)?,
        None => UtcDate::today()?,
    };

    let track = moon_day_track(&date, &locator);
    println!(
        "Moon over {} on {:04}-{:02}-{:02}",
        track.label, date.year, date.month, date.day
    );
    println!("{:>6} {:>10} {:>10}", "UTC", "azimuth", "elevation");

    for (label, sample) in sample_time_labels().iter().zip(&track.samples) {
        match sample {
            Some(pos) => println!(
                "{label:>6} {:>9.1}° {:>9.1}°",
                pos.azimuth, pos.elevation
            ),
            None => println!("{label:>6} {:>10} {:>10}", "-", "-"),
        }
    }

    Ok(())
}
