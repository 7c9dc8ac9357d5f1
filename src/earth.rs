use crate::angles::{cosd, sind};
use crate::constants::{DayNumber, Degree};

/// Mean obliquity of the ecliptic at a given day number, in degrees.
///
/// Linear fit around the 1999-12-31 epoch; the slope is the slow secular
/// decrease of the axial tilt.
pub fn obliquity(day: DayNumber) -> Degree {
    23.4393 - 3.563e-7 * day
}

/// Geocentric latitude for a geodetic latitude, in degrees.
///
/// First-order flattening correction; the two latitudes differ by up to
/// ~0.19° at mid latitudes and coincide at the equator and poles.
pub fn geocentric_latitude(latitude: Degree) -> Degree {
    latitude - 0.1924 * sind(2.0 * latitude)
}

/// Local Earth radius relative to the equatorial radius, dimensionless.
///
/// Used to scale the lunar parallax with the observer's distance from the
/// geocenter.
pub fn radius_factor(latitude: Degree) -> f64 {
    0.99833 + 0.00167 * cosd(2.0 * latitude)
}
