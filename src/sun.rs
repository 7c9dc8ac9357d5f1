//! # Solar ephemeris
//!
//! Heliocentric Keplerian position of the Sun (as seen from Earth) from
//! linear-in-time orbital elements, following the low-precision algorithm of
//! P. Schlyter ("Computing planetary positions"). Because the solar orbit is
//! nearly circular, Kepler's equation is solved with a single closed-form
//! first-order step; no Newton iteration is needed.
//!
//! The Sun also owns the sidereal-time bookkeeping (GMST at 0h UT is a direct
//! function of the solar mean longitude), which is why the lunar topocentric
//! correction borrows its local sidereal time from [`SunEphemeris`].

use nalgebra::Vector3;

use crate::angles::{atan2d, cosd, rev, sind};
use crate::constants::{DayNumber, Degree, Hour, DEGRA};
use crate::earth;
use crate::frames::{ecliptic_to_equatorial, equatorial_to_horizontal, HorizontalCoord};
use crate::observer::Observer;

/// Solar orbital state and derived angles at one instant.
///
/// All angles are degrees; `distance` is in astronomical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEphemeris {
    /// Day number the ephemeris was evaluated at.
    pub day: DayNumber,
    /// Longitude of perihelion ϖ.
    pub longitude_of_perihelion: Degree,
    /// Orbital eccentricity e.
    pub eccentricity: f64,
    /// Mean anomaly M, normalized to [0, 360).
    pub mean_anomaly: Degree,
    /// Mean longitude L = ϖ + M, normalized to [0, 360).
    pub mean_longitude: Degree,
    /// Eccentric anomaly E from the first-order Kepler solution.
    pub eccentric_anomaly: Degree,
    /// True anomaly v.
    pub true_anomaly: Degree,
    /// Geocentric distance, AU.
    pub distance: f64,
    /// Geocentric ecliptic longitude (ecliptic latitude is zero by definition).
    pub longitude: Degree,
    /// Right ascension, degrees in [0, 360).
    pub right_ascension: Degree,
    /// Declination, degrees.
    pub declination: Degree,
}

impl SunEphemeris {
    /// Evaluate the solar ephemeris at a day number.
    pub fn at(day: DayNumber) -> Self {
        let longitude_of_perihelion = 282.9404 + 4.70935e-5 * day;
        let eccentricity = 0.016709 - 1.151e-9 * day;
        let mean_anomaly = rev(356.0470 + 0.9856002585 * day);
        let mean_longitude = rev(longitude_of_perihelion + mean_anomaly);

        // First-order Kepler solution, adequate for e ~ 0.017.
        let m = mean_anomaly;
        let e = eccentricity;
        let eccentric_anomaly = m + DEGRA * e * sind(m) * (1.0 + e * cosd(m));

        // Position in the orbital plane.
        let x = cosd(eccentric_anomaly) - e;
        let y = sind(eccentric_anomaly) * (1.0 - e * e).sqrt();
        let distance = (x * x + y * y).sqrt();
        let true_anomaly = atan2d(y, x);

        let longitude = rev(true_anomaly + longitude_of_perihelion);

        // Ecliptic Cartesian position; solar ecliptic latitude is zero, so the
        // equatorial conversion is a bare obliquity rotation.
        let v_ecliptic = Vector3::new(
            distance * cosd(longitude),
            distance * sind(longitude),
            0.0,
        );
        let v_equatorial = ecliptic_to_equatorial(&v_ecliptic, earth::obliquity(day));

        let right_ascension = rev(atan2d(v_equatorial.y, v_equatorial.x));
        let declination = atan2d(
            v_equatorial.z,
            (v_equatorial.x * v_equatorial.x + v_equatorial.y * v_equatorial.y).sqrt(),
        );

        SunEphemeris {
            day,
            longitude_of_perihelion,
            eccentricity,
            mean_anomaly,
            mean_longitude,
            eccentric_anomaly,
            true_anomaly,
            distance,
            longitude,
            right_ascension,
            declination,
        }
    }

    /// Greenwich mean sidereal time at 0h UT, in hours.
    pub fn gmst0(&self) -> Hour {
        self.mean_longitude / 15.0 + 12.0
    }

    /// Local sidereal time for an observer longitude, in hours.
    pub fn local_sidereal_time(&self, longitude: Degree) -> Hour {
        self.gmst0() + crate::time::ut_hours(self.day) + longitude / 15.0
    }

    /// Local hour angle of the Sun, degrees in [0, 360).
    pub fn hour_angle(&self, longitude: Degree) -> Degree {
        rev(self.local_sidereal_time(longitude) * 15.0 - self.right_ascension)
    }

    /// Apparent horizontal coordinates of the Sun for a ground site.
    ///
    /// The solar parallax (< 9") is far below the precision of the model, so
    /// no topocentric correction is applied.
    pub fn horizontal(&self, site: &Observer) -> HorizontalCoord {
        equatorial_to_horizontal(
            self.hour_angle(site.longitude),
            self.declination,
            site.latitude,
        )
    }
}
