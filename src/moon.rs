//! # Lunar ephemeris
//!
//! Geocentric and topocentric position of the Moon from Keplerian elements
//! with a truncated short-period perturbation series, following the
//! low-precision algorithm of P. Schlyter ("Computing planetary positions").
//!
//! The lunar model is more elaborate than the solar one in three ways:
//!
//! 1. **Kepler's equation is solved iteratively.** At e ≈ 0.055 the
//!    first-order closed form is not enough; the solution is refined with
//!    exactly two Newton–Raphson steps. The fixed step count (rather than a
//!    convergence tolerance) is kept deliberately: it reproduces the
//!    established output of this model bit-for-bit, and at lunar eccentricity
//!    two steps already land well below the model's intrinsic error.
//! 2. **Short-period perturbations.** Solar tides distort the lunar orbit on
//!    scales up to ~1.3°. A truncated sine/cosine series (12 longitude terms,
//!    5 latitude terms, 2 distance terms, selected by Schlyter after Meeus)
//!    is added to the Keplerian result. The coefficients are empirical fits
//!    and carry no closed form; they must be kept literal.
//! 3. **Topocentric parallax.** At ~60 Earth radii the Moon's horizontal
//!    parallax approaches 1°, far above the model's precision, so horizontal
//!    coordinates are corrected from the geocenter to the observer's
//!    location on the ellipsoid.
//!
//! The perturbation arguments mix lunar and solar mean elements, which is why
//! [`MoonEphemeris::at`] takes the [`SunEphemeris`] of the same instant.

use nalgebra::Vector3;

use crate::angles::{asind, atan2d, atand, cosd, normalize_pm180, rev, sind, tand};
use crate::constants::{DayNumber, Degree, EarthRadii, DEGRA};
use crate::earth;
use crate::frames::{ecliptic_to_equatorial, equatorial_to_horizontal, HorizontalCoord};
use crate::observer::Observer;
use crate::sun::SunEphemeris;

/// Orbital inclination to the ecliptic, degrees.
pub const INCLINATION: Degree = 5.1454;

/// Semi-major axis, Earth equatorial radii.
pub const MEAN_DISTANCE: EarthRadii = 60.2666;

/// Orbital eccentricity.
pub const ECCENTRICITY: f64 = 0.0549;

/// Number of Newton–Raphson refinements applied to the Kepler solution.
pub const KEPLER_NEWTON_STEPS: usize = 2;

/// Geocentric lunar state at one instant.
///
/// All angles are degrees; `distance` is in Earth equatorial radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonEphemeris {
    /// Day number the ephemeris was evaluated at.
    pub day: DayNumber,
    /// Longitude of the ascending node N (not normalized; only ever consumed
    /// by periodic functions and element differences).
    pub ascending_node: Degree,
    /// Argument of perigee w (not normalized, as above).
    pub argument_of_perigee: Degree,
    /// Mean anomaly M, normalized to [0, 360).
    pub mean_anomaly: Degree,
    /// Eccentric anomaly E after the fixed Newton refinement.
    pub eccentric_anomaly: Degree,
    /// True anomaly v, normalized to [0, 360).
    pub true_anomaly: Degree,
    /// Mean longitude N + w + M.
    pub mean_longitude: Degree,
    /// Mean elongation from the Sun, the argument D of the perturbation series.
    pub mean_elongation: Degree,
    /// Argument of latitude F.
    pub argument_of_latitude: Degree,
    /// Perturbed geocentric ecliptic longitude.
    pub longitude: Degree,
    /// Perturbed geocentric ecliptic latitude.
    pub latitude: Degree,
    /// Perturbed geocentric distance, Earth radii.
    pub distance: EarthRadii,
    /// Geocentric right ascension, degrees in [0, 360).
    pub right_ascension: Degree,
    /// Geocentric declination, degrees.
    pub declination: Degree,
}

/// Parallax-corrected equatorial state as seen from a ground site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopocentricMoon {
    /// Horizontal parallax (apparent Earth-radius angle), degrees.
    pub parallax: Degree,
    /// Geocentric local hour angle, degrees in [0, 360).
    pub geocentric_hour_angle: Degree,
    /// Topocentric right ascension, degrees.
    pub right_ascension: Degree,
    /// Topocentric declination, degrees.
    pub declination: Degree,
    /// Topocentric local hour angle, degrees in (-180, 180].
    pub local_hour_angle: Degree,
    /// Geodetic latitude of the site the correction was evaluated for.
    site_latitude: Degree,
}

impl MoonEphemeris {
    /// Evaluate the geocentric lunar ephemeris at a day number.
    ///
    /// Arguments
    /// ---------
    /// * `day`: model day number.
    /// * `sun`: solar ephemeris **of the same instant**; its mean anomaly and
    ///   mean longitude enter the perturbation arguments.
    pub fn at(day: DayNumber, sun: &SunEphemeris) -> Self {
        let ascending_node = 125.1228 - 0.0529538083 * day;
        let argument_of_perigee = 318.0634 + 0.1643573223 * day;
        let mean_anomaly = rev(115.3654 + 13.0649929509 * day);

        let eccentric_anomaly = solve_kepler(mean_anomaly, ECCENTRICITY);

        // Position in the orbital plane, Earth radii.
        let x = MEAN_DISTANCE * (cosd(eccentric_anomaly) - ECCENTRICITY);
        let y = MEAN_DISTANCE * (1.0 - ECCENTRICITY * ECCENTRICITY).sqrt() * sind(eccentric_anomaly);
        let r = (x * x + y * y).sqrt();
        let true_anomaly = rev(atan2d(y, x));

        // Rotate through argument of latitude, inclination, and node into
        // ecliptic Cartesian coordinates.
        let n = ascending_node;
        let vw = true_anomaly + argument_of_perigee;
        let v_ecliptic = Vector3::new(
            r * (cosd(n) * cosd(vw) - sind(n) * sind(vw) * cosd(INCLINATION)),
            r * (sind(n) * cosd(vw) + cosd(n) * sind(vw) * cosd(INCLINATION)),
            r * sind(vw) * sind(INCLINATION),
        );
        let longitude_kepler = rev(atan2d(v_ecliptic.y, v_ecliptic.x));
        let latitude_kepler = atan2d(
            v_ecliptic.z,
            (v_ecliptic.x * v_ecliptic.x + v_ecliptic.y * v_ecliptic.y).sqrt(),
        );

        // Perturbation arguments. The lunar mean longitude is intentionally
        // left unnormalized: it only ever appears inside differences that are
        // fed to periodic functions.
        let mm = mean_anomaly;
        let ms = sun.mean_anomaly;
        let mean_longitude = ascending_node + argument_of_perigee + mean_anomaly;
        let d = mean_longitude - sun.mean_longitude;
        let f = mean_longitude - ascending_node;

        // Short-period perturbations in longitude: evection, variation, the
        // yearly equation, and the smaller textbook terms, in the canonical
        // order.
        let d_longitude = -1.274 * sind(mm - 2.0 * d)
            + 0.658 * sind(2.0 * d)
            - 0.186 * sind(ms)
            - 0.059 * sind(2.0 * mm - 2.0 * d)
            - 0.057 * sind(mm - 2.0 * d + ms)
            + 0.053 * sind(mm + 2.0 * d)
            + 0.046 * sind(2.0 * d - ms)
            + 0.041 * sind(mm - ms)
            - 0.035 * sind(d)
            - 0.031 * sind(mm + ms)
            - 0.015 * sind(2.0 * f - 2.0 * d)
            + 0.011 * sind(mm - 4.0 * d);

        let d_latitude = -0.173 * sind(f - 2.0 * d)
            - 0.055 * sind(mm - f - 2.0 * d)
            - 0.046 * sind(mm + f - 2.0 * d)
            + 0.033 * sind(f + 2.0 * d)
            + 0.017 * sind(2.0 * mm + f);

        let d_distance = -0.58 * cosd(mm - 2.0 * d) - 0.46 * cosd(2.0 * d);

        let longitude = longitude_kepler + d_longitude;
        let latitude = latitude_kepler + d_latitude;
        let distance = r + d_distance;

        // Unit-sphere ecliptic direction of the perturbed position; distance
        // is carried separately for the parallax correction.
        let direction_ecliptic = Vector3::new(
            cosd(latitude) * cosd(longitude),
            cosd(latitude) * sind(longitude),
            sind(latitude),
        );
        let v_equatorial = ecliptic_to_equatorial(&direction_ecliptic, earth::obliquity(day));

        let right_ascension = rev(atan2d(v_equatorial.y, v_equatorial.x));
        let declination = atan2d(
            v_equatorial.z,
            (v_equatorial.x * v_equatorial.x + v_equatorial.y * v_equatorial.y).sqrt(),
        );

        MoonEphemeris {
            day,
            ascending_node,
            argument_of_perigee,
            mean_anomaly,
            eccentric_anomaly,
            true_anomaly,
            mean_longitude,
            mean_elongation: d,
            argument_of_latitude: f,
            longitude,
            latitude,
            distance,
            right_ascension,
            declination,
        }
    }

    /// Correct the geocentric position for the observer's parallax.
    ///
    /// The observer sits up to one Earth radius away from the geocenter; at a
    /// lunar distance of ~60 radii that shifts the apparent position by up to
    /// ~1°. The correction displaces right ascension and declination along
    /// the observer's local vertical, using the geocentric latitude and local
    /// Earth radius from [`earth`].
    ///
    /// Arguments
    /// ---------
    /// * `sun`: solar ephemeris of the same instant (supplies sidereal time).
    /// * `site`: observer location.
    pub fn topocentric(&self, sun: &SunEphemeris, site: &Observer) -> TopocentricMoon {
        let parallax = asind(1.0 / self.distance);

        let lst_degrees = sun.local_sidereal_time(site.longitude) * 15.0;
        let hour_angle = rev(lst_degrees - self.right_ascension);

        let gclat = earth::geocentric_latitude(site.latitude);
        let rho = earth::radius_factor(site.latitude);
        let decl = self.declination;

        // Auxiliary angle of the parallax displacement.
        let g = atand(tand(gclat) / cosd(hour_angle));

        let right_ascension = self.right_ascension
            - parallax * rho * cosd(gclat) * sind(hour_angle) / cosd(decl);

        // At the equator g vanishes and the general formula degenerates to
        // 0/0; substitute its analytic limit there.
        let declination = if g == 0.0 {
            decl + parallax * rho * sind(decl) * cosd(hour_angle)
        } else {
            decl - parallax * rho * sind(gclat) * sind(g - decl) / sind(g)
        };

        let local_hour_angle = normalize_pm180(lst_degrees - right_ascension);

        TopocentricMoon {
            parallax,
            geocentric_hour_angle: hour_angle,
            right_ascension,
            declination,
            local_hour_angle,
            site_latitude: site.latitude,
        }
    }

    /// Apparent horizontal coordinates of the Moon for a ground site,
    /// parallax-corrected.
    pub fn horizontal(&self, sun: &SunEphemeris, site: &Observer) -> HorizontalCoord {
        self.topocentric(sun, site).horizontal()
    }
}

impl TopocentricMoon {
    /// Horizontal coordinates from the topocentric equatorial state.
    pub fn horizontal(&self) -> HorizontalCoord {
        equatorial_to_horizontal(self.local_hour_angle, self.declination, self.site_latitude)
    }
}

/// Solve Kepler's equation `E = M + e·sin(E)` (degrees) for the Moon.
///
/// First-order closed-form seed followed by [`KEPLER_NEWTON_STEPS`] fixed
/// Newton–Raphson refinements.
fn solve_kepler(mean_anomaly: Degree, eccentricity: f64) -> Degree {
    let m = mean_anomaly;
    let e = eccentricity;

    let mut ea = m + DEGRA * e * sind(m) * (1.0 + e * cosd(m));
    for _ in 0..KEPLER_NEWTON_STEPS {
        ea -= (ea - DEGRA * e * sind(ea) - m) / (1.0 - e * cosd(ea));
    }
    ea
}

#[cfg(test)]
mod moon_test {
    use super::*;

    fn kp11mk() -> Observer {
        Observer::new(23.041666666666668, 61.4375)
    }

    /// Schlyter's worked example: 1990 April 19, 00:00 UT (day -3543).
    #[test]
    fn test_worked_example_1990() {
        let sun = SunEphemeris::at(-3543.0);
        let moon = MoonEphemeris::at(-3543.0, &sun);

        assert!((moon.longitude - 306.9483873098253).abs() < 1e-9);
        assert!((moon.latitude + 0.5856163847702498).abs() < 1e-9);
        assert!((moon.distance - 60.67790303343743).abs() < 1e-9);
        assert!((moon.right_ascension - 309.50112584562646).abs() < 1e-9);
        assert!((moon.declination + 19.103244594505483).abs() < 1e-9);
    }

    #[test]
    fn test_kepler_solution() {
        // 2024-01-15 18:00 UT
        let sun = SunEphemeris::at(8781.75);
        let moon = MoonEphemeris::at(8781.75, &sun);
        assert!((moon.eccentric_anomaly - 9.37990627046107).abs() < 1e-9);

        // the refined anomaly satisfies Kepler's equation to high accuracy
        let residual =
            moon.eccentric_anomaly - DEGRA * ECCENTRICITY * sind(moon.eccentric_anomaly)
                - moon.mean_anomaly;
        assert!(residual.abs() < 1e-9);
    }

    #[test]
    fn test_geocentric_2024() {
        let sun = SunEphemeris::at(8781.75);
        let moon = MoonEphemeris::at(8781.75, &sun);

        assert!((moon.longitude - 353.50281418856275).abs() < 1e-9);
        assert!((moon.latitude + 2.2427458241712177).abs() < 1e-9);
        assert!((moon.distance - 57.295043926568894).abs() < 1e-9);
        assert!((moon.right_ascension - 354.92466654023343).abs() < 1e-9);
        assert!((moon.declination + 4.6388662751342755).abs() < 1e-9);
    }

    #[test]
    fn test_topocentric_2024() {
        let sun = SunEphemeris::at(8781.75);
        let moon = MoonEphemeris::at(8781.75, &sun);
        let topo = moon.topocentric(&sun, &kp11mk());

        assert!((topo.parallax - 1.0000636170579271).abs() < 1e-9);
        assert!((topo.geocentric_hour_angle - 52.813033552433524).abs() < 1e-9);
        assert!((topo.right_ascension - 354.54150138254937).abs() < 1e-9);
        assert!((topo.declination + 5.534174672149655).abs() < 1e-9);
        assert!((topo.local_hour_angle - 53.196198710117585).abs() < 1e-9);

        let h = topo.horizontal();
        assert!((h.azimuth - 234.43534990891288).abs() < 1e-9);
        assert!((h.elevation - 11.559845407515933).abs() < 1e-9);
    }

    /// The parallax correction always pushes the Moon toward the horizon.
    #[test]
    fn test_parallax_lowers_elevation() {
        let site = kp11mk();
        for i in 0..8 {
            let day = 8781.0 + i as f64 * 0.125;
            let sun = SunEphemeris::at(day);
            let moon = MoonEphemeris::at(day, &sun);

            let geocentric =
                equatorial_to_horizontal(
                    rev(sun.local_sidereal_time(site.longitude) * 15.0 - moon.right_ascension),
                    moon.declination,
                    site.latitude,
                );
            let topocentric = moon.horizontal(&sun, &site);
            assert!(topocentric.elevation < geocentric.elevation);
        }
    }

    #[test]
    fn test_equator_degeneracy_is_finite() {
        // a site exactly on the equator must not produce NaN from the 0/0
        // limit of the declination correction
        let site = Observer::new(0.0, 0.0);
        let sun = SunEphemeris::at(8781.75);
        let moon = MoonEphemeris::at(8781.75, &sun);
        let topo = moon.topocentric(&sun, &site);
        assert!(topo.declination.is_finite());
        let h = topo.horizontal();
        assert!(h.azimuth.is_finite() && h.elevation.is_finite());
    }

    #[test]
    fn test_determinism() {
        let sun = SunEphemeris::at(8781.75);
        let a = MoonEphemeris::at(8781.75, &sun);
        let b = MoonEphemeris::at(8781.75, &sun);
        assert_eq!(a, b);
        assert_eq!(a.topocentric(&sun, &kp11mk()), b.topocentric(&sun, &kp11mk()));
    }

    #[test]
    fn test_distance_range() {
        // perigee ~56.2, apogee ~63.7 Earth radii; perturbed values stay close
        for i in 0..60 {
            let day = 8700.0 + i as f64;
            let sun = SunEphemeris::at(day);
            let moon = MoonEphemeris::at(day, &sun);
            assert!(moon.distance > 55.0 && moon.distance < 65.0);
        }
    }
}
