//! # Reference-frame rotations
//!
//! Coordinate transforms shared by the solar and lunar ephemerides:
//!
//! - principal-axis rotation matrices ([`rotmt`]),
//! - ecliptic → equatorial rotation about the vernal-equinox axis
//!   ([`ecliptic_to_equatorial`]),
//! - equatorial (hour angle/declination) → horizontal (azimuth/elevation)
//!   rotation into the observer's horizon frame
//!   ([`equatorial_to_horizontal`]).
//!
//! ## Conventions
//!
//! - Azimuth: degrees in [0, 360), 0° = north, increasing eastward.
//! - Elevation: degrees in [-90, +90], 0° = horizon.
//! - All public angles are degrees; matrix angles are radians.

use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::angles::{asind, atan2d, cosd, rev, sind};
use crate::constants::{Degree, Radian};

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// The matrix represents an **active rotation** by `alpha` in the direct
/// (trigonometric) sense: counter-clockwise when looking along the axis toward
/// the origin, so that the rotated vector is `x' = R · x`.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in **radians**.
/// * `axis`: index of the rotation axis: `0` → X, `1` → Y, `2` → Z.
///
/// Panics
/// ------
/// * If `axis > 2`.
pub fn rotmt(alpha: Radian, axis: usize) -> Matrix3<f64> {
    let (s, c) = alpha.sin_cos();
    match axis {
        0 => Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c),
        1 => Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c),
        2 => Matrix3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0),
        _ => panic!("**** ROTMT: invalid axis index {axis} (must be 0,1,2) ****"),
    }
}

/// Rotate an ecliptic Cartesian vector into the equatorial frame.
///
/// A single rotation about the x-axis (the direction of the vernal equinox)
/// by the obliquity of the ecliptic.
///
/// Arguments
/// ---------
/// * `v_ecliptic`: Cartesian vector in the ecliptic frame.
/// * `obliquity`: obliquity of the ecliptic in **degrees**.
pub fn ecliptic_to_equatorial(v_ecliptic: &Vector3<f64>, obliquity: Degree) -> Vector3<f64> {
    rotmt(obliquity.to_radians(), 0) * v_ecliptic
}

/// Azimuth/elevation pair in the observer's horizon frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoord {
    /// Degrees in [0, 360), 0° = north, increasing eastward.
    pub azimuth: Degree,
    /// Degrees in [-90, +90], 0° = horizon.
    pub elevation: Degree,
}

/// Rotate equatorial (hour angle, declination) coordinates into the observer's
/// horizon frame.
///
/// The unit direction is first expressed in Cartesian form in the hour-angle
/// frame, then tilted about the east-west axis by the observer's latitude.
/// Azimuth comes from `atan2` of the horizontal components (shifted so 0° is
/// north), elevation from the arcsine of the vertical component; the clamped
/// arcsine makes the zenith direction return exactly +90° instead of NaN.
///
/// Arguments
/// ---------
/// * `hour_angle`: local hour angle of the body in **degrees**.
/// * `declination`: declination of the body in **degrees**.
/// * `latitude`: observer's geodetic latitude in **degrees**.
///
/// Return
/// ------
/// * the body's [`HorizontalCoord`] as seen by the observer
pub fn equatorial_to_horizontal(
    hour_angle: Degree,
    declination: Degree,
    latitude: Degree,
) -> HorizontalCoord {
    let x = cosd(hour_angle) * cosd(declination);
    let y = sind(hour_angle) * cosd(declination);
    let z = sind(declination);

    let x_horizon = x * sind(latitude) - z * cosd(latitude);
    let y_horizon = y;
    let z_horizon = x * cosd(latitude) + z * sind(latitude);

    HorizontalCoord {
        azimuth: rev(atan2d(y_horizon, x_horizon) + 180.0),
        elevation: asind(z_horizon),
    }
}
