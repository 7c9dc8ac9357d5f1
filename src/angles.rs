use crate::constants::Degree;

/// Normalize an angle into [0, 360) degrees.
///
/// `rem_euclid` keeps the result non-negative for negative inputs, so the
/// reduction is idempotent over the whole real line.
pub fn rev(x: Degree) -> Degree {
    x.rem_euclid(360.0)
}

/// Normalize an angle into (-180, 180] degrees.
pub fn normalize_pm180(x: Degree) -> Degree {
    let r = rev(x);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Sine of an angle in degrees.
pub fn sind(x: Degree) -> f64 {
    x.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn cosd(x: Degree) -> f64 {
    x.to_radians().cos()
}

/// Tangent of an angle in degrees.
pub fn tand(x: Degree) -> f64 {
    x.to_radians().tan()
}

/// Arcsine in degrees. The argument is clamped to [-1, 1] so that rounding
/// noise at the domain boundary (e.g. a body exactly at the zenith) yields
/// ±90° instead of NaN.
pub fn asind(x: f64) -> Degree {
    x.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Arctangent in degrees.
pub fn atand(x: f64) -> Degree {
    x.atan().to_degrees()
}

/// Two-argument arctangent in degrees, in (-180, 180].
pub fn atan2d(y: f64, x: f64) -> Degree {
    y.atan2(x).to_degrees()
}
