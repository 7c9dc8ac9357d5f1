//! # Maidenhead locator codec
//!
//! 6-character grid-square geocoding as used in amateur radio: two field
//! letters (A–R, 20°×10° cells), two digits (2°×1° squares), two sub-square
//! letters (A–X, 5'×2.5' cells). Decoding returns the **center** of the
//! sub-square, which is why the longitude and latitude carry the +1/24° and
//! +1/48° half-cell offsets.

use std::fmt;
use std::str::FromStr;

use crate::constants::Degree;
use crate::moonbounce_errors::MoonbounceError;

/// A syntactically valid 6-character Maidenhead locator, stored uppercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator([u8; 6]);

impl Locator {
    /// Parse and validate a locator string.
    ///
    /// Validation is case-insensitive: exactly 6 ASCII characters, positions
    /// 0–1 in A–R, positions 2–3 in 0–9, positions 4–5 in A–X.
    ///
    /// Errors
    /// ------
    /// * [`MoonbounceError::InvalidLocator`] carrying the offending input.
    pub fn parse(text: &str) -> Result<Self, MoonbounceError> {
        let invalid = || MoonbounceError::InvalidLocator(text.to_string());

        let bytes = text.as_bytes();
        if bytes.len() != 6 {
            return Err(invalid());
        }

        let mut loc = [0u8; 6];
        for (i, &b) in bytes.iter().enumerate() {
            loc[i] = b.to_ascii_uppercase();
        }

        let field_ok = |b: u8| (b'A'..=b'R').contains(&b);
        let digit_ok = |b: u8| b.is_ascii_digit();
        let sub_ok = |b: u8| (b'A'..=b'X').contains(&b);

        if field_ok(loc[0])
            && field_ok(loc[1])
            && digit_ok(loc[2])
            && digit_ok(loc[3])
            && sub_ok(loc[4])
            && sub_ok(loc[5])
        {
            Ok(Locator(loc))
        } else {
            Err(invalid())
        }
    }

    /// Whether `text` is a syntactically valid locator.
    pub fn is_valid(text: &str) -> bool {
        Locator::parse(text).is_ok()
    }

    /// Longitude of the sub-square center, degrees east, in [-180, 180).
    pub fn longitude(&self) -> Degree {
        let field = (20 * i32::from(self.0[0] - b'A') - 180) as f64;
        let grid = (2 * i32::from(self.0[2] - b'0')) as f64;
        let sub = 5.0 * f64::from(self.0[4] - b'A') / 60.0;
        field + grid + sub + 1.0 / 24.0
    }

    /// Latitude of the sub-square center, degrees north, in [-90, 90].
    pub fn latitude(&self) -> Degree {
        let field = (10 * i32::from(self.0[1] - b'A') - 90) as f64;
        let grid = f64::from(self.0[3] - b'0');
        let sub = 2.5 * f64::from(self.0[5] - b'A') / 60.0;
        field + grid + sub + 1.0 / 48.0
    }

    /// The uppercased locator text.
    pub fn as_str(&self) -> &str {
        // invariant: validated ASCII
        std::str::from_utf8(&self.0).expect("locator bytes are ASCII")
    }
}

impl FromStr for Locator {
    type Err = MoonbounceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locator::parse(s)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod locator_test {
    use super::*;

    #[test]
    fn test_validity_boundaries() {
        assert!(Locator::is_valid("KP11MK"));
        assert!(Locator::is_valid("KP00MK"));
        assert!(Locator::is_valid("AA00AA"));
        assert!(Locator::is_valid("RR99XX"));
        // field letter out of A-R
        assert!(!Locator::is_valid("SA00AA"));
        assert!(!Locator::is_valid("AS00AA"));
        // sub-square letter out of A-X
        assert!(!Locator::is_valid("AA00YA"));
        assert!(!Locator::is_valid("AA00AY"));
        // digits
        assert!(!Locator::is_valid("AAA0AA"));
        assert!(!Locator::is_valid("AA0AAA"));
        // length
        assert!(!Locator::is_valid("KP1MK"));
        assert!(!Locator::is_valid("KP11MKX"));
        assert!(!Locator::is_valid(""));
    }

    #[test]
    fn test_case_insensitive() {
        let lower: Locator = "kp11mk".parse().unwrap();
        let upper: Locator = "KP11MK".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), "KP11MK");
    }

    #[test]
    fn test_parse_error_carries_input() {
        assert_eq!(
            Locator::parse("ZZ99ZZ"),
            Err(MoonbounceError::InvalidLocator("ZZ99ZZ".to_string()))
        );
    }

    #[test]
    fn test_decode() {
        let kp11mk: Locator = "KP11MK".parse().unwrap();
        assert_eq!(kp11mk.longitude(), 23.041666666666668);
        assert_eq!(kp11mk.latitude(), 61.4375);

        let kp00mk: Locator = "KP00MK".parse().unwrap();
        assert_eq!(kp00mk.longitude(), 21.041666666666668);
        assert_eq!(kp00mk.latitude(), 60.4375);

        let jn58td: Locator = "JN58TD".parse().unwrap();
        assert_eq!(jn58td.longitude(), 11.625);
        assert_eq!(jn58td.latitude(), 48.145833333333336);
    }

    #[test]
    fn test_decode_bounds() {
        // sweep the 64 corner combinations of the alphabet ranges
        for f0 in [b'A', b'R'] {
            for f1 in [b'A', b'R'] {
                for d in [b'0', b'9'] {
                    for s in [b'A', b'X'] {
                        let text = String::from_utf8(vec![f0, f1, d, d, s, s]).unwrap();
                        let loc = Locator::parse(&text).unwrap();
                        let lon = loc.longitude();
                        let lat = loc.latitude();
                        assert!((-180.0..180.0).contains(&lon), "{text}: lon {lon}");
                        assert!((-90.0..=90.0).contains(&lat), "{text}: lat {lat}");
                    }
                }
            }
        }

        let sw: Locator = "AA00AA".parse().unwrap();
        assert_eq!(sw.longitude(), -179.95833333333334);
        assert_eq!(sw.latitude(), -89.97916666666667);

        let ne: Locator = "RR99XX".parse().unwrap();
        assert_eq!(ne.longitude(), 179.95833333333331);
        assert_eq!(ne.latitude(), 89.97916666666666);
    }
}
