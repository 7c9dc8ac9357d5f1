use crate::constants::Degree;
use crate::locator::Locator;

/// A ground station site, in geodetic coordinates.
///
/// Units
/// -----
/// * `longitude`: degrees, east of Greenwich positive.
/// * `latitude`: degrees, north positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub longitude: Degree,
    pub latitude: Degree,
}

impl Observer {
    pub fn new(longitude: Degree, latitude: Degree) -> Self {
        Observer {
            longitude,
            latitude,
        }
    }

    /// Site at the sub-square center of a Maidenhead locator.
    pub fn from_locator(locator: &Locator) -> Self {
        Observer {
            longitude: locator.longitude(),
            latitude: locator.latitude(),
        }
    }
}

#[cfg(test)]
mod observer_test {
    use super::*;

    #[test]
    fn test_from_locator() {
        let locator: Locator = "KP11MK".parse().unwrap();
        let site = Observer::from_locator(&locator);
        assert_eq!(site.longitude, locator.longitude());
        assert_eq!(site.latitude, locator.latitude());
        assert_eq!(site.longitude, 23.041666666666668);
        assert_eq!(site.latitude, 61.4375);
    }
}
