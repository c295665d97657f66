use crate::{CoordResult, HorizontalPosition, ObserverLocation};
use celestial_core::angle::{dms_to_deg, ensure_finite, hms_to_deg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point on the sky in equatorial coordinates, stored in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target {
    ra_deg: f64,
    dec_deg: f64,
}

impl Target {
    pub fn new(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        Ok(Self {
            ra_deg: ensure_finite("right ascension", ra_deg)?,
            dec_deg: ensure_finite("declination", dec_deg)?,
        })
    }

    /// Right ascension as `[h, m, s]`, declination as `[d, m, s]`.
    ///
    /// The sign of each triple lives on its first component.
    pub fn from_sexagesimal(ra_hms: [f64; 3], dec_dms: [f64; 3]) -> CoordResult<Self> {
        Self::new(
            hms_to_deg(ra_hms[0], ra_hms[1], ra_hms[2]),
            dms_to_deg(dec_dms[0], dec_dms[1], dec_dms[2]),
        )
    }

    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    pub fn with_ra(self, ra_deg: f64) -> CoordResult<Self> {
        Self::new(ra_deg, self.dec_deg)
    }

    pub fn with_dec(self, dec_deg: f64) -> CoordResult<Self> {
        Self::new(self.ra_deg, dec_deg)
    }

    /// Where this target sits for `observer` at Julian Day `jd`.
    pub fn observe_from(&self, observer: &ObserverLocation, jd: f64) -> HorizontalPosition {
        HorizontalPosition::compute(jd, self, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoordError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sexagesimal_sign_rides_on_first_component() {
        let t = Target::from_sexagesimal([13.0, 37.0, 0.919], [-29.0, 51.0, 56.74]).unwrap();
        assert_abs_diff_eq!(t.ra_deg(), 204.25382916666667, epsilon = 1e-9);
        assert_abs_diff_eq!(t.dec_deg(), -29.865761111111112, epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Target::new(f64::NAN, 0.0),
            Err(CoordError::InvalidCoordinate { .. })
        ));
        assert!(Target::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn with_setters_replace_one_axis() {
        let t = Target::new(10.0, 20.0).unwrap().with_dec(-5.0).unwrap();
        assert_eq!((t.ra_deg(), t.dec_deg()), (10.0, -5.0));
        assert!(t.with_ra(f64::NAN).is_err());
    }
}
