use crate::CoordResult;
use celestial_core::angle::{dms_to_deg, ensure_finite};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic position of the observer, signed degrees, east and north
/// positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverLocation {
    lon_deg: f64,
    lat_deg: f64,
}

impl ObserverLocation {
    pub fn new(lon_deg: f64, lat_deg: f64) -> CoordResult<Self> {
        Ok(Self {
            lon_deg: ensure_finite("longitude", lon_deg)?,
            lat_deg: ensure_finite("latitude", lat_deg)?,
        })
    }

    pub fn from_sexagesimal(lon_dms: [f64; 3], lat_dms: [f64; 3]) -> CoordResult<Self> {
        Self::new(
            dms_to_deg(lon_dms[0], lon_dms[1], lon_dms[2]),
            dms_to_deg(lat_dms[0], lat_dms[1], lat_dms[2]),
        )
    }

    /// Dr. Karl Remeis-Sternwarte, Bamberg: 10°53'22" E, 49°53'6" N.
    pub fn remeis() -> Self {
        Self {
            lon_deg: dms_to_deg(10.0, 53.0, 22.0),
            lat_deg: dms_to_deg(49.0, 53.0, 6.0),
        }
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    pub fn with_lon(self, lon_deg: f64) -> CoordResult<Self> {
        Self::new(lon_deg, self.lat_deg)
    }

    pub fn with_lat(self, lat_deg: f64) -> CoordResult<Self> {
        Self::new(self.lon_deg, lat_deg)
    }
}

impl Default for ObserverLocation {
    fn default() -> Self {
        Self::remeis()
    }
}
