//! Equatorial (RA, Dec) to horizontal (azimuth, elevation).
//!
//! The pipeline is:
//!
//! 1. reduce every input angle to radians in `[0, 2π)`
//! 2. Earth Rotation Angle from the Julian Day
//! 3. add the observer longitude to get the local rotation angle
//! 4. unit vector for the target
//! 5. `Rflip · Ry(π/2 - φ) · Rz(θ_local)` applied to that vector
//! 6. elevation from `z`, azimuth from `atan(y/x)` with quadrant fix-up
//!
//! Azimuth is measured from North through East. The x-axis mirror in step 5
//! is what turns the rotated frame's South-pointing x into North.

use crate::{ObserverLocation, Target};
use celestial_core::angle::{deg_to_rad, rad_to_deg, wrap_0_2pi};
use celestial_core::constants::{HALF_PI, J2000_JD, PI, TWOPI};
use celestial_core::RotationMatrix3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ERA at J2000.0, in turns.
const ERA_AT_J2000: f64 = 0.779_057_273_264_0;
/// Turns of the Earth per UT1 day.
const ERA_RATE: f64 = 1.002_737_811_911_354_48;

/// Result of one transform.
///
/// `era_deg` is always in `[0, 360)`. Azimuth and elevation are not
/// re-wrapped, so pathological inputs can push azimuth slightly outside
/// `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalPosition {
    pub era_deg: f64,
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
}

impl HorizontalPosition {
    pub fn compute(jd: f64, target: &Target, observer: &ObserverLocation) -> Self {
        compute_azimuth_elevation(
            jd,
            target.ra_deg(),
            target.dec_deg(),
            observer.lon_deg(),
            observer.lat_deg(),
        )
    }

    /// False at the exact zenith or nadir, where azimuth is `NaN`.
    pub fn has_azimuth(&self) -> bool {
        !self.azimuth_deg.is_nan()
    }

    pub fn is_above(&self, elevation_deg: f64) -> bool {
        self.elevation_deg > elevation_deg
    }
}

/// Earth Rotation Angle in radians, not reduced.
///
/// Linear in the Julian Day, referenced to J2000.0, with UT1 taken as UTC.
pub fn earth_rotation_angle(jd: f64) -> f64 {
    TWOPI * (ERA_AT_J2000 + ERA_RATE * (jd - J2000_JD))
}

/// Unit vector for spherical angles in radians.
pub fn spherical_to_cartesian(lon: f64, lat: f64) -> [f64; 3] {
    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    [cos_lon * cos_lat, sin_lon * cos_lat, sin_lat]
}

/// Equatorial to horizontal matrix for a local rotation angle and latitude,
/// both in radians.
///
/// Built as `Rflip · Ry(π/2 - lat) · Rz(theta_local)`; the rightmost factor
/// acts on the vector first.
pub fn horizon_matrix(theta_local: f64, lat: f64) -> RotationMatrix3 {
    let mut m = RotationMatrix3::identity();
    m.rotate_z(theta_local);
    m.rotate_y(HALF_PI - lat);
    m.flip_x();
    m
}

/// Azimuth in radians from horizontal-frame `x` and `y`.
///
/// Follows `atan(y/x)` and then shifts by π or 2π by quadrant. Where
/// `x == 0` the limit from the adjacent quadrants is used; with `y == 0`
/// as well the direction is undefined and the result is `NaN`.
fn azimuth_from_xy(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        return if y > 0.0 {
            HALF_PI
        } else if y < 0.0 {
            PI + HALF_PI
        } else {
            f64::NAN
        };
    }

    let az = (y / x).atan();
    if x < 0.0 {
        az + PI
    } else if y < 0.0 {
        az + TWOPI
    } else {
        az
    }
}

/// Azimuth and elevation of `(ra_deg, dec_deg)` seen from
/// `(lon_deg, lat_deg)` at Julian Day `jd`.
///
/// Pure arithmetic; nothing here fails. Non-finite inputs come back as
/// non-finite outputs.
pub fn compute_azimuth_elevation(
    jd: f64,
    ra_deg: f64,
    dec_deg: f64,
    lon_deg: f64,
    lat_deg: f64,
) -> HorizontalPosition {
    let ra = wrap_0_2pi(deg_to_rad(ra_deg));
    let dec = wrap_0_2pi(deg_to_rad(dec_deg));
    let lon = wrap_0_2pi(deg_to_rad(lon_deg));
    let lat = wrap_0_2pi(deg_to_rad(lat_deg));

    let theta = earth_rotation_angle(jd);
    let era = wrap_0_2pi(theta);
    let theta_local = wrap_0_2pi(theta + lon);

    let [x, y, z] = horizon_matrix(theta_local, lat).apply_to_vector(spherical_to_cartesian(ra, dec));

    // Rounding can push |z| a hair past 1.
    let elevation = HALF_PI - z.clamp(-1.0, 1.0).acos();
    let azimuth = azimuth_from_xy(x, y);

    HorizontalPosition {
        era_deg: rad_to_deg(era),
        azimuth_deg: rad_to_deg(azimuth),
        elevation_deg: rad_to_deg(elevation),
    }
}
