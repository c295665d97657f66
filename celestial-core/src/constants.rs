/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2451545.0;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

pub const ARCMIN_PER_DEGREE: f64 = 60.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;
