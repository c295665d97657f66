/// Julian Date of 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_TO_DAYS: f64 = 1.0 / 86_400.0;

pub const HOURS_TO_DAYS: f64 = 1.0 / 24.0;
