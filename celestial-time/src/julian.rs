use crate::constants::{HOURS_TO_DAYS, SECONDS_TO_DAYS, UNIX_EPOCH_JD};
use crate::{TimeError, TimeResult};
use celestial_core::constants::{J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64};
use std::fmt;

/// Two-part Julian Date.
///
/// `jd1` usually holds the midnight (".5") part and `jd2` the day fraction,
/// but any split is valid; only the sum is meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_hours(&self, hours: f64) -> Self {
        self.add_days(hours * HOURS_TO_DAYS)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// Gregorian calendar to Julian Date, split as midnight + day fraction.
    ///
    /// Fields are not range checked here; [`crate::Instant::from_civil`]
    /// does that before calling in.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let my = (month as i32 - 14) / 12;
        let iypmy = year + my;

        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month as i32 - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        let jd1 = MJD_ZERO_POINT + mjd;
        let jd2 = (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }

    /// Julian Date back to `(year, month, day, fraction_of_day)`.
    ///
    /// The fraction is measured from midnight and lies in `[0, 1)`. Dates
    /// before JD -68569.5 or after JD 1e9 are rejected.
    pub fn to_calendar(&self) -> TimeResult<(i32, u8, u8, f64)> {
        let dj = self.to_f64();
        const DJMIN: f64 = -68569.5;
        const DJMAX: f64 = 1e9;

        if !(DJMIN..=DJMAX).contains(&dj) {
            return Err(TimeError::ConversionError(format!(
                "Julian Date {} out of valid range [{}, {}]",
                dj, DJMIN, DJMAX
            )));
        }

        fn nearest_int(a: f64) -> f64 {
            if a.abs() < 0.5 {
                0.0
            } else if a < 0.0 {
                (a - 0.5).ceil()
            } else {
                (a + 0.5).floor()
            }
        }

        let day_int_1 = nearest_int(self.jd1);
        let frac_1 = self.jd1 - day_int_1;
        let mut jd = day_int_1 as i64;

        let day_int_2 = nearest_int(self.jd2);
        let frac_2 = self.jd2 - day_int_2;
        jd += day_int_2 as i64;

        // Compensated sum of 0.5 + both fractions.
        let mut sum = 0.5;
        let mut correction = 0.0;
        for frac in [frac_1, frac_2] {
            let temp = sum + frac;
            correction += if sum.abs() >= frac.abs() {
                (sum - temp) + frac
            } else {
                (frac - temp) + sum
            };
            sum = temp;

            if sum >= 1.0 {
                jd += 1;
                sum -= 1.0;
            }
        }
        let mut fraction = sum + correction;
        correction = fraction - sum;

        if fraction < 0.0 {
            fraction = sum + 1.0;
            correction += (1.0 - fraction) + sum;
            sum = fraction;
            fraction = sum + correction;
            correction = fraction - sum;
            jd -= 1;
        }

        if (fraction - 1.0) >= -f64::EPSILON / 4.0 {
            let temp = sum - 1.0;
            correction += (sum - temp) - 1.0;
            sum = temp;
            fraction = sum + correction;

            if (-f64::EPSILON / 2.0) < fraction {
                jd += 1;
                fraction = fraction.max(0.0);
            }
        }

        let mut l = jd + 68569;
        let n = (4 * l) / 146097;
        l -= (146097 * n + 3) / 4;
        let i = (4000 * (l + 1)) / 1461001;
        l -= (1461 * i) / 4 - 31;
        let k = (80 * l) / 2447;
        let day = (l - (2447 * k) / 80) as u8;
        let l_final = k / 11;
        let month = (k + 2 - 12 * l_final) as u8;
        let year = (100 * (n - 49) + i + l_final) as i32;

        Ok((year, month, day, fraction))
    }
}

/// Civil clock hour in `[0, 24)` for a Julian Date.
///
/// Julian Days start at noon, so the half-day offset is removed before
/// wrapping.
pub fn hours_from_julian_day(jd: f64) -> f64 {
    (jd * 24.0 - 12.0).rem_euclid(24.0)
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}
