use crate::julian::JulianDate;
use crate::parsing::parse_iso8601;
use crate::{TimeError, TimeResult};
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

const MIN_YEAR: i32 = -4799;
const MAX_YEAR: i32 = 9999;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Civil calendar fields of a UTC timestamp, without the derived Julian Date.
///
/// This is the shape an [`Instant`] takes on disk.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

/// A validated UTC instant.
///
/// The Julian Date is computed once at construction and cannot be changed
/// independently of the civil fields.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CivilTime", into = "CivilTime")
)]
pub struct Instant {
    civil: CivilTime,
    jd: JulianDate,
}

impl Instant {
    /// Builds an instant from civil UTC fields, rejecting anything outside
    /// the calendar.
    ///
    /// ```
    /// use celestial_time::Instant;
    ///
    /// let t = Instant::from_civil(2023, 1, 2, 0, 0, 0.0).unwrap();
    /// assert_eq!(t.to_julian_day(), 2459946.5);
    /// assert!(Instant::from_civil(2023, 2, 29, 0, 0, 0.0).is_err());
    /// ```
    pub fn from_civil(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> TimeResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::InvalidDate(format!(
                "year {year} out of range {MIN_YEAR}-{MAX_YEAR}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!(
                "month {month} out of range 1-12"
            )));
        }
        let last_day = days_in_month(year, month);
        if day == 0 || day > last_day {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of range 1-{last_day} for {year}-{month:02}"
            )));
        }
        if hour > 23 {
            return Err(TimeError::InvalidDate(format!(
                "hour {hour} out of range 0-23"
            )));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate(format!(
                "minute {minute} out of range 0-59"
            )));
        }
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate(format!(
                "second {second} out of range [0, 60)"
            )));
        }

        Ok(Self {
            civil: CivilTime {
                year,
                month,
                day,
                hour,
                minute,
                second,
            },
            jd: JulianDate::from_calendar(year, month, day, hour, minute, second),
        })
    }

    /// Converts a Julian Date to the nearest millisecond instant.
    pub fn from_julian_date(jd: JulianDate) -> TimeResult<Self> {
        let (mut year, mut month, mut day, fraction) = jd.to_calendar()?;
        let mut millis = (fraction * MILLIS_PER_DAY).round();
        if millis >= MILLIS_PER_DAY {
            (year, month, day, _) = jd.add_days(1.0).to_calendar()?;
            millis = 0.0;
        }

        let millis = millis as u64;
        let hour = (millis / 3_600_000) as u8;
        let minute = ((millis / 60_000) % 60) as u8;
        let second = (millis % 60_000) as f64 / 1000.0;

        Self::from_civil(year, month, day, hour, minute, second)
    }

    /// Current wall-clock time.
    pub fn now() -> TimeResult<Self> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeError::ConversionError(format!("system clock before 1970: {e}")))?;
        Self::from_julian_date(JulianDate::unix_epoch().add_seconds(elapsed.as_secs_f64()))
    }

    pub fn year(&self) -> i32 {
        self.civil.year
    }

    pub fn month(&self) -> u8 {
        self.civil.month
    }

    pub fn day(&self) -> u8 {
        self.civil.day
    }

    pub fn hour(&self) -> u8 {
        self.civil.hour
    }

    pub fn minute(&self) -> u8 {
        self.civil.minute
    }

    pub fn second(&self) -> f64 {
        self.civil.second
    }

    pub fn civil(&self) -> CivilTime {
        self.civil
    }

    pub fn julian_date(&self) -> JulianDate {
        self.jd
    }

    pub fn to_julian_day(&self) -> f64 {
        self.jd.to_f64()
    }

    /// `YYYY-MM-DDTHH:MM:SS.sss`
    pub fn to_iso8601(&self) -> String {
        let c = &self.civil;
        // Clamp so 59.9996 does not print as 60.000.
        let millis = (c.second * 1000.0).round().min(59_999.0);
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            c.year,
            c.month,
            c.day,
            c.hour,
            c.minute,
            millis / 1000.0
        )
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        parse_iso8601(s)?.to_instant()
    }
}

impl TryFrom<CivilTime> for Instant {
    type Error = TimeError;

    fn try_from(c: CivilTime) -> TimeResult<Self> {
        Self::from_civil(c.year, c.month, c.day, c.hour, c.minute, c.second)
    }
}

impl From<Instant> for CivilTime {
    fn from(instant: Instant) -> Self {
        instant.civil
    }
}
