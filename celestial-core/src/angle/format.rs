//! Display of angles in sexagesimal or decimal notation.
//!
//! Two notations are supported, selected by [`DisplayOptions`]:
//!
//! | Mode | [`deg_to_dms`] | [`deg_to_hms`] |
//! |------|----------------|----------------|
//! | [`AngleDisplay::Sexagesimal`] | `-29° 51' 56.74"` | `13h 37m 0.92s` |
//! | [`AngleDisplay::Decimal`] | `-29.8658°` | `13.6169°` |
//!
//! In decimal mode `deg_to_hms` prints the hour value with a degree mark,
//! which is what the planner has always shown.
//!
//! # Carry rules
//!
//! Seconds that round to `60.00` at two decimals become `0` and bump the
//! minutes. Minutes that then reach `60` are reset to `0`, but the leading
//! component is *not* incremented: the whole part is taken before the carry
//! and is printed as-is. Inputs built from valid `m, s < 60` never reach
//! that branch, so round trips are exact.
//!
//! The sign is reapplied to the integer leading component only, so a value
//! in `(-1, 0)` prints with a `0` leading component and no minus sign.

use super::convert::deg_to_hours;

/// Which notation to print angles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleDisplay {
    #[default]
    Sexagesimal,
    Decimal,
}

/// Formatting choices threaded through every display call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayOptions {
    pub mode: AngleDisplay,
}

impl DisplayOptions {
    pub fn new(mode: AngleDisplay) -> Self {
        Self { mode }
    }

    pub fn decimal() -> Self {
        Self::new(AngleDisplay::Decimal)
    }

    pub fn is_decimal(&self) -> bool {
        self.mode == AngleDisplay::Decimal
    }

    /// Flips between the two notations and returns the new one.
    pub fn toggle(&mut self) -> AngleDisplay {
        self.mode = match self.mode {
            AngleDisplay::Sexagesimal => AngleDisplay::Decimal,
            AngleDisplay::Decimal => AngleDisplay::Sexagesimal,
        };
        self.mode
    }
}

/// A value split into whole units, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    /// `-1` or `1`.
    pub sign: i8,
    pub whole: u64,
    pub minutes: u32,
    pub seconds: f64,
}

impl Sexagesimal {
    /// Decomposes `|value|` with floor arithmetic and applies the carry rules
    /// described in the module docs.
    pub fn from_value(value: f64) -> Self {
        let sign = if value < 0.0 { -1 } else { 1 };
        let magnitude = value.abs();
        let whole = libm::floor(magnitude);
        let fraction_minutes = (magnitude - whole) * 60.0;
        let mut minutes = libm::floor(fraction_minutes);
        let mut seconds = (fraction_minutes - minutes) * 60.0;
        if rounds_to_sixty(seconds) {
            seconds = 0.0;
            minutes += 1.0;
        }
        if minutes == 60.0 {
            minutes = 0.0;
        }
        Self {
            sign,
            whole: whole as u64,
            minutes: minutes as u32,
            seconds,
        }
    }

    /// Whole part with the sign reapplied.
    pub fn signed_whole(&self) -> i64 {
        self.sign as i64 * self.whole as i64
    }
}

fn rounds_to_sixty(seconds: f64) -> bool {
    format!("{seconds:.2}") == "60.00"
}

/// Formats degrees as `D° M' S.SS"`, or `D.DDDD°` in decimal mode.
pub fn deg_to_dms(degrees: f64, opts: &DisplayOptions) -> String {
    if opts.is_decimal() {
        return format!("{degrees:.4}°");
    }
    let s = Sexagesimal::from_value(degrees);
    format!("{}° {}' {:.2}\"", s.signed_whole(), s.minutes, s.seconds)
}

/// Formats degrees as hours: `Hh Mm S.SSs`, or `H.HHHH°` in decimal mode.
pub fn deg_to_hms(degrees: f64, opts: &DisplayOptions) -> String {
    let hours = deg_to_hours(degrees);
    if opts.is_decimal() {
        return format!("{hours:.4}°");
    }
    let s = Sexagesimal::from_value(hours);
    format!("{}h {}m {:.2}s", s.signed_whole(), s.minutes, s.seconds)
}
