use crate::{Instant, TimeError, TimeResult};

/// Fields read from an ISO-8601 string, not yet checked against the calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl ParsedDateTime {
    pub fn to_instant(&self) -> TimeResult<Instant> {
        Instant::from_civil(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Reads `YYYY-MM-DD[(T| )HH:MM[:SS[.fff]]][Z]`.
///
/// Month, day, hour and minute may be one or two digits. A missing time
/// means midnight. Range checks happen in [`ParsedDateTime::to_instant`].
pub fn parse_iso8601(s: &str) -> TimeResult<ParsedDateTime> {
    let s = s.trim();

    const MAX_ISO8601_LENGTH: usize = 32;
    if s.is_empty() {
        return Err(TimeError::ParseError("empty datetime".to_string()));
    }
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let (date_part, time_part) = match s.find(|c| c == 'T' || c == ' ') {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let date_components: Vec<&str> = date_part.split('-').collect();
    if date_components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date_part
        )));
    }

    if date_components[0].len() != 4 {
        return Err(TimeError::ParseError(format!(
            "Invalid year format: '{}'",
            date_components[0]
        )));
    }
    let year = parse_digits(date_components[0], "year")? as i32;
    let month = parse_short_field(date_components[1], "month")?;
    let day = parse_short_field(date_components[2], "day")?;

    let (hour, minute, second) = match time_part {
        None => (0, 0, 0.0),
        Some(time) => parse_time(time)?,
    };

    Ok(ParsedDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

fn parse_time(time: &str) -> TimeResult<(u8, u8, f64)> {
    let parts: Vec<&str> = time.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(TimeError::ParseError(format!(
            "Invalid time format: '{}'. Expected HH:MM:SS",
            time
        )));
    }

    let hour = parse_short_field(parts[0], "hour")?;
    let minute = parse_short_field(parts[1], "minute")?;
    let second = match parts.get(2) {
        Some(text) => parse_seconds(text)?,
        None => 0.0,
    };

    Ok((hour, minute, second))
}

fn parse_digits(text: &str, field: &str) -> TimeResult<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!("Invalid {}: '{}'", field, text)));
    }
    text.bytes()
        .try_fold(0u32, |acc, b| acc.checked_mul(10)?.checked_add((b - b'0') as u32))
        .ok_or_else(|| TimeError::ParseError(format!("Invalid {}: '{}'", field, text)))
}

fn parse_short_field(text: &str, field: &str) -> TimeResult<u8> {
    if !(1..=2).contains(&text.len()) {
        return Err(TimeError::ParseError(format!(
            "Invalid {} format: '{}'",
            field, text
        )));
    }
    Ok(parse_digits(text, field)? as u8)
}

fn parse_seconds(text: &str) -> TimeResult<f64> {
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text, None),
    };
    if !(1..=2).contains(&whole.len()) {
        return Err(TimeError::ParseError(format!(
            "Invalid second format: '{}'",
            text
        )));
    }
    parse_digits(whole, "second")?;
    if let Some(f) = fraction {
        parse_digits(f, "fractional second")?;
    }

    text.parse::<f64>()
        .map_err(|e| TimeError::ParseError(format!("Invalid second '{}': {}", text, e)))
}
