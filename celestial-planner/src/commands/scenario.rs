//! Commands that edit or evaluate the current scenario.

use super::{help, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;
use celestial_core::angle::{parse_components, parse_sexagesimal};
use celestial_time::{parse_iso8601, ParsedDateTime};

/// An angle as typed: one decimal value, or up to three sexagesimal
/// components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleInput {
    Degrees(f64),
    Sexagesimal([f64; 3]),
}

/// `45.5` is decimal degrees; `2 31 49.09`, `-29 51` or `13:37:0.9` are
/// sexagesimal.
pub fn parse_angle_args(command: &str, args: &[&str]) -> Result<AngleInput> {
    match args {
        [] => Err(Error::Parse(format!("usage: {}", help::usage(command)))),
        [single] if single.contains(':') => Ok(AngleInput::Sexagesimal(parse_sexagesimal(single)?)),
        [single] => single
            .parse::<f64>()
            .map(AngleInput::Degrees)
            .map_err(|e| Error::Parse(format!("invalid angle '{single}': {e}"))),
        parts => Ok(AngleInput::Sexagesimal(parse_components(parts)?)),
    }
}

/// Accepts one ISO-8601 string or `year month day [hour [minute [second]]]`.
pub fn parse_time_args(args: &[&str]) -> Result<ParsedDateTime> {
    match args {
        [iso] => Ok(parse_iso8601(iso)?),
        [year, month, day, rest @ ..] if rest.len() <= 3 => {
            let field = |name: &str, text: &str| -> Result<u8> {
                text.parse()
                    .map_err(|_| Error::Parse(format!("invalid {name}: '{text}'")))
            };
            let second = match rest.get(2) {
                Some(text) => text
                    .parse::<f64>()
                    .map_err(|_| Error::Parse(format!("invalid second: '{text}'")))?,
                None => 0.0,
            };
            Ok(ParsedDateTime {
                year: year
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid year: '{year}'")))?,
                month: field("month", month)?,
                day: field("day", day)?,
                hour: rest.first().map_or(Ok(0), |h| field("hour", h))?,
                minute: rest.get(1).map_or(Ok(0), |m| field("minute", m))?,
                second,
            })
        }
        _ => Err(Error::Parse(format!("usage: {}", help::usage("ctime")))),
    }
}

pub fn set_time(session: &mut Session, time: &ParsedDateTime) -> Result<CommandOutput> {
    let iso = session.set_instant(time.to_instant()?);
    Ok(CommandOutput::Text(format!("Time set to {iso}")))
}

pub fn set_ra(session: &mut Session, input: AngleInput) -> Result<CommandOutput> {
    let shown = match input {
        AngleInput::Degrees(deg) => session.set_ra_deg(deg)?,
        AngleInput::Sexagesimal(hms) => session.set_ra_hms(hms)?,
    };
    Ok(CommandOutput::Text(format!("Right Ascension set to {shown}")))
}

pub fn set_dec(session: &mut Session, input: AngleInput) -> Result<CommandOutput> {
    let shown = match input {
        AngleInput::Degrees(deg) => session.set_dec_deg(deg)?,
        AngleInput::Sexagesimal(dms) => session.set_dec_dms(dms)?,
    };
    Ok(CommandOutput::Text(format!("Declination set to {shown}")))
}

pub fn set_lon(session: &mut Session, input: AngleInput) -> Result<CommandOutput> {
    let shown = match input {
        AngleInput::Degrees(deg) => session.set_lon_deg(deg)?,
        AngleInput::Sexagesimal(dms) => session.set_lon_dms(dms)?,
    };
    Ok(CommandOutput::Text(format!("Longitude set to {shown}")))
}

pub fn set_lat(session: &mut Session, input: AngleInput) -> Result<CommandOutput> {
    let shown = match input {
        AngleInput::Degrees(deg) => session.set_lat_deg(deg)?,
        AngleInput::Sexagesimal(dms) => session.set_lat_dms(dms)?,
    };
    Ok(CommandOutput::Text(format!("Latitude set to {shown}")))
}

pub fn reset_location(session: &mut Session) -> Result<CommandOutput> {
    session.reset_location();
    Ok(CommandOutput::Text("Location reset to Remeis".to_string()))
}

pub fn reset_time(session: &mut Session) -> Result<CommandOutput> {
    session.reset_time();
    Ok(CommandOutput::Text("Time reset to current time".to_string()))
}

pub fn execute(session: &Session, name: Option<&str>) -> Result<CommandOutput> {
    let pos = match name {
        Some(name) => session.execute_named(name)?,
        None => session.execute()?,
    };
    Ok(CommandOutput::Text(session.format_solution(&pos)))
}

pub fn show(session: &Session) -> Result<CommandOutput> {
    Ok(CommandOutput::Text(session.describe_current()?))
}
