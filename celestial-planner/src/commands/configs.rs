use super::CommandOutput;
use crate::error::Result;
use crate::session::Session;
use celestial_core::angle::{deg_to_dms, deg_to_hms};
use celestial_core::AngleDisplay;

pub fn save(session: &mut Session, name: Option<&str>) -> Result<CommandOutput> {
    let name = session.add(name)?;
    Ok(CommandOutput::Text(format!("Saved configuration {name}")))
}

pub fn load(session: &mut Session, name: &str) -> Result<CommandOutput> {
    session.load(name)?;
    Ok(CommandOutput::Text(format!(
        "Loaded configuration {name}\n{}",
        session.describe_current()?
    )))
}

pub fn remove(session: &mut Session, name: &str) -> Result<CommandOutput> {
    session.remove(name)?;
    Ok(CommandOutput::Text(format!("Deleted configuration {name}")))
}

pub fn list(session: &Session) -> Result<CommandOutput> {
    if session.configurations.is_empty() {
        return Ok(CommandOutput::Text("No saved configurations".to_string()));
    }
    let opts = &session.display;
    let headers = ["Name", "Time", "RA", "Dec", "Lon", "Lat"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let rows = session
        .list()
        .map(|(name, config)| {
            vec![
                name.clone(),
                config.instant.to_string(),
                deg_to_hms(config.target.ra_deg(), opts),
                deg_to_dms(config.target.dec_deg(), opts),
                deg_to_dms(config.location.lon_deg(), opts),
                deg_to_dms(config.location.lat_deg(), opts),
            ]
        })
        .collect();
    Ok(CommandOutput::Table { headers, rows })
}

pub fn toggle_output(session: &mut Session) -> Result<CommandOutput> {
    let text = match session.toggle_output_mode() {
        AngleDisplay::Decimal => "Output mode: decimal",
        AngleDisplay::Sexagesimal => "Output mode: sexagesimal",
    };
    Ok(CommandOutput::Text(text.to_string()))
}
