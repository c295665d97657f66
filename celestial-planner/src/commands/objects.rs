use super::{sweep, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;
use crate::visibility::ScannedObject;

/// `av`: scans the showpiece list, every object when `all` is set. A failed
/// lookup is reported, not raised, so the shell keeps running with no
/// objects shown.
pub fn viable(session: &Session, all: bool) -> Result<CommandOutput> {
    match session.scan_viable(all) {
        Ok(objects) if objects.is_empty() => {
            Ok(CommandOutput::Text("No objects with good visibility found".to_string()))
        }
        Ok(objects) => Ok(CommandOutput::Objects(objects)),
        Err(Error::Catalog(message)) => {
            tracing::warn!(%message, "object scan failed");
            Ok(CommandOutput::Text(format!("No objects found: {message}")))
        }
        Err(e) => Err(e),
    }
}

/// `sr`: looks one object up and shows its track for the reference night,
/// whatever its visibility.
pub fn search(session: &Session, name: &str) -> Result<CommandOutput> {
    let found = match session.search(&[name.to_string()]) {
        Ok(found) => found,
        Err(Error::Catalog(message)) => {
            tracing::warn!(%message, name, "object search failed");
            return Ok(CommandOutput::Text(format!(
                "No objects with name {name} found"
            )));
        }
        Err(e) => return Err(e),
    };

    let mut out = String::new();
    for (found_name, config) in &found {
        out.push_str(&format!(
            "{found_name}\n{}\n",
            config.describe(&session.display)
        ));
        out.push_str(&sweep::object_report(
            found_name,
            config,
            &session.display,
            &session.criteria,
        )?);
    }
    Ok(CommandOutput::Text(out))
}

/// Summary line of one scanned object.
pub fn summary_line(object: &ScannedObject) -> String {
    let report = &object.report;
    format!(
        "{:<20} max elevation {:>6.1}°  {:>3}/{} samples above threshold at night",
        object.name, report.max_elevation_deg, report.qualifying_samples, report.total_samples
    )
}
