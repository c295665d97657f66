//! Object coordinate lookup.
//!
//! A lookup is all or nothing: if any name in the batch cannot be resolved
//! the whole call fails and the caller sees no objects.

use crate::configuration::Configuration;
use crate::{Error, Result};
use celestial_coords::{ObserverLocation, Target};
use celestial_core::angle::parse_sexagesimal;
use celestial_time::Instant;
use std::time::Duration;

pub const SIMBAD_SCRIPT_URL: &str = "https://simbad.cds.unistra.fr/simbad/sim-script";

/// Showpiece objects scanned by default.
pub const DEFAULT_OBJECTS: &[&str] = &[
    "α Pavonis",
    "Albireo",
    "δ Cyg",
    "η Carinae",
    "Veil Nebula",
    "Leo Triplet",
    "NGC4402",
    "Stephan's Quintet",
    "M1",
    "M13",
    "M16",
    "M20",
    "M31",
    "M33",
    "M35",
    "M42",
    "M45",
    "M51",
    "M57",
    "M63",
    "M78",
    "M81",
    "M82",
    "M95",
    "M96",
    "M97",
    "M101",
    "M108",
    "NGC281",
    "NGC869",
    "NGC884",
    "NGC1499",
    "NGC2237",
    "NGC2264",
    "NGC3521",
    "NGC4438",
    "NGC4565",
    "NGC4631",
    "NGC5139",
    "NGC7000",
    "NGC7023",
    "NGC7293",
    "NGC7331",
    "NGC7635",
    "IC405",
    "IC434",
    "IC443",
    "IC1396",
    "IC1805",
    "IC1848",
    "IC5146",
    "Melotte 15",
];

pub fn default_object_names() -> Vec<String> {
    DEFAULT_OBJECTS.iter().map(|s| s.to_string()).collect()
}

/// Catalog coordinates of one object: RA as `[h, m, s]`, Dec as `[d, m, s]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub ra: [f64; 3],
    pub dec: [f64; 3],
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, ra: [f64; 3], dec: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            ra,
            dec,
        }
    }

    pub fn target(&self) -> Result<Target> {
        Ok(Target::from_sexagesimal(self.ra, self.dec)?)
    }
}

pub trait Catalog {
    /// Resolves every name, in order, or fails the whole batch.
    fn lookup(&self, names: &[String]) -> Result<Vec<CatalogEntry>>;
}

/// Queries the SIMBAD script service with one request per batch.
#[derive(Debug, Clone)]
pub struct SimbadCatalog {
    endpoint: String,
    timeout: Duration,
}

impl Default for SimbadCatalog {
    fn default() -> Self {
        Self::new(SIMBAD_SCRIPT_URL)
    }
}

impl SimbadCatalog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Catalog for SimbadCatalog {
    fn lookup(&self, names: &[String]) -> Result<Vec<CatalogEntry>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(count = names.len(), endpoint = %self.endpoint, "querying SIMBAD");
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Catalog(e.to_string()))?;

        let body = client
            .post(&self.endpoint)
            .form(&[("script", build_script(names))])
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| {
                tracing::warn!(error = %e, "SIMBAD request failed");
                Error::Catalog(e.to_string())
            })?;

        parse_script_response(names, &body)
    }
}

/// SIMBAD script asking for `id|RA|DEC` per object, sexagesimal, one line
/// each.
pub fn build_script(names: &[String]) -> String {
    let mut script = String::from(
        "output console=off script=off\nformat object \"%IDLIST(1)|%COO(A)|%COO(D)\"\n",
    );
    for name in names {
        script.push_str("query id ");
        script.push_str(name);
        script.push('\n');
    }
    script
}

/// Pairs the data lines of a script response with the queried names.
///
/// An `::error::` section or a line count that does not match the names
/// fails the whole batch.
pub fn parse_script_response(names: &[String], body: &str) -> Result<Vec<CatalogEntry>> {
    if let Some(pos) = body.find("::error::") {
        let detail = body[pos..]
            .lines()
            .skip(1)
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("unknown error");
        return Err(Error::Catalog(detail.to_string()));
    }

    let data = match body.find("::data::") {
        Some(pos) => body[pos..].split_once('\n').map_or("", |(_, rest)| rest),
        None => body,
    };
    let lines: Vec<&str> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() != names.len() {
        return Err(Error::Catalog(format!(
            "expected {} objects, got {}",
            names.len(),
            lines.len()
        )));
    }

    names
        .iter()
        .zip(lines)
        .map(|(name, line)| parse_data_line(name, line))
        .collect()
}

fn parse_data_line(name: &str, line: &str) -> Result<CatalogEntry> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    let [_, ra, dec] = fields.as_slice() else {
        return Err(Error::Catalog(format!(
            "malformed line for {name}: '{line}'"
        )));
    };
    Ok(CatalogEntry::new(
        name,
        parse_sexagesimal(ra)?,
        parse_sexagesimal(dec)?,
    ))
}

/// Fixed entries, for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, names: &[String]) -> Result<Vec<CatalogEntry>> {
        names
            .iter()
            .map(|name| {
                self.entries
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(name))
                    .map(|e| CatalogEntry::new(name.clone(), e.ra, e.dec))
                    .ok_or_else(|| Error::Catalog(format!("no object named {name}")))
            })
            .collect()
    }
}

/// Looks up `names` and builds configurations at the given instant and
/// location, without any visibility filtering.
pub fn search_objects(
    catalog: &dyn Catalog,
    names: &[String],
    reference: &Instant,
    observer: &ObserverLocation,
) -> Result<Vec<(String, Configuration)>> {
    catalog
        .lookup(names)?
        .into_iter()
        .map(|entry| {
            let config = Configuration::new(*reference, entry.target()?, *observer);
            Ok((entry.name, config))
        })
        .collect()
}
