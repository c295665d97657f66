use crate::Result;
use celestial_coords::{HorizontalPosition, ObserverLocation, Target};
use celestial_core::angle::{deg_to_dms, deg_to_hms};
use celestial_core::DisplayOptions;
use celestial_time::Instant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One fully specified observation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub instant: Instant,
    pub target: Target,
    pub location: ObserverLocation,
}

/// Named configurations, iterated in name order.
pub type ConfigurationMap = BTreeMap<String, Configuration>;

impl Configuration {
    pub fn new(instant: Instant, target: Target, location: ObserverLocation) -> Self {
        Self {
            instant,
            target,
            location,
        }
    }

    pub fn julian_day(&self) -> f64 {
        self.instant.to_julian_day()
    }

    pub fn transform(&self) -> HorizontalPosition {
        self.target.observe_from(&self.location, self.julian_day())
    }

    pub fn describe(&self, opts: &DisplayOptions) -> String {
        format!(
            "Time: {}\nRight Ascension: {}\nDeclination: {}\nLongitude: {}\nLatitude: {}",
            self.instant,
            deg_to_hms(self.target.ra_deg(), opts),
            deg_to_dms(self.target.dec_deg(), opts),
            deg_to_dms(self.location.lon_deg(), opts),
            deg_to_dms(self.location.lat_deg(), opts),
        )
    }
}

fn at_remeis(
    civil: (i32, u8, u8, u8, u8, f64),
    ra_hms: [f64; 3],
    dec_dms: [f64; 3],
) -> Result<Configuration> {
    let (year, month, day, hour, minute, second) = civil;
    Ok(Configuration::new(
        Instant::from_civil(year, month, day, hour, minute, second)?,
        Target::from_sexagesimal(ra_hms, dec_dms)?,
        ObserverLocation::remeis(),
    ))
}

/// The example set used when nothing has been saved yet.
pub fn builtin_examples() -> Result<ConfigurationMap> {
    let examples = [
        (
            "config1",
            at_remeis((2021, 2, 7, 22, 23, 24.0), [18.0, 18.0, 48.0], [-13.0, 48.0, 24.0])?,
        ),
        (
            "config2",
            at_remeis((2021, 1, 7, 0, 0, 0.0), [2.0, 31.0, 49.09], [89.0, 15.0, 50.8])?,
        ),
        (
            "config3",
            at_remeis((2020, 12, 23, 7, 34, 34.5), [13.0, 37.0, 0.919], [-29.0, 51.0, 56.74])?,
        ),
        (
            "m57",
            at_remeis((2024, 3, 13, 0, 0, 0.0), [18.0, 53.0, 35.097], [33.0, 1.0, 44.88])?,
        ),
        (
            "veil",
            at_remeis((2024, 3, 13, 0, 0, 0.0), [20.0, 45.0, 37.99], [39.0, 42.0, 29.9])?,
        ),
    ];

    Ok(examples
        .into_iter()
        .map(|(name, config)| (name.to_string(), config))
        .collect())
}

/// Scenario a fresh session starts from.
pub fn default_scenario() -> Result<Configuration> {
    at_remeis((2020, 12, 23, 7, 34, 34.5), [13.0, 37.0, 0.919], [-29.0, 51.0, 56.74])
}
