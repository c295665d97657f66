use crate::catalog::{default_object_names, search_objects, Catalog, SimbadCatalog};
use crate::configuration::{builtin_examples, default_scenario, Configuration, ConfigurationMap};
use crate::error::{Error, Result};
use crate::store::JsonStore;
use crate::visibility::{scan_reference_instant, scan_viable_objects, ScannedObject, VisibilityCriteria};
use celestial_coords::{HorizontalPosition, ObserverLocation, Target};
use celestial_core::angle::{deg_to_dms, deg_to_hms, dms_to_deg, hms_to_deg};
use celestial_core::{AngleDisplay, DisplayOptions};
use celestial_time::{ClockSource, Instant};

/// Working state of the planner shell.
pub struct Session {
    pub clock: ClockSource,
    pub target: Target,
    pub location: ObserverLocation,
    pub display: DisplayOptions,
    pub configurations: ConfigurationMap,
    pub criteria: VisibilityCriteria,
    catalog: Box<dyn Catalog>,
}

impl Session {
    /// Session backed by SIMBAD, starting from the default scenario and the
    /// built-in example set.
    pub fn new() -> Result<Self> {
        Self::with_catalog(Box::new(SimbadCatalog::default()))
    }

    pub fn with_catalog(catalog: Box<dyn Catalog>) -> Result<Self> {
        let scenario = default_scenario()?;
        Ok(Self {
            clock: ClockSource::Fixed(scenario.instant),
            target: scenario.target,
            location: scenario.location,
            display: DisplayOptions::default(),
            configurations: builtin_examples()?,
            criteria: VisibilityCriteria::default(),
            catalog,
        })
    }

    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    // --- current scenario ---

    pub fn current_instant(&self) -> Result<Instant> {
        Ok(self.clock.resolve()?)
    }

    pub fn current_configuration(&self) -> Result<Configuration> {
        Ok(Configuration::new(
            self.current_instant()?,
            self.target,
            self.location,
        ))
    }

    /// Pins the clock to a civil UTC time and returns it as ISO text.
    pub fn set_time(
        &mut self,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<String> {
        let instant = Instant::from_civil(year, month, day, hour, minute, second)?;
        Ok(self.set_instant(instant))
    }

    pub fn set_instant(&mut self, instant: Instant) -> String {
        self.clock = ClockSource::Fixed(instant);
        instant.to_iso8601()
    }

    pub fn set_ra_hms(&mut self, hms: [f64; 3]) -> Result<String> {
        self.set_ra_deg(hms_to_deg(hms[0], hms[1], hms[2]))
    }

    pub fn set_ra_deg(&mut self, ra_deg: f64) -> Result<String> {
        self.target = self.target.with_ra(ra_deg)?;
        Ok(deg_to_hms(self.target.ra_deg(), &self.display))
    }

    pub fn set_dec_dms(&mut self, dms: [f64; 3]) -> Result<String> {
        self.set_dec_deg(dms_to_deg(dms[0], dms[1], dms[2]))
    }

    pub fn set_dec_deg(&mut self, dec_deg: f64) -> Result<String> {
        self.target = self.target.with_dec(dec_deg)?;
        Ok(deg_to_dms(self.target.dec_deg(), &self.display))
    }

    pub fn set_lon_dms(&mut self, dms: [f64; 3]) -> Result<String> {
        self.set_lon_deg(dms_to_deg(dms[0], dms[1], dms[2]))
    }

    pub fn set_lon_deg(&mut self, lon_deg: f64) -> Result<String> {
        self.location = self.location.with_lon(lon_deg)?;
        Ok(deg_to_dms(self.location.lon_deg(), &self.display))
    }

    pub fn set_lat_dms(&mut self, dms: [f64; 3]) -> Result<String> {
        self.set_lat_deg(dms_to_deg(dms[0], dms[1], dms[2]))
    }

    pub fn set_lat_deg(&mut self, lat_deg: f64) -> Result<String> {
        self.location = self.location.with_lat(lat_deg)?;
        Ok(deg_to_dms(self.location.lat_deg(), &self.display))
    }

    /// Follow the wall clock again.
    pub fn reset_time(&mut self) {
        self.clock = ClockSource::Live;
    }

    pub fn reset_location(&mut self) {
        self.location = ObserverLocation::remeis();
    }

    pub fn toggle_output_mode(&mut self) -> AngleDisplay {
        self.display.toggle()
    }

    pub fn execute(&self) -> Result<HorizontalPosition> {
        Ok(self.current_configuration()?.transform())
    }

    pub fn describe_current(&self) -> Result<String> {
        let instant = self.current_instant()?;
        let clock = if self.clock.is_live() {
            " (current time)"
        } else {
            ""
        };
        Ok(format!(
            "Time set to {}{}\nRight Ascension set to {}\nDeclination set to {}\nLongitude set to {}\nLatitude set to {}",
            instant,
            clock,
            deg_to_hms(self.target.ra_deg(), &self.display),
            deg_to_dms(self.target.dec_deg(), &self.display),
            deg_to_dms(self.location.lon_deg(), &self.display),
            deg_to_dms(self.location.lat_deg(), &self.display),
        ))
    }

    pub fn format_solution(&self, pos: &HorizontalPosition) -> String {
        format!(
            "Era: {:.4}\nAzimuth: {}\nElevation: {}",
            pos.era_deg,
            deg_to_dms(pos.azimuth_deg, &self.display),
            deg_to_dms(pos.elevation_deg, &self.display),
        )
    }

    // --- named configurations ---

    pub fn get(&self, name: &str) -> Result<&Configuration> {
        self.configurations
            .get(name)
            .ok_or_else(|| Error::MissingConfiguration(name.to_string()))
    }

    /// Stores the current scenario. Without a name the first free
    /// `configN` is used. Returns the name it was stored under.
    pub fn add(&mut self, name: Option<&str>) -> Result<String> {
        let name = match name {
            Some(name) if name.trim().is_empty() => {
                return Err(Error::Parse("configuration name must not be blank".to_string()));
            }
            Some(name) if self.configurations.contains_key(name) => {
                return Err(Error::DuplicateConfiguration(name.to_string()));
            }
            Some(name) => name.to_string(),
            None => self.next_free_name(),
        };
        let config = self.current_configuration()?;
        self.configurations.insert(name.clone(), config);
        Ok(name)
    }

    fn next_free_name(&self) -> String {
        (1..)
            .map(|n| format!("config{n}"))
            .find(|name| !self.configurations.contains_key(name))
            .unwrap_or_default()
    }

    pub fn remove(&mut self, name: &str) -> Result<Configuration> {
        self.configurations
            .remove(name)
            .ok_or_else(|| Error::MissingConfiguration(name.to_string()))
    }

    /// Makes a stored configuration current and pins the clock to its time.
    pub fn load(&mut self, name: &str) -> Result<()> {
        let config = *self.get(name)?;
        self.clock = ClockSource::Fixed(config.instant);
        self.target = config.target;
        self.location = config.location;
        Ok(())
    }

    pub fn list(&self) -> impl Iterator<Item = (&String, &Configuration)> {
        self.configurations.iter()
    }

    pub fn execute_named(&self, name: &str) -> Result<HorizontalPosition> {
        Ok(self.get(name)?.transform())
    }

    // --- persistence ---

    /// Replaces the collection with the store's contents. On first run the
    /// built-in examples are used instead and `false` is returned.
    pub fn load_store(&mut self, store: &JsonStore) -> Result<bool> {
        match store.load() {
            Ok(configurations) => {
                self.configurations = configurations;
                Ok(true)
            }
            Err(Error::StoreNotFound(path)) => {
                tracing::info!(path = %path.display(), "no saved configurations, using examples");
                self.configurations = builtin_examples()?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// [`load_store`](Self::load_store) for startup: a file that exists
    /// but cannot be read or parsed is logged and the collection stays as it
    /// was. Returns `false` in that case so the caller can leave the file
    /// alone instead of overwriting it.
    pub fn load_store_or_keep(&mut self, store: &JsonStore) -> bool {
        match self.load_store(store) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(
                    path = %store.path().display(),
                    error = %e,
                    "could not read saved configurations, keeping examples"
                );
                false
            }
        }
    }

    pub fn save_store(&self, store: &JsonStore) -> Result<()> {
        store.save(&self.configurations)
    }

    // --- catalog ---

    /// Scans the default object list from the reference night at Remeis.
    /// `show_all` reports every object for this scan only.
    pub fn scan_viable(&self, show_all: bool) -> Result<Vec<ScannedObject>> {
        let objects = self.catalog.lookup(&default_object_names())?;
        let criteria = VisibilityCriteria {
            show_all: self.criteria.show_all || show_all,
            ..self.criteria
        };
        scan_viable_objects(
            &objects,
            &ObserverLocation::remeis(),
            &scan_reference_instant()?,
            &criteria,
        )
    }

    pub fn search(&self, names: &[String]) -> Result<Vec<(String, Configuration)>> {
        search_objects(
            self.catalog.as_ref(),
            names,
            &scan_reference_instant()?,
            &ObserverLocation::remeis(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, StaticCatalog};
    use approx::assert_abs_diff_eq;

    fn session() -> Session {
        Session::with_catalog(Box::new(StaticCatalog::default())).unwrap()
    }

    #[test]
    fn new_session_defaults() {
        let s = session();
        assert!(!s.clock.is_live());
        assert_eq!(s.configurations.len(), 5);
        assert_eq!(s.location, ObserverLocation::remeis());
        let pos = s.execute().unwrap();
        assert_abs_diff_eq!(pos.azimuth_deg, 190.8129, epsilon = 1e-3);
    }

    #[test]
    fn setters_return_formatted_values() {
        let mut s = session();
        assert_eq!(s.set_ra_hms([2.0, 31.0, 49.09]).unwrap(), "2h 31m 49.09s");
        assert_eq!(s.set_dec_dms([89.0, 15.0, 50.8]).unwrap(), "89° 15' 50.80\"");
        assert_eq!(s.set_lon_deg(11.5).unwrap(), "11° 30' 0.00\"");
        assert_eq!(s.set_lat_dms([-33.0, 30.0, 0.0]).unwrap(), "-33° 30' 0.00\"");
        assert_eq!(
            s.set_time(2021, 1, 7, 0, 0, 0.0).unwrap(),
            "2021-01-07T00:00:00.000"
        );
        assert!(s.set_time(2021, 2, 30, 0, 0, 0.0).is_err());
        assert!(s.set_ra_deg(f64::NAN).is_err());
    }

    #[test]
    fn setters_respect_display_mode() {
        let mut s = session();
        s.toggle_output_mode();
        assert_eq!(s.set_dec_deg(-29.5).unwrap(), "-29.5000°");
        assert_eq!(s.set_ra_deg(180.0).unwrap(), "12.0000°");
    }

    #[test]
    fn toggling_twice_restores_formatting() {
        let mut s = session();
        let before = s.describe_current().unwrap();
        assert_eq!(s.toggle_output_mode(), AngleDisplay::Decimal);
        assert_ne!(s.describe_current().unwrap(), before);
        assert_eq!(s.toggle_output_mode(), AngleDisplay::Sexagesimal);
        assert_eq!(s.describe_current().unwrap(), before);
    }

    #[test]
    fn reset_time_and_location() {
        let mut s = session();
        s.set_lon_deg(-70.0).unwrap();
        s.reset_location();
        assert_eq!(s.location, ObserverLocation::remeis());

        s.reset_time();
        assert!(s.clock.is_live());
        assert!(s.describe_current().unwrap().contains("(current time)"));
    }

    #[test]
    fn add_auto_names_skip_taken() {
        let mut s = session();
        // config1..config3 are built in.
        assert_eq!(s.add(None).unwrap(), "config4");
        assert_eq!(s.add(None).unwrap(), "config5");
        s.remove("config2").unwrap();
        assert_eq!(s.add(None).unwrap(), "config2");
    }

    #[test]
    fn add_duplicate_name_is_rejected_without_change() {
        let mut s = session();
        let before = s.configurations.clone();
        assert!(matches!(
            s.add(Some("m57")),
            Err(Error::DuplicateConfiguration(name)) if name == "m57"
        ));
        assert_eq!(s.configurations, before);
        assert_eq!(s.add(Some("tonight")).unwrap(), "tonight");
    }

    #[test]
    fn missing_names_do_not_mutate() {
        let mut s = session();
        let before = s.configurations.clone();
        let target = s.target;
        assert!(matches!(s.remove("nope"), Err(Error::MissingConfiguration(_))));
        assert!(matches!(s.load("nope"), Err(Error::MissingConfiguration(_))));
        assert!(matches!(s.execute_named("nope"), Err(Error::MissingConfiguration(_))));
        assert_eq!(s.configurations, before);
        assert_eq!(s.target, target);
    }

    #[test]
    fn load_makes_configuration_current() {
        let mut s = session();
        s.reset_time();
        s.load("m57").unwrap();
        let m57 = *s.get("m57").unwrap();
        assert_eq!(s.current_configuration().unwrap(), m57);
        assert_eq!(s.clock, ClockSource::Fixed(m57.instant));
        assert_eq!(s.execute().unwrap(), s.execute_named("m57").unwrap());
    }

    #[test]
    fn search_uses_catalog() {
        let catalog = StaticCatalog::new(vec![CatalogEntry::new(
            "M57",
            [18.0, 53.0, 35.097],
            [33.0, 1.0, 44.88],
        )]);
        let s = Session::with_catalog(Box::new(catalog)).unwrap();
        let found = s.search(&["M57".to_string()]).unwrap();
        assert_eq!(found.len(), 1);
        assert!(s.search(&["M13".to_string()]).is_err());
    }

    #[test]
    fn scan_fails_when_catalog_cannot_resolve_batch() {
        let s = session();
        assert!(matches!(s.scan_viable(false), Err(Error::Catalog(_))));
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut s = session();
        let before = s.configurations.len();
        assert!(matches!(s.add(Some("")), Err(Error::Parse(_))));
        assert!(matches!(s.add(Some("   ")), Err(Error::Parse(_))));
        assert_eq!(s.configurations.len(), before);
    }

    #[test]
    fn unreadable_store_keeps_examples() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("configurations.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonStore::new(path.clone());

        let mut s = session();
        assert!(matches!(s.load_store(&store), Err(Error::Json(_))));
        assert!(!s.load_store_or_keep(&store));
        assert_eq!(s.configurations, builtin_examples().unwrap());
    }

    #[test]
    fn missing_store_is_writable() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("configurations.json"));
        let mut s = session();
        assert!(s.load_store_or_keep(&store));
    }

    #[test]
    fn show_all_scan_lists_objects_below_cutoff() {
        let below_horizon = default_object_names()
            .into_iter()
            .map(|name| CatalogEntry::new(name, [6.0, 0.0, 0.0], [-75.0, 0.0, 0.0]))
            .collect();
        let s = Session::with_catalog(Box::new(StaticCatalog::new(below_horizon))).unwrap();

        assert!(s.scan_viable(false).unwrap().is_empty());
        let all = s.scan_viable(true).unwrap();
        assert_eq!(all.len(), default_object_names().len());
        assert!(all.iter().all(|o| !o.report.viable));
        assert!(!s.criteria.show_all);
    }
}
