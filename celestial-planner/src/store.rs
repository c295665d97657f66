use crate::configuration::ConfigurationMap;
use crate::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "configurations.json";

/// Named configurations kept as one pretty-printed JSON file.
///
/// Saving replaces the whole file. There is no locking; the last writer
/// wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection. A missing file is [`Error::StoreNotFound`].
    pub fn load(&self) -> Result<ConfigurationMap> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::StoreNotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        let configurations: ConfigurationMap = serde_json::from_str(&text)?;
        tracing::info!(
            path = %self.path.display(),
            count = configurations.len(),
            "loaded configurations"
        );
        Ok(configurations)
    }

    pub fn save(&self, configurations: &ConfigurationMap) -> Result<()> {
        let json = serde_json::to_string_pretty(configurations)?;
        fs::write(&self.path, json)?;
        tracing::info!(
            path = %self.path.display(),
            count = configurations.len(),
            "saved configurations"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::builtin_examples;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_store_not_found() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("nothing.json"));
        assert!(matches!(store.load(), Err(Error::StoreNotFound(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("configs.json"));
        let examples = builtin_examples().unwrap();
        store.save(&examples).unwrap();
        assert_eq!(store.load().unwrap(), examples);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("configs.json"));
        let mut examples = builtin_examples().unwrap();
        store.save(&examples).unwrap();
        examples.remove("veil");
        store.save(&examples).unwrap();
        assert!(!store.load().unwrap().contains_key("veil"));
    }

    #[test]
    fn corrupt_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configs.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(JsonStore::new(path).load(), Err(Error::Json(_))));
    }

    #[test]
    fn invalid_dates_are_rejected_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("configs.json");
        fs::write(
            &path,
            r#"{"bad": {
                "instant": {"year": 2021, "month": 2, "day": 30, "hour": 0, "minute": 0, "second": 0.0},
                "target": {"ra_deg": 10.0, "dec_deg": 20.0},
                "location": {"lon_deg": 10.0, "lat_deg": 50.0}
            }}"#,
        )
        .unwrap();
        assert!(matches!(JsonStore::new(path).load(), Err(Error::Json(_))));
    }
}
