//! JSON file storage under the user's commuter directory

use crate::config::{Configuration, Locations};
use crate::error::{CommuterError, Result};
use crate::storage::StorageProvider;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE: &str = "config.json";
const LOCATIONS_FILE: &str = "locations.json";

/// Stores each record as a pretty-printed JSON file in a single
/// directory: `$COMMUTER_HOME` if set, otherwise `$HOME/.commuter`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the user's commuter directory
    pub fn new() -> Result<Self> {
        let dir = match std::env::var_os("COMMUTER_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = std::env::var_os("HOME").ok_or_else(|| {
                    CommuterError::storage(
                        "resolve storage directory",
                        PathBuf::new(),
                        std::io::Error::new(ErrorKind::NotFound, "HOME is not set"),
                    )
                })?;
                Path::new(&home).join(".commuter")
            }
        };

        Ok(Self { dir })
    }

    /// Create a store rooted at an explicit directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read and deserialize one record file; `None` if it does not exist
    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
        let path = self.dir.join(file);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no stored record at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(CommuterError::storage("read", path, e)),
        };

        let record = serde_json::from_str(&contents)
            .map_err(|e| CommuterError::storage("parse", path, e))?;
        Ok(Some(record))
    }

    /// Serialize and write one record file, creating the directory if needed
    fn write<T: Serialize>(&self, file: &str, record: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| CommuterError::storage("create directory", &self.dir, e))?;

        let path = self.dir.join(file);
        let contents = serde_json::to_string_pretty(record)
            .map_err(|e| CommuterError::storage("serialize", &path, e))?;
        fs::write(&path, contents).map_err(|e| CommuterError::storage("write", &path, e))?;

        debug!("saved {}", path.display());
        Ok(())
    }
}

impl StorageProvider for FileStore {
    fn load_configuration(&self) -> Result<Option<Configuration>> {
        self.read(CONFIG_FILE)
    }

    fn save_configuration(&self, configuration: &Configuration) -> Result<()> {
        self.write(CONFIG_FILE, configuration)
    }

    fn load_locations(&self) -> Result<Locations> {
        Ok(self.read(LOCATIONS_FILE)?.unwrap_or_default())
    }

    fn save_locations(&self, locations: &Locations) -> Result<()> {
        self.write(LOCATIONS_FILE, locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_configuration_loads_as_none() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::with_dir(tmp.path());

        assert!(store.load_configuration().unwrap().is_none());
    }

    #[test]
    fn test_missing_locations_load_as_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::with_dir(tmp.path());

        assert!(store.load_locations().unwrap().is_empty());
    }

    #[test]
    fn test_configuration_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::with_dir(tmp.path().join("nested"));

        let configuration = Configuration {
            api_key: "abc123".to_string(),
        };
        store.save_configuration(&configuration).unwrap();

        let loaded = store.load_configuration().unwrap().unwrap();
        assert_eq!(loaded.api_key, "abc123");
    }

    #[test]
    fn test_locations_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::with_dir(tmp.path());

        let mut locations = Locations::default();
        locations.set("home", "123 Main St.");
        locations.set("work", "1 Office Way");
        store.save_locations(&locations).unwrap();

        let loaded = store.load_locations().unwrap();
        assert_eq!(loaded, locations);
    }

    #[test]
    fn test_corrupt_record_is_a_storage_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "not json").unwrap();
        let store = FileStore::with_dir(tmp.path());

        let err = store.load_configuration().unwrap_err();
        assert!(matches!(err, CommuterError::Storage { .. }));
    }
}
