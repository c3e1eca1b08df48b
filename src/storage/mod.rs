//! Persistent storage for configuration and named locations

pub mod file;

pub use file::FileStore;

use crate::config::{Configuration, Locations};
use crate::error::Result;

/// Persists and retrieves the two record types the application keeps:
/// the provider configuration and the named-location table.
///
/// "No data yet" is not an error: a missing configuration loads as
/// `None` and a missing location table loads as an empty table.
pub trait StorageProvider {
    /// Load the stored configuration, if any
    fn load_configuration(&self) -> Result<Option<Configuration>>;

    /// Persist the configuration
    fn save_configuration(&self, configuration: &Configuration) -> Result<()>;

    /// Load the named-location table, empty if none has been stored
    fn load_locations(&self) -> Result<Locations>;

    /// Persist the named-location table
    fn save_locations(&self, locations: &Locations) -> Result<()>;
}
