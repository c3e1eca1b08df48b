//! Command implementations: configure, add, list, commute
//!
//! Each command validates its own preconditions and executes
//! independently against the storage and provider collaborators it
//! carries. Validation never has side effects; a command that fails
//! validation is never run.

use crate::cli::input::Input;
use crate::config::{Configuration, DEFAULT_LOCATION_ALIAS, Locations};
use crate::error::{CommuterError, Result};
use crate::geo::{Durationer, Locator, TravelMode, format_duration};
use crate::storage::StorageProvider;
use std::time::Duration;
use tracing::{debug, info};

/// A resolved command, ready to validate and run
pub enum Command {
    Configure(ConfigureCmd),
    Add(AddCmd),
    List(ListCmd),
    Commute(CommuteCmd),
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::Configure(_) => "Configure",
            Command::Add(_) => "Add",
            Command::List(_) => "List",
            Command::Commute(_) => "Commute",
        };
        write!(f, "{name}")
    }
}

impl Command {
    /// Check the command's preconditions without side effects
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Configure(_) | Command::List(_) => Ok(()),
            Command::Add(cmd) => cmd.validate(),
            Command::Commute(cmd) => cmd.validate(),
        }
    }

    /// Execute the command
    pub fn run(&self) -> Result<()> {
        match self {
            Command::Configure(cmd) => cmd.run(),
            Command::Add(cmd) => cmd.run(),
            Command::List(cmd) => cmd.run(),
            Command::Commute(cmd) => cmd.run(),
        }
    }
}

/// Prompt for a provider API key and persist it
pub struct ConfigureCmd {
    pub input: Box<dyn Input>,
    pub store: Box<dyn StorageProvider>,
}

impl ConfigureCmd {
    pub fn run(&self) -> Result<()> {
        println!("Enter your Google Maps API key:");
        let key = self.input.read_line()?;

        let configuration = Configuration {
            api_key: key.trim().to_string(),
        };
        self.store.save_configuration(&configuration)?;

        info!("configuration saved");
        Ok(())
    }
}

/// Store one named location, overwriting any previous value
pub struct AddCmd {
    pub name: String,
    pub value: String,
    pub store: Box<dyn StorageProvider>,
}

impl AddCmd {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(CommuterError::missing_field("name"));
        }
        // An empty value is permitted; the alias is useless but harmless.
        Ok(())
    }

    pub fn run(&self) -> Result<()> {
        let mut locations = self.store.load_locations()?;
        locations.set(self.name.clone(), self.value.clone());
        self.store.save_locations(&locations)?;

        println!("Stored {}: {}", self.name, self.value);
        Ok(())
    }
}

/// Enumerate stored locations
pub struct ListCmd {
    pub store: Box<dyn StorageProvider>,
}

impl ListCmd {
    /// The stored (alias, value) pairs in stable order
    pub fn entries(&self) -> Result<Vec<(String, String)>> {
        let locations = self.store.load_locations()?;
        Ok(locations
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }

    pub fn run(&self) -> Result<()> {
        for (name, value) in self.entries()? {
            println!("{name}: {value}");
        }
        Ok(())
    }
}

/// Outcome of one travel mode's duration lookup
pub struct ModeReport {
    pub mode: TravelMode,
    pub outcome: Result<Duration>,
}

/// Resolve two endpoints and report the commute duration for each
/// selected travel mode
pub struct CommuteCmd {
    pub from: String,
    pub to: String,
    pub from_current: bool,
    pub to_current: bool,
    pub drive: bool,
    pub walk: bool,
    pub bike: bool,
    pub transit: bool,
    pub durationer: Box<dyn Durationer>,
    pub locator: Box<dyn Locator>,
    pub store: Box<dyn StorageProvider>,
}

impl CommuteCmd {
    pub fn validate(&self) -> Result<()> {
        if self.from_current && self.from != DEFAULT_LOCATION_ALIAS {
            return Err(CommuterError::conflicting_input(
                "--from and --from-current cannot be combined",
            ));
        }
        if self.to_current && self.to != DEFAULT_LOCATION_ALIAS {
            return Err(CommuterError::conflicting_input(
                "--to and --to-current cannot be combined",
            ));
        }

        // Unreachable after resolver normalization, kept as a guard.
        if self.selected_modes().is_empty() {
            return Err(CommuterError::NoTransportSelected);
        }

        Ok(())
    }

    pub fn run(&self) -> Result<()> {
        let locations = self.store.load_locations()?;
        let from = self.resolve_endpoint(&self.from, self.from_current, &locations)?;
        let to = self.resolve_endpoint(&self.to, self.to_current, &locations)?;
        info!("commute from {from:?} to {to:?}");

        for report in self.measure(&from, &to) {
            match report.outcome {
                Ok(duration) => println!("{}: {}", report.mode, format_duration(duration)),
                Err(e) => println!("{}: failed: {e}", report.mode),
            }
        }
        Ok(())
    }

    /// The selected travel modes, in reporting order
    fn selected_modes(&self) -> Vec<TravelMode> {
        TravelMode::ALL
            .into_iter()
            .filter(|mode| match mode {
                TravelMode::Drive => self.drive,
                TravelMode::Walk => self.walk,
                TravelMode::Bike => self.bike,
                TravelMode::Transit => self.transit,
            })
            .collect()
    }

    /// Turn one endpoint into a concrete location string. The current
    /// location wins over the alias table; otherwise an alias
    /// substitutes its stored value and anything else passes through
    /// as a literal address.
    fn resolve_endpoint(
        &self,
        value: &str,
        current: bool,
        locations: &Locations,
    ) -> Result<String> {
        if current {
            let (lat, lon) = self.locator.current_location()?;
            debug!("current location resolved to {lat},{lon}");
            return Ok(format!("{lat},{lon}"));
        }

        Ok(locations.resolve(value))
    }

    /// Look up the duration for every selected mode. One mode's
    /// failure never aborts the others; each outcome is reported.
    fn measure(&self, from: &str, to: &str) -> Vec<ModeReport> {
        self.selected_modes()
            .into_iter()
            .map(|mode| ModeReport {
                mode,
                outcome: self.durationer.duration(from, to, mode),
            })
            .collect()
    }
}
