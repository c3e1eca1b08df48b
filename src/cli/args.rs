//! Flag sets for the add and commute sub-parsers

use crate::config::DEFAULT_LOCATION_ALIAS;
use clap::Parser;

/// Store a named location
#[derive(Parser, Debug)]
#[command(name = "commuter add")]
pub struct AddArgs {
    /// Alias for the location, e.g. "home"
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Address or "lat,lon" to store under the alias
    #[arg(short, long, default_value = "")]
    pub location: String,
}

/// Check the commute between two locations
#[derive(Parser, Debug)]
#[command(name = "commuter")]
pub struct CommuteArgs {
    /// Starting location: an alias, an address, or "lat,lon"
    #[arg(long, default_value = DEFAULT_LOCATION_ALIAS)]
    pub from: String,

    /// Use the device's current location as the starting point
    #[arg(long)]
    pub from_current: bool,

    /// Destination: an alias, an address, or "lat,lon"
    #[arg(long, default_value = DEFAULT_LOCATION_ALIAS)]
    pub to: String,

    /// Use the device's current location as the destination
    #[arg(long)]
    pub to_current: bool,

    /// Check the driving duration
    #[arg(long)]
    pub drive: bool,

    /// Check the walking duration
    #[arg(long)]
    pub walk: bool,

    /// Check the cycling duration
    #[arg(long)]
    pub bike: bool,

    /// Check the public transit duration
    #[arg(long)]
    pub transit: bool,
}

impl CommuteArgs {
    /// Default to driving when no other method of transport is selected
    pub fn normalize_modes(&mut self) {
        if !self.walk && !self.bike && !self.transit {
            self.drive = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_args() {
        let args =
            AddArgs::try_parse_from(["add", "--name", "home", "--location", "123 Main St."])
                .unwrap();
        assert_eq!(args.name, "home");
        assert_eq!(args.location, "123 Main St.");
    }

    #[test]
    fn test_parse_add_args_defaults_empty() {
        let args = AddArgs::try_parse_from(["add"]).unwrap();
        assert!(args.name.is_empty());
        assert!(args.location.is_empty());
    }

    #[test]
    fn test_parse_commute_defaults() {
        let args = CommuteArgs::try_parse_from(["commuter"]).unwrap();
        assert_eq!(args.from, DEFAULT_LOCATION_ALIAS);
        assert_eq!(args.to, DEFAULT_LOCATION_ALIAS);
        assert!(!args.from_current);
        assert!(!args.to_current);
        assert!(!args.drive && !args.walk && !args.bike && !args.transit);
    }

    #[test]
    fn test_parse_commute_endpoints() {
        let args =
            CommuteArgs::try_parse_from(["commuter", "--to", "work", "--from", "home"]).unwrap();
        assert_eq!(args.to, "work");
        assert_eq!(args.from, "home");
    }

    #[test]
    fn test_parse_commute_current_flags() {
        let args =
            CommuteArgs::try_parse_from(["commuter", "--from-current", "--to", "work"]).unwrap();
        assert!(args.from_current);
        assert!(!args.to_current);
    }

    #[test]
    fn test_normalize_defaults_to_drive() {
        let mut args = CommuteArgs::try_parse_from(["commuter", "--to", "work"]).unwrap();
        args.normalize_modes();
        assert!(args.drive);
        assert!(!args.walk && !args.bike && !args.transit);
    }

    #[test]
    fn test_normalize_keeps_explicit_modes() {
        let mut args = CommuteArgs::try_parse_from(["commuter", "--walk"]).unwrap();
        args.normalize_modes();
        assert!(args.walk);
        assert!(!args.drive);
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(CommuteArgs::try_parse_from(["commuter", "--bogus"]).is_err());
        assert!(AddArgs::try_parse_from(["add", "--bogus"]).is_err());
    }
}
