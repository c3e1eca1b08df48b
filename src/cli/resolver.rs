//! Argument resolution: from raw arguments and persisted configuration
//! to exactly one command
//!
//! An unconfigured installation can only be configured: a missing
//! configuration routes every argument vector to the configure flow,
//! even one that spells a valid add or commute invocation.

use crate::cli::args::{AddArgs, CommuteArgs};
use crate::cli::commands::{AddCmd, Command, CommuteCmd, ConfigureCmd, ListCmd};
use crate::cli::input::StdinInput;
use crate::config::Configuration;
use crate::error::Result;
use crate::geo::MapsRouter;
use crate::storage::StorageProvider;
use clap::Parser;
use tracing::debug;

const TOKEN_ADD: &str = "add";
const TOKEN_LIST: &str = "list";

/// Select and construct the command for an argument vector.
///
/// The first token picks the sub-parser: `add` and `list` are
/// dispatched by name, anything else (flags included) is treated as a
/// commute invocation. Malformed flags surface as a usage error.
pub fn resolve(
    configuration: Option<&Configuration>,
    args: &[String],
    store: Box<dyn StorageProvider>,
) -> Result<Command> {
    let Some(configuration) = configuration else {
        debug!("no configuration stored, resolving to configure");
        return Ok(configure_cmd(store));
    };
    if args.is_empty() {
        return Ok(configure_cmd(store));
    }

    match args[0].as_str() {
        TOKEN_ADD => resolve_add(&args[1..], store),
        TOKEN_LIST => Ok(Command::List(ListCmd { store })),
        _ => resolve_commute(configuration, args, store),
    }
}

fn configure_cmd(store: Box<dyn StorageProvider>) -> Command {
    Command::Configure(ConfigureCmd {
        input: Box::new(StdinInput),
        store,
    })
}

fn resolve_add(args: &[String], store: Box<dyn StorageProvider>) -> Result<Command> {
    let parsed = AddArgs::try_parse_from(with_binary_name(TOKEN_ADD, args))?;

    Ok(Command::Add(AddCmd {
        name: parsed.name,
        value: parsed.location,
        store,
    }))
}

fn resolve_commute(
    configuration: &Configuration,
    args: &[String],
    store: Box<dyn StorageProvider>,
) -> Result<Command> {
    // Provider construction comes first: a bad API key aborts
    // resolution before any flag is inspected.
    let router = MapsRouter::new(&configuration.api_key)?;

    let mut parsed = CommuteArgs::try_parse_from(with_binary_name("commuter", args))?;
    parsed.normalize_modes();

    Ok(Command::Commute(CommuteCmd {
        from: parsed.from,
        to: parsed.to,
        from_current: parsed.from_current,
        to_current: parsed.to_current,
        drive: parsed.drive,
        walk: parsed.walk,
        bike: parsed.bike,
        transit: parsed.transit,
        durationer: Box::new(router.clone()),
        locator: Box::new(router),
        store,
    }))
}

fn with_binary_name<'a>(name: &'a str, args: &'a [String]) -> impl Iterator<Item = &'a str> {
    std::iter::once(name).chain(args.iter().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_LOCATION_ALIAS, Locations};
    use crate::error::CommuterError;

    struct MemoryStore;

    impl StorageProvider for MemoryStore {
        fn load_configuration(&self) -> Result<Option<Configuration>> {
            Ok(None)
        }

        fn save_configuration(&self, _configuration: &Configuration) -> Result<()> {
            Ok(())
        }

        fn load_locations(&self) -> Result<Locations> {
            Ok(Locations::default())
        }

        fn save_locations(&self, _locations: &Locations) -> Result<()> {
            Ok(())
        }
    }

    fn store() -> Box<dyn StorageProvider> {
        Box::new(MemoryStore)
    }

    fn configuration() -> Configuration {
        Configuration {
            api_key: "example-key".to_string(),
        }
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_no_configuration_always_resolves_to_configure() {
        let vectors = [
            args(&[]),
            args(&["--help"]),
            args(&["--to", "work"]),
            args(&["add", "--name", "home", "--location", "123 Main St."]),
            args(&["list"]),
        ];

        for vector in vectors {
            let command = resolve(None, &vector, store()).unwrap();
            assert!(
                matches!(command, Command::Configure(_)),
                "expected configure for {vector:?}"
            );
        }
    }

    #[test]
    fn test_empty_args_resolve_to_configure() {
        let conf = configuration();
        let command = resolve(Some(&conf), &[], store()).unwrap();
        assert!(matches!(command, Command::Configure(_)));
    }

    #[test]
    fn test_add_token_resolves_to_add() {
        let conf = configuration();
        let command = resolve(
            Some(&conf),
            &args(&["add", "--name", "home", "--location", "123 Main St."]),
            store(),
        )
        .unwrap();

        match command {
            Command::Add(cmd) => {
                assert_eq!(cmd.name, "home");
                assert_eq!(cmd.value, "123 Main St.");
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_list_token_resolves_to_list() {
        let conf = configuration();
        let command = resolve(Some(&conf), &args(&["list"]), store()).unwrap();
        assert!(matches!(command, Command::List(_)));
    }

    #[test]
    fn test_flags_resolve_to_commute_with_defaults() {
        let conf = configuration();
        let command = resolve(Some(&conf), &args(&["--to", "work"]), store()).unwrap();

        match command {
            Command::Commute(cmd) => {
                assert_eq!(cmd.to, "work");
                assert_eq!(cmd.from, DEFAULT_LOCATION_ALIAS);
                assert!(cmd.drive);
                assert!(!cmd.walk && !cmd.bike && !cmd.transit);
            }
            _ => panic!("expected commute command"),
        }
    }

    #[test]
    fn test_explicit_mode_suppresses_drive_default() {
        let conf = configuration();
        let command = resolve(
            Some(&conf),
            &args(&["--walk", "--to", "work", "--from", "home"]),
            store(),
        )
        .unwrap();

        match command {
            Command::Commute(cmd) => {
                assert!(cmd.walk);
                assert!(!cmd.drive);
                assert_eq!(cmd.to, "work");
                assert_eq!(cmd.from, "home");
            }
            _ => panic!("expected commute command"),
        }
    }

    #[test]
    fn test_empty_api_key_aborts_commute_resolution() {
        let conf = Configuration {
            api_key: String::new(),
        };
        let err = resolve(Some(&conf), &args(&["--to", "work"]), store()).unwrap_err();
        assert!(matches!(err, CommuterError::Provider { .. }));
    }

    #[test]
    fn test_malformed_flags_are_a_usage_error() {
        let conf = configuration();

        let err = resolve(Some(&conf), &args(&["add", "--bogus"]), store()).unwrap_err();
        assert!(matches!(err, CommuterError::Usage(_)));

        let err = resolve(Some(&conf), &args(&["--bogus"]), store()).unwrap_err();
        assert!(matches!(err, CommuterError::Usage(_)));
    }
}
