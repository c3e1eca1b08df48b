//! # Commuter
//!
//! Store named locations and check commute durations from the command
//! line. Locations are kept as aliases ("home", "work") in a small JSON
//! store under the user's home directory; durations come from the
//! Google Maps Distance Matrix API, and the device's current position
//! from the Geolocation API.
//!
//! ## Usage
//!
//! ```text
//! commuter                       # first run: prompts for an API key
//! commuter add --name home --location "123 Main St."
//! commuter list
//! commuter --to work                    # drive, from the default alias
//! commuter --walk --transit --to work --from home
//! commuter --from-current --to work
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod geo;
pub mod storage;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging, filtered by `RUST_LOG` (default: info)
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
