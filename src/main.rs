use anyhow::Result;
use commuter::error::CommuterError;
use commuter::storage::{FileStore, StorageProvider};
use commuter::{cli, setup_logging};

fn main() -> Result<()> {
    setup_logging()?;

    let store = FileStore::new()?;
    let configuration = store.load_configuration()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match cli::resolve(configuration.as_ref(), &args, Box::new(store)) {
        Ok(command) => command,
        // Malformed flags print clap's usage message and exit.
        Err(CommuterError::Usage(e)) => e.exit(),
        Err(e) => return Err(e.into()),
    };

    command.validate()?;
    command.run()?;
    Ok(())
}
