//! Interactive input seam used by the configure flow

use crate::error::{CommuterError, Result};
use std::io::BufRead;

/// Reads one line of interactive input
pub trait Input {
    fn read_line(&self) -> Result<String>;
}

/// Reads from the process's standard input
#[derive(Debug, Default)]
pub struct StdinInput;

impl Input for StdinInput {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(CommuterError::input)?;

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
