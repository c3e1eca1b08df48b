//! Command-line interface: argument resolution and command execution

pub mod args;
pub mod commands;
pub mod input;
pub mod resolver;

pub use commands::Command;
pub use resolver::resolve;
