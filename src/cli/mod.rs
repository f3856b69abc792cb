//! CLI module for divelog
//!
//! Commands:
//! - init: Create the database file and schema
//! - seed: Insert the demo dive set into an empty database
//! - serve: Initialize, seed, and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
