//! CLI argument definitions using clap
//!
//! Commands:
//! - divelog init [--db <path>]
//! - divelog seed [--db <path>]
//! - divelog serve [--db <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// divelog - A minimal, self-hostable dive log web service
#[derive(Parser, Debug)]
#[command(name = "divelog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database file and schema
    Init {
        /// Path to the SQLite database file
        #[arg(long, default_value = "./divelogs.db")]
        db: PathBuf,
    },

    /// Insert the demo dive set when the database is empty
    Seed {
        /// Path to the SQLite database file
        #[arg(long, default_value = "./divelogs.db")]
        db: PathBuf,
    },

    /// Start the dive log server
    Serve {
        /// Path to the SQLite database file
        #[arg(long, default_value = "./divelogs.db")]
        db: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 5000)]
        port: u16,

        /// Directory the front end is served from
        #[arg(long, default_value = "./static")]
        static_dir: String,

        /// CORS allowed origin (repeatable); permissive when omitted
        #[arg(long)]
        cors_origin: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
