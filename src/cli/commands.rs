//! CLI command implementations
//!
//! `serve` performs the explicit startup sequence: open the database
//! (creating the schema idempotently), seed the demo data when empty,
//! then bind and run the server. Nothing happens as an import side
//! effect.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::storage::DiveStore;

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();

    match cli.command {
        Command::Init { db } => init(&db),
        Command::Seed { db } => seed(&db),
        Command::Serve {
            db,
            host,
            port,
            static_dir,
            cors_origin,
        } => serve(&db, host, port, static_dir, cors_origin),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Ensure the database file and schema exist
pub fn init(db: &Path) -> CliResult<()> {
    DiveStore::open(db)?;
    tracing::info!(db = %db.display(), "database initialized");
    Ok(())
}

/// Seed the demo dive set into an empty database
pub fn seed(db: &Path) -> CliResult<()> {
    let store = DiveStore::open(db)?;
    let inserted = store.seed_if_empty()?;
    if inserted > 0 {
        tracing::info!(inserted, "inserted demo dives");
    } else {
        tracing::info!("database already contains dives, skipping seed");
    }
    Ok(())
}

/// Initialize, seed, and run the HTTP server to completion
pub fn serve(
    db: &Path,
    host: String,
    port: u16,
    static_dir: String,
    cors_origins: Vec<String>,
) -> CliResult<()> {
    let store = DiveStore::open(db)?;
    let inserted = store.seed_if_empty()?;
    if inserted > 0 {
        tracing::info!(inserted, "seeded demo dives");
    }

    let config = HttpServerConfig {
        host,
        port,
        cors_origins,
        static_dir,
    };
    let server = HttpServer::with_config(store, config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}
