//! SQLite schema for the dive log
//!
//! A single `dives` table holds everything; there are no foreign keys and
//! no relationships between records.

use rusqlite::{Connection, Result};

/// Initialize the database schema
///
/// Idempotent: safe to run on every startup. Creates the backing file
/// implicitly when the connection was opened against a missing path.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS dives (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            dive_number INTEGER NOT NULL,
            date TEXT NOT NULL,
            location TEXT NOT NULL,
            dive_site TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            max_depth REAL,
            duration INTEGER,
            water_temp REAL,
            visibility INTEGER,
            notes TEXT,
            created_at TEXT DEFAULT CURRENT_TIMESTAMP
        );

        -- Listing is always ordered by date descending
        CREATE INDEX IF NOT EXISTS idx_dives_date ON dives(date);
        "#,
    )
}
