//! The dive store
//!
//! One [`rusqlite::Connection`] owned for the process lifetime, guarded by
//! a mutex. Each operation holds the guard for exactly one call; the guard
//! drops on every exit path including errors.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::errors::{StorageError, StorageResult};
use super::model::{Dive, DiveInput};
use super::schema::init_schema;
use super::seed::sample_dives;

const DIVE_COLUMNS: &str = "id, dive_number, date, location, dive_site, latitude, longitude, \
     max_depth, duration, water_temp, visibility, notes, created_at";

/// Persistent store for dive records
pub struct DiveStore {
    conn: Mutex<Connection>,
}

impl DiveStore {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// In-memory store, used by tests
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }

    /// Insert the demo dive set when the table is empty
    ///
    /// Returns the number of rows inserted (zero when data already exists).
    pub fn seed_if_empty(&self) -> StorageResult<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM dives", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        let dives = sample_dives();
        for dive in &dives {
            insert_dive(&conn, dive)?;
        }
        Ok(dives.len())
    }

    /// Every dive, most recent date first
    ///
    /// Rows sharing a date keep the engine's relative order.
    pub fn list_all(&self) -> StorageResult<Vec<Dive>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {DIVE_COLUMNS} FROM dives ORDER BY date DESC"))?;
        let dives = stmt
            .query_map([], row_to_dive)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dives)
    }

    /// Look up a single dive; `None` when the id does not resolve
    pub fn get_by_id(&self, id: i64) -> StorageResult<Option<Dive>> {
        let conn = self.conn()?;
        let dive = conn
            .query_row(
                &format!("SELECT {DIVE_COLUMNS} FROM dives WHERE id = ?1"),
                params![id],
                row_to_dive,
            )
            .optional()?;
        Ok(dive)
    }

    /// Insert a new dive and return its assigned id
    ///
    /// The caller has already validated the required fields.
    pub fn create(&self, input: &DiveInput) -> StorageResult<i64> {
        let conn = self.conn()?;
        insert_dive(&conn, input)?;
        Ok(conn.last_insert_rowid())
    }

    /// Overwrite all mutable fields of the dive matching `id`
    ///
    /// Returns `false` (not an error) when no row matched.
    pub fn update(&self, id: i64, input: &DiveInput) -> StorageResult<bool> {
        let conn = self.conn()?;
        let rows = conn.execute(
            "UPDATE dives
             SET dive_number = ?1, date = ?2, location = ?3, dive_site = ?4,
                 latitude = ?5, longitude = ?6, max_depth = ?7, duration = ?8,
                 water_temp = ?9, visibility = ?10, notes = ?11
             WHERE id = ?12",
            params![
                input.dive_number,
                input.date,
                input.location,
                input.dive_site,
                input.latitude,
                input.longitude,
                input.max_depth,
                input.duration,
                input.water_temp,
                input.visibility,
                input.notes.clone().unwrap_or_default(),
                id,
            ],
        )?;
        Ok(rows > 0)
    }

    /// Remove the dive matching `id`; `false` when none matched
    pub fn delete(&self, id: i64) -> StorageResult<bool> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM dives WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }
}

fn insert_dive(conn: &Connection, input: &DiveInput) -> Result<(), rusqlite::Error> {
    let created_at = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    conn.execute(
        "INSERT INTO dives (dive_number, date, location, dive_site, latitude, longitude,
                            max_depth, duration, water_temp, visibility, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            input.dive_number,
            input.date,
            input.location,
            input.dive_site,
            input.latitude,
            input.longitude,
            input.max_depth,
            input.duration,
            input.water_temp,
            input.visibility,
            input.notes.clone().unwrap_or_default(),
            created_at,
        ],
    )?;
    Ok(())
}

fn row_to_dive(row: &Row<'_>) -> Result<Dive, rusqlite::Error> {
    Ok(Dive {
        id: row.get(0)?,
        dive_number: row.get(1)?,
        date: row.get(2)?,
        location: row.get(3)?,
        dive_site: row.get(4)?,
        latitude: row.get(5)?,
        longitude: row.get(6)?,
        max_depth: row.get(7)?,
        duration: row.get(8)?,
        water_temp: row.get(9)?,
        visibility: row.get(10)?,
        notes: row.get(11)?,
        created_at: row.get(12)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_input(dive_number: i64, date: &str, location: &str) -> DiveInput {
        DiveInput {
            dive_number,
            date: date.to_string(),
            location: location.to_string(),
            dive_site: "Test Site".to_string(),
            latitude: 1.0,
            longitude: 2.0,
            max_depth: None,
            duration: None,
            water_temp: None,
            visibility: None,
            notes: None,
        }
    }

    #[test]
    fn test_create_assigns_id_and_created_at() {
        let store = DiveStore::open_in_memory().unwrap();
        let id = store.create(&minimal_input(1, "2024-01-01", "X")).unwrap();

        let dive = store.get_by_id(id).unwrap().unwrap();
        assert_eq!(dive.id, id);
        assert!(!dive.created_at.is_empty());
        assert_eq!(dive.notes.as_deref(), Some(""));
        assert!(dive.max_depth.is_none());
    }

    #[test]
    fn test_get_by_id_missing_is_none() {
        let store = DiveStore::open_in_memory().unwrap();
        assert!(store.get_by_id(9999).unwrap().is_none());
    }

    #[test]
    fn test_update_missing_returns_false_without_insert() {
        let store = DiveStore::open_in_memory().unwrap();
        let updated = store
            .update(42, &minimal_input(1, "2024-01-01", "X"))
            .unwrap();
        assert!(!updated);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_all_orders_by_date_desc() {
        let store = DiveStore::open_in_memory().unwrap();
        store.create(&minimal_input(1, "2023-06-15", "A")).unwrap();
        store.create(&minimal_input(2, "2024-07-10", "B")).unwrap();
        store.create(&minimal_input(3, "2023-11-12", "C")).unwrap();

        let dates: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(dates, vec!["2024-07-10", "2023-11-12", "2023-06-15"]);
    }

    #[test]
    fn test_seed_if_empty_runs_once() {
        let store = DiveStore::open_in_memory().unwrap();
        assert_eq!(store.seed_if_empty().unwrap(), 10);
        assert_eq!(store.seed_if_empty().unwrap(), 0);
        assert_eq!(store.list_all().unwrap().len(), 10);
    }
}
