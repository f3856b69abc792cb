//! Dive record shapes
//!
//! [`Dive`] is the read model: optional numeric fields come back as JSON
//! null when the column is NULL. [`DiveInput`] is the write model used by
//! create and update; the six required fields are typed non-optional and
//! are checked for presence by the API layer before deserialization.

use serde::{Deserialize, Serialize};

/// One logged scuba dive, as stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dive {
    /// Assigned by the storage layer on insert, never by the client
    pub id: i64,
    pub dive_number: i64,
    /// ISO date, e.g. "2024-03-08"
    pub date: String,
    pub location: String,
    pub dive_site: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Meters
    pub max_depth: Option<f64>,
    /// Minutes
    pub duration: Option<i64>,
    /// Celsius
    pub water_temp: Option<f64>,
    /// Meters
    pub visibility: Option<i64>,
    pub notes: Option<String>,
    /// Set by the storage layer on insert, immutable afterwards
    pub created_at: String,
}

/// Client-submitted dive fields for create and update
#[derive(Debug, Clone, Deserialize)]
pub struct DiveInput {
    pub dive_number: i64,
    pub date: String,
    pub location: String,
    pub dive_site: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub max_depth: Option<f64>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub water_temp: Option<f64>,
    #[serde(default)]
    pub visibility: Option<i64>,
    /// Stored as an empty string when absent
    #[serde(default)]
    pub notes: Option<String>,
}
