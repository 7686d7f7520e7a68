use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A physical retail location.
///
/// Inactive stores are soft-deleted: the row stays in storage but is
/// excluded from every read path, including search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: Option<String>,
    /// Degrees, assumed within [-90, 90] on insert.
    pub latitude: f64,
    /// Degrees, assumed within [-180, 180] on insert.
    pub longitude: f64,
    pub hours: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
