//! Database operations for the `stores` table.

use brewfront_core::Store;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `stores` table.
///
/// Coordinates are stored as REAL; the SELECT lists cast them to float8 so
/// the row carries `f64` the rest of the way.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StoreRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub hours: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<StoreRow> for Store {
    fn from(row: StoreRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            phone: row.phone,
            latitude: row.latitude,
            longitude: row.longitude,
            hours: row.hours,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

/// Input record for inserting a store.
#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub hours: Option<String>,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns all active stores, ordered by id.
///
/// This is the candidate snapshot for the search service; ranking and
/// radius filtering happen in-process, not in SQL.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_active_stores(pool: &PgPool) -> Result<Vec<StoreRow>, DbError> {
    let rows = sqlx::query_as::<_, StoreRow>(
        "SELECT id, name, address, city, state, zip_code, phone, \
                latitude::float8 AS latitude, longitude::float8 AS longitude, \
                hours, is_active, created_at \
         FROM stores \
         WHERE is_active = TRUE \
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns a single store by id, active or not, or `None` if absent.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_store(pool: &PgPool, id: i64) -> Result<Option<StoreRow>, DbError> {
    let row = sqlx::query_as::<_, StoreRow>(
        "SELECT id, name, address, city, state, zip_code, phone, \
                latitude::float8 AS latitude, longitude::float8 AS longitude, \
                hours, is_active, created_at \
         FROM stores \
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Inserts a store and returns its generated id.
///
/// Used by seeding and tests; stores are otherwise managed by an
/// administrative process outside this service.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_store(pool: &PgPool, store: &NewStore) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO stores (name, address, city, state, zip_code, phone, \
                             latitude, longitude, hours, is_active) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         RETURNING id",
    )
    .bind(&store.name)
    .bind(&store.address)
    .bind(&store.city)
    .bind(&store.state)
    .bind(&store.zip_code)
    .bind(&store.phone)
    .bind(store.latitude)
    .bind(store.longitude)
    .bind(&store.hours)
    .bind(store.is_active)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
