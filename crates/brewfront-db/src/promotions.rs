//! Database operations for the `promotions` table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::DbError;

/// A row from the `promotions` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PromotionRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub discount_percentage: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Returns active promotions whose date window contains `now`.
///
/// Both window boundaries are inclusive: a promotion starting or ending at
/// exactly `now` is returned. `now` is a parameter rather than `NOW()` so
/// callers and tests pin the instant being evaluated.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_current_promotions(
    pool: &PgPool,
    now: DateTime<Utc>,
) -> Result<Vec<PromotionRow>, DbError> {
    let rows = sqlx::query_as::<_, PromotionRow>(
        "SELECT id, title, description, image_url, discount_percentage, \
                start_date, end_date, is_active, created_at \
         FROM promotions \
         WHERE is_active = TRUE \
           AND start_date <= $1 \
           AND end_date >= $1 \
         ORDER BY start_date, id",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
