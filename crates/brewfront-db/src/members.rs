//! Database operations for the `members` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::DbError;

/// A row from the `members` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberRow {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub rewards_points: i32,
    pub membership_level: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Returns the member with exactly this email, or `None`.
///
/// The match is case-sensitive; `Alice@example.com` and `alice@example.com`
/// are different members. Inactive members ARE returned; the login handler
/// distinguishes "unknown" from "inactive" itself.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn find_member_by_email(pool: &PgPool, email: &str) -> Result<Option<MemberRow>, DbError> {
    let row = sqlx::query_as::<_, MemberRow>(
        "SELECT id, email, first_name, last_name, phone, rewards_points, \
                membership_level, is_active, created_at \
         FROM members \
         WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
