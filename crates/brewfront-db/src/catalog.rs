//! Database operations for the `product_categories` and `products` tables.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `product_categories` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductCategoryRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A row from the `products` table.
///
/// `price` is NUMERIC(10, 2) in storage; it stays a [`Decimal`] here and is
/// converted to a float at the serialization boundary.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_recommended: bool,
    pub is_new: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns all active categories in display order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_active_categories(pool: &PgPool) -> Result<Vec<ProductCategoryRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductCategoryRow>(
        "SELECT id, name, description, image_url, display_order, is_active, created_at \
         FROM product_categories \
         WHERE is_active = TRUE \
         ORDER BY display_order, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns active products flagged as recommended, ordered by name.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_recommended_products(pool: &PgPool) -> Result<Vec<ProductRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, category_id, name, description, price, image_url, \
                is_recommended, is_new, is_active, created_at \
         FROM products \
         WHERE is_recommended = TRUE AND is_active = TRUE \
         ORDER BY name, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns active products flagged as new, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_new_products(pool: &PgPool) -> Result<Vec<ProductRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, category_id, name, description, price, image_url, \
                is_recommended, is_new, is_active, created_at \
         FROM products \
         WHERE is_new = TRUE AND is_active = TRUE \
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
