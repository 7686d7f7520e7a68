//! Demo dataset for local development and the CLI `seed-demo` command.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::DbError;

/// Insert a small Seattle-area demo dataset: stores, categories, products,
/// promotions, and members.
///
/// Returns the number of rows inserted. The seed is guarded rather than
/// idempotent: if any stores already exist the function inserts nothing and
/// returns 0. Everything runs inside a single transaction; a failure rolls
/// back the entire batch.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert fails.
pub async fn seed_demo_data(pool: &PgPool) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let mut count = 0usize;

    count += seed_stores(&mut tx).await?;
    count += seed_catalog(&mut tx).await?;
    count += seed_promotions(&mut tx).await?;
    count += seed_members(&mut tx).await?;

    tx.commit().await?;
    Ok(count)
}

async fn seed_stores(tx: &mut Transaction<'_, Postgres>) -> Result<usize, DbError> {
    let stores: [(&str, &str, &str, &str, &str, f64, f64, bool); 7] = [
        ("Pike Street Roastery", "1124 Pike St", "Seattle", "WA", "98101", 47.6140, -122.3271, true),
        ("Capitol Hill", "434 Broadway E", "Seattle", "WA", "98102", 47.6253, -122.3222, true),
        ("Ballard", "2204 NW Market St", "Seattle", "WA", "98107", 47.6687, -122.3847, true),
        ("University Village", "4634 26th Ave NE", "Seattle", "WA", "98105", 47.6627, -122.2987, true),
        ("West Seattle Junction", "4480 California Ave SW", "Seattle", "WA", "98116", 47.5612, -122.3871, true),
        ("Bellevue Square", "575 Bellevue Sq", "Bellevue", "WA", "98004", 47.6158, -122.2036, true),
        ("Alki Beach (closed)", "2742 Alki Ave SW", "Seattle", "WA", "98116", 47.5812, -122.4055, false),
    ];

    for (name, address, city, state, zip, lat, lon, active) in stores {
        sqlx::query(
            "INSERT INTO stores (name, address, city, state, zip_code, phone, \
                                 latitude, longitude, hours, is_active) \
             VALUES ($1, $2, $3, $4, $5, NULL, $6, $7, 'Mon-Sun 6am-8pm', $8)",
        )
        .bind(name)
        .bind(address)
        .bind(city)
        .bind(state)
        .bind(zip)
        .bind(lat)
        .bind(lon)
        .bind(active)
        .execute(&mut **tx)
        .await?;
    }

    Ok(stores.len())
}

async fn seed_catalog(tx: &mut Transaction<'_, Postgres>) -> Result<usize, DbError> {
    let categories = [
        ("Hot Coffee", 1_i32),
        ("Cold Drinks", 2),
        ("Bakery", 3),
    ];

    let mut category_ids = Vec::with_capacity(categories.len());
    for (name, display_order) in categories {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO product_categories (name, display_order, is_active) \
             VALUES ($1, $2, TRUE) RETURNING id",
        )
        .bind(name)
        .bind(display_order)
        .fetch_one(&mut **tx)
        .await?;
        category_ids.push(id);
    }

    // (category index, name, cents, recommended, new, active)
    let products: [(usize, &str, i64, bool, bool, bool); 7] = [
        (0, "Caff\u{e8} Latte", 475, true, false, true),
        (0, "Single-Origin Pour Over", 525, false, true, true),
        (1, "Cold Brew", 425, true, false, true),
        (1, "Iced Lavender Latte", 575, false, true, true),
        (2, "Butter Croissant", 395, false, false, true),
        (2, "Marionberry Scone", 415, false, true, true),
        (2, "Pumpkin Loaf (retired)", 365, true, false, false),
    ];

    for (category, name, cents, recommended, new, active) in products {
        sqlx::query(
            "INSERT INTO products (category_id, name, price, is_recommended, is_new, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(category_ids[category])
        .bind(name)
        .bind(Decimal::new(cents, 2))
        .bind(recommended)
        .bind(new)
        .bind(active)
        .execute(&mut **tx)
        .await?;
    }

    Ok(categories.len() + products.len())
}

async fn seed_promotions(tx: &mut Transaction<'_, Postgres>) -> Result<usize, DbError> {
    let now = Utc::now();

    // (title, discount cents-of-percent, start, end, active)
    let promotions = [
        (
            "Afternoon Happy Hour",
            Some(Decimal::new(5000, 2)),
            now - Duration::days(7),
            now + Duration::days(21),
            true,
        ),
        (
            "Holiday Red Cups",
            None,
            now - Duration::days(120),
            now - Duration::days(60),
            true,
        ),
        (
            "Members Double Stars",
            Some(Decimal::new(1000, 2)),
            now - Duration::days(1),
            now + Duration::days(30),
            false,
        ),
    ];

    for (title, discount, start, end, active) in promotions {
        sqlx::query(
            "INSERT INTO promotions (title, description, discount_percentage, \
                                     start_date, end_date, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(title)
        .bind(format!("{title}: limited time at participating stores."))
        .bind(discount)
        .bind(start)
        .bind(end)
        .bind(active)
        .execute(&mut **tx)
        .await?;
    }

    Ok(promotions.len())
}

async fn seed_members(tx: &mut Transaction<'_, Postgres>) -> Result<usize, DbError> {
    let members = [
        ("ada@example.com", "Ada", "Lovelace", 420_i32, "Gold", true),
        ("grace@example.com", "Grace", "Hopper", 80, "Green", false),
    ];

    for (email, first, last, points, level, active) in members {
        sqlx::query(
            "INSERT INTO members (email, first_name, last_name, rewards_points, \
                                  membership_level, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (email) DO NOTHING",
        )
        .bind(email)
        .bind(first)
        .bind(last)
        .bind(points)
        .bind(level)
        .bind(active)
        .execute(&mut **tx)
        .await?;
    }

    Ok(members.len())
}
