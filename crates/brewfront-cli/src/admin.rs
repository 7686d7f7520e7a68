/// Apply pending migrations and report how many ran.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub(crate) async fn run_migrate(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let applied = brewfront_db::run_migrations(pool).await?;
    if applied == 0 {
        println!("database is up to date");
    } else {
        println!("applied {applied} migration(s)");
    }
    Ok(())
}

/// Insert the demo dataset unless stores already exist.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub(crate) async fn run_seed_demo(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let inserted = brewfront_db::seed_demo_data(pool).await?;
    if inserted == 0 {
        println!("stores already present; demo seed skipped");
    } else {
        println!("inserted {inserted} demo rows");
    }
    Ok(())
}
