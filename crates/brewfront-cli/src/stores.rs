use brewfront_core::{search::DEFAULT_RADIUS_KM, search_stores, StoreQuery, StoreSearchRequest};

/// Run a store search and print a table of matches.
///
/// Searches exactly as the server does: the raw request is normalized,
/// the active-store snapshot is read, then ranked in-process.
///
/// # Errors
///
/// Returns an error if the query is invalid or the database read fails.
pub(crate) async fn run_stores_search(
    pool: &sqlx::PgPool,
    request: StoreSearchRequest,
) -> anyhow::Result<()> {
    let query = StoreQuery::from_request(request, DEFAULT_RADIUS_KM)
        .map_err(|e| anyhow::anyhow!("invalid search: {e}"))?;

    let rows = brewfront_db::list_active_stores(pool).await?;
    let snapshot = rows.into_iter().map(Into::into).collect();
    let matches = search_stores(snapshot, &query);

    if matches.is_empty() {
        println!("no stores matched; run `seed-demo` first or widen the search");
        return Ok(());
    }

    let header = format!("{:<6}{:<28}{:<16}{:<10}DISTANCE", "ID", "NAME", "CITY", "ZIP");
    println!("{header}");
    for m in &matches {
        let distance = m
            .distance_km
            .map_or_else(|| "\u{2014}".to_string(), |d| format!("{d:.2} km"));
        println!(
            "{:<6}{:<28}{:<16}{:<10}{}",
            m.store.id,
            truncate(&m.store.name, 26),
            m.store.city,
            m.store.zip_code,
            distance
        );
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_names_alone() {
        assert_eq!(truncate("Ballard", 26), "Ballard");
    }

    #[test]
    fn truncate_shortens_long_names() {
        let long = "A Store Name That Goes On And On Forever";
        let out = truncate(long, 10);
        assert_eq!(out, "A Store Na...");
    }
}
