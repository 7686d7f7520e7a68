//! Offline unit tests for brewfront-db pool configuration and row types.
//! These tests do not require a live database connection.

use brewfront_core::{AppConfig, Environment, Store};
use brewfront_db::{MemberRow, PoolConfig, StoreRow};
use chrono::Utc;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        default_search_radius_km: 25.0,
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

fn sample_store_row() -> StoreRow {
    StoreRow {
        id: 7,
        name: "Capitol Hill".to_string(),
        address: "434 Broadway E".to_string(),
        city: "Seattle".to_string(),
        state: "WA".to_string(),
        zip_code: "98102".to_string(),
        phone: Some("206-555-0142".to_string()),
        latitude: 47.6253,
        longitude: -122.3222,
        hours: Some("Mon-Sun 6am-8pm".to_string()),
        is_active: true,
        created_at: Utc::now(),
    }
}

#[test]
fn store_row_converts_to_domain_store() {
    let row = sample_store_row();
    let store = Store::from(row.clone());

    assert_eq!(store.id, row.id);
    assert_eq!(store.name, row.name);
    assert_eq!(store.city, row.city);
    assert_eq!(store.zip_code, row.zip_code);
    assert!((store.latitude - row.latitude).abs() < f64::EPSILON);
    assert!((store.longitude - row.longitude).abs() < f64::EPSILON);
    assert!(store.is_active);
}

/// Compile-time smoke test: confirm [`MemberRow`] has all expected fields
/// with the correct types. No database required.
#[test]
fn member_row_has_expected_fields() {
    let row = MemberRow {
        id: 1_i64,
        email: "ada@example.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        phone: None,
        rewards_points: 420_i32,
        membership_level: "Gold".to_string(),
        is_active: true,
        created_at: Utc::now(),
    };

    assert_eq!(row.id, 1);
    assert_eq!(row.email, "ada@example.com");
    assert_eq!(row.rewards_points, 420);
    assert_eq!(row.membership_level, "Gold");
    assert!(row.is_active);
}
