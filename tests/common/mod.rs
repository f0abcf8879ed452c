//! Shared helpers for integration tests

#![allow(dead_code)]

use cafe_board::models::CafeRecord;
use cafe_board::{create_pool, CafeStore, Config};
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret-key";

/// Create a test configuration pointing at `database_url`
pub fn test_config(database_url: String) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        database_url,
        db_max_connections: 2,
        environment: "test".to_string(),
        secret_key: TEST_SECRET.to_string(),
        csrf_time_limit_secs: 3600,
    }
}

/// SQLite database file inside `temp_dir`, created on first connect
pub fn sqlite_url(temp_dir: &TempDir) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("cafes.db").display()
    )
}

/// Create a store over a fresh database with the cafe table in place
pub async fn create_test_store(temp_dir: &TempDir) -> CafeStore {
    let pool = create_pool(&sqlite_url(temp_dir), 2)
        .await
        .expect("Failed to create test pool");
    let store = CafeStore::new(pool);
    store
        .ensure_table()
        .await
        .expect("Failed to create cafe table");
    store
}

pub fn blue_bottle() -> CafeRecord {
    CafeRecord {
        cafe_name: "Blue Bottle".to_string(),
        location: "https://example.com/bb".to_string(),
        open_time: "08:00".to_string(),
        close_time: "18:00".to_string(),
        coffee_rating: "☕️☕️☕️".to_string(),
        wifi_rating: "💪💪".to_string(),
        power_rating: "🔌🔌🔌".to_string(),
    }
}

pub fn cafe(name: &str, location: &str) -> CafeRecord {
    CafeRecord {
        cafe_name: name.to_string(),
        location: location.to_string(),
        open_time: "07:30".to_string(),
        close_time: "22:00".to_string(),
        coffee_rating: "☕️".to_string(),
        wifi_rating: "✘".to_string(),
        power_rating: "🔌🔌🔌🔌🔌".to_string(),
    }
}
