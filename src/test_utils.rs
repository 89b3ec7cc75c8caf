//! Test utilities for Stagebook
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Venue, artist and show factories

use chrono::NaiveDateTime;
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use crate::{
    config::{Config, LogFormat},
    db::entities::{artist, show, venue},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Every pooled connection to `sqlite::memory:` opens its own empty database,
/// so the pool is pinned to a single connection that lives as long as the pool.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 5001,
        log_format: LogFormat::Pretty,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    AppState::new(setup_test_db().await, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test venue with a single "Jazz" genre
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venue::Model {
    let venue = venue::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set("1015 Folsom Street".to_string()),
        phone: Set(Some("123-123-1234".to_string())),
        image_link: Set(None),
        facebook_link: Set(None),
        website_link: Set(None),
        genres: Set("Jazz".to_string()),
        seeking_talent: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Create a test artist based in San Francisco
pub async fn create_test_artist(db: &DatabaseConnection, name: &str) -> artist::Model {
    let artist = artist::ActiveModel {
        name: Set(name.to_string()),
        city: Set("San Francisco".to_string()),
        state: Set("CA".to_string()),
        phone: Set(None),
        genres: Set("Rock n Roll".to_string()),
        image_link: Set(Some("https://images.example/artist.jpg".to_string())),
        facebook_link: Set(None),
        website_link: Set(None),
        seeking_venues: Set(false),
        seeking_description: Set(None),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Book a test show
pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: NaiveDateTime,
) -> show::Model {
    let show = show::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_time: Set(start_time),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}
