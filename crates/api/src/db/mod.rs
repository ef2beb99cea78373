//! Database operations for the cafe record store.
//!
//! # Database: `SQLite`
//!
//! A single table:
//!
//! - `cafe` - One row per cafe (name, urls, location, amenity flags, price)
//!
//! The table is bootstrapped by the embedded migration in `migrations/`,
//! applied at startup via [`MIGRATOR`].

pub mod cafes;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use cafes::CafeRepository;

/// Embedded migrations for the cafe table.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested cafe was not found.
    #[error("cafe not found")]
    NotFound,

    /// A cafe with the same name already exists.
    #[error("a cafe named '{0}' already exists")]
    DuplicateName(String),

    /// A random pick was requested but the store holds no records.
    #[error("no cafes in the store")]
    EmptyStore,
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if it does not already exist.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
) -> Result<SqlitePool, sqlx::Error> {
    let options =
        SqliteConnectOptions::from_str(database_url.expose_secret())?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
