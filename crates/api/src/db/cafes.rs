//! Cafe repository for database operations.
//!
//! All queries are runtime-checked `query_as` calls mapping rows onto the
//! [`Cafe`] domain type.

use sqlx::SqlitePool;

use cafe_wifi_core::{CafeId, Location};

use super::RepositoryError;
use crate::models::{Cafe, NewCafe};

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
     has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

/// Repository for cafe database operations.
pub struct CafeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CafeRepository<'a> {
    /// Create a new cafe repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get one uniformly-selected cafe.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::EmptyStore` if the table holds no records.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_random(&self) -> Result<Cafe, RepositoryError> {
        let sql = format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY RANDOM() LIMIT 1");
        let cafe = sqlx::query_as::<_, Cafe>(&sql)
            .fetch_optional(self.pool)
            .await?;

        cafe.ok_or(RepositoryError::EmptyStore)
    }

    /// Get all cafes in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Cafe>, RepositoryError> {
        let sql = format!("SELECT {CAFE_COLUMNS} FROM cafe ORDER BY id");
        let cafes = sqlx::query_as::<_, Cafe>(&sql).fetch_all(self.pool).await?;

        Ok(cafes)
    }

    /// Get all cafes whose location exactly equals the canonical `loc`.
    ///
    /// Returns an empty vec, not an error, when none match.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_location(&self, loc: &Location) -> Result<Vec<Cafe>, RepositoryError> {
        let sql = format!("SELECT {CAFE_COLUMNS} FROM cafe WHERE location = ? ORDER BY id");
        let cafes = sqlx::query_as::<_, Cafe>(&sql)
            .bind(loc.as_str())
            .fetch_all(self.pool)
            .await?;

        Ok(cafes)
    }

    /// Insert a new cafe and return the stored record with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateName` if a cafe with the same name
    /// already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, new_cafe: &NewCafe) -> Result<Cafe, RepositoryError> {
        let sql = format!(
            "INSERT INTO cafe (name, map_url, img_url, location, seats, \
             has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {CAFE_COLUMNS}"
        );
        let cafe = sqlx::query_as::<_, Cafe>(&sql)
            .bind(&new_cafe.name)
            .bind(&new_cafe.map_url)
            .bind(&new_cafe.img_url)
            .bind(&new_cafe.location)
            .bind(&new_cafe.seats)
            .bind(new_cafe.has_toilet)
            .bind(new_cafe.has_wifi)
            .bind(new_cafe.has_sockets)
            .bind(new_cafe.can_take_calls)
            .bind(new_cafe.coffee_price.as_deref())
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::DuplicateName(new_cafe.name.clone());
                }
                RepositoryError::Database(e)
            })?;

        Ok(cafe)
    }

    /// Update the coffee price of the cafe with the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no cafe has that id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn update_price(
        &self,
        id: CafeId,
        new_price: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE cafe SET coffee_price = ? WHERE id = ?")
            .bind(new_price)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete the cafe with the given id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no cafe has that id.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: CafeId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
