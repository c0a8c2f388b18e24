//! Repository for the `franchises` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::franchise::{CreateFranchise, Franchise, UpdateFranchise};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for franchises.
pub struct FranchiseRepo;

impl FranchiseRepo {
    /// Insert a new franchise, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFranchise) -> Result<Franchise, sqlx::Error> {
        let query = format!(
            "INSERT INTO franchises (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Franchise>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a franchise by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Franchise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM franchises WHERE id = $1");
        sqlx::query_as::<_, Franchise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all franchises, ordered by id ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Franchise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM franchises ORDER BY id ASC");
        sqlx::query_as::<_, Franchise>(&query).fetch_all(pool).await
    }

    /// Fully replace a franchise's scalar fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFranchise,
    ) -> Result<Option<Franchise>, sqlx::Error> {
        let query = format!(
            "UPDATE franchises SET name = $2, description = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Franchise>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a franchise by ID. Returns `true` if a row was removed.
    ///
    /// Movies referencing the franchise are detached (`ON DELETE SET NULL`),
    /// not deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM franchises WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Existence check used by the association endpoints before traversal.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM franchises WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
