//! Repository for the `characters` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, full_name, alias, gender, picture_url, created_at, updated_at";

/// `c.`-qualified variant of [`COLUMNS`] for join queries.
const QUALIFIED: &str =
    "c.id, c.full_name, c.alias, c.gender, c.picture_url, c.created_at, c.updated_at";

/// Provides CRUD operations for characters plus traversal queries.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (full_name, alias, gender, picture_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.full_name)
            .bind(&input.alias)
            .bind(&input.gender)
            .bind(&input.picture_url)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters, ordered by id ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Fully replace a character's scalar fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                full_name = $2,
                alias = $3,
                gender = $4,
                picture_url = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.alias)
            .bind(&input.gender)
            .bind(&input.picture_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a character by ID. Returns `true` if a row was removed.
    /// Join rows in `movie_characters` cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The characters appearing in a movie, ordered by id ascending.
    pub async fn list_by_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED}
             FROM movie_characters mc
             JOIN characters c ON c.id = mc.character_id
             WHERE mc.movie_id = $1
             ORDER BY c.id ASC"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Every character reachable through a franchise's movies, in one join.
    ///
    /// A character appearing in several of the franchise's movies yields one
    /// row per appearance. Callers rely on that: the traversal endpoint's
    /// contract is duplicate inclusion, ordered by movie then character.
    pub async fn list_by_franchise(
        pool: &PgPool,
        franchise_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED}
             FROM movies m
             JOIN movie_characters mc ON mc.movie_id = m.id
             JOIN characters c ON c.id = mc.character_id
             WHERE m.franchise_id = $1
             ORDER BY m.id, c.id"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(franchise_id)
            .fetch_all(pool)
            .await
    }

    /// The ids of the movies a character appears in, for read-DTO flattening.
    pub async fn movie_ids(pool: &PgPool, character_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT movie_id FROM movie_characters
             WHERE character_id = $1
             ORDER BY movie_id ASC",
        )
        .bind(character_id)
        .fetch_all(pool)
        .await
    }

    /// `(character_id, movie_id)` pairs for a set of characters, so list
    /// endpoints can flatten the relation without a query per row.
    pub async fn movie_ids_by_characters(
        pool: &PgPool,
        character_ids: &[DbId],
    ) -> Result<Vec<(DbId, DbId)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, DbId)>(
            "SELECT character_id, movie_id FROM movie_characters
             WHERE character_id = ANY($1)
             ORDER BY character_id, movie_id",
        )
        .bind(character_ids)
        .fetch_all(pool)
        .await
    }
}
