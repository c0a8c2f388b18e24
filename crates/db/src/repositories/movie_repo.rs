//! Repository for the `movies` table and the `movie_characters` join table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, release_year, director, picture_url, trailer_url, \
     franchise_id, created_at, updated_at";

/// Provides CRUD operations for movies plus franchise/character association
/// helpers.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// `franchise_id` is taken as given; a dangling reference fails the
    /// foreign key constraint and surfaces as a database error.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre, release_year, director, picture_url, trailer_url, franchise_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(&input.director)
            .bind(&input.picture_url)
            .bind(&input.trailer_url)
            .bind(input.franchise_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies, ordered by id ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id ASC");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// List the movies belonging to a franchise, ordered by id ascending.
    pub async fn list_by_franchise(
        pool: &PgPool,
        franchise_id: DbId,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE franchise_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Movie>(&query)
            .bind(franchise_id)
            .fetch_all(pool)
            .await
    }

    /// Fully replace a movie's scalar fields, including `franchise_id`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = $2,
                genre = $3,
                release_year = $4,
                director = $5,
                picture_url = $6,
                trailer_url = $7,
                franchise_id = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(&input.director)
            .bind(&input.picture_url)
            .bind(&input.trailer_url)
            .bind(input.franchise_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    /// Join rows in `movie_characters` cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Existence check used by the character-association endpoints.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// The ids of a franchise's movies, for read-DTO flattening.
    pub async fn ids_by_franchise(
        pool: &PgPool,
        franchise_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM movies WHERE franchise_id = $1 ORDER BY id ASC",
        )
        .bind(franchise_id)
        .fetch_all(pool)
        .await
    }

    /// `(franchise_id, movie_id)` pairs for a set of franchises, so list
    /// endpoints can flatten the relation without a query per row.
    pub async fn ids_by_franchises(
        pool: &PgPool,
        franchise_ids: &[DbId],
    ) -> Result<Vec<(DbId, DbId)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, DbId)>(
            "SELECT franchise_id, id FROM movies
             WHERE franchise_id = ANY($1)
             ORDER BY franchise_id, id",
        )
        .bind(franchise_ids)
        .fetch_all(pool)
        .await
    }

    /// Attach the given movies to a franchise in one statement.
    ///
    /// Ids that do not resolve to a movie are skipped silently; the update
    /// is atomic, so either every resolvable id is attached or none are.
    /// Returns the number of movies attached.
    pub async fn assign_to_franchise(
        pool: &PgPool,
        franchise_id: DbId,
        movie_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies SET franchise_id = $1, updated_at = NOW() WHERE id = ANY($2)",
        )
        .bind(franchise_id)
        .bind(movie_ids)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Replace a movie's character set with the resolvable subset of
    /// `character_ids`, in one transaction.
    ///
    /// Ids that do not resolve to a character are skipped silently, matching
    /// the leniency of [`MovieRepo::assign_to_franchise`].
    pub async fn set_characters(
        pool: &PgPool,
        movie_id: DbId,
        character_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM movie_characters WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *tx)
            .await?;

        // INSERT .. SELECT keeps only ids that exist; ON CONFLICT absorbs
        // duplicates in the input list.
        sqlx::query(
            "INSERT INTO movie_characters (movie_id, character_id)
             SELECT $1, c.id FROM characters c WHERE c.id = ANY($2)
             ON CONFLICT DO NOTHING",
        )
        .bind(movie_id)
        .bind(character_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }

    /// The ids of a movie's characters, for read-DTO flattening.
    pub async fn character_ids(pool: &PgPool, movie_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT character_id FROM movie_characters
             WHERE movie_id = $1
             ORDER BY character_id ASC",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// `(movie_id, character_id)` pairs for a set of movies, so list
    /// endpoints can flatten the relation without a query per row.
    pub async fn character_ids_by_movies(
        pool: &PgPool,
        movie_ids: &[DbId],
    ) -> Result<Vec<(DbId, DbId)>, sqlx::Error> {
        sqlx::query_as::<_, (DbId, DbId)>(
            "SELECT movie_id, character_id FROM movie_characters
             WHERE movie_id = ANY($1)
             ORDER BY movie_id, character_id",
        )
        .bind(movie_ids)
        .fetch_all(pool)
        .await
    }
}
