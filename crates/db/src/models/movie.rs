//! Movie entity model and DTOs.

use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub picture_url: Option<String>,
    pub trailer_url: Option<String>,
    pub franchise_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 50))]
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    #[validate(length(max = 50))]
    pub director: Option<String>,
    #[validate(length(max = 100))]
    pub picture_url: Option<String>,
    #[validate(length(max = 100))]
    pub trailer_url: Option<String>,
    pub franchise_id: Option<DbId>,
}

/// DTO for a full update of an existing movie.
///
/// Carries `id` so handlers can reject a path/body mismatch. All scalar
/// fields are replaced, including `franchise_id` (passing `null` detaches
/// the movie from its franchise).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMovie {
    pub id: DbId,
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 50))]
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    #[validate(length(max = 50))]
    pub director: Option<String>,
    #[validate(length(max = 100))]
    pub picture_url: Option<String>,
    #[validate(length(max = 100))]
    pub trailer_url: Option<String>,
    pub franchise_id: Option<DbId>,
}

/// Response projection: the movie with its character relation flattened
/// into a list of character ids.
#[derive(Debug, Clone, Serialize)]
pub struct MovieRead {
    pub id: DbId,
    pub title: String,
    pub genre: Option<String>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub picture_url: Option<String>,
    pub trailer_url: Option<String>,
    pub franchise_id: Option<DbId>,
    pub characters: Vec<DbId>,
}

impl MovieRead {
    pub fn from_entity(movie: Movie, characters: Vec<DbId>) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            genre: movie.genre,
            release_year: movie.release_year,
            director: movie.director,
            picture_url: movie.picture_url,
            trailer_url: movie.trailer_url,
            franchise_id: movie.franchise_id,
            characters,
        }
    }
}
