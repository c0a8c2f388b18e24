//! Character entity model and DTOs.

use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub full_name: String,
    pub alias: Option<String>,
    pub gender: Option<String>,
    pub picture_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCharacter {
    #[validate(length(min = 1, max = 50))]
    pub full_name: String,
    #[validate(length(max = 50))]
    pub alias: Option<String>,
    #[validate(length(max = 50))]
    pub gender: Option<String>,
    #[validate(length(max = 100))]
    pub picture_url: Option<String>,
}

/// DTO for a full update of an existing character.
///
/// Carries `id` so handlers can reject a path/body mismatch.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCharacter {
    pub id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub full_name: String,
    #[validate(length(max = 50))]
    pub alias: Option<String>,
    #[validate(length(max = 50))]
    pub gender: Option<String>,
    #[validate(length(max = 100))]
    pub picture_url: Option<String>,
}

/// Response projection: the character with its movie relation flattened
/// into a list of movie ids.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterRead {
    pub id: DbId,
    pub full_name: String,
    pub alias: Option<String>,
    pub gender: Option<String>,
    pub picture_url: Option<String>,
    pub movies: Vec<DbId>,
}

impl CharacterRead {
    pub fn from_entity(character: Character, movies: Vec<DbId>) -> Self {
        Self {
            id: character.id,
            full_name: character.full_name,
            alias: character.alias,
            gender: character.gender,
            picture_url: character.picture_url,
            movies,
        }
    }
}
