//! Handlers for the `/character` resource.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::character::{CharacterRead, CreateCharacter, UpdateCharacter};
use cinedex_db::repositories::CharacterRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::group_pairs;
use crate::state::AppState;

/// GET /api/character
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<CharacterRead>>> {
    let characters = CharacterRepo::list_all(&state.pool).await?;

    let ids: Vec<DbId> = characters.iter().map(|c| c.id).collect();
    let mut movie_ids = group_pairs(CharacterRepo::movie_ids_by_characters(&state.pool, &ids).await?);

    let dtos = characters
        .into_iter()
        .map(|c| {
            let movies = movie_ids.remove(&c.id).unwrap_or_default();
            CharacterRead::from_entity(c, movies)
        })
        .collect();
    Ok(Json(dtos))
}

/// GET /api/character/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterRead>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    let movies = CharacterRepo::movie_ids(&state.pool, id).await?;
    Ok(Json(CharacterRead::from_entity(character, movies)))
}

/// POST /api/character
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<CharacterRead>)> {
    input.validate()?;
    let character = CharacterRepo::create(&state.pool, &input).await?;
    let location = format!("/api/character/{}", character.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(CharacterRead::from_entity(character, Vec::new())),
    ))
}

/// PUT /api/character/{id}
///
/// Full replace of the scalar fields. The body must carry the same id as
/// the path.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "body id {} does not match path id {id}",
            input.id
        )));
    }
    input.validate()?;

    CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/character/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
    }
}
