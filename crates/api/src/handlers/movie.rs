//! Handlers for the `/movie` resource.
//!
//! Characters-in-movie sub-resource:
//! `GET /movie/{id}/characters` lists, `PUT /movie/{id}/characters`
//! replaces the movie's character set.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::character::CharacterRead;
use cinedex_db::models::movie::{CreateMovie, MovieRead, UpdateMovie};
use cinedex_db::repositories::{CharacterRepo, MovieRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::group_pairs;
use crate::state::AppState;

/// GET /api/movie
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<MovieRead>>> {
    let movies = MovieRepo::list_all(&state.pool).await?;

    let ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();
    let mut character_ids = group_pairs(MovieRepo::character_ids_by_movies(&state.pool, &ids).await?);

    let dtos = movies
        .into_iter()
        .map(|m| {
            let characters = character_ids.remove(&m.id).unwrap_or_default();
            MovieRead::from_entity(m, characters)
        })
        .collect();
    Ok(Json(dtos))
}

/// GET /api/movie/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieRead>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    let characters = MovieRepo::character_ids(&state.pool, id).await?;
    Ok(Json(MovieRead::from_entity(movie, characters)))
}

/// POST /api/movie
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<MovieRead>)> {
    input.validate()?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    let location = format!("/api/movie/{}", movie.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(MovieRead::from_entity(movie, Vec::new())),
    ))
}

/// PUT /api/movie/{id}
///
/// Full replace of the scalar fields, `franchise_id` included. The body
/// must carry the same id as the path.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "body id {} does not match path id {id}",
            input.id
        )));
    }
    input.validate()?;

    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/movie/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))
    }
}

/// GET /api/movie/{id}/characters
pub async fn characters(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CharacterRead>>> {
    if !MovieRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }));
    }

    let characters = CharacterRepo::list_by_movie(&state.pool, id).await?;
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

/// PUT /api/movie/{id}/characters
///
/// Replace the movie's character set. Ids that do not resolve to a
/// character are skipped silently; the replacement is one transaction.
pub async fn set_characters(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(character_ids): Json<Vec<DbId>>,
) -> AppResult<StatusCode> {
    if !MovieRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }));
    }

    MovieRepo::set_characters(&state.pool, id, &character_ids).await?;
    Ok(StatusCode::NO_CONTENT)
}
