//! Handlers for the `/franchise` resource.
//!
//! Besides plain CRUD, the franchise resource exposes the association
//! endpoints: listing a franchise's movies, listing every character
//! reachable through those movies, and bulk-assigning movies.

use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::character::CharacterRead;
use cinedex_db::models::franchise::{CreateFranchise, FranchiseRead, UpdateFranchise};
use cinedex_db::models::movie::MovieRead;
use cinedex_db::repositories::{CharacterRepo, FranchiseRepo, MovieRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::group_pairs;
use crate::state::AppState;

/// GET /api/franchise
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<FranchiseRead>>> {
    let franchises = FranchiseRepo::list_all(&state.pool).await?;

    let ids: Vec<DbId> = franchises.iter().map(|f| f.id).collect();
    let mut movie_ids = group_pairs(MovieRepo::ids_by_franchises(&state.pool, &ids).await?);

    let dtos = franchises
        .into_iter()
        .map(|f| {
            let movies = movie_ids.remove(&f.id).unwrap_or_default();
            FranchiseRead::from_entity(f, movies)
        })
        .collect();
    Ok(Json(dtos))
}

/// GET /api/franchise/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FranchiseRead>> {
    let franchise = FranchiseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }))?;
    let movies = MovieRepo::ids_by_franchise(&state.pool, id).await?;
    Ok(Json(FranchiseRead::from_entity(franchise, movies)))
}

/// POST /api/franchise
///
/// Responds 201 with the created resource and a `Location` header
/// pointing at the get-by-id endpoint.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFranchise>,
) -> AppResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<FranchiseRead>)> {
    input.validate()?;
    let franchise = FranchiseRepo::create(&state.pool, &input).await?;
    let location = format!("/api/franchise/{}", franchise.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(FranchiseRead::from_entity(franchise, Vec::new())),
    ))
}

/// PUT /api/franchise/{id}
///
/// Full replace of the scalar fields. The body must carry the same id as
/// the path; a mismatch is rejected before touching the database.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFranchise>,
) -> AppResult<StatusCode> {
    if input.id != id {
        return Err(AppError::BadRequest(format!(
            "body id {} does not match path id {id}",
            input.id
        )));
    }
    input.validate()?;

    FranchiseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/franchise/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FranchiseRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }))
    }
}

/// GET /api/franchise/moviesByFranchise/{id}
pub async fn movies_by_franchise(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<MovieRead>>> {
    if !FranchiseRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }));
    }

    let movies = MovieRepo::list_by_franchise(&state.pool, id).await?;
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

/// GET /api/franchise/charactersByFranchise/{id}
///
/// Every character reachable through the franchise's movies, fetched with
/// a single join. A character appearing in several of the franchise's
/// movies appears once per movie in the response; callers depend on the
/// duplication.
pub async fn characters_by_franchise(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CharacterRead>>> {
    if !FranchiseRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }));
    }

    let characters = CharacterRepo::list_by_franchise(&state.pool, id).await?;

    let mut ids: Vec<DbId> = characters.iter().map(|c| c.id).collect();
    ids.sort_unstable();
    ids.dedup();
    let movie_ids = group_pairs(CharacterRepo::movie_ids_by_characters(&state.pool, &ids).await?);

    let dtos = characters
        .into_iter()
        .map(|c| {
            let movies = movie_ids.get(&c.id).cloned().unwrap_or_default();
            CharacterRead::from_entity(c, movies)
        })
        .collect();
    Ok(Json(dtos))
}

/// POST /api/franchise/movie/{id}
///
/// Bulk-assign movies to the franchise. Ids that do not resolve to a
/// movie are skipped silently; the assignment is atomic.
pub async fn assign_movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(movie_ids): Json<Vec<DbId>>,
) -> AppResult<StatusCode> {
    if !FranchiseRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Franchise",
            id,
        }));
    }

    let assigned = MovieRepo::assign_to_franchise(&state.pool, id, &movie_ids).await?;
    tracing::debug!(franchise_id = id, requested = movie_ids.len(), assigned, "assigned movies");
    Ok(StatusCode::NO_CONTENT)
}
