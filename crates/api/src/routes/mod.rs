//! Route assembly.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{character, franchise, movie};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /franchise                                 GET list, POST create
/// /franchise/{id}                            GET, PUT, DELETE
/// /franchise/moviesByFranchise/{id}          GET movies of a franchise
/// /franchise/charactersByFranchise/{id}      GET characters reachable via its movies
/// /franchise/movie/{id}                      POST bulk-assign movies
///
/// /movie                                     GET list, POST create
/// /movie/{id}                                GET, PUT, DELETE
/// /movie/{id}/characters                     GET list, PUT replace character set
///
/// /character                                 GET list, POST create
/// /character/{id}                            GET, PUT, DELETE
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/franchise", franchise_routes())
        .nest("/movie", movie_routes())
        .nest("/character", character_routes())
}

fn franchise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(franchise::get_all).post(franchise::create))
        .route(
            "/{id}",
            get(franchise::get_by_id)
                .put(franchise::update)
                .delete(franchise::delete),
        )
        .route(
            "/moviesByFranchise/{id}",
            get(franchise::movies_by_franchise),
        )
        .route(
            "/charactersByFranchise/{id}",
            get(franchise::characters_by_franchise),
        )
        .route("/movie/{id}", post(franchise::assign_movies))
}

fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::get_all).post(movie::create))
        .route(
            "/{id}",
            get(movie::get_by_id).put(movie::update).delete(movie::delete),
        )
        .route(
            "/{id}/characters",
            get(movie::characters).put(movie::set_characters),
        )
}

fn character_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(character::get_all).post(character::create))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        )
}
