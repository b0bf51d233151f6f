//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::movie::{CreateMovie, MovieView, UpdateMovie};
use cinema_db::repositories::MovieRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<MovieView>)> {
    input.validate().map_err(CoreError::from)?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(
        movie_id = movie.id,
        actors = movie.actors.len(),
        genres = movie.genres.len(),
        "Movie created"
    );
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MovieView>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MovieView>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Only keys present in the body are applied. `actor_ids` / `genre_ids`
/// replace the whole association set when present.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateMovie>,
) -> AppResult<Json<MovieView>> {
    input.validate().map_err(CoreError::from)?;

    let movie = MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(movie_id = id, "Movie updated");
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if MovieRepo::delete(&state.pool, id).await? {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
