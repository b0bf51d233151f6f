//! Handlers for the `/genres` resource.
//!
//! Duplicate names surface as 409 through the `uq_genre_name` constraint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use cinema_db::repositories::GenreRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// POST /genres
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    input.validate().map_err(CoreError::from)?;

    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(GenreRepo::list(&state.pool).await?))
}

/// GET /genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    Ok(Json(genre))
}

/// PUT /genres/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateGenre>,
) -> AppResult<Json<Genre>> {
    input.validate().map_err(CoreError::from)?;

    let genre = GenreRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;
    tracing::info!(genre_id = id, "Genre updated");
    Ok(Json(genre))
}

/// DELETE /genres/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if GenreRepo::delete(&state.pool, id).await? {
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }))
    }
}
