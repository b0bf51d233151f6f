//! Handlers for the `/directors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::director::{CreateDirector, Director, UpdateDirector};
use cinema_db::repositories::DirectorRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// POST /directors
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateDirector>,
) -> AppResult<(StatusCode, Json<Director>)> {
    input.validate().map_err(CoreError::from)?;

    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");
    Ok((StatusCode::CREATED, Json(director)))
}

/// GET /directors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}

/// PUT /directors/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateDirector>,
) -> AppResult<Json<Director>> {
    input.validate().map_err(CoreError::from)?;

    let director = DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    tracing::info!(director_id = id, "Director updated");
    Ok(Json(director))
}

/// DELETE /directors/{id}
///
/// Movies by this director stay, with `director` rendered as `null`.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(director_id = id, "Director deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))
    }
}
