//! Handlers for the `/actors` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::actor::{Actor, CreateActor, UpdateActor};
use cinema_db::repositories::ActorRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// POST /actors
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateActor>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    input.validate().map_err(CoreError::from)?;

    let actor = ActorRepo::create(&state.pool, &input).await?;
    tracing::info!(actor_id = actor.id, "Actor created");
    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /actors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Actor>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(actors))
}

/// GET /actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))?;
    Ok(Json(actor))
}

/// PUT /actors/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateActor>,
) -> AppResult<Json<Actor>> {
    input.validate().map_err(CoreError::from)?;

    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))?;
    tracing::info!(actor_id = id, "Actor updated");
    Ok(Json(actor))
}

/// DELETE /actors/{id}
///
/// The actor disappears from every cast list.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ActorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(actor_id = id, "Actor deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Actor",
            id,
        }))
    }
}
