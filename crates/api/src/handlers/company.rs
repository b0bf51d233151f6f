//! Handlers for the `/companies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::production_company::{
    CreateProductionCompany, ProductionCompany, UpdateProductionCompany,
};
use cinema_db::repositories::ProductionCompanyRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

const ENTITY: &str = "ProductionCompany";

/// POST /companies
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProductionCompany>,
) -> AppResult<(StatusCode, Json<ProductionCompany>)> {
    input.validate().map_err(CoreError::from)?;

    let company = ProductionCompanyRepo::create(&state.pool, &input).await?;
    tracing::info!(company_id = company.id, name = %company.name, "Production company created");
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /companies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProductionCompany>>> {
    let companies = ProductionCompanyRepo::list(&state.pool).await?;
    Ok(Json(companies))
}

/// GET /companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ProductionCompany>> {
    let company = ProductionCompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(company))
}

/// PUT /companies/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateProductionCompany>,
) -> AppResult<Json<ProductionCompany>> {
    input.validate().map_err(CoreError::from)?;

    let company = ProductionCompanyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(company_id = id, "Production company updated");
    Ok(Json(company))
}

/// DELETE /companies/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProductionCompanyRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }
    tracing::info!(company_id = id, "Production company deleted");
    Ok(StatusCode::NO_CONTENT)
}
