//! Production company entity model and DTOs.

use chrono::NaiveDate;
use cinema_core::dates;
use cinema_core::patch;
use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `production_company` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ProductionCompany {
    pub id: DbId,
    pub name: String,
    pub country: Option<String>,
    pub founding_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// DTO for creating a new production company.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductionCompany {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "dates::optional::deserialize")]
    pub founding_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// DTO for partially updating a production company.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProductionCompany {
    #[serde(default, deserialize_with = "patch::required::deserialize")]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "dates::patch_nullable::deserialize")]
    pub founding_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}
