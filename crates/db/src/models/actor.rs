//! Actor entity model and DTOs.

use chrono::NaiveDate;
use cinema_core::dates;
use cinema_core::patch;
use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `actor` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub biography: Option<String>,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub last_name: String,
    #[serde(default, deserialize_with = "dates::optional::deserialize")]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub nationality: Option<String>,
    pub biography: Option<String>,
}

/// DTO for partially updating an actor.
///
/// Absent keys leave the column unchanged; `null` clears nullable columns.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateActor {
    #[serde(default, deserialize_with = "patch::required::deserialize")]
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "patch::required::deserialize")]
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "dates::patch_nullable::deserialize")]
    pub birth_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub nationality: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub biography: Option<Option<String>>,
}
