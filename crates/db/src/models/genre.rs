//! Genre entity model and DTOs.

use cinema_core::patch;
use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `genre` table. `name` is unique (`uq_genre_name`).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGenre {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for partially updating a genre.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGenre {
    #[serde(default, deserialize_with = "patch::required::deserialize")]
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}
