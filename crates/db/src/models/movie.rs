//! Movie read view and DTOs.

use chrono::NaiveDate;
use cinema_core::dates;
use cinema_core::patch;
use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Read view
// ---------------------------------------------------------------------------

/// The external representation of a movie.
///
/// Relations are rendered as display strings instead of ids: `director` is
/// `"First Last"`, `production_company` is the company name, `actors` are
/// `"First Last"` strings and `genres` are names. Lists are ordered by the
/// related row's id.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MovieView {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_date: NaiveDate,
    pub budget: Option<f64>,
    pub box_office: Option<f64>,
    pub duration: Option<i32>,
    pub director: Option<String>,
    pub production_company: Option<String>,
    pub actors: Vec<String>,
    pub genres: Vec<String>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new movie.
///
/// `actor_ids` / `genre_ids` that do not match an existing row are ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "dates::required::deserialize")]
    pub release_date: NaiveDate,
    pub budget: Option<f64>,
    pub box_office: Option<f64>,
    pub duration: Option<i32>,
    pub director_id: Option<DbId>,
    pub production_company_id: Option<DbId>,
    #[serde(default)]
    pub actor_ids: Option<Vec<DbId>>,
    #[serde(default)]
    pub genre_ids: Option<Vec<DbId>>,
}

/// DTO for partially updating a movie.
///
/// When `actor_ids` or `genre_ids` is present the whole association set is
/// replaced; `null` and `[]` both clear it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[serde(default, deserialize_with = "patch::required::deserialize")]
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "dates::patch_required::deserialize")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub budget: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub box_office: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub duration: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub director_id: Option<Option<DbId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub production_company_id: Option<Option<DbId>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub actor_ids: Option<Option<Vec<DbId>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub genre_ids: Option<Option<Vec<DbId>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_title_and_release_date() {
        assert!(serde_json::from_str::<CreateMovie>(r#"{"title": "Heat"}"#).is_err());
        assert!(serde_json::from_str::<CreateMovie>(r#"{"release_date": "1995-12-15"}"#).is_err());
    }

    #[test]
    fn create_ignores_unknown_keys() {
        let input: CreateMovie = serde_json::from_str(
            r#"{"title": "Heat", "release_date": "1995-12-15", "rating": 5, "director": "x"}"#,
        )
        .unwrap();
        assert_eq!(input.title, "Heat");
        assert!(input.actor_ids.is_none());
        assert!(input.director_id.is_none());
    }

    #[test]
    fn create_title_length_is_validated() {
        let input: CreateMovie = serde_json::from_value(serde_json::json!({
            "title": "x".repeat(101),
            "release_date": "1995-12-15",
        }))
        .unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn update_association_keys_have_three_states() {
        let absent: UpdateMovie = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.actor_ids, None);

        let cleared: UpdateMovie = serde_json::from_str(r#"{"actor_ids": null}"#).unwrap();
        assert_eq!(cleared.actor_ids, Some(None));

        let replaced: UpdateMovie = serde_json::from_str(r#"{"actor_ids": [2, 3]}"#).unwrap();
        assert_eq!(replaced.actor_ids, Some(Some(vec![2, 3])));
    }

    #[test]
    fn update_title_cannot_be_null() {
        assert!(serde_json::from_str::<UpdateMovie>(r#"{"title": null}"#).is_err());
    }

    #[test]
    fn update_nullable_columns_can_be_cleared() {
        let input: UpdateMovie =
            serde_json::from_str(r#"{"budget": null, "director_id": 4}"#).unwrap();
        assert_eq!(input.budget, Some(None));
        assert_eq!(input.director_id, Some(Some(4)));
        assert_eq!(input.box_office, None);
    }
}
