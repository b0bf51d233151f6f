//! Repository for the `genre` table.
//!
//! Genre names are unique; inserting or renaming onto an existing name
//! fails with a unique violation on `uq_genre_name`.

use cinema_core::patch;
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre, UpdateGenre};

const COLUMNS: &str = "id, name, description";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre ORDER BY id");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genre WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genre (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGenre,
    ) -> Result<Option<Genre>, sqlx::Error> {
        let (set_description, description) = patch::split(&input.description);

        let query = format!(
            "UPDATE genre SET \
                 name        = COALESCE($2, name), \
                 description = CASE WHEN $3 THEN $4 ELSE description END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(set_description)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre, unlinking it from every movie.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genre WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
