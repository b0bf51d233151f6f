//! Repository for the `director` table.

use cinema_core::patch;
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::director::{CreateDirector, Director, UpdateDirector};

/// Column list for `director` queries.
const COLUMNS: &str = "id, first_name, last_name, birth_date, nationality, biography";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// List all directors ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Find a director by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM director WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new director, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO director (first_name, last_name, birth_date, nationality, biography) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.birth_date)
            .bind(&input.nationality)
            .bind(&input.biography)
            .fetch_one(pool)
            .await
    }

    /// Partially update a director.
    ///
    /// Required columns use `COALESCE`; nullable columns take a
    /// "provided" flag so an explicit `null` clears them.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        let (set_birth_date, birth_date) = patch::split(&input.birth_date);
        let (set_nationality, nationality) = patch::split(&input.nationality);
        let (set_biography, biography) = patch::split(&input.biography);

        let query = format!(
            "UPDATE director SET \
                 first_name  = COALESCE($2, first_name), \
                 last_name   = COALESCE($3, last_name), \
                 birth_date  = CASE WHEN $4 THEN $5 ELSE birth_date END, \
                 nationality = CASE WHEN $6 THEN $7 ELSE nationality END, \
                 biography   = CASE WHEN $8 THEN $9 ELSE biography END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(set_birth_date)
            .bind(birth_date)
            .bind(set_nationality)
            .bind(nationality)
            .bind(set_biography)
            .bind(biography)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director by ID. Returns `true` if a row was removed.
    ///
    /// Movies directed by this director keep existing with no director.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM director WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
