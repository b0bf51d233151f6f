//! Repository for the `movie` table and its `movie_actors` / `movie_genres`
//! join tables.
//!
//! Reads go through [`VIEW_SELECT`], which resolves the director, company,
//! cast and genres into display strings in a single query. Writes that touch
//! more than one table run in one transaction.

use cinema_core::patch;
use cinema_core::types::DbId;
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::movie::{CreateMovie, MovieView, UpdateMovie};

/// Denormalized projection backing [`MovieView`]. Callers append the
/// `WHERE` / `ORDER BY` clause.
const VIEW_SELECT: &str = "\
    SELECT m.id, m.title, m.description, m.release_date, \
           m.budget, m.box_office, m.duration, \
           CASE WHEN d.id IS NULL THEN NULL \
                ELSE d.first_name || ' ' || d.last_name END AS director, \
           pc.name AS production_company, \
           COALESCE(( \
               SELECT array_agg(a.first_name || ' ' || a.last_name ORDER BY a.id) \
               FROM movie_actors ma \
               JOIN actor a ON a.id = ma.actor_id \
               WHERE ma.movie_id = m.id \
           ), ARRAY[]::TEXT[]) AS actors, \
           COALESCE(( \
               SELECT array_agg(g.name::TEXT ORDER BY g.id) \
               FROM movie_genres mg \
               JOIN genre g ON g.id = mg.genre_id \
               WHERE mg.movie_id = m.id \
           ), ARRAY[]::TEXT[]) AS genres \
    FROM movie m \
    LEFT JOIN director d ON d.id = m.director_id \
    LEFT JOIN production_company pc ON pc.id = m.production_company_id";

/// Provides CRUD operations for movies and their associations.
pub struct MovieRepo;

impl MovieRepo {
    /// List all movies ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieView>, sqlx::Error> {
        let query = format!("{VIEW_SELECT} ORDER BY m.id");
        sqlx::query_as::<_, MovieView>(&query).fetch_all(pool).await
    }

    /// Find a movie's denormalized view by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieView>, sqlx::Error> {
        Self::fetch_view(pool, id).await
    }

    /// Insert a movie and link the listed actors and genres.
    ///
    /// Ids in `actor_ids` / `genre_ids` with no matching row are skipped.
    /// An unknown `director_id` or `production_company_id` fails with a
    /// foreign key violation and nothing is stored.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<MovieView, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO movie \
                 (title, description, release_date, budget, box_office, duration, \
                  director_id, production_company_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.release_date)
        .bind(input.budget)
        .bind(input.box_office)
        .bind(input.duration)
        .bind(input.director_id)
        .bind(input.production_company_id)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(actor_ids) = &input.actor_ids {
            Self::replace_actors(&mut tx, id, actor_ids).await?;
        }
        if let Some(genre_ids) = &input.genre_ids {
            Self::replace_genres(&mut tx, id, genre_ids).await?;
        }

        let view = Self::fetch_view(&mut *tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;
        Ok(view)
    }

    /// Partially update a movie.
    ///
    /// Scalar columns follow the usual patch rules. A present `actor_ids` or
    /// `genre_ids` replaces the whole association set; `null` clears it.
    /// Returns `None` if no movie with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<MovieView>, sqlx::Error> {
        let (set_description, description) = patch::split(&input.description);
        let (set_budget, budget) = patch::split(&input.budget);
        let (set_box_office, box_office) = patch::split(&input.box_office);
        let (set_duration, duration) = patch::split(&input.duration);
        let (set_director, director_id) = patch::split(&input.director_id);
        let (set_company, company_id) = patch::split(&input.production_company_id);

        let mut tx = pool.begin().await?;

        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE movie SET \
                 title                 = COALESCE($2, title), \
                 description           = CASE WHEN $3 THEN $4 ELSE description END, \
                 release_date          = COALESCE($5, release_date), \
                 budget                = CASE WHEN $6 THEN $7 ELSE budget END, \
                 box_office            = CASE WHEN $8 THEN $9 ELSE box_office END, \
                 duration              = CASE WHEN $10 THEN $11 ELSE duration END, \
                 director_id           = CASE WHEN $12 THEN $13 ELSE director_id END, \
                 production_company_id = CASE WHEN $14 THEN $15 ELSE production_company_id END \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(&input.title)
        .bind(set_description)
        .bind(description)
        .bind(input.release_date)
        .bind(set_budget)
        .bind(budget)
        .bind(set_box_office)
        .bind(box_office)
        .bind(set_duration)
        .bind(duration)
        .bind(set_director)
        .bind(director_id)
        .bind(set_company)
        .bind(company_id)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(actor_ids) = &input.actor_ids {
            Self::replace_actors(&mut tx, id, actor_ids.as_deref().unwrap_or_default()).await?;
        }
        if let Some(genre_ids) = &input.genre_ids {
            Self::replace_genres(&mut tx, id, genre_ids.as_deref().unwrap_or_default()).await?;
        }

        let view = Self::fetch_view(&mut *tx, id).await?;
        tx.commit().await?;
        Ok(view)
    }

    /// Delete a movie. Its cast and genre links go with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Associations
    // -----------------------------------------------------------------------

    /// Replace the cast of a movie with the given actors.
    ///
    /// Existing links are removed first; only ids that match an `actor` row
    /// are linked. Returns the number of links written.
    pub async fn replace_actors(
        conn: &mut PgConnection,
        movie_id: DbId,
        actor_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *conn)
            .await?;

        if actor_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "INSERT INTO movie_actors (movie_id, actor_id) \
             SELECT $1, a.id FROM actor a WHERE a.id = ANY($2)",
        )
        .bind(movie_id)
        .bind(actor_ids)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Replace the genres of a movie. Same rules as [`Self::replace_actors`].
    pub async fn replace_genres(
        conn: &mut PgConnection,
        movie_id: DbId,
        genre_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *conn)
            .await?;

        if genre_ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query(
            "INSERT INTO movie_genres (movie_id, genre_id) \
             SELECT $1, g.id FROM genre g WHERE g.id = ANY($2)",
        )
        .bind(movie_id)
        .bind(genre_ids)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected())
    }

    async fn fetch_view<'e, E>(executor: E, id: DbId) -> Result<Option<MovieView>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("{VIEW_SELECT} WHERE m.id = $1");
        sqlx::query_as::<_, MovieView>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
