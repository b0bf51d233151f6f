//! Repository for the `production_company` table.

use cinema_core::patch;
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::production_company::{
    CreateProductionCompany, ProductionCompany, UpdateProductionCompany,
};

/// Column list for `production_company` queries.
const COLUMNS: &str = "id, name, country, founding_date, description";

/// Provides CRUD operations for production companies.
pub struct ProductionCompanyRepo;

impl ProductionCompanyRepo {
    /// List all companies ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductionCompany>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM production_company ORDER BY id");
        sqlx::query_as::<_, ProductionCompany>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductionCompany>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM production_company WHERE id = $1");
        sqlx::query_as::<_, ProductionCompany>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CreateProductionCompany,
    ) -> Result<ProductionCompany, sqlx::Error> {
        let query = format!(
            "INSERT INTO production_company (name, country, founding_date, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionCompany>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .bind(input.founding_date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Partially update a company. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProductionCompany,
    ) -> Result<Option<ProductionCompany>, sqlx::Error> {
        let (set_country, country) = patch::split(&input.country);
        let (set_founding_date, founding_date) = patch::split(&input.founding_date);
        let (set_description, description) = patch::split(&input.description);

        let query = format!(
            "UPDATE production_company SET \
                 name          = COALESCE($2, name), \
                 country       = CASE WHEN $3 THEN $4 ELSE country END, \
                 founding_date = CASE WHEN $5 THEN $6 ELSE founding_date END, \
                 description   = CASE WHEN $7 THEN $8 ELSE description END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductionCompany>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(set_country)
            .bind(country)
            .bind(set_founding_date)
            .bind(founding_date)
            .bind(set_description)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company. Movies it produced lose their company reference.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM production_company WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
