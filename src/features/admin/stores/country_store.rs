use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::crud::{map_create_error, CrudStore, EntityNames};
use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{CountryFilterDto, CreateCountryDto, UpdateCountryDto};
use crate::features::locations::models::Country;

const COLUMNS: &str = "id, name, iso2, phone_code, created_at, updated_at";

// Every filter parameter is optional; a NULL bind matches all rows for
// that column.
const FILTER_CLAUSE: &str = "($1::text IS NULL OR name = $1) AND ($2::text IS NULL OR iso2 = $2)";

const NAMES: EntityNames = EntityNames {
    singular: "Country",
    plural: "Countries",
};

pub struct CountryStore {
    pool: PgPool,
}

impl CountryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudStore for CountryStore {
    type Entity = Country;
    type Filter = CountryFilterDto;
    type Create = CreateCountryDto;
    type Update = UpdateCountryDto;

    fn names(&self) -> &EntityNames {
        &NAMES
    }

    async fn fetch_all(&self) -> Result<Vec<Country>> {
        let rows = sqlx::query_as::<_, Country>(&format!(
            "SELECT {} FROM countries ORDER BY name ASC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn fetch_all_by_filter(&self, filter: CountryFilterDto) -> Result<Vec<Country>> {
        let rows = sqlx::query_as::<_, Country>(&format!(
            "SELECT {} FROM countries WHERE {} ORDER BY name ASC",
            COLUMNS, FILTER_CLAUSE
        ))
        .bind(&filter.name)
        .bind(&filter.iso2)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn fetch_one_by_filter(&self, filter: CountryFilterDto) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, Country>(&format!(
            "SELECT {} FROM countries WHERE {} LIMIT 1",
            COLUMNS, FILTER_CLAUSE
        ))
        .bind(&filter.name)
        .bind(&filter.iso2)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn fetch_one_by_id(&self, id: Uuid) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, Country>(&format!(
            "SELECT {} FROM countries WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn create(&self, input: CreateCountryDto) -> Result<Country> {
        sqlx::query_as::<_, Country>(&format!(
            "INSERT INTO countries (name, iso2, phone_code) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.iso2)
        .bind(&input.phone_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_create_error(e, &NAMES))
    }

    async fn update_by_id(&self, id: Uuid, update: UpdateCountryDto) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, Country>(&format!(
            "UPDATE countries SET \
             name = COALESCE($2, name), \
             iso2 = COALESCE($3, iso2), \
             phone_code = COALESCE($4, phone_code), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .bind(&update.name)
        .bind(&update.iso2)
        .bind(&update.phone_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn update_by_filter(
        &self,
        filter: CountryFilterDto,
        update: UpdateCountryDto,
    ) -> Result<Option<Country>> {
        // Filter updates act on at most one row, mirroring the by-id path.
        let row = sqlx::query_as::<_, Country>(&format!(
            "UPDATE countries SET \
             name = COALESCE($3, name), \
             iso2 = COALESCE($4, iso2), \
             phone_code = COALESCE($5, phone_code), \
             updated_at = NOW() \
             WHERE id = (SELECT id FROM countries WHERE {} LIMIT 1) RETURNING {}",
            FILTER_CLAUSE, COLUMNS
        ))
        .bind(&filter.name)
        .bind(&filter.iso2)
        .bind(&update.name)
        .bind(&update.iso2)
        .bind(&update.phone_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, Country>(&format!(
            "DELETE FROM countries WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn delete_by_filter(&self, filter: CountryFilterDto) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, Country>(&format!(
            "DELETE FROM countries \
             WHERE id = (SELECT id FROM countries WHERE {} LIMIT 1) RETURNING {}",
            FILTER_CLAUSE, COLUMNS
        ))
        .bind(&filter.name)
        .bind(&filter.iso2)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }
}
