use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::crud::{map_create_error, CrudStore, EntityNames};
use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{CityFilterDto, CreateCityDto, UpdateCityDto};
use crate::features::locations::models::City;

const COLUMNS: &str = "id, name, country_id, created_at, updated_at";

const FILTER_CLAUSE: &str =
    "($1::text IS NULL OR name = $1) AND ($2::uuid IS NULL OR country_id = $2)";

const NAMES: EntityNames = EntityNames {
    singular: "City",
    plural: "Cities",
};

pub struct CityStore {
    pool: PgPool,
}

impl CityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudStore for CityStore {
    type Entity = City;
    type Filter = CityFilterDto;
    type Create = CreateCityDto;
    type Update = UpdateCityDto;

    fn names(&self) -> &EntityNames {
        &NAMES
    }

    async fn fetch_all(&self) -> Result<Vec<City>> {
        let rows = sqlx::query_as::<_, City>(&format!(
            "SELECT {} FROM cities ORDER BY name ASC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn fetch_all_by_filter(&self, filter: CityFilterDto) -> Result<Vec<City>> {
        let rows = sqlx::query_as::<_, City>(&format!(
            "SELECT {} FROM cities WHERE {} ORDER BY name ASC",
            COLUMNS, FILTER_CLAUSE
        ))
        .bind(&filter.name)
        .bind(filter.country_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn fetch_one_by_filter(&self, filter: CityFilterDto) -> Result<Option<City>> {
        let row = sqlx::query_as::<_, City>(&format!(
            "SELECT {} FROM cities WHERE {} LIMIT 1",
            COLUMNS, FILTER_CLAUSE
        ))
        .bind(&filter.name)
        .bind(filter.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn fetch_one_by_id(&self, id: Uuid) -> Result<Option<City>> {
        let row =
            sqlx::query_as::<_, City>(&format!("SELECT {} FROM cities WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn create(&self, input: CreateCityDto) -> Result<City> {
        sqlx::query_as::<_, City>(&format!(
            "INSERT INTO cities (name, country_id) VALUES ($1, $2) RETURNING {}",
            COLUMNS
        ))
        .bind(&input.name)
        .bind(input.country_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_create_error(e, &NAMES))
    }

    async fn update_by_id(&self, id: Uuid, update: UpdateCityDto) -> Result<Option<City>> {
        let row = sqlx::query_as::<_, City>(&format!(
            "UPDATE cities SET \
             name = COALESCE($2, name), \
             country_id = COALESCE($3, country_id), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .bind(&update.name)
        .bind(update.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn update_by_filter(
        &self,
        filter: CityFilterDto,
        update: UpdateCityDto,
    ) -> Result<Option<City>> {
        let row = sqlx::query_as::<_, City>(&format!(
            "UPDATE cities SET \
             name = COALESCE($3, name), \
             country_id = COALESCE($4, country_id), \
             updated_at = NOW() \
             WHERE id = (SELECT id FROM cities WHERE {} LIMIT 1) RETURNING {}",
            FILTER_CLAUSE, COLUMNS
        ))
        .bind(&filter.name)
        .bind(filter.country_id)
        .bind(&update.name)
        .bind(update.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<City>> {
        let row = sqlx::query_as::<_, City>(&format!(
            "DELETE FROM cities WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn delete_by_filter(&self, filter: CityFilterDto) -> Result<Option<City>> {
        let row = sqlx::query_as::<_, City>(&format!(
            "DELETE FROM cities \
             WHERE id = (SELECT id FROM cities WHERE {} LIMIT 1) RETURNING {}",
            FILTER_CLAUSE, COLUMNS
        ))
        .bind(&filter.name)
        .bind(filter.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }
}
