use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::crud::{map_create_error, CrudStore, EntityNames};
use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::{CreateDistrictDto, DistrictFilterDto, UpdateDistrictDto};
use crate::features::locations::models::District;

const COLUMNS: &str = "id, name, city_id, country_id, created_at, updated_at";

const FILTER_CLAUSE: &str = "($1::text IS NULL OR name = $1) \
                             AND ($2::uuid IS NULL OR city_id = $2) \
                             AND ($3::uuid IS NULL OR country_id = $3)";

const NAMES: EntityNames = EntityNames {
    singular: "District",
    plural: "Districts",
};

pub struct DistrictStore {
    pool: PgPool,
}

impl DistrictStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudStore for DistrictStore {
    type Entity = District;
    type Filter = DistrictFilterDto;
    type Create = CreateDistrictDto;
    type Update = UpdateDistrictDto;

    fn names(&self) -> &EntityNames {
        &NAMES
    }

    async fn fetch_all(&self) -> Result<Vec<District>> {
        let rows = sqlx::query_as::<_, District>(&format!(
            "SELECT {} FROM districts ORDER BY name ASC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn fetch_all_by_filter(&self, filter: DistrictFilterDto) -> Result<Vec<District>> {
        let rows = sqlx::query_as::<_, District>(&format!(
            "SELECT {} FROM districts WHERE {} ORDER BY name ASC",
            COLUMNS, FILTER_CLAUSE
        ))
        .bind(&filter.name)
        .bind(filter.city_id)
        .bind(filter.country_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(rows)
    }

    async fn fetch_one_by_filter(&self, filter: DistrictFilterDto) -> Result<Option<District>> {
        let row = sqlx::query_as::<_, District>(&format!(
            "SELECT {} FROM districts WHERE {} LIMIT 1",
            COLUMNS, FILTER_CLAUSE
        ))
        .bind(&filter.name)
        .bind(filter.city_id)
        .bind(filter.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn fetch_one_by_id(&self, id: Uuid) -> Result<Option<District>> {
        let row = sqlx::query_as::<_, District>(&format!(
            "SELECT {} FROM districts WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn create(&self, input: CreateDistrictDto) -> Result<District> {
        sqlx::query_as::<_, District>(&format!(
            "INSERT INTO districts (name, city_id, country_id) VALUES ($1, $2, $3) RETURNING {}",
            COLUMNS
        ))
        .bind(&input.name)
        .bind(input.city_id)
        .bind(input.country_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_create_error(e, &NAMES))
    }

    async fn update_by_id(&self, id: Uuid, update: UpdateDistrictDto) -> Result<Option<District>> {
        let row = sqlx::query_as::<_, District>(&format!(
            "UPDATE districts SET \
             name = COALESCE($2, name), \
             city_id = COALESCE($3, city_id), \
             country_id = COALESCE($4, country_id), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .bind(&update.name)
        .bind(update.city_id)
        .bind(update.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn update_by_filter(
        &self,
        filter: DistrictFilterDto,
        update: UpdateDistrictDto,
    ) -> Result<Option<District>> {
        let row = sqlx::query_as::<_, District>(&format!(
            "UPDATE districts SET \
             name = COALESCE($4, name), \
             city_id = COALESCE($5, city_id), \
             country_id = COALESCE($6, country_id), \
             updated_at = NOW() \
             WHERE id = (SELECT id FROM districts WHERE {} LIMIT 1) RETURNING {}",
            FILTER_CLAUSE, COLUMNS
        ))
        .bind(&filter.name)
        .bind(filter.city_id)
        .bind(filter.country_id)
        .bind(&update.name)
        .bind(update.city_id)
        .bind(update.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<District>> {
        let row = sqlx::query_as::<_, District>(&format!(
            "DELETE FROM districts WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }

    async fn delete_by_filter(&self, filter: DistrictFilterDto) -> Result<Option<District>> {
        let row = sqlx::query_as::<_, District>(&format!(
            "DELETE FROM districts \
             WHERE id = (SELECT id FROM districts WHERE {} LIMIT 1) RETURNING {}",
            FILTER_CLAUSE, COLUMNS
        ))
        .bind(&filter.name)
        .bind(filter.city_id)
        .bind(filter.country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(row)
    }
}
