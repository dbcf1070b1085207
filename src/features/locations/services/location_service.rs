use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{City, Country, District};

const COUNTRY_COLUMNS: &str = "id, name, iso2, phone_code, created_at, updated_at";
const CITY_COLUMNS: &str = "id, name, country_id, created_at, updated_at";
const DISTRICT_COLUMNS: &str = "id, name, city_id, country_id, created_at, updated_at";

/// Read side of the location hierarchy.
///
/// The `get_*` lookups double as the existence checks of the address
/// validation chain, so their NotFound messages are part of the API
/// contract. The scoped variants treat a row under the wrong parent as
/// absent.
#[async_trait]
pub trait LocationCatalog: Send + Sync {
    async fn list_countries(&self) -> Result<Vec<Country>>;
    async fn get_country(&self, id: Uuid) -> Result<Country>;
    async fn list_cities_by_country(&self, country_id: Uuid) -> Result<Vec<City>>;
    async fn get_city(&self, id: Uuid) -> Result<City>;
    async fn get_city_in_country(&self, id: Uuid, country_id: Uuid) -> Result<City>;
    async fn list_districts_by_city(&self, city_id: Uuid) -> Result<Vec<District>>;
    async fn get_district_in_city(
        &self,
        id: Uuid,
        country_id: Uuid,
        city_id: Uuid,
    ) -> Result<District>;
}

/// Postgres-backed catalog over the seeded location tables.
pub struct LocationService {
    pool: PgPool,
}

impl LocationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationCatalog for LocationService {
    async fn list_countries(&self) -> Result<Vec<Country>> {
        let countries = sqlx::query_as::<_, Country>(&format!(
            "SELECT {} FROM countries ORDER BY name ASC",
            COUNTRY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list countries: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(countries)
    }

    async fn get_country(&self, id: Uuid) -> Result<Country> {
        sqlx::query_as::<_, Country>(&format!(
            "SELECT {} FROM countries WHERE id = $1",
            COUNTRY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch country {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Country not found".to_string()))
    }

    async fn list_cities_by_country(&self, country_id: Uuid) -> Result<Vec<City>> {
        let cities = sqlx::query_as::<_, City>(&format!(
            "SELECT {} FROM cities WHERE country_id = $1 ORDER BY name ASC",
            CITY_COLUMNS
        ))
        .bind(country_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cities for country {}: {:?}", country_id, e);
            AppError::Database(e)
        })?;

        Ok(cities)
    }

    async fn get_city(&self, id: Uuid) -> Result<City> {
        sqlx::query_as::<_, City>(&format!("SELECT {} FROM cities WHERE id = $1", CITY_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch city {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound("City not found".to_string()))
    }

    async fn get_city_in_country(&self, id: Uuid, country_id: Uuid) -> Result<City> {
        sqlx::query_as::<_, City>(&format!(
            "SELECT {} FROM cities WHERE id = $1 AND country_id = $2",
            CITY_COLUMNS
        ))
        .bind(id)
        .bind(country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch city {} in country {}: {:?}", id, country_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("City not found".to_string()))
    }

    async fn list_districts_by_city(&self, city_id: Uuid) -> Result<Vec<District>> {
        let districts = sqlx::query_as::<_, District>(&format!(
            "SELECT {} FROM districts WHERE city_id = $1 ORDER BY name ASC",
            DISTRICT_COLUMNS
        ))
        .bind(city_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list districts for city {}: {:?}", city_id, e);
            AppError::Database(e)
        })?;

        Ok(districts)
    }

    async fn get_district_in_city(
        &self,
        id: Uuid,
        country_id: Uuid,
        city_id: Uuid,
    ) -> Result<District> {
        sqlx::query_as::<_, District>(&format!(
            "SELECT {} FROM districts WHERE id = $1 AND country_id = $2 AND city_id = $3",
            DISTRICT_COLUMNS
        ))
        .bind(id)
        .bind(country_id)
        .bind(city_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch district {} in city {}: {:?}", id, city_id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("District not found".to_string()))
    }
}
