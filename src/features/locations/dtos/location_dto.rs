use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::locations::models::{City, Country, District};

/// Response DTO for country data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub id: Uuid,
    pub name: String,
    pub iso2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_code: Option<String>,
}

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            name: country.name,
            iso2: country.iso2,
            phone_code: country.phone_code,
        }
    }
}

/// Response DTO for city data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: Uuid,
    pub name: String,
    pub country_id: Uuid,
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            country_id: city.country_id,
        }
    }
}

/// Response DTO for district data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDto {
    pub id: Uuid,
    pub name: String,
    pub city_id: Uuid,
    pub country_id: Uuid,
}

impl From<District> for DistrictDto {
    fn from(district: District) -> Self {
        Self {
            id: district.id,
            name: district.name,
            city_id: district.city_id,
            country_id: district.country_id,
        }
    }
}

/// Composite payload for cities scoped by country
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryCitiesDto {
    pub country: CountryDto,
    pub cities: Vec<CityDto>,
}

/// Composite payload for districts scoped by city
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDistrictsDto {
    pub city: CityDto,
    pub districts: Vec<DistrictDto>,
}
