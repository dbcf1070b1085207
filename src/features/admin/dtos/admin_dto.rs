use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

// ==================== Country ====================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCountryDto {
    pub name: String,
    pub iso2: String,
    pub phone_code: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCountryDto {
    pub name: Option<String>,
    pub iso2: Option<String>,
    pub phone_code: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryFilterDto {
    pub name: Option<String>,
    pub iso2: Option<String>,
}

// ==================== City ====================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCityDto {
    pub name: String,
    pub country_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCityDto {
    pub name: Option<String>,
    pub country_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityFilterDto {
    pub name: Option<String>,
    pub country_id: Option<Uuid>,
}

// ==================== District ====================

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDistrictDto {
    pub name: String,
    pub city_id: Uuid,
    pub country_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDistrictDto {
    pub name: Option<String>,
    pub city_id: Option<Uuid>,
    pub country_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictFilterDto {
    pub name: Option<String>,
    pub city_id: Option<Uuid>,
    pub country_id: Option<Uuid>,
}
