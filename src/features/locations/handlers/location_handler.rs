use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::Method,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::locations::dtos::{
    CityDistrictsDto, CityDto, CountryCitiesDto, CountryDto, DistrictDto,
};
use crate::features::locations::services::LocationCatalog;
use crate::modules::cache::ResponseCache;
use crate::shared::types::ApiResponse;

#[derive(Clone)]
pub struct LocationState {
    pub locations: Arc<dyn LocationCatalog>,
    pub cache: Arc<ResponseCache>,
}

/// Store a payload under the request's cache key. The outcome never
/// changes the response; failures are only logged.
async fn cache_response<T: serde::Serialize>(
    state: &LocationState,
    method: &Method,
    uri: &axum::http::Uri,
    payload: &T,
) {
    let key = ResponseCache::request_key(method, uri);
    if let Err(e) = state.cache.store(&key, payload).await {
        tracing::warn!("Failed to cache response for {}: {}", uri, e);
    }
}

/// List all countries
#[utoipa::path(
    get,
    path = "/api/locations/countries",
    responses(
        (status = 200, description = "List of countries", body = ApiResponse<Vec<CountryDto>>),
    ),
    tag = "locations"
)]
pub async fn list_countries(
    State(state): State<LocationState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<ApiResponse<Vec<CountryDto>>> {
    let countries = state.locations.list_countries().await?;
    let dtos: Vec<CountryDto> = countries.into_iter().map(Into::into).collect();

    // An empty collection is a valid response but not worth caching.
    if !dtos.is_empty() {
        cache_response(&state, &method, &uri, &dtos).await;
    }

    Ok(ApiResponse::ok(dtos, "Countries fetched successfully"))
}

/// List cities in a country
#[utoipa::path(
    get,
    path = "/api/locations/countries/{country_id}/cities",
    params(
        ("country_id" = Uuid, Path, description = "Country ID")
    ),
    responses(
        (status = 200, description = "Country with its cities", body = ApiResponse<CountryCitiesDto>),
        (status = 404, description = "Country not found")
    ),
    tag = "locations"
)]
pub async fn list_cities_by_country(
    State(state): State<LocationState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(country_id): Path<Uuid>,
) -> Result<ApiResponse<CountryCitiesDto>> {
    // Existence gate: an unknown country must 404 before any city query.
    let country = state.locations.get_country(country_id).await?;
    let cities = state.locations.list_cities_by_country(country_id).await?;

    let payload = CountryCitiesDto {
        country: country.into(),
        cities: cities.into_iter().map(Into::into).collect(),
    };

    cache_response(&state, &method, &uri, &payload).await;

    Ok(ApiResponse::ok(payload, "Cities fetched successfully"))
}

/// List districts in a city
#[utoipa::path(
    get,
    path = "/api/locations/cities/{city_id}/districts",
    params(
        ("city_id" = Uuid, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "City with its districts", body = ApiResponse<CityDistrictsDto>),
        (status = 404, description = "City not found")
    ),
    tag = "locations"
)]
pub async fn list_districts_by_city(
    State(state): State<LocationState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Path(city_id): Path<Uuid>,
) -> Result<ApiResponse<CityDistrictsDto>> {
    let city = state.locations.get_city(city_id).await?;
    let districts = state.locations.list_districts_by_city(city_id).await?;

    let payload = CityDistrictsDto {
        city: CityDto::from(city),
        districts: districts.into_iter().map(DistrictDto::from).collect(),
    };

    cache_response(&state, &method, &uri, &payload).await;

    Ok(ApiResponse::ok(payload, "Districts fetched successfully"))
}
