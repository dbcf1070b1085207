use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::core::error::ErrorResponse;
use crate::features::addresses::{dtos as addresses_dtos, handlers as addresses_handlers};
use crate::features::admin::dtos as admin_dtos;
use crate::features::auth;
use crate::features::locations::{dtos as locations_dtos, handlers as locations_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Locations (public)
        locations_handlers::list_countries,
        locations_handlers::list_cities_by_country,
        locations_handlers::list_districts_by_city,
        // Addresses (protected)
        addresses_handlers::list_addresses,
        addresses_handlers::get_address,
        addresses_handlers::create_address,
        addresses_handlers::update_address,
        addresses_handlers::delete_address,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Auth
            auth::model::AuthenticatedUser,
            // Locations
            locations_dtos::CountryDto,
            locations_dtos::CityDto,
            locations_dtos::DistrictDto,
            locations_dtos::CountryCitiesDto,
            locations_dtos::CityDistrictsDto,
            ApiResponse<Vec<locations_dtos::CountryDto>>,
            ApiResponse<locations_dtos::CountryCitiesDto>,
            ApiResponse<locations_dtos::CityDistrictsDto>,
            // Addresses
            addresses_dtos::AddressResponseDto,
            addresses_dtos::CreateAddressDto,
            addresses_dtos::UpdateAddressDto,
            ApiResponse<Vec<addresses_dtos::AddressResponseDto>>,
            ApiResponse<addresses_dtos::AddressResponseDto>,
            ApiResponse<Option<addresses_dtos::AddressResponseDto>>,
            // Admin (generic CRUD payloads; routes are served generically)
            admin_dtos::CreateCountryDto,
            admin_dtos::UpdateCountryDto,
            admin_dtos::CountryFilterDto,
            admin_dtos::CreateCityDto,
            admin_dtos::UpdateCityDto,
            admin_dtos::CityFilterDto,
            admin_dtos::CreateDistrictDto,
            admin_dtos::UpdateDistrictDto,
            admin_dtos::DistrictFilterDto,
        )
    ),
    tags(
        (name = "locations", description = "Location hierarchy (countries, cities, districts)"),
        (name = "addresses", description = "User address book"),
        (name = "admin", description = "Location entity management (super admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Address Book API",
        version = "0.1.0",
        description = "API documentation for the address book backend",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_every_annotated_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/locations/countries",
            "/api/locations/countries/{country_id}/cities",
            "/api/locations/cities/{city_id}/districts",
            "/api/addresses",
            "/api/addresses/{id}",
        ] {
            assert!(paths.contains_key(path), "missing path: {}", path);
        }
    }

    #[test]
    fn security_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn info_modifier_overrides_title_and_version() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Renamed".to_string(),
            version: "9.9.9".to_string(),
            description: "Overridden".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Renamed");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Overridden"));
    }
}
