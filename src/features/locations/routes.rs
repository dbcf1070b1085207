use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::locations::handlers::{self, LocationState};
use crate::features::locations::services::LocationCatalog;
use crate::modules::cache::ResponseCache;

/// Create routes for the locations feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(locations: Arc<dyn LocationCatalog>, cache: Arc<ResponseCache>) -> Router {
    let state = LocationState { locations, cache };

    Router::new()
        .route("/api/locations/countries", get(handlers::list_countries))
        .route(
            "/api/locations/countries/{country_id}/cities",
            get(handlers::list_cities_by_country),
        )
        .route(
            "/api/locations/cities/{city_id}/districts",
            get(handlers::list_districts_by_city),
        )
        .with_state(state)
}
