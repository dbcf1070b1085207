use std::sync::Arc;

use axum::{middleware, Router};

use crate::core::crud;
use crate::features::admin::stores::{CityStore, CountryStore, DistrictStore};
use crate::features::auth::guards::require_super_admin;

/// Create routes for the admin feature
///
/// Note: Mounted under `/api/admin`; every route requires an
/// authenticated super admin on top of the regular JWT layer.
pub fn routes(
    countries: Arc<CountryStore>,
    cities: Arc<CityStore>,
    districts: Arc<DistrictStore>,
) -> Router {
    Router::new()
        .nest("/api/admin/countries", crud::routes(countries))
        .nest("/api/admin/cities", crud::routes(cities))
        .nest("/api/admin/districts", crud::routes(districts))
        .route_layer(middleware::from_fn(require_super_admin))
}
