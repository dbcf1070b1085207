use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::addresses::handlers;
use crate::features::addresses::services::AddressService;

/// Create routes for the addresses feature
///
/// Note: All endpoints require authentication; the caller only ever
/// sees their own addresses.
pub fn routes(service: Arc<AddressService>) -> Router {
    Router::new()
        .route(
            "/api/addresses",
            get(handlers::list_addresses).post(handlers::create_address),
        )
        .route(
            "/api/addresses/{id}",
            get(handlers::get_address)
                .patch(handlers::update_address)
                .delete(handlers::delete_address),
        )
        .with_state(service)
}
