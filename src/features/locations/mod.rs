//! Location hierarchy feature.
//!
//! Public read endpoints over the seeded location data:
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/locations/countries` | List all countries |
//! | GET | `/api/locations/countries/{country_id}/cities` | List cities in a country |
//! | GET | `/api/locations/cities/{city_id}/districts` | List districts in a city |
//!
//! Scoped listings return a composite payload pairing the parent with its
//! children. Non-empty payloads are mirrored into the response cache.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{LocationCatalog, LocationService};
