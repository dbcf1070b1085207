//! User address book feature.
//!
//! Authenticated, owner-scoped CRUD over delivery addresses:
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/addresses` | List the caller's addresses |
//! | POST | `/api/addresses` | Create an address (location chain is verified) |
//! | GET | `/api/addresses/{id}` | Fetch one address |
//! | PATCH | `/api/addresses/{id}` | Partially update an address |
//! | DELETE | `/api/addresses/{id}` | Delete an address |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{AddressService, PgAddressRepository};
