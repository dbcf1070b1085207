//! Admin feature: direct entity management for the location tables.
//!
//! Each entity is exposed through the generic CRUD surface under
//! `/api/admin/{countries,cities,districts}`; see [`crate::core::crud`]
//! for the route shape and envelope conventions. Super admin only.

pub mod dtos;
pub mod routes;
pub mod stores;
