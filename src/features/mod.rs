pub mod addresses;
pub mod admin;
pub mod auth;
pub mod locations;
