pub mod config;
pub mod crud;
pub mod database;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod openapi;
