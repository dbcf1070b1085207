mod address_repository;
mod address_service;

pub use address_repository::{AddressInsertError, AddressRepository, PgAddressRepository};
pub use address_service::AddressService;
