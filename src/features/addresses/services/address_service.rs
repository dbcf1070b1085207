use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::addresses::dtos::{CreateAddressDto, UpdateAddressDto};
use crate::features::addresses::models::Address;
use crate::features::addresses::services::{AddressInsertError, AddressRepository};
use crate::features::locations::LocationCatalog;

/// User-scoped address operations.
///
/// Validation against the location hierarchy happens here; the
/// repository only persists rows whose chain already checked out.
/// Every call carries the caller's user id, so one user can never read
/// or mutate another user's rows.
pub struct AddressService {
    locations: Arc<dyn LocationCatalog>,
    repo: Arc<dyn AddressRepository>,
}

impl AddressService {
    pub fn new(locations: Arc<dyn LocationCatalog>, repo: Arc<dyn AddressRepository>) -> Self {
        Self { locations, repo }
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Address>> {
        self.repo.list_by_user(user_id).await
    }

    pub async fn get_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Address> {
        self.repo
            .find_for_user(id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Address not found".to_string()))
    }

    /// Create an address after walking the location chain.
    ///
    /// The chain is checked step by step so the caller learns exactly
    /// which reference is wrong: the country must exist, the city must
    /// belong to that country, and the district must belong to both.
    /// Nothing is inserted until every step passes.
    pub async fn create_for_user(&self, user_id: Uuid, dto: CreateAddressDto) -> Result<Address> {
        let country = self.locations.get_country(dto.country).await?;
        let city = self
            .locations
            .get_city_in_country(dto.city, country.id)
            .await?;
        self.locations
            .get_district_in_city(dto.district, country.id, city.id)
            .await?;

        self.repo.insert(user_id, &dto).await.map_err(|e| match e {
            AddressInsertError::Duplicate => AppError::Conflict("Address already exists".to_string()),
            AddressInsertError::Fault(err) => {
                tracing::error!("Failed to create address for user {}: {:?}", user_id, err);
                AppError::Internal("Address creation failed".to_string())
            }
        })
    }

    pub async fn update_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
        dto: UpdateAddressDto,
    ) -> Result<Address> {
        self.repo
            .update_for_user(id, user_id, &dto)
            .await?
            .ok_or_else(|| AppError::NotFound("Address not found".to_string()))
    }

    pub async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        if !self.repo.delete_for_user(id, user_id).await? {
            return Err(AppError::NotFound("Address not found".to_string()));
        }

        Ok(())
    }
}
