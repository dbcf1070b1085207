use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::features::addresses::dtos::{CreateAddressDto, UpdateAddressDto};
use crate::features::addresses::models::Address;

const ADDRESS_COLUMNS: &str = "id, user_id, country_id, city_id, district_id, label, recipient, \
                               phone, line1, line2, postal_code, created_at, updated_at";

/// Why an insert was rejected. The service layer decides what each
/// variant means for the HTTP response.
#[derive(Debug)]
pub enum AddressInsertError {
    /// A row with the same unique key already exists for this user.
    Duplicate,
    /// Any other storage failure.
    Fault(sqlx::Error),
}

/// Storage for address rows. Every method takes the owning user's id,
/// so a row belonging to someone else behaves as if it did not exist.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Address>>;

    async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Address>>;

    /// Insert a fully resolved address. The location ids in `dto` must
    /// already be verified; this method does not re-check the chain.
    async fn insert(
        &self,
        user_id: Uuid,
        dto: &CreateAddressDto,
    ) -> std::result::Result<Address, AddressInsertError>;

    /// Patch the row, leaving absent fields untouched. Returns `None`
    /// when no row matched the (id, user_id) pair.
    async fn update_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
        dto: &UpdateAddressDto,
    ) -> Result<Option<Address>>;

    /// Returns `true` when a row was deleted.
    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool>;
}

pub struct PgAddressRepository {
    pool: PgPool,
}

impl PgAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(&format!(
            "SELECT {} FROM addresses WHERE user_id = $1 ORDER BY created_at DESC",
            ADDRESS_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list addresses for user {}: {:?}", user_id, e);
            AppError::Database(e)
        })?;

        Ok(addresses)
    }

    async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Address>> {
        sqlx::query_as::<_, Address>(&format!(
            "SELECT {} FROM addresses WHERE id = $1 AND user_id = $2",
            ADDRESS_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch address {} for user {}: {:?}", id, user_id, e);
            AppError::Database(e)
        })
    }

    async fn insert(
        &self,
        user_id: Uuid,
        dto: &CreateAddressDto,
    ) -> std::result::Result<Address, AddressInsertError> {
        sqlx::query_as::<_, Address>(&format!(
            "INSERT INTO addresses \
             (user_id, country_id, city_id, district_id, label, recipient, phone, line1, line2, postal_code) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {}",
            ADDRESS_COLUMNS
        ))
        .bind(user_id)
        .bind(dto.country)
        .bind(dto.city)
        .bind(dto.district)
        .bind(&dto.label)
        .bind(&dto.recipient)
        .bind(&dto.phone)
        .bind(&dto.line1)
        .bind(&dto.line2)
        .bind(&dto.postal_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AddressInsertError::Duplicate
            } else {
                AddressInsertError::Fault(e)
            }
        })
    }

    async fn update_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
        dto: &UpdateAddressDto,
    ) -> Result<Option<Address>> {
        sqlx::query_as::<_, Address>(&format!(
            "UPDATE addresses SET \
             label = COALESCE($3, label), \
             recipient = COALESCE($4, recipient), \
             phone = COALESCE($5, phone), \
             line1 = COALESCE($6, line1), \
             line2 = COALESCE($7, line2), \
             postal_code = COALESCE($8, postal_code), \
             updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {}",
            ADDRESS_COLUMNS
        ))
        .bind(id)
        .bind(user_id)
        .bind(&dto.label)
        .bind(&dto.recipient)
        .bind(&dto.phone)
        .bind(&dto.line1)
        .bind(&dto.line2)
        .bind(&dto.postal_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::Conflict("Address already exists".to_string());
            }
            tracing::error!("Failed to update address {} for user {}: {:?}", id, user_id, e);
            AppError::Database(e)
        })
    }

    async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete address {} for user {}: {:?}", id, user_id, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
