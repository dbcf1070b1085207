use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::addresses::models::Address;
use crate::shared::validation::{PHONE_REGEX, POSTAL_CODE_REGEX};

/// Address as returned to the owning user.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub country_id: Uuid,
    pub city_id: Uuid,
    pub district_id: Uuid,
    pub label: String,
    pub recipient: String,
    pub phone: String,
    pub line1: String,
    pub line2: Option<String>,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Address> for AddressResponseDto {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            user_id: address.user_id,
            country_id: address.country_id,
            city_id: address.city_id,
            district_id: address.district_id,
            label: address.label,
            recipient: address.recipient,
            phone: address.phone,
            line1: address.line1,
            line2: address.line2,
            postal_code: address.postal_code,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

/// Payload for creating an address. The referenced country, city and
/// district must form a consistent chain; that is checked against the
/// location tables, not here.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressDto {
    pub country: Uuid,
    pub city: Uuid,
    pub district: Uuid,
    #[validate(length(min = 1, max = 50, message = "Label must be between 1 and 50 characters"))]
    pub label: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Recipient must be between 1 and 100 characters"
    ))]
    pub recipient: String,
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number format"))]
    pub phone: String,
    #[validate(length(
        min = 1,
        max = 200,
        message = "Address line must be between 1 and 200 characters"
    ))]
    pub line1: String,
    #[validate(length(max = 200, message = "Address line must be at most 200 characters"))]
    pub line2: Option<String>,
    #[validate(regex(path = *POSTAL_CODE_REGEX, message = "Invalid postal code format"))]
    pub postal_code: String,
}

/// Partial update of an address. Location references are intentionally
/// absent: changing them would bypass the hierarchy check done at
/// creation time.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressDto {
    #[validate(length(min = 1, max = 50, message = "Label must be between 1 and 50 characters"))]
    pub label: Option<String>,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Recipient must be between 1 and 100 characters"
    ))]
    pub recipient: Option<String>,
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number format"))]
    pub phone: Option<String>,
    #[validate(length(
        min = 1,
        max = 200,
        message = "Address line must be between 1 and 200 characters"
    ))]
    pub line1: Option<String>,
    #[validate(length(max = 200, message = "Address line must be at most 200 characters"))]
    pub line2: Option<String>,
    #[validate(regex(path = *POSTAL_CODE_REGEX, message = "Invalid postal code format"))]
    pub postal_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_create_dto() -> CreateAddressDto {
        CreateAddressDto {
            country: Uuid::new_v4(),
            city: Uuid::new_v4(),
            district: Uuid::new_v4(),
            label: "Home".to_string(),
            recipient: Name().fake(),
            phone: "+6281234567890".to_string(),
            line1: "Jl. Merdeka No. 1".to_string(),
            line2: None,
            postal_code: "40115".to_string(),
        }
    }

    #[test]
    fn valid_create_dto_passes() {
        assert!(valid_create_dto().validate().is_ok());
    }

    #[test]
    fn create_dto_rejects_bad_phone() {
        let mut dto = valid_create_dto();
        dto.phone = "not-a-phone".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_rejects_empty_label() {
        let mut dto = valid_create_dto();
        dto.label = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn create_dto_rejects_bad_postal_code() {
        let mut dto = valid_create_dto();
        dto.postal_code = "ab".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_dto_all_none_passes() {
        let dto = UpdateAddressDto {
            label: None,
            recipient: None,
            phone: None,
            line1: None,
            line2: None,
            postal_code: None,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_dto_rejects_bad_phone() {
        let dto = UpdateAddressDto {
            label: None,
            recipient: None,
            phone: Some("abc".to_string()),
            line1: None,
            line2: None,
            postal_code: None,
        };
        assert!(dto.validate().is_err());
    }
}
