use std::sync::Arc;

use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::addresses::dtos::{AddressResponseDto, CreateAddressDto, UpdateAddressDto};
use crate::features::addresses::services::AddressService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// List the caller's addresses
#[utoipa::path(
    get,
    path = "/api/addresses",
    responses(
        (status = 200, description = "Addresses owned by the caller", body = ApiResponse<Vec<AddressResponseDto>>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "addresses"
)]
pub async fn list_addresses(
    user: AuthenticatedUser,
    State(service): State<Arc<AddressService>>,
) -> Result<ApiResponse<Vec<AddressResponseDto>>> {
    let addresses = service.list_by_user(user.id).await?;
    let dtos: Vec<AddressResponseDto> = addresses.into_iter().map(Into::into).collect();

    Ok(ApiResponse::ok(dtos, "User addresses fetched successfully"))
}

/// Fetch one of the caller's addresses
#[utoipa::path(
    get,
    path = "/api/addresses/{id}",
    params(
        ("id" = Uuid, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address detail", body = ApiResponse<AddressResponseDto>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Address not found")
    ),
    security(("bearer_auth" = [])),
    tag = "addresses"
)]
pub async fn get_address(
    user: AuthenticatedUser,
    State(service): State<Arc<AddressService>>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<AddressResponseDto>> {
    let address = service.get_for_user(id, user.id).await?;

    Ok(ApiResponse::ok(
        address.into(),
        "User address fetched successfully",
    ))
}

/// Create an address for the caller
#[utoipa::path(
    post,
    path = "/api/addresses",
    request_body = CreateAddressDto,
    responses(
        (status = 201, description = "Address created", body = ApiResponse<AddressResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Referenced location not found"),
        (status = 409, description = "Duplicate address label"),
        (status = 500, description = "Address creation failed")
    ),
    security(("bearer_auth" = [])),
    tag = "addresses"
)]
pub async fn create_address(
    user: AuthenticatedUser,
    State(service): State<Arc<AddressService>>,
    AppJson(dto): AppJson<CreateAddressDto>,
) -> Result<ApiResponse<AddressResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let address = service.create_for_user(user.id, dto).await?;

    Ok(ApiResponse::created(
        address.into(),
        "Address created successfully",
    ))
}

/// Update one of the caller's addresses
#[utoipa::path(
    patch,
    path = "/api/addresses/{id}",
    params(
        ("id" = Uuid, Path, description = "Address ID")
    ),
    request_body = UpdateAddressDto,
    responses(
        (status = 200, description = "Address updated", body = ApiResponse<AddressResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Address not found")
    ),
    security(("bearer_auth" = [])),
    tag = "addresses"
)]
pub async fn update_address(
    user: AuthenticatedUser,
    State(service): State<Arc<AddressService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateAddressDto>,
) -> Result<ApiResponse<AddressResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let address = service.update_for_user(id, user.id, dto).await?;

    Ok(ApiResponse::ok(
        address.into(),
        "Address updated successfully",
    ))
}

/// Delete one of the caller's addresses
#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    params(
        ("id" = Uuid, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address deleted", body = ApiResponse<Option<AddressResponseDto>>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Address not found")
    ),
    security(("bearer_auth" = [])),
    tag = "addresses"
)]
pub async fn delete_address(
    user: AuthenticatedUser,
    State(service): State<Arc<AddressService>>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Option<AddressResponseDto>>> {
    service.delete_for_user(id, user.id).await?;

    Ok(ApiResponse::ok(None, "Address deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::addresses::models::Address;
    use crate::features::addresses::routes;
    use crate::features::addresses::services::{AddressInsertError, AddressRepository};
    use crate::features::locations::models::{City, Country, District};
    use crate::features::locations::LocationCatalog;
    use crate::shared::test_helpers::{create_plain_user, with_auth_user};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Mutex;

    struct StaticCatalog {
        countries: Vec<Country>,
        cities: Vec<City>,
        districts: Vec<District>,
    }

    #[async_trait]
    impl LocationCatalog for StaticCatalog {
        async fn list_countries(&self) -> Result<Vec<Country>> {
            Ok(self.countries.clone())
        }

        async fn get_country(&self, id: Uuid) -> Result<Country> {
            self.countries
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Country not found".to_string()))
        }

        async fn list_cities_by_country(&self, country_id: Uuid) -> Result<Vec<City>> {
            Ok(self
                .cities
                .iter()
                .filter(|c| c.country_id == country_id)
                .cloned()
                .collect())
        }

        async fn get_city(&self, id: Uuid) -> Result<City> {
            self.cities
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("City not found".to_string()))
        }

        async fn get_city_in_country(&self, id: Uuid, country_id: Uuid) -> Result<City> {
            self.cities
                .iter()
                .find(|c| c.id == id && c.country_id == country_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("City not found".to_string()))
        }

        async fn list_districts_by_city(&self, city_id: Uuid) -> Result<Vec<District>> {
            Ok(self
                .districts
                .iter()
                .filter(|d| d.city_id == city_id)
                .cloned()
                .collect())
        }

        async fn get_district_in_city(
            &self,
            id: Uuid,
            country_id: Uuid,
            city_id: Uuid,
        ) -> Result<District> {
            self.districts
                .iter()
                .find(|d| d.id == id && d.country_id == country_id && d.city_id == city_id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("District not found".to_string()))
        }
    }

    #[derive(Default)]
    struct MemoryAddressRepo {
        rows: Mutex<Vec<Address>>,
    }

    impl MemoryAddressRepo {
        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        fn seed(&self, user_id: Uuid, country_id: Uuid, city_id: Uuid, district_id: Uuid) -> Uuid {
            let now = Utc::now();
            let id = Uuid::new_v4();
            self.rows.lock().unwrap().push(Address {
                id,
                user_id,
                country_id,
                city_id,
                district_id,
                label: "Home".to_string(),
                recipient: "Siti Rahma".to_string(),
                phone: "+6281234567890".to_string(),
                line1: "Jl. Merdeka No. 1".to_string(),
                line2: None,
                postal_code: "40115".to_string(),
                created_at: now,
                updated_at: now,
            });
            id
        }
    }

    #[async_trait]
    impl AddressRepository for MemoryAddressRepo {
        async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Address>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Address>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == id && a.user_id == user_id)
                .cloned())
        }

        async fn insert(
            &self,
            user_id: Uuid,
            dto: &CreateAddressDto,
        ) -> std::result::Result<Address, AddressInsertError> {
            if dto.label == "poison" {
                return Err(AddressInsertError::Fault(sqlx::Error::PoolClosed));
            }

            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|a| a.user_id == user_id && a.label == dto.label)
            {
                return Err(AddressInsertError::Duplicate);
            }

            let now = Utc::now();
            let address = Address {
                id: Uuid::new_v4(),
                user_id,
                country_id: dto.country,
                city_id: dto.city,
                district_id: dto.district,
                label: dto.label.clone(),
                recipient: dto.recipient.clone(),
                phone: dto.phone.clone(),
                line1: dto.line1.clone(),
                line2: dto.line2.clone(),
                postal_code: dto.postal_code.clone(),
                created_at: now,
                updated_at: now,
            };
            rows.push(address.clone());
            Ok(address)
        }

        async fn update_for_user(
            &self,
            id: Uuid,
            user_id: Uuid,
            dto: &UpdateAddressDto,
        ) -> Result<Option<Address>> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows
                .iter_mut()
                .find(|a| a.id == id && a.user_id == user_id)
                .map(|a| {
                    if let Some(label) = &dto.label {
                        a.label = label.clone();
                    }
                    if let Some(recipient) = &dto.recipient {
                        a.recipient = recipient.clone();
                    }
                    a.updated_at = Utc::now();
                    a.clone()
                }))
        }

        async fn delete_for_user(&self, id: Uuid, user_id: Uuid) -> Result<bool> {
            let mut rows = self.rows.lock().unwrap();
            let position = rows.iter().position(|a| a.id == id && a.user_id == user_id);
            Ok(position.map(|i| rows.remove(i)).is_some())
        }
    }

    struct Harness {
        server: TestServer,
        repo: Arc<MemoryAddressRepo>,
        caller: AuthenticatedUser,
        country_id: Uuid,
        other_country_id: Uuid,
        city_id: Uuid,
        district_id: Uuid,
    }

    /// Two countries, one city under the first, one district under that
    /// city. The second country exists but owns nothing, which is what
    /// the cross-country cases need.
    fn harness() -> Harness {
        let now = Utc::now();
        let indonesia = Country {
            id: Uuid::new_v4(),
            name: "Indonesia".to_string(),
            iso2: "ID".to_string(),
            phone_code: Some("+62".to_string()),
            created_at: now,
            updated_at: now,
        };
        let singapore = Country {
            id: Uuid::new_v4(),
            name: "Singapore".to_string(),
            iso2: "SG".to_string(),
            phone_code: Some("+65".to_string()),
            created_at: now,
            updated_at: now,
        };
        let bandung = City {
            id: Uuid::new_v4(),
            name: "Bandung".to_string(),
            country_id: indonesia.id,
            created_at: now,
            updated_at: now,
        };
        let coblong = District {
            id: Uuid::new_v4(),
            name: "Coblong".to_string(),
            city_id: bandung.id,
            country_id: indonesia.id,
            created_at: now,
            updated_at: now,
        };

        let country_id = indonesia.id;
        let other_country_id = singapore.id;
        let city_id = bandung.id;
        let district_id = coblong.id;

        let catalog = Arc::new(StaticCatalog {
            countries: vec![indonesia, singapore],
            cities: vec![bandung],
            districts: vec![coblong],
        });
        let repo = Arc::new(MemoryAddressRepo::default());
        let service = Arc::new(AddressService::new(catalog, Arc::clone(&repo) as Arc<dyn AddressRepository>));

        let caller = create_plain_user();
        let server =
            TestServer::new(with_auth_user(routes::routes(service), caller.clone())).unwrap();

        Harness {
            server,
            repo,
            caller,
            country_id,
            other_country_id,
            city_id,
            district_id,
        }
    }

    fn create_payload(h: &Harness, label: &str) -> serde_json::Value {
        json!({
            "country": h.country_id,
            "city": h.city_id,
            "district": h.district_id,
            "label": label,
            "recipient": "Siti Rahma",
            "phone": "+6281234567890",
            "line1": "Jl. Merdeka No. 1",
            "postalCode": "40115"
        })
    }

    #[tokio::test]
    async fn create_with_valid_chain_returns_201() {
        let h = harness();

        let response = h
            .server
            .post("/api/addresses")
            .json(&create_payload(&h, "Home"))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Address created successfully");
        assert_eq!(body["statusCode"], 201);
        assert_eq!(h.repo.row_count(), 1);
    }

    #[tokio::test]
    async fn create_with_unknown_country_inserts_nothing() {
        let h = harness();
        let mut payload = create_payload(&h, "Home");
        payload["country"] = json!(Uuid::new_v4());

        let response = h.server.post("/api/addresses").json(&payload).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Country not found");
        assert_eq!(h.repo.row_count(), 0);
    }

    #[tokio::test]
    async fn create_with_city_from_another_country_inserts_nothing() {
        let h = harness();
        // Real country, real city, but the city belongs elsewhere.
        let mut payload = create_payload(&h, "Home");
        payload["country"] = json!(h.other_country_id);

        let response = h.server.post("/api/addresses").json(&payload).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "City not found");
        assert_eq!(h.repo.row_count(), 0);
    }

    #[tokio::test]
    async fn create_with_district_outside_city_inserts_nothing() {
        let h = harness();
        let mut payload = create_payload(&h, "Home");
        payload["district"] = json!(Uuid::new_v4());

        let response = h.server.post("/api/addresses").json(&payload).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "District not found");
        assert_eq!(h.repo.row_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_label_create_yields_conflict() {
        let h = harness();

        h.server
            .post("/api/addresses")
            .json(&create_payload(&h, "Home"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = h
            .server
            .post("/api/addresses")
            .json(&create_payload(&h, "Home"))
            .await;
        response.assert_status(StatusCode::CONFLICT);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Address already exists");
        assert_eq!(h.repo.row_count(), 1);
    }

    #[tokio::test]
    async fn create_storage_fault_is_internal_error() {
        let h = harness();

        let response = h
            .server
            .post("/api/addresses")
            .json(&create_payload(&h, "poison"))
            .await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Address creation failed");
    }

    #[tokio::test]
    async fn get_hides_other_users_address() {
        let h = harness();
        let stranger = Uuid::new_v4();
        let id = h
            .repo
            .seed(stranger, h.country_id, h.city_id, h.district_id);

        let response = h.server.get(&format!("/api/addresses/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Address not found");
    }

    #[tokio::test]
    async fn update_hides_other_users_address() {
        let h = harness();
        let stranger = Uuid::new_v4();
        let id = h
            .repo
            .seed(stranger, h.country_id, h.city_id, h.district_id);

        let response = h
            .server
            .patch(&format!("/api/addresses/{}", id))
            .json(&json!({ "label": "Hijacked" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Address not found");

        let rows = h.repo.rows.lock().unwrap();
        assert_eq!(rows[0].label, "Home");
    }

    #[tokio::test]
    async fn delete_hides_other_users_address() {
        let h = harness();
        let stranger = Uuid::new_v4();
        let id = h
            .repo
            .seed(stranger, h.country_id, h.city_id, h.district_id);

        let response = h.server.delete(&format!("/api/addresses/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Address not found");
        assert_eq!(h.repo.row_count(), 1);
    }

    #[tokio::test]
    async fn list_returns_only_callers_addresses() {
        let h = harness();
        let stranger = Uuid::new_v4();
        h.repo
            .seed(stranger, h.country_id, h.city_id, h.district_id);
        let own = h
            .repo
            .seed(h.caller.id, h.country_id, h.city_id, h.district_id);

        let response = h.server.get("/api/addresses").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "User addresses fetched successfully");
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["id"], json!(own));
    }
}
