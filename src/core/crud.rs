//! Generic CRUD delegation.
//!
//! Each handler translates an inbound request into exactly one store call
//! and wraps the outcome in the uniform envelope. Entity-specific behavior
//! lives entirely in the [`CrudStore`] implementation; the handlers only
//! know the display names configured at construction.
//!
//! Failure conventions, kept uniform across entities:
//! - creation failures are 400 with `"{singular} creation failed"`, masking
//!   the underlying fault (logged, not exposed)
//! - duplicate keys are 409 with `"{singular} already exists"`
//! - update/delete against a missing record are 400, not 404
//! - fetch-one variants return 200 with null data when nothing matches

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::core::error::{is_unique_violation, AppError, Result};
use crate::core::extractor::AppJson;
use crate::shared::types::ApiResponse;

/// Display names used in envelope messages, fixed at construction.
#[derive(Debug, Clone)]
pub struct EntityNames {
    pub singular: &'static str,
    pub plural: &'static str,
}

/// Capability set an entity store must provide to be served by the
/// generic handlers. Implemented per entity via composition over a pool.
#[async_trait]
pub trait CrudStore: Send + Sync + 'static {
    type Entity: Serialize + Send + Sync;
    type Filter: DeserializeOwned + Send + Sync + 'static;
    type Create: DeserializeOwned + Send + Sync + 'static;
    type Update: DeserializeOwned + Send + Sync + 'static;

    fn names(&self) -> &EntityNames;

    async fn fetch_all(&self) -> Result<Vec<Self::Entity>>;
    async fn fetch_all_by_filter(&self, filter: Self::Filter) -> Result<Vec<Self::Entity>>;
    async fn fetch_one_by_filter(&self, filter: Self::Filter) -> Result<Option<Self::Entity>>;
    async fn fetch_one_by_id(&self, id: Uuid) -> Result<Option<Self::Entity>>;
    async fn create(&self, input: Self::Create) -> Result<Self::Entity>;
    async fn update_by_id(&self, id: Uuid, update: Self::Update) -> Result<Option<Self::Entity>>;
    async fn update_by_filter(
        &self,
        filter: Self::Filter,
        update: Self::Update,
    ) -> Result<Option<Self::Entity>>;
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Self::Entity>>;
    async fn delete_by_filter(&self, filter: Self::Filter) -> Result<Option<Self::Entity>>;
}

/// Map a creation error from the database: unique violations become
/// Conflict with the entity's display name, everything else stays a
/// database error for the handler to mask.
pub fn map_create_error(err: sqlx::Error, names: &EntityNames) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(format!("{} already exists", names.singular))
    } else {
        AppError::Database(err)
    }
}

/// Routes exposing every generic operation for one store.
pub fn routes<S: CrudStore>(store: Arc<S>) -> Router {
    Router::new()
        .route(
            "/",
            get(fetch_all::<S>)
                .post(create::<S>)
                .patch(update_by_query::<S>)
                .delete(delete_by_query::<S>),
        )
        .route("/search", get(fetch_all_by_query::<S>))
        .route("/find", get(fetch_one_by_query::<S>))
        .route(
            "/{id}",
            get(fetch_one_by_id::<S>)
                .patch(update_by_id::<S>)
                .delete(delete_by_id::<S>),
        )
        .with_state(store)
}

pub async fn fetch_all<S: CrudStore>(
    State(store): State<Arc<S>>,
) -> Result<ApiResponse<Vec<S::Entity>>> {
    let items = store.fetch_all().await?;
    Ok(ApiResponse::ok(
        items,
        format!("{} fetched successfully", store.names().plural),
    ))
}

pub async fn fetch_all_by_query<S: CrudStore>(
    State(store): State<Arc<S>>,
    Query(filter): Query<S::Filter>,
) -> Result<ApiResponse<Vec<S::Entity>>> {
    let items = store.fetch_all_by_filter(filter).await?;
    Ok(ApiResponse::ok(
        items,
        format!("{} fetched successfully", store.names().plural),
    ))
}

// An empty match is still a 200 with null data, same as the by-id variant.
pub async fn fetch_one_by_query<S: CrudStore>(
    State(store): State<Arc<S>>,
    Query(filter): Query<S::Filter>,
) -> Result<ApiResponse<Option<S::Entity>>> {
    let item = store.fetch_one_by_filter(filter).await?;
    Ok(ApiResponse::ok(
        item,
        format!("{} fetched successfully", store.names().singular),
    ))
}

pub async fn fetch_one_by_id<S: CrudStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<Option<S::Entity>>> {
    let item = store.fetch_one_by_id(id).await?;
    Ok(ApiResponse::ok(
        item,
        format!("{} fetched successfully", store.names().singular),
    ))
}

pub async fn create<S: CrudStore>(
    State(store): State<Arc<S>>,
    AppJson(input): AppJson<S::Create>,
) -> Result<ApiResponse<S::Entity>> {
    let singular = store.names().singular;

    match store.create(input).await {
        Ok(entity) => Ok(ApiResponse::created(
            entity,
            format!("{} created successfully", singular),
        )),
        Err(err @ AppError::Conflict(_)) => Err(err),
        Err(err) => {
            tracing::warn!("{} creation failed: {}", singular, err);
            Err(AppError::BadRequest(format!(
                "{} creation failed",
                singular
            )))
        }
    }
}

pub async fn update_by_id<S: CrudStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<Uuid>,
    AppJson(update): AppJson<S::Update>,
) -> Result<ApiResponse<S::Entity>> {
    let singular = store.names().singular;

    store
        .update_by_id(id, update)
        .await?
        .map(|entity| ApiResponse::ok(entity, format!("{} updated successfully", singular)))
        .ok_or_else(|| AppError::BadRequest(format!("{} update failed", singular)))
}

pub async fn update_by_query<S: CrudStore>(
    State(store): State<Arc<S>>,
    Query(filter): Query<S::Filter>,
    AppJson(update): AppJson<S::Update>,
) -> Result<ApiResponse<S::Entity>> {
    let singular = store.names().singular;

    store
        .update_by_filter(filter, update)
        .await?
        .map(|entity| ApiResponse::ok(entity, format!("{} updated successfully", singular)))
        .ok_or_else(|| AppError::BadRequest(format!("{} update failed", singular)))
}

pub async fn delete_by_id<S: CrudStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<Uuid>,
) -> Result<ApiResponse<S::Entity>> {
    let singular = store.names().singular;

    store
        .delete_by_id(id)
        .await?
        .map(|entity| ApiResponse::ok(entity, format!("{} deleted successfully", singular)))
        .ok_or_else(|| AppError::BadRequest(format!("{} deletion failed", singular)))
}

pub async fn delete_by_query<S: CrudStore>(
    State(store): State<Arc<S>>,
    Query(filter): Query<S::Filter>,
) -> Result<ApiResponse<S::Entity>> {
    let singular = store.names().singular;

    store
        .delete_by_filter(filter)
        .await?
        .map(|entity| ApiResponse::ok(entity, format!("{} deleted successfully", singular)))
        .ok_or_else(|| AppError::BadRequest(format!("{} deletion failed", singular)))
}
