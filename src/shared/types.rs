use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform success envelope.
///
/// Every successful response carries the payload, a human-readable message
/// and the HTTP status code mirrored into the body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    pub fn with_status(data: T, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            data,
            message: message.into(),
            status_code: status.as_u16(),
        }
    }

    /// 200 envelope for reads, updates and deletions.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::with_status(data, message, StatusCode::OK)
    }

    /// 201 envelope for creations.
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_status(data, message, StatusCode::CREATED)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
