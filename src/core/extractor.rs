use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;

/// JSON body extractor whose rejections speak the error envelope.
///
/// Axum's stock `Json` rejection replies in plain text; wrapping it keeps
/// malformed address and admin payloads on the same `{message, statusCode}`
/// contract as every other failure.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(AppJsonRejection)
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => {
                format!("Request body does not match the expected shape: {}", err)
            }
            JsonRejection::JsonSyntaxError(err) => {
                format!("Request body is not valid JSON: {}", err)
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Expected a request with `Content-Type: application/json`".to_string()
            }
            _ => "Failed to read request body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Reads the caller that `auth_middleware` placed in request extensions.
/// A handler reached outside the protected router sees the 401 branch.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}
