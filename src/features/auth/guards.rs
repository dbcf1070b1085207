//! Role-based authorization guards.
//!
//! Applied as route layers after `auth_middleware` has inserted the
//! authenticated user into request extensions.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;

/// Rejects requests whose caller does not carry the super_admin role.
pub async fn require_super_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

    if !user.is_super_admin() {
        return Err(AppError::Forbidden(
            "Super admin access required".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
