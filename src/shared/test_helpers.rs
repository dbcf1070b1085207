#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, Router};

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
pub fn create_super_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        roles: vec!["super_admin".to_string()],
    }
}

#[cfg(test)]
pub fn create_plain_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: Uuid::new_v4(),
        roles: vec!["customer".to_string()],
    }
}

/// Wrap a router with middleware that injects `user` into request
/// extensions, standing in for `auth_middleware` in tests.
#[cfg(test)]
pub fn with_auth_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

#[cfg(test)]
pub fn with_super_admin_auth(router: Router) -> Router {
    with_auth_user(router, create_super_admin_user())
}
