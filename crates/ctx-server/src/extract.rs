//! Extractors that hand context to handlers.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use ctx_protocol::{ContextError, Routes, User};
use ctx_services::path_user;
use ctx_store::RequestScope;

use crate::error::ApiError;

/// The current request's scope, as installed by
/// [`crate::middleware::request_scope`].
#[derive(Debug, Clone)]
pub struct Scope(pub RequestScope);

impl<S> FromRequestParts<S> for Scope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestScope>()
            .cloned()
            .map(Scope)
            .ok_or(ApiError(ContextError::ScopeUnavailable))
    }
}

/// A user resolved from the `user_id` path segment.
///
/// Declaring `PathUser` as a handler argument is the whole dependency
/// declaration: binding and resolution run before the handler body.
#[derive(Debug, Clone)]
pub struct PathUser(pub User);

impl<S> FromRequestParts<S> for PathUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(user_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ContextError::binding(Routes::USER_ID_PARAM, e.body_text()))?;

        Ok(PathUser(path_user::resolve_user(&user_id)))
    }
}
