//! Routes for each context demo.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::get,
};
use ctx_protocol::Routes;
use ctx_services::{explicit, global_chain, memo, path_user};
use serde_json::json;

use crate::error::ApiError;
use crate::extract::{PathUser, Scope};
use crate::middleware::request_scope;

/// State shared by every request. Holds nothing request-specific.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) requests: Arc<AtomicUsize>,
}

impl AppState {
    /// Requests that have entered the router, including ones in flight.
    pub fn requests_served(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(Routes::HEALTH, get(health_handler))
        .route(Routes::MEMO, get(memo_handler))
        .route(Routes::GLOBAL, get(global_handler))
        .route(Routes::EXPLICIT, get(explicit_handler))
        .route(Routes::PATH_USER, get(path_user_handler))
        .layer(from_fn_with_state(state.clone(), request_scope))
        .with_state(state)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "requests": state.requests_served(),
    }))
}

/// The `user_id` segment is matched but unused; the user comes from the scope.
async fn memo_handler(
    Scope(scope): Scope,
    Path(_user_id): Path<String>,
) -> Result<String, ApiError> {
    Ok(memo::greet(&scope)?)
}

async fn global_handler() -> Result<String, ApiError> {
    Ok(global_chain::handler()?)
}

async fn explicit_handler(Path(user_id): Path<String>) -> String {
    explicit::handler(&user_id)
}

async fn path_user_handler(PathUser(user): PathUser) -> String {
    path_user::handle(&user)
}
