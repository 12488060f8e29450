//! Request-scope middleware.

use std::sync::atomic::Ordering;

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use ctx_protocol::REQUEST_ID_HEADER;
use ctx_store::RequestScope;
use tracing::{Instrument, debug, info_span};

use crate::router::AppState;

/// Creates the request's scope, makes it available to extractors, and tags
/// the response with its id. The scope is dropped with the last handle once
/// the response is built.
pub async fn request_scope(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let scope = RequestScope::new();
    state.requests.fetch_add(1, Ordering::Relaxed);

    let span = info_span!(
        "request",
        request_id = scope.id(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(scope.clone());
    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(scope.id()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    debug!(
        request_id = scope.id(),
        attributes = scope.with(|attrs| attrs.len()),
        "request scope closed",
    );

    response
}
