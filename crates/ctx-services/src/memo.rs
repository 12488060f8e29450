//! Memoized per-request user.
//!
//! The first call in a request builds the user and stores it on the scope;
//! every later call in the same request gets the same `Arc` back.

use std::sync::Arc;

use ctx_protocol::{Attributes, ContextError, User};
use ctx_store::RequestScope;
use tracing::debug;

/// Name of the user built when the scope has none.
pub const DEFAULT_USER: &str = "John";

pub fn get_user(scope: &RequestScope) -> Result<Arc<User>, ContextError> {
    get_user_with(scope, || User::new(DEFAULT_USER))
}

pub fn get_user_with(
    scope: &RequestScope,
    load: impl FnOnce() -> User,
) -> Result<Arc<User>, ContextError> {
    scope.get_or_insert_with(Attributes::USER, || {
        debug!(request_id = scope.id(), "loading user into request scope");
        Arc::new(load())
    })
}

/// The handler body: one plain function call, no context argument visible
/// beyond the scope itself.
pub fn greet(scope: &RequestScope) -> Result<String, ContextError> {
    let user = get_user(scope)?;
    Ok(user.greeting())
}
