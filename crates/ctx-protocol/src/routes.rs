//! Route and attribute name constants.
//!
//! Route constants use axum's `{param}` capture syntax and are shared by the
//! router and the integration tests.

/// HTTP routes, one per demo.
pub struct Routes;

impl Routes {
    pub const HEALTH: &str = "/health";
    /// Flask-style `g` memoization. The path segment is accepted and ignored.
    pub const MEMO: &str = "/memo/{user_id}";
    /// Process-global namespace call chain.
    pub const GLOBAL: &str = "/global";
    /// Explicit context threaded through the call chain.
    pub const EXPLICIT: &str = "/explicit/{user_id}";
    /// Declarative dependency bound from the path.
    pub const PATH_USER: &str = "/{user_id}";

    /// Name of the path parameter every user route captures.
    pub const USER_ID_PARAM: &str = "user_id";
}

/// Attribute names stored in a namespace.
pub struct Attributes;

impl Attributes {
    pub const USER: &str = "user";
}

/// Header carrying the request scope id on every response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
