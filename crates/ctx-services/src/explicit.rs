//! The global chain rewritten with the context as a parameter.
//!
//! Same call shape as [`crate::global_chain`], but each helper receives the
//! context it needs. No shared state is touched, so concurrent requests
//! cannot observe each other.

use ctx_protocol::User;
use tracing::info;

/// Per-request state handed down the call chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub user: User,
}

impl RequestContext {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

pub fn handler(name: &str) -> String {
    let ctx = RequestContext::new(User::new(name));
    helper_a(&ctx)
}

pub fn helper_a(ctx: &RequestContext) -> String {
    helper_b(ctx)
}

pub fn helper_b(ctx: &RequestContext) -> String {
    helper_c(ctx)
}

pub fn helper_c(ctx: &RequestContext) -> String {
    let greeting = ctx.user.greeting();
    info!("{greeting}");
    greeting
}
