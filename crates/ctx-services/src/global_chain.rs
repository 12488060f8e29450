//! Global namespace read from four calls deep.
//!
//! `handler` stores the user on the process-global namespace, and only
//! `helper_c` at the bottom of the chain reads it. Nothing in between takes
//! or passes a user. The handler removes the attribute again before
//! returning, so a request running at the same time can have it removed
//! from under it.

use ctx_protocol::{Attributes, ContextError, User};
use ctx_store::global;
use tracing::info;

/// Name the handler stores.
pub const GLOBAL_USER: &str = "Tony";

pub fn handler() -> Result<String, ContextError> {
    handler_with(User::new(GLOBAL_USER))
}

pub fn handler_with(user: User) -> Result<String, ContextError> {
    global::set(Attributes::USER, user);
    let greeting = helper_a();
    global::delete(Attributes::USER);
    greeting
}

pub fn helper_a() -> Result<String, ContextError> {
    helper_b()
}

pub fn helper_b() -> Result<String, ContextError> {
    helper_c()
}

pub fn helper_c() -> Result<String, ContextError> {
    let user: User = global::get_cloned(Attributes::USER)?;
    let greeting = user.greeting();
    info!("{greeting}");
    Ok(greeting)
}
