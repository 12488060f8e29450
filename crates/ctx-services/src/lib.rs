//! Context demos.
//!
//! Each module resolves the current user a different way and greets them:
//!
//! - [`memo`] — memoized on the per-request scope (Flask's `g`)
//! - [`global_chain`] — set on the process-global namespace, read four calls deep
//! - [`explicit`] — threaded as a parameter through the same call chain
//! - [`controller`] — instance state shared with helper traits
//! - [`path_user`] — resolved from the request path before the handler runs
//! - [`interleave`] — two requests stepped against global vs. explicit context

pub mod controller;
pub mod explicit;
pub mod global_chain;
pub mod interleave;
pub mod memo;
pub mod path_user;
