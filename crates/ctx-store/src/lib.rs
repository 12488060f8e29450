//! Context storage.
//!
//! Two lifetimes of the same container:
//! - [`global`] — one [`Namespace`] for the whole process, visible to every
//!   caller on every thread.
//! - [`RequestScope`] — a fresh [`Namespace`] per incoming request, dropped
//!   when the request ends.

pub mod global;
pub mod namespace;
pub mod scope;

pub use namespace::Namespace;
pub use scope::RequestScope;
