//! Shared vocabulary for the request-context demos.
//!
//! Every crate in the workspace speaks in terms of these types: the `User`
//! record stored in a context, the attribute names it is stored under, the
//! HTTP routes that expose each demo, and the error taxonomy.

pub mod error;
pub mod routes;
pub mod user;

pub use error::{ContextError, ErrorBody, ErrorCode};
pub use routes::{Attributes, REQUEST_ID_HEADER, Routes};
pub use user::User;
