//! HTTP surface for the context demos.
//!
//! The router wraps every route in [`middleware::request_scope`], which
//! creates a fresh [`ctx_store::RequestScope`] for the request and drops it
//! when the response is sent. Handlers get at the scope, or at a user bound
//! from the path, through the extractors in [`extract`].

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError};
pub use extract::{PathUser, Scope};
pub use router::{AppState, build_router};
pub use server::HttpServer;
