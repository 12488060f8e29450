//! The process-global namespace.
//!
//! One [`Namespace`] shared by every caller for the lifetime of the process.
//! Each function below takes the lock for exactly one operation, so single
//! calls never tear. Nothing orders a caller's `set` → `get` → `delete`
//! sequence against anyone else's, though: two requests running at once will
//! read and remove each other's attributes.

use std::any::Any;
use std::sync::LazyLock;

use ctx_protocol::ContextError;
use parking_lot::RwLock;
use tracing::trace;

use crate::Namespace;

static GLOBAL: LazyLock<RwLock<Namespace>> = LazyLock::new(|| RwLock::new(Namespace::new()));

pub fn set<T>(name: impl Into<String>, value: T) -> Option<T>
where
    T: Any + Send + Sync,
{
    let name = name.into();
    trace!(attribute = %name, "global set");
    GLOBAL.write().set(name, value)
}

pub fn get_cloned<T: Any + Clone>(name: &str) -> Result<T, ContextError> {
    GLOBAL.read().get_cloned(name)
}

pub fn contains(name: &str) -> bool {
    GLOBAL.read().contains(name)
}

pub fn delete(name: &str) -> bool {
    trace!(attribute = %name, "global delete");
    GLOBAL.write().delete(name)
}

pub fn keys() -> Vec<String> {
    GLOBAL.read().keys().map(str::to_string).collect()
}

pub fn clear() {
    GLOBAL.write().clear();
}
