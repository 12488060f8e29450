//! Per-request namespace handle.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use ctx_protocol::ContextError;
use parking_lot::Mutex;

use crate::Namespace;

/// A namespace that lives exactly as long as one request.
///
/// Cloning the handle shares the same namespace, so middleware and the
/// handler it wraps see the same attributes. Two different scopes never
/// share anything.
#[derive(Clone)]
pub struct RequestScope {
    id: String,
    attrs: Arc<Mutex<Namespace>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attrs: Arc::new(Mutex::new(Namespace::new())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set<T>(&self, name: impl Into<String>, value: T) -> Option<T>
    where
        T: Any + Send + Sync,
    {
        self.attrs.lock().set(name, value)
    }

    pub fn get_cloned<T: Any + Clone>(&self, name: &str) -> Result<T, ContextError> {
        self.attrs.lock().get_cloned(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.lock().contains(name)
    }

    pub fn delete(&self, name: &str) -> bool {
        self.attrs.lock().delete(name)
    }

    /// Memoize `init` under `name` for the rest of this request.
    ///
    /// Store an `Arc<_>` to hand out the same allocation on every call.
    /// `init` runs without the scope locked, so it may read the scope. If
    /// `init` itself stores `name`, that value wins and the one `init`
    /// returned is dropped.
    pub fn get_or_insert_with<T, F>(&self, name: &str, init: F) -> Result<T, ContextError>
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce() -> T,
    {
        {
            let attrs = self.attrs.lock();
            if attrs.contains(name) {
                return attrs.get_cloned(name);
            }
        }

        let value = init();
        self.attrs
            .lock()
            .get_or_insert_with(name, move || value)
            .cloned()
    }

    /// Run `f` with the namespace locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Namespace) -> R) -> R {
        f(&mut self.attrs.lock())
    }
}

impl Default for RequestScope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RequestScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestScope")
            .field("id", &self.id)
            .field("attrs", &*self.attrs.lock())
            .finish()
    }
}
