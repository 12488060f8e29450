//! Attribute namespace — a mutable map from names to values of any type.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use ctx_protocol::ContextError;

type Attribute = Box<dyn Any + Send + Sync>;

/// A bag of named attributes, each of an arbitrary `'static` type.
///
/// Lookups are typed: reading an attribute under a different type than it
/// was stored with is a [`ContextError::TypeMismatch`], not a panic.
#[derive(Default)]
pub struct Namespace {
    attrs: HashMap<String, Attribute>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`. Returns the previous value when it was
    /// stored as the same type.
    pub fn set<T>(&mut self, name: impl Into<String>, value: T) -> Option<T>
    where
        T: Any + Send + Sync,
    {
        self.attrs
            .insert(name.into(), Box::new(value))
            .and_then(|prev| prev.downcast::<T>().ok())
            .map(|prev| *prev)
    }

    pub fn get<T: Any>(&self, name: &str) -> Result<&T, ContextError> {
        let value = self
            .attrs
            .get(name)
            .ok_or_else(|| ContextError::missing(name))?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| ContextError::type_mismatch::<T>(name))
    }

    pub fn get_cloned<T: Any + Clone>(&self, name: &str) -> Result<T, ContextError> {
        self.get::<T>(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Remove `name`. Returns whether it was present.
    pub fn delete(&mut self, name: &str) -> bool {
        self.attrs.remove(name).is_some()
    }

    /// Check-and-set-if-absent: `init` runs only when `name` is not set.
    ///
    /// An existing attribute of another type is left in place and reported
    /// as a type mismatch.
    pub fn get_or_insert_with<T, F>(&mut self, name: &str, init: F) -> Result<&T, ContextError>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        let value = self
            .attrs
            .entry(name.to_string())
            .or_insert_with(|| Box::new(init()));
        value
            .downcast_ref::<T>()
            .ok_or_else(|| ContextError::type_mismatch::<T>(name))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attrs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn clear(&mut self) {
        self.attrs.clear();
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("Namespace").field("attrs", &keys).finish()
    }
}
