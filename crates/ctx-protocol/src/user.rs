//! The one record every demo stores in a context.

use serde::{Deserialize, Serialize};

/// A user as seen by a handler. Only the name is ever read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `Hello, {name}` — the response body of every demo handler.
    pub fn greeting(&self) -> String {
        format!("Hello, {}", self.name)
    }
}
