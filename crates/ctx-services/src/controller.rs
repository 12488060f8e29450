//! Controller instance state shared with helper traits.
//!
//! The helpers never receive the user: they reach it through `self`, the
//! same way mixed-in modules read a controller's instance variables. Each
//! request gets its own controller, so the state is request-scoped without
//! being passed around explicitly.

use ctx_protocol::User;
use tracing::info;

use crate::memo::DEFAULT_USER;

/// Access to the user held by whatever the helpers are mixed into.
pub trait HasUser {
    fn user(&self) -> &User;
}

pub trait HelperC: HasUser {
    fn helper_c(&self) -> String {
        let greeting = self.user().greeting();
        info!("{greeting}");
        greeting
    }
}

pub trait HelperB: HelperC {
    fn helper_b(&self) -> String {
        self.helper_c()
    }
}

#[derive(Debug, Clone)]
pub struct Controller {
    user: User,
}

impl Controller {
    pub fn new() -> Self {
        Self::with_user(User::new(DEFAULT_USER))
    }

    pub fn with_user(user: User) -> Self {
        Self { user }
    }

    /// Greets twice: once through `helper_b`, once calling `helper_c` directly.
    pub fn index(&self) -> Vec<String> {
        vec![self.helper_b(), self.helper_c()]
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl HasUser for Controller {
    fn user(&self) -> &User {
        &self.user
    }
}

impl HelperC for Controller {}
impl HelperB for Controller {}
