//! Two requests stepped by hand against shared and explicit context.
//!
//! Both runs use the same schedule:
//!
//! 1. first request stores its user
//! 2. second request stores its user
//! 3. first request runs its helper chain, then removes "its" user
//! 4. second request runs its helper chain, then removes its user
//!
//! Against the global namespace the first request greets the second's user
//! and its delete leaves the second with nothing. With explicit contexts each
//! request greets its own.

use ctx_protocol::{Attributes, User};
use ctx_store::global;
use tracing::debug;

use crate::explicit::{self, RequestContext};
use crate::global_chain;

/// The greeting one request expected and the one it actually produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub expected: String,
    /// `None` when the user was gone by the time the chain read it.
    pub saw: Option<String>,
}

impl Observation {
    fn new(name: &str, saw: Option<String>) -> Self {
        Self {
            expected: User::new(name).greeting(),
            saw,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.saw.as_deref() == Some(self.expected.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub first: Observation,
    pub second: Observation,
}

impl Outcome {
    pub fn is_isolated(&self) -> bool {
        self.first.is_correct() && self.second.is_correct()
    }
}

pub fn global_interleaved(first: &str, second: &str) -> Outcome {
    global::set(Attributes::USER, User::new(first));
    debug!(request = "first", "stored user");
    global::set(Attributes::USER, User::new(second));
    debug!(request = "second", "stored user");

    let first_saw = global_chain::helper_a().ok();
    global::delete(Attributes::USER);
    debug!(request = "first", saw = ?first_saw, "ran chain and deleted user");

    let second_saw = global_chain::helper_a().ok();
    let removed = global::delete(Attributes::USER);
    debug!(request = "second", saw = ?second_saw, removed, "ran chain and deleted user");

    Outcome {
        first: Observation::new(first, first_saw),
        second: Observation::new(second, second_saw),
    }
}

pub fn explicit_interleaved(first: &str, second: &str) -> Outcome {
    let first_ctx = RequestContext::new(User::new(first));
    let second_ctx = RequestContext::new(User::new(second));

    let first_saw = Some(explicit::helper_a(&first_ctx));
    drop(first_ctx);
    debug!(request = "first", saw = ?first_saw, "ran chain");

    let second_saw = Some(explicit::helper_a(&second_ctx));
    drop(second_ctx);
    debug!(request = "second", saw = ?second_saw, "ran chain");

    Outcome {
        first: Observation::new(first, first_saw),
        second: Observation::new(second, second_saw),
    }
}
