//! A user declared as a handler dependency and bound from the path.
//!
//! The HTTP layer calls [`resolve_user`] with the `user_id` segment before
//! the handler runs; the handler only ever sees the finished `User`.

use ctx_protocol::User;

/// Any segment is a valid name, including one that is only whitespace.
pub fn resolve_user(name: &str) -> User {
    User::new(name)
}

pub fn handle(user: &User) -> String {
    user.greeting()
}
