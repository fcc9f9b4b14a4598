//! Request guards run at the top of handlers.
//!
//! - `auth` - Requester identity from the `member-id` header
//! - `session` - Typed access to OAuth state kept in the session
//! - `precondition` - Existence and ownership checks on path and body references

pub mod auth;
pub mod precondition;
pub mod session;

#[cfg(test)]
mod test;
