//! HTTP request handlers.
//!
//! Each handler extracts the requester from the `member-id` header, converts the
//! request DTO to service parameters, runs the preconditions for any ids it was
//! given, calls exactly one service operation, and wraps the result in the success
//! envelope. Every failure is returned as `AppError` and rendered as the error
//! envelope.

pub mod alarm;
pub mod auth;
pub mod member;
pub mod profile;
pub mod space;

#[cfg(test)]
mod test;
