//! Request handlers.
//!
//! Handlers validate the request, coordinate the write transaction
//! (begin, thread through repository and tag calls, single commit point),
//! and map errors via [`AppError`](crate::error::AppError).

pub mod legacy;
pub mod playground;
