//! Pure domain logic for the playground backend.
//!
//! No I/O lives here: error taxonomy, shared type aliases, slug generation,
//! and the validation rules applied before any persistence call.

pub mod error;
pub mod slug;
pub mod types;
pub mod validation;
