//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` for standalone reads, or a `&mut DbTransaction` when
//! the caller coordinates several operations under one commit point.

pub mod playground_repo;
pub mod playground_version_repo;
pub mod tag_repo;

pub use playground_repo::PlaygroundRepo;
pub use playground_version_repo::PlaygroundVersionRepo;
pub use tag_repo::TagRepo;
