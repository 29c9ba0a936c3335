//! Site source access layer.
//!
//! # Responsibility
//! - Define the repository contract the build service reads from.
//! - Keep filesystem layout details out of rendering code.

pub mod content_repo;
