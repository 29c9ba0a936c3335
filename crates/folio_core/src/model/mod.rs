//! Authored content model for the portfolio page.
//!
//! # Responsibility
//! - Define the plain records authored in `content.toml`.
//! - Keep validation next to the data it protects.
//!
//! # Invariants
//! - Records are immutable values once loaded; nothing mutates them during
//!   rendering.
//! - Deserialization runs the same validation as the constructors.

pub mod experience;
pub mod profile;
pub mod record;
