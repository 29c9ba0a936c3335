//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository loads, pure rendering and artifact output.
//! - Keep CLI callers decoupled from file layout and rendering details.

pub mod site_service;
