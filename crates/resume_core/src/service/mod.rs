//! Core use-case services.
//!
//! # Responsibility
//! - Turn UI commands into state transitions over one editor state.
//! - Keep UI layers decoupled from collection and section internals.

pub mod command;
pub mod editor_service;
