//! Résumé domain model.
//!
//! # Responsibility
//! - Define the identity-addressed item shape shared by every editable list.
//! - Define the closed section enumeration and the concrete résumé payloads.
//!
//! # Invariants
//! - Every list item is addressed by a stable `ItemId`, never by position.
//! - Section ids are drawn from a closed seven-member enumeration.

pub mod item;
pub mod resume;
pub mod section;
