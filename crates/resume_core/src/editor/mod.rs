//! Editor interaction state.
//!
//! # Responsibility
//! - Track which sections are active, their order, and which one is opened.
//! - Gate reordering versus selecting through one editor mode flag.
//! - Drive drag gestures and their live-region announcements.
//!
//! # Invariants
//! - `personal` is always active; the active set has no duplicates.
//! - A cancelled drag leaves the dragged list exactly as before pickup.

pub mod drag;
pub mod mode;
pub mod sections;

pub use drag::{DragDrop, DragError, DragGesture, DragPhase};
pub use mode::EditorMode;
pub use sections::ActiveSections;
