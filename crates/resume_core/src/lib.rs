//! Core editing logic for the résumé builder.
//! This crate is the single source of truth for list and section invariants.

pub mod collection;
pub mod config;
pub mod editor;
pub mod logging;
pub mod model;
pub mod service;

pub use collection::{delete_focus_target, CollectionError, FocusTarget, OrderedCollection, Outcome};
pub use config::{ConfigError, EditorConfig};
pub use editor::{ActiveSections, DragError, DragGesture, DragPhase, EditorMode};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::item::{IdentifiedItem, ItemId};
pub use model::resume::{
    Bullet, Certification, Degree, Job, Link, ListPath, ListPayload, PersonalInfo, Project,
    ResumeDraft, Skill, SkillGroup, SkillGroups,
};
pub use model::section::{parse_section_id, supported_section_strings, SectionId, UnknownSectionId};
pub use service::command::EditorCommand;
pub use service::editor_service::{
    apply, ActiveDrag, EditorError, EditorObserver, EditorSession, EditorState, Notification,
    Transition,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
