//! Editor mode toggle.

use serde::{Deserialize, Serialize};

/// Whether lists are being viewed or rearranged.
///
/// Reordering and opening/selecting are mutually exclusive: drag handles and
/// delete controls are live only while `Editing`, and selection of
/// drag-enabled items only while `Viewing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    #[default]
    Viewing,
    Editing,
}

impl EditorMode {
    /// Flips between viewing and editing. Has no effect on data.
    pub fn toggled(self) -> Self {
        match self {
            Self::Viewing => Self::Editing,
            Self::Editing => Self::Viewing,
        }
    }

    /// Drag handles and delete controls are interactive.
    pub fn allows_reorder(self) -> bool {
        self == Self::Editing
    }

    /// Clicking a drag-enabled item opens/selects it.
    pub fn allows_select(self) -> bool {
        self == Self::Viewing
    }
}
