//! Focus-target derivation and the mutation outcome envelope.

use crate::model::item::ItemId;
use serde::Serialize;

/// UI element that should receive focus after a mutation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum FocusTarget {
    /// Primary input of one item (used after `add`).
    ItemInput(ItemId),
    /// Delete control of one item.
    DeleteControl(ItemId),
    /// The owning list's add control.
    AddControl,
}

/// Next state plus the two derived side-channel values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<S> {
    /// State after the operation.
    pub state: S,
    /// Element to focus after re-render, if the operation moved focus.
    pub focus: Option<FocusTarget>,
    /// Live-region text describing the operation, if any.
    pub announcement: Option<String>,
}

impl<S> Outcome<S> {
    /// Outcome with no side-channel values.
    pub fn unchanged(state: S) -> Self {
        Self {
            state,
            focus: None,
            announcement: None,
        }
    }

    /// Outcome carrying a focus target.
    pub fn focused(state: S, focus: FocusTarget) -> Self {
        Self {
            state,
            focus: Some(focus),
            announcement: None,
        }
    }

    /// Outcome carrying an announcement.
    pub fn announced(state: S, announcement: impl Into<String>) -> Self {
        Self {
            state,
            focus: None,
            announcement: Some(announcement.into()),
        }
    }
}

/// Derives the focus target after deleting the item at `index`.
///
/// `remaining` is the id order after removal, `original_len` the length
/// before removal.
///
/// Rules, evaluated in order:
/// - a later item existed: delete control of the item now at `index`;
/// - `index == 0` (the only item): the add control;
/// - otherwise (last of several): delete control of the item at `index - 1`.
pub fn delete_focus_target(remaining: &[ItemId], index: usize, original_len: usize) -> FocusTarget {
    if index + 1 < original_len {
        if let Some(id) = remaining.get(index) {
            return FocusTarget::DeleteControl(*id);
        }
    }
    if index == 0 {
        return FocusTarget::AddControl;
    }
    match remaining.get(index - 1) {
        Some(id) => FocusTarget::DeleteControl(*id),
        None => FocusTarget::AddControl,
    }
}

#[cfg(test)]
mod tests {
    use super::{delete_focus_target, FocusTarget};
    use uuid::Uuid;

    #[test]
    fn deleting_first_of_three_focuses_new_first() {
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        assert_eq!(
            delete_focus_target(&[b, c], 0, 3),
            FocusTarget::DeleteControl(b)
        );
    }

    #[test]
    fn deleting_only_item_focuses_add_control() {
        assert_eq!(delete_focus_target(&[], 0, 1), FocusTarget::AddControl);
    }

    #[test]
    fn deleting_last_of_three_focuses_previous() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(
            delete_focus_target(&[a, b], 2, 3),
            FocusTarget::DeleteControl(b)
        );
    }

    #[test]
    fn deleting_middle_focuses_successor() {
        let a = Uuid::new_v4();
        let c = Uuid::new_v4();
        assert_eq!(
            delete_focus_target(&[a, c], 1, 3),
            FocusTarget::DeleteControl(c)
        );
    }
}
