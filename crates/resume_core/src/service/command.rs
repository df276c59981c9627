//! Editor commands sent by UI collaborators.
//!
//! # Responsibility
//! - Define the serde wire shape of every editor interaction.
//! - Validate raw JSON arguments before they reach typed operations.
//!
//! # Invariants
//! - Section id batches must be JSON arrays of strings.
//! - Edit payloads are kept raw until the addressed list type is known.

use crate::model::item::ItemId;
use crate::model::resume::ListPath;
use crate::service::editor_service::EditorError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One editor interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Append a default item to `path`.
    Add { path: ListPath },
    /// Remove `id` from `path`.
    Delete { path: ListPath, id: ItemId },
    /// Move `from` to the slot held by `to`.
    Reorder {
        path: ListPath,
        from: ItemId,
        to: ItemId,
    },
    /// Replace the payload of `id`; `value` must match the list's payload type.
    Edit {
        path: ListPath,
        id: ItemId,
        value: Value,
    },
    /// Replace the personal contact block.
    EditPersonal { value: Value },
    /// Replace every list of one section with fresh defaults.
    ResetSection { section: String },
    /// Activate sections; `possible` defaults to every section.
    AddSections {
        #[serde(default)]
        possible: Option<Value>,
        requested: Value,
    },
    /// Deactivate sections.
    DeleteSections { requested: Value },
    /// Move one active section to another's slot.
    ReorderSections { from: String, to: String },
    /// Select one section for display.
    OpenSection { section: String },
    /// Flip between viewing and editing.
    ToggleMode,
    /// Pick up one section tab.
    SectionDragStart { active: String },
    /// Pick up one list item.
    ItemDragStart { path: ListPath, active: ItemId },
    /// Hover a droppable slot, or none.
    DragOver {
        #[serde(default)]
        over: Option<String>,
    },
    /// Release the gesture over a slot, or outside every slot.
    DragEnd {
        #[serde(default)]
        over: Option<String>,
    },
    /// Abandon the gesture.
    DragCancel,
}

impl EditorCommand {
    /// Parses one command from JSON text.
    pub fn from_json(text: &str) -> Result<Self, EditorError> {
        serde_json::from_str(text).map_err(|err| EditorError::InvalidArgumentType {
            expected: "editor command object",
            found: err.to_string(),
        })
    }

    /// Stable operation name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Delete { .. } => "delete",
            Self::Reorder { .. } => "reorder",
            Self::Edit { .. } => "edit",
            Self::EditPersonal { .. } => "edit_personal",
            Self::ResetSection { .. } => "reset_section",
            Self::AddSections { .. } => "add_sections",
            Self::DeleteSections { .. } => "delete_sections",
            Self::ReorderSections { .. } => "reorder_sections",
            Self::OpenSection { .. } => "open_section",
            Self::ToggleMode => "toggle_mode",
            Self::SectionDragStart { .. } => "section_drag_start",
            Self::ItemDragStart { .. } => "item_drag_start",
            Self::DragOver { .. } => "drag_over",
            Self::DragEnd { .. } => "drag_end",
            Self::DragCancel => "drag_cancel",
        }
    }
}

/// Reads a JSON array of strings, rejecting any other shape.
pub fn string_array(value: &Value) -> Result<Vec<String>, EditorError> {
    let Value::Array(items) = value else {
        return Err(EditorError::InvalidArgumentType {
            expected: "array of section ids",
            found: json_kind(value).to_string(),
        });
    };

    items
        .iter()
        .map(|item| match item {
            Value::String(text) => Ok(text.clone()),
            other => Err(EditorError::InvalidArgumentType {
                expected: "section id string",
                found: json_kind(other).to_string(),
            }),
        })
        .collect()
}

/// Decodes a JSON payload into the addressed list's payload type.
pub fn decode_payload<T: serde::de::DeserializeOwned>(
    value: &Value,
    expected: &'static str,
) -> Result<T, EditorError> {
    serde_json::from_value(value.clone()).map_err(|err| EditorError::InvalidArgumentType {
        expected,
        found: err.to_string(),
    })
}

/// Parses an item token carried as a string.
pub fn parse_item_id(value: &str) -> Result<ItemId, EditorError> {
    ItemId::parse_str(value.trim()).map_err(|_| EditorError::InvalidArgumentType {
        expected: "item id",
        found: value.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_item_id, string_array, EditorCommand};
    use crate::model::resume::ListPath;
    use crate::service::editor_service::EditorError;
    use serde_json::json;

    #[test]
    fn string_array_rejects_non_arrays() {
        let err = string_array(&json!("links")).unwrap_err();
        assert!(matches!(
            err,
            EditorError::InvalidArgumentType { found, .. } if found == "string"
        ));
    }

    #[test]
    fn string_array_rejects_non_string_members() {
        let err = string_array(&json!(["links", 3])).unwrap_err();
        assert!(matches!(
            err,
            EditorError::InvalidArgumentType { found, .. } if found == "number"
        ));
    }

    #[test]
    fn commands_parse_from_tagged_json() {
        let command = EditorCommand::from_json(r#"{"op":"add","path":{"list":"links"}}"#).unwrap();
        assert_eq!(command, EditorCommand::Add { path: ListPath::Links });
        assert_eq!(command.name(), "add");

        let command = EditorCommand::from_json(r#"{"op":"drag_end"}"#).unwrap();
        assert_eq!(command, EditorCommand::DragEnd { over: None });
    }

    #[test]
    fn malformed_command_is_invalid_argument() {
        let err = EditorCommand::from_json(r#"{"op":"explode"}"#).unwrap_err();
        assert!(matches!(err, EditorError::InvalidArgumentType { .. }));
    }

    #[test]
    fn parse_item_id_rejects_garbage() {
        assert!(parse_item_id("not-a-uuid").is_err());
        assert!(parse_item_id("11111111-2222-4333-8444-555555555555").is_ok());
    }
}
