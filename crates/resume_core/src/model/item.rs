//! Identified item model.
//!
//! # Responsibility
//! - Pair a domain payload with a stable identity token.
//!
//! # Invariants
//! - `id` is minted once and never regenerated for the same logical item.
//! - `id` is never nil for items created through `IdentifiedItem::new`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity token for one list item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// One payload paired with its identity token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedItem<T> {
    /// Stable handle used to address the item across reorders.
    pub id: ItemId,
    /// Domain payload (job, degree, bullet text...).
    pub value: T,
}

impl<T> IdentifiedItem<T> {
    /// Wraps a payload with a freshly minted token.
    pub fn new(value: T) -> Self {
        Self {
            id: mint_item_id(),
            value,
        }
    }

    /// Wraps a payload with a caller-provided token.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: ItemId, value: T) -> Self {
        Self { id, value }
    }
}

/// Mints one collision-resistant identity token.
pub fn mint_item_id() -> ItemId {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::IdentifiedItem;

    #[test]
    fn new_items_get_distinct_tokens() {
        let first = IdentifiedItem::new("a");
        let second = IdentifiedItem::new("a");
        assert_ne!(first.id, second.id);
        assert!(!first.id.is_nil());
    }
}
