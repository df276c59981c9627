//! Generic ordered identity collection.
//!
//! # Responsibility
//! - Hold an ordered sequence of identified items of one payload type.
//! - Provide add/delete/reorder/edit as pure "previous state -> next state"
//!   operations with derived focus targets.
//!
//! # Invariants
//! - No two items share an id for the lifetime of the collection.
//! - `add` mints a token distinct from every token already present.
//! - `delete`, `reorder` and `edit` never regenerate any token.
//! - A token absent from the collection makes the operation a no-op.

use crate::collection::array_move;
use crate::collection::focus::{delete_focus_target, FocusTarget, Outcome};
use crate::model::item::{mint_item_id, IdentifiedItem, ItemId};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised when building a collection from external items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// Two input items carry the same token.
    DuplicateItemId(ItemId),
    /// Input item carries the nil token.
    NilItemId,
}

impl Display for CollectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateItemId(id) => write!(f, "duplicate item id in collection: {id}"),
            Self::NilItemId => write!(f, "item id must not be nil"),
        }
    }
}

impl Error for CollectionError {}

/// Ordered sequence of identified items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedCollection<T> {
    items: Vec<IdentifiedItem<T>>,
}

impl<T> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> OrderedCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from existing items, enforcing token uniqueness.
    pub fn from_items(items: Vec<IdentifiedItem<T>>) -> Result<Self, CollectionError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.is_nil() {
                return Err(CollectionError::NilItemId);
            }
            if !seen.insert(item.id) {
                return Err(CollectionError::DuplicateItemId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Builds a collection by wrapping each payload with a fresh token.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: values.into_iter().map(IdentifiedItem::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order.
    pub fn items(&self) -> &[IdentifiedItem<T>] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &IdentifiedItem<T>> {
        self.items.iter()
    }

    /// Tokens in display order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Current index of one token.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Payload of one token.
    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| &item.value)
    }

    /// Mutable payload of one token; the token itself stays read-only.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut T> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .map(|item| &mut item.value)
    }

    fn mint_unique_id(&self) -> ItemId {
        loop {
            let candidate = mint_item_id();
            if !self.contains(candidate) {
                return candidate;
            }
        }
    }
}

impl<T: Clone> OrderedCollection<T> {
    /// Appends one item with the given payload and a fresh token.
    ///
    /// Focus moves to the new item's primary input.
    pub fn add_value(&self, value: T) -> Outcome<Self> {
        let id = self.mint_unique_id();
        let mut items = self.items.clone();
        items.push(IdentifiedItem::with_id(id, value));
        Outcome::focused(Self { items }, FocusTarget::ItemInput(id))
    }

    /// Removes the item identified by `id`.
    ///
    /// Focus follows `delete_focus_target`. An absent token returns the
    /// collection unchanged with no focus change.
    pub fn delete(&self, id: ItemId) -> Outcome<Self> {
        let Some(index) = self.position(id) else {
            debug!("event=stale_token module=collection op=delete status=skipped");
            return Outcome::unchanged(self.clone());
        };

        let original_len = self.items.len();
        let mut items = self.items.clone();
        items.remove(index);
        let remaining: Vec<ItemId> = items.iter().map(|item| item.id).collect();
        let focus = delete_focus_target(&remaining, index, original_len);
        Outcome::focused(Self { items }, focus)
    }

    /// Moves `from` to the position currently held by `to`.
    pub fn reorder(&self, from: ItemId, to: ItemId) -> Self {
        if from == to {
            return self.clone();
        }
        let (Some(from_index), Some(to_index)) = (self.position(from), self.position(to)) else {
            debug!("event=stale_token module=collection op=reorder status=skipped");
            return self.clone();
        };

        let mut items = self.items.clone();
        array_move(&mut items, from_index, to_index);
        Self { items }
    }

    /// Replaces the payload of `id` in place.
    pub fn edit(&self, id: ItemId, value: T) -> Self {
        self.update(id, |current| *current = value)
    }

    /// Applies `change` to the payload of `id` in place.
    ///
    /// Token and position are unchanged; an absent token is a no-op.
    pub fn update(&self, id: ItemId, change: impl FnOnce(&mut T)) -> Self {
        let mut next = self.clone();
        match next.items.iter_mut().find(|item| item.id == id) {
            Some(item) => change(&mut item.value),
            None => debug!("event=stale_token module=collection op=edit status=skipped"),
        }
        next
    }
}

impl<T: Clone + Default> OrderedCollection<T> {
    /// Appends one item with empty/default payload.
    pub fn add(&self) -> Outcome<Self> {
        self.add_value(T::default())
    }

    /// Fresh collection holding `count` default items with new tokens.
    pub fn with_placeholders(count: usize) -> Self {
        Self::from_values(std::iter::repeat_with(T::default).take(count))
    }
}

impl<T: Serialize> Serialize for OrderedCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OrderedCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<IdentifiedItem<T>>::deserialize(deserializer)?;
        Self::from_items(items).map_err(serde::de::Error::custom)
    }
}
