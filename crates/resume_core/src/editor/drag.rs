//! Drag gesture state machine.
//!
//! # Responsibility
//! - Track one pointer/keyboard drag gesture over an ordered list.
//! - Produce live-region announcements for each gesture step.
//!
//! # Invariants
//! - The dragged list is never mutated while the gesture is in flight;
//!   only `drop` yields a move to commit.
//! - Indexes in announcements are 1-based positions in the pre-pickup order.
//! - Hovering the origin right after pickup is not announced.

use crate::collection::array_move;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Gesture protocol misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragError {
    /// `over`/`drop`/`cancel` arrived with no gesture in flight.
    NotActive,
    /// `start` arrived while another gesture is in flight.
    AlreadyActive,
    /// Structural change requested on the list being dragged.
    ListLocked,
}

impl Display for DragError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotActive => write!(f, "no drag gesture is in progress"),
            Self::AlreadyActive => write!(f, "a drag gesture is already in progress"),
            Self::ListLocked => write!(f, "list is being dragged; drop or cancel first"),
        }
    }
}

impl Error for DragError {}

/// Non-terminal gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase<K> {
    /// Just picked up; not yet moved.
    Picked,
    /// Hovering one droppable slot.
    Over(K),
    /// Not over any droppable slot.
    AwayFromOrigin,
}

/// Result of dropping a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragDrop<K> {
    /// Dragged key.
    pub active: K,
    /// Slot the item was dropped on, if any.
    pub target: Option<K>,
    pub announcement: String,
}

/// One in-flight drag gesture over keys of type `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture<K> {
    snapshot: Vec<K>,
    active: K,
    origin: usize,
    phase: DragPhase<K>,
    left_origin: bool,
}

impl<K: Copy + Eq> DragGesture<K> {
    /// Picks up `active` from `order`.
    ///
    /// Returns `None` when `active` is not in `order` (stale handle).
    pub fn pick_up(order: &[K], active: K) -> Option<(Self, String)> {
        let origin = order.iter().position(|key| *key == active)?;
        let gesture = Self {
            snapshot: order.to_vec(),
            active,
            origin,
            phase: DragPhase::Picked,
            left_origin: false,
        };
        let announcement = format!("Picked up draggable item {}.", origin + 1);
        Some((gesture, announcement))
    }

    pub fn active(&self) -> K {
        self.active
    }

    pub fn phase(&self) -> DragPhase<K> {
        self.phase
    }

    /// Order captured at pickup.
    pub fn snapshot(&self) -> &[K] {
        &self.snapshot
    }

    /// Moves the gesture over `target`, or off every droppable when `None`.
    ///
    /// A target outside the captured order counts as no droppable.
    pub fn move_over(&mut self, target: Option<K>) -> Option<String> {
        let slot = target.and_then(|key| self.slot_of(key).map(|index| (key, index)));
        match slot {
            Some((key, index)) => {
                let at_origin = key == self.active;
                let announce = !at_origin || self.left_origin;
                if !at_origin {
                    self.left_origin = true;
                }
                self.phase = DragPhase::Over(key);
                announce.then(|| {
                    format!(
                        "Draggable item {} was moved over droppable area {}.",
                        self.origin + 1,
                        index + 1
                    )
                })
            }
            None => {
                self.left_origin = true;
                self.phase = DragPhase::AwayFromOrigin;
                Some(format!(
                    "Draggable item {} is no longer over a droppable area.",
                    self.origin + 1
                ))
            }
        }
    }

    /// Provisional order the renderer shows while hovering.
    pub fn preview(&self) -> Vec<K> {
        let mut order = self.snapshot.clone();
        if let DragPhase::Over(key) = self.phase {
            if let Some(index) = self.slot_of(key) {
                array_move(&mut order, self.origin, index);
            }
        }
        order
    }

    /// Ends the gesture over `target` (or outside any droppable).
    pub fn drop_on(self, target: Option<K>) -> DragDrop<K> {
        let slot = target.and_then(|key| self.slot_of(key).map(|index| (key, index)));
        let announcement = match slot {
            Some((_, index)) => format!(
                "Draggable item {} was dropped over droppable area {}",
                self.origin + 1,
                index + 1
            ),
            None => format!("Draggable item {} was dropped.", self.origin + 1),
        };
        DragDrop {
            active: self.active,
            target: slot.map(|(key, _)| key),
            announcement,
        }
    }

    /// Abandons the gesture; returns the pre-pickup order and announcement.
    pub fn cancel(self) -> (Vec<K>, String) {
        let announcement = format!(
            "Dragging was cancelled. Draggable item {} was put to its initial position.",
            self.origin + 1
        );
        (self.snapshot, announcement)
    }

    fn slot_of(&self, key: K) -> Option<usize> {
        self.snapshot.iter().position(|candidate| *candidate == key)
    }
}

#[cfg(test)]
mod tests {
    use super::{DragGesture, DragPhase};

    #[test]
    fn pick_up_announces_one_based_index() {
        let (gesture, text) = DragGesture::pick_up(&['a', 'b', 'c'], 'b').unwrap();
        assert_eq!(text, "Picked up draggable item 2.");
        assert_eq!(gesture.phase(), DragPhase::Picked);
    }

    #[test]
    fn pick_up_of_missing_key_is_none() {
        assert!(DragGesture::pick_up(&['a'], 'z').is_none());
    }

    #[test]
    fn hovering_origin_after_pickup_is_silent() {
        let (mut gesture, _) = DragGesture::pick_up(&['a', 'b', 'c'], 'a').unwrap();
        assert_eq!(gesture.move_over(Some('a')), None);
        assert_eq!(
            gesture.move_over(Some('c')).as_deref(),
            Some("Draggable item 1 was moved over droppable area 3.")
        );
        assert_eq!(
            gesture.move_over(Some('a')).as_deref(),
            Some("Draggable item 1 was moved over droppable area 1.")
        );
    }

    #[test]
    fn leaving_all_droppables_counts_as_leaving_origin() {
        let (mut gesture, _) = DragGesture::pick_up(&['a', 'b'], 'a').unwrap();
        assert_eq!(
            gesture.move_over(None).as_deref(),
            Some("Draggable item 1 is no longer over a droppable area.")
        );
        assert_eq!(gesture.phase(), DragPhase::AwayFromOrigin);
        assert!(gesture.move_over(Some('a')).is_some());
    }

    #[test]
    fn preview_shows_array_move() {
        let (mut gesture, _) = DragGesture::pick_up(&['a', 'b', 'c'], 'a').unwrap();
        gesture.move_over(Some('c'));
        assert_eq!(gesture.preview(), vec!['b', 'c', 'a']);
        assert_eq!(gesture.snapshot(), &['a', 'b', 'c']);
    }

    #[test]
    fn drop_outside_has_no_area_reference() {
        let (gesture, _) = DragGesture::pick_up(&['a', 'b'], 'b').unwrap();
        let dropped = gesture.drop_on(None);
        assert_eq!(dropped.announcement, "Draggable item 2 was dropped.");
        assert_eq!(dropped.target, None);
    }

    #[test]
    fn cancel_returns_pickup_order() {
        let (mut gesture, _) = DragGesture::pick_up(&['a', 'b', 'c'], 'a').unwrap();
        gesture.move_over(Some('c'));
        let (order, text) = gesture.cancel();
        assert_eq!(order, vec!['a', 'b', 'c']);
        assert_eq!(
            text,
            "Dragging was cancelled. Draggable item 1 was put to its initial position."
        );
    }
}
