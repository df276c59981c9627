//! Ordered identity collection and its derived side channels.
//!
//! # Responsibility
//! - Provide the single list contract shared by every editable résumé list.
//! - Derive the focus target and announcement produced by each mutation.
//!
//! # Invariants
//! - Operations never mutate their input; each returns the next state.
//! - Order is insertion/reorder-determined, never derived from payloads.
//! - Stale tokens are absorbed as no-ops, not reported as errors.

pub mod focus;
pub mod ordered;

pub use focus::{delete_focus_target, FocusTarget, Outcome};
pub use ordered::{CollectionError, OrderedCollection};

/// Moves the element at `from` to `to`, shifting everything in between.
///
/// Standard array-move semantics (not a swap). Out-of-range indexes leave
/// the slice untouched.
pub(crate) fn array_move<K>(items: &mut Vec<K>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let moved = items.remove(from);
    items.insert(to, moved);
}

#[cfg(test)]
mod tests {
    use super::array_move;

    #[test]
    fn array_move_forward_shifts_intervening_items_left() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        array_move(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn array_move_backward_shifts_intervening_items_right() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        array_move(&mut items, 3, 1);
        assert_eq!(items, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn array_move_ignores_out_of_range() {
        let mut items = vec!['a', 'b'];
        array_move(&mut items, 0, 5);
        assert_eq!(items, vec!['a', 'b']);
    }
}
