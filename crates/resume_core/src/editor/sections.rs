//! Active section set.
//!
//! # Responsibility
//! - Keep the ordered subset of sections shown in navigation.
//! - Add/delete/reorder sections and derive their announcements.
//! - Track the currently opened section.
//!
//! # Invariants
//! - `personal` is always a member and is never removed.
//! - The active set is a duplicate-free subset of `SectionId::ALL`.
//! - `opened`, when set, names an active section.

use crate::collection::{array_move, Outcome};
use crate::editor::mode::EditorMode;
use crate::model::section::{capitalize, parse_section_ids, SectionId, UnknownSectionId};
use log::debug;
use serde::Serialize;

const OPENED_SECTION_DELETED: &str = " Opened section deleted. No section is opened currently.";

/// Ordered active sections plus the opened pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSections {
    order: Vec<SectionId>,
    opened: Option<SectionId>,
}

impl Default for ActiveSections {
    /// Every section active, `personal` opened.
    fn default() -> Self {
        Self::new(&SectionId::ALL)
    }
}

impl ActiveSections {
    /// Builds an active set from `initial`, prepending `personal` when missing
    /// and dropping duplicates. `personal` starts opened.
    pub fn new(initial: &[SectionId]) -> Self {
        let mut order = Vec::with_capacity(SectionId::ALL.len());
        if !initial.contains(&SectionId::Personal) {
            order.push(SectionId::Personal);
        }
        for section in initial {
            if !order.contains(section) {
                order.push(*section);
            }
        }
        Self {
            order,
            opened: Some(SectionId::Personal),
        }
    }

    /// Active sections in navigation order.
    pub fn order(&self) -> &[SectionId] {
        &self.order
    }

    pub fn opened(&self) -> Option<SectionId> {
        self.opened
    }

    pub fn contains(&self, section: SectionId) -> bool {
        self.order.contains(&section)
    }

    /// Sections not currently active, in canonical order.
    pub fn inactive(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|section| !self.contains(*section))
            .collect()
    }

    /// Sections the navigation UI should render with a drag handle.
    ///
    /// `personal` is pinned as a non-draggable leading tab. This is a
    /// presentation choice: `reorder` itself accepts `personal` like any
    /// other section.
    pub fn draggable_sections(&self) -> Vec<SectionId> {
        self.order
            .iter()
            .copied()
            .filter(|section| section.is_removable())
            .collect()
    }

    /// Moves `from` to the position currently held by `to`.
    ///
    /// No-op when the ids are equal or either is inactive.
    pub fn reorder(&self, from: SectionId, to: SectionId) -> Self {
        let mut next = self.clone();
        let from_index = self.order.iter().position(|section| *section == from);
        let to_index = self.order.iter().position(|section| *section == to);
        if let (Some(from_index), Some(to_index)) = (from_index, to_index) {
            array_move(&mut next.order, from_index, to_index);
        }
        next
    }

    /// Appends each requested section that is offered and not yet active.
    ///
    /// Every requested id must belong to the closed enumeration. Ids already
    /// active, or absent from `possible`, are skipped.
    ///
    /// Announcement: `"<First> added."` for one section, otherwise
    /// `"<First> <rest lowercase, comma-joined> added."`.
    pub fn add<S: AsRef<str>>(
        &self,
        possible: &[SectionId],
        requested: &[S],
    ) -> Result<Outcome<Self>, UnknownSectionId> {
        let requested = parse_section_ids(requested)?;
        let mut next = self.clone();
        let mut added = Vec::new();
        for section in requested {
            if !possible.contains(&section) || next.contains(section) {
                debug!("event=section_add_skipped module=editor section={section}");
                continue;
            }
            next.order.push(section);
            added.push(section);
        }

        Ok(match add_announcement(&added) {
            Some(text) => Outcome::announced(next, text),
            None => Outcome::unchanged(next),
        })
    }

    /// Removes each requested section except `personal`.
    ///
    /// Announcement: removed names comma-joined plus `" deleted."`; when the
    /// opened section was removed the opened pointer is cleared and a notice
    /// is appended.
    pub fn delete<S: AsRef<str>>(&self, requested: &[S]) -> Result<Outcome<Self>, UnknownSectionId> {
        let requested = parse_section_ids(requested)?;
        let mut next = self.clone();
        let mut removed = Vec::new();
        for section in requested {
            if !section.is_removable() {
                debug!("event=section_delete_skipped module=editor section={section} reason=pinned");
                continue;
            }
            if let Some(index) = next.order.iter().position(|active| *active == section) {
                next.order.remove(index);
                removed.push(section);
            }
        }

        if removed.is_empty() {
            return Ok(Outcome::unchanged(next));
        }

        let names: Vec<String> = removed.iter().map(|section| section.label()).collect();
        let mut announcement = format!("{} deleted.", names.join(", "));
        if next.opened.is_some_and(|opened| removed.contains(&opened)) {
            next.opened = None;
            announcement.push_str(OPENED_SECTION_DELETED);
        }
        Ok(Outcome::announced(next, announcement))
    }

    /// Opens `section` when selection is allowed and the section is active.
    pub fn open(&self, section: SectionId, mode: EditorMode) -> Self {
        let mut next = self.clone();
        if mode.allows_select() && self.contains(section) {
            next.opened = Some(section);
        } else {
            debug!("event=section_open_suppressed module=editor section={section}");
        }
        next
    }
}

fn add_announcement(added: &[SectionId]) -> Option<String> {
    let (first, rest) = added.split_first()?;
    let first = capitalize(first.as_str());
    if rest.is_empty() {
        return Some(format!("{first} added."));
    }
    let rest: Vec<String> = rest
        .iter()
        .map(|section| section.as_str().to_lowercase())
        .collect();
    Some(format!("{first} {} added.", rest.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::{add_announcement, ActiveSections};
    use crate::editor::mode::EditorMode;
    use crate::model::section::SectionId;

    #[test]
    fn new_prepends_personal_and_dedups() {
        let sections = ActiveSections::new(&[SectionId::Links, SectionId::Links]);
        assert_eq!(sections.order(), &[SectionId::Personal, SectionId::Links]);
    }

    #[test]
    fn add_announcement_joins_rest_with_commas() {
        let text = add_announcement(&[
            SectionId::Links,
            SectionId::Skills,
            SectionId::Experience,
        ]);
        assert_eq!(text.as_deref(), Some("Links skills, experience added."));
        assert_eq!(add_announcement(&[]), None);
    }

    #[test]
    fn open_is_suppressed_while_editing() {
        let sections = ActiveSections::default();
        let opened = sections.open(SectionId::Links, EditorMode::Editing);
        assert_eq!(opened.opened(), Some(SectionId::Personal));
        let opened = sections.open(SectionId::Links, EditorMode::Viewing);
        assert_eq!(opened.opened(), Some(SectionId::Links));
    }

    #[test]
    fn draggable_sections_exclude_personal() {
        let sections = ActiveSections::default();
        assert!(!sections.draggable_sections().contains(&SectionId::Personal));
        assert_eq!(sections.draggable_sections().len(), 6);
    }
}
