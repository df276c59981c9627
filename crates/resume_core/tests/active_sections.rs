use resume_core::{ActiveSections, EditorMode, SectionId, UnknownSectionId};

fn all_seven() -> Vec<SectionId> {
    SectionId::ALL.to_vec()
}

#[test]
fn add_two_sections_announces_first_capitalized_rest_lowercase() {
    let active = ActiveSections::new(&[SectionId::Personal]);
    let outcome = active.add(&all_seven(), &["links", "skills"]).unwrap();
    assert_eq!(
        outcome.state.order(),
        &[SectionId::Personal, SectionId::Links, SectionId::Skills]
    );
    assert_eq!(outcome.announcement.as_deref(), Some("Links skills added."));
}

#[test]
fn add_single_section_announces_capitalized_name() {
    let active = ActiveSections::new(&[SectionId::Personal]);
    let outcome = active.add(&all_seven(), &["education"]).unwrap();
    assert_eq!(outcome.announcement.as_deref(), Some("Education added."));
}

#[test]
fn add_skips_already_active_ids_silently() {
    let active = ActiveSections::new(&[SectionId::Personal, SectionId::Links]);
    let outcome = active
        .add(&all_seven(), &["links", "projects", "projects"])
        .unwrap();
    assert_eq!(
        outcome.state.order(),
        &[SectionId::Personal, SectionId::Links, SectionId::Projects]
    );
    assert_eq!(outcome.announcement.as_deref(), Some("Projects added."));

    let nothing = outcome.state.add(&all_seven(), &["links"]).unwrap();
    assert_eq!(nothing.announcement, None);
    assert_eq!(nothing.state, outcome.state);
}

#[test]
fn add_preserves_requested_order() {
    let active = ActiveSections::new(&[SectionId::Personal]);
    let outcome = active
        .add(&all_seven(), &["certifications", "links", "experience"])
        .unwrap();
    assert_eq!(
        outcome.state.order(),
        &[
            SectionId::Personal,
            SectionId::Certifications,
            SectionId::Links,
            SectionId::Experience
        ]
    );
    assert_eq!(
        outcome.announcement.as_deref(),
        Some("Certifications links, experience added.")
    );
}

#[test]
fn add_rejects_unknown_id() {
    let active = ActiveSections::new(&[SectionId::Personal]);
    let err = active.add(&all_seven(), &["bogus"]).unwrap_err();
    assert_eq!(err, UnknownSectionId("bogus".to_string()));
}

#[test]
fn add_skips_ids_not_offered() {
    let active = ActiveSections::new(&[SectionId::Personal]);
    let outcome = active
        .add(&[SectionId::Links], &["links", "skills"])
        .unwrap();
    assert_eq!(outcome.state.order(), &[SectionId::Personal, SectionId::Links]);
    assert_eq!(outcome.announcement.as_deref(), Some("Links added."));
}

#[test]
fn delete_never_removes_personal() {
    let active = ActiveSections::default();
    let outcome = active.delete(&["personal", "links"]).unwrap();
    assert!(outcome.state.contains(SectionId::Personal));
    assert!(!outcome.state.contains(SectionId::Links));
    assert_eq!(outcome.announcement.as_deref(), Some("Links deleted."));
}

#[test]
fn delete_joins_removed_names_with_commas() {
    let active = ActiveSections::default();
    let outcome = active.delete(&["skills", "projects"]).unwrap();
    assert_eq!(
        outcome.announcement.as_deref(),
        Some("Skills, Projects deleted.")
    );
}

#[test]
fn delete_of_opened_section_clears_pointer() {
    let active = ActiveSections::default().open(SectionId::Links, EditorMode::Viewing);
    let outcome = active.delete(&["links"]).unwrap();
    assert_eq!(outcome.state.opened(), None);
    assert_eq!(
        outcome.announcement.as_deref(),
        Some("Links deleted. Opened section deleted. No section is opened currently.")
    );
}

#[test]
fn delete_rejects_unknown_id_for_whole_batch() {
    let active = ActiveSections::default();
    let err = active.delete(&["links", "bogus"]).unwrap_err();
    assert_eq!(err.0, "bogus");
}

#[test]
fn delete_of_only_personal_is_silent_noop() {
    let active = ActiveSections::default();
    let outcome = active.delete(&["personal"]).unwrap();
    assert_eq!(outcome.state, active);
    assert_eq!(outcome.announcement, None);
}

#[test]
fn reorder_sections_moves_including_personal() {
    let active = ActiveSections::new(&[
        SectionId::Personal,
        SectionId::Links,
        SectionId::Skills,
    ]);
    let moved = active.reorder(SectionId::Skills, SectionId::Links);
    assert_eq!(
        moved.order(),
        &[SectionId::Personal, SectionId::Skills, SectionId::Links]
    );

    let moved = active.reorder(SectionId::Personal, SectionId::Skills);
    assert_eq!(
        moved.order(),
        &[SectionId::Links, SectionId::Skills, SectionId::Personal]
    );
}

#[test]
fn reorder_with_inactive_section_is_noop() {
    let active = ActiveSections::new(&[SectionId::Personal, SectionId::Links]);
    assert_eq!(active.reorder(SectionId::Links, SectionId::Education), active);
}

#[test]
fn inactive_lists_sections_available_to_add() {
    let active = ActiveSections::new(&[SectionId::Personal, SectionId::Skills]);
    assert_eq!(
        active.inactive(),
        vec![
            SectionId::Links,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::Education,
            SectionId::Certifications
        ]
    );
}
