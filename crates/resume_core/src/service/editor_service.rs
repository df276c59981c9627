//! Editor use-case service.
//!
//! # Responsibility
//! - Own one explicit editor state container per session.
//! - Translate UI commands into collection/section operations.
//! - Hand each transition's focus target and announcement to the caller.
//!
//! # Invariants
//! - `apply` never mutates its input state; it returns the next state.
//! - Programmer errors (bad argument shapes, unknown section ids) fail fast.
//! - Stale item tokens and stale parents are absorbed as no-ops.
//! - Reordering and deleting require editing mode; opening a section
//!   requires viewing.
//! - A drag gesture exists only in editing mode and locks the list it
//!   rearranges against structural changes until it ends.

use crate::collection::{FocusTarget, OrderedCollection, Outcome};
use crate::config::EditorConfig;
use crate::editor::drag::{DragError, DragGesture};
use crate::editor::mode::EditorMode;
use crate::editor::sections::ActiveSections;
use crate::model::item::ItemId;
use crate::model::resume::{ListPath, ListPayload, PersonalInfo, ResumeDraft};
use crate::model::section::{parse_section_id, SectionId, UnknownSectionId};
use crate::service::command::{decode_payload, parse_item_id, string_array, EditorCommand};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from editor command handling.
#[derive(Debug)]
pub enum EditorError {
    /// Argument had the wrong JSON shape or payload type.
    InvalidArgumentType {
        expected: &'static str,
        found: String,
    },
    /// Section id outside the closed enumeration.
    UnknownSectionId(UnknownSectionId),
    /// Operation is only available while editing.
    EditingRequired { op: &'static str },
    /// Drag gesture protocol misuse.
    Drag(DragError),
}

impl EditorError {
    /// Stable kind name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgumentType { .. } => "invalid_argument_type",
            Self::UnknownSectionId(_) => "unknown_section_id",
            Self::EditingRequired { .. } => "editing_required",
            Self::Drag(_) => "drag",
        }
    }
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgumentType { expected, found } => {
                write!(f, "invalid argument: expected {expected}, got {found}")
            }
            Self::UnknownSectionId(err) => write!(f, "{err}"),
            Self::EditingRequired { op } => write!(f, "`{op}` requires editing mode"),
            Self::Drag(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownSectionId(err) => Some(err),
            Self::Drag(err) => Some(err),
            Self::InvalidArgumentType { .. } | Self::EditingRequired { .. } => None,
        }
    }
}

impl From<UnknownSectionId> for EditorError {
    fn from(value: UnknownSectionId) -> Self {
        Self::UnknownSectionId(value)
    }
}

impl From<DragError> for EditorError {
    fn from(value: DragError) -> Self {
        Self::Drag(value)
    }
}

/// Gesture in flight, tagged with the list it rearranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveDrag {
    Sections(DragGesture<SectionId>),
    Items {
        path: ListPath,
        gesture: DragGesture<ItemId>,
    },
}

/// Complete editor state for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub draft: ResumeDraft,
    pub sections: ActiveSections,
    pub mode: EditorMode,
    pub drag: Option<ActiveDrag>,
    seed_placeholders: bool,
}

impl EditorState {
    /// Builds the session-start state described by `config`.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            draft: fresh_draft(config.seed_placeholders),
            sections: ActiveSections::new(&config.initial_sections),
            mode: EditorMode::default(),
            drag: None,
            seed_placeholders: config.seed_placeholders,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

/// Next editor state plus focus target and announcement.
pub type Transition = Outcome<EditorState>;

enum ListOp<'a> {
    Add,
    Delete(ItemId),
    Reorder(ItemId, ItemId),
    Edit(ItemId, &'a serde_json::Value),
}

/// Applies one command to `state` and returns the next state.
pub fn apply(state: &EditorState, command: &EditorCommand) -> Result<Transition, EditorError> {
    match command {
        EditorCommand::Add { path } => {
            ensure_list_unlocked(state, *path)?;
            apply_list_op(state, *path, ListOp::Add)
        }
        EditorCommand::Delete { path, id } => {
            ensure_editing(state, command)?;
            ensure_list_unlocked(state, *path)?;
            apply_list_op(state, *path, ListOp::Delete(*id))
        }
        EditorCommand::Reorder { path, from, to } => {
            ensure_editing(state, command)?;
            ensure_list_unlocked(state, *path)?;
            apply_list_op(state, *path, ListOp::Reorder(*from, *to))
        }
        EditorCommand::Edit { path, id, value } => {
            apply_list_op(state, *path, ListOp::Edit(*id, value))
        }
        EditorCommand::EditPersonal { value } => {
            let personal: PersonalInfo = decode_payload(value, "personal info object")?;
            let mut next = state.clone();
            next.draft.personal = personal;
            Ok(Transition::unchanged(next))
        }
        EditorCommand::ResetSection { section } => {
            let section = parse_section_id(section)?;
            let mut next = state.clone();
            next.draft = state
                .draft
                .reset_section(section, fresh_draft(state.seed_placeholders));
            if let Some(ActiveDrag::Items { path, .. }) = &state.drag {
                if path.section() == section {
                    next.drag = None;
                }
            }
            Ok(Transition::unchanged(next))
        }
        EditorCommand::AddSections {
            possible,
            requested,
        } => {
            ensure_sections_unlocked(state)?;
            let possible = match possible {
                Some(value) => string_array(value)?
                    .iter()
                    .map(|id| parse_section_id(id))
                    .collect::<Result<Vec<_>, _>>()?,
                None => SectionId::ALL.to_vec(),
            };
            let requested = string_array(requested)?;
            let outcome = state.sections.add(&possible, &requested)?;
            Ok(with_sections(state, outcome))
        }
        EditorCommand::DeleteSections { requested } => {
            ensure_editing(state, command)?;
            ensure_sections_unlocked(state)?;
            let requested = string_array(requested)?;
            let outcome = state.sections.delete(&requested)?;
            Ok(with_sections(state, outcome))
        }
        EditorCommand::ReorderSections { from, to } => {
            ensure_editing(state, command)?;
            ensure_sections_unlocked(state)?;
            let from = parse_section_id(from)?;
            let to = parse_section_id(to)?;
            let mut next = state.clone();
            next.sections = state.sections.reorder(from, to);
            Ok(Transition::unchanged(next))
        }
        EditorCommand::OpenSection { section } => {
            let section = parse_section_id(section)?;
            let mut next = state.clone();
            next.sections = state.sections.open(section, state.mode);
            Ok(Transition::unchanged(next))
        }
        EditorCommand::ToggleMode => {
            let mut next = state.clone();
            next.mode = state.mode.toggled();
            // Leaving editing ends any gesture the way a cancel does.
            match next.drag.take() {
                Some(drag) => Ok(Transition::announced(next, cancel_announcement(drag))),
                None => Ok(Transition::unchanged(next)),
            }
        }
        EditorCommand::SectionDragStart { active } => {
            ensure_drag_can_start(state, command)?;
            let active = parse_section_id(active)?;
            let mut next = state.clone();
            match DragGesture::pick_up(state.sections.order(), active) {
                Some((gesture, announcement)) => {
                    next.drag = Some(ActiveDrag::Sections(gesture));
                    Ok(Transition::announced(next, announcement))
                }
                None => {
                    debug!("event=stale_token module=service op=section_drag_start status=skipped");
                    Ok(Transition::unchanged(next))
                }
            }
        }
        EditorCommand::ItemDragStart { path, active } => {
            ensure_drag_can_start(state, command)?;
            let mut next = state.clone();
            let picked = state
                .draft
                .list_ids(*path)
                .and_then(|ids| DragGesture::pick_up(&ids, *active));
            match picked {
                Some((gesture, announcement)) => {
                    next.drag = Some(ActiveDrag::Items {
                        path: *path,
                        gesture,
                    });
                    Ok(Transition::announced(next, announcement))
                }
                None => {
                    debug!("event=stale_token module=service op=item_drag_start status=skipped");
                    Ok(Transition::unchanged(next))
                }
            }
        }
        EditorCommand::DragOver { over } => {
            let mut next = state.clone();
            let announcement = match next.drag.as_mut().ok_or(DragError::NotActive)? {
                ActiveDrag::Sections(gesture) => {
                    let over = over.as_deref().map(parse_section_id).transpose()?;
                    gesture.move_over(over)
                }
                ActiveDrag::Items { gesture, .. } => {
                    let over = over.as_deref().map(parse_item_id).transpose()?;
                    gesture.move_over(over)
                }
            };
            Ok(Transition {
                state: next,
                focus: None,
                announcement,
            })
        }
        EditorCommand::DragEnd { over } => {
            let drag = state.drag.clone().ok_or(DragError::NotActive)?;
            ensure_editing(state, command)?;
            let mut next = state.clone();
            next.drag = None;
            match drag {
                ActiveDrag::Sections(gesture) => {
                    let over = over.as_deref().map(parse_section_id).transpose()?;
                    let dropped = gesture.drop_on(over);
                    if let Some(target) = dropped.target {
                        next.sections = next.sections.reorder(dropped.active, target);
                    }
                    Ok(Transition::announced(next, dropped.announcement))
                }
                ActiveDrag::Items { path, gesture } => {
                    let over = over.as_deref().map(parse_item_id).transpose()?;
                    let dropped = gesture.drop_on(over);
                    if let Some(target) = dropped.target {
                        next.draft =
                            draft_list_op(&next.draft, path, ListOp::Reorder(dropped.active, target))?
                                .state;
                    }
                    Ok(Transition::announced(next, dropped.announcement))
                }
            }
        }
        EditorCommand::DragCancel => {
            let drag = state.drag.clone().ok_or(DragError::NotActive)?;
            let mut next = state.clone();
            next.drag = None;
            Ok(Transition::announced(next, cancel_announcement(drag)))
        }
    }
}

fn apply_list_op(
    state: &EditorState,
    path: ListPath,
    op: ListOp<'_>,
) -> Result<Transition, EditorError> {
    let outcome = draft_list_op(&state.draft, path, op)?;
    let mut next = state.clone();
    next.draft = outcome.state;
    Ok(Transition {
        state: next,
        focus: outcome.focus,
        announcement: outcome.announcement,
    })
}

fn draft_list_op(
    draft: &ResumeDraft,
    path: ListPath,
    op: ListOp<'_>,
) -> Result<Outcome<ResumeDraft>, EditorError> {
    let mut next = draft.clone();
    let focus = match path {
        ListPath::Links => run_list_op(&mut next.links, &op, "link object")?,
        ListPath::Skills(group) => run_list_op(next.skills.group_mut(group), &op, "skill object")?,
        ListPath::Jobs => run_list_op(&mut next.jobs, &op, "job object")?,
        ListPath::Projects => run_list_op(&mut next.projects, &op, "project object")?,
        ListPath::Degrees => run_list_op(&mut next.degrees, &op, "degree object")?,
        ListPath::Certifications => {
            run_list_op(&mut next.certifications, &op, "certification object")?
        }
        ListPath::JobBullets(parent) => match next.jobs.get_mut(parent) {
            Some(job) => run_list_op(&mut job.bullets, &op, "bullet object")?,
            None => stale_parent(path),
        },
        ListPath::ProjectBullets(parent) => match next.projects.get_mut(parent) {
            Some(project) => run_list_op(&mut project.bullets, &op, "bullet object")?,
            None => stale_parent(path),
        },
        ListPath::DegreeBullets(parent) => match next.degrees.get_mut(parent) {
            Some(degree) => run_list_op(&mut degree.bullets, &op, "bullet object")?,
            None => stale_parent(path),
        },
    };
    Ok(Outcome {
        state: next,
        focus,
        announcement: None,
    })
}

fn run_list_op<T: ListPayload>(
    list: &mut OrderedCollection<T>,
    op: &ListOp<'_>,
    expected: &'static str,
) -> Result<Option<FocusTarget>, EditorError> {
    let outcome = match op {
        ListOp::Add => list.add(),
        ListOp::Delete(id) => list.delete(*id),
        ListOp::Reorder(from, to) => Outcome::unchanged(list.reorder(*from, *to)),
        ListOp::Edit(id, value) => {
            let incoming: T = decode_payload(value, expected)?;
            Outcome::unchanged(list.update(*id, |current| current.merge_edit(incoming)))
        }
    };
    *list = outcome.state;
    Ok(outcome.focus)
}

fn stale_parent(path: ListPath) -> Option<FocusTarget> {
    debug!("event=stale_parent module=service list={path} status=skipped");
    None
}

fn with_sections(state: &EditorState, outcome: Outcome<ActiveSections>) -> Transition {
    let mut next = state.clone();
    next.sections = outcome.state;
    Transition {
        state: next,
        focus: outcome.focus,
        announcement: outcome.announcement,
    }
}

// The locked list is never rearranged mid-gesture, so ending the gesture
// leaves the pickup order in place.
fn cancel_announcement(drag: ActiveDrag) -> String {
    match drag {
        ActiveDrag::Sections(gesture) => gesture.cancel().1,
        ActiveDrag::Items { gesture, .. } => gesture.cancel().1,
    }
}

fn ensure_editing(state: &EditorState, command: &EditorCommand) -> Result<(), EditorError> {
    if !state.mode.allows_reorder() {
        return Err(EditorError::EditingRequired { op: command.name() });
    }
    Ok(())
}

/// Rejects structural changes to the dragged list or the list owning its parent.
fn ensure_list_unlocked(state: &EditorState, path: ListPath) -> Result<(), EditorError> {
    if let Some(ActiveDrag::Items { path: dragged, .. }) = &state.drag {
        if *dragged == path || dragged.container() == Some(path) {
            return Err(DragError::ListLocked.into());
        }
    }
    Ok(())
}

fn ensure_sections_unlocked(state: &EditorState) -> Result<(), EditorError> {
    if let Some(ActiveDrag::Sections(_)) = &state.drag {
        return Err(DragError::ListLocked.into());
    }
    Ok(())
}

fn ensure_drag_can_start(state: &EditorState, command: &EditorCommand) -> Result<(), EditorError> {
    ensure_editing(state, command)?;
    if state.drag.is_some() {
        return Err(DragError::AlreadyActive.into());
    }
    Ok(())
}

fn fresh_draft(seed_placeholders: bool) -> ResumeDraft {
    if seed_placeholders {
        ResumeDraft::seeded()
    } else {
        ResumeDraft::default()
    }
}

/// Side-channel values delivered after one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub focus: Option<FocusTarget>,
    pub announcement: Option<String>,
}

/// Caller-owned redraw step invoked after every applied command.
pub trait EditorObserver {
    fn on_transition(&mut self, state: &EditorState, notification: &Notification);
}

impl EditorObserver for Vec<Notification> {
    fn on_transition(&mut self, _state: &EditorState, notification: &Notification) {
        self.push(notification.clone());
    }
}

/// Editor session facade over one state container and one observer.
pub struct EditorSession<O: EditorObserver> {
    state: EditorState,
    observer: O,
}

impl<O: EditorObserver> EditorSession<O> {
    /// Creates a session at its configured start state.
    pub fn new(config: &EditorConfig, observer: O) -> Self {
        Self {
            state: EditorState::new(config),
            observer,
        }
    }

    /// Creates a session resuming from an existing state.
    pub fn with_state(state: EditorState, observer: O) -> Self {
        Self { state, observer }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Applies one command, commits the next state and notifies the observer.
    ///
    /// On error the current state is kept unchanged.
    pub fn dispatch(&mut self, command: &EditorCommand) -> Result<Notification, EditorError> {
        let transition = match apply(&self.state, command) {
            Ok(transition) => transition,
            Err(err) => {
                warn!(
                    "event=command_failed module=service op={} status=error kind={}",
                    command.name(),
                    err.kind()
                );
                return Err(err);
            }
        };

        self.state = transition.state;
        let notification = Notification {
            focus: transition.focus,
            announcement: transition.announcement,
        };
        info!(
            "event=command_applied module=service op={} status=ok announced={}",
            command.name(),
            notification.announcement.is_some()
        );
        self.observer.on_transition(&self.state, &notification);
        Ok(notification)
    }

    /// Parses and dispatches one JSON command.
    pub fn dispatch_json(&mut self, text: &str) -> Result<Notification, EditorError> {
        let command = EditorCommand::from_json(text)?;
        self.dispatch(&command)
    }

    pub fn into_parts(self) -> (EditorState, O) {
        (self.state, self.observer)
    }
}
