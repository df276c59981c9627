//! Résumé draft payloads.
//!
//! # Responsibility
//! - Define the concrete payload carried by each editable list.
//! - Own every list of one draft in a single explicit record.
//!
//! # Invariants
//! - Every payload has an empty `Default`, used by `add`.
//! - Bullets belong to exactly one job/project/degree and die with it.

use crate::collection::OrderedCollection;
use crate::model::item::ItemId;
use crate::model::section::SectionId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One bullet point line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub value: String,
}

/// One skill entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub value: String,
}

/// One profile/portfolio link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Free-form contact block; not a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

/// One work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub title: String,
    pub location: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub bullets: OrderedCollection<Bullet>,
}

/// One project entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub link: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub bullets: OrderedCollection<Bullet>,
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub bullets: OrderedCollection<Bullet>,
}

/// One certification entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Payload carried by an editable list.
pub trait ListPayload: Clone + Default + DeserializeOwned {
    /// Applies an edit that arrived as a full payload.
    ///
    /// Nested lists are owned by their own operations and survive edits.
    fn merge_edit(&mut self, incoming: Self) {
        *self = incoming;
    }
}

impl ListPayload for Bullet {}
impl ListPayload for Skill {}
impl ListPayload for Link {}
impl ListPayload for Certification {}

impl ListPayload for Job {
    fn merge_edit(&mut self, incoming: Self) {
        let bullets = std::mem::take(&mut self.bullets);
        *self = Self { bullets, ..incoming };
    }
}

impl ListPayload for Project {
    fn merge_edit(&mut self, incoming: Self) {
        let bullets = std::mem::take(&mut self.bullets);
        *self = Self { bullets, ..incoming };
    }
}

impl ListPayload for Degree {
    fn merge_edit(&mut self, incoming: Self) {
        let bullets = std::mem::take(&mut self.bullets);
        *self = Self { bullets, ..incoming };
    }
}

/// Skill sub-list selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillGroup {
    Languages,
    Frameworks,
    Tools,
}

/// The three skill sub-lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroups {
    pub languages: OrderedCollection<Skill>,
    pub frameworks: OrderedCollection<Skill>,
    pub tools: OrderedCollection<Skill>,
}

impl SkillGroups {
    pub fn group(&self, group: SkillGroup) -> &OrderedCollection<Skill> {
        match group {
            SkillGroup::Languages => &self.languages,
            SkillGroup::Frameworks => &self.frameworks,
            SkillGroup::Tools => &self.tools,
        }
    }

    pub fn group_mut(&mut self, group: SkillGroup) -> &mut OrderedCollection<Skill> {
        match group {
            SkillGroup::Languages => &mut self.languages,
            SkillGroup::Frameworks => &mut self.frameworks,
            SkillGroup::Tools => &mut self.tools,
        }
    }
}

/// Addresses one concrete list inside a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "list", content = "parent", rename_all = "snake_case")]
pub enum ListPath {
    Links,
    Skills(SkillGroup),
    Jobs,
    JobBullets(ItemId),
    Projects,
    ProjectBullets(ItemId),
    Degrees,
    DegreeBullets(ItemId),
    Certifications,
}

impl ListPath {
    /// Section that owns this list.
    pub fn section(self) -> SectionId {
        match self {
            Self::Links => SectionId::Links,
            Self::Skills(_) => SectionId::Skills,
            Self::Jobs | Self::JobBullets(_) => SectionId::Experience,
            Self::Projects | Self::ProjectBullets(_) => SectionId::Projects,
            Self::Degrees | Self::DegreeBullets(_) => SectionId::Education,
            Self::Certifications => SectionId::Certifications,
        }
    }

    /// Parent item for bullet lists.
    pub fn parent(self) -> Option<ItemId> {
        match self {
            Self::JobBullets(id) | Self::ProjectBullets(id) | Self::DegreeBullets(id) => Some(id),
            _ => None,
        }
    }

    /// List holding the parent item of a bullet list.
    pub fn container(self) -> Option<ListPath> {
        match self {
            Self::JobBullets(_) => Some(Self::Jobs),
            Self::ProjectBullets(_) => Some(Self::Projects),
            Self::DegreeBullets(_) => Some(Self::Degrees),
            _ => None,
        }
    }
}

impl Display for ListPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skills(group) => write!(f, "skills/{group:?}"),
            Self::JobBullets(id) => write!(f, "experience/{id}/bullets"),
            Self::ProjectBullets(id) => write!(f, "projects/{id}/bullets"),
            Self::DegreeBullets(id) => write!(f, "education/{id}/bullets"),
            other => write!(f, "{}", other.section()),
        }
    }
}

/// Every section's data for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDraft {
    pub personal: PersonalInfo,
    pub links: OrderedCollection<Link>,
    pub skills: SkillGroups,
    pub jobs: OrderedCollection<Job>,
    pub projects: OrderedCollection<Project>,
    pub degrees: OrderedCollection<Degree>,
    pub certifications: OrderedCollection<Certification>,
}

impl ResumeDraft {
    /// Draft whose lists each hold one placeholder item.
    ///
    /// Jobs, projects and degrees also get one placeholder bullet.
    pub fn seeded() -> Self {
        Self {
            personal: PersonalInfo::default(),
            links: OrderedCollection::with_placeholders(1),
            skills: SkillGroups {
                languages: OrderedCollection::with_placeholders(1),
                frameworks: OrderedCollection::with_placeholders(1),
                tools: OrderedCollection::with_placeholders(1),
            },
            jobs: OrderedCollection::from_values([Job::seeded()]),
            projects: OrderedCollection::from_values([Project::seeded()]),
            degrees: OrderedCollection::from_values([Degree::seeded()]),
            certifications: OrderedCollection::with_placeholders(1),
        }
    }
}

impl ResumeDraft {
    /// Token order of the list at `path`; `None` when a bullet list's parent
    /// no longer exists.
    pub fn list_ids(&self, path: ListPath) -> Option<Vec<ItemId>> {
        match path {
            ListPath::Links => Some(self.links.ids()),
            ListPath::Skills(group) => Some(self.skills.group(group).ids()),
            ListPath::Jobs => Some(self.jobs.ids()),
            ListPath::JobBullets(parent) => self.jobs.get(parent).map(|job| job.bullets.ids()),
            ListPath::Projects => Some(self.projects.ids()),
            ListPath::ProjectBullets(parent) => self
                .projects
                .get(parent)
                .map(|project| project.bullets.ids()),
            ListPath::Degrees => Some(self.degrees.ids()),
            ListPath::DegreeBullets(parent) => {
                self.degrees.get(parent).map(|degree| degree.bullets.ids())
            }
            ListPath::Certifications => Some(self.certifications.ids()),
        }
    }

    /// Replaces every list of `section` with the matching lists of `fresh`.
    pub fn reset_section(&self, section: SectionId, fresh: ResumeDraft) -> Self {
        let mut next = self.clone();
        match section {
            SectionId::Personal => next.personal = fresh.personal,
            SectionId::Links => next.links = fresh.links,
            SectionId::Skills => next.skills = fresh.skills,
            SectionId::Experience => next.jobs = fresh.jobs,
            SectionId::Projects => next.projects = fresh.projects,
            SectionId::Education => next.degrees = fresh.degrees,
            SectionId::Certifications => next.certifications = fresh.certifications,
        }
        next
    }
}

impl Job {
    /// Empty job with one placeholder bullet.
    pub fn seeded() -> Self {
        Self {
            bullets: OrderedCollection::with_placeholders(1),
            ..Self::default()
        }
    }
}

impl Project {
    /// Empty project with one placeholder bullet.
    pub fn seeded() -> Self {
        Self {
            bullets: OrderedCollection::with_placeholders(1),
            ..Self::default()
        }
    }
}

impl Degree {
    /// Empty degree with one placeholder bullet.
    pub fn seeded() -> Self {
        Self {
            bullets: OrderedCollection::with_placeholders(1),
            ..Self::default()
        }
    }
}
