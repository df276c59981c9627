//! Section category enumeration.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed enumeration of résumé section categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Personal,
    Links,
    Skills,
    Experience,
    Projects,
    Education,
    Certifications,
}

/// String id for the personal section.
pub const SECTION_PERSONAL: &str = "personal";
/// String id for the links section.
pub const SECTION_LINKS: &str = "links";
/// String id for the skills section.
pub const SECTION_SKILLS: &str = "skills";
/// String id for the experience section.
pub const SECTION_EXPERIENCE: &str = "experience";
/// String id for the projects section.
pub const SECTION_PROJECTS: &str = "projects";
/// String id for the education section.
pub const SECTION_EDUCATION: &str = "education";
/// String id for the certifications section.
pub const SECTION_CERTIFICATIONS: &str = "certifications";

const SUPPORTED_SECTION_STRINGS: &[&str] = &[
    SECTION_PERSONAL,
    SECTION_LINKS,
    SECTION_SKILLS,
    SECTION_EXPERIENCE,
    SECTION_PROJECTS,
    SECTION_EDUCATION,
    SECTION_CERTIFICATIONS,
];

impl SectionId {
    /// Every section in canonical order.
    pub const ALL: [SectionId; 7] = [
        Self::Personal,
        Self::Links,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Education,
        Self::Certifications,
    ];

    /// Stable string id used by UI callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => SECTION_PERSONAL,
            Self::Links => SECTION_LINKS,
            Self::Skills => SECTION_SKILLS,
            Self::Experience => SECTION_EXPERIENCE,
            Self::Projects => SECTION_PROJECTS,
            Self::Education => SECTION_EDUCATION,
            Self::Certifications => SECTION_CERTIFICATIONS,
        }
    }

    /// Display name with the first letter capitalized.
    pub fn label(self) -> String {
        capitalize(self.as_str())
    }

    /// Whether the section can ever leave the active set.
    pub fn is_removable(self) -> bool {
        self != Self::Personal
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns supported section id strings in canonical order.
pub fn supported_section_strings() -> &'static [&'static str] {
    SUPPORTED_SECTION_STRINGS
}

/// Parses one section id from its exact string form.
pub fn parse_section_id(value: &str) -> Result<SectionId, UnknownSectionId> {
    match value {
        SECTION_PERSONAL => Ok(SectionId::Personal),
        SECTION_LINKS => Ok(SectionId::Links),
        SECTION_SKILLS => Ok(SectionId::Skills),
        SECTION_EXPERIENCE => Ok(SectionId::Experience),
        SECTION_PROJECTS => Ok(SectionId::Projects),
        SECTION_EDUCATION => Ok(SectionId::Education),
        SECTION_CERTIFICATIONS => Ok(SectionId::Certifications),
        _ => Err(UnknownSectionId(value.to_string())),
    }
}

/// Parses a batch of section ids, failing on the first unknown one.
pub fn parse_section_ids<S: AsRef<str>>(values: &[S]) -> Result<Vec<SectionId>, UnknownSectionId> {
    values
        .iter()
        .map(|value| parse_section_id(value.as_ref()))
        .collect()
}

/// Requested section id is outside the closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSectionId(pub String);

impl Display for UnknownSectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown section id `{}`; expected one of {}",
            self.0,
            SUPPORTED_SECTION_STRINGS.join("|")
        )
    }
}

impl Error for UnknownSectionId {}

/// Uppercases the first character and keeps the rest as-is.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
