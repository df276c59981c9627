//! Editor configuration.
//!
//! # Responsibility
//! - Describe session-start options (seeding, initial sections, logging).
//! - Load options from environment variables with build-mode defaults.
//!
//! # Invariants
//! - Unset variables fall back to defaults; malformed ones are rejected.
//! - `initial_sections` only holds ids from the closed enumeration.

use crate::logging::{default_log_level, normalize_level};
use crate::model::section::{parse_section_id, SectionId, UnknownSectionId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Env var holding the log level.
pub const ENV_LOG_LEVEL: &str = "RESUME_LOG_LEVEL";
/// Env var holding the absolute log directory.
pub const ENV_LOG_DIR: &str = "RESUME_LOG_DIR";
/// Env var toggling placeholder items at session start (`true|false`).
pub const ENV_SEED_PLACEHOLDERS: &str = "RESUME_SEED_PLACEHOLDERS";
/// Env var listing initially active sections, comma-separated.
pub const ENV_SECTIONS: &str = "RESUME_SECTIONS";

/// Errors from configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable is set but cannot be interpreted.
    InvalidValue { key: &'static str, reason: String },
    /// Section list names an id outside the enumeration.
    UnknownSection(UnknownSectionId),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, reason } => write!(f, "invalid value for {key}: {reason}"),
            Self::UnknownSection(err) => write!(f, "invalid value for {ENV_SECTIONS}: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownSection(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<UnknownSectionId> for ConfigError {
    fn from(value: UnknownSectionId) -> Self {
        Self::UnknownSection(value)
    }
}

/// Session-start options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: &'static str,
    /// Absolute directory for rolling logs; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Pre-seed every list with one placeholder item.
    pub seed_placeholders: bool,
    /// Active sections at session start, in navigation order.
    pub initial_sections: Vec<SectionId>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            seed_placeholders: true,
            initial_sections: SectionId::ALL.to_vec(),
        }
    }
}

impl EditorConfig {
    /// Loads configuration from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(|reason| {
                ConfigError::InvalidValue {
                    key: ENV_LOG_LEVEL,
                    reason,
                }
            })?;
        }

        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|value| !value.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir.trim()));
        }

        if let Some(flag) = lookup(ENV_SEED_PLACEHOLDERS) {
            config.seed_placeholders = parse_flag(&flag).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_SEED_PLACEHOLDERS,
                reason: format!("expected true|false, got `{flag}`"),
            })?;
        }

        if let Some(sections) = lookup(ENV_SECTIONS) {
            config.initial_sections = sections
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(parse_section_id)
                .collect::<Result<Vec<_>, _>>()?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ConfigError, EditorConfig, ENV_LOG_LEVEL, ENV_SECTIONS, ENV_SEED_PLACEHOLDERS,
    };
    use crate::model::section::SectionId;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = EditorConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn reads_sections_flag_and_level() {
        let config = EditorConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, "WARNING"),
            (ENV_SEED_PLACEHOLDERS, "off"),
            (ENV_SECTIONS, "links, skills"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(!config.seed_placeholders);
        assert_eq!(
            config.initial_sections,
            vec![SectionId::Links, SectionId::Skills]
        );
    }

    #[test]
    fn rejects_unknown_section_and_bad_flag() {
        let err = EditorConfig::from_lookup(lookup_from(&[(ENV_SECTIONS, "links,bogus")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSection(ref id) if id.0 == "bogus"));

        let err = EditorConfig::from_lookup(lookup_from(&[(ENV_SEED_PLACEHOLDERS, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == ENV_SEED_PLACEHOLDERS));
    }
}
