//! Authored page content (`content.toml`).
//!
//! # Responsibility
//! - Group the hero profile, experience timeline and project sections that
//!   make up the home page.
//! - Convert authored project lists into immutable `ContentRegistry` values.
//!
//! # Invariants
//! - Section ids are unique, lowercase anchor slugs.
//! - Section ids never collide with the reserved page anchors.
//! - Section order is authoring order.

use crate::model::experience::WorkExperienceEntry;
use crate::model::profile::{PageMeta, Profile, ProfileValidationError};
use crate::model::record::ContentRecord;
use crate::registry::{ContentRegistry, RegistryError};
use crate::render::grid::ColumnHint;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Anchor ids emitted by the page layout itself.
pub const RESERVED_ANCHORS: &[&str] = &["top", "experience", "main"];

static SECTION_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid section id regex"));

/// Everything rendered on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub page: PageMeta,
    pub profile: Profile,
    #[serde(default)]
    pub experience: ExperienceSection,
    #[serde(default)]
    pub sections: Vec<ProjectSection>,
}

impl SiteContent {
    /// Parses and validates a `content.toml` document.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source).map_err(ContentError::Parse)?;
        content.validate()?;
        Ok(content)
    }

    /// Validates cross-record invariants not covered by per-record checks.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.page.title.trim().is_empty() {
            return Err(ContentError::Profile(ProfileValidationError::EmptyPageTitle));
        }
        self.profile.validate().map_err(ContentError::Profile)?;

        let mut seen = BTreeSet::<&str>::new();
        for section in &self.sections {
            let id = section.id.as_str();
            if !SECTION_ID_RE.is_match(id) {
                return Err(ContentError::InvalidSectionId(section.id.clone()));
            }
            if RESERVED_ANCHORS.contains(&id) {
                return Err(ContentError::ReservedSectionId(section.id.clone()));
            }
            if !seen.insert(id) {
                return Err(ContentError::DuplicateSectionId(section.id.clone()));
            }
        }
        Ok(())
    }
}

/// Work-experience block of the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperienceSection {
    #[serde(default = "default_experience_title")]
    pub title: String,
    #[serde(default)]
    pub entries: Vec<WorkExperienceEntry>,
}

impl Default for ExperienceSection {
    fn default() -> Self {
        Self {
            title: default_experience_title(),
            entries: Vec::new(),
        }
    }
}

fn default_experience_title() -> String {
    "Professional Experience".to_string()
}

/// One project showcase block: heading plus a categorized card grid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ProjectSectionWire")]
pub struct ProjectSection {
    /// Anchor id, e.g. `projects`.
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub columns: ColumnHint,
    pub registry: ContentRegistry,
}

impl ProjectSection {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        columns: ColumnHint,
        records: Vec<ContentRecord>,
    ) -> Result<Self, RegistryError> {
        let id = id.into();
        let registry = ContentRegistry::new(id.clone(), records)?;
        Ok(Self {
            id,
            title: title.into(),
            subtitle: None,
            columns,
            registry,
        })
    }
}

#[derive(Deserialize)]
struct ProjectSectionWire {
    id: String,
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    columns: ColumnHint,
    #[serde(default)]
    records: Vec<ContentRecord>,
}

impl TryFrom<ProjectSectionWire> for ProjectSection {
    type Error = RegistryError;

    fn try_from(value: ProjectSectionWire) -> Result<Self, Self::Error> {
        let mut section = Self::new(value.id, value.title, value.columns, value.records)?;
        section.subtitle = value.subtitle;
        Ok(section)
    }
}

#[derive(Debug)]
pub enum ContentError {
    Parse(toml::de::Error),
    Profile(ProfileValidationError),
    InvalidSectionId(String),
    ReservedSectionId(String),
    DuplicateSectionId(String),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "failed to parse content: {err}"),
            Self::Profile(err) => write!(f, "{err}"),
            Self::InvalidSectionId(id) => {
                write!(f, "section id `{id}` must be a lowercase slug")
            }
            Self::ReservedSectionId(id) => {
                write!(f, "section id `{id}` is reserved by the page layout")
            }
            Self::DuplicateSectionId(id) => write!(f, "duplicate section id `{id}`"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Profile(err) => Some(err),
            _ => None,
        }
    }
}
