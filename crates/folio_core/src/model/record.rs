//! Content record domain model.
//!
//! # Responsibility
//! - Define the displayable unit rendered as one showcase card.
//! - Validate authoring invariants before a record reaches a registry.
//!
//! # Invariants
//! - `title`, `primary_link` and `category` are never blank.
//! - `tags` never contains duplicates (exact string match) within one record.
//! - Tag order is insertion order and is preserved for display.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One project/work unit rendered as a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContentRecordWire")]
pub struct ContentRecord {
    /// Card heading.
    pub title: String,
    /// Inline rich text (`**strong**`, `*em*`, `[label](url)`).
    pub description: String,
    /// Main call-to-action target.
    pub primary_link: String,
    /// Companion link (for example a source repository).
    pub secondary_link: Option<String>,
    /// Short glyph shown in the card header.
    pub icon: String,
    /// Ordered per-record labels.
    pub tags: Vec<String>,
    /// Grouping key for rendered sections.
    pub category: String,
}

impl ContentRecord {
    /// Creates a record with required fields and empty optional parts.
    ///
    /// # Errors
    /// - Returns the first violated invariant.
    pub fn new(
        title: impl Into<String>,
        primary_link: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        let record = Self {
            title: title.into(),
            description: String::new(),
            primary_link: primary_link.into(),
            secondary_link: None,
            icon: String::new(),
            tags: Vec::new(),
            category: category.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.title.trim().is_empty() {
            return Err(RecordValidationError::EmptyTitle);
        }
        if self.primary_link.trim().is_empty() {
            return Err(RecordValidationError::EmptyPrimaryLink);
        }
        if let Some(secondary) = &self.secondary_link {
            if secondary.trim().is_empty() {
                return Err(RecordValidationError::EmptySecondaryLink);
            }
        }
        if self.category.trim().is_empty() {
            return Err(RecordValidationError::EmptyCategory);
        }

        let mut seen = BTreeSet::<&str>::new();
        for tag in &self.tags {
            if tag.trim().is_empty() {
                return Err(RecordValidationError::EmptyTag);
            }
            if !seen.insert(tag.as_str()) {
                return Err(RecordValidationError::DuplicateTag(tag.clone()));
            }
        }
        Ok(())
    }

    /// Whether the card renders a second call-to-action.
    pub fn has_secondary_link(&self) -> bool {
        self.secondary_link.is_some()
    }
}

/// Authoring errors for one content record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyTitle,
    EmptyPrimaryLink,
    EmptySecondaryLink,
    EmptyCategory,
    EmptyTag,
    DuplicateTag(String),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "record title cannot be empty"),
            Self::EmptyPrimaryLink => write!(f, "record primary_link cannot be empty"),
            Self::EmptySecondaryLink => {
                write!(f, "record secondary_link cannot be empty when present")
            }
            Self::EmptyCategory => write!(f, "record category cannot be empty"),
            Self::EmptyTag => write!(f, "record tags cannot contain empty values"),
            Self::DuplicateTag(tag) => write!(f, "duplicate tag `{tag}` in record"),
        }
    }
}

impl Error for RecordValidationError {}

/// Authoring shape; `link` is accepted as an alias of `primary_link`.
#[derive(Deserialize)]
struct ContentRecordWire {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(alias = "link")]
    primary_link: String,
    #[serde(default)]
    secondary_link: Option<String>,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    tags: Vec<String>,
    category: String,
}

impl TryFrom<ContentRecordWire> for ContentRecord {
    type Error = RecordValidationError;

    fn try_from(value: ContentRecordWire) -> Result<Self, Self::Error> {
        let record = Self {
            title: value.title,
            description: value.description,
            primary_link: value.primary_link,
            secondary_link: value.secondary_link,
            icon: value.icon,
            tags: value.tags,
            category: value.category,
        };
        record.validate()?;
        Ok(record)
    }
}
