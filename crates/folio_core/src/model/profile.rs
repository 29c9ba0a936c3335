//! Hero profile and page metadata.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Labeled outbound link (social profile, navbar item target, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledLink {
    pub label: String,
    pub href: String,
}

impl LabeledLink {
    pub(crate) fn is_blank(&self) -> bool {
        self.label.trim().is_empty() || self.href.trim().is_empty()
    }
}

/// Hero section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Subtitle under the name.
    #[serde(default)]
    pub headline: String,
    /// Short focus-area line.
    #[serde(default)]
    pub tagline: String,
    /// Inline rich text paragraph.
    #[serde(default)]
    pub summary: String,
    /// Call-to-action buttons, rendered in order.
    #[serde(default)]
    pub links: Vec<LabeledLink>,
}

impl Profile {
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }
        if let Some(index) = self.links.iter().position(LabeledLink::is_blank) {
            return Err(ProfileValidationError::BlankLink(index));
        }
        Ok(())
    }
}

/// `<head>` metadata for the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileValidationError {
    EmptyName,
    BlankLink(usize),
    EmptyPageTitle,
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "profile name cannot be empty"),
            Self::BlankLink(index) => {
                write!(f, "profile link #{index} requires both label and href")
            }
            Self::EmptyPageTitle => write!(f, "page title cannot be empty"),
        }
    }
}

impl Error for ProfileValidationError {}
