//! Work-experience timeline entries.
//!
//! # Invariants
//! - `company` and `role` are never blank.
//! - `duration` is a display string; it is never parsed or used for ordering.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One position on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WorkExperienceWire")]
pub struct WorkExperienceEntry {
    pub company: String,
    pub role: String,
    pub location: String,
    /// Free-form, e.g. `Sept 2019 - Present`.
    pub duration: String,
    /// Inline rich text bullets, rendered in order.
    pub achievements: Vec<String>,
    /// Badges, rendered in order.
    pub tech_stack: Vec<String>,
}

impl WorkExperienceEntry {
    /// Creates an entry with empty bullet and badge lists.
    pub fn new(
        company: impl Into<String>,
        role: impl Into<String>,
        location: impl Into<String>,
        duration: impl Into<String>,
    ) -> Result<Self, ExperienceValidationError> {
        let entry = Self {
            company: company.into(),
            role: role.into(),
            location: location.into(),
            duration: duration.into(),
            achievements: Vec::new(),
            tech_stack: Vec::new(),
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn validate(&self) -> Result<(), ExperienceValidationError> {
        if self.company.trim().is_empty() {
            return Err(ExperienceValidationError::EmptyCompany);
        }
        if self.role.trim().is_empty() {
            return Err(ExperienceValidationError::EmptyRole);
        }
        if let Some(index) = self
            .achievements
            .iter()
            .position(|bullet| bullet.trim().is_empty())
        {
            return Err(ExperienceValidationError::EmptyAchievement(index));
        }
        if self.tech_stack.iter().any(|badge| badge.trim().is_empty()) {
            return Err(ExperienceValidationError::EmptyTechBadge);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperienceValidationError {
    EmptyCompany,
    EmptyRole,
    EmptyAchievement(usize),
    EmptyTechBadge,
}

impl Display for ExperienceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCompany => write!(f, "experience company cannot be empty"),
            Self::EmptyRole => write!(f, "experience role cannot be empty"),
            Self::EmptyAchievement(index) => {
                write!(f, "experience achievement #{index} cannot be empty")
            }
            Self::EmptyTechBadge => write!(f, "experience tech_stack cannot contain empty values"),
        }
    }
}

impl Error for ExperienceValidationError {}

#[derive(Deserialize)]
struct WorkExperienceWire {
    company: String,
    role: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    achievements: Vec<String>,
    #[serde(default)]
    tech_stack: Vec<String>,
}

impl TryFrom<WorkExperienceWire> for WorkExperienceEntry {
    type Error = ExperienceValidationError;

    fn try_from(value: WorkExperienceWire) -> Result<Self, Self::Error> {
        let entry = Self {
            company: value.company,
            role: value.role,
            location: value.location,
            duration: value.duration,
            achievements: value.achievements,
            tech_stack: value.tech_stack,
        };
        entry.validate()?;
        Ok(entry)
    }
}
