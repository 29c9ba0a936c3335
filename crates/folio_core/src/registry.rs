//! Ordered, immutable collections of content records.
//!
//! # Responsibility
//! - Own the records of one page section in authored order.
//! - Reject invalid records at construction time.
//!
//! # Invariants
//! - A registry never changes after construction.
//! - Iteration order is authoring order.
//! - Every contained record satisfies `ContentRecord::validate()`.

use crate::model::record::{ContentRecord, RecordValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Immutable, ordered record collection scoped to one page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegistry {
    scope: String,
    records: Vec<ContentRecord>,
}

impl ContentRegistry {
    /// Builds a registry after validating every record.
    ///
    /// # Errors
    /// - Returns the index of the first invalid record with its cause.
    pub fn new(
        scope: impl Into<String>,
        records: Vec<ContentRecord>,
    ) -> Result<Self, RegistryError> {
        let scope = scope.into();
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| RegistryError::InvalidRecord {
                    scope: scope.clone(),
                    index,
                    source,
                })?;
        }
        Ok(Self { scope, records })
    }

    pub fn empty(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            records: Vec::new(),
        }
    }

    /// Section scope this registry was authored for.
    pub fn scope(&self) -> &str {
        self.scope.as_str()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = Vec::new();
        for record in &self.records {
            if !ordered.contains(&record.category.as_str()) {
                ordered.push(record.category.as_str());
            }
        }
        ordered
    }
}

impl<'a> IntoIterator for &'a ContentRegistry {
    type Item = &'a ContentRecord;
    type IntoIter = std::slice::Iter<'a, ContentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidRecord {
        scope: String,
        index: usize,
        source: RecordValidationError,
    },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecord {
                scope,
                index,
                source,
            } => write!(f, "invalid record #{index} in `{scope}`: {source}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRecord { source, .. } => Some(source),
        }
    }
}
