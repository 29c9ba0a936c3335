//! Categorized card grid renderer.
//!
//! # Responsibility
//! - Partition records from one or more registries into category sections.
//! - Render each record as a fixed-shape card.
//!
//! # Invariants
//! - Sections appear in the order their category is first seen across the
//!   whole input; this is a stable group-by, never a sort.
//! - Within a section, records keep registry order; nothing is deduplicated.
//! - Column layout comes from `ColumnHint` only, never from record count.
//! - Empty input renders an empty fragment (no heading).

use super::inline::{link_element, render_inline};
use super::markup::{Element, Fragment};
use crate::model::record::ContentRecord;
use crate::registry::ContentRegistry;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroU8;

/// Widest fixed grid accepted from content.
pub const MAX_FIXED_COLUMNS: u8 = 6;

const PRIMARY_ACTION_LABEL: &str = "View Project →";
const SECONDARY_ACTION_LABEL: &str = "Source";

/// Presentation-only column selection for a card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ColumnHintWire")]
pub enum ColumnHint {
    /// Responsive auto-fill columns.
    Auto,
    /// Exactly `n` columns on wide screens.
    Fixed(ColumnCount),
}

/// Fixed column count in `1..=MAX_FIXED_COLUMNS`; only built by `ColumnHint::fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCount(NonZeroU8);

impl ColumnCount {
    pub fn get(self) -> u8 {
        self.0.get()
    }
}

impl Display for ColumnCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ColumnHint {
    /// Builds a fixed hint, rejecting zero and widths above `MAX_FIXED_COLUMNS`.
    pub fn fixed(columns: u8) -> Result<Self, ColumnHintError> {
        match NonZeroU8::new(columns) {
            Some(value) if columns <= MAX_FIXED_COLUMNS => Ok(Self::Fixed(ColumnCount(value))),
            _ => Err(ColumnHintError::OutOfRange(columns.to_string())),
        }
    }

    pub fn parse(value: &str) -> Result<Self, ColumnHintError> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized == "auto" {
            return Ok(Self::Auto);
        }
        let columns = normalized
            .parse::<u8>()
            .map_err(|_| ColumnHintError::Unrecognized(value.to_string()))?;
        Self::fixed(columns)
    }

    /// Grid container class for this hint.
    pub fn grid_class(self) -> String {
        match self {
            Self::Auto => "grid grid--auto".to_string(),
            Self::Fixed(columns) => format!("grid grid--cols-{columns}"),
        }
    }
}

impl Default for ColumnHint {
    fn default() -> Self {
        Self::Fixed(ColumnCount(NonZeroU8::MIN.saturating_add(1)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnHintError {
    Unrecognized(String),
    OutOfRange(String),
}

impl Display for ColumnHintError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized(value) => {
                write!(f, "unsupported columns `{value}`; expected `auto` or a number")
            }
            Self::OutOfRange(value) => write!(
                f,
                "columns `{value}` out of range; expected 1..={MAX_FIXED_COLUMNS}"
            ),
        }
    }
}

impl Error for ColumnHintError {}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColumnHintWire {
    Number(u8),
    Text(String),
}

impl TryFrom<ColumnHintWire> for ColumnHint {
    type Error = ColumnHintError;

    fn try_from(value: ColumnHintWire) -> Result<Self, Self::Error> {
        match value {
            ColumnHintWire::Number(columns) => Self::fixed(columns),
            ColumnHintWire::Text(text) => Self::parse(text.as_str()),
        }
    }
}

/// Records sharing one category, borrowed for a single render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection<'a> {
    pub category: &'a str,
    pub records: Vec<&'a ContentRecord>,
}

/// Stable group-by on `category` across all registries, first-seen order.
pub fn group_by_category(registries: &[ContentRegistry]) -> Vec<CategorySection<'_>> {
    let mut sections: Vec<CategorySection<'_>> = Vec::new();
    for record in registries.iter().flat_map(ContentRegistry::iter) {
        match sections
            .iter_mut()
            .find(|section| section.category == record.category)
        {
            Some(section) => section.records.push(record),
            None => sections.push(CategorySection {
                category: record.category.as_str(),
                records: vec![record],
            }),
        }
    }
    sections
}

/// Renders registries as category sections of cards.
pub fn render_grid(registries: &[ContentRegistry], column_hint: ColumnHint) -> Fragment {
    let mut fragment = Fragment::new();
    for section in group_by_category(registries) {
        fragment.push(render_section(&section, column_hint));
    }
    fragment
}

fn render_section(section: &CategorySection<'_>, column_hint: ColumnHint) -> Element {
    Element::new("div")
        .class("category-section")
        .attr("data-category", section.category)
        .child(
            Element::new("h3")
                .class("category-section__title")
                .text(section.category),
        )
        .child(
            Element::new("div")
                .class(column_hint.grid_class())
                .children(section.records.iter().map(|record| render_card(record))),
        )
}

/// Renders one record as a card.
pub fn render_card(record: &ContentRecord) -> Element {
    let header = Element::new("div")
        .class("card__header")
        .child(
            Element::new("span")
                .class("card__icon")
                .attr("aria-hidden", "true")
                .text(record.icon.as_str()),
        )
        .child(
            Element::new("span")
                .class("card__category")
                .text(record.category.as_str()),
        );

    let tags = Element::new("div").class("card__tags").children(
        record
            .tags
            .iter()
            .map(|tag| Element::new("span").class("tag").text(tag.as_str())),
    );

    let mut actions = Element::new("div").class("card__actions").child(action_link(
        record.primary_link.as_str(),
        "button button--primary card__action",
        PRIMARY_ACTION_LABEL,
    ));
    if let Some(secondary) = &record.secondary_link {
        actions = actions.child(action_link(
            secondary.as_str(),
            "button button--secondary button--outline card__action card__action--secondary",
            SECONDARY_ACTION_LABEL,
        ));
    }

    Element::new("article")
        .class("card")
        .child(header)
        .child(
            Element::new("h4")
                .class("card__title")
                .text(record.title.as_str()),
        )
        .child(
            Element::new("p")
                .class("card__description")
                .children(render_inline(record.description.as_str())),
        )
        .child(tags)
        .child(actions)
}

fn action_link(href: &str, class: &str, label: &str) -> Element {
    link_element(href).class(class).text(label)
}

#[cfg(test)]
mod tests {
    use super::{ColumnHint, ColumnHintError, MAX_FIXED_COLUMNS};

    #[test]
    fn default_hint_is_two_columns() {
        assert_eq!(ColumnHint::default().grid_class(), "grid grid--cols-2");
    }

    #[test]
    fn parse_accepts_auto_and_numbers() {
        assert_eq!(ColumnHint::parse(" AUTO ").unwrap(), ColumnHint::Auto);
        assert_eq!(ColumnHint::parse("3").unwrap(), ColumnHint::fixed(3).unwrap());
    }

    #[test]
    fn fixed_rejects_zero_and_too_wide() {
        assert!(matches!(
            ColumnHint::fixed(0),
            Err(ColumnHintError::OutOfRange(_))
        ));
        assert!(matches!(
            ColumnHint::fixed(7),
            Err(ColumnHintError::OutOfRange(_))
        ));
        assert!(matches!(
            ColumnHint::parse("wide"),
            Err(ColumnHintError::Unrecognized(_))
        ));
    }

    #[test]
    fn fixed_counts_stay_within_range() {
        for columns in 1..=MAX_FIXED_COLUMNS {
            match ColumnHint::fixed(columns).unwrap() {
                ColumnHint::Fixed(count) => assert_eq!(count.get(), columns),
                ColumnHint::Auto => panic!("expected a fixed hint"),
            }
        }
        let ColumnHint::Fixed(count) = ColumnHint::default() else {
            panic!("default should be fixed");
        };
        assert_eq!(count.to_string(), "2");
    }
}
