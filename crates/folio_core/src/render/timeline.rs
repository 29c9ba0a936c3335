//! Vertical work-experience timeline.
//!
//! Entries render in input order (reverse-chronological by authoring
//! convention). The `duration` string is displayed verbatim and never used
//! for ordering.

use super::inline::render_inline;
use super::markup::{Element, Fragment};
use crate::model::experience::WorkExperienceEntry;

/// Renders entries as one timeline container; empty input yields an empty fragment.
pub fn render_timeline(entries: &[WorkExperienceEntry]) -> Fragment {
    let mut fragment = Fragment::new();
    if entries.is_empty() {
        return fragment;
    }
    fragment.push(
        Element::new("ol")
            .class("timeline")
            .children(entries.iter().map(render_entry)),
    );
    fragment
}

fn render_entry(entry: &WorkExperienceEntry) -> Element {
    let mut heading = Element::new("div")
        .child(
            Element::new("h3")
                .class("timeline__company")
                .text(entry.company.as_str()),
        )
        .child(
            Element::new("p")
                .class("timeline__role")
                .text(entry.role.as_str()),
        );
    if !entry.location.trim().is_empty() {
        heading = heading.child(
            Element::new("p")
                .class("timeline__location")
                .text(entry.location.as_str()),
        );
    }

    let mut header = Element::new("div").class("timeline__header").child(heading);
    if !entry.duration.trim().is_empty() {
        header = header.child(
            Element::new("span")
                .class("timeline__duration")
                .text(entry.duration.as_str()),
        );
    }

    let mut content = Element::new("div").class("timeline__content").child(header);
    if !entry.achievements.is_empty() {
        content = content.child(
            Element::new("ul").class("timeline__achievements").children(
                entry
                    .achievements
                    .iter()
                    .map(|bullet| Element::new("li").children(render_inline(bullet))),
            ),
        );
    }
    if !entry.tech_stack.is_empty() {
        content = content.child(
            Element::new("div").class("timeline__stack").children(
                entry
                    .tech_stack
                    .iter()
                    .map(|badge| Element::new("span").class("badge").text(badge.as_str())),
            ),
        );
    }

    Element::new("li")
        .class("timeline__item")
        .child(
            Element::new("span")
                .class("timeline__marker")
                .attr("aria-hidden", "true"),
        )
        .child(content)
}
