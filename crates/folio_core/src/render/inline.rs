//! Inline rich text used by descriptions, achievements and the hero summary.
//!
//! Supported markup: `**strong**`, `*emphasis*` and `[label](url)`.
//! Anything else stays literal text. Nesting is not supported, and link
//! targets allow at most one level of parentheses.

use super::markup::{Element, Node};
use once_cell::sync::Lazy;
use regex::Regex;

static INLINE_MARKUP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\*\*(?P<strong>[^*]+)\*\*",
        r"|\*(?P<em>[^*]+)\*",
        r"|\[(?P<label>[^\]]+)\]\((?P<href>(?:[^()\s]|\([^()\s]*\))+)\)",
    ))
    .expect("valid inline markup regex")
});

/// Converts inline rich text into nodes, preserving surrounding text.
pub fn render_inline(source: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut cursor = 0;

    for captures in INLINE_MARKUP_RE.captures_iter(source) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            nodes.push(Node::text(&source[cursor..whole.start()]));
        }

        if let Some(strong) = captures.name("strong") {
            nodes.push(Element::new("strong").text(strong.as_str()).into());
        } else if let Some(em) = captures.name("em") {
            nodes.push(Element::new("em").text(em.as_str()).into());
        } else if let (Some(label), Some(href)) = (captures.name("label"), captures.name("href")) {
            nodes.push(inline_link(label.as_str(), href.as_str()).into());
        }
        cursor = whole.end();
    }

    if cursor < source.len() {
        nodes.push(Node::text(&source[cursor..]));
    }
    nodes
}

fn inline_link(label: &str, href: &str) -> Element {
    link_element(href).text(label)
}

/// Anchor element for `href`; external targets open in a new tab.
pub(crate) fn link_element(href: &str) -> Element {
    let link = Element::new("a").attr("href", href);
    if is_external(href) {
        link.attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    } else {
        link
    }
}

/// Whether a link leaves the site.
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
