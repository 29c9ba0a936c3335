//! Build-time link integrity check.
//!
//! # Responsibility
//! - Resolve every `href` of the rendered pages against the generated output.
//! - Apply the configured `BrokenLinkPolicy` to the result.
//!
//! # Invariants
//! - `#anchor` links must name an element id on the same page.
//! - Site-relative links must stay under `base_url` and resolve to a generated
//!   page or asset; a fragment on a page link must exist on that page.
//! - External links are only checked for syntax; nothing is fetched.

use crate::config::BrokenLinkPolicy;
use crate::render::page::Page;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Scheme, host and optional port of an http(s) URL. Shared with the
/// `url` check in `SiteConfig` so every accepted origin also passes here.
pub(crate) const HTTP_ORIGIN_PATTERN: &str = r"https?://[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(:\d+)?";

static EXTERNAL_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{HTTP_ORIGIN_PATTERN}([/?#][^\s]*)?$"))
        .expect("valid external url regex")
});
static MAILTO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^mailto:[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid mailto regex"));

const MAX_REPORTED_LINKS: usize = 5;

/// Why one link could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokenLinkReason {
    EmptyHref,
    MissingAnchor(String),
    OutsideBaseUrl,
    UnknownTarget(String),
    MalformedExternal,
    UnsupportedScheme,
}

impl Display for BrokenLinkReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyHref => write!(f, "empty href"),
            Self::MissingAnchor(anchor) => write!(f, "no element with id `{anchor}`"),
            Self::OutsideBaseUrl => write!(f, "path is outside the site base url"),
            Self::UnknownTarget(path) => write!(f, "no generated file at `{path}`"),
            Self::MalformedExternal => write!(f, "malformed external url"),
            Self::UnsupportedScheme => write!(f, "unsupported url scheme"),
        }
    }
}

/// One unresolved link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Page the link appears on.
    pub page: String,
    pub href: String,
    pub reason: BrokenLinkReason,
}

impl Display for BrokenLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: `{}` ({})", self.page, self.href, self.reason)
    }
}

/// Outcome of one link check pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Number of hrefs inspected.
    pub checked: usize,
    /// Unresolved links in page then document order.
    pub broken: Vec<BrokenLink>,
}

impl LinkReport {
    pub fn is_clean(&self) -> bool {
        self.broken.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkCheckError {
    BrokenLinks(Vec<BrokenLink>),
}

impl Display for LinkCheckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BrokenLinks(links) => {
                write!(f, "found {} broken link(s)", links.len())?;
                for link in links.iter().take(MAX_REPORTED_LINKS) {
                    write!(f, "\n  - {link}")?;
                }
                if links.len() > MAX_REPORTED_LINKS {
                    write!(f, "\n  ... and {} more", links.len() - MAX_REPORTED_LINKS)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for LinkCheckError {}

/// Resolves links of `pages` against their ids plus extra output files.
///
/// `assets` are output-relative paths (e.g. `css/site.css`) that exist
/// besides the pages themselves.
pub fn check_links<S: AsRef<str>>(pages: &[Page], assets: &[S], base_url: &str) -> LinkReport {
    let anchors: BTreeMap<&str, BTreeSet<&str>> = pages
        .iter()
        .map(|page| (page.file_name, page.document.ids().into_iter().collect()))
        .collect();
    let files: BTreeSet<&str> = pages
        .iter()
        .map(|page| page.file_name)
        .chain(assets.iter().map(|asset| asset.as_ref()))
        .collect();

    let mut report = LinkReport::default();
    for page in pages {
        for href in page.document.hrefs() {
            report.checked += 1;
            if let Err(reason) = resolve(href, page.file_name, base_url, &anchors, &files) {
                report.broken.push(BrokenLink {
                    page: page.file_name.to_string(),
                    href: href.to_string(),
                    reason,
                });
            }
        }
    }
    report
}

/// Applies the broken-link policy to a report.
///
/// # Errors
/// - `Throw` with at least one broken link returns every broken link.
pub fn enforce_policy(report: &LinkReport, policy: BrokenLinkPolicy) -> Result<(), LinkCheckError> {
    if report.is_clean() {
        return Ok(());
    }
    match policy {
        BrokenLinkPolicy::Throw => Err(LinkCheckError::BrokenLinks(report.broken.clone())),
        BrokenLinkPolicy::Warn => {
            for link in &report.broken {
                warn!(
                    "event=link_check module=linkcheck status=broken page={} href={} reason={}",
                    link.page, link.href, link.reason
                );
            }
            Ok(())
        }
        BrokenLinkPolicy::Ignore => Ok(()),
    }
}

fn resolve(
    href: &str,
    current_page: &str,
    base_url: &str,
    anchors: &BTreeMap<&str, BTreeSet<&str>>,
    files: &BTreeSet<&str>,
) -> Result<(), BrokenLinkReason> {
    let href = href.trim();
    if href.is_empty() {
        return Err(BrokenLinkReason::EmptyHref);
    }
    if let Some(anchor) = href.strip_prefix('#') {
        return require_anchor(current_page, anchor, anchors);
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return if EXTERNAL_URL_RE.is_match(href) {
            Ok(())
        } else {
            Err(BrokenLinkReason::MalformedExternal)
        };
    }
    if href.starts_with("mailto:") {
        return if MAILTO_RE.is_match(href) {
            Ok(())
        } else {
            Err(BrokenLinkReason::MalformedExternal)
        };
    }
    if href.starts_with("//") || href.contains(':') {
        return Err(BrokenLinkReason::UnsupportedScheme);
    }

    let relative = match href.strip_prefix('/') {
        Some(_) => href
            .strip_prefix(base_url)
            .or_else(|| (href == base_url.trim_end_matches('/')).then_some(""))
            .ok_or(BrokenLinkReason::OutsideBaseUrl)?,
        None => href,
    };

    let (path, anchor) = match relative.split_once('#') {
        Some((path, anchor)) => (path, Some(anchor)),
        None => (relative, None),
    };
    let path = path.split('?').next().unwrap_or_default();
    let target = if path.is_empty() || path.ends_with('/') {
        format!("{path}index.html")
    } else {
        path.to_string()
    };

    let Some(file) = files.get(target.as_str()) else {
        return Err(BrokenLinkReason::UnknownTarget(target));
    };
    match anchor {
        Some(anchor) if !anchor.is_empty() => require_anchor(file, anchor, anchors),
        _ => Ok(()),
    }
}

fn require_anchor(
    page: &str,
    anchor: &str,
    anchors: &BTreeMap<&str, BTreeSet<&str>>,
) -> Result<(), BrokenLinkReason> {
    // `#` alone scrolls to top and is always valid.
    if anchor.is_empty() {
        return Ok(());
    }
    match anchors.get(page) {
        Some(ids) if ids.contains(anchor) => Ok(()),
        _ => Err(BrokenLinkReason::MissingAnchor(anchor.to_string())),
    }
}
