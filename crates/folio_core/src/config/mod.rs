//! Static site configuration (`site.toml`).
//!
//! # Responsibility
//! - Describe site metadata, deployment target, navigation, footer, theme
//!   and locale consumed by the page assembler and build service.
//! - Validate the configuration once, before any rendering happens.
//!
//! # Invariants
//! - `url` is an absolute http(s) origin without a trailing slash.
//! - `base_url` starts and ends with `/`.
//! - `i18n.locales` always contains `i18n.default_locale`.
//! - Theme colors are `#rgb` or `#rrggbb` hex values.

use crate::linkcheck::HTTP_ORIGIN_PATTERN;
use crate::model::profile::LabeledLink;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ORIGIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{HTTP_ORIGIN_PATTERN}$")).expect("valid origin regex")
});
static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex color regex")
});

/// Root site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub favicon: Option<String>,
    /// Public origin, e.g. `https://user.github.io`.
    pub url: String,
    /// Path prefix the site is served under, e.g. `/resume/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub deployment: Deployment,
    #[serde(default)]
    pub on_broken_links: BrokenLinkPolicy,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub color_mode: ColorModeConfig,
    #[serde(default)]
    pub theme: ThemePalette,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub footer: FooterConfig,
}

impl SiteConfig {
    /// Parses and validates a `site.toml` document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::invalid("title", "cannot be empty"));
        }
        if !ORIGIN_RE.is_match(self.url.trim()) {
            return Err(ConfigError::invalid(
                "url",
                format!("`{}` must be an http(s) origin without a path", self.url),
            ));
        }
        if !self.base_url.starts_with('/')
            || !self.base_url.ends_with('/')
            || self.base_url.contains(char::is_whitespace)
        {
            return Err(ConfigError::invalid(
                "base_url",
                format!(
                    "`{}` must start and end with `/` and contain no whitespace",
                    self.base_url
                ),
            ));
        }
        if self.deployment.branch.trim().is_empty() {
            return Err(ConfigError::invalid("deployment.branch", "cannot be empty"));
        }

        let default_locale = self.i18n.default_locale.trim();
        if default_locale.is_empty() {
            return Err(ConfigError::invalid("i18n.default_locale", "cannot be empty"));
        }
        if !self.i18n.locales.iter().any(|locale| locale == default_locale) {
            return Err(ConfigError::invalid(
                "i18n.locales",
                format!("must contain default locale `{default_locale}`"),
            ));
        }

        for (field, value) in self.theme.entries() {
            if !HEX_COLOR_RE.is_match(value) {
                return Err(ConfigError::invalid(
                    field,
                    format!("`{value}` is not a hex color"),
                ));
            }
        }

        if let Some(index) = self.navbar.items.iter().position(|item| item.is_blank()) {
            return Err(ConfigError::invalid(
                "navbar.items",
                format!("item #{index} requires both label and href"),
            ));
        }
        for (group_index, group) in self.footer.links.iter().enumerate() {
            if group.title.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "footer.links",
                    format!("group #{group_index} requires a title"),
                ));
            }
            if let Some(index) = group.items.iter().position(LabeledLink::is_blank) {
                return Err(ConfigError::invalid(
                    "footer.links",
                    format!(
                        "item #{index} of `{}` requires both label and href",
                        group.title
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Site-relative path of a generated page, e.g. `/resume/404.html`.
    pub fn page_path(&self, page: &str) -> String {
        format!("{}{}", self.base_url, page.trim_start_matches('/'))
    }

    /// Absolute URL of the site root.
    pub fn canonical_url(&self) -> String {
        format!("{}{}", self.url.trim().trim_end_matches('/'), self.base_url)
    }
}

fn default_base_url() -> String {
    "/".to_string()
}

/// Static host publishing target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deployment {
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default = "default_deployment_branch")]
    pub branch: String,
}

impl Default for Deployment {
    fn default() -> Self {
        Self {
            organization_name: String::new(),
            project_name: String::new(),
            branch: default_deployment_branch(),
        }
    }
}

impl Deployment {
    /// GitHub Pages targets need `.nojekyll` so underscore paths are served.
    pub fn targets_github_pages(&self) -> bool {
        self.branch == "gh-pages" || !self.organization_name.trim().is_empty()
    }
}

fn default_deployment_branch() -> String {
    "gh-pages".to_string()
}

/// What the build does with links that cannot be resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrokenLinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Log and continue.
    Warn,
    /// Skip reporting.
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct I18nConfig {
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales: default_locales(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_locales() -> Vec<String> {
    vec![default_locale()]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorModeConfig {
    #[serde(default = "default_true")]
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        Self {
            respect_prefers_color_scheme: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color palette emitted as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemePalette {
    pub primary: String,
    pub primary_dark: String,
    pub background: String,
    pub surface: String,
    pub text: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            primary: "#2e8555".to_string(),
            primary_dark: "#205d3b".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f5f6f7".to_string(),
            text: "#1c1e21".to_string(),
        }
    }
}

impl ThemePalette {
    /// `(config field, value)` pairs in stylesheet order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("theme.primary", self.primary.as_str()),
            ("theme.primary_dark", self.primary_dark.as_str()),
            ("theme.background", self.background.as_str()),
            ("theme.surface", self.surface.as_str()),
            ("theme.text", self.text.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NavbarConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavbarItem {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub position: NavbarPosition,
}

impl NavbarItem {
    fn is_blank(&self) -> bool {
        self.label.trim().is_empty() || self.href.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FooterConfig {
    #[serde(default)]
    pub style: FooterStyle,
    #[serde(default)]
    pub links: Vec<FooterLinkGroup>,
    #[serde(default)]
    pub copyright: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

impl FooterStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FooterLinkGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<LabeledLink>,
}

/// Configuration load/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "failed to parse site config: {err}"),
            Self::Invalid { field, message } => {
                write!(f, "invalid site config `{field}`: {message}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}
