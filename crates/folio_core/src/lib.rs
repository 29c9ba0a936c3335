//! Core library for the folio portfolio site generator.
//! Content model, pure renderers and the build service live here; the CLI is
//! a thin wrapper.

pub mod config;
pub mod content;
pub mod linkcheck;
pub mod logging;
pub mod model;
pub mod registry;
pub mod render;
pub mod repo;
pub mod service;

pub use config::{BrokenLinkPolicy, ConfigError, SiteConfig};
pub use content::{ContentError, ExperienceSection, ProjectSection, SiteContent};
pub use linkcheck::{
    check_links, enforce_policy, BrokenLink, BrokenLinkReason, LinkCheckError, LinkReport,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::experience::{ExperienceValidationError, WorkExperienceEntry};
pub use model::profile::{LabeledLink, PageMeta, Profile, ProfileValidationError};
pub use model::record::{ContentRecord, RecordValidationError};
pub use registry::{ContentRegistry, RegistryError};
pub use render::{
    group_by_category, render_grid, render_home_page, render_not_found_page, render_timeline,
    CategorySection, ColumnCount, ColumnHint, Element, Fragment, Node, Page,
};
pub use repo::content_repo::{
    ContentRepository, FsContentRepository, InMemoryContentRepository, RepoError, RepoResult,
    StaticAsset,
};
pub use service::site_service::{BuildError, BuildReport, RenderedSite, SiteService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
