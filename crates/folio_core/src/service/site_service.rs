//! Site build use-case service.
//!
//! # Responsibility
//! - Orchestrate load → render → link check → write for one site.
//! - Keep renderers pure by performing all I/O here.
//!
//! # Invariants
//! - Nothing is written unless rendering and the link check succeed.
//! - Generated artifacts are never silently replaced by static assets.
//! - Artifact order in reports is write order: pages, stylesheet, static
//!   assets, host markers.

use crate::config::SiteConfig;
use crate::linkcheck::{check_links, enforce_policy, LinkCheckError, LinkReport};
use crate::render::page::{render_home_page, render_not_found_page, Page, STYLESHEET_PATH};
use crate::render::style::render_stylesheet;
use crate::repo::content_repo::{ContentRepository, RepoError, StaticAsset};
use log::{error, info};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Marker file that disables Jekyll processing on GitHub Pages.
pub const NOJEKYLL_FILE_NAME: &str = ".nojekyll";

#[derive(Debug)]
pub enum BuildError {
    Repo(RepoError),
    LinkCheck(LinkCheckError),
    /// A static asset would overwrite a generated file.
    ArtifactConflict(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::LinkCheck(err) => write!(f, "{err}"),
            Self::ArtifactConflict(path) => {
                write!(f, "static asset `{path}` conflicts with a generated file")
            }
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::LinkCheck(err) => Some(err),
            Self::ArtifactConflict(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for BuildError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<LinkCheckError> for BuildError {
    fn from(value: LinkCheckError) -> Self {
        Self::LinkCheck(value)
    }
}

/// Everything a build would write, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSite {
    pub config: SiteConfig,
    pub pages: Vec<Page>,
    pub stylesheet: String,
    pub assets: Vec<StaticAsset>,
    pub link_report: LinkReport,
}

impl RenderedSite {
    pub fn page(&self, file_name: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.file_name == file_name)
    }
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    /// Output-relative paths in write order.
    pub artifacts: Vec<String>,
    pub link_report: LinkReport,
}

/// Build service over a site repository.
pub struct SiteService<R: ContentRepository> {
    repo: R,
}

impl<R: ContentRepository> SiteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads and renders the site, then applies the broken-link policy.
    ///
    /// # Errors
    /// - Repository load/validation failures.
    /// - Broken links under `on_broken_links = "throw"`.
    /// - Static assets colliding with generated files.
    pub fn render(&self) -> Result<RenderedSite, BuildError> {
        let config = self.repo.load_config()?;
        let content = self.repo.load_content()?;
        let assets = self.repo.static_assets()?;

        let pages = vec![
            render_home_page(&config, &content),
            render_not_found_page(&config),
        ];
        let stylesheet = render_stylesheet(&config.theme, &config.color_mode);

        let mut generated: BTreeSet<&str> = pages.iter().map(|page| page.file_name).collect();
        generated.insert(STYLESHEET_PATH);
        generated.insert(NOJEKYLL_FILE_NAME);
        if let Some(conflict) = assets
            .iter()
            .find(|asset| generated.contains(asset.relative_path.as_str()))
        {
            return Err(BuildError::ArtifactConflict(conflict.relative_path.clone()));
        }

        let mut known_files: Vec<&str> = vec![STYLESHEET_PATH];
        known_files.extend(assets.iter().map(|asset| asset.relative_path.as_str()));
        let link_report = check_links(&pages, &known_files, config.base_url.as_str());
        info!(
            "event=link_check module=service status={} checked={} broken={}",
            if link_report.is_clean() { "ok" } else { "broken" },
            link_report.checked,
            link_report.broken.len()
        );
        enforce_policy(&link_report, config.on_broken_links)?;

        Ok(RenderedSite {
            config,
            pages,
            stylesheet,
            assets,
            link_report,
        })
    }

    /// Validates and renders without writing anything.
    pub fn check(&self) -> Result<LinkReport, BuildError> {
        Ok(self.render()?.link_report)
    }

    /// Renders the site and writes all artifacts under `out_dir`.
    ///
    /// # Side effects
    /// - Creates `out_dir` and subdirectories as needed.
    /// - Overwrites existing files with the same names; other files are kept.
    /// - Emits `site_build` and `artifact_write` logging events.
    pub fn build(&self, out_dir: impl AsRef<Path>) -> Result<BuildReport, BuildError> {
        let out_dir = out_dir.as_ref();
        let started_at = Instant::now();
        info!(
            "event=site_build module=service status=start out_dir={}",
            out_dir.display()
        );

        let result = self
            .render()
            .and_then(|site| write_site(&site, out_dir).map(|artifacts| (site, artifacts)));
        match result {
            Ok((site, artifacts)) => {
                info!(
                    "event=site_build module=service status=ok artifacts={} duration_ms={}",
                    artifacts.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(BuildReport {
                    out_dir: out_dir.to_path_buf(),
                    artifacts,
                    link_report: site.link_report,
                })
            }
            Err(err) => {
                error!(
                    "event=site_build module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn write_site(site: &RenderedSite, out_dir: &Path) -> Result<Vec<String>, BuildError> {
    let mut artifacts = Vec::new();
    for page in &site.pages {
        write_artifact(out_dir, page.file_name, page.to_html().as_bytes())?;
        artifacts.push(page.file_name.to_string());
    }

    write_artifact(out_dir, STYLESHEET_PATH, site.stylesheet.as_bytes())?;
    artifacts.push(STYLESHEET_PATH.to_string());

    for asset in &site.assets {
        write_artifact(out_dir, asset.relative_path.as_str(), &asset.bytes)?;
        artifacts.push(asset.relative_path.clone());
    }

    if site.config.deployment.targets_github_pages() {
        write_artifact(out_dir, NOJEKYLL_FILE_NAME, &[])?;
        artifacts.push(NOJEKYLL_FILE_NAME.to_string());
    }
    Ok(artifacts)
}

fn write_artifact(out_dir: &Path, relative_path: &str, bytes: &[u8]) -> Result<(), BuildError> {
    let path = out_dir.join(relative_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| BuildError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&path, bytes).map_err(|source| BuildError::Io {
        path: path.clone(),
        source,
    })?;
    info!(
        "event=artifact_write module=service status=ok path={} bytes={}",
        relative_path,
        bytes.len()
    );
    Ok(())
}
