//! Site source repository contracts and filesystem implementation.
//!
//! # Responsibility
//! - Load `site.toml`, `content.toml` and the `static/` tree of a site.
//! - Keep file layout details out of the build service.
//!
//! # Invariants
//! - Loaded configuration and content are always validated.
//! - Static asset paths are output-relative, `/`-separated and never escape
//!   the output root.
//! - Static assets are returned in path order.

use crate::config::{ConfigError, SiteConfig};
use crate::content::{ContentError, SiteContent};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Component, Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Site configuration file name inside a site directory.
pub const CONFIG_FILE_NAME: &str = "site.toml";
/// Page content file name inside a site directory.
pub const CONTENT_FILE_NAME: &str = "content.toml";
/// Directory copied verbatim into the output root.
pub const STATIC_DIR_NAME: &str = "static";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Walk(walkdir::Error),
    Config(ConfigError),
    Content(ContentError),
    InvalidAssetPath(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read `{}`: {source}", path.display()),
            Self::Walk(err) => write!(f, "failed to scan static assets: {err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::Content(err) => write!(f, "{err}"),
            Self::InvalidAssetPath(path) => write!(f, "invalid static asset path `{path}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Walk(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Content(err) => Some(err),
            Self::InvalidAssetPath(_) => None,
        }
    }
}

impl From<ConfigError> for RepoError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ContentError> for RepoError {
    fn from(value: ContentError) -> Self {
        Self::Content(value)
    }
}

impl From<walkdir::Error> for RepoError {
    fn from(value: walkdir::Error) -> Self {
        Self::Walk(value)
    }
}

/// File copied unchanged into the build output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAsset {
    /// Output-relative path, e.g. `img/favicon.ico`.
    pub relative_path: String,
    pub bytes: Vec<u8>,
}

impl StaticAsset {
    /// Creates an asset after checking that its path stays inside the output.
    pub fn new(relative_path: impl Into<String>, bytes: Vec<u8>) -> RepoResult<Self> {
        let relative_path = relative_path.into();
        if !is_safe_relative_path(relative_path.as_str()) {
            return Err(RepoError::InvalidAssetPath(relative_path));
        }
        Ok(Self {
            relative_path,
            bytes,
        })
    }
}

/// Read-only source of one site.
pub trait ContentRepository {
    fn load_config(&self) -> RepoResult<SiteConfig>;
    fn load_content(&self) -> RepoResult<SiteContent>;
    fn static_assets(&self) -> RepoResult<Vec<StaticAsset>>;
}

/// Site directory containing `site.toml`, `content.toml` and optional `static/`.
#[derive(Debug, Clone)]
pub struct FsContentRepository {
    root: PathBuf,
}

impl FsContentRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_source(&self, file_name: &str) -> RepoResult<String> {
        let path = self.root.join(file_name);
        let started_at = Instant::now();
        match std::fs::read_to_string(&path) {
            Ok(source) => {
                info!(
                    "event=content_load module=repo status=ok file={} bytes={} duration_ms={}",
                    file_name,
                    source.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(source)
            }
            Err(err) => {
                error!(
                    "event=content_load module=repo status=error file={} error_code=read_failed error={}",
                    file_name, err
                );
                Err(RepoError::Io { path, source: err })
            }
        }
    }
}

impl ContentRepository for FsContentRepository {
    fn load_config(&self) -> RepoResult<SiteConfig> {
        let source = self.read_source(CONFIG_FILE_NAME)?;
        Ok(SiteConfig::from_toml_str(source.as_str())?)
    }

    fn load_content(&self) -> RepoResult<SiteContent> {
        let source = self.read_source(CONTENT_FILE_NAME)?;
        let content = SiteContent::from_toml_str(source.as_str())?;
        info!(
            "event=content_parse module=repo status=ok sections={} records={} entries={}",
            content.sections.len(),
            content
                .sections
                .iter()
                .map(|section| section.registry.len())
                .sum::<usize>(),
            content.experience.entries.len()
        );
        Ok(content)
    }

    fn static_assets(&self) -> RepoResult<Vec<StaticAsset>> {
        let static_root = self.root.join(STATIC_DIR_NAME);
        if !static_root.is_dir() {
            return Ok(Vec::new());
        }

        let mut assets = Vec::new();
        for entry in WalkDir::new(&static_root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&static_root)
                .map_err(|_| RepoError::InvalidAssetPath(entry.path().display().to_string()))?;
            let relative_path = relative
                .components()
                .map(|component| component.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let bytes = std::fs::read(entry.path()).map_err(|source| RepoError::Io {
                path: entry.path().to_path_buf(),
                source,
            })?;
            assets.push(StaticAsset::new(relative_path, bytes)?);
        }

        info!(
            "event=content_load module=repo status=ok file={} assets={}",
            STATIC_DIR_NAME,
            assets.len()
        );
        Ok(assets)
    }
}

/// In-memory site source; used by tests and embedders.
#[derive(Debug, Clone)]
pub struct InMemoryContentRepository {
    config: SiteConfig,
    content: SiteContent,
    assets: Vec<StaticAsset>,
}

impl InMemoryContentRepository {
    pub fn new(config: SiteConfig, content: SiteContent) -> Self {
        Self {
            config,
            content,
            assets: Vec::new(),
        }
    }

    pub fn with_asset(mut self, asset: StaticAsset) -> Self {
        self.assets.push(asset);
        self.assets
            .sort_by(|left, right| left.relative_path.cmp(&right.relative_path));
        self
    }
}

impl ContentRepository for InMemoryContentRepository {
    fn load_config(&self) -> RepoResult<SiteConfig> {
        self.config.validate()?;
        Ok(self.config.clone())
    }

    fn load_content(&self) -> RepoResult<SiteContent> {
        self.content.validate()?;
        Ok(self.content.clone())
    }

    fn static_assets(&self) -> RepoResult<Vec<StaticAsset>> {
        Ok(self.assets.clone())
    }
}

fn is_safe_relative_path(value: &str) -> bool {
    let path = Path::new(value);
    !value.trim().is_empty()
        && !value.contains('\\')
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::{RepoError, StaticAsset};

    #[test]
    fn asset_paths_cannot_escape_output_root() {
        for path in ["../secret", "/etc/passwd", "", "img/../../x", "a\\b"] {
            let err = StaticAsset::new(path, Vec::new()).unwrap_err();
            assert!(matches!(err, RepoError::InvalidAssetPath(_)), "{path}");
        }
        assert!(StaticAsset::new("img/favicon.ico", Vec::new()).is_ok());
    }
}
