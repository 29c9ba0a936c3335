use folio_core::{
    BrokenLinkReason, BuildError, ContentRepository, FsContentRepository,
    InMemoryContentRepository, RepoError, SiteConfig, SiteContent, SiteService, StaticAsset,
};
use std::path::PathBuf;

const CONFIG: &str = r##"
title = "Jane Doe"
url = "https://jane.github.io"
base_url = "/folio/"

[navbar]
items = [
    { label = "Projects", href = "/folio/#projects" },
    { label = "GitHub", href = "https://github.com/jane", position = "right" },
]

[footer]
copyright = "© Jane Doe"
"##;

const CONTENT: &str = r##"
[page]
title = "Jane Doe | Engineer"
description = "Portfolio"

[profile]
name = "Jane Doe"
headline = "Engineer"
summary = "Builds [things](#projects)."

[[experience.entries]]
company = "Acme"
role = "Engineer"
duration = "2020 - Present"
achievements = ["Shipped **everything**"]
tech_stack = ["Rust"]

[[sections]]
id = "projects"
title = "Featured Projects"
columns = "auto"

[[sections.records]]
title = "Folio"
link = "https://github.com/jane/folio"
secondary_link = "https://github.com/jane/folio-src"
category = "Open Source"
tags = ["Rust"]

[[sections.records]]
title = "Notes"
link = "https://jane.github.io/notes/"
category = "Coursework"
"##;

fn repo_with(config: &str, content: &str) -> InMemoryContentRepository {
    InMemoryContentRepository::new(
        SiteConfig::from_toml_str(config).unwrap(),
        SiteContent::from_toml_str(content).unwrap(),
    )
}

fn sample_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("site")
}

#[test]
fn render_produces_home_and_not_found_pages_in_layout_order() {
    let site = SiteService::new(repo_with(CONFIG, CONTENT)).render().unwrap();
    assert!(site.link_report.is_clean());

    let home = site.page("index.html").unwrap();
    let html = home.to_html();
    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
    let hero = html.find("hero__title").unwrap();
    let experience = html.find("id=\"experience\"").unwrap();
    let projects = html.find("id=\"projects\"").unwrap();
    let footer = html.find("footer__copyright").unwrap();
    assert!(hero < experience && experience < projects && projects < footer);

    assert_eq!(home.document.find_by_class("grid--auto").len(), 1);
    assert_eq!(home.document.find_by_class("card").len(), 2);
    assert!(site.page("404.html").is_some());
    assert!(site.stylesheet.contains("--folio-primary"));
}

#[test]
fn empty_sections_and_experience_are_omitted() {
    let content = r#"
[page]
title = "Jane"

[profile]
name = "Jane"

[[sections]]
id = "projects"
title = "Featured Projects"
"#;
    let config = CONFIG.replace("/folio/#projects", "/folio/");
    let site = SiteService::new(repo_with(config.as_str(), content))
        .render()
        .unwrap();
    let home = site.page("index.html").unwrap();
    assert!(home.document.find_by_class("section__title").is_empty());
    assert!(!home.document.ids().contains(&"experience"));
}

#[test]
fn broken_internal_link_fails_build_by_default() {
    let config = CONFIG.replace("/folio/#projects", "/folio/#talks");
    let err = SiteService::new(repo_with(config.as_str(), CONTENT))
        .check()
        .unwrap_err();
    match err {
        BuildError::LinkCheck(folio_core::LinkCheckError::BrokenLinks(links)) => {
            // The navbar is shared, so both pages report the link.
            assert_eq!(links.len(), 2);
            assert!(links
                .iter()
                .all(|link| link.reason == BrokenLinkReason::MissingAnchor("talks".to_string())));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn local_origin_passes_validation_and_link_check() {
    let config = CONFIG.replace("https://jane.github.io", "http://localhost:4000");
    let report = SiteService::new(repo_with(config.as_str(), CONTENT))
        .check()
        .unwrap();
    assert!(report.is_clean(), "unexpected broken links: {report:?}");

    let site = SiteService::new(repo_with(config.as_str(), CONTENT))
        .render()
        .unwrap();
    assert!(site
        .page("index.html")
        .unwrap()
        .document
        .hrefs()
        .contains(&"http://localhost:4000/folio/"));
}

#[test]
fn warn_policy_reports_but_does_not_fail() {
    let config = format!(
        "on_broken_links = \"warn\"\n{}",
        CONFIG.replace("/folio/#projects", "/elsewhere/")
    );
    let report = SiteService::new(repo_with(config.as_str(), CONTENT))
        .check()
        .unwrap();
    assert_eq!(report.broken.len(), 2);
    assert!(report
        .broken
        .iter()
        .all(|link| link.reason == BrokenLinkReason::OutsideBaseUrl));
}

#[test]
fn build_writes_artifacts_and_is_byte_stable() {
    let repo = repo_with(CONFIG, CONTENT)
        .with_asset(StaticAsset::new("img/avatar.png", vec![1, 2, 3]).unwrap());
    let service = SiteService::new(repo);

    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let report = service.build(first_dir.path()).unwrap();
    service.build(second_dir.path()).unwrap();

    assert_eq!(
        report.artifacts,
        vec![
            "index.html",
            "404.html",
            "css/site.css",
            "img/avatar.png",
            ".nojekyll"
        ]
    );
    for artifact in &report.artifacts {
        let first = std::fs::read(first_dir.path().join(artifact)).unwrap();
        let second = std::fs::read(second_dir.path().join(artifact)).unwrap();
        assert_eq!(first, second, "{artifact} differs between builds");
    }
    assert_eq!(
        std::fs::read(first_dir.path().join("img/avatar.png")).unwrap(),
        vec![1, 2, 3]
    );
}

#[test]
fn static_asset_cannot_shadow_generated_page() {
    let repo = repo_with(CONFIG, CONTENT)
        .with_asset(StaticAsset::new("index.html", b"<p>hand written</p>".to_vec()).unwrap());
    let out_dir = tempfile::tempdir().unwrap();

    let err = SiteService::new(repo).build(out_dir.path()).unwrap_err();
    assert!(matches!(err, BuildError::ArtifactConflict(path) if path == "index.html"));
    assert!(!out_dir.path().join("index.html").exists());
}

#[test]
fn fs_repository_reports_missing_files() {
    let empty = tempfile::tempdir().unwrap();
    let err = FsContentRepository::new(empty.path())
        .load_config()
        .unwrap_err();
    assert!(matches!(err, RepoError::Io { .. }));
    assert!(FsContentRepository::new(empty.path())
        .static_assets()
        .unwrap()
        .is_empty());
}

#[test]
fn sample_site_builds_cleanly() {
    let service = SiteService::new(FsContentRepository::new(sample_site_dir()));
    let out_dir = tempfile::tempdir().unwrap();
    let report = service.build(out_dir.path()).unwrap();

    assert!(report.link_report.is_clean());
    assert!(report.artifacts.iter().any(|path| path == "img/favicon.svg"));

    let html = std::fs::read_to_string(out_dir.path().join("index.html")).unwrap();
    let coursework = html.find("data-category=\"MIT Coursework\"").unwrap();
    let taekwondo = html.find("data-category=\"MIT Sport Taekwondo\"").unwrap();
    assert!(coursework < taekwondo);
    let solo = html.find(">Solo.io<").unwrap();
    let akamai = html.find(">Akamai Technologies<").unwrap();
    assert!(solo < akamai);
}
