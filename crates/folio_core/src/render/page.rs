//! Page assembly: document chrome plus hero, timeline and project grids.
//!
//! # Responsibility
//! - Combine configuration and content into complete HTML documents.
//! - Keep every renderer input explicit; nothing is read from global state.
//!
//! # Invariants
//! - Page order is hero, experience, then project sections in authoring order.
//! - Sections without records are omitted instead of rendering an empty heading.
//! - Output depends only on `(SiteConfig, SiteContent)`.

use super::grid::render_grid;
use super::inline::{link_element, render_inline};
use super::markup::{Element, Fragment, Node};
use super::timeline::render_timeline;
use crate::config::{NavbarItem, NavbarPosition, SiteConfig};
use crate::content::{ProjectSection, SiteContent};
use crate::model::profile::{LabeledLink, Profile};

/// Output file name of the home page.
pub const HOME_PAGE: &str = "index.html";
/// Output file name of the not-found page.
pub const NOT_FOUND_PAGE: &str = "404.html";
/// Stylesheet path relative to the output root.
pub const STYLESHEET_PATH: &str = "css/site.css";

/// One fully rendered HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Output path relative to the site root.
    pub file_name: &'static str,
    pub document: Fragment,
}

impl Page {
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.document.to_html())
    }
}

/// Renders the home page.
pub fn render_home_page(config: &SiteConfig, content: &SiteContent) -> Page {
    let mut main = Element::new("main").attr("id", "main");
    if let Some(experience) = render_experience(content) {
        main = main.child(experience);
    }
    for section in &content.sections {
        if let Some(rendered) = render_project_section(section) {
            main = main.child(rendered);
        }
    }

    let body = Element::new("body")
        .child(render_navbar(config))
        .child(render_hero(&content.profile))
        .child(main)
        .child(render_footer(config));

    Page {
        file_name: HOME_PAGE,
        document: document(
            config,
            content.page.title.as_str(),
            content.page.description.as_str(),
            body,
        ),
    }
}

/// Renders the not-found page sharing the site chrome.
pub fn render_not_found_page(config: &SiteConfig) -> Page {
    let main = Element::new("main").attr("id", "main").child(
        Element::new("div")
            .class("container not-found")
            .child(Element::new("h1").text("Page Not Found"))
            .child(Element::new("p").text("We could not find what you were looking for."))
            .child(
                Element::new("a")
                    .class("button button--primary")
                    .attr("href", config.base_url.as_str())
                    .text("Back to home"),
            ),
    );
    let body = Element::new("body")
        .child(render_navbar(config))
        .child(main)
        .child(render_footer(config));
    let title = format!("Page Not Found | {}", config.title);

    Page {
        file_name: NOT_FOUND_PAGE,
        document: document(config, title.as_str(), "", body),
    }
}

fn document(config: &SiteConfig, title: &str, description: &str, body: Element) -> Fragment {
    let mut head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text(title));
    if !description.trim().is_empty() {
        head = head.child(
            Element::new("meta")
                .attr("name", "description")
                .attr("content", description),
        );
    }
    if config.color_mode.respect_prefers_color_scheme {
        head = head.child(
            Element::new("meta")
                .attr("name", "color-scheme")
                .attr("content", "light dark"),
        );
    }
    if let Some(favicon) = &config.favicon {
        head = head.child(
            Element::new("link")
                .attr("rel", "icon")
                .attr("href", config.page_path(favicon)),
        );
    }
    head = head
        .child(
            Element::new("link")
                .attr("rel", "canonical")
                .attr("href", config.canonical_url()),
        )
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", config.page_path(STYLESHEET_PATH)),
        );

    Fragment::from(vec![Node::from(
        Element::new("html")
            .attr("lang", config.i18n.default_locale.as_str())
            .child(head)
            .child(body),
    )])
}

fn render_navbar(config: &SiteConfig) -> Element {
    let brand_label = if config.navbar.title.trim().is_empty() {
        config.title.as_str()
    } else {
        config.navbar.title.as_str()
    };
    let items_at = |position: NavbarPosition, class: &'static str| {
        Element::new("div").class(class).children(
            config
                .navbar
                .items
                .iter()
                .filter(|item| item.position == position)
                .map(navbar_link),
        )
    };

    Element::new("nav")
        .class("navbar")
        .child(
            Element::new("a")
                .class("navbar__brand")
                .attr("href", config.base_url.as_str())
                .text(brand_label),
        )
        .child(items_at(NavbarPosition::Left, "navbar__items"))
        .child(items_at(
            NavbarPosition::Right,
            "navbar__items navbar__items--right",
        ))
}

fn navbar_link(item: &NavbarItem) -> Element {
    outbound_link(item.href.as_str(), "navbar__link").text(item.label.as_str())
}

fn render_hero(profile: &Profile) -> Element {
    let mut container = Element::new("div")
        .class("container")
        .child(
            Element::new("h1")
                .class("hero__title")
                .text(profile.name.as_str()),
        );
    if !profile.headline.trim().is_empty() {
        container = container.child(
            Element::new("p")
                .class("hero__subtitle")
                .text(profile.headline.as_str()),
        );
    }
    if !profile.tagline.trim().is_empty() {
        container = container.child(
            Element::new("p")
                .class("hero__tagline")
                .text(profile.tagline.as_str()),
        );
    }
    if !profile.summary.trim().is_empty() {
        container = container.child(
            Element::new("p")
                .class("hero__description")
                .children(render_inline(profile.summary.as_str())),
        );
    }
    if !profile.links.is_empty() {
        container = container.child(
            Element::new("div")
                .class("hero__buttons")
                .children(profile.links.iter().map(hero_button)),
        );
    }

    Element::new("header")
        .class("hero hero--primary")
        .attr("id", "top")
        .child(container)
}

fn hero_button(link: &LabeledLink) -> Element {
    outbound_link(link.href.as_str(), "button button--secondary button--lg")
        .text(link.label.as_str())
}

fn render_experience(content: &SiteContent) -> Option<Element> {
    let timeline = render_timeline(&content.experience.entries);
    if timeline.is_empty() {
        return None;
    }
    Some(
        Element::new("section")
            .class("experience")
            .attr("id", "experience")
            .child(
                Element::new("div")
                    .class("container")
                    .child(
                        Element::new("h2")
                            .class("section__title")
                            .text(content.experience.title.as_str()),
                    )
                    .children(timeline.into_nodes()),
            ),
    )
}

fn render_project_section(section: &ProjectSection) -> Option<Element> {
    let grid = render_grid(std::slice::from_ref(&section.registry), section.columns);
    if grid.is_empty() {
        return None;
    }

    let mut container = Element::new("div").class("container").child(
        Element::new("h2")
            .class("section__title")
            .text(section.title.as_str()),
    );
    if let Some(subtitle) = &section.subtitle {
        container = container.child(
            Element::new("p")
                .class("section__subtitle")
                .text(subtitle.as_str()),
        );
    }

    Some(
        Element::new("section")
            .class("projects")
            .attr("id", section.id.as_str())
            .child(container.children(grid.into_nodes())),
    )
}

fn render_footer(config: &SiteConfig) -> Element {
    let footer = &config.footer;
    let columns = footer.links.iter().map(|group| {
        Element::new("div")
            .class("footer__col")
            .child(
                Element::new("div")
                    .class("footer__title")
                    .text(group.title.as_str()),
            )
            .child(Element::new("ul").class("footer__items").children(
                group.items.iter().map(|item| {
                    Element::new("li").child(
                        outbound_link(item.href.as_str(), "footer__link").text(item.label.as_str()),
                    )
                }),
            ))
    });

    let mut element = Element::new("footer")
        .class(format!("footer footer--{}", footer.style.as_str()))
        .child(Element::new("div").class("footer__links").children(columns));
    if !footer.copyright.trim().is_empty() {
        element = element.child(
            Element::new("div")
                .class("footer__copyright")
                .text(footer.copyright.as_str()),
        );
    }
    element
}

fn outbound_link(href: &str, class: &str) -> Element {
    link_element(href).class(class)
}
