use folio_core::{
    group_by_category, render_grid, ColumnHint, ContentRecord, ContentRegistry, Element, Fragment,
};

fn record(title: &str, category: &str) -> ContentRecord {
    ContentRecord::new(title, format!("https://example.com/{title}"), category).unwrap()
}

fn registry(records: Vec<ContentRecord>) -> ContentRegistry {
    ContentRegistry::new("projects", records).unwrap()
}

fn section_categories(fragment: &Fragment) -> Vec<String> {
    fragment
        .find_by_class("category-section")
        .into_iter()
        .map(|section| section.get_attr("data-category").unwrap().to_string())
        .collect()
}

fn card_titles(section: &Element) -> Vec<String> {
    let mut titles = Vec::new();
    section.walk(&mut |element| {
        if element.has_class("card__title") {
            titles.push(element.text_content());
        }
    });
    titles
}

#[test]
fn categories_group_in_first_seen_order_with_stable_records() {
    let registries = vec![registry(vec![
        record("a1", "A"),
        record("b1", "B"),
        record("a2", "A"),
        record("c1", "C"),
    ])];

    let fragment = render_grid(&registries, ColumnHint::default());

    assert_eq!(section_categories(&fragment), vec!["A", "B", "C"]);
    let sections = fragment.find_by_class("category-section");
    assert_eq!(card_titles(sections[0]), vec!["a1", "a2"]);
    assert_eq!(card_titles(sections[1]), vec!["b1"]);
    assert_eq!(card_titles(sections[2]), vec!["c1"]);
}

#[test]
fn grouping_spans_registries_without_sorting() {
    let registries = vec![
        registry(vec![record("z", "Zeta"), record("m", "Mu")]),
        registry(vec![record("a", "Alpha"), record("z2", "Zeta")]),
    ];

    let grouped = group_by_category(&registries);
    let categories: Vec<&str> = grouped.iter().map(|section| section.category).collect();
    assert_eq!(categories, vec!["Zeta", "Mu", "Alpha"]);
    let zeta: Vec<&str> = grouped[0]
        .records
        .iter()
        .map(|record| record.title.as_str())
        .collect();
    assert_eq!(zeta, vec!["z", "z2"]);
}

#[test]
fn repeated_titles_are_not_deduplicated() {
    let registries = vec![registry(vec![record("same", "A"), record("same", "A")])];
    let fragment = render_grid(&registries, ColumnHint::Auto);
    assert_eq!(fragment.find_by_class("card").len(), 2);
}

#[test]
fn empty_input_renders_nothing() {
    let none: Vec<ContentRegistry> = Vec::new();
    let fragment = render_grid(&none, ColumnHint::Auto);
    assert!(fragment.is_empty());
    assert_eq!(fragment.to_html(), "");

    let empty = vec![ContentRegistry::empty("projects")];
    let fragment = render_grid(&empty, ColumnHint::Auto);
    assert!(fragment.is_empty());
    assert!(fragment.find_by_class("category-section__title").is_empty());
}

#[test]
fn secondary_link_adds_a_distinct_second_action() {
    let primary_only = record("solo", "A");
    let mut with_source = record("pair", "A");
    with_source.secondary_link = Some("https://github.com/example/pair".to_string());

    let fragment = render_grid(
        &[registry(vec![primary_only, with_source])],
        ColumnHint::default(),
    );
    let actions = fragment.find_by_class("card__actions");
    assert_eq!(actions.len(), 2);

    let solo: Vec<&Element> = actions[0].child_elements().collect();
    assert_eq!(solo.len(), 1);
    assert!(solo[0].has_class("button--primary"));
    assert_eq!(solo[0].get_attr("href"), Some("https://example.com/solo"));

    let pair: Vec<&Element> = actions[1].child_elements().collect();
    assert_eq!(pair.len(), 2);
    assert!(pair[0].has_class("button--primary"));
    assert!(pair[1].has_class("button--secondary"));
    assert!(pair[1].has_class("card__action--secondary"));
    assert!(!pair[1].has_class("button--primary"));
    assert_eq!(
        pair[1].get_attr("href"),
        Some("https://github.com/example/pair")
    );
}

#[test]
fn shared_tags_render_once_per_record_in_authored_order() {
    let mut first = record("first", "A");
    first.tags = vec!["Go".to_string(), "Docker".to_string()];
    let mut second = record("second", "B");
    second.tags = vec!["Docker".to_string()];

    let fragment = render_grid(&[registry(vec![first, second])], ColumnHint::default());
    let tags: Vec<String> = fragment
        .find_by_class("tag")
        .into_iter()
        .map(Element::text_content)
        .collect();
    assert_eq!(tags, vec!["Go", "Docker", "Docker"]);
}

#[test]
fn card_has_fixed_shape() {
    let mut project = record("2048", "Games");
    project.icon = "🀄".to_string();
    project.description = "Built with **vanilla** JavaScript.".to_string();

    let fragment = render_grid(&[registry(vec![project])], ColumnHint::default());
    let card = fragment.find_by_class("card")[0];
    let parts: Vec<&Element> = card.child_elements().collect();
    let classes: Vec<&str> = parts
        .iter()
        .map(|part| part.get_attr("class").unwrap())
        .collect();
    assert_eq!(
        classes,
        vec![
            "card__header",
            "card__title",
            "card__description",
            "card__tags",
            "card__actions"
        ]
    );
    assert_eq!(fragment.find_by_class("card__icon")[0].text_content(), "🀄");
    assert_eq!(fragment.find_by_class("card__category")[0].text_content(), "Games");
    assert!(fragment
        .to_html()
        .contains("Built with <strong>vanilla</strong> JavaScript."));
}

#[test]
fn column_hint_controls_grid_class_regardless_of_record_count() {
    let one = vec![registry(vec![record("only", "A")])];
    let many = vec![registry((0..9).map(|i| record(&format!("r{i}"), "A")).collect())];
    let three = ColumnHint::fixed(3).unwrap();

    for registries in [&one, &many] {
        let fragment = render_grid(registries, three);
        assert_eq!(fragment.find_by_class("grid--cols-3").len(), 1);
        assert!(fragment.find_by_class("grid--auto").is_empty());
    }
    let auto = render_grid(&many, ColumnHint::Auto);
    assert_eq!(auto.find_by_class("grid--auto").len(), 1);
}

#[test]
fn rendering_is_idempotent() {
    let mut with_source = record("pair", "B");
    with_source.secondary_link = Some("https://github.com/example/pair".to_string());
    let registries = vec![registry(vec![record("a", "A"), with_source, record("c", "A")])];

    let first = render_grid(&registries, ColumnHint::Auto);
    let second = render_grid(&registries, ColumnHint::Auto);
    assert_eq!(first, second);
    assert_eq!(first.to_html(), second.to_html());
}
