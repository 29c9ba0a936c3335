use folio_core::{render_timeline, WorkExperienceEntry};

fn entry(company: &str, duration: &str) -> WorkExperienceEntry {
    WorkExperienceEntry::new(company, "Engineer", "Cambridge, MA", duration).unwrap()
}

#[test]
fn timeline_keeps_input_order_even_when_durations_disagree() {
    // Authored order wins over anything derivable from `duration`.
    let entries = vec![
        entry("Older Co", "2010 - 2012"),
        entry("Newer Co", "2020 - Present"),
    ];

    let fragment = render_timeline(&entries);
    let companies: Vec<String> = fragment
        .find_by_class("timeline__company")
        .into_iter()
        .map(|element| element.text_content())
        .collect();
    assert_eq!(companies, vec!["Older Co", "Newer Co"]);
    assert_eq!(fragment.find_by_class("timeline__marker").len(), 2);
}

#[test]
fn entry_renders_bullets_and_badges_in_order() {
    let mut solo = entry("Solo.io", "Sept 2019 - Present");
    solo.achievements = vec![
        "Delivered **Gloo Mesh Core** in August 2023".to_string(),
        "Managed a team".to_string(),
    ];
    solo.tech_stack = vec!["Go".to_string(), "Kubernetes".to_string(), "Istio".to_string()];

    let fragment = render_timeline(&[solo]);
    let html = fragment.to_html();
    assert!(html.contains(concat!(
        "<li>Delivered <strong>Gloo Mesh Core</strong> in August 2023</li>",
        "<li>Managed a team</li>"
    )));

    let badges: Vec<String> = fragment
        .find_by_class("badge")
        .into_iter()
        .map(|element| element.text_content())
        .collect();
    assert_eq!(badges, vec!["Go", "Kubernetes", "Istio"]);
    assert_eq!(
        fragment.find_by_class("timeline__duration")[0].text_content(),
        "Sept 2019 - Present"
    );
}

#[test]
fn optional_parts_are_omitted_when_blank() {
    let bare = WorkExperienceEntry::new("Acme", "Intern", "", "").unwrap();
    let fragment = render_timeline(&[bare]);
    assert!(fragment.find_by_class("timeline__location").is_empty());
    assert!(fragment.find_by_class("timeline__duration").is_empty());
    assert!(fragment.find_by_class("timeline__achievements").is_empty());
    assert!(fragment.find_by_class("timeline__stack").is_empty());
}

#[test]
fn empty_timeline_renders_nothing() {
    assert!(render_timeline(&[]).is_empty());
}
