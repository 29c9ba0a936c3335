use folio_core::{
    ColumnHint, ContentRecord, ContentRegistry, ProjectSection, RecordValidationError,
    WorkExperienceEntry,
};

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let mut record = ContentRecord::new(
        "ECTC Tournament Manager",
        "https://github.com/example/ectc",
        "MIT Sport Taekwondo",
    )
    .unwrap();
    record.icon = "🥋".to_string();
    record.tags = vec!["Docker".to_string(), "Full-Stack".to_string()];
    record.secondary_link = Some("https://github.com/example/ectc-src".to_string());

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["title"], "ECTC Tournament Manager");
    assert_eq!(json["primary_link"], "https://github.com/example/ectc");
    assert_eq!(json["secondary_link"], "https://github.com/example/ectc-src");
    assert_eq!(json["category"], "MIT Sport Taekwondo");
    assert_eq!(json["tags"], serde_json::json!(["Docker", "Full-Stack"]));

    let decoded: ContentRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn record_accepts_link_alias_and_defaults_optional_fields() {
    let value = serde_json::json!({
        "title": "MIT Mahjong 2048",
        "link": "https://example.github.io/2048/",
        "category": "MIT Coursework"
    });
    let record: ContentRecord = serde_json::from_value(value).unwrap();
    assert_eq!(record.primary_link, "https://example.github.io/2048/");
    assert!(record.tags.is_empty());
    assert!(!record.has_secondary_link());
}

#[test]
fn deserialize_rejects_duplicate_tags() {
    let value = serde_json::json!({
        "title": "Mafia",
        "primary_link": "https://github.com/example/mafia",
        "category": "MIT Coursework",
        "tags": ["Python", "Python"]
    });
    let err = serde_json::from_value::<ContentRecord>(value).unwrap_err();
    assert!(
        err.to_string().contains("duplicate tag `Python`"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_requires_primary_link() {
    let value = serde_json::json!({ "title": "No link", "category": "Misc" });
    assert!(serde_json::from_value::<ContentRecord>(value).is_err());
}

#[test]
fn registry_preserves_authored_order() {
    let records: Vec<ContentRecord> = ["c", "a", "b"]
        .iter()
        .map(|title| ContentRecord::new(*title, "https://example.com", "Misc").unwrap())
        .collect();
    let registry = ContentRegistry::new("projects", records).unwrap();

    let titles: Vec<&str> = registry.iter().map(|record| record.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.scope(), "projects");
}

#[test]
fn project_section_scopes_registry_by_id() {
    let record = ContentRecord::new("x", "https://example.com", "Misc").unwrap();
    let section =
        ProjectSection::new("oss", "Open Source", ColumnHint::Auto, vec![record]).unwrap();
    assert_eq!(section.registry.scope(), "oss");
    assert_eq!(section.columns, ColumnHint::Auto);
}

#[test]
fn experience_deserialize_runs_validation() {
    let value = serde_json::json!({
        "company": "",
        "role": "Engineer"
    });
    let err = serde_json::from_value::<WorkExperienceEntry>(value).unwrap_err();
    assert!(err.to_string().contains("company cannot be empty"));
}

#[test]
fn validation_errors_have_stable_messages() {
    assert_eq!(
        RecordValidationError::DuplicateTag("Go".to_string()).to_string(),
        "duplicate tag `Go` in record"
    );
}
