use indoc::indoc;

use crate::{
    EditorMap, ItemCategory, PropertyTypeResolver, SemanticType, Snapshot, parse_snapshot,
};

const SAMPLE_JSON: &str = indoc! {r#"
    {
        "types": [
            {
                "id": 1,
                "alias": "page",
                "category": "content",
                "properties": [
                    { "alias": "title", "editor": "textbox" },
                    { "alias": "bodyText", "editor": "richtext" },
                    { "alias": "rating", "editor": "starRating" },
                    { "alias": "settings", "value_type": { "structured": "PageSettings" } }
                ]
            },
            {
                "id": 2,
                "alias": "article",
                "category": "content",
                "parent_id": 1,
                "compositions": [1, 3]
            },
            {
                "id": 3,
                "alias": "seo",
                "category": "content",
                "parent_id": -1,
                "properties": [{ "alias": "metaTitle" }]
            },
            {
                "id": 10,
                "alias": "page",
                "category": "media",
                "properties": [{ "alias": "title", "editor": "integer" }]
            }
        ],
        "editors": {
            "starRating": "decimal"
        }
    }
"#};

#[test]
fn parse_raw_snapshot() {
    let raw = parse_snapshot(SAMPLE_JSON).unwrap();
    assert_eq!(raw.types.len(), 4);

    let article = &raw.types[1];
    assert_eq!(article.alias, "article");
    assert_eq!(article.parent(), Some(1));
    assert_eq!(article.compositions, vec![1, 3]);
    assert!(article.properties.is_empty());

    let seo = &raw.types[2];
    assert_eq!(seo.parent(), None);
    assert_eq!(raw.editors.len(), 1);
}

#[test]
fn unknown_category_fails_to_parse() {
    let json = r#"{"types": [{"id": 1, "alias": "x", "category": "member"}]}"#;
    assert!(parse_snapshot(json).is_err());
}

#[test]
fn types_filter_by_category() {
    let snapshot = Snapshot::parse(SAMPLE_JSON).unwrap();

    let content: Vec<_> = snapshot
        .types(ItemCategory::Content)
        .map(|t| t.id)
        .collect();
    let media: Vec<_> = snapshot.types(ItemCategory::Media).map(|t| t.id).collect();

    assert_eq!(content, vec![1, 2, 3]);
    assert_eq!(media, vec![10]);
    assert_eq!(snapshot.len(), 4);
}

#[test]
fn lookup_is_per_category() {
    let snapshot = Snapshot::parse(SAMPLE_JSON).unwrap();

    assert_eq!(snapshot.get(ItemCategory::Content, "page").unwrap().id, 1);
    assert_eq!(snapshot.get(ItemCategory::Media, "page").unwrap().id, 10);
    assert!(snapshot.get(ItemCategory::Media, "article").is_none());
    assert_eq!(snapshot.by_id(3).unwrap().alias, "seo");
}

#[test]
fn resolve_from_editor_table() {
    let snapshot = Snapshot::parse(SAMPLE_JSON).unwrap();
    let resolve = |cat, ty, prop| snapshot.resolve_property(cat, ty, prop);

    assert_eq!(
        resolve(ItemCategory::Content, "page", "title"),
        Some(SemanticType::Text)
    );
    assert_eq!(
        resolve(ItemCategory::Content, "page", "bodyText"),
        Some(SemanticType::Html)
    );
    assert_eq!(
        resolve(ItemCategory::Media, "page", "title"),
        Some(SemanticType::Integer)
    );
}

#[test]
fn snapshot_editors_extend_builtins() {
    let snapshot = Snapshot::parse(SAMPLE_JSON).unwrap();

    assert_eq!(
        snapshot.resolve_property(ItemCategory::Content, "page", "rating"),
        Some(SemanticType::Decimal)
    );
    assert_eq!(
        snapshot.editors().resolve("textbox"),
        Some(&SemanticType::Text)
    );
}

#[test]
fn explicit_value_type_wins() {
    let snapshot = Snapshot::parse(SAMPLE_JSON).unwrap();

    assert_eq!(
        snapshot.resolve_property(ItemCategory::Content, "page", "settings"),
        Some(SemanticType::Structured("PageSettings".to_string()))
    );
}

#[test]
fn unresolvable_properties() {
    let snapshot = Snapshot::parse(SAMPLE_JSON).unwrap();

    // no editor and no explicit type
    assert_eq!(
        snapshot.resolve_property(ItemCategory::Content, "seo", "metaTitle"),
        None
    );
    // unknown property
    assert_eq!(
        snapshot.resolve_property(ItemCategory::Content, "page", "missing"),
        None
    );
    // wrong category
    assert_eq!(
        snapshot.resolve_property(ItemCategory::Media, "article", "title"),
        None
    );
}

#[test]
fn invocation_overrides_win() {
    let mut overrides = EditorMap::empty();
    overrides.insert("richtext", SemanticType::Text);

    let snapshot = Snapshot::parse(SAMPLE_JSON).unwrap().with_editors(overrides);

    assert_eq!(
        snapshot.resolve_property(ItemCategory::Content, "page", "bodyText"),
        Some(SemanticType::Text)
    );
}

#[test]
fn closures_are_resolvers() {
    let resolver = |_: ItemCategory, _: &str, prop: &str| {
        (prop == "title").then_some(SemanticType::Text)
    };

    assert_eq!(
        resolver.resolve_property(ItemCategory::Content, "any", "title"),
        Some(SemanticType::Text)
    );
    assert_eq!(
        resolver.resolve_property(ItemCategory::Content, "any", "other"),
        None
    );
}

#[test]
fn category_names() {
    assert_eq!(ItemCategory::from_name("Media"), Some(ItemCategory::Media));
    assert_eq!(ItemCategory::from_name("content"), Some(ItemCategory::Content));
    assert_eq!(ItemCategory::from_name("member"), None);
    assert_eq!(ItemCategory::Content.to_string(), "content");
}
