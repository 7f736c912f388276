use crate::{EditorMap, SemanticType};

#[test]
fn builtin_editors_resolve() {
    let map = EditorMap::default();

    assert_eq!(map.resolve("textbox"), Some(&SemanticType::Text));
    assert_eq!(map.resolve("richtext"), Some(&SemanticType::Html));
    assert_eq!(map.resolve("mediapicker"), Some(&SemanticType::Media));
    assert_eq!(map.resolve("nonexistent"), None);
}

#[test]
fn lookup_ignores_case() {
    let map = EditorMap::default();

    assert_eq!(map.resolve("TextBox"), Some(&SemanticType::Text));
    assert_eq!(map.resolve("DATEPICKER"), Some(&SemanticType::Date));
}

#[test]
fn empty_map_has_no_builtins() {
    let map = EditorMap::empty();

    assert!(map.is_empty());
    assert_eq!(map.resolve("textbox"), None);
}

#[test]
fn insert_replaces_existing() {
    let mut map = EditorMap::default();

    let prev = map.insert("TEXTBOX", SemanticType::Html);

    assert_eq!(prev, Some(SemanticType::Text));
    assert_eq!(map.resolve("textbox"), Some(&SemanticType::Html));
}

#[test]
fn merge_overrides_win() {
    let mut map = EditorMap::default();
    let before = map.len();

    let overrides = EditorMap::from_json(
        r#"{"Textbox": "html", "color.picker": {"structured": "Color"}}"#,
    )
    .unwrap();
    map.merge(overrides);

    assert_eq!(map.len(), before + 1);
    assert_eq!(map.resolve("textbox"), Some(&SemanticType::Html));
    assert_eq!(
        map.resolve("color.picker"),
        Some(&SemanticType::Structured("Color".to_string()))
    );
}

#[test]
fn from_json_rejects_unknown_type() {
    assert!(EditorMap::from_json(r#"{"textbox": "string"}"#).is_err());
}
