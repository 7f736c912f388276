use indoc::indoc;
use modelgen_core::{
    ItemCategory, PropertyTypeResolver, RawContentType, SemanticType, Snapshot, parse_snapshot,
};

use crate::{Config, Error, SchemaSource, Session};

const SNAPSHOT: &str = indoc! {r#"
    {
        "types": [
            { "id": 1, "alias": "page", "category": "content",
              "properties": [{ "alias": "title", "editor": "textbox" }] },
            { "id": 2, "alias": "article", "category": "content", "parent_id": 1, "compositions": [1] },
            { "id": 10, "alias": "file", "category": "media",
              "properties": [{ "alias": "umbracoFile", "editor": "mediapicker" }] },
            { "id": 11, "alias": "image", "category": "media", "parent_id": 10 }
        ]
    }
"#};

fn session() -> Session<Snapshot> {
    Session::new(Snapshot::parse(SNAPSHOT).unwrap())
}

#[test]
fn content_only() {
    let graph = session().content_types().unwrap();

    let aliases: Vec<_> = graph.iter().map(|t| t.alias()).collect();
    assert_eq!(aliases, vec!["page", "article"]);
    assert!(graph.iter().all(|t| t.category() == ItemCategory::Content));
}

#[test]
fn media_only() {
    let graph = session().media_types().unwrap();

    let image = graph.by_alias("image").unwrap();
    assert_eq!(graph.base_type(image).unwrap().alias(), "file");
    let file = graph.by_alias("file").unwrap();
    assert_eq!(file.properties()[0].value_type, SemanticType::Media);
}

#[test]
fn content_then_media() {
    let graph = session().content_and_media_types().unwrap();

    let ids: Vec<_> = graph.iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec![1, 2, 10, 11]);
    let article = graph.by_alias("article").unwrap();
    assert_eq!(graph.base_type(article).unwrap().id(), 1);
    assert!(graph.mixin_types(article).next().is_none());
}

#[test]
fn types_by_optional_category() {
    let session = session();

    assert_eq!(session.types(Some(ItemCategory::Content)).unwrap().len(), 2);
    assert_eq!(session.types(Some(ItemCategory::Media)).unwrap().len(), 2);
    assert_eq!(session.types(None).unwrap().len(), 4);
}

#[test]
fn queries_rebuild_fresh_graphs() {
    let session = session();

    let first = session.content_types().unwrap();
    let second = session.content_types().unwrap();
    assert_eq!(first.by_id(1), second.by_id(1));
}

#[test]
fn categories_link_separately() {
    let json = r#"{"types": [
        {"id": 1, "alias": "page", "category": "content", "compositions": [10]},
        {"id": 10, "alias": "file", "category": "media"}
    ]}"#;
    let session = Session::new(Snapshot::parse(json).unwrap());

    assert!(session.media_types().is_ok());
    assert!(matches!(
        session.content_and_media_types(),
        Err(Error::DanglingReference { id: 1, target: 10, .. })
    ));
}

#[test]
fn cross_category_duplicate_id() {
    let json = r#"{"types": [
        {"id": 5, "alias": "page", "category": "content"},
        {"id": 5, "alias": "file", "category": "media"}
    ]}"#;
    let session = Session::new(Snapshot::parse(json).unwrap());

    assert!(session.content_types().is_ok());
    assert!(session.media_types().is_ok());
    assert!(matches!(
        session.content_and_media_types(),
        Err(Error::InconsistentBatch { id: 5, .. })
    ));
}

#[test]
fn config_is_passed_to_builds() {
    let json = r#"{"types": [
        {"id": 1, "alias": "a", "category": "content", "parent_id": 2},
        {"id": 2, "alias": "b", "category": "content", "parent_id": 1}
    ]}"#;
    let snapshot = Snapshot::parse(json).unwrap();

    let checked = Session::new(snapshot.clone());
    assert!(matches!(
        checked.content_types(),
        Err(Error::CyclicInheritance { .. })
    ));

    let unchecked = Session::with_config(snapshot, Config::default().detect_cycles(false));
    assert_eq!(unchecked.content_types().unwrap().len(), 2);
}

struct Booting {
    types: Vec<RawContentType>,
}

impl PropertyTypeResolver for Booting {
    fn resolve_property(&self, _: ItemCategory, _: &str, _: &str) -> Option<SemanticType> {
        Some(SemanticType::Text)
    }
}

impl SchemaSource for Booting {
    fn is_ready(&self) -> bool {
        false
    }

    fn raw_types(&self, category: ItemCategory) -> Vec<&RawContentType> {
        self.types.iter().filter(|t| t.category == category).collect()
    }
}

#[test]
fn not_ready_source() {
    let types = parse_snapshot(SNAPSHOT).unwrap().types;
    let session = Session::new(Booting { types });

    assert_eq!(session.content_types().unwrap_err(), Error::NotReady);
    assert_eq!(session.media_types().unwrap_err(), Error::NotReady);
    assert_eq!(session.content_and_media_types().unwrap_err(), Error::NotReady);
    assert_eq!(Error::NotReady.to_string(), "schema source is not ready");
}
