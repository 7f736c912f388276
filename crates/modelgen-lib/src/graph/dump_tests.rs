use indoc::indoc;
use modelgen_core::{Colors, ItemCategory, Snapshot};

use crate::Session;
use crate::graph::{GraphPrinter, TypeGraph};

const SNAPSHOT: &str = indoc! {r#"
    {
        "types": [
            {
                "id": 1,
                "alias": "page",
                "category": "content",
                "properties": [
                    { "alias": "title", "editor": "textbox" },
                    { "alias": "bodyText", "editor": "richtext" }
                ]
            },
            {
                "id": 3,
                "alias": "seo",
                "category": "content",
                "properties": [{ "alias": "metaDescription", "editor": "textarea" }]
            },
            { "id": 4, "alias": "navigation", "category": "content" },
            {
                "id": 2,
                "alias": "article",
                "category": "content",
                "parent_id": 1,
                "compositions": [1, 3, 4],
                "properties": [{ "alias": "publishDate", "editor": "datepicker" }]
            },
            {
                "id": 10,
                "alias": "image",
                "category": "media",
                "properties": [{ "alias": "umbracoWidth", "editor": "integer" }]
            }
        ]
    }
"#};

fn graph(category: Option<ItemCategory>) -> TypeGraph {
    let snapshot = Snapshot::parse(SNAPSHOT).unwrap();
    Session::new(snapshot).types(category).unwrap()
}

#[test]
fn dump_content() {
    let graph = graph(Some(ItemCategory::Content));

    insta::assert_snapshot!(GraphPrinter::new(&graph).dump(), @r"
    Page (page) #1
      Title (title): text
      BodyText (bodyText): html
    Seo (seo) #3 [mixin]
      MetaDescription (metaDescription): text
    Navigation (navigation) #4 [mixin]
    Article (article) #2 extends Page with Seo, Navigation
      PublishDate (publishDate): date
    ");
}

#[test]
fn dump_without_properties() {
    let graph = graph(None);

    insta::assert_snapshot!(GraphPrinter::new(&graph).properties(false).dump(), @r"
    Page (page) #1
    Seo (seo) #3 [mixin]
    Navigation (navigation) #4 [mixin]
    Article (article) #2 extends Page with Seo, Navigation
    Image (image) #10
    ");
}

#[test]
fn dump_with_colors() {
    let graph = graph(Some(ItemCategory::Media));

    let out = GraphPrinter::new(&graph).colors(Colors::ON).dump();

    assert_eq!(
        out,
        "\x1b[34mImage\x1b[0m \x1b[2m(image) #10\x1b[0m\n  \
         UmbracoWidth \x1b[2m(umbracoWidth)\x1b[0m: \x1b[32minteger\x1b[0m\n"
    );
}

#[test]
fn dump_empty_graph() {
    assert_eq!(GraphPrinter::new(&TypeGraph::new()).dump(), "");
}

#[test]
fn colors_follow_dump_roles() {
    let graph = graph(Some(ItemCategory::Content));

    let out = GraphPrinter::new(&graph)
        .colors(Colors::ON)
        .properties(false)
        .dump();

    assert!(out.contains(
        " extends \x1b[34mPage\x1b[0m with \x1b[34mSeo\x1b[0m, \x1b[34mNavigation\x1b[0m"
    ));
    assert!(out.contains("\x1b[2m(seo) #3\x1b[0m \x1b[33m[mixin]\x1b[0m"));
}
