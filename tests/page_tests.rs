//! Page-level round trips through the JSON boundary.
mod common;

use common::ids;
use mason::{BlockId, BlockType, Page, PageError, PageKind, PageStatus, find_by_id};
use serde_json::json;

fn landing_page() -> serde_json::Value {
    json!({
        "id": 42,
        "slug": "landing",
        "title": "Landing",
        "metaOgTitle": "Landing",
        "metaOgDescription": "",
        "metaOgImage": null,
        "metaKeywords": "",
        "pageType": "CASE_STUDY",
        "status": "PUBLISHED",
        "parentPageId": null,
        "publishedAt": 1700000000000i64,
        "contentBlocks": [
            {
                "id": 2,
                "selectorId": "headline",
                "blockType": "TEXT",
                "positionOrder": 1,
                "contentData": { "text": "Hello", "language": "en" },
                "styleData": {
                    "typography": { "color": "black" },
                    "responsive": { "mobile": { "typography": { "color": "red" } } }
                },
                "parentBlockId": 1
            },
            {
                "id": 1,
                "selectorId": "shell",
                "blockType": "CONTAINER",
                "positionOrder": 0,
                "contentData": { "containerType": "section" },
                "settingsData": {
                    "content": { "editor": { "dropZone": { "allowedTypes": ["TEXT"] } } }
                }
            },
            {
                "id": 3,
                "selectorId": "orphan",
                "blockType": "TEXT",
                "positionOrder": 5,
                "contentData": { "text": "dangling", "language": "en" },
                "parentBlockId": 999
            }
        ]
    })
}

#[test]
fn parse_organize_validate_resolve() {
    let mut page = Page::from_json(&landing_page().to_string()).expect("page parses");
    assert_eq!(page.kind, PageKind::CaseStudy);
    assert_eq!(page.status, PageStatus::Published);

    page.organize();
    // Container first by position order, dangling block recovered as root.
    assert_eq!(ids(&page.content_blocks), vec![1, 3]);
    assert_eq!(ids(&page.content_blocks[0].children), vec![2]);

    assert!(page.validate().is_valid());
    assert!(page.ensure_valid().is_ok());

    let styles = page.resolved_styles(320);
    assert_eq!(styles[&BlockId::from(2)]["color"], "red");
    let styles = page.resolved_styles(1440);
    assert_eq!(styles[&BlockId::from(2)]["color"], "black");
}

#[test]
fn organized_page_round_trips_through_json() {
    let mut page = Page::from_json(&landing_page().to_string()).expect("page parses");
    page.organize();

    let serialized = page.to_json().expect("page serializes");
    let mut reparsed = Page::from_json(&serialized).expect("round trip parses");
    reparsed.organize();

    assert_eq!(page, reparsed);
    let container = find_by_id(&reparsed.content_blocks, BlockId::from(1)).expect("container");
    assert_eq!(container.kind(), BlockType::Container);
}

#[test]
fn ensure_valid_reports_constraint_violations() {
    let mut value = landing_page();
    // Point the dangling block into the TEXT-only container as an IMAGE.
    value["contentBlocks"][2] = json!({
        "id": 3,
        "selectorId": "late-image",
        "blockType": "IMAGE",
        "positionOrder": 2,
        "contentData": { "imageUrl": "x.png", "mediaFileId": 9 },
        "parentBlockId": 1
    });

    let mut page = Page::from_json(&value.to_string()).expect("page parses");
    page.organize();

    let report = page.validate();
    assert_eq!(
        report.errors,
        vec!["Container 1 contains disallowed child type: IMAGE"]
    );

    let err = page.ensure_valid().expect_err("validation should gate");
    assert!(matches!(err, PageError::Validation(_)));
}

#[test]
fn malformed_page_json_is_a_json_error() {
    let err = Page::from_json("{ not json").expect_err("parse fails");
    assert!(matches!(err, PageError::Json(_)));
}
