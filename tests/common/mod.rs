//! Shared fixture builders for the integration suites.
use mason::ContentBlock;
use serde_json::json;

/// A text block built through the wire format, like API input.
pub fn text_block(id: i64, parent: Option<i64>, position: i32) -> ContentBlock {
    serde_json::from_value(json!({
        "id": id,
        "selectorId": format!("text-{id}"),
        "blockType": "TEXT",
        "positionOrder": position,
        "contentData": { "text": format!("text {id}"), "language": "en" },
        "parentBlockId": parent
    }))
    .expect("text block fixture")
}

pub fn image_block(id: i64, parent: Option<i64>, position: i32) -> ContentBlock {
    serde_json::from_value(json!({
        "id": id,
        "selectorId": format!("image-{id}"),
        "blockType": "IMAGE",
        "positionOrder": position,
        "contentData": {
            "imageUrl": format!("https://cdn.example.com/{id}.webp"),
            "mediaFileId": id
        },
        "parentBlockId": parent
    }))
    .expect("image block fixture")
}

/// A container block; `zone` configures the editor drop-zone settings.
pub fn container_block(
    id: i64,
    parent: Option<i64>,
    position: i32,
    zone: Option<serde_json::Value>,
) -> ContentBlock {
    let settings = match zone {
        Some(drop_zone) => json!({ "content": { "editor": { "dropZone": drop_zone } } }),
        None => json!({}),
    };
    serde_json::from_value(json!({
        "id": id,
        "selectorId": format!("container-{id}"),
        "blockType": "CONTAINER",
        "positionOrder": position,
        "contentData": {},
        "settingsData": settings,
        "parentBlockId": parent
    }))
    .expect("container block fixture")
}

/// Ids of a block slice in order.
pub fn ids(blocks: &[ContentBlock]) -> Vec<i64> {
    blocks.iter().map(|block| block.id.value()).collect()
}
