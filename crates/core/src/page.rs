//! The page record: the unit the authoring API reads and writes.
use crate::error::PageError;
use mason_blocks::{ContentBlock, ValidationReport, flatten_tree, organize_into_tree, validate_tree};
use mason_style::StyleMap;
use mason_types::{BlockId, PageId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageKind {
    CaseStudy,
    Product,
    News,
    Blog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    Published,
    Draft,
}

/// A page and its content blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub meta_og_title: String,
    #[serde(default)]
    pub meta_og_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_og_image: Option<String>,
    #[serde(default)]
    pub meta_keywords: String,
    #[serde(rename = "pageType")]
    pub kind: PageKind,
    pub status: PageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_page_id: Option<PageId>,
    /// Epoch milliseconds.
    #[serde(default)]
    pub published_at: i64,
    #[serde(default)]
    pub creator_user_id: i64,
    #[serde(default)]
    pub updater_user_id: i64,
    /// Epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
    /// Epoch milliseconds.
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub content_blocks: Vec<ContentBlock>,
}

impl Page {
    /// Parses a page from API JSON. Blocks arrive flat or partially nested;
    /// call [`organize`](Page::organize) before rendering.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuilds block nesting in place. This is the sole place parent/child
    /// links are established.
    pub fn organize(&mut self) {
        let blocks = std::mem::take(&mut self.content_blocks);
        self.content_blocks = organize_into_tree(blocks);
        log::debug!(
            "organized page {} ({}) into {} root block(s)",
            self.id,
            self.slug,
            self.content_blocks.len()
        );
    }

    /// Read-only structural check of the block tree.
    pub fn validate(&self) -> ValidationReport {
        validate_tree(&self.content_blocks)
    }

    /// Errors when the block tree violates structural invariants; useful
    /// for callers that gate publishing on a clean report.
    pub fn ensure_valid(&self) -> Result<(), PageError> {
        let report = self.validate();
        if report.is_valid() {
            Ok(())
        } else {
            log::warn!(
                "page {} failed validation with {} error(s)",
                self.id,
                report.errors.len()
            );
            Err(PageError::Validation(report.errors.join("; ")))
        }
    }

    /// Per-block inline style maps for the rendering boundary, resolved at
    /// the given viewport width, keyed by block id.
    pub fn resolved_styles(&self, width: u32) -> HashMap<BlockId, StyleMap> {
        flatten_tree(&self.content_blocks)
            .into_iter()
            .map(|block| (block.id, block.style.resolve_at(width)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_json() -> serde_json::Value {
        json!({
            "id": 1,
            "slug": "landing",
            "title": "Landing",
            "pageType": "PRODUCT",
            "status": "DRAFT",
            "contentBlocks": [
                {
                    "id": 2,
                    "selectorId": "body-text",
                    "blockType": "TEXT",
                    "positionOrder": 1,
                    "contentData": { "text": "hi", "language": "en" },
                    "parentBlockId": 1
                },
                {
                    "id": 1,
                    "selectorId": "wrapper",
                    "blockType": "CONTAINER",
                    "positionOrder": 0,
                    "contentData": {},
                    "styleData": { "layout": { "width": "100%" } }
                }
            ]
        })
    }

    #[test]
    fn test_parse_organize_validate() {
        let mut page = Page::from_json(&page_json().to_string()).unwrap();
        assert_eq!(page.kind, PageKind::Product);
        assert_eq!(page.status, PageStatus::Draft);

        page.organize();
        assert_eq!(page.content_blocks.len(), 1);
        assert_eq!(page.content_blocks[0].children.len(), 1);

        assert!(page.validate().is_valid());
        assert!(page.ensure_valid().is_ok());
    }

    #[test]
    fn test_resolved_styles_cover_every_block() {
        let mut page = Page::from_json(&page_json().to_string()).unwrap();
        page.organize();
        let styles = page.resolved_styles(1280);
        assert_eq!(styles.len(), 2);
        assert_eq!(styles[&BlockId::from(1)]["width"], "100%");
        assert!(styles[&BlockId::from(2)].is_empty());
    }

    #[test]
    fn test_ensure_valid_surfaces_report() {
        let mut value = page_json();
        // Give both blocks the same id.
        value["contentBlocks"][0]["id"] = json!(1);
        value["contentBlocks"][0]["parentBlockId"] = json!(null);
        let page = Page::from_json(&value.to_string()).unwrap();
        // Skip organize: duplicates would collapse. Validate the raw list.
        let err = page.ensure_valid().unwrap_err();
        assert!(matches!(err, PageError::Validation(_)));
        assert!(err.to_string().contains("Duplicate block ID found: 1"));
    }
}
