//! The content-block record: one node of the page tree.
use crate::content::{BlockContent, BlockType, ContainerContent, ContainerElement, ContainerLayout};
use crate::settings::{GeneralSettings, SettingsData};
use chrono::Utc;
use mason_style::{Display, LayoutStyle, StyleData};
use mason_types::{BlockId, SelectorId};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// One block of page content.
///
/// Raw records from the API arrive flat or partially nested; `children` is
/// authoritative only after [`crate::tree::organize_into_tree`] has run, and
/// is rebuilt from scratch on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub id: BlockId,
    pub selector_id: SelectorId,
    #[serde(flatten)]
    pub content: BlockContent,
    /// Sibling display order, ascending.
    pub position_order: i32,
    #[serde(default, rename = "styleData")]
    pub style: StyleData,
    #[serde(default, rename = "settingsData")]
    pub settings: SettingsData,
    /// Absent means root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_block_id: Option<BlockId>,
    /// Persistence-side hint; the built tree is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_level: Option<u32>,
    /// Persistence-side hint; the built tree is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_path: Option<String>,
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
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentBlock>,
}

impl ContentBlock {
    /// The block's kind tag.
    pub fn kind(&self) -> BlockType {
        self.content.kind()
    }

    pub fn is_container(&self) -> bool {
        matches!(self.content, BlockContent::Container(_))
    }

    /// Builds a container block with the defaults the builder uses when a
    /// new container is dropped onto a page.
    pub fn container(
        id: BlockId,
        selector_id: impl Into<SelectorId>,
        position_order: i32,
        title: impl Into<String>,
    ) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id,
            selector_id: selector_id.into(),
            content: BlockContent::Container(ContainerContent {
                container_type: Some(ContainerElement::Div),
                title: Some(title.into()),
                layout_type: Some(ContainerLayout::Block),
                is_collapsible: Some(false),
                is_collapsed: Some(false),
                ..ContainerContent::default()
            }),
            position_order,
            style: StyleData {
                layout: Some(LayoutStyle {
                    display: Some(Display::Block),
                    padding: Some("20px".into()),
                    ..LayoutStyle::default()
                }),
                ..StyleData::default()
            },
            settings: SettingsData {
                general: Some(GeneralSettings {
                    is_visible: Some(true),
                    custom_classes: Some(vec!["container-block".into()]),
                    ..GeneralSettings::default()
                }),
                content: Some(json!({
                    "editor": {
                        "collapsible": true,
                        "dropZone": {
                            "showIndicators": true,
                            "allowedTypes": ["TEXT", "IMAGE", "RICH_TEXT", "LINK", "CTA"],
                            "maxChildren": 10
                        }
                    },
                    "container": {
                        "layout": {
                            "display": "flex",
                            "flexDirection": "column",
                            "justifyContent": "flex-start",
                            "alignItems": "flex-start"
                        }
                    }
                })),
                ..SettingsData::default()
            },
            parent_block_id: None,
            depth_level: None,
            hierarchy_path: None,
            creator_user_id: 1,
            updater_user_id: 1,
            created_at: now,
            updated_at: now,
            children: Vec::new(),
        }
    }
}
