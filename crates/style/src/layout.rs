//! Box-model and positioning properties for a single block.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Block,
    Flex,
    Grid,
    InlineBlock,
    None,
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Display::Block => "block",
            Display::Flex => "flex",
            Display::Grid => "grid",
            Display::InlineBlock => "inline-block",
            Display::None => "none",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Absolute => "absolute",
            Position::Fixed => "fixed",
            Position::Sticky => "sticky",
        })
    }
}

/// Sizing, spacing, and positioning. Length values stay free-form strings
/// ("100%", "500px", "auto") and are passed through untouched.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Free-form here, unlike the typed variant on typography. Kept for
    /// content authored before alignment moved into the typography group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_serde_tokens() {
        assert_eq!(serde_json::to_value(Display::InlineBlock).unwrap(), json!("inline-block"));
        assert_eq!(
            serde_json::from_value::<Display>(json!("flex")).unwrap(),
            Display::Flex
        );
    }

    #[test]
    fn test_display_css_token_matches_serde() {
        assert_eq!(Display::InlineBlock.to_string(), "inline-block");
        assert_eq!(Position::Sticky.to_string(), "sticky");
    }

    #[test]
    fn test_layout_deserializes_camel_case() {
        let layout: LayoutStyle = serde_json::from_value(json!({
            "minWidth": "200px",
            "zIndex": 10,
            "position": "absolute"
        }))
        .unwrap();
        assert_eq!(layout.min_width.as_deref(), Some("200px"));
        assert_eq!(layout.z_index, Some(10));
        assert_eq!(layout.position, Some(Position::Absolute));
        assert!(layout.width.is_none());
    }
}
