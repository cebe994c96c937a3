//! Background fill properties.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    Repeat,
    RepeatX,
    RepeatY,
    NoRepeat,
}

impl fmt::Display for BackgroundRepeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackgroundRepeat::Repeat => "repeat",
            BackgroundRepeat::RepeatX => "repeat-x",
            BackgroundRepeat::RepeatY => "repeat-y",
            BackgroundRepeat::NoRepeat => "no-repeat",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundAttachment {
    Scroll,
    Fixed,
    Local,
}

impl fmt::Display for BackgroundAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackgroundAttachment::Scroll => "scroll",
            BackgroundAttachment::Fixed => "fixed",
            BackgroundAttachment::Local => "local",
        })
    }
}

/// Background fill. `image` holds a bare URL; the resolver wraps it in
/// `url(...)`. A `gradient` takes over the composite `background` property
/// and wins over `color`/`image`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// "auto", "cover", "contain", or an explicit size like "100px 200px".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<BackgroundRepeat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<BackgroundAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repeat_tokens() {
        let bg: BackgroundStyle = serde_json::from_value(json!({
            "repeat": "no-repeat",
            "attachment": "fixed"
        }))
        .unwrap();
        assert_eq!(bg.repeat, Some(BackgroundRepeat::NoRepeat));
        assert_eq!(bg.attachment, Some(BackgroundAttachment::Fixed));
        assert_eq!(bg.repeat.unwrap().to_string(), "no-repeat");
    }
}
