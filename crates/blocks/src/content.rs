//! Block kinds and their content payloads.
//!
//! Content is a tagged union over the closed set of block kinds, so a
//! block's payload shape is checked exhaustively at compile time instead of
//! being an open record inspected at run time.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The closed set of block kinds a page may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Text,
    RichText,
    Image,
    Link,
    Cta,
    Quote,
    LogoList,
    CardList,
    Selector,
    Container,
    Video,
    HeroBanner,
    CustomHtml,
}

impl BlockType {
    /// The wire tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Text => "TEXT",
            BlockType::RichText => "RICH_TEXT",
            BlockType::Image => "IMAGE",
            BlockType::Link => "LINK",
            BlockType::Cta => "CTA",
            BlockType::Quote => "QUOTE",
            BlockType::LogoList => "LOGO_LIST",
            BlockType::CardList => "CARD_LIST",
            BlockType::Selector => "SELECTOR",
            BlockType::Container => "CONTAINER",
            BlockType::Video => "VIDEO",
            BlockType::HeroBanner => "HERO_BANNER",
            BlockType::CustomHtml => "CUSTOM_HTML",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content payload for each block kind.
///
/// Serialized adjacently so the wire shape matches the authoring API: the
/// kind tag lives in `blockType`, the payload in `contentData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "blockType", content = "contentData", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockContent {
    Text(TextContent),
    RichText(RichTextContent),
    Image(ImageContent),
    Link(LinkContent),
    Cta(CtaContent),
    Quote(QuoteContent),
    LogoList(LogoListContent),
    CardList(CardListContent),
    Selector(SelectorContent),
    Container(ContainerContent),
    Video(VideoContent),
    HeroBanner(HeroBannerContent),
    CustomHtml(CustomHtmlContent),
}

impl BlockContent {
    /// The kind tag for this payload.
    pub fn kind(&self) -> BlockType {
        match self {
            BlockContent::Text(_) => BlockType::Text,
            BlockContent::RichText(_) => BlockType::RichText,
            BlockContent::Image(_) => BlockType::Image,
            BlockContent::Link(_) => BlockType::Link,
            BlockContent::Cta(_) => BlockType::Cta,
            BlockContent::Quote(_) => BlockType::Quote,
            BlockContent::LogoList(_) => BlockType::LogoList,
            BlockContent::CardList(_) => BlockType::CardList,
            BlockContent::Selector(_) => BlockType::Selector,
            BlockContent::Container(_) => BlockType::Container,
            BlockContent::Video(_) => BlockType::Video,
            BlockContent::HeroBanner(_) => BlockType::HeroBanner,
            BlockContent::CustomHtml(_) => BlockType::CustomHtml,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub text: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextContent {
    pub html_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_config: Option<HighlightConfig>,
    #[serde(default)]
    pub plain_text_fallback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    pub highlight_color: String,
    pub highlight_style: String,
    pub highlighted_phrases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub caption: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ImageMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ImageDimensions>,
    pub media_file_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub format: String,
    pub file_size: String,
    pub color_space: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkContent {
    #[serde(default)]
    pub rel: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    pub target: LinkTarget,
    pub link_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    SameTab,
    #[serde(rename = "_blank")]
    NewTab,
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LinkTarget::SameTab => "_self",
            LinkTarget::NewTab => "_blank",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    pub text: String,
    pub url: String,
    pub cta_type: CtaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<CtaIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaKind {
    Button,
    Link,
    Banner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaIcon {
    pub name: String,
    pub position: IconPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteContent {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub author_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoListContent {
    pub logos: Vec<Logo>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alt_text: String,
    pub image_url: String,
    #[serde(default)]
    pub website_url: String,
    pub media_file_id: i64,
    #[serde(default)]
    pub open_in_new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardListContent {
    pub cards: Vec<Card>,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub cta: CardCta,
    pub image: CardImage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCta {
    pub url: String,
    pub text: String,
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorContent {
    pub name: String,
    #[serde(default)]
    pub label: String,
    pub options: Vec<SelectorOption>,
    #[serde(default)]
    pub placeholder: String,
    pub selector_type: SelectorKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    Dropdown,
    Radio,
    Checkbox,
}

/// Container payload. Everything is optional: an empty object is a plain
/// `div` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_type: Option<ContainerElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_classes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<ContainerLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_collapsible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_collapsed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
}

/// Semantic HTML element rendered for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerElement {
    Div,
    Section,
    Article,
    Aside,
    Header,
    Footer,
    Main,
    Nav,
}

impl fmt::Display for ContainerElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContainerElement::Div => "div",
            ContainerElement::Section => "section",
            ContainerElement::Article => "article",
            ContainerElement::Aside => "aside",
            ContainerElement::Header => "header",
            ContainerElement::Footer => "footer",
            ContainerElement::Main => "main",
            ContainerElement::Nav => "nav",
        })
    }
}

/// Layout hint shown in the visual builder, not a style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerLayout {
    Flex,
    Grid,
    Block,
    InlineBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    /// Set for uploaded videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_file_id: Option<i64>,
    /// Set for externally hosted videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub source: VideoSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Upload,
    Youtube,
    Vimeo,
    External,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBannerContent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_open_in_new_tab: Option<bool>,
    /// Media file id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<i64>,
    /// Media file id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_video: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomHtmlContent {
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_scripts: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_styles: Option<Vec<String>>,
}
