//! The top-level style record attached to each content block.
use crate::background::BackgroundStyle;
use crate::border::BorderStyle;
use crate::breakpoint::Breakpoint;
use crate::effects::EffectsStyle;
use crate::flex::FlexStyle;
use crate::grid::GridStyle;
use crate::layout::LayoutStyle;
use crate::typography::TypographyStyle;
use serde::{Deserialize, Serialize};

/// Per-breakpoint style overrides. Each entry is a partial [`StyleData`]
/// whose resolved properties replace the matching base properties; base
/// properties the override does not name survive untouched.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Box<StyleData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tablet: Option<Box<StyleData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<Box<StyleData>>,
    /// Carried on the record but never selected by width: widths above the
    /// tablet range resolve to `desktop`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_desktop: Option<Box<StyleData>>,
}

impl ResponsiveStyles {
    /// The override set for a width-selectable breakpoint, if authored.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&StyleData> {
        match breakpoint {
            Breakpoint::Mobile => self.mobile.as_deref(),
            Breakpoint::Tablet => self.tablet.as_deref(),
            Breakpoint::Desktop => self.desktop.as_deref(),
        }
    }
}

/// Declarative visual configuration for one block, grouped by concern.
/// Every group is optional; an empty record resolves to no properties.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<FlexStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectsStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<ResponsiveStyles>,
    /// Raw CSS escape hatch, stored but not consumed by the resolver.
    #[serde(rename = "customCSS", skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}
