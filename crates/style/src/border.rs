//! Border properties, including per-side widths and per-corner radii.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BorderLine {
    None,
    Solid,
    Dashed,
    Dotted,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

impl fmt::Display for BorderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BorderLine::None => "none",
            BorderLine::Solid => "solid",
            BorderLine::Dashed => "dashed",
            BorderLine::Dotted => "dotted",
            BorderLine::Double => "double",
            BorderLine::Groove => "groove",
            BorderLine::Ridge => "ridge",
            BorderLine::Inset => "inset",
            BorderLine::Outset => "outset",
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BorderStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right_radius: Option<String>,
}
