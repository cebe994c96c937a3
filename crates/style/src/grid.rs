//! Grid container properties.
//!
//! Grid alignment keywords are plain `start`/`end`, not the flex-prefixed
//! forms, so the grid group carries its own alignment enums.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GridAlign {
    Start,
    End,
    Center,
    Stretch,
}

impl fmt::Display for GridAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridAlign::Start => "start",
            GridAlign::End => "end",
            GridAlign::Center => "center",
            GridAlign::Stretch => "stretch",
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GridContentAlign {
    Start,
    End,
    Center,
    Stretch,
    SpaceAround,
    SpaceBetween,
    SpaceEvenly,
}

impl fmt::Display for GridContentAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridContentAlign::Start => "start",
            GridContentAlign::End => "end",
            GridContentAlign::Center => "center",
            GridContentAlign::Stretch => "stretch",
            GridContentAlign::SpaceAround => "space-around",
            GridContentAlign::SpaceBetween => "space-between",
            GridContentAlign::SpaceEvenly => "space-evenly",
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_columns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_rows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column_gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row_gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_items: Option<GridAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<GridAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<GridContentAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_content: Option<GridContentAlign>,
    /// Shorthand used by newer content; `grid_gap` is the older spelling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}
