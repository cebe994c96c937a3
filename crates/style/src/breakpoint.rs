//! Named viewport-width ranges used to select responsive overrides.
//!
//! The viewport width is always an explicit parameter; nothing here reads
//! ambient environment state.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the mobile range, inclusive.
pub const MOBILE_MAX_WIDTH: u32 = 768;
/// Upper bound of the tablet range, inclusive.
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// The breakpoints considered during width-based resolution. Exactly one is
/// active for any width: the three ranges are disjoint and cover all widths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    /// The breakpoint active at the given viewport width.
    pub fn from_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Whether the given width falls inside this breakpoint's range.
    pub fn matches(self, width: u32) -> bool {
        Self::from_width(width) == self
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        })
    }
}
