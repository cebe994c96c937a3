pub mod background;
pub mod border;
pub mod breakpoint;
pub mod css;
pub mod data;
pub mod effects;
pub mod flex;
pub mod grid;
pub mod layout;
pub mod overlay;
pub mod resolve;
pub mod typography;

pub use background::{BackgroundAttachment, BackgroundRepeat, BackgroundStyle};
pub use border::{BorderLine, BorderStyle};
pub use breakpoint::Breakpoint;
pub use data::{ResponsiveStyles, StyleData};
pub use effects::EffectsStyle;
pub use flex::{AlignContent, AlignItems, FlexDirection, FlexStyle, FlexWrap, JustifyContent};
pub use grid::{GridAlign, GridContentAlign, GridStyle};
pub use layout::{Display, LayoutStyle, Position};
pub use overlay::StyleOverlay;
pub use resolve::StyleMap;
pub use typography::{
    FontStyle, FontWeight, LineHeight, TextAlign, TextDecoration, TextTransform, TypographyStyle,
    WhiteSpace, WordBreak,
};
