//! Typed data layer for a visual page builder: content-block trees,
//! structural validation, and CSS style resolution.
//!
//! Raw block records arrive from the content API flat or partially nested.
//! [`organize_into_tree`] rebuilds the parent-linked tree, [`validate_tree`]
//! reports structural problems without failing, and
//! [`StyleData::resolve_at`] turns each block's style record into inline
//! CSS for a viewport width.
//!
//! ```
//! use mason::{BlockId, Page, css};
//!
//! # fn run() -> Result<(), mason::PageError> {
//! let mut page = Page::from_json(r##"{
//!     "id": 1, "slug": "home", "title": "Home",
//!     "pageType": "PRODUCT", "status": "DRAFT",
//!     "contentBlocks": [{
//!         "id": 10, "selectorId": "hero", "blockType": "TEXT",
//!         "positionOrder": 0,
//!         "contentData": { "text": "Hello", "language": "en" },
//!         "styleData": { "typography": { "color": "#333" } }
//!     }]
//! }"##)?;
//! page.organize();
//! assert!(page.validate().is_valid());
//!
//! let styles = page.resolved_styles(1280);
//! assert_eq!(css::to_declarations(&styles[&BlockId::from(10)]), "color: #333");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

pub use mason_blocks::{
    BlockContent, BlockType, ContentBlock, SettingsData, ValidationLimits, ValidationReport,
    descendants, find_by_id, flatten_tree, organize_into_tree, validate_tree, validate_tree_with,
};
pub use mason_core::{Page, PageError, PageKind, PageStatus};
pub use mason_style::{Breakpoint, StyleData, StyleMap, StyleOverlay, css};
pub use mason_types::{BlockId, PageId, SelectorId};

/// Full module surface of the member crates, for items the flat re-exports
/// above do not cover.
pub use mason_blocks as blocks;
pub use mason_style as style;
pub use mason_types as types;
