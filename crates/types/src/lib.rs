pub mod ids;

pub use ids::{BlockId, PageId, SelectorId};
