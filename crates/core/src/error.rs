//! Unified error type for page-level operations.
//!
//! Only the outer boundary can fail: parsing page JSON and file I/O. Tree
//! building is lenient by policy and the validator reports instead of
//! erroring, so neither contributes variants of its own; `Validation`
//! exists for callers that choose to treat an invalid report as fatal.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Block tree failed validation: {0}")]
    Validation(String),
}
