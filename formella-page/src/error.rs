// error.rs - Page errors
//
// Only configuration and mounting can fail. Everything the reveal
// controller does degrades instead of erroring.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PageError {
    #[error("reveal threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("invalid page config: {0}")]
    Config(String),

    #[error("intersection observer unavailable: {0}")]
    FacilityUnavailable(String),

    #[error("mount point `{0}` not found")]
    MountPointMissing(String),

    #[error("dom operation failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, PageError>;

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
