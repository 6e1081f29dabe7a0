use wasm_bindgen::prelude::*;

// ============================================================================
// FORMELLA PAGE - Ghiberti's 1401 competition panel, with scroll reveal
// ============================================================================
//
// content/  static page text
// render    content tree -> HTML
// reveal/   one-shot per-section reveal controller
// dom/      browser mount (wasm32)

pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod reveal;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use config::{PageConfig, RevealConfig};
pub use error::{PageError, Result};
pub use reveal::{IntersectionEntry, IntersectionFacility, VisibilityController};

#[cfg(target_arch = "wasm32")]
pub use dom::{DomObserver, FormellaPage};

/// Panic messages and tracing output go to the browser console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Full HTML document for the page, for prerendering from JS.
#[wasm_bindgen(js_name = renderDocument)]
pub fn render_document(config: JsValue, revealed: bool) -> std::result::Result<String, JsValue> {
    let config = PageConfig::from_js(config)?;
    let options = render::RenderOptions { model_src: Some(&config.model_src) };
    Ok(render::document(&content::PAGE, &options, |_| revealed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
