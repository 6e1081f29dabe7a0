// dom/ - Browser mount (wasm32 only)
//
// Renders the page into a mount element, wires the browser's
// IntersectionObserver into the reveal controller, and swaps reveal
// classes in place as sections come into view.

mod observer;
mod page;

pub use observer::DomObserver;
pub use page::FormellaPage;

use wasm_bindgen::JsValue;

use crate::error::PageError;

fn dom_err(err: JsValue) -> PageError {
    PageError::Dom(format!("{err:?}"))
}
