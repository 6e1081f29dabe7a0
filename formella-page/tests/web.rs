#![cfg(target_arch = "wasm32")]

use formella_page::FormellaPage;
use formella_page::content::PAGE;
use formella_page::reveal::{HIDDEN_CLASS, REVEALED_CLASS};
use formella_page::{IntersectionEntry, PageConfig, PageError};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let el = document.create_element("div").unwrap();
    el.set_id(id);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn wrapper(root: &web_sys::Element, id: &str) -> web_sys::Element {
    root.query_selector(&format!("[data-reveal=\"{id}\"]"))
        .unwrap()
        .unwrap_or_else(|| panic!("no wrapper for {id}"))
}

fn shows_revealed(root: &web_sys::Element, id: &str) -> bool {
    let classes = wrapper(root, id).class_list();
    classes.contains(REVEALED_CLASS) && !classes.contains(HIDDEN_CLASS)
}

/// Removes `window.IntersectionObserver` until dropped.
struct WithoutObserver {
    saved: JsValue,
}

impl WithoutObserver {
    const KEY: &'static str = "IntersectionObserver";

    fn install() -> Self {
        let window = web_sys::window().unwrap();
        let key = JsValue::from_str(Self::KEY);
        let saved = Reflect::get(&window, &key).unwrap();
        assert!(Reflect::delete_property(&window, &key).unwrap());
        Self { saved }
    }
}

impl Drop for WithoutObserver {
    fn drop(&mut self) {
        let window = web_sys::window().unwrap();
        Reflect::set(&window, &JsValue::from_str(Self::KEY), &self.saved).unwrap();
    }
}

#[wasm_bindgen_test]
fn mount_registers_every_section() {
    let root = mount_point("mount-all");
    let mut page = FormellaPage::mount("#mount-all", &PageConfig::default()).unwrap();

    assert_eq!(page.registered_count(), PAGE.sections.len());
    for id in PAGE.section_ids() {
        let selector = format!("[data-reveal=\"{id}\"]");
        assert!(root.query_selector(&selector).unwrap().is_some(), "{id}");
    }
    assert!(!page.is_revealed("nonexistent"));
    page.unmount();
}

#[wasm_bindgen_test]
fn reveal_swaps_wrapper_class() {
    let root = mount_point("mount-swap");
    let mut page = FormellaPage::mount("#mount-swap", &PageConfig::default()).unwrap();
    assert!(!page.is_degraded());
    assert!(!shows_revealed(&root, "opera"));

    page.controller().deliver([IntersectionEntry::new("opera", true)]);

    assert!(page.is_revealed("opera"));
    assert!(shows_revealed(&root, "opera"));
    assert!(!shows_revealed(&root, "confronto"));
    page.unmount();
}

#[wasm_bindgen_test]
fn sliver_in_view_does_not_swap_class() {
    let root = mount_point("mount-sliver");
    let mut page = FormellaPage::mount("#mount-sliver", &PageConfig::default()).unwrap();

    page.controller().deliver([IntersectionEntry::partial("analisi", 0.02)]);

    assert!(!page.is_revealed("analisi"));
    assert!(!shows_revealed(&root, "analisi"));
    page.unmount();
}

#[wasm_bindgen_test]
fn missing_observer_reveals_everything() {
    let root = mount_point("mount-degraded");
    let mut page = {
        let _gone = WithoutObserver::install();
        FormellaPage::mount("#mount-degraded", &PageConfig::default()).unwrap()
    };

    assert!(page.is_degraded());
    for id in PAGE.section_ids() {
        assert!(page.is_revealed(id), "{id}");
        assert!(shows_revealed(&root, id), "{id}");
    }
    page.unmount();
}

#[wasm_bindgen_test]
fn bad_root_margin_is_a_config_error() {
    mount_point("mount-margin");
    let mut config = PageConfig::default();
    config.reveal.root_margin = "banana".into();
    let err = FormellaPage::mount("#mount-margin", &config).err();
    assert!(matches!(err, Some(PageError::Config(_))));
}

#[wasm_bindgen_test]
fn missing_mount_point_errors() {
    let err = FormellaPage::mount("#does-not-exist", &PageConfig::default()).err();
    assert_eq!(err, Some(PageError::MountPointMissing("#does-not-exist".into())));
}

#[wasm_bindgen_test]
fn unmount_clears_everything() {
    let root = mount_point("mount-clear");
    let mut page = FormellaPage::mount("#mount-clear", &PageConfig::default()).unwrap();
    page.unmount();
    assert_eq!(page.registered_count(), 0);
    assert_eq!(root.inner_html(), "");
}
