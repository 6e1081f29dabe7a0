// page.rs - JS-facing page handle

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::{DomObserver, dom_err};
use crate::config::PageConfig;
use crate::content::PAGE;
use crate::error::{PageError, Result};
use crate::render::{self, RenderOptions};
use crate::reveal::{
    HIDDEN_CLASS, REVEALED_CLASS, SectionRegistration, Subscription, VisibilityController,
};

pub const DEFAULT_MOUNT: &str = "#root";

/// The mounted page. Dropping it (or `free()` from JS) releases all
/// observation.
#[wasm_bindgen]
pub struct FormellaPage {
    controller: VisibilityController<DomObserver>,
    registrations: Vec<SectionRegistration<DomObserver>>,
    subscription: Option<Subscription>,
    mount: Element,
}

#[wasm_bindgen]
impl FormellaPage {
    /// Render into `mount` (a CSS selector, default `#root`) and start
    /// watching sections.
    ///
    /// `config` is an optional object:
    /// `{ reveal: { threshold, rootMargin }, modelSrc }`.
    #[wasm_bindgen(constructor)]
    pub fn new(mount: Option<String>, config: JsValue) -> std::result::Result<FormellaPage, JsValue> {
        let config = PageConfig::from_js(config)?;
        Ok(Self::mount(mount.as_deref().unwrap_or(DEFAULT_MOUNT), &config)?)
    }

    #[wasm_bindgen(js_name = isRevealed)]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.controller.is_revealed(id)
    }

    #[wasm_bindgen(js_name = revealedCount)]
    pub fn revealed_count(&self) -> usize {
        self.controller.revealed_count()
    }

    #[wasm_bindgen(js_name = revealedIds)]
    pub fn revealed_ids(&self) -> Array {
        self.controller.revealed_ids().into_iter().map(JsValue::from).collect()
    }

    #[wasm_bindgen(js_name = registeredCount)]
    pub fn registered_count(&self) -> usize {
        self.controller.registered_count()
    }

    #[wasm_bindgen(js_name = isDegraded)]
    pub fn is_degraded(&self) -> bool {
        self.controller.is_degraded()
    }

    /// Stop observing and clear the mount element.
    pub fn unmount(&mut self) {
        self.registrations.clear();
        self.subscription = None;
        self.controller.teardown();
        self.mount.set_inner_html("");
        tracing::info!("page unmounted");
    }
}

impl FormellaPage {
    pub fn mount(selector: &str, config: &PageConfig) -> Result<Self> {
        config.validate()?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PageError::Dom("no document".into()))?;
        let mount = document
            .query_selector(selector)
            .map_err(dom_err)?
            .ok_or_else(|| PageError::MountPointMissing(selector.to_string()))?;

        let controller = VisibilityController::connect(config.reveal.clone(), DomObserver::connect);

        let options = RenderOptions { model_src: Some(&config.model_src) };
        mount.set_inner_html(&render::page(&PAGE, &options, |id| controller.is_revealed(id)));

        let target = mount.clone();
        let subscription = controller.subscribe(move |id| {
            if let Err(err) = mark_revealed(&target, id) {
                tracing::warn!(section = %id, %err, "could not apply reveal class");
            }
        });

        let mut registrations = Vec::with_capacity(PAGE.sections.len());
        for id in PAGE.section_ids() {
            let element = mount
                .query_selector(&format!("section#{id}"))
                .map_err(dom_err)?
                .ok_or_else(|| PageError::Dom(format!("section `{id}` missing after render")))?;
            registrations.push(controller.register_section(id, element));
        }

        tracing::info!(
            sections = registrations.len(),
            degraded = controller.is_degraded(),
            "page mounted"
        );

        Ok(Self {
            controller,
            registrations,
            subscription: Some(subscription),
            mount,
        })
    }

    pub fn controller(&self) -> &VisibilityController<DomObserver> {
        &self.controller
    }
}

/// Swap the pre-reveal class for the transition class on a section wrapper.
fn mark_revealed(mount: &Element, id: &str) -> Result<()> {
    let selector = format!("[data-reveal=\"{id}\"]");
    let Some(wrapper) = mount.query_selector(&selector).map_err(dom_err)? else {
        return Ok(());
    };
    let classes = wrapper.class_list();
    classes.remove_1(HIDDEN_CLASS).map_err(dom_err)?;
    classes.add_1(REVEALED_CLASS).map_err(dom_err)?;
    Ok(())
}
