// observer.rs - IntersectionObserver facility

use js_sys::{Array, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::error::{PageError, Result};
use crate::reveal::{IntersectionEntry, IntersectionFacility, NotificationSink};

pub struct DomObserver {
    observer: IntersectionObserver,
    // Must outlive the observer, JS holds a pointer into it
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomObserver {
    /// Fails when the host has no IntersectionObserver; the controller
    /// then degrades to revealing everything.
    pub fn connect(config: &RevealConfig, sink: NotificationSink<DomObserver>) -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| PageError::FacilityUnavailable("no window".into()))?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if !supported {
            return Err(PageError::FacilityUnavailable("IntersectionObserver not supported".into()));
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                sink.deliver(
                    entries
                        .iter()
                        .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                        .map(|e| IntersectionEntry {
                            id: e.target().id(),
                            is_intersecting: e.is_intersecting(),
                            intersection_ratio: e.intersection_ratio(),
                        }),
                );
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| PageError::FacilityUnavailable(format!("{e:?}")))?;

        tracing::debug!(threshold = config.threshold, root_margin = %config.root_margin, "intersection observer connected");
        Ok(Self { observer, _callback: callback })
    }
}

impl IntersectionFacility for DomObserver {
    type Handle = Element;

    fn observe(&mut self, handle: &Element) {
        self.observer.observe(handle);
    }

    fn unobserve(&mut self, handle: &Element) {
        self.observer.unobserve(handle);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for DomObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
