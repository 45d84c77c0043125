use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// 10% visible, with the bottom edge pulled in by 50px.
pub const ENTRANCE: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

/// Wraps an `IntersectionObserver` whose callback only hears about elements
/// that became visible. Dropping it disconnects the observer.
///
/// Passing `None` for the options keeps the browser defaults (any pixel
/// visible, no margin).
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn new<F>(options: Option<ObserverOptions>, mut on_visible: F) -> Result<Self, PageError>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        on_visible(&entry.target(), &observer);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = match options {
            Some(options) => {
                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(options.threshold));
                init.set_root_margin(options.root_margin);
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            }
            None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
        }
        .map_err(PageError::js)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
