//! Browser runtime for the portfolio page: navigation, entrance animations,
//! decorative effects and the contact form, driven from WebAssembly.

pub mod animations;
pub mod config;
pub mod contact;
pub mod controller;
pub mod effects;
pub mod error;
pub mod navigation;
pub mod notifications;
pub mod utils;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::PageConfig;
use crate::controller::PageController;
use crate::error::PageError;
use crate::utils::dom;
use crate::utils::logging::init_logging;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<PageController>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    mount().map_err(JsValue::from)
}

/// Creates the page controller if there isn't one yet.
pub fn mount() -> Result<(), PageError> {
    if CONTROLLER.with(|slot| slot.borrow().is_some()) {
        log::debug!("Page controller already mounted");
        return Ok(());
    }

    let window = dom::window()?;
    let document = window.document().ok_or(PageError::MissingDocument)?;

    let config = PageConfig::from_document(&document);
    let level = config.as_ref().map(|c| c.log_level.as_str()).unwrap_or("info");
    if let Err(e) = init_logging(level) {
        init_logging("info")?;
        log::warn!("{}, using info level", e);
    }
    let config = config.unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        PageConfig::default()
    });

    let controller = PageController::new(window, document, config);
    controller.install()?;
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    log::info!("Portfolio page controller mounted");
    Ok(())
}

#[wasm_bindgen]
pub fn remount() -> Result<(), JsValue> {
    mount().map_err(JsValue::from)
}

/// Removes every listener, timer and injected node.
#[wasm_bindgen]
pub fn teardown() {
    let controller = CONTROLLER.with(|slot| slot.borrow_mut().take());
    if let Some(controller) = controller {
        controller.teardown();
    }
}
