use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{NotificationId, NotificationKind, NotificationLayer};
use crate::error::PageError;
use crate::utils::dom::{self, Surface};
use crate::utils::events::EventBinding;

const OFFSCREEN: &str = "translateX(400px)";
const ONSCREEN: &str = "translateX(0)";

struct Banner {
    element: HtmlElement,
    _close: Option<EventBinding>,
}

pub struct DomNotificationLayer {
    document: Document,
    banners: RefCell<HashMap<NotificationId, Banner>>,
}

impl DomNotificationLayer {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            banners: RefCell::new(HashMap::new()),
        }
    }

    fn build(&self, message: &str, kind: NotificationKind) -> Result<(HtmlElement, HtmlElement), PageError> {
        let create = |tag: &str| -> Result<HtmlElement, PageError> {
            self.document
                .create_element(tag)
                .map_err(PageError::js)?
                .dyn_into::<HtmlElement>()
                .map_err(|_| PageError::Js(format!("<{}> is not an HTML element", tag)))
        };

        let banner = create("div")?;
        banner.set_class_name(&format!("notification notification-{}", kind.as_str()));
        let style = format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: #000; \
             padding: 1rem 1.5rem; border-radius: 10px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.4); \
             z-index: 10000; transform: {}; transition: transform 0.3s ease; max-width: 400px; \
             font-weight: 600;",
            kind.background(),
            OFFSCREEN
        );
        banner.set_attribute("style", &style).map_err(PageError::js)?;

        let content = create("div")?;
        content.set_class_name("notification-content");
        let text = create("span")?;
        text.set_class_name("notification-message");
        text.set_text_content(Some(message));
        let close = create("button")?;
        close.set_class_name("notification-close");
        close.set_text_content(Some("\u{00d7}"));

        content.append_child(&text).map_err(PageError::js)?;
        content.append_child(&close).map_err(PageError::js)?;
        banner.append_child(&content).map_err(PageError::js)?;
        Ok((banner, close))
    }
}

impl NotificationLayer for DomNotificationLayer {
    fn clear(&self) {
        for stale in dom::query_all(&self.document, ".notification") {
            stale.remove();
        }
        self.banners.borrow_mut().clear();
    }

    fn mount(&self, id: NotificationId, message: &str, kind: NotificationKind, on_close: Box<dyn Fn()>) {
        let Some(body) = self.document.body() else {
            log::debug!("No <body>, dropping notification");
            return;
        };
        let (banner, close) = match self.build(message, kind) {
            Ok(parts) => parts,
            Err(e) => {
                log::warn!("Failed to build notification: {}", e);
                return;
            }
        };
        if let Err(e) = body.append_child(&banner) {
            log::warn!("Failed to insert notification: {:?}", e);
            return;
        }
        let binding = EventBinding::new(&close, "click", move |_| on_close())
            .map_err(|e| log::warn!("Close button not wired: {}", e))
            .ok();
        self.banners.borrow_mut().insert(
            id,
            Banner {
                element: banner,
                _close: binding,
            },
        );
    }

    fn set_visible(&self, id: NotificationId, visible: bool) {
        if let Some(banner) = self.banners.borrow().get(&id) {
            banner
                .element
                .set_style("transform", if visible { ONSCREEN } else { OFFSCREEN });
        }
    }

    fn remove(&self, id: NotificationId) {
        let banner = self.banners.borrow_mut().remove(&id);
        if let Some(banner) = banner {
            banner.element.remove();
        }
    }

    fn is_mounted(&self, id: NotificationId) -> bool {
        self.banners
            .borrow()
            .get(&id)
            .map(|b| b.element.is_connected())
            .unwrap_or(false)
    }
}
