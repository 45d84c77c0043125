use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom;

const ACTIVE: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    HamburgerClick,
    LinkClick,
    Escape,
}

/// Open state after `input`, or `None` when nothing should change.
pub fn next_open(open: bool, input: MenuInput) -> Option<bool> {
    match input {
        MenuInput::HamburgerClick => Some(!open),
        MenuInput::LinkClick => Some(false),
        MenuInput::Escape if open => Some(false),
        MenuInput::Escape => None,
    }
}

#[derive(Clone)]
struct Menu {
    hamburger: Option<HtmlElement>,
    nav_menu: Option<HtmlElement>,
}

impl Menu {
    // The nav menu's class is authoritative; the hamburger stands in when
    // the page has no menu element.
    fn is_open(&self) -> bool {
        self.nav_menu
            .as_ref()
            .or(self.hamburger.as_ref())
            .map(|el| dom::has_class(el, ACTIVE))
            .unwrap_or(false)
    }

    fn handle(&self, input: MenuInput) {
        let Some(open) = next_open(self.is_open(), input) else {
            return;
        };
        let parts: [Option<&Element>; 2] = [self.hamburger.as_deref(), self.nav_menu.as_deref()];
        for el in parts.into_iter().flatten() {
            dom::set_class(el, ACTIVE, open);
        }
    }
}

/// Mobile menu: the hamburger toggles it, nav links and Escape close it.
pub fn install(ctx: &PageContext) -> Result<(), PageError> {
    let document = ctx.document();
    let menu = Menu {
        hamburger: dom::query_one(&document, ".hamburger"),
        nav_menu: dom::query_one(&document, ".nav-menu"),
    };

    if let Some(button) = &menu.hamburger {
        let menu = menu.clone();
        ctx.listen(button, "click", move |_| menu.handle(MenuInput::HamburgerClick))?;
    } else {
        log::debug!("No hamburger button, mobile menu toggle skipped");
    }

    for link in dom::query_all(&document, ".nav-link") {
        let menu = menu.clone();
        ctx.listen(&link, "click", move |_| menu.handle(MenuInput::LinkClick))?;
    }

    ctx.listen(&document, "keydown", move |event| {
        let escape = event
            .dyn_ref::<KeyboardEvent>()
            .map(|k| k.key() == "Escape")
            .unwrap_or(false);
        if escape {
            menu.handle(MenuInput::Escape);
        }
    })?;
    Ok(())
}
