use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::{active_href, active_section, anchor_scroll_top, NavbarState, SectionOffset};
use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom::{self, Surface};

pub fn install(ctx: &PageContext) -> Result<(), PageError> {
    let window = ctx.window();
    let document = ctx.document();
    let scroll = ctx.config().scroll;

    let navbar = dom::query_one(&document, ".navbar");
    let win = window.clone();
    ctx.listen(&window, "scroll", move |_| {
        if let Some(navbar) = &navbar {
            let state = NavbarState::at(dom::scroll_y(&win), scroll.navbar_threshold);
            navbar.set_style("background", state.background());
            navbar.set_style("box-shadow", state.box_shadow());
        }
    })?;

    let sections = dom::query_all(&document, "section[id]");
    let links = dom::query_all(&document, ".nav-link");
    let win = window.clone();
    ctx.listen(&window, "scroll", move |_| {
        // Offsets move with layout, so they are read on every tick.
        let offsets: Vec<SectionOffset> = sections
            .iter()
            .map(|s| SectionOffset {
                id: s.id(),
                top: s.offset_top() as f64,
            })
            .collect();
        let current = active_href(active_section(&offsets, dom::scroll_y(&win), scroll.section_lookahead));
        for link in &links {
            dom::remove_class(link, "active");
            if link.get_attribute("href").as_deref() == Some(current.as_str()) {
                dom::add_class(link, "active");
            }
        }
    })?;
    Ok(())
}

pub fn install_anchors(ctx: &PageContext) -> Result<(), PageError> {
    let window = ctx.window();
    let document = ctx.document();
    let offset = ctx.config().scroll.anchor_offset;

    for link in dom::query_all(&document, "a[href^=\"#\"]") {
        let window = window.clone();
        let document = document.clone();
        let anchor = link.clone();
        ctx.listen(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; query_selector rejects it.
            let target: Option<HtmlElement> = document
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|el: Element| el.dyn_into::<HtmlElement>().ok());
            if let Some(section) = target {
                let options = ScrollToOptions::new();
                options.set_top(anchor_scroll_top(section.offset_top() as f64, offset));
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }
    Ok(())
}
