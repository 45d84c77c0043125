use std::rc::Rc;

use web_sys::{Document, Window};

use super::stagger;
use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom::{self, Surface};

const HERO_START: &[(&str, &str)] = &[("opacity", "0"), ("transform", "translateY(30px)")];
const HERO_END: &[(&str, &str)] = &[
    ("transition", "all 0.8s ease"),
    ("opacity", "1"),
    ("transform", "translateY(0)"),
];

/// Whether a section whose top sits `top` px below the viewport's top edge
/// is far enough in to be shown.
pub fn section_in_view(top: f64, viewport_height: f64, ratio: f64) -> bool {
    top < viewport_height * ratio
}

/// Marks the body loaded and fades the hero text in, child by child.
pub fn run_hero_stagger(ctx: &PageContext) -> Result<(), PageError> {
    let document = ctx.document();
    if let Some(body) = document.body() {
        dom::add_class(&body, "loaded");
    }

    let items: Vec<Rc<dyn Surface>> = dom::query_all(&document, ".hero-text > *")
        .into_iter()
        .map(|el| Rc::new(el) as Rc<dyn Surface>)
        .collect();
    for item in &items {
        dom::set_styles(item.as_ref(), HERO_START);
    }
    let count = items.len();
    stagger(
        &ctx.scheduler(),
        items,
        0,
        ctx.config().timings.hero_stagger,
        Rc::new(|item: &dyn Surface| dom::set_styles(item, HERO_END)),
        Box::new(move || log::debug!("Hero stagger finished ({} elements)", count)),
    );
    Ok(())
}

pub fn reveal_sections(window: &Window, document: &Document, ratio: f64) {
    let height = dom::inner_height(window);
    for section in dom::query_all(document, ".section") {
        if section_in_view(section.get_bounding_client_rect().top(), height, ratio) {
            section.set_style("opacity", "1");
            section.set_style("transform", "translateY(0)");
        }
    }
}

pub fn install_section_reveal(ctx: &PageContext) -> Result<(), PageError> {
    let window = ctx.window();
    let document = ctx.document();
    let ratio = ctx.config().scroll.section_reveal_ratio;
    let win = window.clone();
    ctx.listen(&window, "scroll", move |_| reveal_sections(&win, &document, ratio))
}
