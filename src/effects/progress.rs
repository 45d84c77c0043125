use web_sys::{Document, Element, Window};

use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom::{self, Surface};

const BAR_STYLE: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
    background: linear-gradient(90deg, var(--primary-color), var(--accent-color)); \
    z-index: 10001; transition: width 0.1s ease; box-shadow: var(--glow-primary);";

/// Percentage of the scrollable distance covered. Not clamped: short pages
/// give a non-finite result and overscroll can leave `[0, 100]`.
pub fn scroll_percent(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    offset / (document_height - viewport_height) * 100.0
}

/// The CSS width for a progress value. Non-finite values have no valid CSS
/// form and leave the bar where it is.
pub fn bar_width(percent: f64) -> Option<String> {
    percent.is_finite().then(|| format!("{}%", percent))
}

fn document_height(document: &Document) -> f64 {
    document
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0)
}

fn update(bar: &web_sys::HtmlElement, window: &Window, document: &Document) {
    let percent = scroll_percent(
        dom::scroll_y(window),
        document_height(document),
        dom::inner_height(window),
    );
    if let Some(width) = bar_width(percent) {
        bar.set_style("width", &width);
    }
}

pub fn install(ctx: &PageContext) -> Result<(), PageError> {
    let document = ctx.document();
    let Some(body) = document.body() else {
        return Ok(());
    };
    let bar: web_sys::HtmlElement = ctx.create_html("div")?;
    bar.set_class_name("scroll-progress");
    bar.set_attribute("style", BAR_STYLE).map_err(PageError::js)?;
    body.append_child(&bar).map_err(PageError::js)?;
    ctx.track_injected(Element::from(bar.clone()));

    let window = ctx.window();
    let win = window.clone();
    ctx.listen(&window, "scroll", move |_| update(&bar, &win, &document))
}
