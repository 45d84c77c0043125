use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom::{self, Surface};

/// Transform for the `index`-th floating icon at scroll offset `scrolled`.
/// Later icons drift faster; all of them spin slowly with the page.
pub fn icon_transform(index: usize, scrolled: f64) -> String {
    let rate = scrolled * -0.5;
    let speed = 0.5 + index as f64 * 0.1;
    format!("translateY({}px) rotate({}deg)", rate * speed, scrolled * 0.02)
}

pub fn install(ctx: &PageContext) -> Result<(), PageError> {
    let icons = dom::query_all(&ctx.document(), ".floating-icon");
    if icons.is_empty() {
        return Ok(());
    }
    let window = ctx.window();
    let win = window.clone();
    ctx.listen(&window, "scroll", move |_| {
        let scrolled = dom::scroll_y(&win);
        for (index, icon) in icons.iter().enumerate() {
            icon.set_style("transform", &icon_transform(index, scrolled));
        }
    })
}
