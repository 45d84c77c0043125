use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom::{self, Surface};

/// Pose of a hoverable card: lifted while the pointer is over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverLift {
    pub lifted: &'static str,
    pub lifted_shadow: &'static str,
}

pub const CARD_LIFT: HoverLift = HoverLift {
    lifted: "translateY(-10px) scale(1.02)",
    lifted_shadow: "var(--shadow-xl), var(--glow-primary)",
};

pub const CATEGORY_LIFT: HoverLift = HoverLift {
    lifted: "translateY(-5px) scale(1.02)",
    lifted_shadow: "var(--shadow-lg), var(--glow-primary)",
};

const RESTING: &str = "translateY(0) scale(1)";
const RESTING_SHADOW: &str = "var(--shadow-md)";

impl HoverLift {
    pub fn enter(&self, target: &dyn Surface) {
        target.set_style("transform", self.lifted);
        target.set_style("box-shadow", self.lifted_shadow);
    }

    pub fn leave(&self, target: &dyn Surface) {
        target.set_style("transform", RESTING);
        target.set_style("box-shadow", RESTING_SHADOW);
    }
}

fn install_lift(ctx: &PageContext, selector: &str, lift: HoverLift) -> Result<(), PageError> {
    for el in dom::query_all(&ctx.document(), selector) {
        let target = el.clone();
        ctx.listen(&el, "mouseenter", move |_| lift.enter(&target))?;
        let target = el.clone();
        ctx.listen(&el, "mouseleave", move |_| lift.leave(&target))?;
    }
    Ok(())
}

pub fn install_hover(ctx: &PageContext) -> Result<(), PageError> {
    install_lift(ctx, ".project-card", CARD_LIFT)?;
    install_lift(ctx, ".skill-category", CATEGORY_LIFT)
}

/// Terminal look: clipped code chips and glowing focused inputs.
pub fn install_terminal(ctx: &PageContext) -> Result<(), PageError> {
    let document = ctx.document();
    for el in dom::query_all(&document, "code, .tech-tag") {
        el.set_style("position", "relative");
        el.set_style("overflow", "hidden");
    }

    for input in dom::query_all(&document, "input, textarea") {
        let target = input.clone();
        ctx.listen(&input, "focus", move |_| {
            target.set_style("border-color", "var(--primary-color)");
            target.set_style("box-shadow", "0 0 0 3px rgba(0, 212, 255, 0.1)");
        })?;
        let target = input.clone();
        ctx.listen(&input, "blur", move |_| {
            target.set_style("border-color", "var(--border-color)");
            target.set_style("box-shadow", "none");
        })?;
    }
    Ok(())
}
