//! Rare, brief visual glitches on a timer.

use std::rc::Rc;

use rand::Rng;

use crate::config::GlitchSpec;
use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom::{self, Surface};
use crate::utils::random::SharedRng;
use crate::utils::timers::Scheduler;

/// A style property flipped to `glitched` and back to `settled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlitchStyle {
    pub property: &'static str,
    pub glitched: &'static str,
    pub settled: &'static str,
}

pub const TITLE_GLITCH: GlitchStyle = GlitchStyle {
    property: "text-shadow",
    glitched: "2px 0 var(--secondary-color), -2px 0 var(--accent-color)",
    settled: "var(--glow-primary)",
};

pub const ICON_GLITCH: GlitchStyle = GlitchStyle {
    property: "filter",
    glitched: "hue-rotate(180deg) brightness(1.5)",
    settled: "drop-shadow(0 0 10px rgba(0, 212, 255, 0.5))",
};

pub const AMBIENT_GLITCH: GlitchStyle = GlitchStyle {
    property: "filter",
    glitched: "hue-rotate(90deg) saturate(1.5)",
    settled: "none",
};

const AMBIENT_TARGETS: &str = ".project-card, .skill-category, .timeline-content";

pub fn flash(scheduler: &dyn Scheduler, target: Rc<dyn Surface>, style: GlitchStyle, revert_ms: u32) {
    target.set_style(style.property, style.glitched);
    scheduler.timeout(
        revert_ms,
        Box::new(move || target.set_style(style.property, style.settled)),
    );
}

/// One tick of a glitch timer: with `spec.probability`, picks one of
/// `targets` at random and flashes it. Returns the index picked.
pub fn tick<R: Rng>(
    rng: &mut R,
    scheduler: &dyn Scheduler,
    targets: &[Rc<dyn Surface>],
    spec: &GlitchSpec,
    style: GlitchStyle,
) -> Option<usize> {
    if targets.is_empty() || !rng.gen_bool(spec.probability) {
        return None;
    }
    let index = if targets.len() == 1 { 0 } else { rng.gen_range(0..targets.len()) };
    flash(scheduler, Rc::clone(&targets[index]), style, spec.revert_ms);
    Some(index)
}

fn every(
    scheduler: Rc<dyn Scheduler>,
    rng: SharedRng,
    spec: GlitchSpec,
    style: GlitchStyle,
    mut targets: impl FnMut() -> Vec<Rc<dyn Surface>> + 'static,
) {
    let runner = Rc::clone(&scheduler);
    scheduler.interval(
        spec.period_ms,
        Box::new(move || {
            let current = targets();
            tick(&mut *rng.borrow_mut(), runner.as_ref(), &current, &spec, style);
        }),
    );
}

pub fn install_title(ctx: &PageContext) -> Result<(), PageError> {
    let Some(title) = dom::query_one(&ctx.document(), ".title-name") else {
        return Ok(());
    };
    let title: Rc<dyn Surface> = Rc::new(title);
    every(
        ctx.scheduler(),
        ctx.rng(),
        ctx.config().glitch.title,
        TITLE_GLITCH,
        move || vec![Rc::clone(&title)],
    );
    Ok(())
}

pub fn install_icons(ctx: &PageContext) -> Result<(), PageError> {
    for icon in dom::query_all(&ctx.document(), ".floating-icon") {
        let icon: Rc<dyn Surface> = Rc::new(icon);
        every(
            ctx.scheduler(),
            ctx.rng(),
            ctx.config().glitch.icon,
            ICON_GLITCH,
            move || vec![Rc::clone(&icon)],
        );
    }
    Ok(())
}

/// One random card, category or timeline block glitches occasionally. The
/// candidates are looked up afresh on each tick.
pub fn install_ambient(ctx: &PageContext) -> Result<(), PageError> {
    let document = ctx.document();
    every(
        ctx.scheduler(),
        ctx.rng(),
        ctx.config().glitch.ambient,
        AMBIENT_GLITCH,
        move || {
            dom::query_all(&document, AMBIENT_TARGETS)
                .into_iter()
                .map(|el| Rc::new(el) as Rc<dyn Surface>)
                .collect()
        },
    );
    Ok(())
}
