use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;

use super::{stagger, RevealState};
use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom::{self, Surface};
use crate::utils::observer::{VisibilityObserver, ENTRANCE};
use crate::utils::timers::Scheduler;

const ENTRANCE_TARGETS: &str =
    "[data-aos], .timeline-item, .project-card, .skill-category, .contact-item, .contact-form";

const HIDDEN_SKILL: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(20px) scale(0.8)"),
    ("transition", "all 0.5s ease"),
];

const SHOWN_SKILL: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0) scale(1)")];

/// One skill category's items, revealed one after another the first time the
/// category is seen.
pub struct SkillCascade {
    items: Vec<Rc<dyn Surface>>,
    state: Rc<Cell<RevealState>>,
    lead_in: u32,
    every: u32,
}

impl SkillCascade {
    pub fn new(items: Vec<Rc<dyn Surface>>, lead_in: u32, every: u32) -> Self {
        Self {
            items,
            state: Rc::new(Cell::new(RevealState::Pending)),
            lead_in,
            every,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    pub fn hide(&self) {
        for item in &self.items {
            dom::set_styles(item.as_ref(), HIDDEN_SKILL);
        }
    }

    /// Starts the cascade. Returns `false` if it already started.
    pub fn trigger(&self, scheduler: &Rc<dyn Scheduler>) -> bool {
        if self.state.get() != RevealState::Pending {
            return false;
        }
        self.state.set(RevealState::Revealing);
        let state = Rc::clone(&self.state);
        stagger(
            scheduler,
            self.items.clone(),
            self.lead_in,
            self.every,
            Rc::new(|item: &dyn Surface| dom::set_styles(item, SHOWN_SKILL)),
            Box::new(move || state.set(RevealState::Done)),
        );
        true
    }
}

type Cascades = Rc<Vec<(Element, SkillCascade)>>;

fn find<'a>(cascades: &'a Cascades, target: &Element) -> Option<&'a SkillCascade> {
    cascades
        .iter()
        .find(|(el, _)| el == target)
        .map(|(_, cascade)| cascade)
}

/// Hides skill items and wires both the generic entrance observer and the
/// per-category cascade observer.
pub fn install(ctx: &PageContext) -> Result<(), PageError> {
    let document = ctx.document();
    let timings = ctx.config().timings;

    let cascades: Cascades = Rc::new(
        dom::query_all(&document, ".skill-category")
            .into_iter()
            .map(|category| {
                let items = dom::query_all_in(&category, ".skill-item")
                    .into_iter()
                    .map(|item| Rc::new(item) as Rc<dyn Surface>)
                    .collect();
                let cascade = SkillCascade::new(items, timings.skill_lead_in, timings.skill_stagger);
                cascade.hide();
                (Element::from(category), cascade)
            })
            .collect(),
    );

    // Fade-ins re-fire on every intersection; only the cascade is one-shot.
    let scheduler = ctx.scheduler();
    let known = Rc::clone(&cascades);
    let entrance = VisibilityObserver::new(Some(ENTRANCE), move |target, _| {
        dom::add_class(target, "animate");
        if let Some(cascade) = find(&known, target) {
            cascade.trigger(&scheduler);
        }
    })?;
    for el in dom::query_all(&document, ENTRANCE_TARGETS) {
        entrance.observe(&el);
    }
    ctx.keep_observer(entrance);

    let scheduler = ctx.scheduler();
    let known = Rc::clone(&cascades);
    let skills = VisibilityObserver::new(None, move |target, observer| {
        if let Some(cascade) = find(&known, target) {
            cascade.trigger(&scheduler);
        }
        observer.unobserve(target);
    })?;
    for (category, _) in cascades.iter() {
        skills.observe(category);
    }
    ctx.keep_observer(skills);

    log::debug!("Entrance animations armed for {} skill categories", cascades.len());
    Ok(())
}
