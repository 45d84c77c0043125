use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::RevealState;
use crate::controller::PageContext;
use crate::error::PageError;
use crate::utils::dom::{self, Surface};
use crate::utils::observer::VisibilityObserver;
use crate::utils::timers::Scheduler;

const HERO_CURSOR: &str = "3px solid var(--primary-color)";
const CODE_CURSOR: &str = "2px solid var(--primary-color)";

/// Hands out ever-longer prefixes of a string, one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// The next prefix, or `None` once the whole text is out.
    pub fn next_frame(&mut self) -> Option<String> {
        if self.shown >= self.chars.len() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }

    pub fn is_finished(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

/// A typewriter bound to an element, with a border "cursor" visible while it
/// types.
pub struct TypingEffect {
    target: Rc<dyn Surface>,
    writer: RefCell<Typewriter>,
    char_delay: u32,
    cursor: &'static str,
    state: Cell<RevealState>,
    me: Weak<TypingEffect>,
}

impl TypingEffect {
    pub fn new(target: Rc<dyn Surface>, text: &str, char_delay: u32, cursor: &'static str) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            target,
            writer: RefCell::new(Typewriter::new(text)),
            char_delay,
            cursor,
            state: Cell::new(RevealState::Pending),
            me: me.clone(),
        })
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    pub fn prepare(&self) {
        self.target.set_text("");
        self.target.set_style("border-right", self.cursor);
    }

    /// Starts typing after `delay` ms. Only the first call has any effect.
    pub fn start(&self, scheduler: Rc<dyn Scheduler>, delay: u32) -> bool {
        if self.state.get() != RevealState::Pending {
            return false;
        }
        self.state.set(RevealState::Revealing);
        let me = self.me.clone();
        let next = Rc::clone(&scheduler);
        scheduler.timeout(
            delay,
            Box::new(move || {
                if let Some(effect) = me.upgrade() {
                    effect.tick(next);
                }
            }),
        );
        true
    }

    fn tick(&self, scheduler: Rc<dyn Scheduler>) {
        let frame = self.writer.borrow_mut().next_frame();
        match frame {
            Some(prefix) => {
                self.target.set_text(&prefix);
                let me = self.me.clone();
                let next = Rc::clone(&scheduler);
                scheduler.timeout(
                    self.char_delay,
                    Box::new(move || {
                        if let Some(effect) = me.upgrade() {
                            effect.tick(next);
                        }
                    }),
                );
            }
            None => {
                self.target.set_style("border-right", "none");
                self.state.set(RevealState::Done);
            }
        }
    }
}

pub fn install_hero(ctx: &PageContext) -> Result<(), PageError> {
    let Some(title) = dom::query_one(&ctx.document(), ".title-name") else {
        log::debug!("No hero title, typing effect skipped");
        return Ok(());
    };
    let timings = ctx.config().timings;
    let text = title.text_content().unwrap_or_default();
    let effect = TypingEffect::new(Rc::new(title), &text, timings.hero_char, HERO_CURSOR);
    effect.prepare();
    effect.start(ctx.scheduler(), timings.hero_typing_delay);
    ctx.keep(effect);
    Ok(())
}

/// Project descriptions type out once each, the first time they scroll in.
pub fn install_descriptions(ctx: &PageContext) -> Result<(), PageError> {
    let timings = ctx.config().timings;
    let descriptions = dom::query_all(&ctx.document(), ".project-description");
    if descriptions.is_empty() {
        return Ok(());
    }

    let effects: Rc<Vec<(web_sys::Element, Rc<TypingEffect>)>> = Rc::new(
        descriptions
            .into_iter()
            .map(|description| {
                let text = description.text_content().unwrap_or_default();
                let effect = TypingEffect::new(
                    Rc::new(description.clone()),
                    &text,
                    timings.description_char,
                    CODE_CURSOR,
                );
                effect.prepare();
                (web_sys::Element::from(description), effect)
            })
            .collect(),
    );

    let scheduler = ctx.scheduler();
    let known = Rc::clone(&effects);
    let observer = VisibilityObserver::new(None, move |target, observer| {
        if let Some((_, effect)) = known.iter().find(|(el, _)| el == target) {
            effect.start(Rc::clone(&scheduler), timings.description_delay);
        }
        observer.unobserve(target);
    })?;
    for (element, _) in effects.iter() {
        observer.observe(element);
    }
    ctx.keep_observer(observer);
    Ok(())
}
