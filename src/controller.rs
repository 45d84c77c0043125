//! The page-wide controller: owns every listener, observer, timer and node the
//! runtime adds, so all of it can be torn down in one go.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::animations::{load, reveal, typewriter};
use crate::config::PageConfig;
use crate::contact;
use crate::effects::{glitch, interactive, matrix, parallax, progress, styles};
use crate::error::PageError;
use crate::navigation::{menu, scroll};
use crate::notifications::{DomNotificationLayer, Notifier};
use crate::utils::events::EventBinding;
use crate::utils::observer::VisibilityObserver;
use crate::utils::random::{browser_rng, SharedRng};
use crate::utils::timers::{BrowserScheduler, Scheduler};

/// Everything a feature leaves behind: values whose drop undoes them (event
/// bindings, observers, animations) and explicit cleanup steps.
#[derive(Default)]
pub struct Registry {
    held: RefCell<Vec<Box<dyn Any>>>,
    cleanups: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl Registry {
    pub fn hold<T: 'static>(&self, item: T) {
        self.held.borrow_mut().push(Box::new(item));
    }

    pub fn on_clear(&self, cleanup: impl FnOnce() + 'static) {
        self.cleanups.borrow_mut().push(Box::new(cleanup));
    }

    pub fn len(&self) -> usize {
        self.held.borrow().len() + self.cleanups.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops held values, then runs cleanups.
    pub fn clear(&self) {
        // Taken out first: a drop may register again.
        let held = std::mem::take(&mut *self.held.borrow_mut());
        drop(held);
        let cleanups = std::mem::take(&mut *self.cleanups.borrow_mut());
        for cleanup in cleanups {
            cleanup();
        }
    }
}

pub struct PageContext {
    window: Window,
    document: Document,
    config: PageConfig,
    scheduler: Rc<BrowserScheduler>,
    rng: SharedRng,
    notifier: Rc<Notifier>,
    registry: Registry,
}

impl PageContext {
    fn new(window: Window, document: Document, config: PageConfig) -> Self {
        let scheduler = Rc::new(BrowserScheduler::new());
        let layer = Rc::new(DomNotificationLayer::new(document.clone()));
        let notifier = Notifier::new(layer, scheduler.clone(), &config.timings);
        Self {
            window,
            document,
            config,
            scheduler,
            rng: browser_rng(),
            notifier,
            registry: Registry::default(),
        }
    }

    pub fn window(&self) -> Window {
        self.window.clone()
    }

    pub fn document(&self) -> Document {
        self.document.clone()
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn scheduler(&self) -> Rc<dyn Scheduler> {
        self.scheduler.clone()
    }

    pub fn rng(&self) -> SharedRng {
        Rc::clone(&self.rng)
    }

    pub fn notifier(&self) -> Rc<Notifier> {
        Rc::clone(&self.notifier)
    }

    pub fn listen<F>(&self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), PageError>
    where
        F: FnMut(Event) + 'static,
    {
        self.registry.hold(EventBinding::new(target, event, handler)?);
        Ok(())
    }

    pub fn keep_observer(&self, observer: VisibilityObserver) {
        self.registry.hold(observer);
    }

    /// Pending timers only hold weak references to animations.
    pub fn keep<T: 'static>(&self, item: Rc<T>) {
        self.registry.hold(item);
    }

    pub fn track_injected(&self, element: Element) {
        self.registry.on_clear(move || element.remove());
    }

    pub fn create_html<T: JsCast>(&self, tag: &str) -> Result<T, PageError> {
        self.document
            .create_element(tag)
            .map_err(PageError::js)?
            .dyn_into::<T>()
            .map_err(|_| PageError::Js(format!("<{}> has an unexpected element type", tag)))
    }

    fn clear(&self) {
        self.scheduler.cancel_all();
        self.notifier.clear();
        let released = self.registry.len();
        self.registry.clear();
        log::debug!("Released {} page resources", released);
    }
}

type Feature = fn(&PageContext) -> Result<(), PageError>;

/// Runs on DOMContentLoaded, in this order.
const READY_FEATURES: &[(&str, Feature)] = &[
    ("mobile menu", menu::install),
    ("scroll tracking", scroll::install),
    ("entrance animations", reveal::install),
    ("hero typing", typewriter::install_hero),
    ("contact form", contact::install),
    ("anchor scrolling", scroll::install_anchors),
    ("parallax", parallax::install),
    ("matrix backdrop", matrix::install),
    ("terminal styling", interactive::install_terminal),
    ("code typing", typewriter::install_descriptions),
    ("hover lift", interactive::install_hover),
    ("icon glitch", glitch::install_icons),
];

const LOAD_FEATURES: &[(&str, Feature)] = &[
    ("hero stagger", load::run_hero_stagger),
    ("title glitch", glitch::install_title),
];

/// Set up as soon as the runtime starts, before the document is ready.
const EAGER_FEATURES: &[(&str, Feature)] = &[
    ("scroll progress", progress::install),
    ("runtime styles", styles::install),
    ("ambient glitch", glitch::install_ambient),
    ("section reveal", load::install_section_reveal),
];

/// What to run right away for a given `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPhases {
    pub ready_now: bool,
    pub load_now: bool,
}

pub fn start_phases(ready_state: &str) -> StartPhases {
    StartPhases {
        ready_now: ready_state != "loading",
        load_now: ready_state == "complete",
    }
}

/// Each phase runs at most once, however many events announce it.
#[derive(Debug, Default)]
pub struct PhaseGate {
    ready: Cell<bool>,
    loaded: Cell<bool>,
}

impl PhaseGate {
    pub fn enter_ready(&self) -> bool {
        !self.ready.replace(true)
    }

    pub fn enter_load(&self) -> bool {
        !self.loaded.replace(true)
    }
}

pub struct PageController {
    ctx: PageContext,
    lifecycle: RefCell<Vec<EventBinding>>,
    gate: PhaseGate,
}

impl PageController {
    pub fn new(window: Window, document: Document, config: PageConfig) -> Rc<Self> {
        Rc::new(Self {
            ctx: PageContext::new(window, document, config),
            lifecycle: RefCell::new(Vec::new()),
            gate: PhaseGate::default(),
        })
    }

    fn run(&self, features: &[(&str, Feature)]) {
        for (name, install) in features {
            match install(&self.ctx) {
                Ok(()) => log::debug!("Installed {}", name),
                Err(e) => log::warn!("Skipping {}: {}", name, e),
            }
        }
    }

    /// Hooks the ready and load phases, running them now if they already
    /// happened.
    pub fn install(self: &Rc<Self>) -> Result<(), PageError> {
        self.run(EAGER_FEATURES);

        let state = self.ctx.document.ready_state();
        let phases = start_phases(&state);
        log::debug!("Starting with readyState {}", state);

        if phases.ready_now {
            self.on_ready();
        } else {
            let me = Rc::downgrade(self);
            let binding = EventBinding::new(&self.ctx.document, "DOMContentLoaded", move |_| {
                if let Some(controller) = me.upgrade() {
                    controller.on_ready();
                }
            })?;
            self.lifecycle.borrow_mut().push(binding);
        }

        if phases.load_now {
            self.on_load();
        } else {
            let me = Rc::downgrade(self);
            let binding = EventBinding::new(&self.ctx.window, "load", move |_| {
                if let Some(controller) = me.upgrade() {
                    controller.on_load();
                }
            })?;
            self.lifecycle.borrow_mut().push(binding);
        }
        Ok(())
    }

    fn on_ready(&self) {
        if !self.gate.enter_ready() {
            return;
        }
        self.run(READY_FEATURES);
        log::info!("Page interactions ready");
    }

    fn on_load(&self) {
        if !self.gate.enter_load() {
            return;
        }
        self.run(LOAD_FEATURES);
        let ratio = self.ctx.config.scroll.section_reveal_ratio;
        load::reveal_sections(&self.ctx.window, &self.ctx.document, ratio);
    }

    /// Drops every listener, observer and timer and removes injected nodes.
    /// Page content the runtime only restyled is left as it is.
    pub fn teardown(&self) {
        self.lifecycle.borrow_mut().clear();
        self.ctx.clear();
        log::info!("Page controller torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_document_waits_for_both_events() {
        assert_eq!(start_phases("loading"), StartPhases { ready_now: false, load_now: false });
    }

    #[test]
    fn interactive_document_is_ready_but_not_loaded() {
        assert_eq!(start_phases("interactive"), StartPhases { ready_now: true, load_now: false });
    }

    #[test]
    fn complete_document_runs_both_phases_now() {
        assert_eq!(start_phases("complete"), StartPhases { ready_now: true, load_now: true });
    }

    #[test]
    fn each_phase_runs_once() {
        let gate = PhaseGate::default();
        assert!(gate.enter_ready());
        assert!(!gate.enter_ready());
        assert!(gate.enter_load());
        assert!(!gate.enter_load());
        assert!(!gate.enter_ready());
    }

    #[test]
    fn load_may_arrive_before_ready() {
        let gate = PhaseGate::default();
        assert!(gate.enter_load());
        assert!(gate.enter_ready());
    }

    #[test]
    fn clear_drops_held_values_and_runs_cleanups_once() {
        let registry = Registry::default();
        let binding = Rc::new(());
        let observer = Rc::new(());
        let removed = Rc::new(Cell::new(0));

        registry.hold(Rc::clone(&binding));
        registry.hold(Rc::clone(&observer));
        let counter = Rc::clone(&removed);
        registry.on_clear(move || counter.set(counter.get() + 1));
        assert_eq!(registry.len(), 3);

        registry.clear();
        assert_eq!(Rc::strong_count(&binding), 1);
        assert_eq!(Rc::strong_count(&observer), 1);
        assert_eq!(removed.get(), 1);
        assert!(registry.is_empty());

        registry.clear();
        assert_eq!(removed.get(), 1);
    }

    #[test]
    fn registry_is_reusable_after_clear() {
        let registry = Registry::default();
        registry.hold(1u8);
        registry.clear();
        let item = Rc::new(());
        registry.hold(Rc::clone(&item));
        assert_eq!(Rc::strong_count(&item), 2);
        registry.clear();
        assert_eq!(Rc::strong_count(&item), 1);
    }
}
