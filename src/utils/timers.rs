//! Deferred callbacks.
//!
//! Everything that waits goes through [`Scheduler`] so that animation
//! sequences can be driven by a virtual clock in tests and cancelled in bulk
//! on teardown in the browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};

pub trait Scheduler {
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
    fn interval(&self, period_ms: u32, task: Box<dyn FnMut()>);
}

/// Handles of scheduled one-shot timers.
///
/// A handle cannot be dropped while its own callback runs, so a fired handle
/// is parked in `spent` and dropped by the next timer that fires.
pub struct TimeoutBook<H> {
    pending: RefCell<HashMap<u64, H>>,
    spent: RefCell<Option<H>>,
}

impl<H> Default for TimeoutBook<H> {
    fn default() -> Self {
        Self {
            pending: RefCell::new(HashMap::new()),
            spent: RefCell::new(None),
        }
    }
}

impl<H> TimeoutBook<H> {
    pub fn insert(&self, id: u64, handle: H) {
        self.pending.borrow_mut().insert(id, handle);
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn fire(&self, id: u64, task: impl FnOnce()) {
        let current = self.pending.borrow_mut().remove(&id);
        let previous = self.spent.borrow_mut().take();
        drop(previous);
        task();
        *self.spent.borrow_mut() = current;
    }

    /// Drops every handle. Returns how many were still pending.
    pub fn clear(&self) -> usize {
        let pending: Vec<H> = self.pending.borrow_mut().drain().map(|(_, h)| h).collect();
        let count = pending.len();
        drop(pending);
        let spent = self.spent.borrow_mut().take();
        drop(spent);
        count
    }
}

#[derive(Default)]
pub struct BrowserScheduler {
    next_id: Cell<u64>,
    timeouts: Rc<TimeoutBook<Timeout>>,
    intervals: RefCell<Vec<Interval>>,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel_all(&self) {
        let count = self.timeouts.clear();
        let intervals = std::mem::take(&mut *self.intervals.borrow_mut());
        log::debug!("Cancelled {} timeouts and {} intervals", count, intervals.len());
    }
}

impl Scheduler for BrowserScheduler {
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let book = Rc::clone(&self.timeouts);
        let handle = Timeout::new(delay_ms, move || book.fire(id, task));
        self.timeouts.insert(id, handle);
    }

    fn interval(&self, period_ms: u32, task: Box<dyn FnMut()>) {
        let mut task = task;
        let handle = Interval::new(period_ms, move || task());
        self.intervals.borrow_mut().push(handle);
    }
}
