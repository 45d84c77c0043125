//! Test doubles for the browser seams.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::contact::{FormSource, SubmitControl};
use crate::notifications::{NotificationId, NotificationKind, NotificationLayer};
use crate::utils::dom::Surface;
use crate::utils::timers::Scheduler;

enum Task {
    Once(Box<dyn FnOnce()>),
    Every(u32, Box<dyn FnMut()>),
}

struct Pending {
    due: u64,
    seq: u64,
    task: Task,
}

/// Virtual clock. Tasks run in due-time order (ties in scheduling order)
/// when the clock is advanced past them.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn push(&self, due: u64, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(Pending { due, seq, task });
    }

    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let earliest = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                earliest.map(|i| queue.remove(i))
            };
            let Some(pending) = next else { break };
            self.now.set(pending.due);
            match pending.task {
                Task::Once(task) => task(),
                Task::Every(period, mut task) => {
                    task();
                    self.push(pending.due + period as u64, Task::Every(period, task));
                }
            }
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.push(self.now.get() + delay_ms as u64, Task::Once(task));
    }

    fn interval(&self, period_ms: u32, task: Box<dyn FnMut()>) {
        self.push(self.now.get() + period_ms as u64, Task::Every(period_ms, task));
    }
}

/// Remembers the latest value of every style property and each text write.
#[derive(Default)]
pub struct RecordingSurface {
    styles: RefCell<HashMap<String, String>>,
    texts: RefCell<Vec<String>>,
}

impl RecordingSurface {
    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub fn text(&self) -> String {
        self.texts.borrow().last().cloned().unwrap_or_default()
    }

    pub fn text_writes(&self) -> Vec<String> {
        self.texts.borrow().clone()
    }
}

impl Surface for RecordingSurface {
    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn set_text(&self, text: &str) {
        self.texts.borrow_mut().push(text.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerEvent {
    Cleared,
    Mounted(NotificationId),
    Shown(NotificationId),
    Hidden(NotificationId),
    Removed(NotificationId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedBanner {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Default)]
pub struct RecordingLayer {
    banners: RefCell<Vec<MountedBanner>>,
    closers: RefCell<HashMap<NotificationId, Rc<dyn Fn()>>>,
    events: RefCell<Vec<LayerEvent>>,
}

impl RecordingLayer {
    pub fn mounted(&self) -> Vec<MountedBanner> {
        self.banners.borrow().clone()
    }

    pub fn events(&self) -> Vec<LayerEvent> {
        self.events.borrow().clone()
    }

    pub fn press_close(&self, id: NotificationId) {
        let closer = self.closers.borrow().get(&id).cloned();
        if let Some(closer) = closer {
            closer();
        }
    }
}

impl NotificationLayer for RecordingLayer {
    fn clear(&self) {
        self.banners.borrow_mut().clear();
        self.closers.borrow_mut().clear();
        self.events.borrow_mut().push(LayerEvent::Cleared);
    }

    fn mount(&self, id: NotificationId, message: &str, kind: NotificationKind, on_close: Box<dyn Fn()>) {
        self.banners.borrow_mut().push(MountedBanner {
            id,
            message: message.to_string(),
            kind,
        });
        self.closers.borrow_mut().insert(id, Rc::from(on_close));
        self.events.borrow_mut().push(LayerEvent::Mounted(id));
    }

    fn set_visible(&self, id: NotificationId, visible: bool) {
        let event = if visible {
            LayerEvent::Shown(id)
        } else {
            LayerEvent::Hidden(id)
        };
        self.events.borrow_mut().push(event);
    }

    fn remove(&self, id: NotificationId) {
        self.banners.borrow_mut().retain(|b| b.id != id);
        self.closers.borrow_mut().remove(&id);
        self.events.borrow_mut().push(LayerEvent::Removed(id));
    }

    fn is_mounted(&self, id: NotificationId) -> bool {
        self.banners.borrow().iter().any(|b| b.id == id)
    }
}

#[derive(Default)]
pub struct FakeForm {
    fields: RefCell<HashMap<String, String>>,
    resets: Cell<usize>,
}

impl FakeForm {
    pub fn with(fields: &[(&str, &str)]) -> Self {
        let form = Self::default();
        for (name, value) in fields {
            form.fields
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }
        form
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }

    pub fn is_blank(&self) -> bool {
        self.fields.borrow().values().all(|v| v.is_empty())
    }
}

impl FormSource for FakeForm {
    fn field(&self, name: &str) -> Option<String> {
        self.fields.borrow().get(name).cloned()
    }

    fn reset(&self) {
        for value in self.fields.borrow_mut().values_mut() {
            value.clear();
        }
        self.resets.set(self.resets.get() + 1);
    }
}

pub struct FakeButton {
    label: RefCell<String>,
    disabled: Cell<bool>,
    changes: Cell<usize>,
}

impl FakeButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: RefCell::new(label.to_string()),
            disabled: Cell::new(false),
            changes: Cell::new(0),
        }
    }

    pub fn disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn changes(&self) -> usize {
        self.changes.get()
    }
}

impl SubmitControl for FakeButton {
    fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
        self.changes.set(self.changes.get() + 1);
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.changes.set(self.changes.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_scheduler_runs_in_due_order() {
        let scheduler = Rc::new(ManualScheduler::default());
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, tag) in [(30, "c"), (10, "a"), (10, "b")] {
            let log = log.clone();
            scheduler.timeout(delay, Box::new(move || log.borrow_mut().push(tag)));
        }
        scheduler.advance(30);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn manual_scheduler_runs_tasks_scheduled_by_tasks() {
        let scheduler = Rc::new(ManualScheduler::default());
        let hits = Rc::new(Cell::new(0));

        let inner_scheduler = scheduler.clone();
        let inner_hits = hits.clone();
        scheduler.timeout(
            5,
            Box::new(move || {
                inner_scheduler.timeout(5, Box::new(move || inner_hits.set(inner_hits.get() + 1)));
            }),
        );
        scheduler.advance(9);
        assert_eq!(hits.get(), 0);
        scheduler.advance(1);
        assert_eq!(hits.get(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn intervals_repeat() {
        let scheduler = ManualScheduler::default();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        scheduler.interval(100, Box::new(move || counter.set(counter.get() + 1)));
        scheduler.advance(350);
        assert_eq!(hits.get(), 3);
        assert_eq!(scheduler.now(), 350);
    }
}
