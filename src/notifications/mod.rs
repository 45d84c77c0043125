//! Toast-style banners in the top-right corner.
//!
//! At most one banner exists at a time: showing a new one removes the old one
//! on the spot, without its exit slide.

pub mod layer;

use std::cell::Cell;
use std::rc::{Rc, Weak};

use serde::Deserialize;

use crate::config::Timings;
use crate::utils::timers::Scheduler;

pub use layer::DomNotificationLayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#00ff88",
            NotificationKind::Error => "#ff6b35",
            NotificationKind::Info => "#00d4ff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

/// Where banners physically live. The DOM implementation builds the banner
/// markup; tests record calls.
pub trait NotificationLayer {
    fn clear(&self);
    /// Inserts a banner, parked off-screen. `on_close` runs when the close
    /// button is pressed.
    fn mount(&self, id: NotificationId, message: &str, kind: NotificationKind, on_close: Box<dyn Fn()>);
    fn set_visible(&self, id: NotificationId, visible: bool);
    fn remove(&self, id: NotificationId);
    fn is_mounted(&self, id: NotificationId) -> bool;
}

pub struct Notifier {
    layer: Rc<dyn NotificationLayer>,
    scheduler: Rc<dyn Scheduler>,
    enter_delay: u32,
    slide: u32,
    auto_dismiss: u32,
    next_id: Cell<u64>,
    me: Weak<Notifier>,
}

impl Notifier {
    pub fn new(layer: Rc<dyn NotificationLayer>, scheduler: Rc<dyn Scheduler>, timings: &Timings) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            layer,
            scheduler,
            enter_delay: timings.notification_enter,
            slide: timings.notification_slide,
            auto_dismiss: timings.notification_dismiss,
            next_id: Cell::new(0),
            me: me.clone(),
        })
    }

    /// Shows `message`, evicting whatever banner is currently up.
    pub fn display(&self, message: &str, kind: NotificationKind) -> NotificationId {
        self.layer.clear();

        let id = NotificationId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let me = self.me.clone();
        self.layer.mount(
            id,
            message,
            kind,
            Box::new(move || {
                if let Some(notifier) = me.upgrade() {
                    notifier.dismiss(id);
                }
            }),
        );
        log::debug!("Showing {} notification {:?}", kind.as_str(), id);

        let layer = Rc::clone(&self.layer);
        self.scheduler.timeout(
            self.enter_delay,
            Box::new(move || {
                if layer.is_mounted(id) {
                    layer.set_visible(id, true);
                }
            }),
        );

        let me = self.me.clone();
        self.scheduler.timeout(
            self.auto_dismiss,
            Box::new(move || {
                if let Some(notifier) = me.upgrade() {
                    if notifier.layer.is_mounted(id) {
                        notifier.dismiss(id);
                    }
                }
            }),
        );
        id
    }

    pub fn clear(&self) {
        self.layer.clear();
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.layer.set_visible(id, false);
        let layer = Rc::clone(&self.layer);
        self.scheduler.timeout(self.slide, Box::new(move || layer.remove(id)));
    }
}
