//! Contact form handling.
//!
//! Nothing is actually sent: a valid submission puts the button into a
//! "Sending..." state, waits a fixed latency, then reports success and clears
//! the form.

pub mod form;
pub mod validation;

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::error::ValidationError;
use crate::notifications::{NotificationKind, Notifier};
use crate::utils::timers::Scheduler;

pub use form::install;
pub use validation::{is_valid_email, validate, ContactMessage};

pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

pub trait FormSource {
    fn field(&self, name: &str) -> Option<String>;
    fn reset(&self);
}

pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Sending,
    /// A submission is already in flight.
    Ignored,
}

pub struct ContactForm {
    form: Rc<dyn FormSource>,
    button: Option<Rc<dyn SubmitControl>>,
    notifier: Rc<Notifier>,
    scheduler: Rc<dyn Scheduler>,
    latency: u32,
    in_flight: Cell<bool>,
    me: Weak<ContactForm>,
}

impl ContactForm {
    pub fn new(
        form: Rc<dyn FormSource>,
        button: Option<Rc<dyn SubmitControl>>,
        notifier: Rc<Notifier>,
        scheduler: Rc<dyn Scheduler>,
        latency: u32,
    ) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            form,
            button,
            notifier,
            scheduler,
            latency,
            in_flight: Cell::new(false),
            me: me.clone(),
        })
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.get()
    }

    pub fn submit(&self) -> SubmitOutcome {
        if self.in_flight.get() {
            log::debug!("Submit ignored, previous message still sending");
            return SubmitOutcome::Ignored;
        }

        let checked = validate(
            self.form.field("name"),
            self.form.field("email"),
            self.form.field("message"),
        );
        let message = match checked {
            Ok(message) => message,
            Err(e) => {
                log::info!("Contact form rejected: {}", e);
                self.notifier.display(&e.to_string(), NotificationKind::Error);
                return SubmitOutcome::Rejected(e);
            }
        };

        self.in_flight.set(true);
        let original_label = self.button.as_ref().map(|b| {
            let label = b.label();
            b.set_label(SENDING_LABEL);
            b.set_disabled(true);
            label
        });

        let me = self.me.clone();
        self.scheduler.timeout(
            self.latency,
            Box::new(move || {
                if let Some(this) = me.upgrade() {
                    this.finish(&message, original_label);
                }
            }),
        );
        SubmitOutcome::Sending
    }

    fn finish(&self, message: &ContactMessage, original_label: Option<String>) {
        log::info!(
            "Simulated delivery of {} chars from {}",
            message.message.chars().count(),
            message.email
        );
        self.notifier.display(SENT_MESSAGE, NotificationKind::Success);
        self.form.reset();
        if let (Some(button), Some(label)) = (&self.button, original_label) {
            button.set_label(&label);
            button.set_disabled(false);
        }
        self.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timings;
    use crate::testing::{FakeButton, FakeForm, ManualScheduler, RecordingLayer};

    struct Harness {
        contact: Rc<ContactForm>,
        form: Rc<FakeForm>,
        button: Rc<FakeButton>,
        layer: Rc<RecordingLayer>,
        scheduler: Rc<ManualScheduler>,
    }

    fn harness(fields: &[(&str, &str)]) -> Harness {
        let scheduler = Rc::new(ManualScheduler::default());
        let layer = Rc::new(RecordingLayer::default());
        let notifier = Notifier::new(layer.clone(), scheduler.clone(), &Timings::default());
        let form = Rc::new(FakeForm::with(fields));
        let button = Rc::new(FakeButton::new("Send Message"));
        let contact = ContactForm::new(
            form.clone(),
            Some(button.clone() as Rc<dyn SubmitControl>),
            notifier,
            scheduler.clone(),
            2000,
        );
        Harness { contact, form, button, layer, scheduler }
    }

    #[test]
    fn empty_field_reports_error_without_touching_button() {
        let h = harness(&[("name", "Ada"), ("email", ""), ("message", "Hi")]);

        assert_eq!(h.contact.submit(), SubmitOutcome::Rejected(ValidationError::MissingField));
        let banners = h.layer.mounted();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].kind, NotificationKind::Error);
        assert_eq!(banners[0].message, "Please fill in all fields");
        assert_eq!(h.button.changes(), 0);
    }

    #[test]
    fn absent_field_counts_as_missing() {
        let h = harness(&[("name", "Ada"), ("email", "ada@example.com")]);
        assert_eq!(h.contact.submit(), SubmitOutcome::Rejected(ValidationError::MissingField));
    }

    #[test]
    fn bad_email_reports_error() {
        let h = harness(&[("name", "Ada"), ("email", "ada@example"), ("message", "Hi")]);

        assert_eq!(h.contact.submit(), SubmitOutcome::Rejected(ValidationError::InvalidEmail));
        let banners = h.layer.mounted();
        assert_eq!(banners[0].message, "Please enter a valid email address");
        assert_eq!(banners[0].kind, NotificationKind::Error);
        assert!(!h.button.disabled());
    }

    #[test]
    fn valid_submission_goes_pending_then_succeeds() {
        let h = harness(&[("name", "Ada"), ("email", "ada@example.com"), ("message", "Hi")]);

        assert_eq!(h.contact.submit(), SubmitOutcome::Sending);
        assert!(h.button.disabled());
        assert_eq!(h.button.label(), "Sending...");
        assert!(h.layer.mounted().is_empty());

        h.scheduler.advance(1999);
        assert!(h.contact.is_sending());
        assert!(h.layer.mounted().is_empty());

        h.scheduler.advance(1);
        let banners = h.layer.mounted();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].kind, NotificationKind::Success);
        assert_eq!(banners[0].message, SENT_MESSAGE);
        assert!(h.form.is_blank());
        assert_eq!(h.form.resets(), 1);
        assert!(!h.button.disabled());
        assert_eq!(h.button.label(), "Send Message");
        assert!(!h.contact.is_sending());
    }

    #[test]
    fn resubmitting_while_sending_is_ignored() {
        let h = harness(&[("name", "Ada"), ("email", "ada@example.com"), ("message", "Hi")]);

        assert_eq!(h.contact.submit(), SubmitOutcome::Sending);
        assert_eq!(h.contact.submit(), SubmitOutcome::Ignored);
        h.scheduler.advance(2000);
        assert_eq!(h.button.label(), "Send Message");
        assert_eq!(h.form.resets(), 1);
    }

    #[test]
    fn works_without_a_submit_button() {
        let scheduler = Rc::new(ManualScheduler::default());
        let layer = Rc::new(RecordingLayer::default());
        let notifier = Notifier::new(layer.clone(), scheduler.clone(), &Timings::default());
        let form = Rc::new(FakeForm::with(&[("name", "A"), ("email", "a@b.co"), ("message", "m")]));
        let contact = ContactForm::new(form.clone(), None, notifier, scheduler.clone(), 2000);

        assert_eq!(contact.submit(), SubmitOutcome::Sending);
        scheduler.advance(2000);
        assert!(form.is_blank());
        assert_eq!(layer.mounted()[0].kind, NotificationKind::Success);
    }
}
