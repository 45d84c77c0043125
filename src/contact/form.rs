use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement};

use super::{ContactForm, FormSource, SubmitControl, SubmitOutcome};
use crate::controller::PageContext;
use crate::error::PageError;

const FORM_SELECTOR: &str = ".form";
const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

struct DomForm(HtmlFormElement);

impl FormSource for DomForm {
    fn field(&self, name: &str) -> Option<String> {
        FormData::new_with_form(&self.0)
            .ok()
            .and_then(|data| data.get(name).as_string())
    }

    fn reset(&self) {
        self.0.reset();
    }
}

struct DomSubmitButton(HtmlButtonElement);

impl SubmitControl for DomSubmitButton {
    fn label(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_label(&self, label: &str) {
        self.0.set_text_content(Some(label));
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}

pub fn install(ctx: &PageContext) -> Result<(), PageError> {
    let Some(form) = ctx
        .document()
        .query_selector(FORM_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("No contact form on page");
        return Ok(());
    };

    let button = form
        .query_selector(SUBMIT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        .map(|b| Rc::new(DomSubmitButton(b)) as Rc<dyn SubmitControl>);

    let contact = ContactForm::new(
        Rc::new(DomForm(form.clone())),
        button,
        ctx.notifier(),
        ctx.scheduler(),
        ctx.config().timings.submit_latency,
    );

    ctx.listen(&form, "submit", move |event| {
        event.prevent_default();
        if let SubmitOutcome::Rejected(e) = contact.submit() {
            log::debug!("Submission not sent: {:?}", e);
        }
    })?;
    log::debug!("Contact form wired");
    Ok(())
}
