//! Contact form wiring. Submission is simulated; see `storefront_core::contact`.

use std::cell::RefCell;
use std::rc::Rc;

use storefront_core::contact::{ContactSubmission, SENDING_LABEL};
use storefront_core::{
    ContactForm, ContactSubmitter, FormMessage, MessageKind, SimulatedSubmitter, StoreConfig,
};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::page::listen;
use crate::timer::sleep_ms;

pub fn install(document: &Document, config: &StoreConfig) {
    let Some(form) = document
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    let state = Rc::new(RefCell::new(ContactForm::new()));
    let (doc, target, config) = (document.clone(), form.clone(), config.clone());
    listen(&form, "submit", move |event| {
        event.prevent_default();
        if !state.borrow_mut().begin() {
            return;
        }

        let button = target
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let original_label = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();
        if let Some(button) = &button {
            button.set_inner_html(SENDING_LABEL);
            button.set_disabled(true);
        }

        let submission = collect_fields(&target);
        let (state, form, doc) = (Rc::clone(&state), target.clone(), doc.clone());
        let (delay_ms, ttl_ms) = (config.contact_submit_delay_ms, config.form_message_ttl_ms);

        wasm_bindgen_futures::spawn_local(async move {
            let submitter = SimulatedSubmitter::new(delay_ms, sleep_ms);
            let outcome = submitter.submit(&submission).await;
            let message = state.borrow_mut().finish(outcome);

            let shown = show_message(&doc, &form, &message);
            if message.kind == MessageKind::Success {
                form.reset();
            }
            if let Some(button) = &button {
                button.set_inner_html(&original_label);
                button.set_disabled(false);
            }

            sleep_ms(ttl_ms).await;
            if state.borrow_mut().expire(message.token) {
                if let Some(element) = shown {
                    element.remove();
                }
            }
        });
    });
}

fn collect_fields(form: &HtmlFormElement) -> ContactSubmission {
    let controls = form.elements();
    let fields = (0..controls.length())
        .filter_map(|i| controls.item(i))
        .filter_map(|el| {
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                Some((input.name(), input.value()))
            } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
                Some((area.name(), area.value()))
            } else {
                el.dyn_ref::<HtmlSelectElement>().map(|select| (select.name(), select.value()))
            }
        })
        .filter(|(name, _)| !name.is_empty())
        .collect();
    ContactSubmission { fields }
}

/// Replace any previous message with `message`.
fn show_message(document: &Document, form: &HtmlFormElement, message: &FormMessage) -> Option<Element> {
    if let Ok(Some(existing)) = form.query_selector(".form-message") {
        existing.remove();
    }
    let element = document.create_element("div").ok()?;
    element.set_class_name(&message.class_name());
    let _ = element.set_attribute("style", &message.css_text());
    element.set_text_content(Some(&message.text));
    form.append_child(&element).ok()?;
    Some(element)
}
