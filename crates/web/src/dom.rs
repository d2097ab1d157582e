//! `#products-grid` as a [`CardContainer`].

use std::cell::RefCell;
use std::rc::Rc;

use storefront_core::card::CARD_CLASS;
use storefront_core::{CardContainer, GridStatus, ProductCard};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlImageElement};

use crate::js_error;

pub struct DomGrid {
    document: Document,
    container: Element,
}

impl DomGrid {
    /// Look up the grid container by element id.
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        let container = document.get_element_by_id(id)?;
        Some(Self {
            document: document.clone(),
            container,
        })
    }

    fn create_card(&self, card: &ProductCard) -> Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.set_class_name(CARD_CLASS);
        element.set_attribute("style", &card.style())?;
        element.set_inner_html(&card.inner_html());
        if let Some(img) = element
            .query_selector("img")?
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            install_image_fallback(&img, card)?;
        }
        self.container.append_child(&element)?;
        Ok(element)
    }
}

/// Swap in the placeholder the first time the image fails; never again.
fn install_image_fallback(img: &HtmlImageElement, card: &ProductCard) -> Result<(), JsValue> {
    let image = Rc::new(RefCell::new(card.image.clone()));
    let target = img.clone();
    let on_error = Closure::<dyn FnMut()>::new(move || {
        let mut image = image.borrow_mut();
        if image.fall_back() {
            target.set_src(image.src());
            target.set_alt(image.alt());
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    img.add_event_listener_with_callback_and_add_event_listener_options(
        "error",
        on_error.as_ref().unchecked_ref(),
        &options,
    )?;
    // Owned by the JS listener from here on.
    let _ = on_error.into_js_value();
    Ok(())
}

impl CardContainer for DomGrid {
    type Handle = Element;

    fn show_status(&mut self, status: GridStatus) {
        self.container.set_inner_html(&status.to_html());
    }

    fn clear(&mut self) {
        self.container.set_inner_html("");
    }

    fn append_card(&mut self, card: &ProductCard) -> Option<Element> {
        match self.create_card(card) {
            Ok(element) => Some(element),
            Err(e) => {
                tracing::warn!(index = card.index, error = %js_error(&e), "failed to create product card");
                None
            }
        }
    }
}
