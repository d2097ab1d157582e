//! Scroll reveals driven by `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use storefront_core::card::REVEALED_CLASS;
use storefront_core::{RevealObserver, RevealTracker, StaticReveal, StoreConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::js_error;

const KEY_ATTRIBUTE: &str = "data-reveal-key";

fn mark_revealed(element: Element) {
    let _ = element.class_list().add_1(REVEALED_CLASS);
}

/// The page's single observer instance.
pub struct IntersectionReveal {
    observer: IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker<u32>>>,
    next_key: u32,
}

impl IntersectionReveal {
    pub fn new(config: &StoreConfig) -> Result<Self, JsValue> {
        let options = config.reveal_options();
        let tracker = Rc::new(RefCell::new(RevealTracker::new(options.threshold)));

        let callback_tracker = Rc::clone(&tracker);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(key) = target
                        .get_attribute(KEY_ATTRIBUTE)
                        .and_then(|k| k.parse::<u32>().ok())
                    else {
                        continue;
                    };
                    let revealed = callback_tracker.borrow_mut().record_intersection(
                        &key,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    if revealed {
                        observer.unobserve(&target);
                        mark_revealed(target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        // The observer invokes the callback for the rest of the page's life.
        let _ = callback.into_js_value();

        Ok(Self {
            observer,
            tracker,
            next_key: 0,
        })
    }
}

impl RevealObserver for IntersectionReveal {
    type Target = Element;

    fn observe(&mut self, target: Element) {
        let key = self.next_key;
        self.next_key += 1;
        if target.set_attribute(KEY_ATTRIBUTE, &key.to_string()).is_err() {
            mark_revealed(target);
            return;
        }
        self.tracker.borrow_mut().track(key);
        self.observer.observe(&target);
    }
}

/// Reveal strategy for the page: observe when the browser can, otherwise show
/// everything straight away.
pub enum PageReveal {
    Observer(IntersectionReveal),
    Static(StaticReveal<Element, fn(Element)>),
}

impl PageReveal {
    pub fn new(window: &Window, config: &StoreConfig) -> Self {
        let supported =
            js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if supported {
            match IntersectionReveal::new(config) {
                Ok(reveal) => return Self::Observer(reveal),
                Err(e) => {
                    tracing::warn!(error = %js_error(&e), "IntersectionObserver unusable; revealing statically")
                }
            }
        } else {
            tracing::info!("IntersectionObserver unavailable; revealing statically");
        }
        Self::Static(StaticReveal::new(mark_revealed as fn(Element)))
    }
}

impl RevealObserver for PageReveal {
    type Target = Element;

    fn observe(&mut self, target: Element) {
        match self {
            PageReveal::Observer(reveal) => reveal.observe(target),
            PageReveal::Static(reveal) => reveal.observe(target),
        }
    }
}
