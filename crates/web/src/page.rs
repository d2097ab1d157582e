//! Page glue: navbar styling, mobile menu, nav links and smooth scrolling.

use storefront_core::StoreConfig;
use storefront_core::nav::{
    ACTIVE_CLASS, closes_menu_on_resize, hamburger_bar_transform, is_in_page_anchor,
    navbar_background, scroll_target_top,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::js_error;

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::warn!(event, error = %js_error(&e), "failed to attach listener");
        return;
    }
    closure.forget();
}

/// All elements matching `selector`, in document order. Invalid selectors match nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

/// Wire every page-level listener.
pub fn install(window: &Window, document: &Document, config: &StoreConfig) {
    install_navbar(window, document, config);
    install_mobile_menu(window, document, config);
    install_nav_links(document);
    install_smooth_scrolling(window, document);
}

/// Apply the navbar background for the current scroll position.
pub fn apply_navbar_style(window: &Window, document: &Document, config: &StoreConfig) {
    let Some(navbar) = query_html(document, ".navbar") else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let _ = navbar
        .style()
        .set_property("background", navbar_background(config, scroll_y));
}

fn install_navbar(window: &Window, document: &Document, config: &StoreConfig) {
    let (w, d, c) = (window.clone(), document.clone(), config.clone());
    listen(window, "scroll", move |_| apply_navbar_style(&w, &d, &c));
}

fn set_menu_open(menu_button: &Element, nav_menu: &Element, open: bool) {
    let classes = nav_menu.class_list();
    let _ = if open {
        classes.add_1(ACTIVE_CLASS)
    } else {
        classes.remove_1(ACTIVE_CLASS)
    };
    if let Ok(bars) = menu_button.query_selector_all(".bar") {
        for index in 0..bars.length() {
            if let Some(bar) = bars.get(index).and_then(|n| n.dyn_into::<Element>().ok()) {
                set_style(&bar, "transform", &hamburger_bar_transform(index as usize, open));
            }
        }
    }
}

fn install_mobile_menu(window: &Window, document: &Document, config: &StoreConfig) {
    let (Some(menu_button), Some(nav_menu)) = (
        document.get_element_by_id("mobile-menu"),
        document.get_element_by_id("nav-menu"),
    ) else {
        return;
    };

    {
        let (button, menu) = (menu_button.clone(), nav_menu.clone());
        listen(&menu_button, "click", move |_| {
            let open = !menu.class_list().contains(ACTIVE_CLASS);
            set_menu_open(&button, &menu, open);
        });
    }

    for link in query_all(document, ".nav-link") {
        let (button, menu) = (menu_button.clone(), nav_menu.clone());
        listen(&link, "click", move |_| set_menu_open(&button, &menu, false));
    }

    let (w, c) = (window.clone(), config.clone());
    listen(window, "resize", move |_| {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        if closes_menu_on_resize(&c, width) {
            let _ = nav_menu.class_list().remove_1(ACTIVE_CLASS);
        }
    });
}

fn install_nav_links(document: &Document) {
    for link in query_all(document, ".nav-link") {
        let d = document.clone();
        listen(&link, "click", move |event| {
            for other in query_all(&d, ".nav-link") {
                let _ = other.class_list().remove_1(ACTIVE_CLASS);
            }
            if let Some(clicked) = event.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                let _ = clicked.class_list().add_1(ACTIVE_CLASS);
            }
        });
    }
}

fn install_smooth_scrolling(window: &Window, document: &Document) {
    for anchor in query_all(document, r##"a[href^="#"]"##) {
        let (w, d, a) = (window.clone(), document.clone(), anchor.clone());
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = a.get_attribute("href").filter(|h| is_in_page_anchor(h)) else {
                return;
            };
            let Some(target) = d.query_selector(&href).ok().flatten() else {
                return;
            };
            let navbar_height = query_html(&d, ".navbar")
                .map(|nav| f64::from(nav.offset_height()))
                .unwrap_or(0.0);
            let top = scroll_target_top(
                target.get_bounding_client_rect().top(),
                w.page_y_offset().unwrap_or(0.0),
                navbar_height,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&options);
        });
    }
}
