//! Page bootstrap: builds the store context and runs the catalog pipeline.

use std::cell::RefCell;
use std::rc::Rc;

use storefront_core::{LoadState, OptionalWidget, RevealObserver, StoreConfig, StoreContext};

use crate::contact;
use crate::dom::DomGrid;
use crate::fetch::BrowserFetch;
use crate::page::{self, listen, query_all};
use crate::reveal::PageReveal;
use crate::widget::PayhipGlobal;

const GRID_ID: &str = "products-grid";

pub(crate) fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = StoreConfig::default();

    page::install(&window, &document, &config);
    contact::install(&document, &config);

    let reveal = Rc::new(RefCell::new(PageReveal::new(&window, &config)));
    for testimonial in query_all(&document, ".testimonial-card") {
        reveal.borrow_mut().observe(testimonial);
    }

    {
        let (w, d, c) = (window.clone(), document.clone(), config.clone());
        listen(&window, "load", move |_| {
            OptionalWidget::new(PayhipGlobal::detect(&w)).try_initialize();
            page::apply_navbar_style(&w, &d, &c);
        });
    }

    let Some(mut grid) = DomGrid::find(&document, GRID_ID) else {
        tracing::warn!(id = GRID_ID, "product grid not found; skipping catalog");
        return;
    };
    let source = BrowserFetch::new(window);

    wasm_bindgen_futures::spawn_local(async move {
        let mut ctx = StoreContext::new(config);
        if ctx.load(&source, &mut grid).await == LoadState::Ready {
            let cards = ctx.render(&mut grid);
            ctx.animate(&mut *reveal.borrow_mut(), cards);
        }
    });
}
