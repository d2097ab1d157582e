//! The Payhip script global as a [`PurchaseWidget`].

use js_sys::{Function, Reflect};
use storefront_core::{PurchaseWidget, WidgetInit};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::js_error;

/// Handle to `window.Payhip`.
pub struct PayhipGlobal {
    payhip: JsValue,
}

impl PayhipGlobal {
    /// `None` when the script has not been loaded.
    pub fn detect(window: &Window) -> Option<Self> {
        let payhip = Reflect::get(window, &JsValue::from_str("Payhip")).ok()?;
        if payhip.is_undefined() || payhip.is_null() {
            return None;
        }
        Some(Self { payhip })
    }

    /// Preferred entry point first: `Payhip.Button.init`, then `Payhip.init`.
    fn entry_point(&self) -> Option<(JsValue, Function)> {
        let button = Reflect::get(&self.payhip, &JsValue::from_str("Button"))
            .ok()
            .filter(|b| b.is_object());
        button
            .and_then(|b| init_fn(&b).map(|f| (b, f)))
            .or_else(|| init_fn(&self.payhip).map(|f| (self.payhip.clone(), f)))
    }
}

fn init_fn(owner: &JsValue) -> Option<Function> {
    Reflect::get(owner, &JsValue::from_str("init"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

impl PurchaseWidget for PayhipGlobal {
    fn try_initialize(&self) -> WidgetInit {
        match self.entry_point() {
            Some((this, init)) => match init.call0(&this) {
                Ok(_) => WidgetInit::Initialized,
                Err(e) => WidgetInit::Failed(js_error(&e)),
            },
            None => WidgetInit::Failed("no initialization entry point".to_string()),
        }
    }
}
