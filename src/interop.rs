//! Bridges to the hosting page.
//!
//! The scoreboard is embedded in a larger page that supplies the countdown
//! overlay and alternate stylesheets. Both hooks degrade to no-ops when the
//! page does not provide their counterpart.

use gloo_utils::{document, window};
use js_sys::{Function, Reflect};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Stylesheet swap for inline `onchange` handlers in the page markup:
/// looks up a `<link>` by id and repoints its `href`.
pub fn changestyle(sheet_id: &str, sheet_value: &str) {
    let Some(element) = document().get_element_by_id(sheet_id) else {
        debug!("no stylesheet link with id {sheet_id}");
        return;
    };
    if element.set_attribute("href", sheet_value).is_err() {
        warn!("could not repoint stylesheet {sheet_id}");
    }
}

/// Attach `changestyle` to `window` so inline markup attributes
/// (`onchange="changestyle('mystyle', value)"`) resolve it by name.
/// A plain wasm export only lands on the module namespace, which inline
/// attributes cannot reach. The closure lives for the page's lifetime.
pub fn install() {
    let hook = Closure::wrap(Box::new(|sheet_id: String, sheet_value: String| {
        changestyle(&sheet_id, &sheet_value);
    }) as Box<dyn Fn(String, String)>);

    let global: JsValue = window().into();
    if Reflect::set(&global, &JsValue::from_str("changestyle"), hook.as_ref()).is_err() {
        warn!("could not install changestyle on window");
    }
    hook.forget();
}

/// Invoke the page-defined `startCountdown` global when present.
pub fn start_countdown() {
    let global: JsValue = window().into();
    match Reflect::get(&global, &JsValue::from_str("startCountdown")) {
        Ok(value) if value.is_function() => {
            let func: Function = value.unchecked_into();
            if func.call0(&JsValue::NULL).is_err() {
                warn!("startCountdown threw");
            }
        }
        _ => debug!("no startCountdown on this page"),
    }
}
