// Thin helpers over web-sys for element lookup and long-lived event listeners.

use crate::error::EffectsError;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, EventTarget, Window};

pub fn window() -> Result<Window, EffectsError> {
    web_sys::window().ok_or(EffectsError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, EffectsError> {
    window.document().ok_or(EffectsError::NoDocument)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// All elements matching `selector` that cast to `T`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, EffectsError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect())
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Registers `handler` for `event` on `target` for the rest of the page's life.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EffectsError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but tells the browser the handler never calls `preventDefault`.
pub fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), EffectsError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
