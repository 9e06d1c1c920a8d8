// Progress bars that grow to their target width the first time they scroll into view.

use crate::config::ProgressConfig;
use crate::dom;
use crate::error::EffectsError;
use regex::Regex;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

/// Works out the width a bar should grow to.
pub struct WidthResolver {
    inline_pattern: Regex,
    fallback: String,
}

impl WidthResolver {
    pub fn new(config: &ProgressConfig) -> Result<Self, EffectsError> {
        let inline_pattern = Regex::new(&format!(
            r"{}\s*:\s*([0-9]+%)",
            regex::escape(&config.width_property)
        ))?;
        Ok(WidthResolver {
            inline_pattern,
            fallback: config.fallback_width.clone(),
        })
    }

    /// Prefers the computed custom property, then a `--w: NN%` declaration in the
    /// raw style attribute, then the fallback.
    pub fn resolve(&self, custom_property: Option<&str>, style_attribute: Option<&str>) -> String {
        if let Some(value) = custom_property.filter(|v| !v.is_empty()) {
            return value.to_owned();
        }
        style_attribute
            .and_then(|style| self.inline_pattern.captures(style))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_owned())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Fire-once bookkeeping: each item may be revealed a single time.
#[derive(Debug)]
pub struct Revealer<T> {
    pending: Vec<T>,
}

impl<T: PartialEq> Revealer<T> {
    pub fn new(items: Vec<T>) -> Self {
        Revealer { pending: items }
    }

    /// True the first time `item` is taken; false afterwards or for unknown items.
    pub fn take(&mut self, item: &T) -> bool {
        match self.pending.iter().position(|p| p == item) {
            Some(idx) => {
                self.pending.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.pending.len()
    }
}

fn reveal(el: &HtmlElement, resolver: &WidthResolver, property: &str) {
    let style = el.style();
    let custom = style.get_property_value(property).ok();
    let raw = el.get_attribute("style");
    let width = resolver.resolve(custom.as_deref().map(str::trim), raw.as_deref());
    let _ = style.set_property("width", &width);
}

/// Observes every progress bar and widens each once. Returns how many are watched.
pub fn install(window: &Window, config: ProgressConfig) -> Result<usize, EffectsError> {
    let document = dom::document(window)?;
    let bars: Vec<HtmlElement> = dom::query_all(&document, &config.selector)?;
    let count = bars.len();
    let resolver = WidthResolver::new(&config)?;
    let revealer = Rc::new(RefCell::new(Revealer::new(bars.clone())));
    let property = config.width_property.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(el) = target.clone().dyn_into::<HtmlElement>() {
                    if revealer.borrow_mut().take(&el) {
                        reveal(&el, &resolver, &property);
                    }
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for bar in &bars {
        observer.observe(bar);
    }
    Ok(count)
}
