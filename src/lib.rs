mod utils;
pub mod carousel;
pub mod color;
pub mod config;
pub mod dom;
pub mod error;
pub mod field;
pub mod nav;
pub mod parallax;
pub mod particle;
pub mod progress;
pub mod renderer;
pub mod surface;

use wasm_bindgen::prelude::*;
use web_sys::console;

pub use config::EffectsConfig;
pub use error::EffectsError;

// Use `wee_alloc` as the global allocator when the feature is on
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

fn report<T: std::fmt::Display>(effect: &str, result: Result<T, EffectsError>) {
    match result {
        Ok(summary) => console::log_1(&format!("{}: {}", effect, summary).into()),
        Err(err) => console::warn_1(&format!("{} disabled: {}", effect, err).into()),
    }
}

/// Starts every effect with `config`. Effects are independent: one that cannot
/// find its elements is skipped and logged while the rest still start.
pub fn run(config: EffectsConfig) -> Result<(), EffectsError> {
    utils::set_panic_hook();
    let _timer = Timer::new("neon-effects setup");
    let window = dom::window()?;

    report(
        "particle field",
        renderer::start(&window, config.field).map(|n| format!("{} particles", n)),
    );
    report(
        "parallax",
        parallax::install(&window, config.parallax).map(|n| format!("{} elements", n)),
    );
    report(
        "progress",
        progress::install(&window, config.progress).map(|n| format!("{} bars", n)),
    );
    report(
        "carousel",
        carousel::install(&window, config.carousel).map(|found| {
            if found {
                "wired"
            } else {
                "not on this page"
            }
        }),
    );
    report(
        "nav",
        nav::install(&window, config.nav).map(|n| format!("{} links", n)),
    );
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    run(EffectsConfig::default()).map_err(JsValue::from)
}
