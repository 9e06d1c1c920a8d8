use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons an effect could not be set up. Once running, effects never fail.
#[derive(Debug, Error)]
pub enum EffectsError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("element `{id}` is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("canvas 2d context unavailable")]
    NoContext,
    #[error("invalid width pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EffectsError {
    fn from(value: JsValue) -> Self {
        EffectsError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<EffectsError> for JsValue {
    fn from(err: EffectsError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
