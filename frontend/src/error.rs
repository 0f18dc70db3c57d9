use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the browser wiring behind the animation and reveal hooks.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window object")]
    NoWindow,
    #[error("{api} failed: {reason}")]
    Js { api: &'static str, reason: String },
}

impl DomError {
    pub fn js(api: &'static str, value: JsValue) -> Self {
        let reason = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js { api, reason }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown orb state `{0}`")]
pub struct UnknownOrbState(pub String);
