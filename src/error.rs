use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures when binding to the browser
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    ElementNotFound(String),
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
        };
        Self::Js(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(DomError::NoWindow.to_string(), "no global window");
        assert_eq!(
            DomError::ElementNotFound("mai-reveal-3".into()).to_string(),
            "element #mai-reveal-3 not found"
        );
        assert_eq!(
            DomError::Js("TypeError".into()).to_string(),
            "browser API error: TypeError"
        );
    }
}
