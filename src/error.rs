use thiserror::Error;

/// Reasons a widget could not mount. None of these are fatal to the page: the
/// shell logs them and carries on without the affected widget.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("element #{0} not found")]
    MissingElement(&'static str),

    #[error("2d drawing context unavailable")]
    NoDrawingContext,

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T, E = PortfolioError> = std::result::Result<T, E>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PortfolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PortfolioError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PortfolioError> for wasm_bindgen::JsValue {
    fn from(err: PortfolioError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
