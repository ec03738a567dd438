use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("couldn't schedule timer: {0}")]
    Timer(String),
    #[error("document element unavailable")]
    NoDocument,
    #[error("couldn't update document styling: {0}")]
    Dom(String),
}

impl SiteError {
    pub(crate) fn timer(err: wasm_bindgen::JsValue) -> Self {
        Self::Timer(format!("{err:?}"))
    }

    pub(crate) fn dom(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{err:?}"))
    }
}
