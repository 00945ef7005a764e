use postform_core::ConfigError;
use thiserror::Error;

/// Why the form could not be wired to the page.
///
/// Every variant is a page precondition violation; none is retried.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element `#{id}` not found")]
    MissingElement { id: String },

    #[error("element `#{id}` is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("DOM call failed: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for InstallError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(crate::dom::js_display(&value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<InstallError> for wasm_bindgen::JsValue {
    fn from(error: InstallError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
