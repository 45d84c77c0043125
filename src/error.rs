use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    #[error("No global window available")]
    MissingWindow,
    #[error("Window has no document")]
    MissingDocument,
    #[error("Browser call failed: {0}")]
    Js(String),
    #[error("Invalid page config: {0}")]
    Config(String),
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl PageError {
    /// Wraps a rejected browser call. `JsValue`s have no stable `Display`,
    /// so the debug rendering is kept instead.
    pub fn js(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for PageError {
    fn from(e: serde_json::Error) -> Self {
        PageError::Config(e.to_string())
    }
}

impl From<PageError> for JsValue {
    fn from(e: PageError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Reasons a contact form submission is rejected before sending.
///
/// The `Display` text is shown to the visitor as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}
