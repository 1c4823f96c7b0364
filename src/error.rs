//! Structured error types for osheet.
//!
//! Only construction can fail: decoding options and reaching into the host
//! document. Pointer handlers never return errors.

/// All errors that can occur while attaching osheet to a table.
#[derive(Debug, thiserror::Error)]
pub enum OsheetError {
    /// Options object could not be decoded.
    #[error("Invalid options: {0}")]
    Config(String),

    /// Options JSON could not be parsed.
    #[error("Options JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The host document rejected an operation (missing window, bad selector, ...).
    #[error("Host error: {0}")]
    Host(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OsheetError>;

impl From<String> for OsheetError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for OsheetError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<OsheetError> for wasm_bindgen::JsValue {
    fn from(e: OsheetError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<serde_wasm_bindgen::Error> for OsheetError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            OsheetError::Config("bad axis".into()).to_string(),
            "Invalid options: bad axis"
        );
        assert_eq!(
            OsheetError::Host("no window".into()).to_string(),
            "Host error: no window"
        );
        assert_eq!(OsheetError::from("plain").to_string(), "plain");
    }

    #[test]
    fn test_json_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: OsheetError = err.into();
        assert!(matches!(err, OsheetError::Json(_)));
    }
}
