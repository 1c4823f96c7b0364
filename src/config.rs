//! Per-table options.
//!
//! Options arrive as a JavaScript object or JSON with camelCase keys; every
//! key is optional.
//!
//! ```javascript
//! new OSheet(table, {
//!     resizableSelector: "th",
//!     resizableAxes: { row: false },
//!     allowOverflowClamp: true,
//! });
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::types::Axis;

/// Cursor used when the pointer is not over a draggable border.
pub const DEFAULT_CURSOR: &str = "auto";

/// Which resize axes are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResizableAxes {
    /// Row heights, dragged from top/bottom borders
    pub row: bool,
    /// Column widths, dragged from left/right borders
    pub column: bool,
}

impl Default for ResizableAxes {
    fn default() -> Self {
        Self {
            row: true,
            column: true,
        }
    }
}

impl ResizableAxes {
    pub const fn allows(self, axis: Axis) -> bool {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.column,
        }
    }
}

/// Options for one attached table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetOptions {
    /// Make cells text-editable
    pub editable: bool,
    /// Only cells matching this selector become editable
    pub editable_selector: Option<String>,
    /// Make cell borders draggable
    pub resizable: bool,
    /// Only cells matching this selector start a resize
    pub resizable_selector: Option<String>,
    pub resizable_axes: ResizableAxes,
    /// Also clamp the max size while dragging, so content is clipped instead
    /// of growing the cell
    pub allow_overflow_clamp: bool,
    pub default_cursor: String,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            editable: true,
            editable_selector: None,
            resizable: true,
            resizable_selector: None,
            resizable_axes: ResizableAxes::default(),
            allow_overflow_clamp: false,
            default_cursor: DEFAULT_CURSOR.to_string(),
        }
    }
}

impl SheetOptions {
    /// Parse options from a JSON object.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a key has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode options passed from JavaScript. `undefined`/`null` give defaults.
    ///
    /// # Errors
    /// Returns an error if a key has the wrong type.
    #[cfg(target_arch = "wasm32")]
    pub fn from_js(value: wasm_bindgen::JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::OsheetError;

    #[test]
    fn test_defaults() {
        let options = SheetOptions::default();
        assert!(options.editable);
        assert!(options.resizable);
        assert!(options.resizable_axes.allows(Axis::Row));
        assert!(options.resizable_axes.allows(Axis::Column));
        assert!(!options.allow_overflow_clamp);
        assert_eq!(options.default_cursor, "auto");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SheetOptions::from_json("{}").unwrap(), SheetOptions::default());
    }

    #[test]
    fn test_camel_case_keys() {
        let options = SheetOptions::from_json(
            r#"{
                "editable": false,
                "resizableSelector": "th",
                "resizableAxes": { "row": false },
                "allowOverflowClamp": true,
                "defaultCursor": "cell"
            }"#,
        )
        .unwrap();

        assert!(!options.editable);
        assert_eq!(options.resizable_selector.as_deref(), Some("th"));
        assert!(!options.resizable_axes.allows(Axis::Row));
        assert!(options.resizable_axes.allows(Axis::Column));
        assert!(options.allow_overflow_clamp);
        assert_eq!(options.default_cursor, "cell");
    }

    #[test]
    fn test_resizable_off_keeps_axis_defaults() {
        let options = SheetOptions::from_json(r#"{ "resizable": false }"#).unwrap();
        assert!(!options.resizable);
        assert_eq!(options.resizable_axes, ResizableAxes::default());
    }

    #[test]
    fn test_wrong_type_is_error() {
        let err = SheetOptions::from_json(r#"{ "resizable": "yes" }"#).unwrap_err();
        assert!(matches!(err, OsheetError::Json(_)));
    }
}
