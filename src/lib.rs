//! osheet - editable, resizable HTML tables via WebAssembly
//!
//! Attaches two behaviors to an existing `<table>`:
//! - In-place text editing of cells
//! - Drag-resizing of rows and columns from any cell border, including
//!   borders shared by cells with `rowspan`/`colspan`
//!
//! Double-clicking a border restores the cells on it to their intrinsic size.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { OSheet } from 'osheet';
//! await init();
//! const sheet = new OSheet(document.querySelector("table"), { allowOverflowClamp: true });
//! // after adding or removing rows:
//! sheet.reindex();
//! ```
//!
//! # Usage (Rust)
//!
//! The core is independent of the browser. Any [`host::GridHost`] can be
//! driven through [`Sheet`]:
//!
//! ```
//! use osheet::memory::MemoryGrid;
//! use osheet::types::{Point, PointerEvent};
//! use osheet::{Sheet, SheetOptions};
//!
//! let mut grid = MemoryGrid::new();
//! let keys = grid.push_row([MemoryGrid::cell("A"), MemoryGrid::cell("B")]);
//! let mut sheet = Sheet::new(grid, SheetOptions::default());
//!
//! // Press A's right border (A is 64px wide) and drag 20px to the right.
//! let press = PointerEvent::primary(Point::new(200.0, 50.0), Point::new(64.0, 5.0));
//! sheet.on_press(&keys[0], &press);
//! sheet.on_move(Point::new(220.0, 50.0));
//! sheet.on_release();
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod host;
pub mod interact;
pub mod memory;
pub mod sheet;
pub mod types;

// Browser binding
#[cfg(target_arch = "wasm32")]
pub mod dom;

use wasm_bindgen::prelude::*;

pub use config::SheetOptions;
pub use error::{OsheetError, Result};
pub use sheet::Sheet;

#[cfg(target_arch = "wasm32")]
pub use dom::OSheet;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
