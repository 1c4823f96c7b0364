//! `GridHost` over a live `<table>` element.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlTableElement, Window};

use crate::error::{OsheetError, Result};
use crate::host::GridHost;
use crate::interact::CellPredicate;
use crate::types::{Axis, Length, Size, SizeProperty};

/// Rows of the table's own sections (`thead`, `tbody`, `tfoot`), not of
/// nested tables.
const ROW_SELECTOR: &str = ":scope > * > tr";
const CELL_SELECTOR: &str = ":scope > *";
const SECTION_SELECTOR: &str = ":scope > *";
const SECTION_ROW_SELECTOR: &str = ":scope > tr";

pub struct DomTable {
    table: HtmlTableElement,
    window: Window,
}

impl DomTable {
    pub fn new(table: HtmlTableElement) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| OsheetError::Host("no window".into()))?;
        Ok(Self { table, window })
    }

    pub fn element(&self) -> &HtmlTableElement {
        &self.table
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Every cell in document order.
    pub fn cells(&self) -> Vec<HtmlElement> {
        self.rows().into_iter().flatten().collect()
    }

    /// Predicate matching cells against a CSS selector.
    ///
    /// # Errors
    /// Returns an error if the selector does not parse.
    pub fn selector_predicate(&self, selector: &str) -> Result<CellPredicate<HtmlElement>> {
        self.table
            .query_selector(selector)
            .map_err(|e| OsheetError::Host(format!("invalid selector {selector:?}: {e:?}")))?;
        let selector = selector.to_string();
        Ok(Rc::new(move |cell: &HtmlElement| {
            cell.matches(&selector).unwrap_or(false)
        }))
    }

    fn padding(&self, cell: &HtmlElement, sides: [&str; 2]) -> f64 {
        let Ok(Some(computed)) = self.window.get_computed_style(cell) else {
            return 0.0;
        };
        sides
            .iter()
            .filter_map(|side| computed.get_property_value(side).ok())
            .filter_map(|value| parse_px(&value))
            .sum()
    }
}

fn query_all(parent: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Parse a CSS pixel length such as `"12.5px"`.
fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    value.strip_suffix("px").unwrap_or(value).trim().parse().ok()
}

impl GridHost for DomTable {
    type Cell = HtmlElement;

    fn rows(&self) -> Vec<Vec<HtmlElement>> {
        query_all(&self.table, ROW_SELECTOR)
            .iter()
            .map(|tr| query_all(tr, CELL_SELECTOR))
            .collect()
    }

    fn row_group_ends(&self) -> Vec<usize> {
        query_all(&self.table, SECTION_SELECTOR)
            .iter()
            .map(|section| query_all(section, SECTION_ROW_SELECTOR).len())
            .filter(|&rows| rows > 0)
            .scan(0, |end, rows| {
                *end += rows;
                Some(*end)
            })
            .collect()
    }

    fn declared_span(&self, cell: &HtmlElement, axis: Axis) -> Option<String> {
        match axis {
            Axis::Row => cell.get_attribute("rowspan"),
            Axis::Column => cell.get_attribute("colspan"),
        }
    }

    fn client_size(&self, cell: &HtmlElement) -> Size {
        Size::new(f64::from(cell.client_width()), f64::from(cell.client_height()))
    }

    fn content_size(&self, cell: &HtmlElement) -> Size {
        let client = self.client_size(cell);
        Size::new(
            client.width - self.padding(cell, ["padding-left", "padding-right"]),
            client.height - self.padding(cell, ["padding-top", "padding-bottom"]),
        )
    }

    fn length(&self, cell: &HtmlElement, axis: Axis, property: SizeProperty) -> Length {
        cell.style()
            .get_property_value(property.css_name(axis))
            .ok()
            .and_then(|value| parse_px(&value))
            .map_or(Length::Unset, Length::Px)
    }

    fn set_length(&mut self, cell: &HtmlElement, axis: Axis, property: SizeProperty, value: Length) {
        let style = cell.style();
        let name = property.css_name(axis);
        let _ = match value {
            Length::Px(px) => style.set_property(name, &format!("{px}px")),
            Length::Unset => style.remove_property(name).map(drop),
        };
    }

    fn set_editable(&mut self, cell: &HtmlElement, editable: bool) {
        cell.set_content_editable(if editable { "true" } else { "inherit" });
    }

    fn set_cursor(&mut self, cell: &HtmlElement, cursor: &str) {
        let _ = cell.style().set_property("cursor", cursor);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_parse_px() {
        assert_eq!(parse_px("12px"), Some(12.0));
        assert_eq!(parse_px(" 3.5px "), Some(3.5));
        assert_eq!(parse_px("0"), Some(0.0));
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("auto"), None);
    }
}
