//! Browser tests for the DOM binding. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::cast_possible_truncation
)]

use osheet::dom::DomTable;
use osheet::host::GridHost;
use osheet::types::{Axis, Length, SizeProperty};
use osheet::OSheet;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Event, HtmlTableElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

// | A(rowspan 2) B |
// |              C |
fn table() -> HtmlTableElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let table = document
        .create_element("table")
        .unwrap()
        .dyn_into::<HtmlTableElement>()
        .unwrap();
    table.set_inner_html(
        "<tbody><tr><td rowspan=\"2\">A</td><td colspan=\"x\">B</td></tr><tr><td>C</td></tr></tbody>",
    );
    document.body().unwrap().append_child(&table).unwrap();
    table
}

#[wasm_bindgen_test]
fn test_rows_and_spans() {
    let host = DomTable::new(table()).unwrap();
    let rows = host.rows();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[1].len(), 1);
    assert_eq!(host.declared_span(&rows[0][0], Axis::Row).as_deref(), Some("2"));
    assert_eq!(host.declared_span(&rows[0][1], Axis::Column).as_deref(), Some("x"));
    assert_eq!(host.declared_span(&rows[1][0], Axis::Row), None);
}

#[wasm_bindgen_test]
fn test_row_groups_end_per_section() {
    let document = web_sys::window().unwrap().document().unwrap();
    let table = document
        .create_element("table")
        .unwrap()
        .dyn_into::<HtmlTableElement>()
        .unwrap();
    table.set_inner_html(
        "<thead><tr><th rowspan=\"3\">H</th><th>I</th></tr></thead>\
         <tbody><tr><td>A</td><td>B</td></tr><tr><td>C</td><td>D</td></tr></tbody>",
    );
    let host = DomTable::new(table).unwrap();

    assert_eq!(host.row_group_ends(), vec![1, 3]);
    let index = osheet::grid::GridIndex::build(&host);
    let first_body = index.locate(&host.rows()[1][0]).unwrap();
    assert_eq!(index.placement(first_body).unwrap().origin.col, 0);
}

#[wasm_bindgen_test]
fn test_lengths_round_trip_through_inline_style() {
    let mut host = DomTable::new(table()).unwrap();
    let cell = host.cells()[1].clone();

    host.set_length(&cell, Axis::Column, SizeProperty::Min, Length::Px(42.0));
    assert_eq!(cell.style().get_property_value("min-width").unwrap(), "42px");
    assert_eq!(host.length(&cell, Axis::Column, SizeProperty::Min), Length::Px(42.0));

    host.set_length(&cell, Axis::Column, SizeProperty::Min, Length::Unset);
    assert_eq!(cell.style().get_property_value("min-width").unwrap(), "");
    assert_eq!(host.length(&cell, Axis::Column, SizeProperty::Min), Length::Unset);
}

#[wasm_bindgen_test]
fn test_editable_and_cursor() {
    let mut host = DomTable::new(table()).unwrap();
    let cell = host.cells()[0].clone();

    host.set_editable(&cell, true);
    assert_eq!(cell.content_editable(), "true");
    host.set_editable(&cell, false);
    assert_eq!(cell.content_editable(), "inherit");

    host.set_cursor(&cell, "col-resize");
    assert_eq!(cell.style().get_property_value("cursor").unwrap(), "col-resize");
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_an_error() {
    let host = DomTable::new(table()).unwrap();
    assert!(host.selector_predicate("td[").is_err());
    assert!(host.selector_predicate("td").is_ok());
}

#[wasm_bindgen_test]
fn test_attach_and_detach() {
    let table = table();
    let mut sheet = OSheet::new(table.clone(), JsValue::UNDEFINED).unwrap();
    let first = DomTable::new(table).unwrap().cells()[0].clone();

    assert!(!sheet.is_resizing());
    assert!(first.is_content_editable());

    sheet.reindex().unwrap();
    sheet.detach();
    assert_eq!(first.content_editable(), "inherit");
}

#[wasm_bindgen_test]
fn test_window_blur_cancels_drag() {
    let table = table();
    let cell = DomTable::new(table.clone()).unwrap().cells()[1].clone();
    cell.style().set_property("border", "6px solid black").unwrap();
    let sheet = OSheet::new(table, JsValue::UNDEFINED).unwrap();

    // Press inside B's right border.
    let rect = cell.get_bounding_client_rect();
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x((rect.right() - 3.0) as i32);
    init.set_client_y((rect.top() + rect.height() / 2.0) as i32);
    let press = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap();
    cell.dispatch_event(&press).unwrap();
    assert!(sheet.is_resizing());

    let window = web_sys::window().unwrap();
    window.dispatch_event(&Event::new("blur").unwrap()).unwrap();
    assert!(!sheet.is_resizing());
}
