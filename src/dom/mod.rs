//! The WASM-exported `OSheet` class.
//!
//! `OSheet` wires DOM listeners to a [`Sheet`] over a [`DomTable`]:
//! - per cell: `mousedown` (start drag), `dblclick` (reset size), `mousemove` (cursor)
//! - on the window: `mousemove` (drag), `mouseup`, `focusout` and `blur` (end drag)
//!
//! Listeners are removed when the `OSheet` is dropped or detached.

mod events;
mod table;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlTableElement};

use crate::config::SheetOptions;
use crate::error::Result;
use crate::sheet::Sheet;

use events::{apply_outcome, pointer_event, screen_point, Listener};
pub use table::DomTable;

type SharedSheet = Rc<RefCell<Sheet<DomTable>>>;

#[wasm_bindgen]
pub struct OSheet {
    state: SharedSheet,
    cell_listeners: Vec<Listener>,
    window_listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl OSheet {
    /// Attach editing and resizing to `table`.
    ///
    /// `options` is an optional object with camelCase keys, see `SheetOptions`.
    #[wasm_bindgen(constructor)]
    pub fn new(table: HtmlTableElement, options: JsValue) -> std::result::Result<OSheet, JsValue> {
        console_error_panic_hook::set_once();

        let options = SheetOptions::from_js(options)?;
        let host = DomTable::new(table)?;
        let editable = options
            .editable_selector
            .as_deref()
            .map(|selector| host.selector_predicate(selector))
            .transpose()?;
        let resizable = options
            .resizable_selector
            .as_deref()
            .map(|selector| host.selector_predicate(selector))
            .transpose()?;
        let window = host.window().clone();

        let state = Rc::new(RefCell::new(Sheet::with_predicates(
            host, options, editable, resizable,
        )));

        let mut sheet = OSheet {
            state,
            cell_listeners: Vec::new(),
            window_listeners: Vec::new(),
        };
        sheet.attach_cells()?;
        sheet.attach_window(&window)?;
        Ok(sheet)
    }

    /// Re-read the table after rows or cells were added, removed or had their
    /// spans changed.
    pub fn reindex(&mut self) -> std::result::Result<(), JsValue> {
        self.cell_listeners.clear();
        self.state.borrow_mut().reindex();
        self.attach_cells()?;
        Ok(())
    }

    /// Remove every listener and the editable flag. Sizes already applied stay.
    pub fn detach(&mut self) {
        self.cell_listeners.clear();
        self.window_listeners.clear();
        let mut sheet = self.state.borrow_mut();
        sheet.on_release();
        if sheet.is_editable() {
            sheet.set_editable(false);
        }
    }

    #[wasm_bindgen(js_name = "setEditable")]
    pub fn set_editable(&self, editable: bool) {
        self.state.borrow_mut().set_editable(editable);
    }

    #[wasm_bindgen(js_name = "isResizing")]
    pub fn is_resizing(&self) -> bool {
        self.state.borrow().is_resizing()
    }
}

impl OSheet {
    fn attach_cells(&mut self) -> Result<()> {
        let cells = self.state.borrow().host().cells();
        for cell in cells {
            self.cell_listeners.push(Self::cell_listener(
                &self.state,
                &cell,
                "mousedown",
                |sheet, cell, event| {
                    let pointer = pointer_event(event, cell);
                    let outcome = sheet.on_press(cell, &pointer);
                    apply_outcome(event, outcome);
                },
            )?);
            self.cell_listeners.push(Self::cell_listener(
                &self.state,
                &cell,
                "dblclick",
                |sheet, cell, event| {
                    let pointer = pointer_event(event, cell);
                    let outcome = sheet.on_double_click(cell, &pointer);
                    apply_outcome(event, outcome);
                },
            )?);
            self.cell_listeners.push(Self::cell_listener(
                &self.state,
                &cell,
                "mousemove",
                |sheet, cell, event| {
                    let pointer = pointer_event(event, cell);
                    sheet.on_hover(cell, &pointer);
                },
            )?);
        }
        Ok(())
    }

    fn cell_listener(
        state: &SharedSheet,
        cell: &HtmlElement,
        kind: &'static str,
        handler: fn(&mut Sheet<DomTable>, &HtmlElement, &web_sys::MouseEvent),
    ) -> Result<Listener> {
        let state = Rc::clone(state);
        let target = cell.clone();
        Listener::mouse(cell, kind, move |event| {
            if let Ok(mut sheet) = state.try_borrow_mut() {
                handler(&mut sheet, &target, event);
            }
        })
    }

    fn attach_window(&mut self, window: &web_sys::Window) -> Result<()> {
        {
            let state = Rc::clone(&self.state);
            self.window_listeners
                .push(Listener::mouse(window, "mousemove", move |event| {
                    if let Ok(mut sheet) = state.try_borrow_mut() {
                        let outcome = sheet.on_move(screen_point(event));
                        apply_outcome(event, outcome);
                    }
                })?);
        }
        {
            let state = Rc::clone(&self.state);
            self.window_listeners
                .push(Listener::mouse(window, "mouseup", move |_event| {
                    if let Ok(mut sheet) = state.try_borrow_mut() {
                        sheet.on_release();
                    }
                })?);
        }
        // `focusout` only fires when a focused element loses focus; `blur`
        // covers the window itself losing focus mid-drag.
        for kind in ["focusout", "blur"] {
            let state = Rc::clone(&self.state);
            self.window_listeners
                .push(Listener::new(window, kind, move |_event| {
                    if let Ok(mut sheet) = state.try_borrow_mut() {
                        sheet.on_focus_lost();
                    }
                })?);
        }
        Ok(())
    }
}
