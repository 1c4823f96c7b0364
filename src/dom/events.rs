//! Translation between native mouse events and the controllers' event model.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement, MouseEvent};

use crate::error::{OsheetError, Result};
use crate::types::{EventOutcome, Modifiers, Point, PointerButton, PointerEvent};

/// Pointer event for a listener attached to `cell`.
pub(crate) fn pointer_event(event: &MouseEvent, cell: &HtmlElement) -> PointerEvent {
    let on_target = event
        .target()
        .is_some_and(|target| target.dyn_ref::<HtmlElement>() == Some(cell));

    PointerEvent {
        button: PointerButton::from(event.button()),
        modifiers: modifiers(event),
        screen: screen_point(event),
        offset: Point::new(f64::from(event.offset_x()), f64::from(event.offset_y())),
        on_target,
    }
}

pub(crate) fn screen_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.screen_x()), f64::from(event.screen_y()))
}

fn modifiers(event: &MouseEvent) -> Modifiers {
    Modifiers {
        alt: event.alt_key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
    }
}

pub(crate) fn apply_outcome(event: &Event, outcome: EventOutcome) {
    if outcome.prevent_default {
        event.prevent_default();
    }
    if outcome.stop_propagation {
        event.stop_propagation();
    }
}

/// A registered event listener, removed again when dropped.
pub(crate) struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub(crate) fn new(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| OsheetError::Host(format!("{kind} listener: {e:?}")))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Listener receiving only mouse events.
    pub(crate) fn mouse(
        target: &EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(&MouseEvent) + 'static,
    ) -> Result<Self> {
        Self::new(target, kind, move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                handler(event);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
