//! Pointer-driven controllers: drag resize, hover cursor and in-place editing.

pub mod cursor;
pub mod edit;
pub mod resize;

use std::rc::Rc;

pub use cursor::CursorController;
pub use edit::EditController;
pub use resize::{DragSession, Participant, ResizeController};

use crate::config::ResizableAxes;
use crate::grid::{classify, participants, CellId, GridIndex};
use crate::host::GridHost;
use crate::types::{Edge, PointerEvent};

/// Caller-supplied test for whether a cell takes part in a behavior.
pub type CellPredicate<C> = Rc<dyn Fn(&C) -> bool>;

/// Border of cell `id` under the pointer, with the cells sharing it, when
/// that border can be dragged on an enabled axis.
pub(crate) fn draggable_border<H: GridHost>(
    host: &H,
    index: &GridIndex<H::Cell>,
    id: CellId,
    event: &PointerEvent,
    axes: ResizableAxes,
) -> Option<(Edge, Vec<CellId>)> {
    let cell = index.cell(id)?;
    let edge = classify(host.client_size(cell), event)?;
    if !axes.allows(edge.axis()) {
        return None;
    }
    let ids = participants(index, id, edge);
    if ids.is_empty() {
        return None;
    }
    Some((edge, ids))
}
