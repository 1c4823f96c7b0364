//! Hover feedback.
//!
//! Purely advisory: the resize controller re-derives drag eligibility on
//! press and never looks at the cursor.

use super::draggable_border;
use crate::config::ResizableAxes;
use crate::grid::{CellId, GridIndex};
use crate::host::GridHost;
use crate::types::{Axis, CursorHint, PointerEvent};

#[derive(Debug, Clone)]
pub struct CursorController {
    axes: ResizableAxes,
    default_cursor: String,
}

impl CursorController {
    pub fn new(axes: ResizableAxes, default_cursor: impl Into<String>) -> Self {
        Self {
            axes,
            default_cursor: default_cursor.into(),
        }
    }

    /// Cursor for the pointer over cell `id`. Never a resize cursor while a
    /// modifier key is held.
    pub fn hint<H: GridHost>(
        &self,
        host: &H,
        index: &GridIndex<H::Cell>,
        id: CellId,
        event: &PointerEvent,
    ) -> CursorHint {
        if event.modifiers.any() {
            return CursorHint::Default;
        }
        match draggable_border(host, index, id, event, self.axes) {
            Some((edge, _)) => match edge.axis() {
                Axis::Row => CursorHint::RowResize,
                Axis::Column => CursorHint::ColResize,
            },
            None => CursorHint::Default,
        }
    }

    /// Compute the hint and write it onto the cell, resetting to the default
    /// cursor first.
    pub fn hover<H: GridHost>(
        &self,
        host: &mut H,
        index: &GridIndex<H::Cell>,
        id: CellId,
        event: &PointerEvent,
    ) -> CursorHint {
        let hint = self.hint(host, index, id, event);
        if let Some(cell) = index.cell(id) {
            host.set_cursor(cell, hint.css(&self.default_cursor));
        }
        hint
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::memory::{CellKey, MemoryGrid};
    use crate::types::{Modifiers, Point};

    // | A B |
    // | C D |
    fn grid() -> (MemoryGrid, GridIndex<CellKey>) {
        let grid = MemoryGrid::from_spans(&[vec![(1, 1), (1, 1)], vec![(1, 1), (1, 1)]]);
        let index = GridIndex::build(&grid);
        (grid, index)
    }

    fn at(x: f64, y: f64) -> PointerEvent {
        PointerEvent::primary(Point::default(), Point::new(x, y))
    }

    fn id(grid: &MemoryGrid, index: &GridIndex<CellKey>, label: &str) -> CellId {
        index.locate(&grid.find(label).unwrap()).unwrap()
    }

    #[test]
    fn test_hints_per_edge() {
        let (grid, index) = grid();
        let cursor = CursorController::new(ResizableAxes::default(), "auto");
        let d = id(&grid, &index, "r1c1");

        assert_eq!(cursor.hint(&grid, &index, d, &at(10.0, -1.0)), CursorHint::RowResize);
        assert_eq!(cursor.hint(&grid, &index, d, &at(-1.0, 10.0)), CursorHint::ColResize);
        assert_eq!(cursor.hint(&grid, &index, d, &at(64.0, 10.0)), CursorHint::ColResize);
        assert_eq!(cursor.hint(&grid, &index, d, &at(10.0, 20.0)), CursorHint::RowResize);
        assert_eq!(cursor.hint(&grid, &index, d, &at(10.0, 10.0)), CursorHint::Default);
    }

    #[test]
    fn test_top_of_first_row_needs_neighbor() {
        let (grid, index) = grid();
        let cursor = CursorController::new(ResizableAxes::default(), "auto");
        let a = id(&grid, &index, "r0c0");

        assert_eq!(cursor.hint(&grid, &index, a, &at(10.0, -1.0)), CursorHint::Default);
        assert_eq!(cursor.hint(&grid, &index, a, &at(-1.0, 10.0)), CursorHint::Default);
    }

    #[test]
    fn test_modifier_keeps_default() {
        let (mut grid, index) = grid();
        let cursor = CursorController::new(ResizableAxes::default(), "auto");
        let d = id(&grid, &index, "r1c1");

        let event = at(64.0, 10.0).with_modifiers(Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        });
        assert_eq!(cursor.hover(&mut grid, &index, d, &event), CursorHint::Default);
        assert_eq!(grid.cursor(grid.find("r1c1").unwrap()), Some("auto"));
    }

    #[test]
    fn test_hover_writes_css_and_resets() {
        let (mut grid, index) = grid();
        let cursor = CursorController::new(ResizableAxes::default(), "cell");
        let d = id(&grid, &index, "r1c1");
        let key = grid.find("r1c1").unwrap();

        cursor.hover(&mut grid, &index, d, &at(64.0, 10.0));
        assert_eq!(grid.cursor(key), Some("col-resize"));

        cursor.hover(&mut grid, &index, d, &at(10.0, 10.0));
        assert_eq!(grid.cursor(key), Some("cell"));
    }

    #[test]
    fn test_disabled_axis_has_no_hint() {
        let (grid, index) = grid();
        let cursor = CursorController::new(
            ResizableAxes {
                row: false,
                column: true,
            },
            "auto",
        );
        let d = id(&grid, &index, "r1c1");

        assert_eq!(cursor.hint(&grid, &index, d, &at(10.0, 20.0)), CursorHint::Default);
        assert_eq!(cursor.hint(&grid, &index, d, &at(64.0, 10.0)), CursorHint::ColResize);
    }
}
