//! Drag-to-resize state machine.
//!
//! `Idle --press on draggable border--> Armed --release/focus loss--> Idle`.
//! While armed, every pointer move rewrites the extent of each cell sharing
//! the dragged border. A double click on a border restores intrinsic sizing
//! without arming.

use tracing::{debug, trace};

use super::draggable_border;
use crate::config::ResizableAxes;
use crate::grid::{CellId, GridIndex};
use crate::host::GridHost;
use crate::types::{Axis, EventOutcome, Length, Point, PointerEvent, SizeProperty};

/// One cell moving with the dragged border.
#[derive(Debug, Clone)]
pub struct Participant<C> {
    pub id: CellId,
    pub cell: C,
    /// Pointer coordinate minus the cell's extent at press time. Each cell
    /// keeps its own offset since participants can start at different sizes.
    pub offset: f64,
}

/// Bookkeeping for an active drag.
#[derive(Debug, Clone)]
pub struct DragSession<C> {
    pub axis: Axis,
    pub participants: Vec<Participant<C>>,
}

impl<C> DragSession<C> {
    pub fn ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.participants.iter().map(|p| p.id)
    }
}

/// Resizes cells by dragging their borders.
#[derive(Debug, Clone)]
pub struct ResizeController<C> {
    axes: ResizableAxes,
    clamp_overflow: bool,
    session: Option<DragSession<C>>,
}

impl<C: Clone + PartialEq> ResizeController<C> {
    /// `clamp_overflow` also pins the max size while dragging, so content is
    /// clipped instead of growing the cell back.
    pub fn new(axes: ResizableAxes, clamp_overflow: bool) -> Self {
        Self {
            axes,
            clamp_overflow,
            session: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession<C>> {
        self.session.as_ref()
    }

    /// Pointer pressed on cell `id`. Arms a drag when the press lands on a
    /// draggable border with the primary button and no modifiers.
    pub fn press<H: GridHost<Cell = C>>(
        &mut self,
        host: &H,
        index: &GridIndex<C>,
        id: CellId,
        event: &PointerEvent,
    ) -> EventOutcome {
        // A new press always discards the previous session.
        self.session = None;

        if !event.is_plain_primary() {
            trace!(button = ?event.button, "press ignored");
            return EventOutcome::IGNORED;
        }
        let Some((edge, ids)) = draggable_border(host, index, id, event, self.axes) else {
            return EventOutcome::IGNORED;
        };

        let axis = edge.axis();
        let pointer = event.screen.along(axis);
        let participants: Vec<Participant<C>> = ids
            .into_iter()
            .filter_map(|id| {
                let cell = index.cell(id)?.clone();
                let extent = host.content_size(&cell).along(axis);
                Some(Participant {
                    id,
                    cell,
                    offset: pointer - extent,
                })
            })
            .collect();

        debug!(?edge, participants = participants.len(), "drag started");
        self.session = Some(DragSession { axis, participants });
        EventOutcome::CONSUMED
    }

    /// Pointer moved anywhere in the window.
    pub fn pointer_move<H: GridHost<Cell = C>>(&self, host: &mut H, screen: Point) -> EventOutcome {
        let Some(session) = &self.session else {
            return EventOutcome::IGNORED;
        };

        let axis = session.axis;
        let pointer = screen.along(axis);
        for participant in &session.participants {
            let extent = Length::Px((pointer - participant.offset).max(0.0));
            host.set_length(&participant.cell, axis, SizeProperty::Size, extent);
            host.set_length(&participant.cell, axis, SizeProperty::Min, extent);
            if self.clamp_overflow {
                host.set_length(&participant.cell, axis, SizeProperty::Max, extent);
            }
        }
        EventOutcome::PREVENTED
    }

    /// Pointer released anywhere in the window.
    pub fn release(&mut self) {
        if self.session.take().is_some() {
            debug!("drag ended");
        }
    }

    /// Window lost focus; treated as a release so a drag cannot stick.
    pub fn focus_lost(&mut self) {
        if self.session.take().is_some() {
            debug!("drag cancelled by focus loss");
        }
    }

    /// Double click on cell `id`. On a draggable border this clears size, min
    /// and max of every cell sharing it, restoring intrinsic sizing.
    pub fn double_activate<H: GridHost<Cell = C>>(
        &mut self,
        host: &mut H,
        index: &GridIndex<C>,
        id: CellId,
        event: &PointerEvent,
    ) -> EventOutcome {
        self.session = None;

        if !event.is_plain_primary() {
            return EventOutcome::IGNORED;
        }
        let Some((edge, ids)) = draggable_border(host, index, id, event, self.axes) else {
            return EventOutcome::IGNORED;
        };

        let axis = edge.axis();
        for cell in ids.into_iter().filter_map(|id| index.cell(id)) {
            for property in SizeProperty::ALL {
                host.set_length(cell, axis, property, Length::Unset);
            }
        }

        debug!(?edge, "reset to intrinsic size");
        EventOutcome::CONSUMED
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::memory::{CellKey, MemoryGrid};
    use crate::types::{Modifiers, PointerButton};

    // | A B |   A is 100 wide, B is 80 wide, both 20 high.
    // | C D |
    fn two_by_two() -> (MemoryGrid, GridIndex<CellKey>) {
        let mut grid = MemoryGrid::new();
        grid.push_row([
            MemoryGrid::cell("A").intrinsic(100.0, 20.0),
            MemoryGrid::cell("B").intrinsic(80.0, 20.0),
        ]);
        grid.push_row([
            MemoryGrid::cell("C").intrinsic(100.0, 20.0),
            MemoryGrid::cell("D").intrinsic(80.0, 20.0),
        ]);
        let index = GridIndex::build(&grid);
        (grid, index)
    }

    fn id(grid: &MemoryGrid, index: &GridIndex<CellKey>, label: &str) -> CellId {
        index.locate(&grid.find(label).unwrap()).unwrap()
    }

    fn width(grid: &MemoryGrid, label: &str) -> Length {
        grid.length(&grid.find(label).unwrap(), Axis::Column, SizeProperty::Size)
    }

    /// Press A's right border at screen x = 500.
    fn right_border_press() -> PointerEvent {
        PointerEvent::primary(Point::new(500.0, 300.0), Point::new(100.0, 10.0))
    }

    fn controller() -> ResizeController<CellKey> {
        ResizeController::new(ResizableAxes::default(), false)
    }

    #[test]
    fn test_press_on_border_arms() {
        let (grid, index) = two_by_two();
        let mut resize = controller();

        let outcome = resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());
        assert_eq!(outcome, EventOutcome::CONSUMED);

        let session = resize.session().unwrap();
        assert_eq!(session.axis, Axis::Column);
        let ids: Vec<CellId> = session.ids().collect();
        assert_eq!(ids, vec![id(&grid, &index, "A"), id(&grid, &index, "C")]);
        assert_eq!(session.participants[0].offset, 400.0);
    }

    #[test]
    fn test_press_inside_cell_does_not_arm() {
        let (grid, index) = two_by_two();
        let mut resize = controller();

        let event = PointerEvent::primary(Point::new(450.0, 300.0), Point::new(50.0, 10.0));
        let outcome = resize.press(&grid, &index, id(&grid, &index, "A"), &event);
        assert!(outcome.is_ignored());
        assert!(!resize.is_armed());
    }

    #[test]
    fn test_move_resizes_all_participants() {
        let (mut grid, index) = two_by_two();
        let mut resize = controller();
        resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());

        let outcome = resize.pointer_move(&mut grid, Point::new(530.0, 0.0));
        assert_eq!(outcome, EventOutcome::PREVENTED);

        for label in ["A", "C"] {
            let key = grid.find(label).unwrap();
            assert_eq!(grid.length(&key, Axis::Column, SizeProperty::Size), Length::Px(130.0));
            assert_eq!(grid.length(&key, Axis::Column, SizeProperty::Min), Length::Px(130.0));
            assert_eq!(grid.length(&key, Axis::Column, SizeProperty::Max), Length::Unset);
        }
        assert_eq!(width(&grid, "B"), Length::Unset);
    }

    #[test]
    fn test_overflow_clamp_pins_max() {
        let (mut grid, index) = two_by_two();
        let mut resize = ResizeController::new(ResizableAxes::default(), true);
        resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());
        resize.pointer_move(&mut grid, Point::new(470.0, 0.0));

        let a = grid.find("A").unwrap();
        assert_eq!(grid.length(&a, Axis::Column, SizeProperty::Max), Length::Px(70.0));
    }

    #[test]
    fn test_offsets_are_per_cell() {
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A").intrinsic(100.0, 20.0)]);
        grid.push_row([MemoryGrid::cell("B").intrinsic(90.0, 20.0)]);
        let index = GridIndex::build(&grid);

        let mut resize = controller();
        resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());
        resize.pointer_move(&mut grid, Point::new(510.0, 0.0));

        assert_eq!(width(&grid, "A"), Length::Px(110.0));
        assert_eq!(width(&grid, "B"), Length::Px(100.0));
    }

    #[test]
    fn test_extent_never_below_zero() {
        let (mut grid, index) = two_by_two();
        let mut resize = controller();
        resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());

        for x in [450.0, 400.0, 350.0, -1000.0] {
            resize.pointer_move(&mut grid, Point::new(x, 0.0));
            let Length::Px(w) = width(&grid, "A") else {
                panic!("width should be set");
            };
            assert!(w >= 0.0);
        }
        assert_eq!(width(&grid, "A"), Length::Px(0.0));
    }

    #[test]
    fn test_row_drag_uses_vertical_coordinate() {
        let (mut grid, index) = two_by_two();
        let mut resize = controller();

        // Bottom border of A at screen y = 300.
        let event = PointerEvent::primary(Point::new(450.0, 300.0), Point::new(50.0, 20.0));
        resize.press(&grid, &index, id(&grid, &index, "A"), &event);
        resize.pointer_move(&mut grid, Point::new(0.0, 315.0));

        for label in ["A", "B"] {
            let key = grid.find(label).unwrap();
            assert_eq!(grid.length(&key, Axis::Row, SizeProperty::Size), Length::Px(35.0));
        }
        assert_eq!(width(&grid, "A"), Length::Unset);
    }

    #[test]
    fn test_move_without_press_is_noop() {
        let (mut grid, _) = two_by_two();
        let resize = controller();

        let outcome = resize.pointer_move(&mut grid, Point::new(530.0, 0.0));
        assert!(outcome.is_ignored());
        assert_eq!(width(&grid, "A"), Length::Unset);
    }

    #[test]
    fn test_release_and_focus_loss_end_session() {
        let (mut grid, index) = two_by_two();
        let mut resize = controller();

        resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());
        resize.release();
        assert!(!resize.is_armed());

        resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());
        resize.focus_lost();
        assert!(!resize.is_armed());
        assert!(resize.pointer_move(&mut grid, Point::new(530.0, 0.0)).is_ignored());
        assert_eq!(width(&grid, "A"), Length::Unset);
    }

    #[test]
    fn test_modifier_or_secondary_button_never_arms() {
        let (grid, index) = two_by_two();
        let mut resize = controller();
        let a = id(&grid, &index, "A");

        let shifted = right_border_press().with_modifiers(Modifiers {
            shift: true,
            ..Modifiers::NONE
        });
        assert!(resize.press(&grid, &index, a, &shifted).is_ignored());

        let secondary = right_border_press().with_button(PointerButton::Secondary);
        assert!(resize.press(&grid, &index, a, &secondary).is_ignored());
        assert!(!resize.is_armed());
    }

    #[test]
    fn test_disabled_axis_never_arms() {
        let (grid, index) = two_by_two();
        let mut resize = ResizeController::new(
            ResizableAxes {
                row: true,
                column: false,
            },
            false,
        );

        let outcome = resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());
        assert!(outcome.is_ignored());
        assert!(!resize.is_armed());
    }

    #[test]
    fn test_new_press_replaces_session() {
        let (grid, index) = two_by_two();
        let mut resize = controller();
        resize.press(&grid, &index, id(&grid, &index, "A"), &right_border_press());

        let bottom = PointerEvent::primary(Point::new(0.0, 300.0), Point::new(10.0, 20.0));
        resize.press(&grid, &index, id(&grid, &index, "B"), &bottom);
        assert_eq!(resize.session().unwrap().axis, Axis::Row);

        // A press that misses every border still discards the old session.
        let inside = PointerEvent::primary(Point::default(), Point::new(10.0, 10.0));
        resize.press(&grid, &index, id(&grid, &index, "B"), &inside);
        assert!(!resize.is_armed());
    }

    #[test]
    fn test_double_activate_restores_unset() {
        let (mut grid, index) = two_by_two();
        let mut resize = ResizeController::new(ResizableAxes::default(), true);
        let a = id(&grid, &index, "A");

        resize.press(&grid, &index, a, &right_border_press());
        resize.pointer_move(&mut grid, Point::new(520.0, 0.0));
        resize.release();

        // A is now 120 wide, so its right border moved with it.
        let on_border = PointerEvent::primary(Point::new(520.0, 300.0), Point::new(120.0, 10.0));
        let outcome = resize.double_activate(&mut grid, &index, a, &on_border);
        assert_eq!(outcome, EventOutcome::CONSUMED);
        assert!(!resize.is_armed());

        for label in ["A", "C"] {
            let key = grid.find(label).unwrap();
            for property in SizeProperty::ALL {
                assert_eq!(grid.length(&key, Axis::Column, property), Length::Unset);
            }
        }
    }

    #[test]
    fn test_double_activate_off_border_is_noop() {
        let (mut grid, index) = two_by_two();
        let mut resize = controller();
        let a = id(&grid, &index, "A");
        let key = grid.find("A").unwrap();
        grid.set_length(&key, Axis::Column, SizeProperty::Size, Length::Px(42.0));

        let inside = PointerEvent::primary(Point::default(), Point::new(10.0, 10.0));
        assert!(resize.double_activate(&mut grid, &index, a, &inside).is_ignored());
        assert_eq!(width(&grid, "A"), Length::Px(42.0));
    }
}
