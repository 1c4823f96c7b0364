//! One attached table: host, derived index and the interaction controllers.
//!
//! `Sheet` is what event listeners call into. It owns the [`IndexCache`], so
//! the index lives exactly as long as the table it describes, and structural
//! edits go through [`Sheet::invalidate_index`] or [`Sheet::reindex`].

use tracing::trace;

use crate::config::SheetOptions;
use crate::grid::{GridIndex, IndexCache};
use crate::host::GridHost;
use crate::interact::{CellPredicate, CursorController, DragSession, EditController, ResizeController};
use crate::types::{CursorHint, EventOutcome, Point, PointerEvent};

/// Editable and resizable behaviors attached to one table.
pub struct Sheet<H: GridHost> {
    host: H,
    options: SheetOptions,
    index: IndexCache<H::Cell>,
    edit: EditController<H::Cell>,
    editable: bool,
    resize: ResizeController<H::Cell>,
    resizable_filter: Option<CellPredicate<H::Cell>>,
    cursor: CursorController,
}

impl<H: GridHost> Sheet<H> {
    /// Attach to `host` with every cell eligible for both behaviors.
    pub fn new(host: H, options: SheetOptions) -> Self {
        Self::with_predicates(host, options, None, None)
    }

    /// Attach to `host`, limiting editing and resizing to the cells the
    /// predicates accept. A `None` predicate accepts every cell.
    pub fn with_predicates(
        host: H,
        options: SheetOptions,
        editable: Option<CellPredicate<H::Cell>>,
        resizable: Option<CellPredicate<H::Cell>>,
    ) -> Self {
        let resize = ResizeController::new(options.resizable_axes, options.allow_overflow_clamp);
        let cursor = CursorController::new(options.resizable_axes, options.default_cursor.clone());
        let mut sheet = Self {
            host,
            index: IndexCache::new(),
            edit: EditController::new(editable),
            editable: false,
            resize,
            resizable_filter: resizable,
            cursor,
            options,
        };
        if sheet.options.editable {
            sheet.set_editable(true);
        }
        sheet
    }

    pub fn options(&self) -> &SheetOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access. Call [`Sheet::reindex`] after structural edits.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The grid index, built on first use after construction or invalidation.
    pub fn index(&mut self) -> &GridIndex<H::Cell> {
        self.index.get_or_build(&self.host)
    }

    /// Forget the index; the next event rebuilds it.
    pub fn invalidate_index(&mut self) {
        self.index.invalidate();
    }

    /// Rebuild after a structural edit and mark any new cells editable.
    pub fn reindex(&mut self) {
        self.index.invalidate();
        if self.editable {
            self.set_editable(true);
        }
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Turn in-place editing on or off. Returns how many cells changed.
    pub fn set_editable(&mut self, editable: bool) -> usize {
        self.editable = editable;
        let index = self.index.get_or_build(&self.host);
        if editable {
            self.edit.apply(&mut self.host, index)
        } else {
            self.edit.clear(&mut self.host, index)
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_armed()
    }

    pub fn drag_session(&self) -> Option<&DragSession<H::Cell>> {
        self.resize.session()
    }

    fn resizes(&self, cell: &H::Cell) -> bool {
        self.options.resizable && self.resizable_filter.as_ref().map_or(true, |f| f(cell))
    }

    /// Pointer pressed on `cell`.
    pub fn on_press(&mut self, cell: &H::Cell, event: &PointerEvent) -> EventOutcome {
        if !self.resizes(cell) {
            self.resize.release();
            return EventOutcome::IGNORED;
        }
        let index = self.index.get_or_build(&self.host);
        let Some(id) = index.locate(cell) else {
            trace!("press on unindexed cell");
            self.resize.release();
            return EventOutcome::IGNORED;
        };
        self.resize.press(&self.host, index, id, event)
    }

    /// Pointer moved anywhere in the window.
    pub fn on_move(&mut self, screen: Point) -> EventOutcome {
        self.resize.pointer_move(&mut self.host, screen)
    }

    /// Pointer released anywhere in the window.
    pub fn on_release(&mut self) {
        self.resize.release();
    }

    /// Window lost focus.
    pub fn on_focus_lost(&mut self) {
        self.resize.focus_lost();
    }

    /// Double click on `cell`.
    pub fn on_double_click(&mut self, cell: &H::Cell, event: &PointerEvent) -> EventOutcome {
        if !self.resizes(cell) {
            self.resize.release();
            return EventOutcome::IGNORED;
        }
        let index = self.index.get_or_build(&self.host);
        let Some(id) = index.locate(cell) else {
            self.resize.release();
            return EventOutcome::IGNORED;
        };
        self.resize.double_activate(&mut self.host, index, id, event)
    }

    /// Pointer moving over `cell`; updates its cursor.
    pub fn on_hover(&mut self, cell: &H::Cell, event: &PointerEvent) -> CursorHint {
        if !self.resizes(cell) {
            return CursorHint::Default;
        }
        let index = self.index.get_or_build(&self.host);
        let Some(id) = index.locate(cell) else {
            return CursorHint::Default;
        };
        self.cursor.hover(&mut self.host, index, id, event)
    }
}
