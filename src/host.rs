//! The boundary between osheet and the surface that renders the table.
//!
//! A host owns the cells and their sizing properties. osheet only reads the
//! table's structure, measures boxes, and writes sizing properties, the
//! editable flag and the cursor. [`crate::memory::MemoryGrid`] is the
//! in-memory host; on wasm32 `dom::DomTable` drives a live `<table>`.

use crate::types::{Axis, Length, Size, SizeProperty};

/// Grid-hosting surface.
pub trait GridHost {
    /// Handle to one cell. Handles are compared to find a cell in the index,
    /// so two handles to the same cell must be equal.
    type Cell: Clone + PartialEq;

    /// Rows in document order, each listing its cells in document order.
    fn rows(&self) -> Vec<Vec<Self::Cell>>;

    /// Row index just past the end of each row group (`thead`, `tbody`,
    /// `tfoot`), ascending. A row span never reaches past the end of its
    /// group. Empty when the whole table is one group.
    fn row_group_ends(&self) -> Vec<usize> {
        Vec::new()
    }

    /// Raw declared span on `axis` (`rowspan` for [`Axis::Row`], `colspan`
    /// for [`Axis::Column`]). `None` when nothing is declared.
    fn declared_span(&self, cell: &Self::Cell, axis: Axis) -> Option<String>;

    /// Padding box size, used for border hit testing.
    fn client_size(&self, cell: &Self::Cell) -> Size;

    /// Content box size (client size minus padding), used as the starting
    /// extent of a drag.
    fn content_size(&self, cell: &Self::Cell) -> Size;

    /// Current value of a sizing property.
    fn length(&self, cell: &Self::Cell, axis: Axis, property: SizeProperty) -> Length;

    /// Write a sizing property. [`Length::Unset`] restores intrinsic sizing.
    fn set_length(&mut self, cell: &Self::Cell, axis: Axis, property: SizeProperty, value: Length);

    /// Toggle whether the cell's text can be edited in place.
    fn set_editable(&mut self, cell: &Self::Cell, editable: bool);

    /// Set the cursor shown while hovering the cell.
    fn set_cursor(&mut self, cell: &Self::Cell, cursor: &str);
}
