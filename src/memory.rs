//! In-memory grid host.
//!
//! `MemoryGrid` keeps a table's structure and each cell's sizing properties
//! in plain Rust values. It backs the native test suite and benches, and suits
//! embedders that render tables themselves.
//!
//! Sizing follows the DOM closely enough for drag arithmetic: a cell's
//! content box is its explicit size when one is set, otherwise its intrinsic
//! size, clamped by explicit min/max. The client box adds padding on both
//! sides.

use std::collections::HashMap;

use crate::host::GridHost;
use crate::types::{Axis, Length, Size, SizeProperty};

/// Default intrinsic content size of a cell.
pub const DEFAULT_CELL_SIZE: Size = Size {
    width: 64.0,
    height: 20.0,
};

/// Handle to a cell of a [`MemoryGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(usize);

/// One cell's declared structure and current sizing state.
#[derive(Debug, Clone)]
pub struct MemoryCell {
    pub label: String,
    pub row_span: Option<String>,
    pub col_span: Option<String>,
    /// Content size the cell takes with no explicit sizing
    pub intrinsic: Size,
    /// Padding applied on each side
    pub padding: f64,
    pub lengths: HashMap<(Axis, SizeProperty), f64>,
    pub editable: bool,
    pub cursor: Option<String>,
}

impl MemoryCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            row_span: None,
            col_span: None,
            intrinsic: DEFAULT_CELL_SIZE,
            padding: 0.0,
            lengths: HashMap::new(),
            editable: false,
            cursor: None,
        }
    }

    #[must_use]
    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = Some(span.to_string());
        self
    }

    #[must_use]
    pub fn col_span(mut self, span: usize) -> Self {
        self.col_span = Some(span.to_string());
        self
    }

    /// Declare a row span verbatim, the way an attribute would hold it.
    #[must_use]
    pub fn raw_row_span(mut self, raw: &str) -> Self {
        self.row_span = Some(raw.to_string());
        self
    }

    #[must_use]
    pub fn raw_col_span(mut self, raw: &str) -> Self {
        self.col_span = Some(raw.to_string());
        self
    }

    #[must_use]
    pub fn intrinsic(mut self, width: f64, height: f64) -> Self {
        self.intrinsic = Size::new(width, height);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    fn content_along(&self, axis: Axis) -> f64 {
        let get = |property: SizeProperty| self.lengths.get(&(axis, property)).copied();
        let mut value = get(SizeProperty::Size).unwrap_or_else(|| self.intrinsic.along(axis));
        if let Some(max) = get(SizeProperty::Max) {
            value = value.min(max);
        }
        if let Some(min) = get(SizeProperty::Min) {
            value = value.max(min);
        }
        value
    }
}

/// A table held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    cells: Vec<MemoryCell>,
    rows: Vec<Vec<CellKey>>,
    group_ends: Vec<usize>,
}

impl MemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for [`MemoryCell::new`].
    pub fn cell(label: impl Into<String>) -> MemoryCell {
        MemoryCell::new(label)
    }

    /// Build a grid from `(row_span, col_span)` pairs, one slice per row.
    /// Cells are labelled `r{row}c{position}`.
    pub fn from_spans(rows: &[Vec<(usize, usize)>]) -> Self {
        let mut grid = Self::new();
        for (r, row) in rows.iter().enumerate() {
            grid.push_row(row.iter().enumerate().map(|(i, &(row_span, col_span))| {
                MemoryCell::new(format!("r{r}c{i}"))
                    .row_span(row_span)
                    .col_span(col_span)
            }));
        }
        grid
    }

    /// Append a row. Returns the new cells' keys in order.
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = MemoryCell>) -> Vec<CellKey> {
        let keys: Vec<CellKey> = cells
            .into_iter()
            .map(|cell| {
                self.cells.push(cell);
                CellKey(self.cells.len() - 1)
            })
            .collect();
        self.rows.push(keys.clone());
        keys
    }

    /// Close the current row group; later rows start a new one. Row spans
    /// never cross a group boundary.
    pub fn end_row_group(&mut self) {
        let end = self.rows.len();
        if self.group_ends.last() != Some(&end) {
            self.group_ends.push(end);
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// First cell with the given label.
    pub fn find(&self, label: &str) -> Option<CellKey> {
        self.cells
            .iter()
            .position(|c| c.label == label)
            .map(CellKey)
    }

    pub fn get(&self, key: CellKey) -> Option<&MemoryCell> {
        self.cells.get(key.0)
    }

    pub fn get_mut(&mut self, key: CellKey) -> Option<&mut MemoryCell> {
        self.cells.get_mut(key.0)
    }

    /// Cursor last set on the cell.
    pub fn cursor(&self, key: CellKey) -> Option<&str> {
        self.get(key).and_then(|c| c.cursor.as_deref())
    }

    pub fn is_editable(&self, key: CellKey) -> bool {
        self.get(key).is_some_and(|c| c.editable)
    }
}

impl GridHost for MemoryGrid {
    type Cell = CellKey;

    fn rows(&self) -> Vec<Vec<CellKey>> {
        self.rows.clone()
    }

    fn row_group_ends(&self) -> Vec<usize> {
        self.group_ends.clone()
    }

    fn declared_span(&self, cell: &CellKey, axis: Axis) -> Option<String> {
        let cell = self.get(*cell)?;
        match axis {
            Axis::Row => cell.row_span.clone(),
            Axis::Column => cell.col_span.clone(),
        }
    }

    fn client_size(&self, cell: &CellKey) -> Size {
        let Some(cell) = self.get(*cell) else {
            return Size::default();
        };
        Size::new(
            cell.content_along(Axis::Column) + cell.padding * 2.0,
            cell.content_along(Axis::Row) + cell.padding * 2.0,
        )
    }

    fn content_size(&self, cell: &CellKey) -> Size {
        let Some(cell) = self.get(*cell) else {
            return Size::default();
        };
        Size::new(cell.content_along(Axis::Column), cell.content_along(Axis::Row))
    }

    fn length(&self, cell: &CellKey, axis: Axis, property: SizeProperty) -> Length {
        self.get(*cell)
            .and_then(|c| c.lengths.get(&(axis, property)).copied())
            .map_or(Length::Unset, Length::Px)
    }

    fn set_length(&mut self, cell: &CellKey, axis: Axis, property: SizeProperty, value: Length) {
        let Some(cell) = self.get_mut(*cell) else {
            return;
        };
        match value {
            Length::Px(px) => {
                cell.lengths.insert((axis, property), px);
            }
            Length::Unset => {
                cell.lengths.remove(&(axis, property));
            }
        }
    }

    fn set_editable(&mut self, cell: &CellKey, editable: bool) {
        if let Some(cell) = self.get_mut(*cell) {
            cell.editable = editable;
        }
    }

    fn set_cursor(&mut self, cell: &CellKey, cursor: &str) {
        if let Some(cell) = self.get_mut(*cell) {
            cell.cursor = Some(cursor.to_string());
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    #[test]
    fn test_content_and_client_size() {
        let mut grid = MemoryGrid::new();
        let keys = grid.push_row([MemoryGrid::cell("A").intrinsic(50.0, 18.0).padding(2.0)]);
        let a = keys[0];

        assert_eq!(grid.content_size(&a), Size::new(50.0, 18.0));
        assert_eq!(grid.client_size(&a), Size::new(54.0, 22.0));
    }

    #[test]
    fn test_explicit_size_respects_min_and_max() {
        let mut grid = MemoryGrid::new();
        let a = grid.push_row([MemoryGrid::cell("A")])[0];

        grid.set_length(&a, Axis::Column, SizeProperty::Size, Length::Px(120.0));
        assert_eq!(grid.content_size(&a).width, 120.0);

        grid.set_length(&a, Axis::Column, SizeProperty::Max, Length::Px(100.0));
        assert_eq!(grid.content_size(&a).width, 100.0);

        grid.set_length(&a, Axis::Column, SizeProperty::Min, Length::Px(110.0));
        assert_eq!(grid.content_size(&a).width, 110.0);

        for property in SizeProperty::ALL {
            grid.set_length(&a, Axis::Column, property, Length::Unset);
        }
        assert_eq!(grid.content_size(&a).width, DEFAULT_CELL_SIZE.width);
        assert_eq!(grid.length(&a, Axis::Column, SizeProperty::Size), Length::Unset);
    }

    #[test]
    fn test_from_spans_labels() {
        let grid = MemoryGrid::from_spans(&[vec![(1, 2)], vec![(1, 1), (1, 1)]]);
        assert_eq!(grid.row_count(), 2);
        let b = grid.find("r1c1").unwrap();
        assert_eq!(grid.declared_span(&b, Axis::Column).as_deref(), Some("1"));
        let a = grid.find("r0c0").unwrap();
        assert_eq!(grid.declared_span(&a, Axis::Column).as_deref(), Some("2"));
    }
}
