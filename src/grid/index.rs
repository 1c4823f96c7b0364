//! Logical coordinates for tables with row and column spans.
//!
//! Cells are placed the way HTML tables place them. Rows are walked in
//! document order and each column keeps the first row it is free again. A cell
//! starts at the first column not reserved by a taller cell from an earlier
//! row, then reserves each column it spans for `rowspan` rows. A row span is
//! clamped to the end of its row group (`thead`, `tbody`, `tfoot`).
//!
//! The result is an explicit [`GridIndex`] value. It is never refreshed behind
//! the owner's back: [`IndexCache`] rebuilds it only after
//! [`IndexCache::invalidate`], which the owner calls on structural edits.

use tracing::debug;

use crate::host::GridHost;
use crate::types::{Axis, GridCoord};

/// Largest column span honoured; larger declarations are clamped.
pub const MAX_COL_SPAN: usize = 1000;

/// Largest row span honoured; larger declarations are clamped.
pub const MAX_ROW_SPAN: usize = 65534;

/// Position of a cell in document order. Only meaningful for the index that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A cell's logical rectangle: `origin` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub origin: GridCoord,
    pub end: GridCoord,
}

impl Placement {
    pub const fn row_span(&self) -> usize {
        self.end.row - self.origin.row
    }

    pub const fn col_span(&self) -> usize {
        self.end.col - self.origin.col
    }

    /// True when `coord` lies inside `[origin, end)`.
    pub const fn covers(&self, coord: GridCoord) -> bool {
        coord.row >= self.origin.row
            && coord.row < self.end.row
            && coord.col >= self.origin.col
            && coord.col < self.end.col
    }
}

/// Derived placement of every cell of one grid.
#[derive(Debug, Clone)]
pub struct GridIndex<C> {
    cells: Vec<C>,
    placements: Vec<Placement>,
    /// Row-major `rows * cols` map from logical coordinate to covering cell
    occupancy: Vec<Option<CellId>>,
    rows: usize,
    cols: usize,
}

impl<C: Clone + PartialEq> GridIndex<C> {
    /// Walk the host's rows and place every cell.
    pub fn build<H: GridHost<Cell = C>>(host: &H) -> Self {
        let rows = host.rows();
        let row_count = rows.len();
        let group_ends = host.row_group_ends();

        let mut next_free_row: Vec<usize> = Vec::new();
        let mut cells = Vec::new();
        let mut placements = Vec::new();

        for (row, row_cells) in rows.into_iter().enumerate() {
            let mut col = 0;
            let group_end = group_ends
                .iter()
                .copied()
                .find(|&end| end > row)
                .map_or(row_count, |end| end.min(row_count));

            for cell in row_cells {
                while is_reserved(&next_free_row, col, row) {
                    col += 1;
                }

                let row_span = normalize_span(host.declared_span(&cell, Axis::Row).as_deref())
                    .min(MAX_ROW_SPAN)
                    .min(group_end - row);
                let col_span = normalize_span(host.declared_span(&cell, Axis::Column).as_deref())
                    .min(MAX_COL_SPAN);

                let origin = GridCoord::new(row, col);
                let bottom = row + row_span;

                for _ in 0..col_span {
                    // A taller cell from an earlier row already owns this column.
                    if is_reserved(&next_free_row, col, row) {
                        break;
                    }
                    if next_free_row.len() <= col {
                        next_free_row.resize(col + 1, 0);
                    }
                    if let Some(slot) = next_free_row.get_mut(col) {
                        *slot = bottom;
                    }
                    col += 1;
                }

                placements.push(Placement {
                    origin,
                    end: GridCoord::new(bottom, col),
                });
                cells.push(cell);
            }
        }

        let cols = next_free_row.len();
        let mut occupancy = vec![None; row_count * cols];
        for (i, placement) in placements.iter().enumerate() {
            for r in placement.origin.row..placement.end.row {
                for c in placement.origin.col..placement.end.col {
                    if let Some(slot) = occupancy.get_mut(r * cols + c) {
                        *slot = Some(CellId(i));
                    }
                }
            }
        }

        debug!(
            rows = row_count,
            cols,
            cells = cells.len(),
            "indexed grid"
        );

        GridIndex {
            cells,
            placements,
            occupancy,
            rows: row_count,
            cols,
        }
    }

    /// Number of indexed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Logical extent of the grid: `(rows, cols)` as an exclusive corner.
    pub fn bounds(&self) -> GridCoord {
        GridCoord::new(self.rows, self.cols)
    }

    /// Cell handle for `id`.
    pub fn cell(&self, id: CellId) -> Option<&C> {
        self.cells.get(id.0)
    }

    pub fn placement(&self, id: CellId) -> Option<Placement> {
        self.placements.get(id.0).copied()
    }

    /// Find the id of a cell handle.
    pub fn locate(&self, cell: &C) -> Option<CellId> {
        self.cells.iter().position(|c| c == cell).map(CellId)
    }

    /// Cell covering a logical coordinate, if any.
    pub fn cell_at(&self, coord: GridCoord) -> Option<CellId> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        self.occupancy
            .get(coord.row * self.cols + coord.col)
            .copied()
            .flatten()
    }

    /// All cells with their placements, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &C, Placement)> + '_ {
        self.cells
            .iter()
            .zip(self.placements.iter().copied())
            .enumerate()
            .map(|(i, (cell, placement))| (CellId(i), cell, placement))
    }

    /// Cells whose rectangle begins at logical line `line` on `axis`.
    pub fn starting(&self, axis: Axis, line: usize) -> Vec<CellId> {
        self.select(|p| p.origin.along(axis) == line)
    }

    /// Cells whose rectangle ends (exclusively) at logical line `line` on `axis`.
    pub fn ending(&self, axis: Axis, line: usize) -> Vec<CellId> {
        self.select(|p| p.end.along(axis) == line)
    }

    pub fn row_starting(&self, row: usize) -> Vec<CellId> {
        self.starting(Axis::Row, row)
    }

    pub fn col_starting(&self, col: usize) -> Vec<CellId> {
        self.starting(Axis::Column, col)
    }

    pub fn row_ending(&self, row: usize) -> Vec<CellId> {
        self.ending(Axis::Row, row)
    }

    pub fn col_ending(&self, col: usize) -> Vec<CellId> {
        self.ending(Axis::Column, col)
    }

    fn select(&self, pred: impl Fn(&Placement) -> bool) -> Vec<CellId> {
        self.placements
            .iter()
            .enumerate()
            .filter(|(_, p)| pred(p))
            .map(|(i, _)| CellId(i))
            .collect()
    }
}

fn is_reserved(next_free_row: &[usize], col: usize, row: usize) -> bool {
    next_free_row.get(col).is_some_and(|&free| free > row)
}

/// Normalize a declared span.
///
/// Parsed like an HTML integer attribute: leading whitespace and an optional
/// sign are skipped, then leading digits are read and anything after them is
/// ignored. Missing, non-numeric, zero and negative values all become 1.
pub fn normalize_span(raw: Option<&str>) -> usize {
    raw.and_then(parse_leading_digits)
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

fn parse_leading_digits(raw: &str) -> Option<usize> {
    let s = raw.trim_start();
    if s.starts_with('-') {
        return None;
    }
    let s = s.strip_prefix('+').unwrap_or(s);
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    let digits = s.get(..len).filter(|d| !d.is_empty())?;
    // Only overflow can fail here.
    Some(digits.parse::<usize>().unwrap_or(usize::MAX))
}

/// Lazily built index owned next to the grid it describes.
#[derive(Debug, Clone)]
pub struct IndexCache<C> {
    index: Option<GridIndex<C>>,
}

impl<C> Default for IndexCache<C> {
    fn default() -> Self {
        Self { index: None }
    }
}

impl<C: Clone + PartialEq> IndexCache<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached index, building it first if it was invalidated.
    pub fn get_or_build<H: GridHost<Cell = C>>(&mut self, host: &H) -> &GridIndex<C> {
        self.index.get_or_insert_with(|| GridIndex::build(host))
    }

    /// Drop the cached index. The next lookup rebuilds it in full.
    pub fn invalidate(&mut self) {
        if self.index.take().is_some() {
            debug!("grid index invalidated");
        }
    }

    pub fn is_valid(&self) -> bool {
        self.index.is_some()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::memory::MemoryGrid;
    use test_case::test_case;

    fn placed(index: &GridIndex<crate::memory::CellKey>, grid: &MemoryGrid, label: &str) -> Placement {
        let key = grid.find(label).unwrap();
        index.placement(index.locate(&key).unwrap()).unwrap()
    }

    fn rect(r0: usize, c0: usize, r1: usize, c1: usize) -> Placement {
        Placement {
            origin: GridCoord::new(r0, c0),
            end: GridCoord::new(r1, c1),
        }
    }

    #[test_case(None, 1 ; "missing")]
    #[test_case(Some("3"), 3 ; "plain")]
    #[test_case(Some("  2"), 2 ; "leading whitespace")]
    #[test_case(Some("+4"), 4 ; "plus sign")]
    #[test_case(Some("2px"), 2 ; "trailing garbage")]
    #[test_case(Some("0"), 1 ; "zero")]
    #[test_case(Some("-3"), 1 ; "negative")]
    #[test_case(Some("abc"), 1 ; "non numeric")]
    #[test_case(Some(""), 1 ; "empty")]
    fn test_normalize_span(raw: Option<&str>, expected: usize) {
        assert_eq!(normalize_span(raw), expected);
    }

    #[test]
    fn test_colspan_header_row() {
        // | A A |
        // | B C |
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A").col_span(2)]);
        grid.push_row([MemoryGrid::cell("B"), MemoryGrid::cell("C")]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "A"), rect(0, 0, 1, 2));
        assert_eq!(placed(&index, &grid, "B"), rect(1, 0, 2, 1));
        assert_eq!(placed(&index, &grid, "C"), rect(1, 1, 2, 2));
        assert_eq!(index.bounds(), GridCoord::new(2, 2));
    }

    #[test]
    fn test_rowspan_reserves_column() {
        // | A B |
        // | A C |
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A").row_span(2), MemoryGrid::cell("B")]);
        grid.push_row([MemoryGrid::cell("C")]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "A"), rect(0, 0, 2, 1));
        assert_eq!(placed(&index, &grid, "C"), rect(1, 1, 2, 2));

        let a = index.locate(&grid.find("A").unwrap()).unwrap();
        assert_eq!(index.cell_at(GridCoord::new(1, 0)), Some(a));
    }

    #[test]
    fn test_rowspan_in_middle_column() {
        // | A B C |
        // | D B E |
        let mut grid = MemoryGrid::new();
        grid.push_row([
            MemoryGrid::cell("A"),
            MemoryGrid::cell("B").row_span(2),
            MemoryGrid::cell("C"),
        ]);
        grid.push_row([MemoryGrid::cell("D"), MemoryGrid::cell("E")]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "D"), rect(1, 0, 2, 1));
        assert_eq!(placed(&index, &grid, "E"), rect(1, 2, 2, 3));
    }

    #[test]
    fn test_rowspan_clamped_to_last_row() {
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A").row_span(5), MemoryGrid::cell("B")]);
        grid.push_row([MemoryGrid::cell("C")]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "A"), rect(0, 0, 2, 1));
        assert_eq!(index.bounds(), GridCoord::new(2, 2));
    }

    #[test]
    fn test_rowspan_stops_at_row_group_end() {
        // thead: | H B |
        // tbody: | C D |
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("H").row_span(3), MemoryGrid::cell("B")]);
        grid.end_row_group();
        grid.push_row([MemoryGrid::cell("C"), MemoryGrid::cell("D")]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "H"), rect(0, 0, 1, 1));
        assert_eq!(placed(&index, &grid, "C"), rect(1, 0, 2, 1));
        assert_eq!(placed(&index, &grid, "D"), rect(1, 1, 2, 2));
    }

    #[test]
    fn test_rowspan_within_second_group_clamped_to_table() {
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("H")]);
        grid.end_row_group();
        grid.push_row([MemoryGrid::cell("A").row_span(9), MemoryGrid::cell("B")]);
        grid.push_row([MemoryGrid::cell("C")]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "A"), rect(1, 0, 3, 1));
        assert_eq!(placed(&index, &grid, "C"), rect(2, 1, 3, 2));
    }

    #[test]
    fn test_colspan_stops_at_reserved_column() {
        // B's colspan of 2 would run into column 1, still held by A.
        // | X A |
        // | B A |
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("X"), MemoryGrid::cell("A").row_span(2)]);
        grid.push_row([MemoryGrid::cell("B").col_span(2)]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "B"), rect(1, 0, 2, 1));
        assert_eq!(placed(&index, &grid, "A"), rect(0, 1, 2, 2));
    }

    #[test]
    fn test_malformed_spans_default_to_one() {
        let mut grid = MemoryGrid::new();
        grid.push_row([
            MemoryGrid::cell("A").raw_col_span("wide"),
            MemoryGrid::cell("B").raw_row_span("-2"),
        ]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "A"), rect(0, 0, 1, 1));
        assert_eq!(placed(&index, &grid, "B"), rect(0, 1, 1, 2));
    }

    #[test]
    fn test_huge_colspan_is_clamped() {
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A").raw_col_span("99999999999999999999999")]);

        let index = GridIndex::build(&grid);
        assert_eq!(placed(&index, &grid, "A").col_span(), MAX_COL_SPAN);
    }

    #[test]
    fn test_ending_and_starting_queries() {
        // | A A B |
        // | C D D |
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A").col_span(2), MemoryGrid::cell("B")]);
        grid.push_row([MemoryGrid::cell("C"), MemoryGrid::cell("D").col_span(2)]);

        let index = GridIndex::build(&grid);
        let id = |label| index.locate(&grid.find(label).unwrap()).unwrap();

        assert_eq!(index.col_ending(2), vec![id("A")]);
        assert_eq!(index.col_ending(3), vec![id("B"), id("D")]);
        assert_eq!(index.col_starting(1), vec![id("D")]);
        assert_eq!(index.row_ending(1), vec![id("A"), id("B")]);
        assert_eq!(index.row_starting(1), vec![id("C"), id("D")]);
        assert!(index.row_ending(0).is_empty());
    }

    #[test]
    fn test_cell_at_outside_bounds() {
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A")]);

        let index = GridIndex::build(&grid);
        assert!(index.cell_at(GridCoord::new(0, 1)).is_none());
        assert!(index.cell_at(GridCoord::new(1, 0)).is_none());
    }

    #[test]
    fn test_ragged_row_leaves_gap() {
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A"), MemoryGrid::cell("B")]);
        grid.push_row([MemoryGrid::cell("C")]);

        let index = GridIndex::build(&grid);
        assert!(index.cell_at(GridCoord::new(1, 1)).is_none());
    }

    #[test]
    fn test_empty_grid() {
        let grid = MemoryGrid::new();
        let index = GridIndex::build(&grid);
        assert!(index.is_empty());
        assert_eq!(index.bounds(), GridCoord::new(0, 0));
    }

    #[test]
    fn test_cache_rebuilds_only_after_invalidate() {
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A")]);

        let mut cache = IndexCache::new();
        assert!(!cache.is_valid());
        assert_eq!(cache.get_or_build(&grid).len(), 1);

        grid.push_row([MemoryGrid::cell("B")]);
        assert_eq!(cache.get_or_build(&grid).len(), 1);

        cache.invalidate();
        assert!(!cache.is_valid());
        assert_eq!(cache.get_or_build(&grid).len(), 2);
        assert!(cache.is_valid());
    }
}
