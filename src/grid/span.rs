//! Cells that share a border.
//!
//! When spans misalign across neighbouring rows or columns, one visual border
//! belongs to several cells. All of them resize together so the grid stays
//! rectangular.

use super::index::{CellId, GridIndex};
use crate::types::Edge;

/// Cells whose far boundary is the border `edge` of cell `id`, in document order.
///
/// - `Top`: cells ending at this cell's first row (the row above). Empty on
///   the first row, which means the top border is not draggable.
/// - `Bottom`: cells ending where this cell ends, the cell itself included.
/// - `Left` / `Right`: the column-axis analogs.
pub fn participants<C: Clone + PartialEq>(index: &GridIndex<C>, id: CellId, edge: Edge) -> Vec<CellId> {
    let Some(placement) = index.placement(id) else {
        return Vec::new();
    };
    let axis = edge.axis();
    let line = match edge {
        Edge::Top | Edge::Left => placement.origin.along(axis),
        Edge::Bottom | Edge::Right => placement.end.along(axis),
    };
    index.ending(axis, line)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::memory::{CellKey, MemoryGrid};

    struct Fixture {
        grid: MemoryGrid,
        index: GridIndex<CellKey>,
    }

    impl Fixture {
        fn new(grid: MemoryGrid) -> Self {
            let index = GridIndex::build(&grid);
            Self { grid, index }
        }

        fn id(&self, label: &str) -> CellId {
            self.index.locate(&self.grid.find(label).unwrap()).unwrap()
        }

        fn labels(&self, ids: &[CellId]) -> Vec<String> {
            ids.iter()
                .map(|&id| {
                    let key = self.index.cell(id).unwrap();
                    self.grid.get(*key).unwrap().label.clone()
                })
                .collect()
        }

        fn of(&self, label: &str, edge: Edge) -> Vec<String> {
            self.labels(&participants(&self.index, self.id(label), edge))
        }
    }

    // | A B |
    // | A C |
    // | D E |
    fn tall_left() -> Fixture {
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A").row_span(2), MemoryGrid::cell("B")]);
        grid.push_row([MemoryGrid::cell("C")]);
        grid.push_row([MemoryGrid::cell("D"), MemoryGrid::cell("E")]);
        Fixture::new(grid)
    }

    #[test]
    fn test_bottom_includes_row_mates() {
        let f = tall_left();
        assert_eq!(f.of("A", Edge::Bottom), ["A", "C"]);
        assert_eq!(f.of("C", Edge::Bottom), ["A", "C"]);
        assert_eq!(f.of("B", Edge::Bottom), ["B"]);
    }

    #[test]
    fn test_top_gathers_row_above() {
        let f = tall_left();
        assert_eq!(f.of("D", Edge::Top), ["A", "C"]);
        assert_eq!(f.of("C", Edge::Top), ["B"]);
    }

    #[test]
    fn test_first_row_top_is_not_draggable() {
        let f = tall_left();
        assert!(f.of("A", Edge::Top).is_empty());
        assert!(f.of("B", Edge::Top).is_empty());
    }

    #[test]
    fn test_column_axis() {
        let f = tall_left();
        assert_eq!(f.of("C", Edge::Left), ["A", "D"]);
        assert_eq!(f.of("A", Edge::Right), ["A", "D"]);
        assert_eq!(f.of("B", Edge::Right), ["B", "C", "E"]);
        assert!(f.of("D", Edge::Left).is_empty());
    }

    #[test]
    fn test_colspan_shares_right_border() {
        // | A A |
        // | B C |
        let mut grid = MemoryGrid::new();
        grid.push_row([MemoryGrid::cell("A").col_span(2)]);
        grid.push_row([MemoryGrid::cell("B"), MemoryGrid::cell("C")]);
        let f = Fixture::new(grid);

        assert_eq!(f.of("B", Edge::Right), ["B"]);
        assert_eq!(f.of("C", Edge::Right), ["A", "C"]);
        assert_eq!(f.of("B", Edge::Top), ["A"]);
    }
}
