/// Logical (row, col) position in the dense grid model. Not pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Component along `axis`.
    pub const fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row,
            Axis::Column => self.col,
        }
    }
}

/// Resize axis. `Row` changes heights, `Column` changes widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// One side of a cell's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Left,
    Right,
    Bottom,
}

impl Edge {
    /// Axis resized when this edge is dragged.
    pub const fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Row,
            Edge::Left | Edge::Right => Axis::Column,
        }
    }
}

/// A position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate that moves a border on `axis`.
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.y,
            Axis::Column => self.x,
        }
    }
}

/// Box dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }
}

/// A sizing property value as written onto a cell.
///
/// `Unset` is distinct from any pixel value: it means the host falls back to
/// intrinsic sizing (for the DOM, the inline property is removed).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    #[default]
    Unset,
    Px(f64),
}

impl Length {
    pub const fn px(self) -> Option<f64> {
        match self {
            Length::Unset => None,
            Length::Px(v) => Some(v),
        }
    }

    pub const fn is_unset(self) -> bool {
        matches!(self, Length::Unset)
    }
}

/// Which of a cell's sizing properties is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeProperty {
    Size,
    Min,
    Max,
}

impl SizeProperty {
    pub const ALL: [SizeProperty; 3] = [SizeProperty::Size, SizeProperty::Min, SizeProperty::Max];

    /// CSS property name for this property on `axis`.
    pub const fn css_name(self, axis: Axis) -> &'static str {
        match (self, axis) {
            (SizeProperty::Size, Axis::Column) => "width",
            (SizeProperty::Min, Axis::Column) => "min-width",
            (SizeProperty::Max, Axis::Column) => "max-width",
            (SizeProperty::Size, Axis::Row) => "height",
            (SizeProperty::Min, Axis::Row) => "min-height",
            (SizeProperty::Max, Axis::Row) => "max-height",
        }
    }
}
