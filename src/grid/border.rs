//! Border hit testing.
//!
//! Table borders sit outside a cell's padding box, so a pointer over a border
//! reports an offset outside `[0, width) x [0, height)` relative to the cell.

use crate::types::{Edge, PointerEvent, Size};

/// Edge of the cell the pointer is over, if any.
///
/// `client` is the cell's padding box. Only events aimed directly at the cell
/// count; an event that bubbled up from nested content never hits a border.
/// When a corner is outside on two sides, the first of top, left, right,
/// bottom wins.
pub fn classify(client: Size, event: &PointerEvent) -> Option<Edge> {
    if !event.on_target {
        return None;
    }

    let offset = event.offset;
    if offset.y < 0.0 {
        Some(Edge::Top)
    } else if offset.x < 0.0 {
        Some(Edge::Left)
    } else if offset.x >= client.width {
        Some(Edge::Right)
    } else if offset.y >= client.height {
        Some(Edge::Bottom)
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::Point;
    use test_case::test_case;

    const CELL: Size = Size {
        width: 100.0,
        height: 20.0,
    };

    fn at(x: f64, y: f64) -> PointerEvent {
        PointerEvent::primary(Point::default(), Point::new(x, y))
    }

    #[test_case(50.0, -1.0, Some(Edge::Top) ; "above")]
    #[test_case(-1.0, 10.0, Some(Edge::Left) ; "left of")]
    #[test_case(100.0, 10.0, Some(Edge::Right) ; "right boundary is outside")]
    #[test_case(50.0, 20.0, Some(Edge::Bottom) ; "bottom boundary is outside")]
    #[test_case(0.0, 0.0, None ; "top left inside")]
    #[test_case(99.5, 19.5, None ; "bottom right inside")]
    #[test_case(-1.0, -1.0, Some(Edge::Top) ; "top left corner prefers top")]
    #[test_case(101.0, 21.0, Some(Edge::Right) ; "bottom right corner prefers right")]
    #[test_case(-1.0, 21.0, Some(Edge::Left) ; "bottom left corner prefers left")]
    fn test_classify(x: f64, y: f64, expected: Option<Edge>) {
        assert_eq!(classify(CELL, &at(x, y)), expected);
    }

    #[test]
    fn test_nested_target_never_hits() {
        assert_eq!(classify(CELL, &at(50.0, -1.0).off_target()), None);
    }
}
