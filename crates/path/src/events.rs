use crate::math::Point;

/// A command of a path.
///
/// Segments only carry their control points and destination: the start of a
/// segment is the destination of the previous event, and `Close` goes back to
/// the position of the last `MoveTo`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    MoveTo(Point),
    LineTo(Point),
    QuadraticTo(Point, Point),
    CubicTo(Point, Point, Point),
    Close,
}

impl PathEvent {
    /// The position reached at the end of this event, or `None` for `Close`.
    pub fn destination(self) -> Option<Point> {
        match self {
            PathEvent::MoveTo(to) => Some(to),
            PathEvent::LineTo(to) => Some(to),
            PathEvent::QuadraticTo(_, to) => Some(to),
            PathEvent::CubicTo(_, _, to) => Some(to),
            PathEvent::Close => None,
        }
    }

    /// Whether the event adds an edge to the path.
    pub fn is_edge(&self) -> bool {
        match self {
            PathEvent::MoveTo(..) => false,
            _ => true,
        }
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn event_destinations() {
    let a = point(1.0, 2.0);
    let b = point(3.0, 4.0);
    let c = point(5.0, 6.0);

    assert_eq!(PathEvent::MoveTo(a).destination(), Some(a));
    assert_eq!(PathEvent::LineTo(a).destination(), Some(a));
    assert_eq!(PathEvent::QuadraticTo(a, b).destination(), Some(b));
    assert_eq!(PathEvent::CubicTo(a, b, c).destination(), Some(c));
    assert_eq!(PathEvent::Close.destination(), None);

    assert!(!PathEvent::MoveTo(a).is_edge());
    assert!(PathEvent::LineTo(a).is_edge());
    assert!(PathEvent::QuadraticTo(a, b).is_edge());
    assert!(PathEvent::CubicTo(a, b, c).is_edge());
    assert!(PathEvent::Close.is_edge());
}
