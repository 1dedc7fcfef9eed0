//! Specific path types for polygons.

use crate::math::{Box2D, Point};
use crate::PathEvent;

/// A view over a sequence of endpoints forming a polygon.
///
/// ## Example
///
/// ```
/// use crossings_path::polygon::Polygon;
/// use crossings_path::math::point;
///
/// let path = Polygon {
///     points: &[
///         point(0.0, 0.0),
///         point(10.0, 10.0),
///         point(0.0, 10.0),
///     ],
///     closed: true,
/// };
///
/// for event in path.path_events() {
///     // same as iterating a regular `Path` object.
/// }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Polygon<'l> {
    pub points: &'l [Point],
    pub closed: bool,
}

impl<'l> Polygon<'l> {
    /// Returns an iterator of `PathEvent`.
    pub fn path_events(&self) -> PathEvents<'l> {
        PathEvents {
            points: self.points.iter(),
            first: true,
            closed: self.closed,
        }
    }

    /// The bounding box of the polygon's points.
    pub fn bounding_box(&self) -> Box2D {
        if self.points.is_empty() {
            return Box2D::zero();
        }

        Box2D::from_points(self.points.iter())
    }
}

impl<'l> IntoIterator for Polygon<'l> {
    type Item = PathEvent;
    type IntoIter = PathEvents<'l>;

    fn into_iter(self) -> PathEvents<'l> {
        self.path_events()
    }
}

/// An iterator of `PathEvent` over a `Polygon`.
#[derive(Clone)]
pub struct PathEvents<'l> {
    points: core::slice::Iter<'l, Point>,
    first: bool,
    closed: bool,
}

impl<'l> Iterator for PathEvents<'l> {
    type Item = PathEvent;
    fn next(&mut self) -> Option<PathEvent> {
        match self.points.next() {
            Some(&p) => {
                if self.first {
                    self.first = false;
                    Some(PathEvent::MoveTo(p))
                } else {
                    Some(PathEvent::LineTo(p))
                }
            }
            None => {
                if self.closed && !self.first {
                    self.closed = false;
                    Some(PathEvent::Close)
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn event_ids() {
    let poly = Polygon {
        points: &[
            point(0.0, 0.0),
            point(1.0, 1.0),
            point(2.0, 2.0),
            point(3.0, 3.0),
        ],
        closed: true,
    };

    let mut iter = poly.path_events();
    assert_eq!(iter.next(), Some(PathEvent::MoveTo(point(0.0, 0.0))));
    assert_eq!(iter.next(), Some(PathEvent::LineTo(point(1.0, 1.0))));
    assert_eq!(iter.next(), Some(PathEvent::LineTo(point(2.0, 2.0))));
    assert_eq!(iter.next(), Some(PathEvent::LineTo(point(3.0, 3.0))));
    assert_eq!(iter.next(), Some(PathEvent::Close));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn open_polygon() {
    let poly = Polygon {
        points: &[point(0.0, 0.0), point(1.0, 1.0)],
        closed: false,
    };

    let mut iter = poly.path_events();
    assert_eq!(iter.next(), Some(PathEvent::MoveTo(point(0.0, 0.0))));
    assert_eq!(iter.next(), Some(PathEvent::LineTo(point(1.0, 1.0))));
    assert_eq!(iter.next(), None);
}

#[test]
fn empty_polygon() {
    let poly = Polygon {
        points: &[],
        closed: true,
    };

    assert_eq!(poly.path_events().next(), None);
    assert_eq!(poly.bounding_box(), Box2D::zero());
}

#[test]
fn polygon_bounding_box() {
    let poly = Polygon {
        points: &[point(1.0, -2.0), point(4.0, 3.0), point(-1.0, 0.5)],
        closed: true,
    };

    assert_eq!(
        poly.bounding_box(),
        Box2D {
            min: point(-1.0, -2.0),
            max: point(4.0, 3.0)
        }
    );
}
