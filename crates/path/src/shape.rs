//! Geometric objects that can be hit-tested.

use crate::math::{point, Box2D};
use crate::path::{Iter, Path};
use crate::polygon::{self, Polygon};
use crate::PathEvent;

/// A closed geometric object that knows its bounds and can describe its
/// outline as a sequence of path events.
///
/// The bounding box must contain every endpoint and control point produced by
/// `path_events`, so that a query outside of it can be answered without
/// walking the outline.
pub trait Shape {
    type PathEvents<'l>: Iterator<Item = PathEvent>
    where
        Self: 'l;

    /// Axis-aligned bounds of the shape.
    fn bounding_box(&self) -> Box2D;

    /// Iterates over the outline of the shape.
    fn path_events(&self) -> Self::PathEvents<'_>;
}

impl Shape for Path {
    type PathEvents<'l> = Iter<'l>;

    fn bounding_box(&self) -> Box2D {
        Path::bounding_box(self)
    }

    fn path_events(&self) -> Iter {
        self.iter()
    }
}

impl<'a> Shape for Polygon<'a> {
    type PathEvents<'l> = polygon::PathEvents<'a> where Self: 'l;

    fn bounding_box(&self) -> Box2D {
        Polygon::bounding_box(self)
    }

    fn path_events(&self) -> polygon::PathEvents<'a> {
        Polygon::path_events(self)
    }
}

/// Rectangles are closed shapes made of four edges.
impl Shape for Box2D {
    type PathEvents<'l> = core::array::IntoIter<PathEvent, 5>;

    fn bounding_box(&self) -> Box2D {
        *self
    }

    fn path_events(&self) -> Self::PathEvents<'_> {
        let events = [
            PathEvent::MoveTo(self.min),
            PathEvent::LineTo(point(self.max.x, self.min.y)),
            PathEvent::LineTo(self.max),
            PathEvent::LineTo(point(self.min.x, self.max.y)),
            PathEvent::Close,
        ];

        IntoIterator::into_iter(events)
    }
}

#[cfg(test)]
use alloc::vec::Vec;

#[test]
fn rectangle_outline() {
    let rect = crate::math::rect(1.0, 2.0, 3.0, 4.0);
    let events: Vec<PathEvent> = Shape::path_events(&rect).collect();

    assert_eq!(
        &events[..],
        &[
            PathEvent::MoveTo(point(1.0, 2.0)),
            PathEvent::LineTo(point(4.0, 2.0)),
            PathEvent::LineTo(point(4.0, 6.0)),
            PathEvent::LineTo(point(1.0, 6.0)),
            PathEvent::Close,
        ][..]
    );
    assert_eq!(Shape::bounding_box(&rect), rect);
}

#[test]
fn polygon_shape() {
    let points = [point(0.0, 0.0), point(2.0, 0.0), point(1.0, 3.0)];
    let poly = Polygon {
        points: &points,
        closed: true,
    };

    let events: Vec<PathEvent> = Shape::path_events(&poly).collect();
    assert_eq!(events.len(), 4);
    assert_eq!(
        Shape::bounding_box(&poly),
        Box2D {
            min: point(0.0, 0.0),
            max: point(2.0, 3.0)
        }
    );
}

#[test]
fn path_shape() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(0.0, 5.0), point(5.0, 5.0), point(5.0, 0.0));
    builder.close();
    let path = builder.build();

    assert_eq!(Shape::path_events(&path).count(), 3);
    assert_eq!(
        Shape::bounding_box(&path),
        Box2D {
            min: point(0.0, 0.0),
            max: point(5.0, 5.0)
        }
    );
}
