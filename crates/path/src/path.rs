//! The default path data structure.
//!

use crate::math::{point, Box2D, Point};
use crate::PathEvent;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::iter::{FromIterator, IntoIterator};

/// Enumeration corresponding to the [PathEvent](enum.PathEvent.html) enum
/// without the parameters.
///
/// This is used by the [Path](struct.Path.html) data structure to store path events a tad
/// more efficiently.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub(crate) enum Verb {
    Begin,
    LineTo,
    QuadraticTo,
    CubicTo,
    Close,
}

/// A simple path data structure.
///
/// # Representation
///
/// Paths contain two buffers:
/// - a buffer of commands (Begin, Line, Quadratic, Cubic or Close),
/// - and a buffer of points that can be endpoints or control points.
///
/// The order of storage for points is determined by the sequence of commands.
///
/// ```ascii
///  __________________________
/// |       |      |         |
/// | Begin | Line |Quadratic| ...
/// |_______|______|_________|_
///  ______________________________________
/// |         |         |         |         |
/// |start x,y| to x, y |ctrl x,y | to x, y | ...
/// |_________|_________|_________|_________|_
/// ```
///
/// The bounding box of all points (control points included) is computed when
/// the path is built.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    points: Box<[Point]>,
    verbs: Box<[Verb]>,
    bounds: Box2D,
}

impl Path {
    /// Creates a [Builder](struct.Builder.html) to build a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Creates an Empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path {
            points: Box::new([]),
            verbs: Box::new([]),
            bounds: Box2D::zero(),
        }
    }

    /// Iterates over the commands of the path.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.points[..], &self.verbs[..])
    }

    /// The bounding box of the endpoints and control points of the path.
    ///
    /// Empty paths have a zero-sized bounding box at the origin.
    #[inline]
    pub fn bounding_box(&self) -> Box2D {
        self.bounds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// All endpoints and control points in order of appearance.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points[..]
    }
}

impl Default for Path {
    fn default() -> Self {
        Path::new()
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

impl FromIterator<PathEvent> for Path {
    fn from_iter<T: IntoIterator<Item = PathEvent>>(iter: T) -> Path {
        let mut builder = Path::builder();
        for event in iter.into_iter() {
            builder.path_event(event);
        }

        builder.build()
    }
}

/// Builds path objects.
///
/// A sub-path starts with `begin`. Sub-paths that are not explicitly closed
/// with `close` are left open; hit-tests still treat them as implicitly
/// closed.
#[derive(Clone, Debug)]
pub struct Builder {
    points: Vec<Point>,
    verbs: Vec<Verb>,
    first: Point,
    current: Point,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            points: Vec::new(),
            verbs: Vec::new(),
            first: point(0.0, 0.0),
            current: point(0.0, 0.0),
        }
    }

    pub fn with_capacity(points: usize, edges: usize) -> Self {
        Builder {
            points: Vec::with_capacity(points),
            verbs: Vec::with_capacity(edges),
            first: point(0.0, 0.0),
            current: point(0.0, 0.0),
        }
    }

    /// Starts a new sub-path at a given position.
    pub fn begin(&mut self, at: Point) {
        self.points.push(at);
        self.verbs.push(Verb::Begin);
        self.first = at;
        self.current = at;
    }

    pub fn line_to(&mut self, to: Point) {
        self.points.push(to);
        self.verbs.push(Verb::LineTo);
        self.current = to;
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.points.push(ctrl);
        self.points.push(to);
        self.verbs.push(Verb::QuadraticTo);
        self.current = to;
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.points.push(ctrl1);
        self.points.push(ctrl2);
        self.points.push(to);
        self.verbs.push(Verb::CubicTo);
        self.current = to;
    }

    /// Closes the current sub-path.
    ///
    /// The current position moves back to the start of the sub-path.
    pub fn close(&mut self) {
        self.verbs.push(Verb::Close);
        self.current = self.first;
    }

    /// Ends the current sub-path, closing it if `close` is true.
    pub fn end(&mut self, close: bool) {
        if close {
            self.close();
        }
    }

    /// Appends a path event.
    pub fn path_event(&mut self, event: PathEvent) {
        match event {
            PathEvent::MoveTo(at) => self.begin(at),
            PathEvent::LineTo(to) => self.line_to(to),
            PathEvent::QuadraticTo(ctrl, to) => self.quadratic_bezier_to(ctrl, to),
            PathEvent::CubicTo(ctrl1, ctrl2, to) => self.cubic_bezier_to(ctrl1, ctrl2, to),
            PathEvent::Close => self.close(),
        }
    }

    /// The position the next segment starts from.
    pub fn current_position(&self) -> Point {
        self.current
    }

    pub fn build(self) -> Path {
        let bounds = if self.points.is_empty() {
            Box2D::zero()
        } else {
            Box2D::from_points(self.points.iter())
        };

        Path {
            points: self.points.into_boxed_slice(),
            verbs: self.verbs.into_boxed_slice(),
            bounds,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

/// An iterator of `PathEvent` over a `Path`.
#[derive(Clone)]
pub struct Iter<'l> {
    points: core::slice::Iter<'l, Point>,
    verbs: core::slice::Iter<'l, Verb>,
}

impl<'l> Iter<'l> {
    fn new(points: &'l [Point], verbs: &'l [Verb]) -> Self {
        Iter {
            points: points.iter(),
            verbs: verbs.iter(),
        }
    }

    #[inline]
    fn next_point(&mut self) -> Point {
        // The builder pushes exactly the points each verb consumes.
        match self.points.next() {
            Some(p) => *p,
            None => point(0.0, 0.0),
        }
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    #[inline]
    fn next(&mut self) -> Option<PathEvent> {
        match self.verbs.next() {
            Some(&Verb::Begin) => Some(PathEvent::MoveTo(self.next_point())),
            Some(&Verb::LineTo) => Some(PathEvent::LineTo(self.next_point())),
            Some(&Verb::QuadraticTo) => {
                let ctrl = self.next_point();
                let to = self.next_point();
                Some(PathEvent::QuadraticTo(ctrl, to))
            }
            Some(&Verb::CubicTo) => {
                let ctrl1 = self.next_point();
                let ctrl2 = self.next_point();
                let to = self.next_point();
                Some(PathEvent::CubicTo(ctrl1, ctrl2, to))
            }
            Some(&Verb::Close) => Some(PathEvent::Close),
            None => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.verbs.size_hint()
    }
}

#[test]
fn simple_path() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
    builder.cubic_bezier_to(point(2.0, 2.0), point(-1.0, 2.0), point(0.0, 1.0));
    builder.close();
    let path = builder.build();

    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathEvent::MoveTo(point(0.0, 0.0))));
    assert_eq!(it.next(), Some(PathEvent::LineTo(point(1.0, 0.0))));
    assert_eq!(
        it.next(),
        Some(PathEvent::QuadraticTo(point(2.0, 0.0), point(2.0, 1.0)))
    );
    assert_eq!(
        it.next(),
        Some(PathEvent::CubicTo(
            point(2.0, 2.0),
            point(-1.0, 2.0),
            point(0.0, 1.0)
        ))
    );
    assert_eq!(it.next(), Some(PathEvent::Close));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn path_bounding_box() {
    let mut builder = Path::builder();
    builder.begin(point(-10.0, -3.0));
    builder.line_to(point(0.0, -12.0));
    builder.quadratic_bezier_to(point(3.0, 4.0), point(5.0, 3.0));
    builder.end(true);
    let path = builder.build();

    assert_eq!(
        path.bounding_box(),
        Box2D {
            min: point(-10.0, -12.0),
            max: point(5.0, 4.0)
        },
    );

    assert_eq!(Path::new().bounding_box(), Box2D::zero());
    assert!(Path::new().is_empty());
}

#[test]
fn builder_current_position() {
    let mut builder = Path::builder();
    builder.begin(point(1.0, 1.0));
    builder.line_to(point(3.0, 1.0));
    assert_eq!(builder.current_position(), point(3.0, 1.0));
    builder.close();
    assert_eq!(builder.current_position(), point(1.0, 1.0));
}

#[test]
fn path_from_events() {
    let events = [
        PathEvent::MoveTo(point(0.0, 0.0)),
        PathEvent::LineTo(point(1.0, 0.0)),
        PathEvent::LineTo(point(1.0, 1.0)),
        PathEvent::Close,
    ];
    let path: Path = events.iter().cloned().collect();
    let collected: Vec<PathEvent> = path.iter().collect();

    assert_eq!(&collected[..], &events[..]);
    assert_eq!(path.points().len(), 3);
}

#[test]
fn builder_with_capacity() {
    let mut builder = Builder::with_capacity(4, 3);
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(1.0, 2.0), point(3.0, 2.0), point(4.0, 0.0));
    builder.end(false);
    let path = builder.build();

    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathEvent::MoveTo(point(0.0, 0.0))));
    assert_eq!(
        it.next(),
        Some(PathEvent::CubicTo(
            point(1.0, 2.0),
            point(3.0, 2.0),
            point(4.0, 0.0)
        ))
    );
    assert_eq!(it.next(), None);
    assert_eq!(path.points().len(), 4);
}
