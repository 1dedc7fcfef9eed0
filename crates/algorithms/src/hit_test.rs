//! Determine whether a point is inside a path, or whether a rectangle
//! intersects it.

use crate::crossing::{
    cross_cubic, cross_line, cross_quadratic, intersect_cubic, intersect_line,
    intersect_quadratic, RectCrossing,
};
use crate::math::{point, Box2D, Point};
use crate::path::{FillRule, PathEvent, Shape};
use crate::HitTestError;

/// Parameters for the hit-testing functions.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct HitTestOptions {
    /// How the crossing number is interpreted.
    ///
    /// Default value: `NonZero`.
    pub fill_rule: FillRule,

    /// Whether the shape queries reject positions and rectangles outside of
    /// the shape's bounding box before walking its edges.
    ///
    /// The answer is the same either way for well-formed shapes.
    ///
    /// Default value: `true`.
    pub check_bounds: bool,
}

impl HitTestOptions {
    /// Default fill rule.
    pub const DEFAULT_FILL_RULE: FillRule = FillRule::NonZero;

    pub const DEFAULT: Self = HitTestOptions {
        fill_rule: Self::DEFAULT_FILL_RULE,
        check_bounds: true,
    };

    #[inline]
    pub fn non_zero() -> Self {
        Self::DEFAULT
    }

    #[inline]
    pub fn even_odd() -> Self {
        Self::DEFAULT.with_fill_rule(FillRule::EvenOdd)
    }

    #[inline]
    pub const fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    #[inline]
    pub const fn with_bounds_check(mut self, check: bool) -> Self {
        self.check_bounds = check;
        self
    }
}

impl Default for HitTestOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Whether a crossing number is inside according to the non-zero rule.
#[inline]
pub fn is_inside_non_zero(crossings: i32) -> bool {
    FillRule::NonZero.is_in(crossings)
}

/// Whether a crossing number is inside according to the even-odd rule.
#[inline]
pub fn is_inside_even_odd(crossings: i32) -> bool {
    FillRule::EvenOdd.is_in(crossings)
}

/// Compute the crossing number of a given position with respect to the path.
///
/// Sub-paths that are not closed are implicitly closed with a line. If the
/// position is exactly on an endpoint of the path, the result is `0`.
pub fn cross_path<Iter>(path: Iter, at: Point) -> i32
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut crossings = 0;
    let mut first = point(0.0, 0.0);
    let mut current = first;

    for evt in path {
        match evt {
            PathEvent::MoveTo(to) => {
                if current != first {
                    crossings += cross_line(current, first, at);
                }
                first = to;
                current = to;
            }
            PathEvent::LineTo(to) => {
                crossings += cross_line(current, to, at);
                current = to;
            }
            PathEvent::QuadraticTo(ctrl, to) => {
                crossings += cross_quadratic(current, ctrl, to, at);
                current = to;
            }
            PathEvent::CubicTo(ctrl1, ctrl2, to) => {
                crossings += cross_cubic(current, ctrl1, ctrl2, to, at);
                current = to;
            }
            PathEvent::Close => {
                if current != first {
                    crossings += cross_line(current, first, at);
                }
                current = first;
            }
        }

        if at == current {
            log::trace!("{:?} is an endpoint of the path", at);
            return 0;
        }
    }

    if current != first {
        crossings += cross_line(current, first, at);
    }

    crossings
}

/// Compute the crossing number of a given position with respect to a shape.
///
/// Positions outside of the shape's bounding box have a crossing number of
/// `0`. The bounding box excludes its maximum edges.
pub fn cross_shape<S: Shape>(shape: &S, at: Point) -> i32 {
    if !shape.bounding_box().contains(at) {
        return 0;
    }

    cross_path(shape.path_events(), at)
}

/// Sweep the crossing ray over a rectangle.
///
/// Returns `RectCrossing::Intersects` as soon as an edge of the path meets the
/// rectangle, otherwise the crossing number of the rectangle's top-left
/// corner.
pub fn intersect_path<Iter>(path: Iter, rect: &Box2D) -> RectCrossing
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut crossings = 0;
    let mut first = point(0.0, 0.0);
    let mut current = first;

    for evt in path {
        let edge = match evt {
            PathEvent::MoveTo(to) => {
                let closing = if current != first {
                    intersect_line(current, first, rect)
                } else {
                    RectCrossing::Count(0)
                };
                first = to;
                current = to;
                closing
            }
            PathEvent::LineTo(to) => {
                let edge = intersect_line(current, to, rect);
                current = to;
                edge
            }
            PathEvent::QuadraticTo(ctrl, to) => {
                let edge = intersect_quadratic(current, ctrl, to, rect);
                current = to;
                edge
            }
            PathEvent::CubicTo(ctrl1, ctrl2, to) => {
                let edge = intersect_cubic(current, ctrl1, ctrl2, to, rect);
                current = to;
                edge
            }
            PathEvent::Close => {
                let closing = if current != first {
                    intersect_line(current, first, rect)
                } else {
                    RectCrossing::Count(0)
                };
                current = first;
                closing
            }
        };

        match edge {
            RectCrossing::Intersects => {
                return RectCrossing::Intersects;
            }
            RectCrossing::Count(n) => {
                crossings += n;
            }
        }
    }

    if current != first {
        match intersect_line(current, first, rect) {
            RectCrossing::Intersects => {
                return RectCrossing::Intersects;
            }
            RectCrossing::Count(n) => {
                crossings += n;
            }
        }
    }

    RectCrossing::Count(crossings)
}

/// Sweep the crossing ray over a rectangle, with respect to a shape.
///
/// Returns `RectCrossing::Count(0)` when the rectangle does not overlap the
/// shape's bounding box. Boxes that only touch, and empty boxes, do not
/// overlap.
pub fn intersect_shape<S: Shape>(shape: &S, rect: &Box2D) -> RectCrossing {
    let bounds = shape.bounding_box();
    if bounds.is_empty() || rect.is_empty() || !bounds.intersects(rect) {
        return RectCrossing::Count(0);
    }

    intersect_path(shape.path_events(), rect)
}

/// Returns whether the point is inside the path.
pub fn hit_test_path<Iter>(point: &Point, path: Iter, options: &HitTestOptions) -> bool
where
    Iter: IntoIterator<Item = PathEvent>,
{
    options.fill_rule.is_in(cross_path(path, *point))
}

/// Returns whether the point is inside the shape.
pub fn hit_test_shape<S: Shape>(shape: &S, point: &Point, options: &HitTestOptions) -> bool {
    let crossings = if options.check_bounds {
        cross_shape(shape, *point)
    } else {
        cross_path(shape.path_events(), *point)
    };

    options.fill_rule.is_in(crossings)
}

/// Returns whether the path intersects the rectangle.
///
/// A rectangle entirely inside the path intersects it.
pub fn path_intersects_rect<Iter>(path: Iter, rect: &Box2D, options: &HitTestOptions) -> bool
where
    Iter: IntoIterator<Item = PathEvent>,
{
    if rect.is_empty() {
        return false;
    }

    match intersect_path(path, rect) {
        RectCrossing::Intersects => true,
        RectCrossing::Count(n) => options.fill_rule.is_in(n),
    }
}

/// Returns whether the shape intersects the rectangle.
///
/// A rectangle entirely inside the shape intersects it.
pub fn shape_intersects_rect<S: Shape>(shape: &S, rect: &Box2D, options: &HitTestOptions) -> bool {
    if rect.is_empty() {
        return false;
    }

    match intersect_shape_with(shape, rect, options) {
        RectCrossing::Intersects => true,
        RectCrossing::Count(n) => options.fill_rule.is_in(n),
    }
}

/// Returns whether the rectangle is entirely inside the shape.
pub fn shape_contains_rect<S: Shape>(shape: &S, rect: &Box2D, options: &HitTestOptions) -> bool {
    if rect.is_empty() {
        return false;
    }

    match intersect_shape_with(shape, rect, options) {
        RectCrossing::Intersects => false,
        RectCrossing::Count(n) => options.fill_rule.is_in(n),
    }
}

fn intersect_shape_with<S: Shape>(shape: &S, rect: &Box2D, options: &HitTestOptions) -> RectCrossing {
    if options.check_bounds {
        intersect_shape(shape, rect)
    } else {
        intersect_path(shape.path_events(), rect)
    }
}

/// Like `hit_test_path`, rejecting positions with a NaN coordinate.
pub fn try_hit_test_path<Iter>(
    point: &Point,
    path: Iter,
    options: &HitTestOptions,
) -> Result<bool, HitTestError>
where
    Iter: IntoIterator<Item = PathEvent>,
{
    check_position(point)?;

    Ok(hit_test_path(point, path, options))
}

/// Like `hit_test_shape`, rejecting positions with a NaN coordinate.
pub fn try_hit_test_shape<S: Shape>(
    shape: &S,
    point: &Point,
    options: &HitTestOptions,
) -> Result<bool, HitTestError> {
    check_position(point)?;

    Ok(hit_test_shape(shape, point, options))
}

/// Like `path_intersects_rect`, rejecting rectangles with a NaN coordinate
/// or a negative size.
pub fn try_path_intersects_rect<Iter>(
    path: Iter,
    rect: &Box2D,
    options: &HitTestOptions,
) -> Result<bool, HitTestError>
where
    Iter: IntoIterator<Item = PathEvent>,
{
    check_rect(rect)?;

    Ok(path_intersects_rect(path, rect, options))
}

fn check_position(point: &Point) -> Result<(), HitTestError> {
    if point.x.is_nan() || point.y.is_nan() {
        return Err(HitTestError::PositionIsNaN);
    }

    Ok(())
}

fn check_rect(rect: &Box2D) -> Result<(), HitTestError> {
    if rect.min.x.is_nan() || rect.min.y.is_nan() || rect.max.x.is_nan() || rect.max.y.is_nan() {
        return Err(HitTestError::RectangleIsNaN);
    }

    if rect.max.x < rect.min.x || rect.max.y < rect.min.y {
        return Err(HitTestError::NegativeRectangleSize);
    }

    Ok(())
}

#[cfg(test)]
use crate::math::rect;
#[cfg(test)]
use crate::path::{Path, Polygon};

#[cfg(test)]
fn square(builder: &mut crate::path::Builder, x: f64, y: f64, size: f64, clockwise: bool) {
    builder.begin(point(x, y));
    if clockwise {
        builder.line_to(point(x + size, y));
        builder.line_to(point(x + size, y + size));
        builder.line_to(point(x, y + size));
    } else {
        builder.line_to(point(x, y + size));
        builder.line_to(point(x + size, y + size));
        builder.line_to(point(x + size, y));
    }
    builder.close();
}

#[test]
fn unit_square() {
    let mut builder = Path::builder();
    square(&mut builder, 0.0, 0.0, 1.0, true);
    let path = builder.build();

    assert_eq!(cross_path(&path, point(0.5, 0.5)), -1);
    assert_eq!(cross_path(&path, point(2.0, 2.0)), 0);
    assert_eq!(cross_path(&path, point(0.5, -1.0)), 0);

    assert!(hit_test_path(&point(0.5, 0.5), &path, &HitTestOptions::non_zero()));
    assert!(hit_test_path(&point(0.5, 0.5), &path, &HitTestOptions::even_odd()));
    assert!(!hit_test_path(&point(2.0, 2.0), &path, &HitTestOptions::non_zero()));
    assert!(!hit_test_path(&point(2.0, 2.0), &path, &HitTestOptions::even_odd()));
}

#[test]
fn winding_rules() {
    // Two nested squares turning the same way.
    let mut builder = Path::builder();
    square(&mut builder, 0.0, 0.0, 10.0, true);
    square(&mut builder, 3.0, 3.0, 4.0, true);
    let path = builder.build();

    let hole = point(5.0, 5.0);
    assert_eq!(cross_path(&path, hole), -2);
    assert!(hit_test_path(&hole, &path, &HitTestOptions::non_zero()));
    assert!(!hit_test_path(&hole, &path, &HitTestOptions::even_odd()));

    let ring = point(1.0, 5.0);
    assert_eq!(cross_path(&path, ring), -1);
    assert!(hit_test_path(&ring, &path, &HitTestOptions::non_zero()));
    assert!(hit_test_path(&ring, &path, &HitTestOptions::even_odd()));

    // Turning the other way, the inner square is a hole for both rules.
    let mut builder = Path::builder();
    square(&mut builder, 0.0, 0.0, 10.0, true);
    square(&mut builder, 3.0, 3.0, 4.0, false);
    let path = builder.build();

    assert_eq!(cross_path(&path, hole), 0);
    assert!(!hit_test_path(&hole, &path, &HitTestOptions::non_zero()));
    assert!(!hit_test_path(&hole, &path, &HitTestOptions::even_odd()));
}

#[test]
fn predicates() {
    assert!(is_inside_non_zero(1));
    assert!(is_inside_non_zero(-2));
    assert!(!is_inside_non_zero(0));
    assert!(is_inside_even_odd(-1));
    assert!(is_inside_even_odd(3));
    assert!(!is_inside_even_odd(2));
    assert!(!is_inside_even_odd(0));
}

#[test]
fn implicit_close() {
    // The same triangle, closed or not.
    let points = [point(0.0, 0.0), point(4.0, 0.0), point(2.0, 4.0)];
    let closed = Polygon {
        points: &points,
        closed: true,
    };
    let open = Polygon {
        points: &points,
        closed: false,
    };

    let at = point(2.0, 1.0);
    assert_eq!(cross_path(closed.path_events(), at), -1);
    assert_eq!(cross_path(open.path_events(), at), -1);

    let outside = point(0.5, 3.0);
    assert_eq!(cross_path(closed.path_events(), outside), 0);
    assert_eq!(cross_path(open.path_events(), outside), 0);
}

#[test]
fn open_sub_path_closed_by_move_to() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(4.0, 0.0));
    builder.line_to(point(2.0, 4.0));
    builder.begin(point(10.0, 0.0));
    builder.line_to(point(14.0, 0.0));
    builder.line_to(point(12.0, 4.0));
    let path = builder.build();

    assert_eq!(cross_path(&path, point(2.0, 1.0)), -1);
    assert_eq!(cross_path(&path, point(12.0, 1.0)), -1);
    assert_eq!(cross_path(&path, point(7.0, 1.0)), 0);
}

#[test]
fn vertex_is_not_inside() {
    let mut builder = Path::builder();
    square(&mut builder, 0.0, 0.0, 2.0, true);
    let path = builder.build();

    assert_eq!(cross_path(&path, point(2.0, 0.0)), 0);
    assert_eq!(cross_path(&path, point(0.0, 0.0)), 0);
    assert!(!hit_test_path(&point(2.0, 2.0), &path, &HitTestOptions::non_zero()));
}

#[test]
fn curved_path() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.quadratic_bezier_to(point(1.0, 2.0), point(2.0, 0.0));
    builder.close();
    let path = builder.build();

    assert_eq!(cross_path(&path, point(1.0, 0.1)), 1);
    assert_eq!(cross_path(&path, point(1.0, 1.5)), 0);
    assert_eq!(cross_path(&path, point(1.0, -0.5)), 0);

    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(0.0, 4.0), point(4.0, 4.0), point(4.0, 0.0));
    builder.close();
    let path = builder.build();

    assert_eq!(cross_path(&path, point(2.0, 1.0)), 1);
    assert_eq!(cross_path(&path, point(0.5, 1.0)), 1);
    assert_eq!(cross_path(&path, point(2.0, 3.5)), 0);
}

#[test]
fn shape_bounds_check() {
    let points = [point(0.0, 0.0), point(4.0, 0.0), point(4.0, 4.0), point(0.0, 4.0)];
    let poly = Polygon {
        points: &points,
        closed: true,
    };

    assert_eq!(cross_shape(&poly, point(2.0, 2.0)), -1);
    assert_eq!(cross_shape(&poly, point(5.0, 2.0)), 0);
    // Half-open bounds.
    assert_eq!(cross_shape(&poly, point(4.0, 2.0)), 0);

    let options = HitTestOptions::DEFAULT;
    assert!(hit_test_shape(&poly, &point(2.0, 2.0), &options));
    assert!(!hit_test_shape(&poly, &point(-1.0, 2.0), &options));
    assert!(hit_test_shape(
        &poly,
        &point(2.0, 2.0),
        &options.with_bounds_check(false)
    ));
}

#[test]
fn rectangle_shape() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let options = HitTestOptions::DEFAULT;

    assert!(hit_test_shape(&r, &point(5.0, 5.0), &options));
    assert!(!hit_test_shape(&r, &point(15.0, 5.0), &options));

    assert!(shape_contains_rect(&r, &rect(2.0, 2.0, 2.0, 2.0), &options));
    assert!(!shape_contains_rect(&r, &rect(8.0, 8.0, 4.0, 4.0), &options));
    assert!(shape_intersects_rect(&r, &rect(8.0, 8.0, 4.0, 4.0), &options));
    assert!(shape_intersects_rect(&r, &rect(2.0, 2.0, 2.0, 2.0), &options));
    assert!(!shape_intersects_rect(&r, &rect(12.0, 2.0, 2.0, 2.0), &options));
    // Touching boxes do not overlap.
    assert!(!shape_intersects_rect(&r, &rect(10.0, 2.0, 2.0, 2.0), &options));
    // Empty rectangles never intersect nor are contained.
    assert!(!shape_intersects_rect(&r, &rect(2.0, 2.0, 0.0, 2.0), &options));
    assert!(!shape_contains_rect(&r, &rect(2.0, 2.0, 0.0, 2.0), &options));
}

#[test]
fn path_rect_intersections() {
    let mut builder = Path::builder();
    square(&mut builder, 0.0, 0.0, 10.0, true);
    let path = builder.build();

    // Inside.
    assert_eq!(intersect_path(&path, &rect(2.0, 2.0, 2.0, 2.0)), RectCrossing::Count(-1));
    // Across an edge.
    assert_eq!(intersect_path(&path, &rect(8.0, 2.0, 4.0, 2.0)), RectCrossing::Intersects);
    // Outside.
    assert_eq!(intersect_path(&path, &rect(12.0, 2.0, 2.0, 2.0)), RectCrossing::Count(0));
    assert_eq!(intersect_path(&path, &rect(2.0, 12.0, 2.0, 2.0)), RectCrossing::Count(0));
    assert_eq!(intersect_path(&path, &rect(2.0, -4.0, 2.0, 2.0)), RectCrossing::Count(0));

    let options = HitTestOptions::DEFAULT;
    assert!(path_intersects_rect(&path, &rect(2.0, 2.0, 2.0, 2.0), &options));
    assert!(path_intersects_rect(&path, &rect(8.0, 2.0, 4.0, 2.0), &options));
    assert!(!path_intersects_rect(&path, &rect(12.0, 2.0, 2.0, 2.0), &options));
}

#[test]
fn curved_path_rect_intersections() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(0.0, 4.0), point(4.0, 4.0), point(4.0, 0.0));
    builder.close();
    let path = builder.build();

    assert_eq!(intersect_shape(&path, &rect(1.5, 0.5, 1.0, 1.0)), RectCrossing::Count(1));
    assert_eq!(intersect_shape(&path, &rect(1.5, 2.5, 1.0, 1.0)), RectCrossing::Intersects);
    assert_eq!(intersect_shape(&path, &rect(1.5, 3.5, 1.0, 1.0)), RectCrossing::Count(0));
    assert_eq!(intersect_shape(&path, &rect(6.0, 0.0, 1.0, 1.0)), RectCrossing::Count(0));
}

#[test]
fn checked_queries() {
    let mut builder = Path::builder();
    square(&mut builder, 0.0, 0.0, 1.0, true);
    let path = builder.build();
    let options = HitTestOptions::DEFAULT;

    assert_eq!(try_hit_test_path(&point(0.5, 0.5), &path, &options), Ok(true));
    assert_eq!(
        try_hit_test_path(&point(f64::NAN, 0.5), &path, &options),
        Err(HitTestError::PositionIsNaN)
    );
    assert_eq!(
        try_hit_test_shape(&path, &point(0.5, f64::NAN), &options),
        Err(HitTestError::PositionIsNaN)
    );
    assert_eq!(try_hit_test_shape(&path, &point(0.5, 0.5), &options), Ok(true));

    let nan_rect = Box2D {
        min: point(0.0, f64::NAN),
        max: point(1.0, 1.0),
    };
    assert_eq!(
        try_path_intersects_rect(&path, &nan_rect, &options),
        Err(HitTestError::RectangleIsNaN)
    );

    let negative = Box2D {
        min: point(1.0, 1.0),
        max: point(0.0, 2.0),
    };
    assert_eq!(
        try_path_intersects_rect(&path, &negative, &options),
        Err(HitTestError::NegativeRectangleSize)
    );
    assert_eq!(
        try_path_intersects_rect(&path, &rect(0.25, 0.25, 0.5, 0.5), &options),
        Ok(true)
    );
}

#[test]
fn default_options() {
    assert_eq!(HitTestOptions::default(), HitTestOptions::DEFAULT);
    assert_eq!(HitTestOptions::default().fill_rule, FillRule::NonZero);
    assert!(HitTestOptions::default().check_bounds);
    assert_eq!(HitTestOptions::even_odd().fill_rule, FillRule::EvenOdd);
}
