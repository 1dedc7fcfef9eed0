//! Signed crossings between a single segment and a vertical ray.
//!
//! The ray starts at the query position and goes towards positive y. A
//! segment is "above" the query when its y coordinates are smaller and
//! "below" it when they are larger.
//!
//! Endpoints are attributed with a half-open convention so that a ray going
//! exactly through a vertex shared by two edges is only counted once.

use crate::geom::bound::{CUBIC_BOUND_CAPACITY, QUADRATIC_BOUND_CAPACITY};
use crate::geom::{
    BoundClass, BoundEntry, BoundTable, CubicCurve, QuadraticCurve, Solutions, DELTA,
};
use crate::math::{Box2D, Point};

/// Result of sweeping the ray over a rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum RectCrossing {
    /// No edge meets the rectangle. Signed crossing count of the ray cast from
    /// the rectangle's top-left corner.
    Count(i32),
    /// At least one edge meets the rectangle.
    Intersects,
}

impl RectCrossing {
    #[inline]
    pub fn is_intersecting(&self) -> bool {
        *self == RectCrossing::Intersects
    }

    /// The crossing count, if no edge meets the rectangle.
    #[inline]
    pub fn count(&self) -> Option<i32> {
        match *self {
            RectCrossing::Count(count) => Some(count),
            RectCrossing::Intersects => None,
        }
    }
}

impl Default for RectCrossing {
    fn default() -> Self {
        RectCrossing::Count(0)
    }
}

/// Crossing count of a line segment.
///
/// Returns `0` when the segment is vertical, passes at or above `at`, or does
/// not span its x coordinate.
pub fn cross_line(from: Point, to: Point, at: Point) -> i32 {
    let (x1, y1, x2, y2) = (from.x, from.y, to.x, to.y);
    let (x, y) = (at.x, at.y);

    // LEFT/RIGHT/UP/EMPTY
    if (x < x1 && x < x2) || (x > x1 && x > x2) || (y > y1 && y > y2) || x1 == x2 {
        return 0;
    }

    // DOWN
    if !(y < y1 && y < y2) {
        // The segment is at or above the query point.
        if (y2 - y1) * (x - x1) / (x2 - x1) <= y - y1 {
            return 0;
        }
    }

    if x == x1 {
        return if x1 < x2 { 0 } else { -1 };
    }

    if x == x2 {
        return if x1 < x2 { 1 } else { 0 };
    }

    if x1 < x2 {
        1
    } else {
        -1
    }
}

/// Crossing count of a quadratic bézier segment.
pub fn cross_quadratic(from: Point, ctrl: Point, to: Point, at: Point) -> i32 {
    let (x, y) = (at.x, at.y);

    // LEFT/RIGHT/UP/EMPTY
    if (x < from.x && x < ctrl.x && x < to.x)
        || (x > from.x && x > ctrl.x && x > to.x)
        || (y > from.y && y > ctrl.y && y > to.y)
        || (from.x == ctrl.x && ctrl.x == to.x)
    {
        return 0;
    }

    // DOWN
    if y < from.y && y < ctrl.y && y < to.y && x != from.x && x != to.x {
        return below_direction(from.x, to.x, x);
    }

    let curve = QuadraticCurve::new(from, ctrl, to);
    let (px, py) = (x - from.x, y - from.y);
    let solutions = curve.solve_point(px);

    curve.cross(solutions.roots(), py, py)
}

/// Crossing count of a cubic bézier segment.
pub fn cross_cubic(from: Point, ctrl1: Point, ctrl2: Point, to: Point, at: Point) -> i32 {
    let (x, y) = (at.x, at.y);

    // LEFT/RIGHT/UP/EMPTY
    if (x < from.x && x < ctrl1.x && x < ctrl2.x && x < to.x)
        || (x > from.x && x > ctrl1.x && x > ctrl2.x && x > to.x)
        || (y > from.y && y > ctrl1.y && y > ctrl2.y && y > to.y)
        || (from.x == ctrl1.x && ctrl1.x == ctrl2.x && ctrl2.x == to.x)
    {
        return 0;
    }

    // DOWN
    if y < from.y && y < ctrl1.y && y < ctrl2.y && y < to.y && x != from.x && x != to.x {
        return below_direction(from.x, to.x, x);
    }

    let curve = CubicCurve::new(from, ctrl1, ctrl2, to);
    let (px, py) = (x - from.x, y - from.y);
    let solutions = curve.solve_point(px);

    curve.cross(solutions.roots(), py, py)
}

/// Crossing count of a segment entirely below the ray's origin.
///
/// Such a segment crosses the ray once if `x` is strictly between its
/// endpoints, regardless of its shape in between.
#[inline]
fn below_direction(x1: f64, x2: f64, x: f64) -> i32 {
    if x1 < x2 {
        if x1 < x && x < x2 {
            1
        } else {
            0
        }
    } else if x2 < x && x < x1 {
        -1
    } else {
        0
    }
}

/// Whether a curve never reaches the vertical edges of the rectangle.
///
/// A curve with a constant x coordinate has degenerate solutions on both
/// edges; its endpoints and y extrema still decide the test.
#[inline]
fn misses_both_edges(left: &Solutions, right: &Solutions) -> bool {
    !left.is_degenerate() && !right.is_degenerate() && left.is_empty() && right.is_empty()
}

/// Intersection of a line segment with a rectangle.
pub fn intersect_line(from: Point, to: Point, rect: &Box2D) -> RectCrossing {
    let (x1, y1, x2, y2) = (from.x, from.y, to.x, to.y);
    let (rx1, ry1, rx2, ry2) = (rect.min.x, rect.min.y, rect.max.x, rect.max.y);

    // LEFT/RIGHT/UP
    if (rx2 < x1 && rx2 < x2) || (rx1 > x1 && rx1 > x2) || (ry1 > y1 && ry1 > y2) {
        return RectCrossing::Count(0);
    }

    // DOWN
    if !(ry2 < y1 && ry2 < y2) {
        if x1 == x2 {
            return RectCrossing::Intersects;
        }

        // Clip the segment to the rectangle's x range.
        let (bx1, bx2) = if x1 < x2 {
            (x1.max(rx1), x2.min(rx2))
        } else {
            (x2.max(rx1), x1.min(rx2))
        };
        let k = (y2 - y1) / (x2 - x1);
        let by1 = k * (bx1 - x1) + y1;
        let by2 = k * (bx2 - x1) + y1;

        // The clipped segment is above the rectangle.
        if by1 < ry1 && by2 < ry1 {
            return RectCrossing::Count(0);
        }

        // Unless it is entirely below, it meets the rectangle.
        if !(by1 > ry2 && by2 > ry2) {
            return RectCrossing::Intersects;
        }
    }

    if x1 == x2 {
        return RectCrossing::Count(0);
    }

    if rx1 == x1 {
        return RectCrossing::Count(if x1 < x2 { 0 } else { -1 });
    }

    if rx1 == x2 {
        return RectCrossing::Count(if x1 < x2 { 1 } else { 0 });
    }

    RectCrossing::Count(below_direction(x1, x2, rx1))
}

/// Intersection of a quadratic bézier segment with a rectangle.
pub fn intersect_quadratic(from: Point, ctrl: Point, to: Point, rect: &Box2D) -> RectCrossing {
    let (rx1, ry1, rx2, ry2) = (rect.min.x, rect.min.y, rect.max.x, rect.max.y);

    // LEFT/RIGHT/UP
    if (rx2 < from.x && rx2 < ctrl.x && rx2 < to.x)
        || (rx1 > from.x && rx1 > ctrl.x && rx1 > to.x)
        || (ry1 > from.y && ry1 > ctrl.y && ry1 > to.y)
    {
        return RectCrossing::Count(0);
    }

    // DOWN
    if ry2 < from.y && ry2 < ctrl.y && ry2 < to.y && rx1 != from.x && rx1 != to.x {
        return RectCrossing::Count(below_direction(from.x, to.x, rx1));
    }

    let curve = QuadraticCurve::new(from, ctrl, to);
    let px1 = rx1 - from.x;
    let py1 = ry1 - from.y;
    let px2 = rx2 - from.x;
    let py2 = ry2 - from.y;

    let left = curve.solve_point(px1);
    let right = curve.solve_point(px2);

    if misses_both_edges(&left, &right) {
        return RectCrossing::Count(0);
    }

    let min_x = px1 - DELTA;
    let max_x = px2 + DELTA;
    let mut bound: BoundTable<QUADRATIC_BOUND_CAPACITY> = BoundTable::new();
    curve.add_bound(&mut bound, left.roots(), min_x, max_x, 0, false);
    curve.add_bound(&mut bound, right.roots(), min_x, max_x, 1, false);
    curve.add_bound(&mut bound, &curve.solve_extrema(), min_x, max_x, 2, true);
    if rx1 < from.x && from.x < rx2 {
        bound.push(BoundEntry {
            t: 0.0,
            x: 0.0,
            y: 0.0,
            tag: 4,
        });
    }
    if rx1 < to.x && to.x < rx2 {
        bound.push(BoundEntry {
            t: 1.0,
            x: curve.to.x,
            y: curve.to.y,
            tag: 5,
        });
    }

    match bound.classify(py1, py2) {
        BoundClass::Clear => {
            log::debug!("quadratic curve clears {:?}", rect);
            RectCrossing::Count(0)
        }
        BoundClass::Crossing => {
            log::debug!("quadratic curve intersects {:?}", rect);
            RectCrossing::Intersects
        }
        BoundClass::Undetermined => RectCrossing::Count(curve.cross(left.roots(), py1, py2)),
    }
}

/// Intersection of a cubic bézier segment with a rectangle.
pub fn intersect_cubic(
    from: Point,
    ctrl1: Point,
    ctrl2: Point,
    to: Point,
    rect: &Box2D,
) -> RectCrossing {
    let (rx1, ry1, rx2, ry2) = (rect.min.x, rect.min.y, rect.max.x, rect.max.y);

    // LEFT/RIGHT/UP
    if (rx2 < from.x && rx2 < ctrl1.x && rx2 < ctrl2.x && rx2 < to.x)
        || (rx1 > from.x && rx1 > ctrl1.x && rx1 > ctrl2.x && rx1 > to.x)
        || (ry1 > from.y && ry1 > ctrl1.y && ry1 > ctrl2.y && ry1 > to.y)
    {
        return RectCrossing::Count(0);
    }

    // DOWN
    if ry2 < from.y
        && ry2 < ctrl1.y
        && ry2 < ctrl2.y
        && ry2 < to.y
        && rx1 != from.x
        && rx1 != to.x
    {
        return RectCrossing::Count(below_direction(from.x, to.x, rx1));
    }

    let curve = CubicCurve::new(from, ctrl1, ctrl2, to);
    let px1 = rx1 - from.x;
    let py1 = ry1 - from.y;
    let px2 = rx2 - from.x;
    let py2 = ry2 - from.y;

    let left = curve.solve_point(px1);
    let right = curve.solve_point(px2);

    if misses_both_edges(&left, &right) {
        return RectCrossing::Count(0);
    }

    let min_x = px1 - DELTA;
    let max_x = px2 + DELTA;
    let mut bound: BoundTable<CUBIC_BOUND_CAPACITY> = BoundTable::new();
    curve.add_bound(&mut bound, left.roots(), min_x, max_x, 0, false);
    curve.add_bound(&mut bound, right.roots(), min_x, max_x, 1, false);
    curve.add_bound(&mut bound, curve.solve_x_extrema().roots(), min_x, max_x, 2, true);
    curve.add_bound(&mut bound, curve.solve_y_extrema().roots(), min_x, max_x, 4, true);
    if rx1 < from.x && from.x < rx2 {
        bound.push(BoundEntry {
            t: 0.0,
            x: 0.0,
            y: 0.0,
            tag: 6,
        });
    }
    if rx1 < to.x && to.x < rx2 {
        bound.push(BoundEntry {
            t: 1.0,
            x: curve.to.x,
            y: curve.to.y,
            tag: 7,
        });
    }

    match bound.classify(py1, py2) {
        BoundClass::Clear => {
            log::debug!("cubic curve clears {:?}", rect);
            RectCrossing::Count(0)
        }
        BoundClass::Crossing => {
            log::debug!("cubic curve intersects {:?}", rect);
            RectCrossing::Intersects
        }
        BoundClass::Undetermined => RectCrossing::Count(curve.cross(left.roots(), py1, py2)),
    }
}

#[cfg(test)]
use crate::math::{point, rect};

#[test]
fn line_crossings() {
    let from = point(0.0, 1.0);
    let to = point(2.0, 1.0);

    // Below the point, going right.
    assert_eq!(cross_line(from, to, point(1.0, 0.0)), 1);
    // Going left.
    assert_eq!(cross_line(to, from, point(1.0, 0.0)), -1);
    // Above the point.
    assert_eq!(cross_line(from, to, point(1.0, 2.0)), 0);
    // On the segment.
    assert_eq!(cross_line(from, to, point(1.0, 1.0)), 0);
    // Left and right of the segment.
    assert_eq!(cross_line(from, to, point(-1.0, 0.0)), 0);
    assert_eq!(cross_line(from, to, point(3.0, 0.0)), 0);
    // Vertical segments never cross a vertical ray.
    assert_eq!(cross_line(point(1.0, 1.0), point(1.0, 5.0), point(1.0, 0.0)), 0);
}

#[test]
fn line_vertex_tie_break() {
    // A ray through the shared vertex of two edges going the same way is
    // counted once.
    let a = point(0.0, 2.0);
    let b = point(1.0, 3.0);
    let c = point(2.0, 2.0);
    let at = point(1.0, 0.0);
    assert_eq!(cross_line(a, b, at) + cross_line(b, c, at), 1);
    assert_eq!(cross_line(c, b, at) + cross_line(b, a, at), -1);

    // Edges going right own their end, edges going left own their start.
    assert_eq!(cross_line(point(1.0, 2.0), point(3.0, 2.0), at), 0);
    assert_eq!(cross_line(point(3.0, 2.0), point(1.0, 2.0), at), 0);
    assert_eq!(cross_line(point(-1.0, 2.0), point(1.0, 2.0), at), 1);
    assert_eq!(cross_line(point(1.0, 2.0), point(-1.0, 2.0), at), -1);
}

#[test]
fn line_crossing_is_stable_under_small_moves() {
    let from = point(0.0, 0.0);
    let to = point(10.0, 5.0);

    for &dx in &[-0.001, 0.0, 0.001] {
        // Slightly above the segment, the ray hits it.
        assert_eq!(cross_line(from, to, point(5.0 + dx, 2.4)), 1);
        assert_eq!(cross_line(to, from, point(5.0 + dx, 2.4)), -1);
        // Slightly below, it does not.
        assert_eq!(cross_line(from, to, point(5.0 + dx, 2.6)), 0);
    }
}

#[test]
fn quadratic_crossings() {
    let from = point(0.0, 0.0);
    let ctrl = point(1.0, 2.0);
    let to = point(2.0, 0.0);

    // Under the arch.
    assert_eq!(cross_quadratic(from, ctrl, to, point(1.0, 0.1)), 1);
    assert_eq!(cross_quadratic(to, ctrl, from, point(1.0, 0.1)), -1);
    // Above the arch.
    assert_eq!(cross_quadratic(from, ctrl, to, point(1.0, 1.5)), 0);
    // Entirely below the point, taking the fast path.
    assert_eq!(cross_quadratic(from, ctrl, to, point(1.0, -1.0)), 1);
    // Outside of the x range.
    assert_eq!(cross_quadratic(from, ctrl, to, point(3.0, 0.1)), 0);
    // Degenerate vertical curve.
    assert_eq!(
        cross_quadratic(point(1.0, 0.0), point(1.0, 3.0), point(1.0, 5.0), point(1.0, -1.0)),
        0
    );
}

#[test]
fn quadratic_crossing_twice() {
    // The curve goes right, then comes back left under the point.
    let from = point(0.0, 1.0);
    let ctrl = point(4.0, 2.0);
    let to = point(0.0, 3.0);

    assert_eq!(cross_quadratic(from, ctrl, to, point(1.0, 0.0)), 0);
    assert_eq!(cross_quadratic(from, ctrl, to, point(1.0, 1.5)), -1);
    assert_eq!(cross_quadratic(from, ctrl, to, point(1.0, 4.0)), 0);
}

#[test]
fn cubic_crossings() {
    let from = point(0.0, 0.0);
    let ctrl1 = point(0.0, 4.0);
    let ctrl2 = point(4.0, 4.0);
    let to = point(4.0, 0.0);

    assert_eq!(cross_cubic(from, ctrl1, ctrl2, to, point(2.0, 1.0)), 1);
    assert_eq!(cross_cubic(to, ctrl2, ctrl1, from, point(2.0, 1.0)), -1);
    assert_eq!(cross_cubic(from, ctrl1, ctrl2, to, point(2.0, 3.5)), 0);
    assert_eq!(cross_cubic(from, ctrl1, ctrl2, to, point(2.0, -1.0)), 1);
    assert_eq!(cross_cubic(from, ctrl1, ctrl2, to, point(5.0, 1.0)), 0);
}

#[test]
fn cubic_s_curve_crossings() {
    // Crosses x = 2 three times.
    let from = point(0.0, 0.0);
    let ctrl1 = point(6.0, 2.0);
    let ctrl2 = point(-2.0, 4.0);
    let to = point(4.0, 6.0);

    assert_eq!(cross_cubic(from, ctrl1, ctrl2, to, point(2.0, -1.0)), 1);
    assert_eq!(cross_cubic(from, ctrl1, ctrl2, to, point(2.0, 7.0)), 0);
}

#[test]
fn line_rect_intersections() {
    let r = rect(1.0, 1.0, 2.0, 2.0);

    // Through the rectangle, axis aligned.
    assert_eq!(intersect_line(point(0.0, 2.0), point(4.0, 2.0), &r), RectCrossing::Intersects);
    assert_eq!(intersect_line(point(2.0, 0.0), point(2.0, 4.0), &r), RectCrossing::Intersects);
    // Diagonal.
    assert_eq!(intersect_line(point(0.0, 0.0), point(4.0, 4.0), &r), RectCrossing::Intersects);
    // Degenerate segment inside the rectangle.
    assert_eq!(intersect_line(point(2.0, 2.0), point(2.0, 2.0), &r), RectCrossing::Intersects);
    // Fully inside.
    assert_eq!(intersect_line(point(1.5, 1.5), point(2.5, 2.5), &r), RectCrossing::Intersects);

    // Below the rectangle.
    assert_eq!(intersect_line(point(0.0, 5.0), point(4.0, 5.0), &r), RectCrossing::Count(1));
    assert_eq!(intersect_line(point(4.0, 5.0), point(0.0, 5.0), &r), RectCrossing::Count(-1));
    // Above, left and right of the rectangle.
    assert_eq!(intersect_line(point(0.0, 0.0), point(4.0, 0.0), &r), RectCrossing::Count(0));
    assert_eq!(intersect_line(point(0.0, 0.0), point(0.5, 4.0), &r), RectCrossing::Count(0));
    assert_eq!(intersect_line(point(5.0, 0.0), point(5.0, 4.0), &r), RectCrossing::Count(0));
    // Diagonal passing by the top-right corner.
    assert_eq!(intersect_line(point(2.0, 0.0), point(4.0, 2.0), &r), RectCrossing::Intersects);
    assert_eq!(intersect_line(point(2.5, 0.0), point(4.0, 0.5), &r), RectCrossing::Count(0));
}

#[test]
fn quadratic_rect_intersections() {
    let from = point(0.0, 0.0);
    let ctrl = point(2.0, 4.0);
    let to = point(4.0, 0.0);

    // The top of the arch (y = 2) goes through the rectangle.
    assert_eq!(
        intersect_quadratic(from, ctrl, to, &rect(1.5, 1.5, 1.0, 1.0)),
        RectCrossing::Intersects
    );
    // The rectangle is under the arch.
    assert_eq!(
        intersect_quadratic(from, ctrl, to, &rect(1.5, 2.5, 1.0, 1.0)),
        RectCrossing::Count(0)
    );
    // The rectangle is above the arch, between the two legs.
    assert_eq!(
        intersect_quadratic(from, ctrl, to, &rect(1.5, 0.5, 1.0, 0.5)),
        RectCrossing::Count(1)
    );
    // Left of the curve.
    assert_eq!(
        intersect_quadratic(from, ctrl, to, &rect(-3.0, 0.0, 1.0, 1.0)),
        RectCrossing::Count(0)
    );
    // Entirely below the rectangle.
    assert_eq!(
        intersect_quadratic(from, ctrl, to, &rect(1.0, -3.0, 1.0, 1.0)),
        RectCrossing::Count(1)
    );
}

#[test]
fn cubic_rect_intersections() {
    let from = point(0.0, 0.0);
    let ctrl1 = point(0.0, 4.0);
    let ctrl2 = point(4.0, 4.0);
    let to = point(4.0, 0.0);

    assert_eq!(
        intersect_cubic(from, ctrl1, ctrl2, to, &rect(1.5, 2.5, 1.0, 1.0)),
        RectCrossing::Intersects
    );
    assert_eq!(
        intersect_cubic(from, ctrl1, ctrl2, to, &rect(1.5, 0.5, 1.0, 1.0)),
        RectCrossing::Count(1)
    );
    assert_eq!(
        intersect_cubic(from, ctrl1, ctrl2, to, &rect(1.5, 3.5, 1.0, 1.0)),
        RectCrossing::Count(0)
    );
    // The rectangle's row is entirely out of the curve's reach.
    assert_eq!(
        intersect_cubic(from, ctrl1, ctrl2, to, &rect(6.0, 0.0, 1.0, 1.0)),
        RectCrossing::Count(0)
    );
    assert_eq!(
        intersect_cubic(from, ctrl1, ctrl2, to, &rect(1.0, 10.0, 2.0, 1.0)),
        RectCrossing::Count(0)
    );
}

#[test]
fn vertical_curve_rect_intersections() {
    let r = rect(1.0, 1.0, 2.0, 2.0);
    let from = point(2.0, 0.0);
    let to = point(2.0, 10.0);

    assert_eq!(intersect_line(from, to, &r), RectCrossing::Intersects);
    assert_eq!(
        intersect_quadratic(from, point(2.0, 5.0), to, &r),
        RectCrossing::Intersects
    );
    assert_eq!(
        intersect_quadratic(to, point(2.0, 5.0), from, &r),
        RectCrossing::Intersects
    );
    assert_eq!(
        intersect_cubic(from, point(2.0, 3.0), point(2.0, 6.0), to, &r),
        RectCrossing::Intersects
    );
    assert_eq!(
        intersect_cubic(to, point(2.0, 6.0), point(2.0, 3.0), from, &r),
        RectCrossing::Intersects
    );

    // Vertical curves below the rectangle do not cross the ray.
    let below = rect(1.0, -5.0, 2.0, 2.0);
    assert_eq!(
        intersect_quadratic(from, point(2.0, 5.0), to, &below),
        RectCrossing::Count(0)
    );
    assert_eq!(
        intersect_cubic(from, point(2.0, 3.0), point(2.0, 6.0), to, &below),
        RectCrossing::Count(0)
    );
}

#[test]
fn rect_crossing_accessors() {
    assert!(RectCrossing::Intersects.is_intersecting());
    assert!(!RectCrossing::Count(2).is_intersecting());
    assert_eq!(RectCrossing::Count(2).count(), Some(2));
    assert_eq!(RectCrossing::Intersects.count(), None);
    assert_eq!(RectCrossing::default(), RectCrossing::Count(0));
}
