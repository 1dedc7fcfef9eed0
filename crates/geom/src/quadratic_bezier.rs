use crate::bound::{BoundEntry, BoundTable};
use crate::polynomial::{solve_quadratic, Solutions, DELTA};
use crate::{vector, Point, Vector};
use arrayvec::ArrayVec;

/// A quadratic bézier curve translated so that it starts at the origin.
///
/// With `b` the control point and `a` the end point relative to the start,
/// the curve is defined by:
/// ```text
/// ∀ t ∈ [0..1],  P(t) = t² * (a - 2b) + t * 2b
/// ```
///
/// Used to count the crossings between the curve and a vertical ray. The
/// model only lives for the duration of a single crossing test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticCurve {
    /// End point relative to the start point.
    pub to: Vector,
    /// Control point relative to the start point.
    pub ctrl: Vector,
    // P(t) = t * (t * a + b)
    a: Vector,
    b: Vector,
}

impl QuadraticCurve {
    pub fn new(from: Point, ctrl: Point, to: Point) -> Self {
        let to = to - from;
        let ctrl = ctrl - from;
        let b = ctrl + ctrl;
        let a = to - b;

        QuadraticCurve { to, ctrl, a, b }
    }

    /// Sample the x coordinate of the curve at t, relative to the start point.
    #[inline]
    pub fn x(&self, t: f64) -> f64 {
        t * (t * self.a.x + self.b.x)
    }

    /// Sample the y coordinate of the curve at t, relative to the start point.
    #[inline]
    pub fn y(&self, t: f64) -> f64 {
        t * (t * self.a.y + self.b.y)
    }

    /// Sample the curve at t, relative to the start point.
    pub fn sample(&self, t: f64) -> Vector {
        vector(self.x(t), self.y(t))
    }

    /// Half of the x derivative at t.
    #[inline]
    fn half_dx(&self, t: f64) -> f64 {
        t * self.a.x + self.ctrl.x
    }

    /// The x direction of the curve when it leaves its start point.
    fn start_direction_x(&self) -> f64 {
        if self.ctrl.x != 0.0 {
            self.ctrl.x
        } else {
            self.to.x - self.ctrl.x
        }
    }

    /// The x direction of the curve when it reaches its end point.
    fn end_direction_x(&self) -> f64 {
        if self.to.x != self.ctrl.x {
            self.to.x - self.ctrl.x
        } else {
            self.ctrl.x
        }
    }

    /// Counts the signed crossings of the curve at the parameters `roots`
    /// with a ray pointing towards positive y.
    ///
    /// `py1` and `py2` are the extremities of the ray's origin relative to
    /// the start of the curve (equal when the ray starts at a single point).
    /// Roots at the start of the curve only count when the curve leaves
    /// towards negative x, and roots at the end only when it arrives towards
    /// positive x, so that a ray through a vertex shared by two consecutive
    /// segments is counted once.
    pub fn cross(&self, roots: &[f64], py1: f64, py2: f64) -> i32 {
        let mut cross = 0;

        for &t in roots {
            if t < -DELTA || t > 1.0 + DELTA {
                continue;
            }

            if t < DELTA {
                if py1 < 0.0 && self.start_direction_x() < 0.0 {
                    cross -= 1;
                }
                continue;
            }

            if t > 1.0 - DELTA {
                if py1 < self.to.y && self.end_direction_x() > 0.0 {
                    cross += 1;
                }
                continue;
            }

            if self.y(t) > py2 {
                let dx = self.half_dx(t);
                if dx > -DELTA && dx < DELTA {
                    // Tangent to the ray.
                    continue;
                }
                cross += if dx > 0.0 { 1 } else { -1 };
            }
        }

        cross
    }

    /// Finds the parameters at which the x coordinate of the curve (relative
    /// to the start point) is `px`.
    pub fn solve_point(&self, px: f64) -> Solutions {
        solve_quadratic([-px, self.b.x, self.a.x])
    }

    /// Parameters of the x extremum followed by the y extremum, when the curve
    /// has them.
    ///
    /// The parameters are not clamped to the curve's range.
    pub fn solve_extrema(&self) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        if self.a.x != 0.0 {
            result.push(-self.b.x / (self.a.x + self.a.x));
        }
        if self.a.y != 0.0 {
            result.push(-self.b.y / (self.a.y + self.a.y));
        }

        result
    }

    /// Appends the curve points at `roots` that lie on the curve and between
    /// `min_x` and `max_x` to the bound table.
    ///
    /// Entries are tagged with `tag`, incremented after each added entry when
    /// `increment_tag` is true.
    pub fn add_bound<const N: usize>(
        &self,
        table: &mut BoundTable<N>,
        roots: &[f64],
        min_x: f64,
        max_x: f64,
        mut tag: u32,
        increment_tag: bool,
    ) {
        for &t in roots {
            if t > -DELTA && t < 1.0 + DELTA {
                let x = self.x(t);
                if min_x <= x && x <= max_x {
                    table.push(BoundEntry {
                        t,
                        x,
                        y: self.y(t),
                        tag,
                    });
                    if increment_tag {
                        tag += 1;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn translated_coefficients() {
    let curve = QuadraticCurve::new(point(1.0, 1.0), point(2.0, 3.0), point(3.0, 1.0));

    assert_eq!(curve.to, vector(2.0, 0.0));
    assert_eq!(curve.ctrl, vector(1.0, 2.0));
    assert_eq!(curve.sample(0.0), vector(0.0, 0.0));
    assert_eq!(curve.sample(1.0), vector(2.0, 0.0));
    assert_eq!(curve.sample(0.5), vector(1.0, 1.0));
}

#[test]
fn solve_point_in_the_middle() {
    let curve = QuadraticCurve::new(point(0.0, 0.0), point(1.0, 2.0), point(2.0, 0.0));
    // x(t) = 2t
    let solutions = curve.solve_point(1.0);
    assert_eq!(solutions.roots(), &[0.5]);
}

#[test]
fn cross_arch() {
    // Goes towards positive x, the ray from (1, 0.1) crosses the arch once.
    let curve = QuadraticCurve::new(point(0.0, 0.0), point(1.0, 2.0), point(2.0, 0.0));
    let solutions = curve.solve_point(1.0);
    assert_eq!(curve.cross(solutions.roots(), 0.1, 0.1), 1);

    // Above the arch, nothing to cross.
    assert_eq!(curve.cross(solutions.roots(), 1.5, 1.5), 0);

    let flipped = QuadraticCurve::new(point(2.0, 0.0), point(1.0, 2.0), point(0.0, 0.0));
    let solutions = flipped.solve_point(-1.0);
    assert_eq!(flipped.cross(solutions.roots(), 0.1, 0.1), -1);
}

#[test]
fn cross_endpoints() {
    let curve = QuadraticCurve::new(point(0.0, 0.0), point(1.0, 2.0), point(2.0, 0.0));
    // The start point is ignored when leaving towards positive x.
    assert_eq!(curve.cross(&[0.0], -1.0, -1.0), 0);
    // The end point counts when arriving towards positive x.
    assert_eq!(curve.cross(&[1.0], -1.0, -1.0), 1);
    // But not when the ray starts below it.
    assert_eq!(curve.cross(&[1.0], 1.0, 1.0), 0);
    // Out of range parameters never count.
    assert_eq!(curve.cross(&[-0.5, 1.5], -1.0, -1.0), 0);
}

#[test]
fn extrema() {
    let curve = QuadraticCurve::new(point(0.0, 0.0), point(1.0, 2.0), point(2.0, 0.0));
    // x is linear, y peaks at t = 0.5.
    assert_eq!(&curve.solve_extrema()[..], &[0.5]);

    let curve = QuadraticCurve::new(point(0.0, 0.0), point(2.0, 1.0), point(0.0, 2.0));
    let extrema = curve.solve_extrema();
    assert_eq!(&extrema[..], &[0.5]);
    assert_eq!(curve.x(0.5), 1.0);
}

#[test]
fn add_bound_filters_range() {
    let curve = QuadraticCurve::new(point(0.0, 0.0), point(1.0, 2.0), point(2.0, 0.0));
    let mut table: BoundTable<8> = BoundTable::new();

    curve.add_bound(&mut table, &[0.25, 0.5, 0.75, 1.5], 0.4, 1.1, 2, true);

    assert_eq!(table.len(), 2);
    assert_eq!(table.entries()[0], BoundEntry { t: 0.25, x: 0.5, y: 0.75, tag: 2 });
    assert_eq!(table.entries()[1], BoundEntry { t: 0.5, x: 1.0, y: 1.0, tag: 3 });
}
