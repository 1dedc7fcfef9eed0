use crate::bound::{BoundEntry, BoundTable};
use crate::polynomial::{solve_cubic, solve_quadratic, Solutions, DELTA};
use crate::{vector, Point, Vector};

/// A cubic bézier curve translated so that it starts at the origin.
///
/// With `b` and `c` the control points and `a` the end point relative to the
/// start, the curve is defined by:
/// ```text
/// ∀ t ∈ [0..1],  P(t) = t³ * (a - 3c + 3b) + t² * (3c - 6b) + t * 3b
/// ```
///
/// Used to count the crossings between the curve and a vertical ray. The
/// model only lives for the duration of a single crossing test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicCurve {
    /// End point relative to the start point.
    pub to: Vector,
    /// First control point relative to the start point.
    pub ctrl1: Vector,
    /// Second control point relative to the start point.
    pub ctrl2: Vector,
    // P(t) = t * (t * (t * a + b) + c)
    a: Vector,
    b: Vector,
    c: Vector,
}

impl CubicCurve {
    pub fn new(from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        let to = to - from;
        let ctrl1 = ctrl1 - from;
        let ctrl2 = ctrl2 - from;

        let c = ctrl1 + ctrl1 + ctrl1;
        let b = ctrl2 + ctrl2 + ctrl2 - c - c;
        let a = to - b - c;

        CubicCurve {
            to,
            ctrl1,
            ctrl2,
            a,
            b,
            c,
        }
    }

    /// Sample the x coordinate of the curve at t, relative to the start point.
    #[inline]
    pub fn x(&self, t: f64) -> f64 {
        t * (t * (t * self.a.x + self.b.x) + self.c.x)
    }

    /// Sample the y coordinate of the curve at t, relative to the start point.
    #[inline]
    pub fn y(&self, t: f64) -> f64 {
        t * (t * (t * self.a.y + self.b.y) + self.c.y)
    }

    /// Sample the curve at t, relative to the start point.
    pub fn sample(&self, t: f64) -> Vector {
        vector(self.x(t), self.y(t))
    }

    /// Sample the x coordinate of the curve's derivative at t.
    #[inline]
    pub fn dx(&self, t: f64) -> f64 {
        t * (t * 3.0 * self.a.x + 2.0 * self.b.x) + self.c.x
    }

    /// Sample the x coordinate of the curve's second derivative at t.
    #[inline]
    pub fn ddx(&self, t: f64) -> f64 {
        t * 6.0 * self.a.x + 2.0 * self.b.x
    }

    /// The x direction of the curve when it leaves its start point.
    fn start_direction_x(&self) -> f64 {
        let (b, c, a) = (self.ctrl1.x, self.ctrl2.x, self.to.x);
        if b != 0.0 {
            b
        } else if c != b {
            c - b
        } else {
            a - c
        }
    }

    /// The x direction of the curve when it reaches its end point.
    fn end_direction_x(&self) -> f64 {
        let (b, c, a) = (self.ctrl1.x, self.ctrl2.x, self.to.x);
        if a != c {
            a - c
        } else if c != b {
            c - b
        } else {
            b
        }
    }

    /// Counts the signed crossings of the curve at the parameters `roots`
    /// with a ray pointing towards positive y.
    ///
    /// See [`QuadraticCurve::cross`](../quadratic_bezier/struct.QuadraticCurve.html#method.cross).
    /// When the curve is tangent to the ray the second derivative decides:
    /// an inflection point does not cross, a cusp-like stationary point
    /// crosses in the direction of the chord.
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
                let mut dx = self.dx(t);
                if dx > -DELTA && dx < DELTA {
                    let ddx = self.ddx(t);
                    if ddx < -DELTA || ddx > DELTA {
                        // Inflection point.
                        continue;
                    }
                    dx = self.to.x;
                }
                cross += if dx > 0.0 { 1 } else { -1 };
            }
        }

        cross
    }

    /// Finds the parameters at which the x coordinate of the curve (relative
    /// to the start point) is `px`.
    pub fn solve_point(&self, px: f64) -> Solutions {
        solve_cubic([-px, self.c.x, self.b.x, self.a.x])
    }

    /// Parameters at which the x derivative vanishes.
    pub fn solve_x_extrema(&self) -> Solutions {
        solve_quadratic([self.c.x, 2.0 * self.b.x, 3.0 * self.a.x])
    }

    /// Parameters at which the y derivative vanishes.
    pub fn solve_y_extrema(&self) -> Solutions {
        solve_quadratic([self.c.y, 2.0 * self.b.y, 3.0 * self.a.y])
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
    let curve = CubicCurve::new(
        point(1.0, 1.0),
        point(1.0, 4.0),
        point(4.0, 4.0),
        point(4.0, 1.0),
    );

    assert_eq!(curve.to, vector(3.0, 0.0));
    assert_eq!(curve.sample(0.0), vector(0.0, 0.0));
    assert_eq!(curve.sample(1.0), vector(3.0, 0.0));
    assert_eq!(curve.sample(0.5), vector(1.5, 2.25));
}

#[test]
fn cross_arch() {
    let curve = CubicCurve::new(
        point(0.0, 0.0),
        point(0.0, 3.0),
        point(3.0, 3.0),
        point(3.0, 0.0),
    );
    let solutions = curve.solve_point(1.5);
    // Only one of the roots is on the curve.
    let on_curve = solutions.roots().iter().filter(|t| **t >= 0.0 && **t <= 1.0).count();
    assert_eq!(on_curve, 1);
    assert_eq!(curve.cross(solutions.roots(), 1.0, 1.0), 1);
    assert_eq!(curve.cross(solutions.roots(), 3.0, 3.0), 0);

    let flipped = CubicCurve::new(
        point(3.0, 0.0),
        point(3.0, 3.0),
        point(0.0, 3.0),
        point(0.0, 0.0),
    );
    let solutions = flipped.solve_point(-1.5);
    assert_eq!(flipped.cross(solutions.roots(), 1.0, 1.0), -1);
}

#[test]
fn cross_s_curve_three_times() {
    // An S shape crossed three times by the ray at x = 1, alternating
    // directions.
    let curve = CubicCurve::new(
        point(0.0, 1.0),
        point(6.0, 2.0),
        point(-4.0, 3.0),
        point(2.0, 4.0),
    );
    let solutions = curve.solve_point(1.0);
    assert_eq!(solutions.len(), 3);
    // Every crossing is below the ray's origin at y = 1 (relative 0).
    assert_eq!(curve.cross(solutions.roots(), -0.5, -0.5), 1);
}

#[test]
fn extrema() {
    let curve = CubicCurve::new(
        point(0.0, 0.0),
        point(0.0, 3.0),
        point(3.0, 3.0),
        point(3.0, 0.0),
    );
    // x is stationary at both ends.
    let x_extrema = curve.solve_x_extrema();
    assert_eq!(x_extrema.len(), 2);
    let y_extrema = curve.solve_y_extrema();
    assert_eq!(y_extrema.roots(), &[0.5]);
}

#[test]
fn add_bound_keeps_tag() {
    let curve = CubicCurve::new(
        point(0.0, 0.0),
        point(1.0, 1.0),
        point(2.0, 2.0),
        point(3.0, 3.0),
    );
    let mut table: BoundTable<12> = BoundTable::new();
    curve.add_bound(&mut table, &[0.0, 0.5, 1.0], 0.0, 3.0, 1, false);

    assert_eq!(table.len(), 3);
    assert!(table.entries().iter().all(|entry| entry.tag == 1));
    assert_eq!(table.entries()[1].x, 1.5);
}
