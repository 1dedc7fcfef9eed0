//! Real roots of quadratic and cubic polynomials.
//!
//! Equations are given as coefficient arrays, lowest degree first:
//! `[c, b, a]` stands for `a·t² + b·t + c = 0`.

use arrayvec::ArrayVec;
use core::f64::consts::PI;
use num_traits::Float;

/// Tolerance used for every comparison against a curve parameter and for
/// merging roots.
pub const DELTA: f64 = 1e-5;

/// Tolerance used to pick the branches of the cubic solver.
pub const ROOT_DELTA: f64 = 1e-10;

/// Up to three real roots.
pub type Roots = ArrayVec<f64, 3>;

/// The result of solving a polynomial equation.
#[derive(Clone, Debug, PartialEq)]
pub enum Solutions {
    /// The distinct real roots of the equation, possibly none.
    Roots(Roots),
    /// All coefficients of degree one and above vanish: the equation has no
    /// usable root.
    Degenerate,
}

impl Solutions {
    /// The roots, or an empty slice for degenerate equations.
    pub fn roots(&self) -> &[f64] {
        match self {
            Solutions::Roots(roots) => roots,
            Solutions::Degenerate => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.roots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots().is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Solutions::Degenerate)
    }
}

/// Returns whether `val` is within `DELTA` of zero (bounds excluded).
#[inline]
pub fn is_zero(val: f64) -> bool {
    -DELTA < val && val < DELTA
}

/// Solves `a·t² + b·t + c = 0` with `eqn = [c, b, a]`.
///
/// A null `a` reduces to the linear case, and to `Solutions::Degenerate` when
/// `b` is null as well.
pub fn solve_quadratic(eqn: [f64; 3]) -> Solutions {
    let [c, b, a] = eqn;
    let mut roots = Roots::new();

    if a == 0.0 {
        if b == 0.0 {
            log::trace!("degenerate equation {:?}", eqn);
            return Solutions::Degenerate;
        }
        roots.push(-c / b);
    } else {
        let d = b * b - 4.0 * a * c;
        if d < 0.0 {
            return Solutions::Roots(roots);
        }
        let d = d.sqrt();
        roots.push((-b + d) / (a * 2.0));
        if d != 0.0 {
            roots.push((-b - d) / (a * 2.0));
        }
    }

    Solutions::Roots(merge_roots(&roots))
}

/// Solves `a·t³ + b·t² + c·t + d = 0` with `eqn = [d, c, b, a]`.
///
/// A null leading coefficient delegates to [`solve_quadratic`].
pub fn solve_cubic(eqn: [f64; 4]) -> Solutions {
    let [c0, c1, c2, c3] = eqn;
    if c3 == 0.0 {
        return solve_quadratic([c0, c1, c2]);
    }

    let a = c2 / c3;
    let b = c1 / c3;
    let c = c0 / c3;
    let mut roots = Roots::new();

    let q = (a * a - 3.0 * b) / 9.0;
    let r = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 54.0;
    let q3 = q * q * q;
    let r2 = r * r;
    let n = -a / 3.0;

    if r2 < q3 {
        // Three real roots.
        let t = (r / q3.sqrt()).acos() / 3.0;
        let p = 2.0 * PI / 3.0;
        let m = -2.0 * q.sqrt();
        roots.push(m * t.cos() + n);
        roots.push(m * (t + p).cos() + n);
        roots.push(m * (t - p).cos() + n);
    } else {
        let mut big_a = (r.abs() + (r2 - q3).sqrt()).powf(1.0 / 3.0);
        if r > 0.0 {
            big_a = -big_a;
        }

        if -ROOT_DELTA < big_a && big_a < ROOT_DELTA {
            roots.push(n);
        } else {
            let big_b = q / big_a;
            roots.push(big_a + big_b + n);

            let delta = r2 - q3;
            if -ROOT_DELTA < delta && delta < ROOT_DELTA {
                roots.push(-(big_a + big_b) / 2.0 + n);
            }
        }
    }

    Solutions::Roots(merge_roots(&roots))
}

/// Collapses roots that are closer than `DELTA`, keeping the last occurrence
/// of each cluster.
fn merge_roots(roots: &[f64]) -> Roots {
    let mut result = Roots::new();
    for (i, &t) in roots.iter().enumerate() {
        if roots[i + 1..].iter().all(|&other| !is_zero(t - other)) {
            result.push(t);
        }
    }

    result
}

#[cfg(test)]
fn assert_roots(solutions: Solutions, expected: &[f64], epsilon: f64) {
    let mut roots: Roots = solutions.roots().iter().cloned().collect();
    roots.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
    if roots.len() != expected.len() {
        std::println!("{:?} != {:?}", roots, expected);
    }
    assert_eq!(roots.len(), expected.len());
    for (root, value) in roots.iter().zip(expected) {
        if (root - value).abs() > epsilon {
            std::println!("{:?} != {:?}", roots, expected);
        }
        assert!((root - value).abs() <= epsilon);
    }
}

#[test]
fn quadratic_roots() {
    // t² - 3t + 2
    assert_roots(solve_quadratic([2.0, -3.0, 1.0]), &[1.0, 2.0], 1e-12);
    // (t - 1)²
    assert_roots(solve_quadratic([1.0, -2.0, 1.0]), &[1.0], 1e-12);
    // t² + 1
    assert_roots(solve_quadratic([1.0, 0.0, 1.0]), &[], 0.0);
    // -4t + 2
    assert_roots(solve_quadratic([2.0, -4.0, 0.0]), &[0.5], 1e-12);
}

#[test]
fn degenerate_quadratic() {
    assert_eq!(solve_quadratic([0.0, 0.0, 0.0]), Solutions::Degenerate);
    assert_eq!(solve_quadratic([3.0, 0.0, 0.0]), Solutions::Degenerate);
    assert!(solve_quadratic([3.0, 0.0, 0.0]).is_empty());
    assert!(!solve_quadratic([1.0, 0.0, 1.0]).is_degenerate());
}

#[test]
fn cubic_three_roots() {
    // t (t - 1) (t - 2)
    assert_roots(solve_cubic([0.0, 2.0, -3.0, 1.0]), &[0.0, 1.0, 2.0], 1e-9);
    // (t + 1) (t - 0.5) (t - 3)
    assert_roots(solve_cubic([1.5, -2.0, -2.5, 1.0]), &[-1.0, 0.5, 3.0], 1e-9);
}

#[test]
fn cubic_single_root() {
    // t³ + t - 2 = (t - 1)(t² + t + 2)
    assert_roots(solve_cubic([-2.0, 1.0, 0.0, 1.0]), &[1.0], 1e-9);
    // (t - 1)³
    assert_roots(solve_cubic([-1.0, 3.0, -3.0, 1.0]), &[1.0], 1e-9);
}

#[test]
fn cubic_falls_back_to_quadratic() {
    assert_roots(solve_cubic([2.0, -3.0, 1.0, 0.0]), &[1.0, 2.0], 1e-12);
    assert_eq!(solve_cubic([1.0, 0.0, 0.0, 0.0]), Solutions::Degenerate);
}

#[test]
fn merged_roots_keep_last() {
    let roots = merge_roots(&[0.5, 0.500001, 0.8]);
    assert_eq!(&roots[..], &[0.500001, 0.8]);

    let roots = merge_roots(&[0.2, 0.2, 0.2]);
    assert_eq!(&roots[..], &[0.2]);
}

#[test]
fn roots_are_distinct() {
    let equations = [
        [-3.0, 7.0, -5.0, 1.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.125, -0.75, 1.5, -1.0],
        [0.0, 1e-7, 0.0, 1.0],
        [4.0, -8.0, 5.0, -1.0],
    ];
    for eqn in &equations {
        let solutions = solve_cubic(*eqn);
        let roots = solutions.roots();
        assert!(roots.len() <= 3);
        for (i, a) in roots.iter().enumerate() {
            assert!(a.is_finite());
            for b in &roots[i + 1..] {
                assert!((a - b).abs() >= DELTA, "{:?}", roots);
            }
        }
    }
}
